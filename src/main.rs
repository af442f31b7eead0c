#![windows_subsystem = "windows"]
//! UPI Pay Desk - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod device;
mod launcher;
mod lookup;
mod router;
mod settings;
mod theme;
mod types;
mod ui;
mod upi;
mod utils;
mod validation;

use anyhow::Context as _;
use app::{App, PageAction};
use constants::*;
use device::DeviceClass;
use eframe::egui;
use router::Route;
use settings::{PayeeConfig, Settings};
use tracing::{error, info};
use upi::UpiLinkBuilder;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,upi_pay_desk=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> anyhow::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "UPI Pay Desk starting");

    let settings = Settings::load(&data_dir);

    // Payee details are required before any link can be built
    let payee = match PayeeConfig::resolve(&settings) {
        Ok(payee) => {
            info!(payee_id = %payee.payee_id, "Payee configuration loaded");
            payee
        }
        Err(e) => {
            error!(error = %e, "Invalid payee configuration");
            return Err(e.into());
        }
    };

    let device = DeviceClass::from_user_agent(settings.resolve_user_agent().as_deref());
    info!(device = ?device, "Device class detected");

    let start_path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    // Load saved window position/size
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(560.0, 760.0)))
        .with_min_inner_size([480.0, 600.0])
        .with_title(APP_NAME);

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let links = UpiLinkBuilder::new(payee);
            let mut app = App::new(cc, links, device, &start_path, runtime, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI event loop failed: {e}"))
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Mount the current page, then collect background results
        self.sync_route(ctx);
        self.poll_lookup();
        self.poll_launcher(ctx);

        let mut action = None;

        // Alt+Left: history back (when no dialog is open)
        if self.popup.is_none()
            && self.notice.is_none()
            && ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft))
        {
            action = Some(PageAction::Back);
        }

        egui::TopBottomPanel::top("address_bar")
            .exact_height(theme::ADDRESS_BAR_HEIGHT)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                if let Some(a) = self.render_address_bar(ui) {
                    action = Some(a);
                }
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let route = self.navigator.route().clone();
                        let page_action = match route {
                            Route::Pay { .. } => {
                                self.render_pay_form(ui);
                                None
                            }
                            Route::Pending => self.render_pending(ui),
                            Route::Success => self.render_success(ui),
                            Route::Fail => self.render_fail(ui),
                            Route::NotFound => self.render_not_found(ui),
                        };
                        if page_action.is_some() {
                            action = page_action;
                        }
                    });
            });

        if let Some(a) = self.render_payment_popup(ctx) {
            action = Some(a);
        }

        // Rendered last so it stacks above the popup
        self.render_notice(ctx);

        if let Some(action) = action {
            self.apply_action(action);
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.teardown_page();
        self.save_settings();
    }
}

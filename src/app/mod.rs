//! App module - contains the main application state and page lifecycle

mod form;
mod modals;
mod popup;
mod views;

pub(crate) use form::PayForm;
pub(crate) use popup::{PaymentPopup, QrCache};

use crate::constants::*;
use crate::device::DeviceClass;
use crate::launcher::LaunchSequencer;
use crate::lookup::{LookupPoll, OrderLookup};
use crate::router::{NavigationState, Navigator, Route};
use crate::settings::Settings;
use crate::theme;
use crate::upi::UpiLinkBuilder;
use eframe::egui;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) links: UpiLinkBuilder,
    pub(crate) device: DeviceClass,
    pub(crate) navigator: Navigator,
    // Generation of the page currently mounted
    pub(crate) mounted: Option<u64>,
    // Page state (torn down on every navigation)
    pub(crate) form: PayForm,
    pub(crate) lookup: Option<OrderLookup>,
    // Cancelled when the page is torn down; background work takes a child
    pub(crate) page_cancel: CancellationToken,
    pub(crate) popup: Option<PaymentPopup>,
    pub(crate) launcher: LaunchSequencer,
    pub(crate) qr_cache: QrCache,
    // Blocking notice (alert)
    pub(crate) notice: Option<String>,
    // Address bar
    pub(crate) address: String,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

/// Where a page asked to go after this frame
pub(crate) enum PageAction {
    Navigate(String, NavigationState),
    Back,
}

// ============================================================================
// APP INITIALIZATION & PAGE LIFECYCLE
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        links: UpiLinkBuilder,
        device: DeviceClass,
        start_path: &str,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons as a fallback in the default proportional family
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::from_parts(links, device, start_path, runtime, settings, data_dir)
    }

    /// Everything but the egui styling, so page logic can run without a window.
    pub(crate) fn from_parts(
        links: UpiLinkBuilder,
        device: DeviceClass,
        start_path: &str,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        let navigator = Navigator::new(start_path);
        let address = navigator.path().to_string();

        Self {
            links,
            device,
            navigator,
            mounted: None,
            form: PayForm::default(),
            lookup: None,
            page_cancel: CancellationToken::new(),
            popup: None,
            launcher: LaunchSequencer::new(APP_FALLBACK_DELAY),
            qr_cache: QrCache::default(),
            notice: None,
            address,
            runtime,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.save(&self.data_dir);
    }

    pub(crate) fn apply_action(&mut self, action: PageAction) {
        match action {
            PageAction::Navigate(path, state) => self.navigator.navigate(&path, state),
            PageAction::Back => {
                self.navigator.back();
            }
        }
    }

    /// Tear down the previous page and mount the current one when the
    /// navigator has moved since the last frame.
    pub(crate) fn sync_route(&mut self, ctx: &egui::Context) {
        let generation = self.navigator.generation();
        if self.mounted == Some(generation) {
            return;
        }
        self.teardown_page();
        self.mounted = Some(generation);
        self.address = self.navigator.path().to_string();

        if let Route::Pay { order_id } = self.navigator.route().clone() {
            self.form = PayForm::for_order(order_id.clone());
            if let Some(order_id) = order_id {
                let repaint = ctx.clone();
                self.lookup = Some(OrderLookup::spawn(
                    self.runtime.handle(),
                    order_id,
                    ORDER_LOOKUP_DELAY,
                    self.page_cancel.child_token(),
                    move || repaint.request_repaint(),
                ));
            }
        }
        debug!(path = %self.navigator.path(), "Page mounted");
    }

    pub(crate) fn teardown_page(&mut self) {
        self.page_cancel.cancel();
        self.page_cancel = CancellationToken::new();
        self.lookup = None;
        self.launcher.reset();
        self.popup = None;
        self.qr_cache.clear();
        self.form = PayForm::default();
    }

    pub(crate) fn poll_lookup(&mut self) {
        let Some(lookup) = self.lookup.as_mut() else {
            return;
        };
        match lookup.poll() {
            LookupPoll::Pending => {}
            LookupPoll::Ready(details) => {
                self.form.apply_order(details);
                self.lookup = None;
            }
            LookupPoll::Cancelled => {
                debug!(order_id = lookup.order_id(), "Order lookup ended without a result");
                self.form.loading = false;
                self.lookup = None;
            }
        }
    }

    /// Fire the deep-link fallback once its deadline passes; otherwise make
    /// sure a frame is scheduled for the deadline.
    pub(crate) fn poll_launcher(&mut self, ctx: &egui::Context) {
        let now = std::time::Instant::now();
        if let Some(url) = self.launcher.poll(now) {
            info!("App link not handled in time, opening generic UPI link");
            crate::utils::open_link(&url);
        } else if let Some(wait) = self.launcher.time_until_fallback(now) {
            ctx.request_repaint_after(wait);
        }
    }

    /// Top bar: back button plus an editable path, standing in for the
    /// browser's history and location bar.
    pub(crate) fn render_address_bar(&mut self, ui: &mut egui::Ui) -> Option<PageAction> {
        let mut action = None;
        ui.horizontal_centered(|ui| {
            let back = ui.add_enabled(
                self.navigator.can_go_back(),
                theme::button(egui_phosphor::regular::ARROW_LEFT),
            );
            if back.clicked() {
                action = Some(PageAction::Back);
            }

            ui.label(egui::RichText::new(egui_phosphor::regular::LOCK).color(theme::STATUS_SUCCESS));
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.address)
                    .hint_text("/")
                    .desired_width(ui.available_width() - 60.0),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let go = ui.add(theme::button("Go")).clicked();
            if submitted || go {
                action = Some(PageAction::Navigate(self.address.clone(), NavigationState::default()));
            }
        });
        action
    }
}

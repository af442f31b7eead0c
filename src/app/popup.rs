//! "Pay with UPI" popup shown after a valid form submission

use super::{App, PageAction};
use crate::constants::QR_SIZE;
use crate::launcher::LaunchState;
use crate::theme;
use crate::types::UpiApp;
use crate::ui::components::wide_button;
use crate::utils::{open_link, rasterize_qr};
use crate::validation::format_amount;
use eframe::egui;
use egui_phosphor::regular as icons;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PaymentPopup {
    /// Mobile: generic "Open UPI Link" view instead of the app buttons
    pub show_generic: bool,
    /// Desktop: QR tab selected (otherwise the UPI ID tab)
    pub qr_tab: bool,
    pub last_app: Option<UpiApp>,
}

impl Default for PaymentPopup {
    fn default() -> Self {
        Self {
            show_generic: false,
            qr_tab: true,
            last_app: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PopupAction {
    Close,
    LaunchApp(UpiApp),
    LaunchGeneric,
    CopyPayeeId,
    Proceed,
}

/// Last QR rendered, keyed by its URI. A failed render is kept too, so
/// each URI is rasterized and logged at most once.
#[derive(Default)]
pub(crate) struct QrCache {
    entry: Option<(String, Option<egui::TextureHandle>)>,
}

impl QrCache {
    pub fn get_or_render(
        &mut self,
        uri: &str,
        render: impl FnOnce(&str) -> Option<egui::TextureHandle>,
    ) -> Option<egui::TextureHandle> {
        if let Some((cached, texture)) = &self.entry {
            if cached == uri {
                return texture.clone();
            }
        }
        let texture = render(uri);
        self.entry = Some((uri.to_string(), texture.clone()));
        texture
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}

fn render_qr_texture(ctx: &egui::Context, uri: &str) -> Option<egui::TextureHandle> {
    match rasterize_qr(uri, (QR_SIZE * 2.0) as u32) {
        Ok((pixels, w, h)) => Some(ctx.load_texture(
            "upi_qr",
            egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
            egui::TextureOptions::NEAREST,
        )),
        Err(e) => {
            warn!(error = %e, uri_len = uri.len(), "Failed to render QR code");
            None
        }
    }
}

fn app_icon(app: UpiApp) -> &'static str {
    match app {
        UpiApp::GPay => icons::GOOGLE_LOGO,
        UpiApp::PhonePe => icons::WALLET,
        UpiApp::Paytm => icons::CREDIT_CARD,
        UpiApp::AmazonPay => icons::SHOPPING_CART,
    }
}

impl App {
    pub(crate) fn render_payment_popup(&mut self, ctx: &egui::Context) -> Option<PageAction> {
        let mut popup = self.popup.clone()?;
        let request = self.form.request.clone();
        let generic = self.links.generic_link(&request.amount, &request.note);
        let payee_id = self.links.payee().payee_id.clone();
        let mobile = self.device.is_mobile();
        let launching = match self.launcher.state() {
            LaunchState::AppLinkSent { app, .. } => Some(*app),
            _ => None,
        };
        let qr = if !mobile {
            self.qr_cache.get_or_render(&generic, |uri| render_qr_texture(ctx, uri))
        } else {
            None
        };

        let mut action = None;
        let modal_area = egui::Modal::default_area(egui::Id::new("payment_popup"))
            .default_width(theme::POPUP_WIDTH + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("payment_popup"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::POPUP_WIDTH);
            ui.set_max_width(theme::POPUP_WIDTH);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("PAY WITH UPI").size(13.0).strong().color(theme::TEXT_MUTED));
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(format!("₹ {}", format_amount(&request.amount)))
                        .size(28.0)
                        .strong()
                        .color(theme::ACCENT),
                );
            });
            ui.add_space(theme::SPACING_MD);
            ui.separator();
            ui.add_space(theme::SPACING_LG);

            if mobile {
                if popup.show_generic {
                    if wide_button(
                        ui,
                        theme::button_accent(format!("{}  Open UPI Link", icons::ARROW_SQUARE_OUT)),
                        theme::BUTTON_HEIGHT_LARGE,
                    )
                    .clicked()
                    {
                        action = Some(PopupAction::LaunchGeneric);
                    }
                    ui.add_space(theme::SPACING_MD);
                    if wide_button(ui, theme::button(format!("{}  Back to App Links", icons::ARROW_LEFT)), theme::BUTTON_HEIGHT)
                        .clicked()
                    {
                        popup.show_generic = false;
                    }
                } else {
                    ui.label(egui::RichText::new("Choose your UPI app").color(theme::TEXT_SECONDARY));
                    ui.add_space(theme::SPACING_MD);
                    egui::Grid::new("upi_apps")
                        .num_columns(2)
                        .spacing([theme::SPACING_MD, theme::SPACING_MD])
                        .show(ui, |ui| {
                            let tile_w = (theme::POPUP_WIDTH - theme::SPACING_MD) / 2.0;
                            for (i, app) in UpiApp::ALL.into_iter().enumerate() {
                                let label = format!("{}\n{}", app_icon(app), app.display_name());
                                if ui
                                    .add_sized([tile_w, theme::APP_TILE_SIZE], theme::button(label))
                                    .clicked()
                                {
                                    action = Some(PopupAction::LaunchApp(app));
                                }
                                if i % 2 == 1 {
                                    ui.end_row();
                                }
                            }
                        });
                    if let Some(app) = launching {
                        ui.add_space(theme::SPACING_SM);
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(
                                egui::RichText::new(format!("Opening {}...", app.display_name()))
                                    .size(12.0)
                                    .color(theme::TEXT_MUTED),
                            );
                        });
                    }
                    ui.add_space(theme::SPACING_MD);
                    if wide_button(ui, theme::button("Use another UPI App"), theme::BUTTON_HEIGHT).clicked() {
                        popup.show_generic = true;
                    }
                }
            } else {
                ui.vertical_centered(|ui| {
                    theme::segmented_toggle(ui, "QR Code", "UPI ID", &mut popup.qr_tab);
                });
                ui.add_space(theme::SPACING_LG);

                if popup.qr_tab {
                    ui.vertical_centered(|ui| match &qr {
                        Some(texture) => {
                            ui.image(egui::load::SizedTexture::new(texture.id(), egui::vec2(QR_SIZE, QR_SIZE)));
                            ui.add_space(theme::SPACING_SM);
                            ui.label(egui::RichText::new("Scan with any UPI app").size(12.0).color(theme::TEXT_DIM));
                        }
                        None => {
                            ui.label(
                                egui::RichText::new(format!("{}  QR code unavailable", icons::WARNING_CIRCLE))
                                    .color(theme::STATUS_ERROR),
                            );
                        }
                    });
                } else {
                    theme::section_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new("UPI ID").size(12.0).color(theme::TEXT_DIM));
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&payee_id).monospace().strong());
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.add(theme::button(format!("{} Copy", icons::COPY))).clicked() {
                                    action = Some(PopupAction::CopyPayeeId);
                                }
                            });
                        });
                    });
                }
            }

            ui.add_space(theme::SPACING_LG);
            ui.separator();
            ui.add_space(theme::SPACING_MD);
            ui.columns(2, |cols| {
                if wide_button(&mut cols[0], theme::button("Cancel"), theme::BUTTON_HEIGHT).clicked() {
                    action = Some(PopupAction::Close);
                }
                if wide_button(&mut cols[1], theme::button_success("Proceed"), theme::BUTTON_HEIGHT).clicked() {
                    action = Some(PopupAction::Proceed);
                }
            });
        });

        // Escape or click on the backdrop
        if action.is_none() && modal_response.should_close() {
            action = Some(PopupAction::Close);
        }

        self.popup = Some(popup);
        match action {
            Some(action) => self.handle_popup_action(ctx, action, &generic, &payee_id),
            None => None,
        }
    }

    fn handle_popup_action(
        &mut self,
        ctx: &egui::Context,
        action: PopupAction,
        generic: &str,
        payee_id: &str,
    ) -> Option<PageAction> {
        match action {
            PopupAction::Close => {
                self.close_popup();
                None
            }
            PopupAction::LaunchApp(app) => {
                if let Some(url) = self.launch_app(app, Instant::now()) {
                    open_link(&url);
                }
                None
            }
            PopupAction::LaunchGeneric => {
                self.launcher.cancel();
                info!("Opening generic UPI link");
                open_link(generic);
                None
            }
            PopupAction::CopyPayeeId => {
                ctx.copy_text(payee_id.to_string());
                self.notice = Some("UPI ID copied to clipboard!".to_string());
                None
            }
            PopupAction::Proceed => {
                let app = self.popup.as_ref().and_then(|p| p.last_app);
                let state = self.form.navigation_state(app);
                self.close_popup();
                Some(PageAction::Navigate("/pending".to_string(), state))
            }
        }
    }

    /// Arms the fallback for `app` and returns the app link to open now.
    /// Desktop-class devices get `None` and nothing is armed.
    pub(crate) fn launch_app(&mut self, app: UpiApp, now: Instant) -> Option<String> {
        if !self.device.is_mobile() {
            debug!(app = app.id(), "App launch ignored on desktop");
            return None;
        }
        let request = &self.form.request;
        let app_url = self.links.app_link(Some(app.id()), &request.amount, &request.note);
        let generic = self.links.generic_link(&request.amount, &request.note);
        let url = self.launcher.launch_app(app, app_url, generic, now);
        info!(app = app.id(), "Launching UPI app");
        if let Some(popup) = self.popup.as_mut() {
            popup.last_app = Some(app);
        }
        Some(url)
    }

    pub(crate) fn close_popup(&mut self) {
        self.launcher.cancel();
        self.popup = None;
        self.qr_cache.clear();
    }
}

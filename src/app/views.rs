//! Result pages: pending, success, fail and not found
//!
//! These render whatever navigation state they were handed, substituting
//! defaults for anything missing. They never validate it.

use super::{App, PageAction};
use crate::router::NavigationState;
use crate::theme;
use crate::types::UpiApp;
use crate::ui::components::{centered_card, detail_row, rupees, status_icon, wide_button};
use crate::utils::capitalize_words;
use eframe::egui;
use egui_phosphor::regular as icons;

const DEFAULT_FAIL_REASON: &str = "An unexpected error occurred.";
const PENDING_FAIL_REASON: &str = "Payment was not completed in the UPI app.";

/// Display values for the pending page: amount, note, mobile, app
pub(crate) fn pending_details(state: &NavigationState) -> [String; 4] {
    let app = match state.app.as_deref() {
        Some(id) => UpiApp::from_id(id)
            .map(|app| app.display_name().to_string())
            .unwrap_or_else(|| capitalize_words(id)),
        None => "-".to_string(),
    };
    [
        state.amount.clone().unwrap_or_else(|| "0".to_string()),
        state.note.clone().unwrap_or_else(|| "-".to_string()),
        state.mobile.clone().unwrap_or_else(|| "-".to_string()),
        app,
    ]
}

/// Amount, note and mobile for success/fail, "N/A" when absent
pub(crate) fn summary_details(state: &NavigationState) -> [String; 3] {
    let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());
    [or_na(&state.amount), or_na(&state.note), or_na(&state.mobile)]
}

pub(crate) fn fail_reason(state: &NavigationState) -> &str {
    state.reason.as_deref().unwrap_or(DEFAULT_FAIL_REASON)
}

fn home() -> PageAction {
    PageAction::Navigate("/".to_string(), NavigationState::default())
}

fn summary_rows(ui: &mut egui::Ui, state: &NavigationState) {
    let [amount, note, mobile] = summary_details(state);
    theme::section_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        detail_row(ui, icons::CURRENCY_INR, "Amount", &amount, theme::TEXT_PRIMARY);
        detail_row(ui, icons::CHAT_TEXT, "Note", &note, theme::TEXT_SECONDARY);
        detail_row(ui, icons::DEVICE_MOBILE, "Mobile", &mobile, theme::TEXT_SECONDARY);
    });
}

impl App {
    pub(crate) fn render_pending(&mut self, ui: &mut egui::Ui) -> Option<PageAction> {
        let state = self.navigator.state().clone();
        let [amount, note, mobile, app] = pending_details(&state);
        let mut action = None;

        centered_card(ui, theme::CARD_WIDTH, |ui| {
            status_icon(ui, icons::CLOCK, theme::STATUS_PENDING);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Payment Pending").size(22.0).strong());
                ui.label(egui::RichText::new("Complete the payment in your UPI app").color(theme::TEXT_MUTED));
            });
            ui.add_space(theme::SPACING_XL);

            theme::section_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                detail_row(ui, icons::CURRENCY_INR, "Amount", &rupees(&amount), theme::ACCENT);
                detail_row(ui, icons::CHAT_TEXT, "Note", &note, theme::TEXT_SECONDARY);
                detail_row(ui, icons::DEVICE_MOBILE, "Mobile", &mobile, theme::TEXT_SECONDARY);
                detail_row(ui, icons::WALLET, "App", &app, theme::TEXT_SECONDARY);
            });

            ui.add_space(theme::SPACING_XL);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Did you complete the payment successfully?").strong());
            });
            ui.add_space(theme::SPACING_MD);
            ui.columns(2, |cols| {
                let ok = theme::button_success(format!("{}  Payment Successful", icons::CHECK_CIRCLE));
                if wide_button(&mut cols[0], ok, theme::BUTTON_HEIGHT_LARGE).clicked() {
                    action = Some(PageAction::Navigate("/success".to_string(), state.carry_payment()));
                }
                let failed = theme::button_danger(format!("{}  Payment Failed", icons::X_CIRCLE));
                if wide_button(&mut cols[1], failed, theme::BUTTON_HEIGHT_LARGE).clicked() {
                    action = Some(PageAction::Navigate(
                        "/fail".to_string(),
                        state.carry_payment().with_reason(PENDING_FAIL_REASON),
                    ));
                }
            });
        });
        action
    }

    pub(crate) fn render_success(&mut self, ui: &mut egui::Ui) -> Option<PageAction> {
        let state = self.navigator.state().clone();
        let mut action = None;

        centered_card(ui, theme::CARD_WIDTH, |ui| {
            status_icon(ui, icons::CHECK_CIRCLE, theme::STATUS_SUCCESS);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Payment Successful").size(22.0).strong());
                ui.label(egui::RichText::new("Thank you! Your payment has been recorded.").color(theme::TEXT_MUTED));
            });
            ui.add_space(theme::SPACING_XL);
            summary_rows(ui, &state);
            ui.add_space(theme::SPACING_XL);
            if wide_button(ui, theme::button_accent(format!("{}  Make Another Payment", icons::HOUSE)), theme::BUTTON_HEIGHT_LARGE)
                .clicked()
            {
                action = Some(home());
            }
        });
        action
    }

    pub(crate) fn render_fail(&mut self, ui: &mut egui::Ui) -> Option<PageAction> {
        let state = self.navigator.state().clone();
        let mut action = None;

        centered_card(ui, theme::CARD_WIDTH, |ui| {
            status_icon(ui, icons::X_CIRCLE, theme::STATUS_ERROR);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Payment Failed").size(22.0).strong());
                ui.label(egui::RichText::new(fail_reason(&state)).color(theme::TEXT_MUTED));
            });
            ui.add_space(theme::SPACING_XL);
            summary_rows(ui, &state);
            ui.add_space(theme::SPACING_XL);
            ui.columns(2, |cols| {
                let retry = theme::button_accent(format!("{}  Try Payment Again", icons::ARROW_CLOCKWISE));
                if wide_button(&mut cols[0], retry, theme::BUTTON_HEIGHT_LARGE).clicked() {
                    action = Some(home());
                }
                let home_btn = theme::button(format!("{}  Go to Home", icons::HOUSE));
                if wide_button(&mut cols[1], home_btn, theme::BUTTON_HEIGHT_LARGE).clicked() {
                    action = Some(home());
                }
            });
        });
        action
    }

    pub(crate) fn render_not_found(&mut self, ui: &mut egui::Ui) -> Option<PageAction> {
        let mut action = None;

        centered_card(ui, theme::CARD_WIDTH, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("404").size(64.0).strong().color(theme::ACCENT));
                ui.label(egui::RichText::new("Page Not Found").size(20.0).strong());
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(format!("Nothing lives at {}", self.navigator.path()))
                        .color(theme::TEXT_MUTED),
                );
            });
            ui.add_space(theme::SPACING_XL);
            if wide_button(ui, theme::button_accent(format!("{}  Go to Home", icons::HOUSE)), theme::BUTTON_HEIGHT_LARGE)
                .clicked()
            {
                action = Some(home());
            }
        });
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_defaults_when_state_is_empty() {
        let details = pending_details(&NavigationState::default());
        assert_eq!(details, ["0", "-", "-", "-"].map(String::from));
    }

    #[test]
    fn pending_shows_app_display_name() {
        let state = NavigationState::payment("120.00", "tea", "9876543210").with_app(Some("gpay"));
        let [amount, note, mobile, app] = pending_details(&state);
        assert_eq!(amount, "120.00");
        assert_eq!(note, "tea");
        assert_eq!(mobile, "9876543210");
        assert_eq!(app, "G Pay");

        let unknown = NavigationState::default().with_app(Some("bhim upi"));
        assert_eq!(pending_details(&unknown)[3], "Bhim Upi");
    }

    #[test]
    fn summary_defaults_to_not_available() {
        assert_eq!(summary_details(&NavigationState::default()), ["N/A", "N/A", "N/A"].map(String::from));
        let state = NavigationState::payment("5", "", "9876543210");
        assert_eq!(summary_details(&state), ["5", "", "9876543210"].map(String::from));
    }

    #[test]
    fn fail_reason_defaults_then_uses_given_reason() {
        assert_eq!(fail_reason(&NavigationState::default()), DEFAULT_FAIL_REASON);
        let state = NavigationState::default().with_reason("Bank declined");
        assert_eq!(fail_reason(&state), "Bank declined");
    }
}

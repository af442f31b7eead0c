//! Payment form page (`/` and `/:id`)

use super::{App, PaymentPopup};
use crate::router::NavigationState;
use crate::theme;
use crate::types::{OrderDetails, PaymentRequest, UpiApp};
use crate::ui::components::{centered_card, input_field, wide_button, InputKind};
use crate::validation::ValidationError;
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::{info, warn};

/// Form state for one mount of the payment page
#[derive(Debug, Clone, Default)]
pub(crate) struct PayForm {
    pub request: PaymentRequest,
    pub order_id: Option<String>,
    pub loading: bool,
}

impl PayForm {
    /// Fresh form; with an order id it waits for the lookup to pre-fill.
    pub fn for_order(order_id: Option<String>) -> Self {
        Self {
            loading: order_id.is_some(),
            order_id,
            request: PaymentRequest::default(),
        }
    }

    pub fn apply_order(&mut self, order: OrderDetails) {
        self.request = order.into();
        self.loading = false;
    }

    /// Amount is fixed by the order when one is being paid.
    pub fn amount_editable(&self) -> bool {
        self.order_id.is_none()
    }

    pub fn submit(&self) -> Result<(), ValidationError> {
        self.request.validate()
    }

    pub fn submit_label(&self) -> String {
        let amount = if self.request.amount.is_empty() {
            "..."
        } else {
            self.request.amount.as_str()
        };
        format!("CONFIRM & PAY ₹{}", amount)
    }

    pub fn navigation_state(&self, app: Option<UpiApp>) -> NavigationState {
        let r = &self.request;
        NavigationState::payment(&r.amount, &r.note, &r.mobile).with_app(app.map(UpiApp::id))
    }
}

impl App {
    pub(crate) fn render_pay_form(&mut self, ui: &mut egui::Ui) {
        let mut submit = false;

        centered_card(ui, theme::CARD_WIDTH, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Payment Gateway").size(26.0).strong());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(icons::LOCK).color(theme::STATUS_SUCCESS));
                    ui.label(egui::RichText::new("100% Secure Payment Protocol").size(12.0).color(theme::TEXT_DIM));
                });
            });
            ui.add_space(theme::SPACING_MD);
            ui.separator();
            ui.add_space(theme::SPACING_XL);

            if self.form.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(theme::SPACING_XXL);
                    ui.add(egui::Spinner::new().size(40.0).color(theme::ACCENT));
                    ui.add_space(theme::SPACING_LG);
                    ui.label(egui::RichText::new("Loading order details...").color(theme::TEXT_MUTED));
                    ui.add_space(theme::SPACING_XXL);
                });
                return;
            }

            let amount_editable = self.form.amount_editable();
            let form = &mut self.form.request;
            let mut enter = false;
            for response in [
                input_field(
                    ui,
                    "Payment Amount",
                    icons::CURRENCY_INR,
                    &mut form.amount,
                    InputKind::Amount,
                    "e.g., 120.00",
                    true,
                    amount_editable,
                ),
                input_field(
                    ui,
                    "Contact Mobile Number",
                    icons::DEVICE_MOBILE,
                    &mut form.mobile,
                    InputKind::Mobile,
                    "Enter 10 digit number",
                    true,
                    true,
                ),
                input_field(
                    ui,
                    "Transaction Reference / Note",
                    icons::CHAT_TEXT,
                    &mut form.note,
                    InputKind::Text,
                    "Optional memo or order reference",
                    false,
                    true,
                ),
            ] {
                enter |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            }

            ui.add_space(theme::SPACING_LG);
            let label = self.form.submit_label();
            let clicked = wide_button(ui, theme::button_accent(label), theme::BUTTON_HEIGHT_LARGE).clicked();
            submit = clicked || enter;
        });

        if submit {
            self.submit_payment();
        }
    }

    fn submit_payment(&mut self) {
        match self.form.submit() {
            Ok(()) => {
                info!(amount = %self.form.request.amount, "Payment form accepted");
                self.launcher.reset();
                self.popup = Some(PaymentPopup::default());
            }
            Err(e) => {
                warn!(error = %e, "Payment form rejected");
                self.notice = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_route_starts_loading_with_amount_locked() {
        let form = PayForm::for_order(Some("ORD1".into()));
        assert!(form.loading);
        assert!(!form.amount_editable());

        let form = PayForm::for_order(None);
        assert!(!form.loading);
        assert!(form.amount_editable());
    }

    #[test]
    fn lookup_result_prefills_and_stops_loading() {
        let mut form = PayForm::for_order(Some("ORD1".into()));
        form.apply_order(OrderDetails::stub());
        assert!(!form.loading);
        assert_eq!(form.request.amount, "120.00");
        assert_eq!(form.request.note, "Order Ref #2024");
        assert_eq!(form.request.mobile, "9876543210");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn submit_reports_the_first_failing_gate() {
        let mut form = PayForm::default();
        assert_eq!(form.submit(), Err(ValidationError::InvalidAmount));
        form.request.amount = "50".into();
        assert_eq!(form.submit(), Err(ValidationError::InvalidMobile));
        form.request.mobile = "9876543210".into();
        assert_eq!(form.submit(), Ok(()));
    }

    #[test]
    fn submit_label_shows_placeholder_until_amount_entered() {
        let mut form = PayForm::default();
        assert_eq!(form.submit_label(), "CONFIRM & PAY ₹...");
        form.request.amount = "99.5".into();
        assert_eq!(form.submit_label(), "CONFIRM & PAY ₹99.5");
    }

    #[test]
    fn navigation_state_carries_payment_and_app() {
        let mut form = PayForm::default();
        form.request = PaymentRequest {
            amount: "10".into(),
            note: "tea".into(),
            mobile: "9876543210".into(),
        };
        let state = form.navigation_state(Some(UpiApp::Paytm));
        assert_eq!(state.amount.as_deref(), Some("10"));
        assert_eq!(state.note.as_deref(), Some("tea"));
        assert_eq!(state.mobile.as_deref(), Some("9876543210"));
        assert_eq!(state.app.as_deref(), Some("paytm"));
        assert!(form.navigation_state(None).app.is_none());
    }
}

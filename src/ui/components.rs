//! Reusable UI components
//!
//! Standalone widgets shared by the payment form, popup and result pages.

use crate::theme;
use crate::validation::{sanitize_amount_input, sanitize_mobile_input};
use eframe::egui;

/// How a form field filters what the user types
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Amount,
    Mobile,
    Text,
}

impl InputKind {
    fn sanitize(self, value: &str) -> Option<String> {
        match self {
            InputKind::Amount => Some(sanitize_amount_input(value)),
            InputKind::Mobile => Some(sanitize_mobile_input(value)),
            InputKind::Text => None,
        }
    }
}

/// Labelled single-line input. Non-text kinds are re-sanitised on every edit.
#[allow(clippy::too_many_arguments)]
pub fn input_field(
    ui: &mut egui::Ui,
    label: &str,
    icon: &str,
    value: &mut String,
    kind: InputKind,
    hint: &str,
    required: bool,
    enabled: bool,
) -> egui::Response {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        ui.label(egui::RichText::new(icon).size(14.0).color(theme::ACCENT));
        ui.label(egui::RichText::new(label).size(13.0).strong().color(theme::TEXT_SECONDARY));
        if required {
            ui.label(egui::RichText::new("*").color(theme::STATUS_ERROR));
        }
    });

    let response = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .margin(egui::Margin::symmetric(10, 8))
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        if let Some(clean) = kind.sanitize(value) {
            *value = clean;
        }
    }
    ui.add_space(theme::SPACING_MD);
    response
}

/// "Label ........ value" row used on the result pages
pub fn detail_row(ui: &mut egui::Ui, icon: &str, label: &str, value: &str, value_color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).color(theme::TEXT_DIM));
        ui.label(egui::RichText::new(label).color(theme::TEXT_MUTED));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value).strong().color(value_color));
        });
    });
}

/// Large round status glyph at the top of a result page
pub fn status_icon(ui: &mut egui::Ui, icon: &str, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(icon).size(56.0).color(color));
    });
}

/// Full-width button of the given height
pub fn wide_button(ui: &mut egui::Ui, button: egui::Button<'static>, height: f32) -> egui::Response {
    ui.add_sized([ui.available_width(), height], button)
}

/// Vertically offset, horizontally centered card of fixed width
pub fn centered_card<R>(ui: &mut egui::Ui, width: f32, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let top = (ui.available_height() * 0.08).max(theme::SPACING_XL);
    ui.add_space(top);
    ui.vertical_centered(|ui| {
        theme::card_frame()
            .show(ui, |ui| {
                ui.set_width(width);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), add_contents)
                    .inner
            })
            .inner
    })
    .inner
}

/// Rupee amount for display: "₹120.00"
pub fn rupees(amount: &str) -> String {
    format!("₹{}", amount)
}

//! Blocking notice dialog (validation failures, clipboard confirmation)

use super::App;
use crate::theme;
use eframe::egui;

impl App {
    pub(crate) fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };

        let mut close = false;
        let modal_area = egui::Modal::default_area(egui::Id::new("notice_modal"))
            .default_width(300.0 + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("notice_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.set_max_width(300.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(egui_phosphor::regular::INFO).size(32.0).color(theme::ACCENT));
                ui.add_space(theme::SPACING_MD);
                ui.label(egui::RichText::new(&message).size(14.0));
                ui.add_space(theme::SPACING_XL);
                let ok = ui.add(theme::button_accent(format!("{}  OK", egui_phosphor::regular::CHECK)));
                if ok.clicked() {
                    close = true;
                }
            });
        });

        if close || modal_response.should_close() {
            self.notice = None;
        }
    }
}

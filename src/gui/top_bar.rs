use eframe::egui;

use super::app::{
    SettingsData,
    View,
};

pub struct TopBar;

impl TopBar {
    /// Draws the menu bar. Returns true when a setting changed and should be
    /// persisted.
    pub fn show(
        ctx: &egui::Context,
        view: &mut View,
        settings: &mut SettingsData,
        speaking: bool,
    ) -> bool {
        let mut settings_changed = false;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::widgets::global_theme_preference_switch(ui);

                let dark_mode = ui.ctx().theme() == egui::Theme::Dark;
                if dark_mode != settings.dark_mode {
                    settings.dark_mode = dark_mode;
                    settings_changed = true;
                }

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.add_space(8.0);
                ui.selectable_value(view, View::Cards, "Cards");
                ui.selectable_value(view, View::List, "Word List");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_speech_indicator(ui, speaking);
                });
            });
        });

        settings_changed
    }

    fn show_speech_indicator(ui: &mut egui::Ui, speaking: bool) {
        let (color, tooltip) = if speaking {
            (egui::Color32::from_rgb(0, 200, 0), "Speaking")
        } else {
            (egui::Color32::from_rgb(120, 120, 120), "Audio idle")
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("audio").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}

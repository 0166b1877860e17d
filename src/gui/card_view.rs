use eframe::egui::{
    self,
    Align2,
    FontId,
    Sense,
    Vec2,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::{
    deck::{
        CardFace,
        Deck,
    },
    speech::SpeechPlayer,
};

const CARD_SIZE: Vec2 = Vec2::new(480.0, 280.0);
const CARD_PADDING: f32 = 32.0;

pub fn show(
    ctx: &egui::Context,
    theme: &Theme,
    deck: &Deck,
    speech: &SpeechPlayer,
    actions: &mut ActionQueue,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if deck.is_empty() {
            show_empty_state(ui, theme);
            return;
        }

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            draw_card(ui, theme, deck, actions);
            ui.add_space(20.0);
            draw_controls(ui, theme, deck, speech, actions);
        });
    });
}

fn show_empty_state(ui: &mut egui::Ui, theme: &Theme) {
    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        ui.heading(theme.heading("The deck is empty"));
        ui.add_space(8.0);
        ui.label("Add your first word in the word list.");
    });
}

fn draw_card(ui: &mut egui::Ui, theme: &Theme, deck: &Deck, actions: &mut ActionQueue) {
    let dark_mode = ui.visuals().dark_mode;
    let size = Vec2::new(ui.available_width().min(CARD_SIZE.x), CARD_SIZE.y);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    // The whole card surface is the reveal trigger.
    if response.clicked() {
        actions.push(UiAction::Reveal);
    }

    let face = deck.face();
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, egui::CornerRadius::same(18), theme.card_fill(face, dark_mode));

    let Some(word) = deck.current() else {
        return;
    };
    let wrap_width = rect.width() - 2.0 * CARD_PADDING;

    match face {
        CardFace::Front => {
            let galley = ui.fonts(|fonts| {
                fonts.layout(word.term.clone(), FontId::proportional(34.0), theme.card_text(), wrap_width)
            });
            painter.galley(rect.center() - 0.5 * galley.size(), galley, theme.card_text());
        }
        CardFace::Back => {
            let meaning = ui.fonts(|fonts| {
                fonts.layout(
                    word.meaning.clone(),
                    FontId::proportional(26.0),
                    theme.card_text(),
                    wrap_width,
                )
            });
            let example = word.example.as_ref().map(|example| {
                ui.fonts(|fonts| {
                    fonts.layout(
                        format!("\u{201c}{}\u{201d}", example),
                        FontId::proportional(15.0),
                        theme.card_text_faint(),
                        wrap_width,
                    )
                })
            });

            let gap = 14.0;
            let total_height = meaning.size().y
                + example.as_ref().map(|g| g.size().y + gap).unwrap_or(0.0);
            let mut cursor_y = rect.center().y - 0.5 * total_height;

            let pos = egui::pos2(rect.center().x - 0.5 * meaning.size().x, cursor_y);
            cursor_y += meaning.size().y + gap;
            painter.galley(pos, meaning, theme.card_text());

            if let Some(example) = example {
                let pos = egui::pos2(rect.center().x - 0.5 * example.size().x, cursor_y);
                painter.galley(pos, example, theme.card_text_faint());
            }
        }
    }

    let hint = match face {
        CardFace::Front => "click to see the meaning",
        CardFace::Back => "click to see the word",
    };
    painter.text(
        rect.center_bottom() - Vec2::new(0.0, 22.0),
        Align2::CENTER_CENTER,
        hint,
        FontId::proportional(12.0),
        theme.card_text_faint(),
    );
}

fn draw_controls(
    ui: &mut egui::Ui,
    theme: &Theme,
    deck: &Deck,
    speech: &SpeechPlayer,
    actions: &mut ActionQueue,
) {
    let dark_mode = ui.visuals().dark_mode;

    // The cursor tolerates navigation on any deck, but on 0 or 1 entries the
    // buttons would do nothing, so they are rendered inert.
    let can_navigate = deck.len() > 1;

    ui.horizontal(|ui| {
        if ui.add_enabled(can_navigate, egui::Button::new("\u{2190} Previous")).clicked() {
            actions.push(UiAction::Retreat);
        }

        let counter = format!("{} / {}", deck.cursor_index() + 1, deck.len());
        ui.label(theme.bold(&counter));

        if ui.add_enabled(can_navigate, egui::Button::new("Next \u{2192}")).clicked() {
            actions.push(UiAction::Advance);
        }
    });

    ui.add_space(10.0);

    let play_text = if speech.is_speaking() { "🔊 Speaking..." } else { "🔊 Pronounce" };
    let play_button = egui::Button::new(play_text).min_size(Vec2::new(140.0, 28.0));
    if ui.add(play_button).clicked() {
        actions.push(UiAction::PlaySpeech);
    }
    if speech.is_speaking() {
        ui.colored_label(theme.success(dark_mode), "playing");
    }
}

use eframe::egui::{
    self,
    TextEdit,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::{
    core::WordDraft,
    deck::Deck,
};

/// State of the add-word form. Validation happens here, before anything
/// reaches the store: the term and the meaning are required.
#[derive(Default)]
pub struct WordForm {
    pub open: bool,
    pub term: String,
    pub meaning: String,
    pub example: String,
    pub error: Option<String>,
}

impl WordForm {
    fn clear(&mut self) {
        *self = Self::default();
    }

    /// Turns the current input into a draft, or an error message to show
    /// inline.
    fn validate(&self) -> Result<WordDraft, String> {
        let term = self.term.trim();
        let meaning = self.meaning.trim();

        if term.is_empty() || meaning.is_empty() {
            return Err("Both the word and its meaning are required.".to_string());
        }

        let example = self.example.trim();
        Ok(WordDraft::new(term, meaning, (!example.is_empty()).then_some(example)))
    }
}

pub fn show(
    ctx: &egui::Context,
    theme: &Theme,
    deck: &Deck,
    form: &mut WordForm,
    actions: &mut ActionQueue,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.heading(theme.heading(&format!("Word List ({})", deck.len())));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if form.open { "Cancel" } else { "+ Add Word" };
                if ui.button(label).clicked() {
                    let was_open = form.open;
                    form.clear();
                    form.open = !was_open;
                }
            });
        });

        if form.open {
            ui.add_space(8.0);
            show_add_form(ui, theme, form, actions);
        }

        ui.add_space(12.0);
        ui.separator();

        if deck.is_empty() {
            let muted = theme.muted(ui.visuals().dark_mode);
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(muted, "No words yet. Add the first one above.");
            });
            return;
        }

        show_table(ui, theme, deck, actions);
    });
}

fn show_add_form(ui: &mut egui::Ui, theme: &Theme, form: &mut WordForm, actions: &mut ActionQueue) {
    let dark_mode = ui.visuals().dark_mode;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::Grid::new("add_word_form").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
            ui.label("Word *");
            ui.add(
                TextEdit::singleline(&mut form.term)
                    .hint_text("the word in the target language")
                    .desired_width(320.0),
            );
            ui.end_row();

            ui.label("Meaning *");
            ui.add(
                TextEdit::singleline(&mut form.meaning)
                    .hint_text("the meaning in your language")
                    .desired_width(320.0),
            );
            ui.end_row();

            ui.label("Example");
            ui.add(
                TextEdit::multiline(&mut form.example)
                    .hint_text("optional example sentence")
                    .desired_rows(2)
                    .desired_width(320.0),
            );
            ui.end_row();
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Add").clicked() {
                match form.validate() {
                    Ok(draft) => {
                        actions.push(UiAction::AddWord(draft));
                        form.clear();
                    }
                    Err(message) => form.error = Some(message),
                }
            }
            if let Some(error) = &form.error {
                ui.colored_label(theme.danger(dark_mode), error);
            }
        });
    });
}

fn show_table(ui: &mut egui::Ui, theme: &Theme, deck: &Deck, actions: &mut ActionQueue) {
    let dark_mode = ui.visuals().dark_mode;
    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);
    let words = deck.store().words();

    egui::ScrollArea::vertical().show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(160.0))
            .column(Column::remainder())
            .column(Column::auto().at_least(32.0))
            .header(25.0, |mut header| {
                header.col(|ui| {
                    ui.label(theme.heading("Word"));
                });
                header.col(|ui| {
                    ui.label(theme.heading("Meaning"));
                });
                header.col(|ui| {
                    ui.label(theme.heading("Example"));
                });
                header.col(|_ui| {});
            })
            .body(|body| {
                body.rows(text_height, words.len(), |mut row| {
                    let word = &words[row.index()];
                    row.col(|ui| {
                        ui.label(theme.bold(&word.term));
                    });
                    row.col(|ui| {
                        ui.label(&word.meaning);
                    });
                    row.col(|ui| {
                        if let Some(example) = &word.example {
                            ui.label(egui::RichText::new(example).italics());
                        }
                    });
                    row.col(|ui| {
                        let delete = egui::RichText::new("🗑").color(theme.danger(dark_mode));
                        if ui.button(delete).on_hover_text("Remove this word").clicked() {
                            actions.push(UiAction::DeleteWord(word.id));
                        }
                    });
                });
            });
    });
}

use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    card_view,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
    word_list::{
        self,
        WordForm,
    },
};
use crate::{
    deck::{
        Deck,
        SwipeSample,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
    speech::SpeechPlayer,
};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct SettingsData {
    pub target_language: String, // Language tag spoken for the term side
    pub native_language: String, // Language tag spoken for the meaning side
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            target_language: "en-US".to_string(),
            native_language: "ko-KR".to_string(),
            dark_mode: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Cards,
    List,
}

/// An unfinished touch motion: where and when the finger went down.
struct TouchStart {
    id: egui::TouchId,
    x: f32,
    time: f64,
}

pub struct FlashdeckApp {
    pub deck: Deck,
    pub speech: SpeechPlayer,
    pub settings_data: SettingsData,
    pub view: View,
    pub theme: Theme,
    pub word_form: WordForm,
    actions: ActionQueue,
    touch_start: Option<TouchStart>,
}

impl FlashdeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let theme = Theme::dracula();

        setup_fonts(&cc.egui_ctx);
        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_theme(if settings_data.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        Self {
            deck: Deck::load(),
            speech: SpeechPlayer::new(),
            settings_data,
            view: View::Cards,
            theme,
            word_form: WordForm::default(),
            actions: ActionQueue::new(),
            touch_start: None,
        }
    }

    /// Pairs touch-down and touch-up events into swipe samples for the deck.
    /// Only touch input is considered; mouse drags never become swipes.
    fn handle_touch_input(&mut self, ctx: &egui::Context) {
        let (events, now) = ctx.input(|i| (i.events.clone(), i.time));

        for event in events {
            let egui::Event::Touch { id, phase, pos, .. } = event else {
                continue;
            };

            match phase {
                egui::TouchPhase::Start => {
                    self.touch_start = Some(TouchStart { id, x: pos.x, time: now });
                }
                egui::TouchPhase::End => {
                    let Some(start) = self.touch_start.take() else {
                        continue;
                    };
                    if start.id != id || self.view != View::Cards {
                        continue;
                    }
                    let sample = SwipeSample {
                        dx: pos.x - start.x,
                        elapsed_secs: (now - start.time) as f32,
                    };
                    self.deck.handle_swipe(sample);
                }
                egui::TouchPhase::Cancel => {
                    self.touch_start = None;
                }
                egui::TouchPhase::Move => {}
            }
        }
    }

    fn apply_actions(&mut self) {
        let actions: Vec<UiAction> = self.actions.drain().collect();

        for action in actions {
            match action {
                UiAction::Advance => self.deck.advance(),
                UiAction::Retreat => self.deck.retreat(),
                UiAction::Reveal => self.deck.reveal(),
                UiAction::PlaySpeech => self.play_current_face(),
                UiAction::AddWord(draft) => {
                    self.deck.add_word(draft);
                    self.deck.save();
                }
                UiAction::DeleteWord(id) => {
                    if self.deck.remove_word(id) {
                        self.deck.save();
                    }
                }
            }
        }
    }

    fn play_current_face(&mut self) {
        let request = self.deck.speech_request(
            &self.settings_data.target_language,
            &self.settings_data.native_language,
        );
        if let Some(request) = request {
            self.speech.speak(&request);
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            log::error!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for FlashdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply utterance completions from the engine thread first so the
        // speaking indicator reflects this frame.
        self.speech.poll();
        self.handle_touch_input(ctx);

        let settings_changed =
            TopBar::show(ctx, &mut self.view, &mut self.settings_data, self.speech.is_speaking());
        if settings_changed {
            self.save_settings();
        }

        match self.view {
            View::Cards => {
                card_view::show(ctx, &self.theme, &self.deck, &self.speech, &mut self.actions)
            }
            View::List => word_list::show(
                ctx,
                &self.theme,
                &self.deck,
                &mut self.word_form,
                &mut self.actions,
            ),
        }

        self.apply_actions();

        // Keep polling while an utterance is in flight; completion events
        // arrive without any other UI activity.
        if self.speech.is_speaking() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

fn setup_fonts(ctx: &egui::Context) {
    // egui's bundled fonts have no Hangul coverage. Pull in a system font
    // that does, when one exists; otherwise meanings fall back to boxes.
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "C:\\Windows\\Fonts\\malgun.ttf",
    ];

    for path in CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts.font_data.insert(
            "hangul_fallback".to_owned(),
            std::sync::Arc::new(egui::FontData::from_owned(bytes)),
        );
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .push("hangul_fallback".to_owned());
        fonts
            .families
            .entry(egui::FontFamily::Monospace)
            .or_default()
            .push("hangul_fallback".to_owned());

        ctx.set_fonts(fonts);
        log::info!("Loaded Hangul-capable font from {}", path);
        return;
    }

    log::warn!("No Hangul-capable system font found; Korean text may not render");
}

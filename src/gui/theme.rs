use eframe::egui::{
    self,
    style::Selection,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

use crate::deck::CardFace;

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: Palette::dracula(), light: Palette::dracula_light() }
    }

    fn palette(&self, dark_mode: bool) -> &Palette {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.dark.purple)
    }

    pub fn bold(&self, content: &str) -> RichText {
        RichText::new(content).color(self.dark.orange)
    }

    pub fn danger(&self, dark_mode: bool) -> Color32 {
        self.palette(dark_mode).red
    }

    pub fn success(&self, dark_mode: bool) -> Color32 {
        self.palette(dark_mode).green
    }

    pub fn muted(&self, dark_mode: bool) -> Color32 {
        self.palette(dark_mode).comment
    }

    /// The card surface color: purple for the term side, pink for the
    /// revealed meaning side.
    pub fn card_fill(&self, face: CardFace, dark_mode: bool) -> Color32 {
        let palette = self.palette(dark_mode);
        match face {
            CardFace::Front => palette.purple,
            CardFace::Back => palette.pink,
        }
    }

    /// Card text sits on a saturated fill in both modes.
    pub fn card_text(&self) -> Color32 {
        self.dark.background_darker
    }

    pub fn card_text_faint(&self) -> Color32 {
        self.dark.background_light
    }
}

#[derive(Clone)]
pub struct Palette {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    green: Color32,
    orange: Color32,
    purple: Color32,
    cyan: Color32,
    pink: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
}

impl Palette {
    //Dracula palette, same source as the egui_dracula crate
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            pink: Color32::from_rgb(255, 121, 198),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            comment: Color32::from_rgb(120, 130, 160),
            red: Color32::from_rgb(200, 80, 80),
            green: Color32::from_rgb(80, 200, 120),
            orange: Color32::from_rgb(220, 150, 90),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
            pink: Color32::from_rgb(230, 130, 200),
            background_darker: Color32::from_rgb(235, 235, 230),
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(255, 255, 250),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let mut visuals = Visuals { dark_mode: is_dark, ..default };

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        widget.fg_stroke.color = palette.foreground;
        widget.bg_stroke.color = palette.background_dark;
    }
    visuals.widgets.noninteractive.bg_fill = palette.background;
    visuals.widgets.inactive.bg_fill = palette.background_light;
    visuals.widgets.hovered.bg_fill = palette.selection;
    visuals.widgets.hovered.bg_stroke.color = palette.cyan;
    visuals.widgets.active.bg_fill = palette.selection;
    visuals.widgets.active.bg_stroke.color = palette.cyan;
    visuals.widgets.open.bg_fill = palette.background_dark;

    visuals.selection = Selection {
        bg_fill: palette.selection,
        stroke: Stroke { color: palette.foreground, ..visuals.selection.stroke },
    };
    visuals.hyperlink_color = palette.cyan;
    visuals.faint_bg_color =
        if is_dark { palette.background_darker } else { palette.background_light };
    visuals.extreme_bg_color = palette.background_darker;
    visuals.code_bg_color = palette.background_dark;
    visuals.error_fg_color = palette.red;
    visuals.warn_fg_color = palette.orange;
    visuals.window_fill = palette.background;
    visuals.window_stroke.color = palette.background_light;
    visuals.panel_fill = palette.background_dark;

    ctx.set_visuals_of(variant, visuals);
}

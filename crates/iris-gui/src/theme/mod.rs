use eframe::egui::{
    style::{Selection, WidgetVisuals, Widgets},
    Color32, Frame, Margin, Rounding, Stroke, Visuals,
};
use iris_chain::format_rgb;
use iris_shared_types::ThemeConfig;
use tracing::warn;


/// Holds the Theme Settings for the whole widget
pub struct IrisTheme {
    pub colors: Colors,

    pub visuals: Visuals,

    pub rounding: RoundingTypes,

    pub default_panel_frame: Frame,

    pub prompt_frame: Frame,
}

impl IrisTheme {
    pub fn new(config: &ThemeConfig) -> Self {
        let mut colors = Colors::default();

        match parse_rgb(&config.accent) {
            Some(color) => colors.accent = color,
            None => warn!("Invalid accent color {:?}, using default", config.accent),
        }
        match parse_rgb(&config.error) {
            Some(color) => colors.error_message = color,
            None => warn!("Invalid error color {:?}, using default", config.error),
        }

        let rounding = RoundingTypes::default();

        let widgets = Widgets {
            // Affects the visuals of widgets like buttons, comboboxes, etc.
            // When they are not hovered or clicked.
            inactive: WidgetVisuals {
                bg_fill: colors.gray,
                weak_bg_fill: colors.gray,
                bg_stroke: Stroke::new(0.5, colors.light_gray),
                fg_stroke: Stroke::new(1.0, colors.white),
                rounding: rounding.big,
                expansion: 0.0,
            },
            // When the widget is hovered
            hovered: WidgetVisuals {
                bg_fill: colors.light_gray,
                weak_bg_fill: colors.light_gray,
                bg_stroke: Stroke::new(1.0, colors.accent),
                fg_stroke: Stroke::new(1.5, colors.white),
                rounding: rounding.big,
                expansion: 1.0,
            },
            // When the widget is clicked
            active: WidgetVisuals {
                bg_fill: colors.accent,
                weak_bg_fill: colors.accent,
                bg_stroke: Stroke::new(1.0, colors.white),
                fg_stroke: Stroke::new(2.0, colors.white),
                rounding: rounding.big,
                expansion: 1.0,
            },
            ..Widgets::dark()
        };

        let selection = Selection {
            bg_fill: colors.accent,
            ..Selection::default()
        };

        let visuals = Visuals {
            override_text_color: Some(colors.white),
            widgets,
            selection,
            panel_fill: colors.darker_gray,
            window_fill: colors.dark_gray,
            ..Visuals::dark()
        };

        let default_panel_frame = Frame {
            inner_margin: Margin::same(8.0),
            fill: colors.darker_gray,
            ..Frame::default()
        };

        let prompt_frame = Frame {
            inner_margin: Margin::same(8.0),
            fill: colors.dark_gray,
            rounding: rounding.big,
            ..Frame::default()
        };

        Self {
            colors,
            visuals,
            rounding,
            default_panel_frame,
            prompt_frame,
        }
    }
}

impl Default for IrisTheme {
    fn default() -> Self {
        Self::new(&ThemeConfig::default())
    }
}

/// Parse a css like `rgb(r, g, b)` color
pub fn parse_rgb(color: &str) -> Option<Color32> {
    let formatted = format_rgb(color);
    let mut parts = formatted.split(',').map(|part| part.parse::<u8>().ok());

    let r = parts.next()??;
    let g = parts.next()??;
    let b = parts.next()??;
    Some(Color32::from_rgb(r, g, b))
}

pub struct RoundingTypes {
    pub small: Rounding,
    pub big: Rounding,
}

impl Default for RoundingTypes {
    fn default() -> Self {
        Self {
            small: Rounding::same(2.0),
            big: Rounding::same(8.0),
        }
    }
}

pub struct Colors {
    pub white: Color32,
    pub gray: Color32,
    pub dark_gray: Color32,
    pub darker_gray: Color32,
    pub light_gray: Color32,
    pub lighter_gray: Color32,
    pub accent: Color32,
    pub error_message: Color32,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            white: Color32::from_rgb(255, 255, 255),
            gray: Color32::from_rgb(58, 58, 58),
            dark_gray: Color32::from_rgb(38, 38, 38),
            darker_gray: Color32::from_rgb(22, 22, 22),
            light_gray: Color32::from_rgb(85, 85, 85),
            lighter_gray: Color32::from_rgb(120, 120, 120),
            accent: Color32::from_rgb(145, 60, 167),
            error_message: Color32::from_rgb(211, 80, 80),
        }
    }
}

use eframe::egui::{vec2, Button, Color32, RichText, Sense, TextEdit};

/// Returns a [RichText] that is commonly used
///
/// Shortcut for `RichText::new("text").size(f32).color(Color32::WHITE)`
pub fn rich_text(text: &str, size: f32) -> RichText {
    RichText::new(text).size(size).color(Color32::WHITE)
}

/// Returns a [Button] that is commonly used
pub fn button(text: RichText) -> Button<'static> {
    Button::new(text)
        .rounding(10.0)
        .sense(Sense::click())
        .min_size(vec2(70.0, 25.0))
}

/// Returns a [TextEdit::singleline] that is commonly used
pub fn text_edit_s<'a>(text: &'a mut String, width: f32, hint: &str) -> TextEdit<'a> {
    TextEdit::singleline(text)
        .desired_width(width)
        .hint_text(hint.to_string())
        .text_color(Color32::WHITE)
        .min_size(vec2(width, 25.0))
}

use eframe::egui::{vec2, Align2, Context, RichText, Window};
use iris_shared_types::{Action, Dispatch, WidgetState};

use super::misc::{button, rich_text};
use crate::theme::IrisTheme;


/// Show the error message of the [WidgetState] if there is one
///
/// The only way to close it is the `Dismiss` button
pub fn error_modal(ctx: &Context, state: &mut WidgetState, theme: &IrisTheme) {
    let msg = match state.error().msg() {
        Some(msg) => msg.to_string(),
        None => return,
    };

    let mut dismissed = false;

    Window::new("Error")
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .frame(theme.prompt_frame)
        .show(ctx, |ui| {
            ui.set_max_width(300.0);

            ui.vertical_centered(|ui| {
                let alert = RichText::new("⚠").size(32.0).color(theme.colors.error_message);
                ui.label(alert);
                ui.add_space(10.0);

                ui.label(rich_text(&msg, 14.0).color(theme.colors.lighter_gray));
                ui.add_space(15.0);

                let dismiss = button(rich_text("Dismiss", 15.0)).fill(theme.colors.error_message);
                if ui.add(dismiss).clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        state.dispatch(Action::ClearError);
    }
}

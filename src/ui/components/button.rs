//! Text button shared by the toolbar and the history navigation.

use gpui::{App, SharedString, div, prelude::*, px, rgb};

use crate::ui::theme::TEXT_PRIMARY;

const BUTTON_BG: u32 = 0x3a3a3a;
const BUTTON_HOVER_BG: u32 = 0x4a4a4a;
const BUTTON_DISABLED: u32 = 0x555555;

pub fn render_button(
    id: &'static str,
    label: &'static str,
    enabled: bool,
    on_click: impl Fn(&mut App) + 'static,
) -> impl IntoElement {
    div()
        .id(SharedString::from(id))
        .px_3()
        .py_1()
        .rounded(px(4.0))
        .text_color(if enabled {
            rgb(TEXT_PRIMARY)
        } else {
            rgb(BUTTON_DISABLED)
        })
        .font_weight(gpui::FontWeight::BOLD)
        .when(enabled, |el| {
            el.bg(rgb(BUTTON_BG))
                .cursor_pointer()
                .hover(|s| s.bg(rgb(BUTTON_HOVER_BG)))
                .on_click(move |_ev, _window, cx| {
                    on_click(cx);
                })
        })
        .when(!enabled, |el| el.bg(rgb(0x2a2a2a)))
        .child(label)
}

//! The collapsible navigation drawer.

use waitlist_core::drawer::NavTab;

use crate::app::App;
use crate::buffer::{Buffer, Rect, TextStyle};
use crate::text::fit_to_width;

fn tab_icon(tab: NavTab) -> &'static str {
    match tab {
        NavTab::Dashboard => "▦",
        NavTab::Subscription => "▤",
    }
}

pub fn draw(app: &App, buffer: &mut Buffer, area: Rect) {
    let theme = app.theme;
    buffer.fill(area, theme.on_primary, theme.primary);

    // Open/close affordance at the top of the rail.
    let toggle = if app.drawer.is_open() { "✕" } else { "≡" };
    buffer.draw_str(
        area.x + 1,
        1,
        toggle,
        theme.on_primary,
        theme.primary,
        TextStyle::bold(),
    );

    for (i, tab) in NavTab::ALL.into_iter().enumerate() {
        let y = 3 + (i as u16) * 2;
        if y >= area.bottom() {
            break;
        }
        let active = app.drawer.active() == tab;
        let bg = if active {
            theme.primary_dark
        } else {
            theme.primary
        };

        if app.drawer.is_open() {
            let label = format!(" {} {}", tab_icon(tab), tab.label());
            let fitted = fit_to_width(&label, area.width as usize);
            buffer.draw_str(area.x, y, &fitted, theme.on_primary, bg, TextStyle::new());
        } else {
            let label = format!(" {} ", tab_icon(tab));
            buffer.draw_str(area.x, y, &label, theme.on_primary, bg, TextStyle::new());
        }
    }
}

//! Search box and column-tool hints.

use crate::app::{App, Mode};
use crate::buffer::{Buffer, Rect, TextStyle};

pub fn draw(app: &App, buffer: &mut Buffer, area: Rect) {
    let theme = app.theme;
    let searching = app.mode == Mode::Search;

    let mut x = buffer.draw_str(
        area.x,
        area.y,
        "⌕ ",
        theme.primary,
        theme.background,
        TextStyle::bold(),
    );

    if app.table.query().is_empty() && !searching {
        buffer.draw_str(
            x,
            area.y,
            "Search client",
            theme.muted,
            theme.background,
            TextStyle::new(),
        );
    } else {
        let style = if searching {
            TextStyle {
                underline: true,
                ..TextStyle::new()
            }
        } else {
            TextStyle::new()
        };
        x = buffer.draw_str(x, area.y, app.table.query(), theme.text, theme.background, style);
        if searching {
            buffer.draw_str(x, area.y, "▌", theme.primary, theme.background, TextStyle::new());
        }
    }

    // Right-aligned count of selected rows.
    let selected = app.table.selected_count();
    if selected > 0 {
        let label = format!("{selected} selected");
        let x = area.right().saturating_sub(label.len() as u16);
        buffer.draw_str(x, area.y, &label, theme.primary, theme.background, TextStyle::bold());
    }
}

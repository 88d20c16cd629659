//! The "Edit Columns" overlay.

use crate::app::App;
use crate::buffer::{Buffer, Rect, TextStyle};
use crate::text::fit_to_width;

const MENU_WIDTH: u16 = 30;

pub fn draw(app: &App, buffer: &mut Buffer, main: Rect, cursor: usize) {
    let theme = app.theme;
    let count = app.table.columns().len() as u16;
    let height = count + 5;
    let x = main.right().saturating_sub(MENU_WIDTH + 2);
    let y = 4;
    let area = Rect::new(x, y, MENU_WIDTH, height);

    buffer.fill(area, theme.text, theme.accent);

    buffer.draw_str(
        x + 2,
        y + 1,
        "Edit Columns",
        theme.primary_dark,
        theme.accent,
        TextStyle::bold(),
    );
    buffer.draw_str(
        x + 2,
        y + 2,
        "select columns to rearrange",
        theme.primary_dark,
        theme.accent,
        TextStyle::dim(),
    );

    for (i, col) in app.table.columns().iter().enumerate() {
        let row_y = y + 4 + i as u16;
        let check = if col.visible { "[x]" } else { "[ ]" };
        let label = fit_to_width(
            &format!(" {} {} ", check, col.name),
            (MENU_WIDTH - 4) as usize,
        );
        let (fg, bg) = if i == cursor {
            (theme.on_primary, theme.primary)
        } else {
            (theme.text, theme.accent)
        };
        buffer.draw_str(x + 2, row_y, &label, fg, bg, TextStyle::new());
    }
}

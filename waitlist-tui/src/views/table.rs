//! The data table: header, rows, and pagination footer.

use waitlist_core::LoadPhase;
use waitlist_core::view::{PAGE_SIZE, SortDirection};

use crate::app::{App, Mode};
use crate::buffer::{Buffer, Rect, TextStyle};
use crate::text::fit_to_width;
use crate::theme::Rgb;

/// Width of the checkbox column.
const CHECKBOX_WIDTH: u16 = 4;

pub fn draw(app: &App, buffer: &mut Buffer, area: Rect) {
    let widths = column_widths(app, area.width);

    draw_header(app, buffer, area, &widths);
    draw_body(app, buffer, area, &widths);
    draw_pagination(app, buffer, area);
}

/// Distribute the area across the checkbox column and the visible columns.
/// The last column absorbs the remainder.
fn column_widths(app: &App, total: u16) -> Vec<u16> {
    let count = app.table.columns().visible().count() as u16;
    if count == 0 {
        return Vec::new();
    }
    let available = total.saturating_sub(CHECKBOX_WIDTH);
    let per = available / count;
    let mut widths = vec![per; count as usize];
    if let Some(last) = widths.last_mut() {
        *last += available - per * count;
    }
    widths
}

fn draw_header(app: &App, buffer: &mut Buffer, area: Rect, widths: &[u16]) {
    let theme = app.theme;
    buffer.fill(Rect::new(area.x, area.y, area.width, 1), theme.on_primary, theme.primary);

    let all = app.table.all_selected_on_page();
    let checkbox = if all { "[x] " } else { "[ ] " };
    let mut x = buffer.draw_str(
        area.x,
        area.y,
        checkbox,
        theme.on_primary,
        theme.primary,
        TextStyle::bold(),
    );

    for (i, col) in app.table.columns().visible().enumerate() {
        let Some(&width) = widths.get(i) else { break };
        let indicator = match app.table.sort_indicator(&col.key) {
            Some(SortDirection::Ascending) => " ▲",
            Some(SortDirection::Descending) => " ▼",
            None => "",
        };
        let bg = if i == app.col_cursor {
            theme.primary_dark
        } else {
            theme.primary
        };
        let label = fit_to_width(&format!("{}{}", col.name, indicator), width as usize);
        x = buffer.draw_str(x, area.y, &label, theme.on_primary, bg, TextStyle::bold());
    }
}

fn draw_body(app: &App, buffer: &mut Buffer, area: Rect, widths: &[u16]) {
    let theme = app.theme;

    match app.table.phase() {
        LoadPhase::Idle | LoadPhase::Loading => {
            draw_state_line(buffer, area, "Loading clients…", theme.muted, theme.background);
            return;
        }
        LoadPhase::Failed => {
            draw_state_line(buffer, area, "Failed to load data", theme.danger, theme.background);
            return;
        }
        LoadPhase::Loaded => {}
    }

    let rows = app.table.page_rows();
    if rows.is_empty() {
        draw_state_line(buffer, area, "No matching clients", theme.muted, theme.background);
        return;
    }

    let cursor_active = matches!(app.mode, Mode::Browse | Mode::Edit { .. });
    for (i, (abs, record)) in rows.iter().enumerate() {
        let y = area.y + 1 + i as u16;
        if y >= area.bottom() {
            break;
        }

        let selected = app.table.is_selected(*abs);
        let focused = cursor_active && i == app.row_cursor;
        let (fg, bg) = row_colors(app, focused, selected);
        buffer.fill(Rect::new(area.x, y, area.width, 1), fg, bg);

        let checkbox = if selected { "[x] " } else { "[ ] " };
        let mut x = buffer.draw_str(area.x, y, checkbox, fg, bg, TextStyle::new());

        for (c, col) in app.table.columns().visible().enumerate() {
            let Some(&width) = widths.get(c) else { break };
            let editing = focused && c == app.col_cursor;
            let content = match (&app.mode, editing) {
                (Mode::Edit { buffer: text }, true) => format!("{text}▌"),
                _ => record.display(&col.key),
            };
            let style = if editing && matches!(app.mode, Mode::Edit { .. }) {
                TextStyle {
                    underline: true,
                    ..TextStyle::new()
                }
            } else {
                TextStyle::new()
            };
            let cell = fit_to_width(&content, width as usize);
            x = buffer.draw_str(x, y, &cell, fg, bg, style);
        }
    }
}

fn row_colors(app: &App, focused: bool, selected: bool) -> (Rgb, Rgb) {
    let theme = app.theme;
    if focused {
        (theme.on_primary, theme.cursor)
    } else if selected {
        (theme.on_primary, theme.selection)
    } else {
        (theme.text, theme.background)
    }
}

fn draw_state_line(buffer: &mut Buffer, area: Rect, text: &str, fg: Rgb, bg: Rgb) {
    buffer.draw_str(area.x + 1, area.y + 2, text, fg, bg, TextStyle::new());
}

fn draw_pagination(app: &App, buffer: &mut Buffer, area: Rect) {
    let theme = app.theme;
    let y = area.y + 2 + PAGE_SIZE as u16;
    if y >= area.bottom() {
        return;
    }

    let page = app.table.page();
    let count = app.table.page_count();

    let prev_fg = if page <= 1 { theme.muted } else { theme.text };
    let mut x = buffer.draw_str(
        area.x,
        y,
        "‹ Previous  ",
        prev_fg,
        theme.background,
        TextStyle::new(),
    );

    for n in 1..=count {
        let (fg, bg, style) = if n == page {
            (theme.on_primary, theme.primary, TextStyle::bold())
        } else {
            (theme.text, theme.background, TextStyle::new())
        };
        x = buffer.draw_str(x, y, &format!(" {n} "), fg, bg, style);
        x = buffer.draw_str(x, y, " ", theme.text, theme.background, TextStyle::new());
    }

    let next_fg = if page >= count { theme.muted } else { theme.text };
    buffer.draw_str(x, y, " Next ›", next_fg, theme.background, TextStyle::new());
}

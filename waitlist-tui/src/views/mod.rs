//! Render functions. Views are pure: they read the app state and draw into
//! the frame buffer; intents flow back only through the key handlers.

mod column_menu;
mod drawer;
mod table;
mod toolbar;

use crate::app::{App, Mode};
use crate::buffer::{Buffer, Rect, TextStyle};
use crate::text::display_width;
use crate::toast::ToastLevel;

/// Width of the collapsed drawer rail.
const DRAWER_RAIL: u16 = 4;
/// Width of the expanded drawer.
const DRAWER_WIDTH: u16 = 20;

/// Draw one frame.
pub fn draw(app: &App, buffer: &mut Buffer) {
    let theme = app.theme;
    let area = buffer.area();
    buffer.fill(area, theme.text, theme.background);

    let drawer_width = if app.drawer.is_open() {
        DRAWER_WIDTH.min(area.width)
    } else {
        DRAWER_RAIL.min(area.width)
    };
    drawer::draw(app, buffer, Rect::new(0, 0, drawer_width, area.height));

    let main = Rect::new(
        drawer_width,
        0,
        area.width.saturating_sub(drawer_width),
        area.height,
    );
    if main.width < 20 || main.height < 12 {
        return; // Too small to lay out the dashboard.
    }

    buffer.draw_str(
        main.x + 2,
        1,
        "Dashboard",
        theme.primary,
        theme.background,
        TextStyle::bold(),
    );

    toolbar::draw(app, buffer, Rect::new(main.x + 2, 3, main.width - 4, 1));
    table::draw(app, buffer, Rect::new(main.x + 2, 5, main.width - 4, main.height - 7));

    draw_hints(app, buffer, main);
    draw_toasts(app, buffer, main);

    if let Mode::Columns { cursor } = &app.mode {
        column_menu::draw(app, buffer, main, *cursor);
    }
}

fn draw_hints(app: &App, buffer: &mut Buffer, main: Rect) {
    let theme = app.theme;
    let hints = match &app.mode {
        Mode::Browse => {
            "/ search · space select · a select page · s sort · e edit · c columns · r reset · b drawer · q quit"
        }
        Mode::Search => "type to filter · enter/esc done · ctrl+u clear",
        Mode::Edit { .. } => "enter commit · esc discard",
        Mode::Columns { .. } => "space toggle · shift+↑/↓ move · R show all · esc close",
    };
    let y = main.bottom().saturating_sub(1);
    buffer.draw_str(
        main.x + 2,
        y,
        hints,
        theme.muted,
        theme.background,
        TextStyle::new(),
    );
}

fn draw_toasts(app: &App, buffer: &mut Buffer, main: Rect) {
    let theme = app.theme;
    if app.toasts.is_empty() {
        return;
    }

    let toasts: Vec<_> = app.toasts.iter().collect();
    let mut y = main.bottom().saturating_sub(2 + toasts.len() as u16);
    for toast in toasts {
        let fg = match toast.level {
            ToastLevel::Info => theme.text,
            ToastLevel::Success => theme.success,
            ToastLevel::Error => theme.danger,
        };
        let text = format!(" {} ", toast.message);
        let width = display_width(&text) as u16;
        let x = main.right().saturating_sub(width + 2);
        buffer.draw_str(x, y, &text, fg, theme.accent, TextStyle::bold());
        y += 1;
    }
}

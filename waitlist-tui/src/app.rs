//! The application: core state, shell-local cursors, and the event loop.

use std::io;
use std::time::Duration;

use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyEventKind;
use futures::StreamExt;
use log::{debug, error};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use waitlist_client::Error;
use waitlist_client::WaitlistClient;
use waitlist_core::TableState;
use waitlist_core::drawer::DrawerState;
use waitlist_core::model::Record;
use waitlist_core::view::PAGE_SIZE;

use crate::event::{Key, Modifiers};
use crate::terminal::Terminal;
use crate::theme::Theme;
use crate::toast::{Toast, ToastStack};
use crate::views;

/// Input mode of the shell.
///
/// The mode decides which widget the keyboard drives; the core state
/// underneath is the same in every mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Navigation keys drive the table.
    Browse,
    /// Typing edits the search query live.
    Search,
    /// Inline cell editor over the focused cell.
    Edit { buffer: String },
    /// The column menu overlay.
    Columns { cursor: usize },
}

pub struct App {
    pub table: TableState,
    pub drawer: DrawerState,
    pub mode: Mode,
    /// Focused row within the current page slice.
    pub row_cursor: usize,
    /// Focused column within the visible columns.
    pub col_cursor: usize,
    pub toasts: ToastStack,
    pub theme: Theme,
    should_quit: bool,
    fetch_pending: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            table: TableState::default(),
            drawer: DrawerState::new(),
            mode: Mode::Browse,
            row_cursor: 0,
            col_cursor: 0,
            toasts: ToastStack::new(),
            theme: Theme::default(),
            should_quit: false,
            fetch_pending: false,
        }
    }

    /// Run until quit. Issues the one-time fetch at startup; the result
    /// arrives over a channel into the select loop. Teardown cancels the
    /// fetch task so a late result is discarded, never applied.
    pub async fn run(mut self) -> io::Result<()> {
        let mut terminal = Terminal::new()?;

        let client = WaitlistClient::builder().build();
        let (tx, mut rx) = mpsc::channel::<Result<Vec<Record>, Error>>(1);
        let cancel = CancellationToken::new();

        self.table.begin_load();
        self.fetch_pending = true;
        {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = cancel.cancelled() => {}
                    result = client.fetch_records() => {
                        let _ = tx.send(result).await;
                    }
                }
            });
        }

        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        while !self.should_quit {
            terminal.render(|buffer| views::draw(&self, buffer))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => {
                            error!("event stream error: {e}");
                            break;
                        }
                        None => break,
                    }
                }
                result = rx.recv(), if self.fetch_pending => {
                    self.fetch_pending = false;
                    self.apply_fetch_result(result);
                }
                _ = tick.tick() => {
                    self.toasts.expire();
                }
            }
        }

        cancel.cancel();
        Ok(())
    }

    fn apply_fetch_result(&mut self, result: Option<Result<Vec<Record>, Error>>) {
        match result {
            Some(Ok(records)) => {
                self.table.load(records);
                self.toasts.push(Toast::success("Data fetched successfully!"));
            }
            Some(Err(e)) => {
                error!("fetch failed: {e}");
                self.table.load_failed();
                self.toasts.push(Toast::error("Error fetching data!"));
            }
            // Sender dropped without a result; treat as a failed load.
            None => {
                self.table.load_failed();
                self.toasts.push(Toast::error("Error fetching data!"));
            }
        }
        self.clamp_cursors();
    }

    fn handle_event(&mut self, event: CrosstermEvent) {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                self.on_key(Key::from(key.code), Modifiers::from(key.modifiers));
            }
            // Resize is picked up on the next render.
            _ => {}
        }
    }

    fn on_key(&mut self, key: Key, mods: Modifiers) {
        match std::mem::replace(&mut self.mode, Mode::Browse) {
            Mode::Browse => self.on_browse_key(key, mods),
            Mode::Search => self.on_search_key(key, mods),
            Mode::Edit { buffer } => self.on_edit_key(key, buffer),
            Mode::Columns { cursor } => self.on_columns_key(key, mods, cursor),
        }
    }

    // -------------------------------------------------------------------------
    // Browse mode
    // -------------------------------------------------------------------------

    fn on_browse_key(&mut self, key: Key, mods: Modifiers) {
        match key {
            Key::Char('c') if mods.ctrl => self.should_quit = true,
            Key::Char('q') => self.should_quit = true,
            Key::Char('/') => self.mode = Mode::Search,
            Key::Char('b') => self.drawer.toggle(),
            Key::Tab => {
                let next = self.drawer.active().next();
                self.drawer.activate(next);
            }
            Key::Char('c') => self.mode = Mode::Columns { cursor: 0 },
            Key::Char('r') => {
                self.table.reset_columns();
                self.clamp_cursors();
            }
            Key::Char('a') => {
                let all = self.table.all_selected_on_page();
                self.table.set_page_selected(!all);
            }
            Key::Char(' ') => {
                if let Some(abs) = self.cursor_absolute() {
                    self.table.toggle_row(abs);
                }
            }
            Key::Up | Key::Char('k') => {
                self.row_cursor = self.row_cursor.saturating_sub(1);
            }
            Key::Down | Key::Char('j') => {
                self.row_cursor += 1;
                self.clamp_cursors();
            }
            Key::Left | Key::Char('h') => {
                self.col_cursor = self.col_cursor.saturating_sub(1);
            }
            Key::Right | Key::Char('l') => {
                self.col_cursor += 1;
                self.clamp_cursors();
            }
            Key::Char('n') | Key::PageDown => {
                self.table.next_page();
                self.clamp_cursors();
            }
            Key::Char('p') | Key::PageUp => {
                self.table.prev_page();
                self.clamp_cursors();
            }
            Key::Char(c @ '1'..='9') => {
                self.table.set_page(c as usize - '0' as usize);
                self.clamp_cursors();
            }
            Key::Char('s') => {
                if let Some(key) = self.focused_column_key() {
                    self.table.toggle_sort(&key);
                    self.clamp_cursors();
                }
            }
            Key::Char('e') | Key::Enter => {
                if let (Some(abs), Some(key)) = (self.cursor_absolute(), self.focused_column_key())
                {
                    let current = self
                        .table
                        .row_at(abs)
                        .map(|row| row.display(&key))
                        .unwrap_or_default();
                    self.mode = Mode::Edit { buffer: current };
                }
            }
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // Search mode
    // -------------------------------------------------------------------------

    fn on_search_key(&mut self, key: Key, mods: Modifiers) {
        match key {
            Key::Escape | Key::Enter => return,
            Key::Backspace => {
                let mut query = self.table.query().to_string();
                query.pop();
                self.table.set_query(query);
                self.clamp_cursors();
            }
            Key::Char('u') if mods.ctrl => {
                self.table.set_query("");
                self.clamp_cursors();
            }
            Key::Char(c) if !mods.ctrl => {
                let mut query = self.table.query().to_string();
                query.push(c);
                self.table.set_query(query);
                self.clamp_cursors();
            }
            _ => {}
        }
        self.mode = Mode::Search;
    }

    // -------------------------------------------------------------------------
    // Inline cell editor
    // -------------------------------------------------------------------------

    fn on_edit_key(&mut self, key: Key, mut buffer: String) {
        match key {
            Key::Escape => return,
            Key::Enter => {
                if let (Some(abs), Some(col_key)) =
                    (self.cursor_absolute(), self.focused_column_key())
                {
                    debug!("edit commit at {abs}: {col_key}={buffer}");
                    self.table.edit_field(abs, &col_key, buffer);
                    // The edit can move the row under an active sort/filter.
                    self.clamp_cursors();
                }
                return;
            }
            Key::Backspace => {
                buffer.pop();
            }
            Key::Char(c) => buffer.push(c),
            _ => {}
        }
        self.mode = Mode::Edit { buffer };
    }

    // -------------------------------------------------------------------------
    // Column menu
    // -------------------------------------------------------------------------

    fn on_columns_key(&mut self, key: Key, mods: Modifiers, mut cursor: usize) {
        let count = self.table.columns().len();
        match key {
            Key::Escape | Key::Char('c') => {
                self.clamp_cursors();
                return;
            }
            Key::Up if mods.shift => {
                if cursor > 0 {
                    self.table.reorder_column(cursor, cursor - 1);
                    cursor -= 1;
                }
            }
            Key::Down if mods.shift => {
                if cursor + 1 < count {
                    self.table.reorder_column(cursor, cursor + 1);
                    cursor += 1;
                }
            }
            Key::Up | Key::Char('k') => cursor = cursor.saturating_sub(1),
            Key::Down | Key::Char('j') => {
                cursor = (cursor + 1).min(count.saturating_sub(1));
            }
            Key::Char(' ') => {
                let key = self
                    .table
                    .columns()
                    .iter()
                    .nth(cursor)
                    .map(|c| c.key.clone());
                if let Some(key) = key {
                    self.table.toggle_column(&key);
                }
            }
            Key::Char('R') => self.table.show_all_columns(),
            _ => {}
        }
        self.mode = Mode::Columns { cursor };
    }

    // -------------------------------------------------------------------------
    // Cursor helpers
    // -------------------------------------------------------------------------

    /// Absolute index (into the filtered+sorted view) of the focused row.
    pub fn cursor_absolute(&self) -> Option<usize> {
        let page_len = self.table.page_rows().len();
        if self.row_cursor < page_len {
            Some((self.table.page() - 1) * PAGE_SIZE + self.row_cursor)
        } else {
            None
        }
    }

    /// Key of the focused visible column.
    pub fn focused_column_key(&self) -> Option<String> {
        self.table
            .columns()
            .visible()
            .nth(self.col_cursor)
            .map(|c| c.key.clone())
    }

    fn clamp_cursors(&mut self) {
        let page_len = self.table.page_rows().len();
        self.row_cursor = self.row_cursor.min(page_len.saturating_sub(1));
        let visible = self.table.columns().visible().count();
        self.col_cursor = self.col_cursor.min(visible.saturating_sub(1));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

//! Modal dialog component.
//!
//! While a dialog is visible it receives every key and mouse event, so the
//! screen underneath cannot be operated until the dialog is dismissed.

use crate::constants::BUTTON_OK;
use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, style::Color, widgets::ScrollbarState, Frame};

use super::button::Button;
use super::dialogs::system_dialogs;

const PAGE_SIZE: usize = 10;

/// Modal dialog component for errors, help and the log viewer.
///
/// # Dialog Types
/// - **Error** - input and resource errors, dismissed with Enter, Esc or OK
/// - **Help** - scrollable key binding reference
/// - **Logs** - scrollable view of the in-memory log buffer
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    ok_button: Button,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            ok_button: Button::new(BUTTON_OK, Action::HideDialog),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn ok_button(&self) -> &Button {
        &self.ok_button
    }

    fn is_scrollable(&self) -> bool {
        matches!(self.dialog_type, Some(DialogType::Help | DialogType::Logs))
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('G') => {
                Action::HideDialog
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_by(-1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_by(1);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_by(-(PAGE_SIZE as isize));
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_by(PAGE_SIZE as isize);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_to(0);
                Action::None
            }
            KeyCode::End => {
                // clamped on the next render
                self.scroll_to(usize::MAX);
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_scrollable() {
            return self.handle_scroll_key(key);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => Action::HideDialog,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.is_scrollable() {
            match mouse.kind {
                MouseEventKind::ScrollUp => self.scroll_by(-1),
                MouseEventKind::ScrollDown => self.scroll_by(1),
                _ => {}
            }
            return Action::None;
        }

        self.ok_button.click(&mouse).unwrap_or(Action::None)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::Error { title, message } => {
                system_dialogs::render_message_dialog(f, rect, &title, &message, Color::Red, &mut self.ok_button);
            }
            DialogType::Help => {
                self.scroll_offset =
                    system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Logs => {
                self.scroll_offset = system_dialogs::render_logs_dialog(
                    f,
                    rect,
                    self.logger.as_ref(),
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
        }
    }
}

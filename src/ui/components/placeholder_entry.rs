//! Single-line text input with ghost placeholder text.
//!
//! The placeholder is tracked with an explicit flag rather than inferred from
//! styling: while [`PlaceholderEntry::is_placeholder_shown`] is true the entry
//! has no value of its own and [`PlaceholderEntry::value`] is empty.

use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::button::is_left_click;

pub struct PlaceholderEntry {
    placeholder: String,
    text: String,
    /// Cursor position in characters, not bytes
    cursor_position: usize,
    placeholder_shown: bool,
    focused: bool,
    area: Rect,
}

impl PlaceholderEntry {
    /// A blurred, empty entry showing `placeholder`
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            text: String::new(),
            cursor_position: 0,
            placeholder_shown: true,
            focused: false,
            area: Rect::default(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_placeholder_shown(&self) -> bool {
        self.placeholder_shown
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// What the user typed; empty while the placeholder is shown
    pub fn value(&self) -> &str {
        if self.placeholder_shown {
            ""
        } else {
            &self.text
        }
    }

    /// What the entry currently displays
    pub fn display_text(&self) -> &str {
        if self.placeholder_shown {
            &self.placeholder
        } else {
            &self.text
        }
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Area drawn by the last render
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Gain focus, removing the placeholder if it is showing
    pub fn focus_in(&mut self) {
        self.focused = true;
        self.hide_placeholder();
    }

    /// Lose focus, bringing the placeholder back if nothing was typed
    pub fn focus_out(&mut self) {
        self.focused = false;
        self.show_placeholder_if_empty();
    }

    /// Drop the typed text and return to the blurred placeholder state
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
        self.focus_out();
    }

    /// Replace the typed text, placing the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor_position = self.text.chars().count();
        self.placeholder_shown = false;
        if !self.focused {
            self.show_placeholder_if_empty();
        }
    }

    fn hide_placeholder(&mut self) {
        if self.placeholder_shown {
            self.text.clear();
            self.cursor_position = 0;
            self.placeholder_shown = false;
        }
    }

    fn show_placeholder_if_empty(&mut self) {
        if self.text.is_empty() {
            self.placeholder_shown = true;
            self.cursor_position = 0;
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.text.len())
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        self.hide_placeholder();
        let byte_pos = self.byte_index(self.cursor_position);
        self.text.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.placeholder_shown || self.cursor_position == 0 {
            return;
        }
        let byte_pos = self.byte_index(self.cursor_position - 1);
        self.text.remove(byte_pos);
        self.cursor_position -= 1;
    }

    pub fn delete_at_cursor(&mut self) {
        if self.placeholder_shown || self.cursor_position >= self.char_count() {
            return;
        }
        let byte_pos = self.byte_index(self.cursor_position);
        self.text.remove(byte_pos);
    }

    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if !self.placeholder_shown && self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_end(&mut self) {
        if !self.placeholder_shown {
            self.cursor_position = self.char_count();
        }
    }

    /// Whether a mouse event clicked inside the entry
    pub fn is_hit(&self, mouse: &MouseEvent) -> bool {
        is_left_click(mouse) && LayoutManager::contains(self.area, mouse.column, mouse.row)
    }
}

impl Component for PlaceholderEntry {
    /// Editing keys. Enter requests a search; focus changes belong to the owner.
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => return Action::Search,
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert_char(c);
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        let visible_width = usize::from(inner.width.max(1));

        // Scroll horizontally so the cursor stays visible
        let scroll = self.cursor_position.saturating_sub(visible_width - 1);

        let line = if self.placeholder_shown {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            let visible: String = self.text.chars().skip(scroll).take(visible_width).collect();
            Line::from(Span::styled(visible, Style::default().fg(Color::White)))
        };

        f.render_widget(Paragraph::new(line).block(block), rect);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let offset = u16::try_from(self.cursor_position - scroll).unwrap_or(u16::MAX);
            let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
            f.set_cursor_position(Position::new(x, inner.y));
        }
    }
}

//! Welcome screen shown at startup and after leaving the main screen

use crate::constants::{BUTTON_CONTINUE, BUTTON_EXIT, INTRO_DESCRIPTION, INTRO_HEADING};
use crate::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use super::button::{Button, BUTTON_HEIGHT};

pub struct IntroScreen {
    buttons: [Button; 2],
    focused: usize,
}

impl Default for IntroScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl IntroScreen {
    pub fn new() -> Self {
        Self {
            buttons: [
                Button::new(BUTTON_CONTINUE, Action::Continue),
                Button::new(BUTTON_EXIT, Action::Quit),
            ],
            focused: 0,
        }
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.buttons.len();
    }

    fn focus_previous(&mut self) {
        self.focused = (self.focused + self.buttons.len() - 1) % self.buttons.len();
    }
}

impl Component for IntroScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.buttons[self.focused].action(),
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.focus_next();
                Action::None
            }
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.focus_previous();
                Action::None
            }
            KeyCode::Char('c') => Action::Continue,
            KeyCode::Char('q') | KeyCode::Char('e') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        for (index, button) in self.buttons.iter().enumerate() {
            if let Some(action) = button.click(&mouse) {
                self.focused = index;
                return action;
            }
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Fill(1),
            ])
            .split(rect);

        let heading = Paragraph::new(INTRO_HEADING)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
        let description = Paragraph::new(INTRO_DESCRIPTION)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));

        f.render_widget(heading, chunks[1]);
        f.render_widget(description, chunks[3]);

        let focused = self.focused;
        let [continue_button, exit_button] = &mut self.buttons;
        continue_button.render(f, chunks[5], focused == 0);
        exit_button.render(f, chunks[7], focused == 1);
    }
}

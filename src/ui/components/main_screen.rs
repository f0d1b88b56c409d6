//! Main screen: fun fact search bar, result line and category tabs.
//!
//! The screen is rebuilt from scratch every time it is entered, so search
//! text and results never survive a trip back to the intro screen.

use crate::constants::{BUTTON_CLEAR, BUTTON_SEARCH, DIALOG_TITLE_INPUT_ERROR, SEARCH_LABEL, SEARCH_PLACEHOLDER};
use crate::content::Content;
use crate::logger::Logger;
use crate::search;
use crate::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;

use super::button::{is_left_click, Button, BUTTON_HEIGHT};
use super::category_tabs::{CategoryTabs, TabButton};
use super::placeholder_entry::PlaceholderEntry;

/// Focusable elements of the main screen, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainFocus {
    Entry,
    SearchButton,
    ClearButton,
    SymbolsButton,
    BackButton,
}

impl MainFocus {
    const ORDER: [MainFocus; 5] = [
        MainFocus::Entry,
        MainFocus::SearchButton,
        MainFocus::ClearButton,
        MainFocus::SymbolsButton,
        MainFocus::BackButton,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct MainScreen {
    content: Arc<Content>,
    entry: PlaceholderEntry,
    search_button: Button,
    clear_button: Button,
    tabs: CategoryTabs,
    result: String,
    focus: MainFocus,
    logger: Logger,
}

impl MainScreen {
    pub fn new(content: Arc<Content>, logger: Logger) -> Self {
        Self {
            tabs: CategoryTabs::new(content.clone()),
            content,
            entry: PlaceholderEntry::new(SEARCH_PLACEHOLDER),
            search_button: Button::new(BUTTON_SEARCH, Action::Search),
            clear_button: Button::new(BUTTON_CLEAR, Action::ClearSearch),
            result: String::new(),
            focus: MainFocus::SearchButton,
            logger,
        }
    }

    pub fn entry(&self) -> &PlaceholderEntry {
        &self.entry
    }

    pub fn entry_mut(&mut self) -> &mut PlaceholderEntry {
        &mut self.entry
    }

    pub fn tabs(&self) -> &CategoryTabs {
        &self.tabs
    }

    /// Text currently shown in the result area
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn focus(&self) -> MainFocus {
        self.focus
    }

    /// Move focus, keeping the entry's focus state in step
    pub fn set_focus(&mut self, focus: MainFocus) {
        if focus == MainFocus::Entry {
            self.entry.focus_in();
        } else if self.entry.is_focused() {
            self.entry.focus_out();
        }
        self.focus = focus;
    }

    /// Validate the entry and show the lookup result.
    ///
    /// Invalid input leaves the result untouched and yields an error dialog.
    pub fn search(&mut self) -> Action {
        match search::search(self.entry.value(), self.entry.placeholder(), self.content.fun_facts()) {
            Ok(outcome) => {
                self.logger.log(format!(
                    "Search: '{}' {}",
                    outcome.term(),
                    if outcome.is_hit() { "found a fun fact" } else { "has no fun fact" }
                ));
                self.result = outcome.to_string();
                Action::None
            }
            Err(e) => {
                self.logger
                    .log(format!("Search: rejected input '{}': {}", self.entry.value(), e));
                Action::ShowDialog(DialogType::error(DIALOG_TITLE_INPUT_ERROR, e.to_string()))
            }
        }
    }

    /// Reset the entry to its placeholder and blank the result
    pub fn clear(&mut self) {
        self.entry.clear();
        if self.focus == MainFocus::Entry {
            self.focus = MainFocus::SearchButton;
        }
        self.result.clear();
        self.logger.log("Search: cleared".to_string());
    }

    fn activate_focused(&mut self) -> Action {
        match self.focus {
            MainFocus::Entry => Action::Search,
            MainFocus::SearchButton => self.search_button.action(),
            MainFocus::ClearButton => self.clear_button.action(),
            MainFocus::SymbolsButton => self.tabs.button(TabButton::Symbols).action(),
            MainFocus::BackButton => self.tabs.button(TabButton::Back).action(),
        }
    }

    fn handle_entry_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.set_focus(MainFocus::SearchButton);
                Action::None
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                Action::None
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.previous());
                Action::None
            }
            _ => self.entry.handle_key_events(key),
        }
    }

    fn tab_focus(&self) -> Option<TabButton> {
        match self.focus {
            MainFocus::SymbolsButton => Some(TabButton::Symbols),
            MainFocus::BackButton => Some(TabButton::Back),
            _ => None,
        }
    }
}

impl Component for MainScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.focus == MainFocus::Entry {
            return self.handle_entry_key(key);
        }

        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => {
                self.set_focus(MainFocus::Entry);
                Action::None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.set_focus(self.focus.next());
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus(self.focus.previous());
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Right | KeyCode::Char('l') => Action::NextTab,
            KeyCode::Left | KeyCode::Char('h') => Action::PreviousTab,
            KeyCode::Char(c @ '1'..='9') => Action::SelectTab(c as usize - '1' as usize),
            KeyCode::Char('s') => Action::OpenSymbols,
            KeyCode::Char('x') => Action::ClearSearch,
            KeyCode::Char('b') | KeyCode::Esc => Action::Back,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !is_left_click(&mouse) {
            return Action::None;
        }

        if self.entry.is_hit(&mouse) {
            self.set_focus(MainFocus::Entry);
            return Action::None;
        }

        let (focus, action) = if let Some(action) = self.search_button.click(&mouse) {
            (MainFocus::SearchButton, action)
        } else if let Some(action) = self.clear_button.click(&mouse) {
            (MainFocus::ClearButton, action)
        } else if let Some(action) = self.tabs.handle_mouse(&mouse) {
            let focus = match action {
                Action::OpenSymbols => MainFocus::SymbolsButton,
                Action::Back => MainFocus::BackButton,
                _ if self.focus == MainFocus::Entry => MainFocus::SearchButton,
                _ => self.focus,
            };
            (focus, action)
        } else {
            // A click elsewhere takes focus away from the entry
            let focus = if self.focus == MainFocus::Entry {
                MainFocus::SearchButton
            } else {
                self.focus
            };
            (focus, Action::None)
        };

        self.set_focus(focus);
        action
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Search => self.search(),
            Action::ClearSearch => {
                self.clear();
                Action::None
            }
            Action::SelectTab(index) => {
                if self.tabs.select(index) {
                    self.logger.log(format!("Tabs: selected {}", self.tabs.titles()[index]));
                }
                Action::None
            }
            Action::NextTab => {
                self.tabs.next();
                Action::None
            }
            Action::PreviousTab => {
                self.tabs.previous();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(3),
                Constraint::Min(12),
            ])
            .split(rect);

        let label_width = u16::try_from(SEARCH_LABEL.len()).unwrap_or(0) + 2;
        let search_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(label_width),
                Constraint::Min(20),
                Constraint::Length(self.search_button.width() + 1),
                Constraint::Length(self.clear_button.width() + 1),
            ])
            .split(chunks[0]);

        let label = Paragraph::new(SEARCH_LABEL)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::White));
        let label_area = Rect {
            y: search_row[0].y + 1,
            height: 1,
            ..search_row[0]
        };
        f.render_widget(label, label_area);

        self.entry.render(f, search_row[1]);
        self.search_button
            .render(f, search_row[2], self.focus == MainFocus::SearchButton);
        self.clear_button
            .render(f, search_row[3], self.focus == MainFocus::ClearButton);

        let result = Paragraph::new(self.result.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true });
        f.render_widget(result, chunks[1]);

        let tab_focus = self.tab_focus();
        self.tabs.render(f, chunks[2], tab_focus);
    }
}

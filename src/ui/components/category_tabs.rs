//! Tabbed view with one tab per recycling category

use crate::constants::{BUTTON_BACK, BUTTON_SYMBOLS};
use crate::content::{Category, Content};
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;
use crossterm::event::MouseEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use std::sync::Arc;

use super::button::{is_left_click, Button, BUTTON_HEIGHT};

/// Width of the padding on each side of a tab title and of the divider
const TAB_PADDING: u16 = 1;
const TAB_DIVIDER: u16 = 1;

/// Which of the tab body buttons has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabButton {
    Symbols,
    Back,
}

pub struct CategoryTabs {
    content: Arc<Content>,
    selected: usize,
    symbols_button: Button,
    back_button: Button,
    header_area: Rect,
}

impl CategoryTabs {
    pub fn new(content: Arc<Content>) -> Self {
        Self {
            content,
            selected: 0,
            symbols_button: Button::new(BUTTON_SYMBOLS, Action::OpenSymbols),
            back_button: Button::new(BUTTON_BACK, Action::Back),
            header_area: Rect::default(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.content.guide(self.selected).map(|guide| guide.category)
    }

    /// Tab titles in display order
    pub fn titles(&self) -> Vec<&'static str> {
        self.content.guides().iter().map(|guide| guide.category.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.content.guides().len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.guides().is_empty()
    }

    /// Select a tab by index; out of range indexes are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.selected = (self.selected + 1) % self.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.is_empty() {
            self.selected = (self.selected + self.len() - 1) % self.len();
        }
    }

    pub fn button(&self, which: TabButton) -> &Button {
        match which {
            TabButton::Symbols => &self.symbols_button,
            TabButton::Back => &self.back_button,
        }
    }

    /// Column ranges of each tab title (padding included) in the last render
    fn title_spans(&self) -> Vec<(u16, u16)> {
        let mut x = self.header_area.x;
        let mut spans = Vec::with_capacity(self.len());
        for title in self.titles() {
            let width = TAB_PADDING * 2 + u16::try_from(Line::from(title).width()).unwrap_or(0);
            spans.push((x, x + width));
            x += width + TAB_DIVIDER;
        }
        spans
    }

    /// Map a click to a tab selection or one of the body buttons
    pub fn handle_mouse(&self, mouse: &MouseEvent) -> Option<Action> {
        if !is_left_click(mouse) {
            return None;
        }

        if LayoutManager::contains(self.header_area, mouse.column, mouse.row) {
            return self
                .title_spans()
                .iter()
                .position(|(start, end)| (*start..*end).contains(&mouse.column))
                .map(Action::SelectTab);
        }

        self.symbols_button
            .click(mouse)
            .or_else(|| self.back_button.click(mouse))
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, focus: Option<TabButton>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(BUTTON_HEIGHT),
            ])
            .split(inner);

        self.header_area = chunks[0];
        let tabs = Tabs::new(self.titles())
            .select(self.selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
        f.render_widget(tabs, chunks[0]);

        if let Some(guide) = self.content.guide(self.selected) {
            let body = Paragraph::new(guide.instructions)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::NONE));
            let body_area = Rect {
                x: chunks[2].x + 1,
                width: chunks[2].width.saturating_sub(2),
                ..chunks[2]
            };
            f.render_widget(body, body_area);
        }

        self.symbols_button
            .render(f, chunks[3], focus == Some(TabButton::Symbols));
        self.back_button.render(f, chunks[4], focus == Some(TabButton::Back));
    }
}

//! Clickable, focusable push button

use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows a rendered button occupies
pub const BUTTON_HEIGHT: u16 = 3;

/// Whether a mouse event is a left-button press
pub fn is_left_click(mouse: &MouseEvent) -> bool {
    matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
}

/// A bordered label that emits its action when clicked or activated.
///
/// The area from the last render is kept for mouse hit testing; a button
/// that has not been rendered yet never matches a click.
#[derive(Debug, Clone)]
pub struct Button {
    label: &'static str,
    action: Action,
    area: Rect,
}

impl Button {
    pub fn new(label: &'static str, action: Action) -> Self {
        Self {
            label,
            action,
            area: Rect::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Action emitted on activation
    pub fn action(&self) -> Action {
        self.action.clone()
    }

    /// Width including borders and one column of padding on each side
    pub fn width(&self) -> u16 {
        u16::try_from(Line::from(self.label).width()).unwrap_or(u16::MAX).saturating_add(4)
    }

    /// Area drawn by the last render
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn is_hit(&self, mouse: &MouseEvent) -> bool {
        is_left_click(mouse) && LayoutManager::contains(self.area, mouse.column, mouse.row)
    }

    /// Action for a mouse event, if it clicked this button
    pub fn click(&self, mouse: &MouseEvent) -> Option<Action> {
        self.is_hit(mouse).then(|| self.action())
    }

    /// Render centered horizontally within `slot`
    pub fn render(&mut self, f: &mut Frame, slot: Rect, focused: bool) {
        let mut area = LayoutManager::centered_columns(self.width(), slot);
        area.height = area.height.min(BUTTON_HEIGHT);
        self.area = area;

        let (border_style, text_style) = if focused {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(Color::Gray), Style::default().fg(Color::White))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let paragraph = Paragraph::new(Line::styled(format!(" {} ", self.label), text_style))
            .alignment(Alignment::Center)
            .block(block);

        f.render_widget(paragraph, area);
    }
}

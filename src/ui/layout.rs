//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the window into content and a one line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(height_lines), Constraint::Min(0)])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Center `inner` inside `outer`, clamping it to fit
    #[must_use]
    pub fn center_rect(inner: Rect, outer: Rect) -> Rect {
        let x = outer.x + (outer.width.saturating_sub(inner.width)) / 2;
        let y = outer.y + (outer.height.saturating_sub(inner.height)) / 2;

        Rect {
            x,
            y,
            width: inner.width.min(outer.width),
            height: inner.height.min(outer.height),
        }
    }

    /// A horizontally centered strip of `width` columns
    #[must_use]
    pub fn centered_columns(width: u16, area: Rect) -> Rect {
        let width = width.min(area.width);
        Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
    }

    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}

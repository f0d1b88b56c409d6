use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, ScrollbarState, Wrap},
    Frame,
};

use super::common::{create_dialog_block, create_instructions_paragraph, create_scrollbar, shortcuts};
use crate::ui::components::button::{Button, BUTTON_HEIGHT};

const HELP_CONTENT: &str = r"
REEARTH - Recycling Guide
=========================

INTRO SCREEN
------------
Enter       Activate focused button
↑/↓ Tab     Move between buttons
c           Continue to the recycling guide
q / Esc     Exit

SEARCH (main screen)
--------------------
/ or i      Start typing in the search box
Enter       Search for a fun fact
Esc         Leave the search box
x           Clear search text and result

CATEGORIES
----------
←/→ h/l     Previous / next category
1-4         Jump to a category
s           Show recycling symbols
b / Esc     Back to the intro screen

GENERAL
-------
Tab         Move focus between search box and buttons
Enter       Activate focused button
Mouse       Click buttons, tabs and the search box
G           Show application logs
?           Show this help
q / Ctrl+C  Quit

Search accepts letters, spaces and hyphens. Known materials:
plastic, paper, metal, glass.
";

/// Render a modal message with an OK button
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    color: Color,
    ok_button: &mut Button,
) {
    let message_lines = u16::try_from(message.lines().count()).unwrap_or(1).max(1);
    let dialog_area = LayoutManager::centered_rect_lines(60, message_lines + 4 + BUTTON_HEIGHT, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .split(inner);

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message_paragraph, chunks[0]);

    ok_button.render(f, chunks[1], true);

    let instructions = create_instructions_paragraph(&[
        shortcuts::ENTER_DISMISS,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CLOSE,
    ]);
    f.render_widget(instructions, chunks[2]);
}

/// Render a scrollable text panel covering most of the screen.
///
/// Returns the scroll offset clamped to the content.
fn render_scrollable_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        f.render_stateful_widget(create_scrollbar(), content_area, scrollbar_state);
    }

    clamped_offset
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    render_scrollable_panel(f, area, DIALOG_TITLE_HELP, HELP_CONTENT, scroll_offset, scrollbar_state)
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: Option<&Logger>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let logs = logger.map(Logger::get_logs).unwrap_or_default();

    let logs_content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_scrollable_panel(f, area, DIALOG_TITLE_LOGS, &logs_content, scroll_offset, scrollbar_state)
}

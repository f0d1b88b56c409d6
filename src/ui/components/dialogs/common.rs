use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Creates a styled window or dialog block
pub fn create_dialog_block(title: &str, theme_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme_color))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Vertical scrollbar shared by the scrollable dialogs
pub fn create_scrollbar<'a>() -> Scrollbar<'a> {
    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White))
}

/// Common instruction shortcuts used across dialogs and the status bar
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_DISMISS: InstructionShortcut = ("Enter", Color::Green, " OK");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
    pub const SEARCH: InstructionShortcut = ("/", Color::Cyan, " Type search");
    pub const FOCUS: InstructionShortcut = ("Tab", Color::Cyan, " Focus");
    pub const TABS: InstructionShortcut = ("←/→", Color::Cyan, " Category");
    pub const SYMBOLS: InstructionShortcut = ("s", Color::Green, " Symbols");
    pub const CLEAR: InstructionShortcut = ("x", Color::Yellow, " Clear");
    pub const BACK: InstructionShortcut = ("b", Color::Yellow, " Back");
    pub const HELP: InstructionShortcut = ("?", Color::Magenta, " Help");
    pub const QUIT: InstructionShortcut = ("q", Color::Red, " Quit");
    pub const CONTINUE: InstructionShortcut = ("c", Color::Green, " Continue");
    pub const SUBMIT_SEARCH: InstructionShortcut = ("Enter", Color::Green, " Search");
    pub const LEAVE_ENTRY: InstructionShortcut = ("Esc", Color::Yellow, " Leave entry");
}

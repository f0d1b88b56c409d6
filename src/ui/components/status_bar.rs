//! Status bar component

use ratatui::{layout::Rect, Frame};

use super::dialogs::common::{create_instructions_paragraph, shortcuts, InstructionShortcut};
use super::main_screen::MainFocus;
use crate::ui::core::ScreenKind;

/// What the status bar should describe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusContext {
    Intro,
    Main(MainFocus),
    Symbols,
    Dialog,
    Panel,
}

impl StatusContext {
    pub fn for_screen(screen: ScreenKind, focus: Option<MainFocus>) -> Self {
        match (screen, focus) {
            (ScreenKind::Main, Some(focus)) => StatusContext::Main(focus),
            _ => StatusContext::Intro,
        }
    }
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    pub fn shortcuts(context: StatusContext) -> Vec<InstructionShortcut> {
        use shortcuts::*;

        let items: &[InstructionShortcut] = match context {
            StatusContext::Intro => &[CONTINUE, SEPARATOR, HELP, SEPARATOR, QUIT],
            StatusContext::Main(MainFocus::Entry) => &[SUBMIT_SEARCH, SEPARATOR, LEAVE_ENTRY, SEPARATOR, FOCUS],
            StatusContext::Main(_) => &[
                SEARCH, SEPARATOR, FOCUS, SEPARATOR, TABS, SEPARATOR, SYMBOLS, SEPARATOR, CLEAR, SEPARATOR, BACK,
                SEPARATOR, HELP,
            ],
            StatusContext::Symbols => &[ESC_CLOSE],
            StatusContext::Dialog => &[ENTER_DISMISS, SEPARATOR, ESC_CLOSE],
            StatusContext::Panel => &[SCROLL, SEPARATOR, ESC_CLOSE],
        };
        items.to_vec()
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, context: StatusContext) {
        f.render_widget(create_instructions_paragraph(&Self::shortcuts(context)), area);
    }
}

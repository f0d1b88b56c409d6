/// Which screen currently fills the root window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenKind {
    #[default]
    Intro,
    Main,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Continue,
    Back,
    SelectTab(usize),
    NextTab,
    PreviousTab,

    // Search
    Search,
    ClearSearch,

    // Symbols window
    OpenSymbols,
    CloseSymbols,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Error { title: String, message: String },
    Help,
    Logs,
}

impl DialogType {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogType::Error {
            title: title.into(),
            message: message.into(),
        }
    }
}

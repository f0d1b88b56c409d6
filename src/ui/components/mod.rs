//! Reusable UI components

pub mod button;
pub mod placeholder_entry;

// Component architecture
pub mod category_tabs;
pub mod dialog_component;
pub mod dialogs;
pub mod intro_screen;
pub mod main_screen;
pub mod status_bar;
pub mod symbols_window;

// Component exports
pub use button::Button;
pub use category_tabs::CategoryTabs;
pub use dialog_component::DialogComponent;
pub use intro_screen::IntroScreen;
pub use main_screen::{MainFocus, MainScreen};
pub use placeholder_entry::PlaceholderEntry;
pub use status_bar::StatusBar;
pub use symbols_window::SymbolsWindow;

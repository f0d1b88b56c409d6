//! Constants used throughout the application
//!
//! This module centralizes UI text, user-facing messages and default values
//! to improve maintainability and consistency.

// Window titles
pub const APP_TITLE: &str = "ReEarth Recycling App";
pub const SYMBOLS_WINDOW_TITLE: &str = "Additional Information";

// Intro screen
pub const INTRO_HEADING: &str = "Welcome to ReEarth";
pub const INTRO_DESCRIPTION: &str = "Make recycling more informative!";

// Main screen
pub const SEARCH_LABEL: &str = "Generate a fun fact:";
pub const SEARCH_PLACEHOLDER: &str = "Search here for plastic, paper, metal or glass";

// Symbols window
pub const SYMBOLS_CAPTION: &str = "Get to know the recycling symbols!";

// Button labels
pub const BUTTON_CONTINUE: &str = "Continue";
pub const BUTTON_EXIT: &str = "Exit";
pub const BUTTON_SEARCH: &str = "Search";
pub const BUTTON_CLEAR: &str = "Clear";
pub const BUTTON_SYMBOLS: &str = "Recycling symbols";
pub const BUTTON_BACK: &str = "Back";
pub const BUTTON_OK: &str = "OK";

// Validation error messages
pub const ERROR_EMPTY_SEARCH: &str = "Please enter an item to search.";
pub const ERROR_INVALID_SEARCH: &str = "Please enter a valid item name (letters, hyphens, and spaces only).";

// Dialog titles
pub const DIALOG_TITLE_INPUT_ERROR: &str = "Input Error";
pub const DIALOG_TITLE_RESOURCE_ERROR: &str = "Resource Error";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or 'Enter' to close";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// Default symbol images
pub const DEFAULT_PRIMARY_SYMBOLS_IMAGE: &str = "recycling1.png";
pub const DEFAULT_PRIMARY_SYMBOLS_SIZE: (u32, u32) = (800, 450);
pub const DEFAULT_SECONDARY_SYMBOLS_IMAGE: &str = "recycling2.png";
pub const DEFAULT_SECONDARY_SYMBOLS_SIZE: (u32, u32) = (650, 250);
/// Largest accepted edge for a configured symbols image, in pixels
pub const MAX_SYMBOLS_IMAGE_EDGE: u32 = 4096;

/// Font size assumed when the terminal cannot be queried for it
pub const FALLBACK_FONT_SIZE: (u16, u16) = (8, 16);

// Config and log file names
pub const CONFIG_FILE_NAME: &str = "reearth.toml";
pub const CONFIG_DIR_NAME: &str = "reearth";
pub const LOG_FILE_NAME: &str = "reearth.log";

use crate::key;
use crossterm::event::KeyCode;
use reearth::content::Content;
use reearth::logger::Logger;
use reearth::ui::components::{MainFocus, MainScreen};
use reearth::ui::core::{Action, Component, DialogType};
use std::sync::Arc;

fn new_screen() -> MainScreen {
    MainScreen::new(Arc::new(Content::new()), Logger::new())
}

#[test]
fn test_initial_state() {
    let screen = new_screen();
    assert_eq!(screen.focus(), MainFocus::SearchButton);
    assert!(screen.entry().is_placeholder_shown());
    assert_eq!(screen.result(), "");
    assert_eq!(screen.tabs().selected(), 0);
}

#[test]
fn test_focus_cycle() {
    let mut screen = new_screen();
    let mut seen = Vec::new();
    for _ in 0..5 {
        screen.handle_key_events(key(KeyCode::Tab));
        seen.push(screen.focus());
    }
    assert_eq!(
        seen,
        [
            MainFocus::ClearButton,
            MainFocus::SymbolsButton,
            MainFocus::BackButton,
            MainFocus::Entry,
            MainFocus::SearchButton,
        ]
    );

    screen.handle_key_events(key(KeyCode::BackTab));
    assert_eq!(screen.focus(), MainFocus::Entry);
    assert!(screen.entry().is_focused());
}

#[test]
fn test_focused_buttons_activate() {
    let mut screen = new_screen();

    screen.set_focus(MainFocus::SymbolsButton);
    assert_eq!(screen.handle_key_events(key(KeyCode::Enter)), Action::OpenSymbols);

    screen.set_focus(MainFocus::BackButton);
    assert_eq!(screen.handle_key_events(key(KeyCode::Enter)), Action::Back);

    screen.set_focus(MainFocus::ClearButton);
    assert_eq!(screen.handle_key_events(key(KeyCode::Char(' '))), Action::ClearSearch);
}

#[test]
fn test_entry_captures_letters() {
    let mut screen = new_screen();
    screen.set_focus(MainFocus::Entry);

    // Shortcut letters are typed while the entry has focus
    for c in "basic".chars() {
        assert_eq!(screen.handle_key_events(key(KeyCode::Char(c))), Action::None);
    }
    assert_eq!(screen.entry().value(), "basic");

    assert_eq!(screen.handle_key_events(key(KeyCode::Esc)), Action::None);
    assert_eq!(screen.focus(), MainFocus::SearchButton);
    assert_eq!(screen.handle_key_events(key(KeyCode::Char('b'))), Action::Back);
}

#[test]
fn test_search_results() {
    let mut screen = new_screen();
    screen.entry_mut().set_text("Paper");
    assert_eq!(screen.update(Action::Search), Action::None);
    assert_eq!(
        screen.result(),
        "Fun fact for Paper:\nDid you know? Recycling one ton of paper can save 17 trees and 7,000 gallons of water!"
    );

    screen.entry_mut().set_text("bottle caps");
    screen.update(Action::Search);
    assert_eq!(screen.result(), "No fun facts available for Bottle caps.");
}

#[test]
fn test_invalid_search_keeps_previous_result() {
    let mut screen = new_screen();
    screen.entry_mut().set_text("metal");
    screen.search();
    let previous = screen.result().to_string();

    screen.entry_mut().set_text("metal?");
    assert_eq!(
        screen.search(),
        Action::ShowDialog(DialogType::error(
            "Input Error",
            "Please enter a valid item name (letters, hyphens, and spaces only)."
        ))
    );
    assert_eq!(screen.result(), previous);
}

#[test]
fn test_tab_actions() {
    let mut screen = new_screen();

    screen.update(Action::PreviousTab);
    assert_eq!(screen.tabs().selected(), 3);
    screen.update(Action::NextTab);
    assert_eq!(screen.tabs().selected(), 0);

    assert_eq!(screen.handle_key_events(key(KeyCode::Char('4'))), Action::SelectTab(3));
    screen.update(Action::SelectTab(3));
    assert_eq!(screen.tabs().selected(), 3);

    // Out of range selections are ignored
    screen.update(Action::SelectTab(8));
    assert_eq!(screen.tabs().selected(), 3);
}

#[test]
fn test_unrelated_actions_pass_through() {
    let mut screen = new_screen();
    assert_eq!(screen.update(Action::OpenSymbols), Action::OpenSymbols);
    assert_eq!(screen.update(Action::Quit), Action::Quit);
}

use crate::{buffer_text, click_center, key};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use reearth::logger::Logger;
use reearth::ui::components::DialogComponent;
use reearth::ui::core::{Action, Component, DialogType};

#[test]
fn test_show_and_hide() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());

    let action = dialog.update(Action::ShowDialog(DialogType::error("Input Error", "bad")));
    assert_eq!(action, Action::None);
    assert!(dialog.is_visible());

    assert_eq!(dialog.update(Action::HideDialog), Action::None);
    assert!(!dialog.is_visible());

    // Other actions pass through untouched
    assert_eq!(dialog.update(Action::Search), Action::Search);
}

#[test]
fn test_error_dialog_keys() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::error("Input Error", "bad")));

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('q'))), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::HideDialog);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);
}

#[test]
fn test_help_scrolling() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));

    dialog.handle_key_events(key(KeyCode::Char('j')));
    dialog.handle_key_events(key(KeyCode::Down));
    assert_eq!(dialog.scroll_offset, 2);

    dialog.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(dialog.scroll_offset, 1);

    dialog.handle_key_events(key(KeyCode::PageUp));
    assert_eq!(dialog.scroll_offset, 0);

    dialog.handle_key_events(key(KeyCode::PageDown));
    assert_eq!(dialog.scroll_offset, 10);
    dialog.handle_key_events(key(KeyCode::Home));
    assert_eq!(dialog.scroll_offset, 0);

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog);
}

#[test]
fn test_scroll_end_clamped_on_render() {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));

    dialog.handle_key_events(key(KeyCode::End));
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    let bottom = dialog.scroll_offset;
    assert!(bottom > 0 && bottom < 100);
    assert!(buffer_text(&terminal).contains("plastic, paper, metal, glass."));

    dialog.handle_key_events(key(KeyCode::Up));
    assert_eq!(dialog.scroll_offset, bottom - 1);

    // Reopening starts at the top
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert_eq!(dialog.scroll_offset, 0);
}

#[test]
fn test_logs_dialog_shows_entries() {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let logger = Logger::new();
    logger.log("Search: 'glass' found a fun fact");

    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Logs));
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains("No logs available"));

    dialog.set_logger(logger);
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains("Search: 'glass' found a fun fact"));
}

#[test]
fn test_error_dialog_render_and_click() {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::error(
        "Resource Error",
        "Could not open image 'recycling1.png'",
    )));

    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Resource Error"));
    assert!(text.contains("Could not open image 'recycling1.png'"));
    assert!(text.contains("OK"));

    let ok_area = dialog.ok_button().area();
    assert_eq!(dialog.handle_mouse_events(click_center(ok_area)), Action::HideDialog);
}

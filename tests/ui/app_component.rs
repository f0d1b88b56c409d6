use crate::{buffer_text, click_center, key, test_terminal, text_position};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use image::{Rgb, RgbImage};
use reearth::config::{Config, ImageSpec};
use reearth::logger::Logger;
use reearth::ui::app_component::AppComponent;
use reearth::ui::components::category_tabs::TabButton;
use reearth::ui::components::MainFocus;
use reearth::ui::core::{Action, Component, DialogType, EventType, ScreenKind};
use ratatui::{backend::TestBackend, style::Color, Terminal};
use std::path::PathBuf;

fn new_app() -> AppComponent {
    AppComponent::new(Config::default(), Logger::new())
}

/// Config whose symbols images exist in a private temp directory
fn config_with_images(dir_name: &str) -> Config {
    let dir = std::env::temp_dir().join(dir_name);
    std::fs::create_dir_all(&dir).unwrap();

    let mut config = Config::default();
    for (name, spec) in [("one.png", &mut config.symbols.primary), ("two.png", &mut config.symbols.secondary)] {
        let path = dir.join(name);
        RgbImage::from_pixel(20, 10, Rgb([0, 120, 200])).save(&path).unwrap();
        *spec = ImageSpec::new(path, (80, 48));
    }
    config
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(key(code)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn tab_titles(app: &AppComponent) -> Vec<&'static str> {
    app.main_screen().unwrap().tabs().titles()
}

#[test]
fn test_starts_on_intro() {
    let mut app = new_app();
    assert_eq!(app.screen_kind(), ScreenKind::Intro);
    assert!(app.symbols_window().is_none());
    assert!(!app.dialog().is_visible());

    let mut terminal = test_terminal();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("ReEarth Recycling App"));
    assert!(text.contains("Welcome to ReEarth"));
    assert!(text.contains("Make recycling more informative!"));
    assert!(text.contains("Continue"));
    assert!(text.contains("Exit"));
}

#[test]
fn test_intro_buttons() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen_kind(), ScreenKind::Main);

    let mut app = new_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(app.should_quit());
}

#[test]
fn test_navigation_round_trip_rebuilds_main() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.screen_kind(), ScreenKind::Main);
    assert_eq!(tab_titles(&app), ["Plastics", "Paper", "Metals", "Glass"]);

    // Change some state on the first visit
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.main_screen().unwrap().tabs().selected(), 2);
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "glass");
    press(&mut app, KeyCode::Enter);
    assert!(app
        .main_screen()
        .unwrap()
        .result()
        .starts_with("Fun fact for Glass:\nDid you know?"));

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.screen_kind(), ScreenKind::Intro);
    assert!(app.main_screen().is_none());

    press(&mut app, KeyCode::Char('c'));
    let main = app.main_screen().unwrap();
    assert_eq!(main.result(), "");
    assert!(main.entry().is_placeholder_shown());
    assert_eq!(main.tabs().selected(), 0);
    assert_eq!(tab_titles(&app), ["Plastics", "Paper", "Metals", "Glass"]);
}

#[test]
fn test_search_with_placeholder_shows_input_error() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('c'));

    // Search button has focus and the entry still shows its placeholder
    assert_eq!(app.main_screen().unwrap().focus(), MainFocus::SearchButton);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::error("Input Error", "Please enter an item to search."))
    );
    assert_eq!(app.main_screen().unwrap().result(), "");
}

#[test]
fn test_dialog_is_modal() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "paper2");
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::error(
            "Input Error",
            "Please enter a valid item name (letters, hyphens, and spaces only)."
        ))
    );

    // Keys and clicks go to the dialog, not the screen underneath
    let mut terminal = test_terminal();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let back_area = app.main_screen().unwrap().tabs().button(TabButton::Back).area();
    app.handle_event(EventType::Mouse(click_center(back_area)));
    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.screen_kind(), ScreenKind::Main);
    assert!(app.dialog().is_visible());
    assert_eq!(app.main_screen().unwrap().entry().value(), "paper2");

    press(&mut app, KeyCode::Enter);
    assert!(!app.dialog().is_visible());
    assert_eq!(app.main_screen().unwrap().result(), "");
}

#[test]
fn test_dialog_dismissed_by_ok_click() {
    let mut config = Config::default();
    config.symbols.secondary = ImageSpec::new("/nonexistent/reearth/recycling2.png", (650, 250));
    let mut app = AppComponent::new(config, Logger::new());
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('s'));
    assert!(app.dialog().is_visible());

    let mut terminal = test_terminal();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains("OK"));

    let ok_area = app.dialog().ok_button().area();
    app.handle_event(EventType::Mouse(click_center(ok_area)));
    assert!(!app.dialog().is_visible());
}

#[test]
fn test_clear_resets_entry_and_result() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('i'));
    type_text(&mut app, "ice cream");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.main_screen().unwrap().result(), "No fun facts available for Ice cream.");

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('x'));
    let main = app.main_screen().unwrap();
    assert_eq!(main.result(), "");
    assert!(main.entry().is_placeholder_shown());
    assert_eq!(main.entry().value(), "");
}

#[test]
fn test_symbols_open_reuse_close() {
    let mut app = AppComponent::new(config_with_images("reearth_test_ui_symbols_open"), Logger::new());
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "metal");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('3'));

    press(&mut app, KeyCode::Char('s'));
    let window = app.symbols_window().unwrap();
    assert_eq!(window.images().len(), 2);
    assert!(window.images().iter().all(|image| image.dimensions == (80, 48)));

    // A second request reuses the open window
    app.dispatch(Action::OpenSymbols);
    assert!(app.symbols_window().is_some());
    assert!(app.logger().get_logs()[0].contains("reusing"));

    let mut terminal = test_terminal();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Additional Information"));
    assert!(text.contains("Get to know the recycling symbols!"));
    assert!(text.contains("Back"));

    press(&mut app, KeyCode::Esc);
    assert!(app.symbols_window().is_none());
    assert_eq!(app.screen_kind(), ScreenKind::Main);
    let main = app.main_screen().unwrap();
    assert!(main.result().starts_with("Fun fact for Metal:"));
    assert_eq!(main.entry().value(), "metal");
    assert_eq!(main.tabs().selected(), 2);
}

#[test]
fn test_symbols_images_fit_small_terminal() {
    let dir = std::env::temp_dir().join("reearth_test_ui_symbols_small");
    std::fs::create_dir_all(&dir).unwrap();
    let mut config = Config::default();
    let specs = [
        ("one.png", Rgb([200, 30, 30]), &mut config.symbols.primary),
        ("two.png", Rgb([30, 30, 200]), &mut config.symbols.secondary),
    ];
    for (name, color, spec) in specs {
        let path = dir.join(name);
        RgbImage::from_pixel(40, 20, color).save(&path).unwrap();
        spec.path = path;
    }

    let mut app = AppComponent::new(config, Logger::new());
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('s'));

    // Default 800x450 and 650x250 px are far larger than 80x24 cells
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let window = app.symbols_window().unwrap();
    let overlay = window.window_area();
    let areas = window.image_areas().to_vec();
    assert_eq!(areas.len(), 2);
    assert!(window.images()[0].area().width > 80);
    for area in &areas {
        assert!(area.width > 0 && area.height > 0);
        assert_eq!(overlay.intersection(*area), *area);
    }
    assert!(areas[0].bottom() <= areas[1].y);
    assert!(areas[1].bottom() <= window.back_button().area().y);

    // Every cell of both fitted areas carries image data
    let buffer = terminal.backend().buffer();
    for (index, area) in areas.iter().enumerate() {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buffer[(x, y)];
                assert_eq!(cell.symbol(), "▀");
                let Color::Rgb(r, _, b) = cell.fg else {
                    panic!("expected an rgb cell at ({x}, {y}), got {:?}", cell.fg);
                };
                // First image is red, second is blue
                assert_eq!(r > b, index == 0);
            }
        }
    }
}

#[test]
fn test_symbols_back_button_click() {
    let mut app = AppComponent::new(config_with_images("reearth_test_ui_symbols_click"), Logger::new());
    press(&mut app, KeyCode::Char('c'));

    let mut terminal = test_terminal();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let symbols_area = app.main_screen().unwrap().tabs().button(TabButton::Symbols).area();
    app.handle_event(EventType::Mouse(click_center(symbols_area)));
    assert!(app.symbols_window().is_some());

    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let back_area = app.symbols_window().unwrap().back_button().area();
    app.handle_event(EventType::Mouse(click_center(back_area)));
    assert!(app.symbols_window().is_none());
    assert_eq!(app.screen_kind(), ScreenKind::Main);
}

#[test]
fn test_missing_symbols_image_shows_resource_error() {
    let mut config = Config::default();
    let missing = PathBuf::from("/nonexistent/reearth/recycling1.png");
    config.symbols.primary = ImageSpec::new(&missing, (800, 450));

    let mut app = AppComponent::new(config, Logger::new());
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('s'));

    assert!(app.symbols_window().is_none());
    assert_eq!(app.screen_kind(), ScreenKind::Main);
    match &app.dialog().dialog_type {
        Some(DialogType::Error { title, message }) => {
            assert_eq!(title, "Resource Error");
            assert!(message.contains("/nonexistent/reearth/recycling1.png"));
        }
        other => panic!("expected a resource error dialog, got {:?}", other),
    }

    // Still usable afterwards
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.main_screen().unwrap().tabs().selected(), 1);
}

#[test]
fn test_back_drops_symbols_window() {
    let mut app = AppComponent::new(config_with_images("reearth_test_ui_symbols_back"), Logger::new());
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('s'));
    assert!(app.symbols_window().is_some());

    app.dispatch(Action::Back);
    assert!(app.symbols_window().is_none());
    assert_eq!(app.screen_kind(), ScreenKind::Intro);
}

#[test]
fn test_mouse_navigation() {
    let mut app = new_app();
    let mut terminal = test_terminal();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let (column, row) = text_position(&terminal, "Continue").unwrap();
    app.handle_event(EventType::Mouse(crate::left_click(column, row)));
    assert_eq!(app.screen_kind(), ScreenKind::Main);

    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let entry_area = app.main_screen().unwrap().entry().area();
    app.handle_event(EventType::Mouse(click_center(entry_area)));
    assert_eq!(app.main_screen().unwrap().focus(), MainFocus::Entry);
    assert!(!app.main_screen().unwrap().entry().is_placeholder_shown());

    // Clicking elsewhere blurs the empty entry and restores the placeholder
    app.handle_event(EventType::Mouse(crate::left_click(0, 0)));
    assert_ne!(app.main_screen().unwrap().focus(), MainFocus::Entry);
    assert!(app.main_screen().unwrap().entry().is_placeholder_shown());

    let back_area = app.main_screen().unwrap().tabs().button(TabButton::Back).area();
    app.handle_event(EventType::Mouse(click_center(back_area)));
    assert_eq!(app.screen_kind(), ScreenKind::Intro);
}

#[test]
fn test_mouse_disabled_ignores_clicks() {
    let mut config = Config::default();
    config.ui.mouse_enabled = false;
    let mut app = AppComponent::new(config, Logger::new());

    let mut terminal = test_terminal();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let (column, row) = text_position(&terminal, "Continue").unwrap();
    app.handle_event(EventType::Mouse(crate::left_click(column, row)));
    assert_eq!(app.screen_kind(), ScreenKind::Intro);
}

#[test]
fn test_ctrl_c_quits_from_anywhere() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[test]
fn test_help_and_logs_render() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Logs));

    let mut terminal = test_terminal();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains("App: intro -> main"));

    press(&mut app, KeyCode::Char('G'));
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Char('?'));
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains("REEARTH - Recycling Guide"));
}

#[test]
fn test_main_screen_renders_content() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Char('2'));

    let mut terminal = test_terminal();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Generate a fun fact:"));
    assert!(text.contains("Search here for plastic"));
    assert!(text.contains("(HOW TO) Recycling instructions for paper:"));
    assert!(text.contains("Recycling symbols"));
}

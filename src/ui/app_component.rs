use crate::config::Config;
use crate::constants::{APP_TITLE, DIALOG_TITLE_RESOURCE_ERROR};
use crate::content::Content;
use crate::images::{fallback_picker, protocol_name};
use crate::logger::Logger;
use crate::ui::components::status_bar::{StatusBar, StatusContext};
use crate::ui::components::{DialogComponent, IntroScreen, MainScreen, SymbolsWindow};
use crate::ui::core::{
    actions::{Action, DialogType, ScreenKind},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};
use ratatui_image::picker::Picker;
use std::sync::Arc;

/// The screen filling the root window. Exactly one exists at a time.
enum Screen {
    Intro(IntroScreen),
    Main(MainScreen),
}

impl Screen {
    fn kind(&self) -> ScreenKind {
        match self {
            Screen::Intro(_) => ScreenKind::Intro,
            Screen::Main(_) => ScreenKind::Main,
        }
    }

    fn component(&mut self) -> &mut dyn Component {
        match self {
            Screen::Intro(intro) => intro,
            Screen::Main(main) => main,
        }
    }
}

pub struct AppComponent {
    // Component composition
    screen: Screen,
    symbols: Option<SymbolsWindow>,
    dialog: DialogComponent,

    // Application state
    content: Arc<Content>,
    config: Config,
    picker: Picker,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config, logger: Logger) -> Self {
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());
        logger.log("App: showing intro screen".to_string());

        Self {
            screen: Screen::Intro(IntroScreen::new()),
            symbols: None,
            dialog,
            content: Arc::new(Content::new()),
            config,
            picker: fallback_picker(),
            logger,
            should_quit: false,
        }
    }

    /// Use the graphics protocol detected for the running terminal
    pub fn set_picker(&mut self, picker: Picker) {
        self.logger
            .log(format!("App: image protocol {}", protocol_name(&picker)));
        self.picker = picker;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn main_screen(&self) -> Option<&MainScreen> {
        match &self.screen {
            Screen::Main(main) => Some(main),
            Screen::Intro(_) => None,
        }
    }

    pub fn symbols_window(&self) -> Option<&SymbolsWindow> {
        self.symbols.as_ref()
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Route a terminal event to whichever layer currently owns input.
    ///
    /// A visible dialog takes everything, then the symbols overlay, then the
    /// screen underneath.
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    self.dialog.handle_key_events(key)
                } else if let Some(symbols) = self.symbols.as_mut() {
                    symbols.handle_key_events(key)
                } else {
                    self.screen.component().handle_key_events(key)
                }
            }
            EventType::Mouse(mouse) if self.config.ui.mouse_enabled => {
                if self.dialog.is_visible() {
                    self.dialog.handle_mouse_events(mouse)
                } else if let Some(symbols) = self.symbols.as_mut() {
                    symbols.handle_mouse_events(mouse)
                } else {
                    self.screen.component().handle_mouse_events(mouse)
                }
            }
            _ => Action::None,
        };

        self.dispatch(action);
    }

    /// Run an action through the component hierarchy and the app until it is
    /// fully consumed
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        while action != Action::None {
            let processed = self.update(action);
            action = self.handle_app_action(processed);
        }
    }

    /// Handle actions that change which screen or overlay is shown
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::None => Action::None,
            Action::Continue => {
                if self.screen.kind() == ScreenKind::Intro {
                    self.logger.log("App: intro -> main".to_string());
                    self.screen = Screen::Main(MainScreen::new(self.content.clone(), self.logger.clone()));
                }
                Action::None
            }
            Action::Back => {
                if self.symbols.take().is_some() {
                    self.logger.log("Symbols: closed by returning to intro".to_string());
                }
                if self.screen.kind() == ScreenKind::Main {
                    self.logger.log("App: main -> intro".to_string());
                    self.screen = Screen::Intro(IntroScreen::new());
                }
                Action::None
            }
            Action::OpenSymbols => self.open_symbols(),
            Action::CloseSymbols => {
                if self.symbols.take().is_some() {
                    self.logger.log("Symbols: closed".to_string());
                }
                Action::None
            }
            Action::Quit => {
                self.logger.log("App: quit requested".to_string());
                self.should_quit = true;
                Action::None
            }
            other => {
                self.logger
                    .log(format!("App: ignoring {:?} on the {:?} screen", other, self.screen.kind()));
                Action::None
            }
        }
    }

    fn open_symbols(&mut self) -> Action {
        if self.symbols.is_some() {
            self.logger.log("Symbols: already open, reusing window".to_string());
            return Action::None;
        }

        match SymbolsWindow::open(&self.config.symbols, &self.picker) {
            Ok(window) => {
                self.logger.log(format!(
                    "Symbols: opened {} images ({})",
                    window.images().len(),
                    protocol_name(&self.picker)
                ));
                self.symbols = Some(window);
                Action::None
            }
            Err(e) => {
                self.logger.log(format!("Symbols: failed to open: {}", e));
                Action::ShowDialog(DialogType::error(DIALOG_TITLE_RESOURCE_ERROR, e.to_string()))
            }
        }
    }

    fn status_context(&self) -> StatusContext {
        match self.dialog.dialog_type {
            Some(DialogType::Help | DialogType::Logs) => StatusContext::Panel,
            Some(DialogType::Error { .. }) => StatusContext::Dialog,
            None if self.symbols.is_some() => StatusContext::Symbols,
            None => StatusContext::for_screen(self.screen.kind(), self.main_screen().map(MainScreen::focus)),
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: crossterm::event::KeyEvent) -> Action {
        self.handle_event(EventType::Key(key));
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::ShowDialog(dialog_type) = &action {
            self.logger.log(format!("Dialog: showing {:?}", dialog_type));
        }

        // Process through component hierarchy
        let action = self.screen.component().update(action);

        // Return for app-level handling
        self.dialog.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(APP_TITLE)
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
        let inner = frame_block.inner(rect);
        f.render_widget(frame_block, rect);

        let chunks = LayoutManager::main_layout(inner);
        self.screen.component().render(f, chunks[0]);
        StatusBar::render(f, chunks[1], self.status_context());

        // Overlays on top, dialog last
        if let Some(symbols) = self.symbols.as_mut() {
            symbols.render(f, rect);
        }

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

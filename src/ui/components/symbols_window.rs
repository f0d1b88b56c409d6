//! Secondary window showing the recycling symbols reference images

use crate::config::SymbolsConfig;
use crate::constants::{BUTTON_BACK, SYMBOLS_CAPTION, SYMBOLS_WINDOW_TITLE};
use crate::error::ImageLoadError;
use crate::images::SymbolImage;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};
use ratatui_image::picker::Picker;

use super::button::{Button, BUTTON_HEIGHT};
use super::dialogs::common::create_dialog_block;

const CAPTION_HEIGHT: u16 = 2;

/// Modal overlay with the two symbols images and a Back button.
///
/// Both images are loaded when the window is opened; if either fails the
/// window is never created.
pub struct SymbolsWindow {
    images: Vec<SymbolImage>,
    back_button: Button,
    window_area: Rect,
    image_areas: Vec<Rect>,
}

impl std::fmt::Debug for SymbolsWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolsWindow").field("images", &self.images).finish_non_exhaustive()
    }
}

impl SymbolsWindow {
    pub fn open(config: &SymbolsConfig, picker: &Picker) -> Result<Self, ImageLoadError> {
        let images = [&config.primary, &config.secondary]
            .into_iter()
            .map(|spec| SymbolImage::load(spec, picker))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            images,
            back_button: Button::new(BUTTON_BACK, Action::CloseSymbols),
            window_area: Rect::default(),
            image_areas: Vec::new(),
        })
    }

    pub fn images(&self) -> &[SymbolImage] {
        &self.images
    }

    pub fn back_button(&self) -> &Button {
        &self.back_button
    }

    /// Area covered by the overlay on the last render
    pub fn window_area(&self) -> Rect {
        self.window_area
    }

    /// Cells each image was fitted into on the last render
    pub fn image_areas(&self) -> &[Rect] {
        &self.image_areas
    }

    /// Row count for each image: its natural height when everything fits,
    /// otherwise a share of `available` proportional to that height
    fn image_heights(&self, available: u16) -> Vec<u16> {
        let natural: Vec<u16> = self.images.iter().map(|image| image.area().height).collect();
        let total: u32 = natural.iter().map(|h| u32::from(*h)).sum();
        if total <= u32::from(available) {
            return natural;
        }

        natural
            .iter()
            .map(|h| {
                let share = u32::from(*h) * u32::from(available) / total;
                u16::try_from(share).unwrap_or(available)
            })
            .collect()
    }
}

impl Component for SymbolsWindow {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('b') | KeyCode::Char('q') => {
                Action::CloseSymbols
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.back_button.click(&mouse).unwrap_or(Action::None)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let window_area = LayoutManager::centered_rect(94, 94, rect);
        f.render_widget(Clear, window_area);

        let block = create_dialog_block(SYMBOLS_WINDOW_TITLE, Color::Green);
        let inner = block.inner(window_area);
        f.render_widget(block, window_area);

        let available = inner.height.saturating_sub(CAPTION_HEIGHT + BUTTON_HEIGHT);
        let mut constraints = vec![Constraint::Length(CAPTION_HEIGHT)];
        constraints.extend(self.image_heights(available).into_iter().map(Constraint::Length));
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let caption = Paragraph::new(SYMBOLS_CAPTION)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(caption, chunks[0]);

        self.window_area = window_area;
        self.image_areas.clear();
        for (image, area) in self.images.iter_mut().zip(chunks.iter().skip(1)) {
            self.image_areas.push(image.fitted_area(*area));
            image.render(f, *area);
        }

        self.back_button.render(f, chunks[self.images.len() + 1], true);
    }
}

//! Recycling symbols images via terminal graphics protocols (Kitty, Sixel,
//! iTerm2, halfblocks).
//!
//! Images are decoded and resized when the symbols window is opened. The
//! terminal encoding is redone only when the area they are drawn into
//! changes, so they shrink to fit small terminals.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::DynamicImage;
use ratatui::layout::Rect;
use ratatui::Frame;
use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;
use ratatui_image::{Resize, StatefulImage};

use crate::config::ImageSpec;
use crate::constants::FALLBACK_FONT_SIZE;
use crate::error::ImageLoadError;
use crate::ui::layout::LayoutManager;

/// Query the terminal for its graphics capabilities.
///
/// Must run after raw mode is enabled and before the event loop starts
/// reading stdin. Falls back to halfblocks when the query fails.
pub fn detect_picker() -> Picker {
    match Picker::from_query_stdio() {
        Ok(picker) => picker,
        Err(e) => {
            log::warn!("terminal graphics query failed, using halfblocks: {:?}", e);
            fallback_picker()
        }
    }
}

/// Halfblock picker that works on any terminal and without one
pub fn fallback_picker() -> Picker {
    let mut picker = Picker::from_fontsize(FALLBACK_FONT_SIZE);
    picker.set_protocol_type(ProtocolType::Halfblocks);
    picker
}

/// Name of the graphics protocol a picker will use
pub fn protocol_name(picker: &Picker) -> &'static str {
    match picker.protocol_type() {
        ProtocolType::Kitty => "Kitty",
        ProtocolType::Sixel => "Sixel",
        ProtocolType::Iterm2 => "iTerm2",
        ProtocolType::Halfblocks => "Halfblocks",
    }
}

/// Open and decode an image file, resized to exactly the requested pixel size
pub fn load_resized(path: &Path, width: u32, height: u32) -> Result<DynamicImage, ImageLoadError> {
    let reader = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| ImageLoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let img = reader.decode().map_err(|source| ImageLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(img.resize_exact(width, height, FilterType::Triangle))
}

/// Number of terminal cells needed to show `pixels` at `cell_pixels` per cell
fn cells_for(pixels: u32, cell_pixels: u16) -> u16 {
    let cell_pixels = u32::from(cell_pixels.max(1));
    u16::try_from(pixels.div_ceil(cell_pixels)).unwrap_or(u16::MAX)
}

/// A decoded and resized image that is re-encoded to fit whatever area it is
/// drawn into.
pub struct SymbolImage {
    protocol: StatefulProtocol,
    natural: Rect,
    path: PathBuf,
    /// Image dimensions in pixels (width, height).
    pub dimensions: (u32, u32),
}

impl std::fmt::Debug for SymbolImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolImage")
            .field("path", &self.path)
            .field("dimensions", &self.dimensions)
            .field("natural", &self.natural)
            .finish_non_exhaustive()
    }
}

impl SymbolImage {
    /// Load the image described by `spec` and prepare it for `picker`
    pub fn load(spec: &ImageSpec, picker: &Picker) -> Result<Self, ImageLoadError> {
        let img = load_resized(&spec.path, spec.width, spec.height)?;
        Ok(Self::from_image(img, &spec.path, picker))
    }

    fn from_image(img: DynamicImage, path: &Path, picker: &Picker) -> Self {
        let dimensions = (img.width(), img.height());
        let (font_width, font_height) = picker.font_size();
        let natural = Rect::new(
            0,
            0,
            cells_for(dimensions.0, font_width),
            cells_for(dimensions.1, font_height),
        );

        Self {
            protocol: picker.new_resize_protocol(img),
            natural,
            path: path.to_path_buf(),
            dimensions,
        }
    }

    /// Terminal cells the image occupies when nothing shrinks it
    pub fn area(&self) -> Rect {
        self.natural
    }

    /// Cells the image will occupy when fitted into `available`
    pub fn fitted_area(&self, available: Rect) -> Rect {
        let size = self.protocol.size_for(Resize::Fit(None), available);
        LayoutManager::center_rect(size, available)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the image scaled down to fit and centered within `area`
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let target = self.fitted_area(area);
        if target.width == 0 || target.height == 0 {
            return;
        }

        let widget: StatefulImage<StatefulProtocol> = StatefulImage::default();
        frame.render_stateful_widget(widget, target, &mut self.protocol);
        if let Some(Err(e)) = self.protocol.last_encoding_result() {
            log::warn!("failed to encode '{}': {:?}", self.path.display(), e);
        }
    }
}

use crate::types::DisplayConfig;

/// Size of the area a surface can be placed in, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Requested size and title of a new surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
    pub title: String,
}

impl Geometry {
    /// Sizes a surface for `viewport`.
    ///
    /// Width is `viewport.width * width_ratio`, capped by `max_width` and then raised to
    /// `min_width`. Height is `height`, capped by `viewport.height - height_margin`, never 0.
    pub fn compute(viewport: Viewport, config: &DisplayConfig) -> Self {
        let scaled = (f32::from(viewport.width) * config.width_ratio).floor() as u16;
        let capped = match config.max_width {
            Some(max_width) => scaled.min(max_width),
            None => scaled,
        };
        let width = capped.max(config.min_width);

        let available = viewport.height.saturating_sub(config.height_margin);
        let height = config.height.min(available).max(1);

        Self {
            width,
            height,
            title: config.title.clone(),
        }
    }
}

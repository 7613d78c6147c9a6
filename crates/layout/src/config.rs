use quire_types::Size;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Space available to the root node along each axis.
    ///
    /// `None` lets the root size itself to its content (max-content).
    /// Defaults to an A4 page in points.
    pub available_width: Option<f32>,
    pub available_height: Option<f32>,
    /// Whether the engine snaps computed geometry to whole points.
    ///
    /// Defaults to `true`.
    pub use_rounding: bool,
}

impl LayoutConfig {
    pub fn with_available_size(mut self, size: Size) -> Self {
        self.available_width = Some(size.width);
        self.available_height = Some(size.height);
        self
    }

    pub fn max_content() -> Self {
        Self {
            available_width: None,
            available_height: None,
            ..Default::default()
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            available_width: Some(595.28),
            available_height: Some(841.89),
            use_rounding: true,
        }
    }
}

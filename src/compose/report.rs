/// What happened to one layer or overlay element during a capture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LayerOutcome {
    /// Drawn into the buffer.
    Drawn,
    /// Left out because a source or resource was unavailable; the reason is kept for logs.
    Skipped(String),
    /// Not configured (zero size, empty text).
    #[default]
    Disabled,
}

impl LayerOutcome {
    /// `true` for [`LayerOutcome::Drawn`].
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn)
    }

    /// `true` for [`LayerOutcome::Skipped`].
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Per-element outcome of the decorative overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayReport {
    /// Header band fill and border.
    pub header_band: LayerOutcome,
    /// Footer band fill and border.
    pub footer_band: LayerOutcome,
    /// Logo inside the header band.
    pub logo: LayerOutcome,
    /// Centered header text.
    pub header_text: LayerOutcome,
    /// Centered footer lines, in order.
    pub footer_lines: Vec<LayerOutcome>,
}

/// Per-layer outcome of one compose call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompositeReport {
    /// Letterboxed camera frame.
    pub camera: LayerOutcome,
    /// Stretched render-surface snapshot.
    pub render_surface: LayerOutcome,
    /// Decorative overlay.
    pub overlay: OverlayReport,
}

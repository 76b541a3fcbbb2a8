//! Resolver configuration.

/// Options for the list indent resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverOptions {
    /// Allow indent auto-correction at all (AND-ed with each paragraph's flag)
    pub auto_correct: bool,

    /// Maximum spread (points) of observed left offsets that still unify
    pub unify_tolerance: f32,

    /// Number of left offsets kept per list node
    pub sample_window: usize,

    /// Estimated glyph width as a fraction of the font size
    pub marker_char_ratio: f32,

    /// Gap (points) kept between a marker and the body text
    pub marker_buffer: f32,

    /// Font size assumed when a paragraph does not declare one
    pub default_font_size: f32,
}

impl ResolverOptions {
    /// Create new resolver options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable auto-correction.
    pub fn with_auto_correct(mut self, enabled: bool) -> Self {
        self.auto_correct = enabled;
        self
    }

    /// Set the unification tolerance in points.
    pub fn with_unify_tolerance(mut self, points: f32) -> Self {
        self.unify_tolerance = points.max(0.0);
        self
    }

    /// Set the sample window size (at least 2).
    pub fn with_sample_window(mut self, size: usize) -> Self {
        self.sample_window = size.max(2);
        self
    }

    /// Set the marker width estimate.
    pub fn with_marker_metrics(mut self, char_ratio: f32, buffer: f32) -> Self {
        self.marker_char_ratio = char_ratio;
        self.marker_buffer = buffer;
        self
    }

    /// Set the default font size.
    pub fn with_default_font_size(mut self, size: f32) -> Self {
        if size > 0.0 {
            self.default_font_size = size;
        }
        self
    }
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            auto_correct: true,
            unify_tolerance: 9.0,
            sample_window: 5,
            marker_char_ratio: 0.5,
            marker_buffer: 4.0,
            default_font_size: 12.0,
        }
    }
}

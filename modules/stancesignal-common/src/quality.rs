/// Display bound for external text, in characters, including the marker.
pub const MAX_DISPLAY_CHARS: usize = 280;

/// Appended when external text is cut to fit [`MAX_DISPLAY_CHARS`].
pub const TRUNCATION_MARKER: &str = "...";

/// Neutral prior for stance scores.
pub const STANCE_NEUTRAL: u8 = 50;

/// Upper bound of the stance scale. The lower bound is 0.
pub const STANCE_MAX: u8 = 100;

/// Score change per lexical hint found.
pub const STANCE_HINT_WEIGHT: i32 = 8;

/// Inferred attributes below this confidence are never displayed.
pub const INFERENCE_DISPLAY_MIN_CONFIDENCE: f32 = 0.6;

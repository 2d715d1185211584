// Page wiring for the web front-end. Tuning constants live in blob-core.

pub const CANVAS_ID: &str = "app-canvas";
pub const HINT_ID: &str = "hint-overlay";

// Hint fades after this many milliseconds
pub const HINT_HIDE_MS: i32 = 2500;

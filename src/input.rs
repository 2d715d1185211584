// Pure pointer, wheel, key and query helpers used by the DOM handlers.
// Nothing here touches `web_sys`, so host tests can include this file.

use blob_core::{BlobError, SmoothingMode};
use glam::Vec2;

/// Query key selecting the smoothing mode, e.g. `?smoothing=time`.
pub const SMOOTHING_QUERY_KEY: &str = "smoothing";

// Wheel zoom: distance is scaled by exp(delta_px * WHEEL_ZOOM_PER_PX)
pub const WHEEL_ZOOM_PER_PX: f32 = 0.001;
const WHEEL_LINE_PX: f32 = 16.0;
const WHEEL_PAGE_PX: f32 = 800.0;

/// Latest pointer sample over the canvas.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    /// Normalized device coordinates; kept after the pointer leaves.
    pub ndc: Vec2,
    pub inside: bool,
    pub down: bool,
    pub last_drag: Option<Vec2>,
}

impl PointerState {
    /// Record a move. Returns the drag delta in NDC when a button is held.
    pub fn moved(&mut self, ndc: Vec2) -> Option<Vec2> {
        self.ndc = ndc;
        self.inside = true;
        if !self.down {
            return None;
        }
        let delta = self.last_drag.map(|prev| ndc - prev);
        self.last_drag = Some(ndc);
        delta
    }

    pub fn pressed(&mut self, ndc: Vec2) {
        self.ndc = ndc;
        self.inside = true;
        self.down = true;
        self.last_drag = Some(ndc);
    }

    pub fn released(&mut self) {
        self.down = false;
        self.last_drag = None;
    }

    pub fn left(&mut self) {
        self.inside = false;
        self.released();
    }
}

/// Client-space point to NDC over a rect: x = 2u - 1, y = 1 - 2v.
#[inline]
pub fn client_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let uv = (client - rect_origin) / rect_size;
    Vec2::new(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0)
}

/// Zoom factor for one wheel event. `delta_mode` follows the DOM constants
/// (0 = pixels, 1 = lines, 2 = pages).
#[inline]
pub fn wheel_zoom_factor(delta_y: f32, delta_mode: u32) -> f32 {
    let px = match delta_mode {
        1 => delta_y * WHEEL_LINE_PX,
        2 => delta_y * WHEEL_PAGE_PX,
        _ => delta_y,
    };
    (px * WHEEL_ZOOM_PER_PX).exp()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleSmoothing,
    ToggleFullscreen,
    ExitFullscreen,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "m" | "M" => Some(KeyAction::ToggleSmoothing),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}

/// Value of `key` in a `location.search` string (leading `?` optional).
pub fn query_value<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// Smoothing mode requested by the page URL; per-frame when absent.
pub fn smoothing_from_query(search: &str) -> Result<SmoothingMode, BlobError> {
    match query_value(search, SMOOTHING_QUERY_KEY) {
        Some(value) => value.parse(),
        None => Ok(SmoothingMode::default()),
    }
}

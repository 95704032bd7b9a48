//! Pointer and touch input helpers.
use web_sys::TouchEvent;

/// Horizontal screen coordinate of the first changed touch point.
#[must_use]
pub fn touch_screen_x(event: &TouchEvent) -> Option<f64> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| f64::from(touch.screen_x()))
}

/// Pixels to scroll a thumbnail strip per arrow click: one thumbnail plus the gap.
#[must_use]
pub fn thumbnail_scroll_step(thumb_width: i32) -> f64 {
    f64::from(thumb_width) + THUMBNAIL_GAP_PX
}

/// Gap between thumbnails in the strip, in CSS pixels.
pub const THUMBNAIL_GAP_PX: f64 = 8.0;

/// Delay before measuring whether the thumbnail strip overflows its container.
pub const OVERFLOW_CHECK_DELAY_MS: i32 = 100;

//! Circular image cursor shared by the main gallery and the lightbox.
use crate::numbers::{i64_to_usize, usize_to_i64};
use serde::Serialize;

/// Minimum horizontal travel, in CSS pixels, before a touch counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Wrap `requested` into `[0, length)` in both directions.
///
/// Returns `current` unchanged for an empty gallery.
#[must_use]
pub fn advance(current: usize, length: usize, requested: i64) -> usize {
    if length == 0 {
        return current;
    }
    i64_to_usize(requested.rem_euclid(usize_to_i64(length)))
}

/// Step implied by a horizontal touch from `start_x` to `end_x`: a finger
/// moving left shows the next image, moving right the previous one.
#[must_use]
pub fn swipe_step(start_x: f64, end_x: f64) -> Option<i64> {
    if end_x < start_x - SWIPE_THRESHOLD_PX {
        Some(1)
    } else if end_x > start_x + SWIPE_THRESHOLD_PX {
        Some(-1)
    } else {
        None
    }
}

/// Index into a fixed-length image sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryCursor {
    index: usize,
    len: usize,
}

impl GalleryCursor {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to `requested`, wrapping out-of-range values.
    pub fn go_to(&mut self, requested: i64) -> usize {
        self.index = advance(self.index, self.len, requested);
        self.index
    }

    /// Move by `delta` positions.
    pub fn step(&mut self, delta: i64) -> usize {
        self.go_to(usize_to_i64(self.index).saturating_add(delta))
    }

    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    pub fn prev(&mut self) -> usize {
        self.step(-1)
    }

    /// Swipes are ignored for galleries with one image or fewer.
    #[must_use]
    pub const fn accepts_swipe(&self) -> bool {
        self.len > 1
    }

    /// Apply a completed touch gesture. Returns whether the index moved.
    pub fn swipe(&mut self, start_x: f64, end_x: f64) -> bool {
        if !self.accepts_swipe() {
            return false;
        }
        let Some(delta) = swipe_step(start_x, end_x) else {
            return false;
        };
        let before = self.index;
        self.step(delta) != before
    }

    /// Horizontal offset of the image strip, in percent of one slide.
    #[must_use]
    pub fn offset_percent(&self) -> i64 {
        -(usize_to_i64(self.index) * 100)
    }

    /// CSS transform placing the active slide in view.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }

    /// `"position/total"`, one-based.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.index + 1, self.len)
    }

    #[must_use]
    pub const fn is_active(&self, idx: usize) -> bool {
        idx == self.index
    }
}

/// Touch start position remembered between `touchstart` and `touchend`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, screen_x: f64) {
        self.start_x = Some(screen_x);
    }

    /// Finish the gesture, yielding `(start_x, end_x)` when a touch was in progress.
    pub fn finish(&mut self, end_x: f64) -> Option<(f64, f64)> {
        self.start_x.take().map(|start| (start, end_x))
    }
}

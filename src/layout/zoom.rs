//! Zoom: scaled column widths and the gesture rules that change the scale.
//!
//! Only column widths scale. Row and header heights come from the provider
//! unchanged, so the content height does not depend on the zoom.

use log::{debug, warn};

use super::grid_layout::GridLayout;
use crate::provider::LayoutDataProvider;

/// Smallest pinch scale accepted (exclusive)
pub const MIN_PINCH_SCALE: f32 = 0.35;
/// Largest pinch scale accepted (exclusive)
pub const MAX_PINCH_SCALE: f32 = 5.0;

/// A length under zoom, rounded to whole pixels
pub fn zoom_modified(value: f32, scale: f32) -> f32 {
    (value * scale).round()
}

/// Gesture handling for the zoom scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomController {
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            min_scale: MIN_PINCH_SCALE,
            max_scale: MAX_PINCH_SCALE,
        }
    }
}

impl ZoomController {
    pub fn new(min_scale: f32, max_scale: f32) -> Self {
        Self {
            min_scale,
            max_scale,
        }
    }

    /// True if `scale` lies strictly between the bounds
    pub fn accepts(&self, scale: f32) -> bool {
        scale > self.min_scale && scale < self.max_scale
    }

    /// Apply a pinch gesture. Ignored unless exactly two touches are down
    /// and the scale is within bounds. Returns true if the zoom changed.
    pub fn pinch<P: LayoutDataProvider>(
        &self,
        layout: &mut GridLayout<P>,
        scale: f32,
        touches: usize,
    ) -> bool {
        if touches != 2 {
            return false;
        }
        if !self.accepts(scale) {
            debug!("pinch scale {scale} outside ({}, {})", self.min_scale, self.max_scale);
            return false;
        }
        layout.set_zoom_scale(scale);
        true
    }

    /// Two-finger tap: snap back to 1.0 if zoomed. Returns true if the zoom
    /// changed.
    pub fn two_finger_tap<P: LayoutDataProvider>(&self, layout: &mut GridLayout<P>) -> bool {
        if (layout.zoom_scale() - 1.0).abs() > f32::EPSILON {
            layout.set_zoom_scale(1.0);
            true
        } else {
            false
        }
    }
}

impl<P: LayoutDataProvider> GridLayout<P> {
    /// Set the zoom scale and drop every cached geometry.
    ///
    /// Non-finite or non-positive scales are ignored.
    pub fn set_zoom_scale(&mut self, scale: f32) {
        if !scale.is_finite() || scale <= 0.0 {
            warn!("ignoring invalid zoom scale {scale}");
            return;
        }
        self.metrics.zoom_scale = scale;
        self.reset_cached_parameters(false);
        debug!("zoom scale set to {scale}");
    }
}

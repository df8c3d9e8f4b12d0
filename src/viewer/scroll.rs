//! Scroll, resize and zoom gestures for `GridView`.

use wasm_bindgen::prelude::*;

use super::GridView;
use crate::layout::Viewport;

#[wasm_bindgen]
impl GridView {
    /// Set viewport position and size without clamping (host scroll physics
    /// may overscroll)
    #[wasm_bindgen]
    pub fn set_viewport(&mut self, scroll_x: f32, scroll_y: f32, width: f32, height: f32) {
        self.layout.set_viewport(Viewport {
            scroll_x,
            scroll_y,
            width,
            height,
        });
    }

    /// Scroll by a delta, clamped to the content. Returns true if anything
    /// moved.
    #[wasm_bindgen]
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32) -> bool {
        self.layout.scroll_by(delta_x, delta_y)
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.layout.resize_viewport(width, height);
    }

    #[wasm_bindgen]
    pub fn scroll_x(&self) -> f32 {
        self.layout.viewport().scroll_x
    }

    #[wasm_bindgen]
    pub fn scroll_y(&self) -> f32 {
        self.layout.viewport().scroll_y
    }

    /// Pinch gesture update. Returns true if the zoom changed.
    #[wasm_bindgen]
    pub fn pinch(&mut self, scale: f32, touches: u32) -> bool {
        let touches = usize::try_from(touches).unwrap_or(usize::MAX);
        let changed = self.zoom.pinch(&mut self.layout, scale, touches);
        if changed {
            self.clamp_scroll();
        }
        changed
    }

    /// Two-finger tap: back to 100%. Returns true if the zoom changed.
    #[wasm_bindgen]
    pub fn two_finger_tap(&mut self) -> bool {
        let changed = self.zoom.two_finger_tap(&mut self.layout);
        if changed {
            self.clamp_scroll();
        }
        changed
    }
}

impl GridView {
    /// Zooming out can leave the offset past the new content width.
    fn clamp_scroll(&mut self) {
        let content = self.layout.content_size();
        let mut viewport = *self.layout.viewport();
        viewport.clamp_scroll(content);
        self.layout.set_viewport(viewport);
    }
}

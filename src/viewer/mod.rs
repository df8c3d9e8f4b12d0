//! `GridView` - the WASM-exported entry point.
//!
//! Wraps a [`GridLayout`] over a [`GridModel`] loaded from JSON and exposes
//! geometry queries to JavaScript. The host draws; this side only answers
//! where things go.

mod scroll;

use wasm_bindgen::prelude::*;

use crate::error::PanegridError;
use crate::layout::{GridLayout, ScrollPosition, Viewport, ZoomController};
use crate::model::GridModel;
use crate::types::{LogicalAddress, Point};

/// Grid geometry for a JavaScript host
#[wasm_bindgen]
pub struct GridView {
    layout: GridLayout<GridModel>,
    zoom: ZoomController,
}

#[wasm_bindgen]
impl GridView {
    /// Create a view from a grid model JSON and the viewport size.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or holds invalid sizes.
    #[wasm_bindgen(constructor)]
    pub fn new(model_json: &str, width: f32, height: f32) -> Result<GridView, JsValue> {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        Ok(Self::from_model_json(model_json, width, height)?)
    }

    /// Replace the grid model, keeping the viewport and zoom.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or holds invalid sizes.
    #[wasm_bindgen]
    pub fn load(&mut self, model_json: &str) -> Result<(), JsValue> {
        let model = GridModel::from_json(model_json)?;
        let sticky = model.sticky_section_headers;
        self.layout.update_provider(|current| *current = model);
        self.layout.set_sticky_section_headers(sticky);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_sticky_section_headers(&mut self, sticky: bool) {
        self.layout.set_sticky_section_headers(sticky);
    }

    #[wasm_bindgen]
    pub fn content_width(&mut self) -> f32 {
        self.layout.content_size().width
    }

    #[wasm_bindgen]
    pub fn content_height(&mut self) -> f32 {
        self.layout.content_size().height
    }

    #[wasm_bindgen]
    pub fn zoom_scale(&self) -> f32 {
        self.layout.zoom_scale()
    }

    /// Elements in the viewport, as a JSON array string
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen]
    pub fn visible_elements_json(&mut self) -> Result<String, JsValue> {
        let elements = self.layout.visible_elements();
        let json = serde_json::to_string(&elements).map_err(PanegridError::from)?;
        Ok(json)
    }

    /// Elements in the viewport, as JavaScript objects
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen]
    pub fn visible_elements(&mut self) -> Result<JsValue, JsValue> {
        let elements = self.layout.visible_elements();
        Ok(serde_wasm_bindgen::to_value(&elements)?)
    }

    /// Topmost element under a viewport point, as a JSON object string.
    /// Returns `None` when nothing is there.
    #[wasm_bindgen]
    pub fn element_at(&mut self, screen_x: f32, screen_y: f32) -> Option<String> {
        let point = self
            .layout
            .viewport()
            .to_content(Point::new(screen_x, screen_y));
        let element = self.layout.element_at_point(point)?;
        serde_json::to_string(&element).ok()
    }

    /// Scroll so the cell sits at the top left of the scrolling area.
    /// Returns `[scroll_x, scroll_y]`.
    #[wasm_bindgen]
    pub fn scroll_to_cell(&mut self, section: usize, row: usize, column: usize) -> Vec<f32> {
        let offset = self
            .layout
            .scroll_to_item(LogicalAddress::new(section, row, column), ScrollPosition::default());
        vec![offset.x, offset.y]
    }
}

impl GridView {
    /// Native constructor used by tests and the CLI
    pub fn from_model_json(
        model_json: &str,
        width: f32,
        height: f32,
    ) -> crate::error::Result<Self> {
        let model = GridModel::from_json(model_json)?;
        let mut layout = model.into_layout();
        layout.set_viewport(Viewport::with_size(width, height));
        Ok(Self {
            layout,
            zoom: ZoomController::default(),
        })
    }

    pub fn layout(&self) -> &GridLayout<GridModel> {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut GridLayout<GridModel> {
        &mut self.layout
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const MODEL: &str = r#"{
        "columns": [100, 100, 100, 100, 100],
        "header_height": 50,
        "sections": [{ "rows": 10, "row_height": 40 }]
    }"#;

    #[test]
    fn test_from_model_json() {
        let mut view = GridView::from_model_json(MODEL, 300.0, 200.0).unwrap();
        assert_eq!(view.content_width(), 500.0);
        assert_eq!(view.content_height(), 450.0);
        assert_eq!(view.zoom_scale(), 1.0);
    }

    #[test]
    fn test_visible_elements_json() {
        let mut view = GridView::from_model_json(MODEL, 300.0, 200.0).unwrap();
        let json = view.visible_elements_json().unwrap();
        let elements: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        // 3 headers + 3 columns x 4 rows (y 50..210 reaches row 3)
        assert_eq!(elements.len(), 3 + 12);
        assert_eq!(elements[0]["kind"], "grid_header");
    }

    #[test]
    fn test_element_at_uses_screen_coordinates() {
        let mut view = GridView::from_model_json(MODEL, 300.0, 200.0).unwrap();
        view.scroll_by(0.0, 100.0);
        let json = view.element_at(150.0, 90.0).unwrap();
        let element: serde_json::Value = serde_json::from_str(&json).unwrap();
        // content y 190 is row 3 (170..210)
        assert_eq!(element["index"]["row"], 3);
        assert_eq!(element["index"]["column"], 1);
    }

    #[test]
    fn test_load_replaces_model() {
        let mut view = GridView::from_model_json(MODEL, 300.0, 200.0).unwrap();
        view.load(r#"{"columns": [10], "sections": [{"rows": 1}]}"#)
            .unwrap();
        assert_eq!(view.content_width(), 10.0);
        assert_eq!(view.layout().viewport().width, 300.0);
    }
}

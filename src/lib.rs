//! panegrid - layout engine for sectioned data grids
//!
//! Computes where every cell and header of a spreadsheet-like grid goes:
//! - Sections of rows sharing one set of columns
//! - Sticky grid and section headers, pinned grid footers
//! - Frozen leading columns and rows
//! - Grouped column headers
//! - Binary search viewport culling
//! - Pinch zoom of column widths
//!
//! The engine owns no content. A host implements [`LayoutDataProvider`]
//! (or loads a [`GridModel`]) and draws whatever [`ElementAttributes`] come
//! back.
//!
//! # Usage (Rust)
//!
//! ```
//! use panegrid::{GridLayout, GridModel, LogicalAddress};
//!
//! let model = GridModel::uniform(5, 100.0, &[10], 40.0);
//! let mut layout = GridLayout::new(model);
//! let cell = layout.attributes_for_item(LogicalAddress::new(0, 3, 2));
//! assert_eq!((cell.frame.x, cell.frame.y), (200.0, 120.0));
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'panegrid';
//! await init();
//! const view = new GridView(modelJson, 800, 600);
//! view.scroll_by(0, 120);
//! const elements = view.visible_elements();
//! ```

pub mod error;
pub mod layout;
pub mod model;
pub mod provider;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::PanegridError;
pub use layout::{GridLayout, LayoutSnapshot, ScrollPosition, Viewport, ZoomController};
pub use model::{GridModel, SectionModel};
pub use provider::LayoutDataProvider;
pub use types::*;
pub use viewer::GridView;

/// Lay out a grid model and return the elements inside a rectangle.
///
/// # Errors
/// Returns an error if the model is invalid or serialization fails.
pub fn compute_snapshot(
    model_json: &str,
    rect: Rect,
    zoom_scale: f32,
) -> error::Result<LayoutSnapshot> {
    let model = GridModel::from_json(model_json)?;
    Ok(snapshot_model(model, rect, zoom_scale))
}

/// Lay out an already validated model with the viewport at `rect`.
pub fn snapshot_model(model: GridModel, rect: Rect, zoom_scale: f32) -> LayoutSnapshot {
    let mut layout = model.into_layout();
    layout.set_zoom_scale(zoom_scale);
    layout.set_viewport(Viewport {
        scroll_x: rect.x,
        scroll_y: rect.y,
        width: rect.width,
        height: rect.height,
    });
    layout.snapshot(rect)
}

/// Lay out a grid model JSON and return the snapshot for one viewport as JSON
///
/// # Errors
/// Returns an error if the model is invalid or serialization fails.
#[wasm_bindgen]
pub fn layout_json(
    model_json: &str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> Result<String, JsValue> {
    let snapshot = compute_snapshot(model_json, Rect::new(x, y, width, height), 1.0)?;
    let json = serde_json::to_string(&snapshot).map_err(PanegridError::from)?;
    Ok(json)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

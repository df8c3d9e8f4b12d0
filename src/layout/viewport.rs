//! Viewport state: the scroll offset and visible size of the hosting view.

use crate::types::{Point, Rect, Size};

/// Viewport state - the visible window onto the grid content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Horizontal content offset
    pub scroll_x: f32,
    /// Vertical content offset
    pub scroll_y: f32,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a new viewport with default values
    pub fn new() -> Self {
        Self::with_size(800.0, 600.0)
    }

    /// Create a viewport of the given size scrolled to the origin
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// The visible rectangle in content coordinates
    pub fn visible_rect(&self) -> Rect {
        Rect::new(self.scroll_x, self.scroll_y, self.width, self.height)
    }

    /// Convert content coordinates to screen coordinates
    pub fn to_screen(&self, point: Point) -> Point {
        Point::new(point.x - self.scroll_x, point.y - self.scroll_y)
    }

    /// Convert screen coordinates to content coordinates
    pub fn to_content(&self, screen: Point) -> Point {
        Point::new(screen.x + self.scroll_x, screen.y + self.scroll_y)
    }

    /// Largest scroll offsets that still keep the viewport inside `content`
    pub fn max_scroll(&self, content: Size) -> Point {
        Point::new(
            (content.width - self.width).max(0.0),
            (content.height - self.height).max(0.0),
        )
    }

    /// Clamp scroll position to the content bounds.
    pub fn clamp_scroll(&mut self, content: Size) {
        let max = self.max_scroll(content);
        self.scroll_x = self.scroll_x.clamp(0.0, max.x);
        self.scroll_y = self.scroll_y.clamp(0.0, max.y);
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32, content: Size) {
        self.scroll_x += delta_x;
        self.scroll_y += delta_y;
        self.clamp_scroll(content);
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, x: f32, y: f32, content: Size) {
        self.scroll_x = x;
        self.scroll_y = y;
        self.clamp_scroll(content);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

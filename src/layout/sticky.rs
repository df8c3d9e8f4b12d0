//! Headers and footers, and how they float with the scroll offset.
//!
//! The grid header pins to the top of the viewport and the grid footer to its
//! bottom. Section headers stick below the grid header while their section
//! is on screen, then get pushed out by the section's end. Section footers
//! never float.

use super::grid_layout::GridLayout;
use crate::provider::LayoutDataProvider;
use crate::types::{ElementAttributes, ElementIndex, ElementKind, Rect};

/// y of the grid header: the top of the viewport, ignoring overscroll
pub fn grid_header_offset(scroll_y: f32) -> f32 {
    scroll_y.max(0.0)
}

/// y of a section header.
///
/// `base` is the static y of the header (the top of its section). Once the
/// pinned line below the grid header passes `base`, the header follows it
/// until its bottom meets the end of the section.
pub fn section_header_offset(
    base: f32,
    section_height: f32,
    header_height: f32,
    scroll_y: f32,
    grid_header_height: f32,
    sticky: bool,
) -> f32 {
    let pinned = scroll_y + grid_header_height;
    if sticky && pinned > base {
        pinned.min(base + section_height - header_height)
    } else {
        base
    }
}

/// y of the grid footer: the bottom of the viewport, or the bottom of the
/// content when the content is shorter than the viewport.
pub fn grid_footer_offset(
    content_height: f32,
    viewport_height: f32,
    scroll_y: f32,
    footer_height: f32,
) -> f32 {
    content_height.min(viewport_height) + scroll_y - footer_height
}

/// y of a section footer: flush with the bottom of its section
pub fn section_footer_offset(section_end: f32, footer_height: f32) -> f32 {
    section_end - footer_height
}

impl<P: LayoutDataProvider> GridLayout<P> {
    fn column_element(
        &mut self,
        kind: ElementKind,
        section: usize,
        column: usize,
        y: f32,
        height: f32,
    ) -> ElementAttributes {
        let frame = Rect::new(
            self.horizontal_offset(column),
            y,
            self.column_width(column),
            height,
        );
        ElementAttributes {
            kind,
            index: ElementIndex::column(section, column),
            frame,
            z_index: self.z_order().supplementary(kind, column),
        }
    }

    /// Grid header of `column`. Grouped columns get the lower half of the
    /// header band; the grouped banner takes the upper half.
    pub fn grid_header_attributes(&mut self, column: usize) -> ElementAttributes {
        let mut y = grid_header_offset(self.viewport.scroll_y);
        let mut height = self.sections().grid_header_height();
        if self.is_column_grouped(column) {
            height /= 2.0;
            y += height;
        }
        self.column_element(ElementKind::GridHeader, 0, column, y, height)
    }

    /// Grid footer of `column`, pinned to the bottom of the viewport
    pub fn grid_footer_attributes(&mut self, column: usize) -> ElementAttributes {
        let content_height = self.content_size().height;
        let height = self.sections().grid_footer_height();
        let y = grid_footer_offset(
            content_height,
            self.viewport.height,
            self.viewport.scroll_y,
            height,
        );
        self.column_element(ElementKind::GridFooter, 0, column, y, height)
    }

    /// Section header of `column` in `section`
    pub fn section_header_attributes(&mut self, section: usize, column: usize) -> ElementAttributes {
        let scroll_y = self.viewport.scroll_y;
        let sticky = self.metrics.sticky_section_headers;
        let mut sections = self.sections();
        let height = sections.section_header_height(section);
        let y = section_header_offset(
            sections.offset_before_section(section),
            sections.height_of_section(section),
            height,
            scroll_y,
            sections.grid_header_height(),
            sticky,
        );
        self.column_element(ElementKind::SectionHeader, section, column, y, height)
    }

    /// Section footer of `column` in `section`
    pub fn section_footer_attributes(&mut self, section: usize, column: usize) -> ElementAttributes {
        let mut sections = self.sections();
        let height = sections.section_footer_height(section);
        let section_end = sections.offset_before_section(section + 1);
        let y = section_footer_offset(section_end, height);
        self.column_element(ElementKind::SectionFooter, section, column, y, height)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_header_offset() {
        assert_eq!(grid_header_offset(0.0), 0.0);
        assert_eq!(grid_header_offset(120.0), 120.0);
        assert_eq!(grid_header_offset(-40.0), 0.0);
    }

    #[test]
    fn test_section_header_rises_then_clamps() {
        // Section at y=100, 300 tall, header 30, no grid header
        let at = |scroll_y| section_header_offset(100.0, 300.0, 30.0, scroll_y, 0.0, true);
        assert_eq!(at(0.0), 100.0);
        assert_eq!(at(100.0), 100.0);
        assert_eq!(at(150.0), 150.0);
        assert_eq!(at(370.0), 370.0);
        assert_eq!(at(380.0), 370.0);
        assert_eq!(at(1000.0), 370.0);
    }

    #[test]
    fn test_section_header_below_grid_header() {
        assert_eq!(
            section_header_offset(50.0, 300.0, 30.0, 10.0, 50.0, true),
            60.0
        );
        assert_eq!(
            section_header_offset(50.0, 300.0, 30.0, 10.0, 50.0, false),
            50.0
        );
    }

    #[test]
    fn test_grid_footer_offset() {
        // Content taller than the viewport: bottom of the viewport
        assert_eq!(grid_footer_offset(1000.0, 300.0, 200.0, 20.0), 480.0);
        // Content shorter: bottom of the content
        assert_eq!(grid_footer_offset(250.0, 300.0, 0.0, 20.0), 230.0);
    }

    #[test]
    fn test_section_footer_offset() {
        assert_eq!(section_footer_offset(450.0, 25.0), 425.0);
    }
}

//! Sticky header and footer tests
//!
//! Grid header pinned to the top, section headers pushed out by the end of
//! their section, grid footer pinned to the bottom, section footers fixed.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{create_scenario_layout, of_kind};
use panegrid::{ElementIndex, ElementKind, GridLayout, GridModel, Viewport};
use test_case::test_case;

/// Two sections of 5 rows x 40 with 30px headers and 10px footers
fn sectioned_layout(grid_header: f32) -> GridLayout<GridModel> {
    let mut model = GridModel::uniform(3, 100.0, &[5, 5], 40.0);
    model.header_height = grid_header;
    for section in &mut model.sections {
        section.header_height = 30.0;
        section.footer_height = 10.0;
    }
    GridLayout::with_viewport(model, Viewport::with_size(300.0, 200.0))
}

// ============================================================================
// GRID HEADER
// ============================================================================

#[test_case(0.0, 0.0 ; "at rest")]
#[test_case(120.0, 120.0 ; "scrolled")]
#[test_case(-25.0, 0.0 ; "overscrolled")]
fn test_grid_header_pins_to_top(scroll_y: f32, expected: f32) {
    let mut layout = create_scenario_layout();
    layout.set_content_offset(0.0, scroll_y);
    let header = layout.grid_header_attributes(2);
    assert_eq!(header.frame.y, expected);
    assert_eq!(header.frame.height, 50.0);
    assert_eq!(header.frame.x, 200.0);
    assert_eq!(header.index, ElementIndex::column(0, 2));
}

#[test]
fn test_grid_header_stays_visible() {
    let mut layout = create_scenario_layout();
    layout.set_viewport(Viewport::with_size(500.0, 200.0));
    layout.scroll_by(0.0, 180.0);
    let headers = of_kind(&layout.visible_elements(), ElementKind::GridHeader);
    assert_eq!(headers.len(), 5);
}

// ============================================================================
// SECTION HEADERS
// ============================================================================

#[test]
fn test_section_header_rises_linearly_then_clamps() {
    let mut layout = sectioned_layout(0.0);
    // Section 1 starts at 240 and is 240 tall; its header clamps at 240 + 210
    let mut previous = None;
    for scroll_y in (240..=600).step_by(30) {
        let scroll_y = scroll_y as f32;
        layout.set_content_offset(0.0, scroll_y);
        let y = layout.section_header_attributes(1, 0).frame.y;
        if scroll_y <= 450.0 {
            assert_eq!(y, scroll_y);
        } else {
            assert_eq!(y, 450.0);
        }
        if let Some(previous) = previous {
            assert!(y >= previous);
        }
        previous = Some(y);
    }
}

#[test]
fn test_section_header_waits_for_its_section() {
    let mut layout = sectioned_layout(0.0);
    layout.set_content_offset(0.0, 100.0);
    assert_eq!(layout.section_header_attributes(1, 0).frame.y, 240.0);
    assert_eq!(layout.section_header_attributes(0, 0).frame.y, 100.0);
}

#[test]
fn test_section_header_sticks_below_grid_header() {
    let mut layout = sectioned_layout(50.0);
    layout.set_content_offset(0.0, 60.0);
    // Pinned line is 60 + 50; section 0 spans 50..290
    assert_eq!(layout.section_header_attributes(0, 1).frame.y, 110.0);

    layout.set_content_offset(0.0, 250.0);
    assert_eq!(layout.section_header_attributes(0, 1).frame.y, 50.0 + 240.0 - 30.0);
}

#[test]
fn test_non_sticky_section_headers_scroll_away() {
    let mut layout = sectioned_layout(0.0);
    layout.set_sticky_section_headers(false);
    assert!(!layout.sticky_section_headers());
    layout.set_content_offset(0.0, 300.0);
    assert_eq!(layout.section_header_attributes(1, 0).frame.y, 240.0);
}

// ============================================================================
// FOOTERS
// ============================================================================

#[test]
fn test_section_footer_is_fixed() {
    let mut layout = sectioned_layout(50.0);
    for scroll_y in [0.0, 100.0, 400.0] {
        layout.set_content_offset(0.0, scroll_y);
        let footer = layout.section_footer_attributes(0, 2);
        assert_eq!(footer.frame.y, 50.0 + 240.0 - 10.0);
        assert_eq!(footer.frame.height, 10.0);
        assert_eq!(footer.index, ElementIndex::column(0, 2));
    }
}

#[test]
fn test_grid_footer_pins_to_viewport_bottom() {
    let mut layout = sectioned_layout(0.0);
    layout.update_provider(|model| model.footer_height = 25.0);
    // Content is 480 + 25 tall, viewport 200
    layout.set_content_offset(0.0, 0.0);
    assert_eq!(layout.grid_footer_attributes(0).frame.y, 175.0);
    layout.set_content_offset(0.0, 130.0);
    assert_eq!(layout.grid_footer_attributes(0).frame.y, 305.0);
}

#[test]
fn test_grid_footer_in_short_content() {
    let mut model = GridModel::uniform(2, 100.0, &[2], 40.0);
    model.footer_height = 20.0;
    let mut layout = GridLayout::with_viewport(model, Viewport::with_size(300.0, 400.0));
    // Content 80 + 20 shorter than the viewport: footer closes the content
    assert_eq!(layout.grid_footer_attributes(1).frame.y, 80.0);
    let footers = of_kind(&layout.visible_elements(), ElementKind::GridFooter);
    assert_eq!(footers.len(), 2);
}

#[test]
fn test_suppressed_headers_are_not_culled_in() {
    let mut layout = sectioned_layout(0.0);
    layout.update_provider(|model| model.sections[1].header_height = -1.0);
    layout.set_viewport(Viewport::with_size(300.0, 1000.0));
    let headers = of_kind(&layout.visible_elements(), ElementKind::SectionHeader);
    assert_eq!(headers.len(), 3);
    assert!(headers
        .iter()
        .all(|h| matches!(h.index, ElementIndex::Column { section: 0, .. })));
}

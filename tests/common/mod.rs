//! Common test utilities for the layout engine.
//!
//! Grid builders plus a brute-force enumeration of every element, used as
//! the reference that culling must agree with.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_precision_loss
)]

use panegrid::{
    ElementAttributes, ElementKind, GridLayout, GridModel, LayoutDataProvider, LogicalAddress,
    Rect, SectionModel, Viewport,
};

// ============================================================================
// Grid Builders
// ============================================================================

/// Uniform grid: `columns` columns of `column_width`, one section per entry
/// of `rows_per_section`, every row `row_height` tall.
#[must_use]
pub fn create_test_layout(
    columns: usize,
    column_width: f32,
    rows_per_section: &[usize],
    row_height: f32,
) -> GridLayout<GridModel> {
    GridLayout::with_viewport(
        GridModel::uniform(columns, column_width, rows_per_section, row_height),
        Viewport::with_size(800.0, 600.0),
    )
}

/// The end-to-end grid: 1 section, 5 columns of 100, 10 rows of 40 and a
/// 50px grid header.
#[must_use]
pub fn create_scenario_layout() -> GridLayout<GridModel> {
    let mut model = GridModel::uniform(5, 100.0, &[10], 40.0);
    model.header_height = 50.0;
    GridLayout::with_viewport(model, Viewport::with_size(800.0, 600.0))
}

/// A grid that exercises every feature at once: variable column widths and
/// row heights, three sections with headers and footers, frozen panes,
/// groupings and a grid footer.
#[must_use]
pub fn create_feature_model() -> GridModel {
    let mut first = SectionModel::with_row_heights(
        (0..12).map(|row| 20.0 + (row % 4) as f32 * 10.0).collect(),
    );
    first.header_height = 30.0;
    first.footer_height = 20.0;
    first.frozen_rows = 2;

    let mut second = SectionModel::uniform(25, 25.0);
    second.header_height = 30.0;
    second.footer_height = 0.0;
    second.frozen_rows = 1;

    let mut third = SectionModel::with_row_heights(vec![40.0, 0.0, 15.0, 60.0, 35.0]);
    third.header_height = 0.0;
    third.footer_height = 20.0;

    GridModel {
        columns: vec![80.0, 120.0, 60.0, 100.0, 90.0, 150.0, 70.0, 110.0],
        sections: vec![first, second, third],
        header_height: 60.0,
        footer_height: 25.0,
        frozen_columns: 2,
        groupings: vec![vec![1, 3], vec![5, 6]],
        sticky_section_headers: true,
    }
}

#[must_use]
pub fn create_feature_layout(width: f32, height: f32) -> GridLayout<GridModel> {
    GridLayout::with_viewport(create_feature_model(), Viewport::with_size(width, height))
}

// ============================================================================
// Brute Force Reference
// ============================================================================

/// Every element of the grid, in culling order, without any culling.
pub fn all_elements<P: LayoutDataProvider>(layout: &mut GridLayout<P>) -> Vec<ElementAttributes> {
    let mut elements = Vec::new();
    let columns = layout.column_count();
    if columns == 0 {
        return elements;
    }
    let provider_header = layout.provider().grid_header_height();
    let provider_footer = layout.provider().grid_footer_height();

    if provider_header > 0.0 {
        for column in 0..columns {
            elements.push(layout.grid_header_attributes(column));
        }
        for index in 0..layout.column_groupings().len() {
            elements.push(layout.grouped_header_attributes(index).unwrap());
        }
    }

    for section in 0..layout.section_count() {
        if layout.provider().section_header_height(section) > 0.0 {
            for column in 0..columns {
                elements.push(layout.section_header_attributes(section, column));
            }
        }
        for row in 0..layout.row_count(section) {
            for column in 0..columns {
                elements.push(layout.attributes_for_item(LogicalAddress::new(section, row, column)));
            }
        }
        if layout.provider().section_footer_height(section) > 0.0 {
            for column in 0..columns {
                elements.push(layout.section_footer_attributes(section, column));
            }
        }
    }

    if provider_footer > 0.0 {
        for column in 0..columns {
            elements.push(layout.grid_footer_attributes(column));
        }
    }
    elements
}

/// Every element intersecting `rect`, found by checking all of them.
pub fn brute_force_in_rect<P: LayoutDataProvider>(
    layout: &mut GridLayout<P>,
    rect: Rect,
) -> Vec<ElementAttributes> {
    all_elements(layout)
        .into_iter()
        .filter(|attributes| attributes.frame.intersects(&rect))
        .collect()
}

/// Elements of one kind
#[must_use]
pub fn of_kind(elements: &[ElementAttributes], kind: ElementKind) -> Vec<ElementAttributes> {
    elements.iter().filter(|e| e.kind == kind).copied().collect()
}

/// Assert two floats agree to within a hundredth of a pixel
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

#![cfg(feature = "test-utils")]

use proptest::prelude::*;
use tessera_grid::compositor::title_band_height;
use tessera_grid::layout::{MIN_CELL_HEIGHT, MIN_CELL_WIDTH};
use tessera_grid::proptest_strategies::*;
use tessera_grid::utils::visible_width;
use tessera_grid::{Compositor, Frame, FrameState, FrameTheme, GridGeometry, GridOptions, Viewport};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_fixed_columns_ignore_viewport_width(
        columns in 1usize..8,
        cells in arb_card_count(),
        a in arb_width(),
        b in arb_width(),
    ) {
        let options = GridOptions::fixed(columns, 1);
        prop_assert_eq!(options.columns(a, cells), options.columns(b, cells));
    }

    #[test]
    fn prop_responsive_columns_non_decreasing(
        min in 1usize..60,
        gap in arb_gap(),
        cells in arb_card_count(),
        width in 0usize..300,
        grow in 0usize..100,
    ) {
        let options = GridOptions::responsive(min, gap);
        prop_assert!(options.columns(width, cells) <= options.columns(width + grow, cells));
    }

    #[test]
    fn prop_columns_within_bounds(options in arb_grid_options(), width in arb_width(), cells in arb_card_count()) {
        let columns = options.columns(width, cells);
        prop_assert!(columns >= 1);
        prop_assert!(columns <= cells.max(1));
    }

    #[test]
    fn prop_cells_respect_minimums(
        options in arb_grid_options(),
        viewport in arb_viewport(),
        cells in arb_card_count(),
    ) {
        let geometry = GridGeometry::compute(viewport, &options, cells, 0);
        prop_assert!(geometry.cell_width >= MIN_CELL_WIDTH);
        prop_assert!(geometry.cell_height >= MIN_CELL_HEIGHT);
        prop_assert!(geometry.rows * geometry.columns >= cells);
    }

    #[test]
    fn prop_frame_lines_share_width(
        body in arb_body(),
        width in 0usize..60,
        height in 0usize..20,
        padding in 0usize..4,
    ) {
        for state in [FrameState::Normal, FrameState::Focused, FrameState::Selected] {
            let lines = Frame::new(state, &FrameTheme::DEFAULT)
                .title(Some("card"))
                .padding(padding)
                .render(&body, width, height);
            prop_assert_eq!(lines.len(), height);
            for line in &lines {
                prop_assert_eq!(visible_width(line), width);
            }
        }
    }

    #[test]
    fn prop_frame_lines_share_width_for_any_text(
        body in arb_messy_body(),
        title in arb_messy_text(),
        width in 0usize..60,
        height in 0usize..20,
    ) {
        let lines = Frame::new(FrameState::Focused, &FrameTheme::DEFAULT)
            .title(Some(&title))
            .render(&body, width, height);
        prop_assert_eq!(lines.len(), height);
        for line in &lines {
            prop_assert_eq!(visible_width(line), width, "line {:?} of body {:?}", line, body);
        }
    }

    #[test]
    fn prop_geometry_survives_any_gap(
        options in arb_grid_options(),
        gap in any::<usize>(),
        viewport in arb_viewport(),
        cells in arb_card_count(),
    ) {
        let options = GridOptions { gap, ..options };
        let geometry = GridGeometry::compute(viewport, &options, cells, 3);
        prop_assert!(geometry.columns >= 1);
        prop_assert!(geometry.total_width() >= geometry.cell_width);
        prop_assert!(geometry.total_height() >= geometry.rows.min(1) * geometry.cell_height);
    }

    #[test]
    fn prop_compositor_row_count(
        cells in 0usize..20,
        columns in 1usize..6,
        gap in arb_gap(),
        titled in any::<bool>(),
    ) {
        let title = titled.then_some("Board");
        let options = GridOptions::fixed(columns, gap);
        let geometry = GridGeometry::compute(Viewport::new(120, 40), &options, cells, title_band_height(title));
        let theme = FrameTheme::PLAIN;
        let blocks: Vec<Vec<String>> = (0..cells)
            .map(|_| Frame::new(FrameState::Normal, &theme).render("x", geometry.cell_width, geometry.cell_height))
            .collect();

        let lines = Compositor::new(&geometry, &theme).title(title).compose(&blocks);
        let groups = cells.div_ceil(geometry.columns);
        let expected = groups * geometry.cell_height
            + groups.saturating_sub(1) * gap
            + title_band_height(title);
        prop_assert_eq!(lines.len(), expected);
        for line in &lines {
            prop_assert_eq!(visible_width(line), geometry.total_width());
        }
    }
}

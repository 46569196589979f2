use crate::core::actions::generate_styled_frame::generate_styled_frame::generate_styled_frame;
use crate::core::data::grid::Grid;
use crate::core::render::cell_maps::factory::cell_map_factory;
use crate::core::render::encode_frame::encode_frame;
use crate::core::render::errors::RenderError;
use crate::core::render::render_config::RenderConfig;
use crate::core::render::rendered_frame::RenderedFrame;

/// Maps a grid of escape counts to terminal output using the configured mode.
///
/// An unknown mode yields [`RenderError::UnknownMode`] and no output for the frame.
pub fn render_frame(grid: &Grid, config: &RenderConfig) -> Result<RenderedFrame, RenderError> {
    let mode = config.mode.resolve()?;
    let cell_map = cell_map_factory(mode, config.color_shift, grid);

    tracing::debug!(
        mode = %mode,
        cell_map = cell_map.display_name(),
        rows = grid.resolution().rows(),
        cols = grid.resolution().cols(),
        "rendering frame"
    );

    let styled = generate_styled_frame(grid, cell_map.as_ref())?;

    Ok(encode_frame(&styled, &config.glyph, config.clear_before_render)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;
    use crate::core::render::render_mode::{ModeSelection, RenderMode};
    use proptest::prelude::*;

    fn config(mode: RenderMode) -> RenderConfig {
        RenderConfig {
            mode: ModeSelection::Known(mode),
            ..RenderConfig::default()
        }
    }

    fn grid(rows: u32, cols: u32, cells: Vec<u32>) -> Grid {
        Grid::from_data(Resolution::new(rows, cols).unwrap(), cells).unwrap()
    }

    #[test]
    fn all_interior_grid_is_blank_in_every_glyph_mode() {
        let grid = grid(2, 3, vec![0; 6]);

        for &mode in RenderMode::ALL {
            if mode == RenderMode::Number {
                continue;
            }

            let rendered = render_frame(&grid, &config(mode)).unwrap();

            assert_eq!(rendered.body(), ["   ", "   "], "mode {}", mode);
        }
    }

    #[test]
    fn number_mode_prints_counts() {
        let grid = grid(1, 3, vec![0, 4, 17]);

        let rendered = render_frame(&grid, &config(RenderMode::Number)).unwrap();

        assert_eq!(rendered.body(), ["0 4 17"]);
    }

    #[test]
    fn red_mode_normalises_to_frame_max() {
        let grid = grid(1, 3, vec![0, 2, 4]);

        let rendered = render_frame(&grid, &config(RenderMode::Red)).unwrap();

        assert_eq!(
            rendered.body(),
            [" \u{1b}[38;2;128;0;0m█\u{1b}[38;2;255;0;0m█"]
        );
    }

    #[test]
    fn unknown_mode_produces_no_output() {
        let config = RenderConfig {
            mode: ModeSelection::parse("sepia"),
            ..RenderConfig::default()
        };

        let result = render_frame(&grid(1, 1, vec![3]), &config);

        assert_eq!(
            result,
            Err(RenderError::UnknownMode {
                name: "sepia".to_string()
            })
        );
    }

    #[test]
    fn extreme_colour_shift_renders() {
        let config = RenderConfig {
            color_shift: i64::MAX,
            ..RenderConfig::default()
        };

        let rendered = render_frame(&grid(1, 1, vec![1]), &config).unwrap();

        assert_eq!(rendered.body(), ["\u{1b}[38;2;202;255;56m█"]);
    }

    #[test]
    fn clear_flag_is_carried_through() {
        let config = RenderConfig {
            clear_before_render: true,
            ..RenderConfig::default()
        };

        let rendered = render_frame(&grid(1, 1, vec![1]), &config).unwrap();

        assert!(rendered.clear_first);
    }

    proptest! {
        #[test]
        fn colour_shift_of_forty_renders_identically(
            cells in proptest::collection::vec(0u32..500, 12),
            shift in -100i64..100,
        ) {
            let grid = grid(3, 4, cells);
            let base = RenderConfig { color_shift: shift, ..config(RenderMode::Color) };
            let rotated = RenderConfig { color_shift: shift + 40, ..base.clone() };

            prop_assert_eq!(render_frame(&grid, &base), render_frame(&grid, &rotated));
        }
    }
}

//! Tab bar visibility and sizing

use egui::{vec2, Vec2};

use crate::config::Settings;

/// Unscaled tab bar height.
pub const TAB_BAR_DY: f32 = 24.0;

/// Whether the tab bar is shown for `count` tabs.
pub fn tab_bar_visible(count: usize, always_show_single_tab: bool, tabs_in_titlebar: bool) -> bool {
    count > 1 || (count > 0 && (always_show_single_tab || tabs_in_titlebar))
}

/// Tab bar height at `dpi_scale`, multiplied by `factor`.
///
/// The scaled height is snapped to whole pixels before `factor` applies.
pub fn tab_bar_height(dpi_scale: f32, factor: f32) -> f32 {
    let dy = (TAB_BAR_DY * dpi_scale).trunc();
    (dy * factor).trunc()
}

/// Size of a single tab at `dpi_scale`.
pub fn tab_size(settings: &Settings, dpi_scale: f32) -> Vec2 {
    let dx = settings.effective_tab_width() as f32 * dpi_scale;
    vec2(dx.trunc(), (TAB_BAR_DY * dpi_scale).trunc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_table() {
        for count in [0usize, 1, 2, 5] {
            for always_show in [false, true] {
                for in_titlebar in [false, true] {
                    let expected = match count {
                        0 => false,
                        1 => always_show || in_titlebar,
                        _ => true,
                    };
                    assert_eq!(
                        tab_bar_visible(count, always_show, in_titlebar),
                        expected,
                        "count={} always_show={} in_titlebar={}",
                        count,
                        always_show,
                        in_titlebar
                    );
                }
            }
        }
    }

    #[test]
    fn test_tab_bar_height() {
        assert_eq!(tab_bar_height(1.0, 1.0), 24.0);
        assert_eq!(tab_bar_height(1.5, 1.0), 36.0);
        assert_eq!(tab_bar_height(2.0, 0.5), 24.0);
    }

    #[test]
    fn test_tab_bar_height_snaps_before_factor() {
        // 24 * 1.0625 = 25.5 snaps to 25 first, so the doubled bar is 50, not 51
        assert_eq!(tab_bar_height(1.0625, 2.0), 50.0);
        assert_eq!(tab_bar_height(1.0625, 1.0), 25.0);
    }

    #[test]
    fn test_tab_size_respects_minimum_width() {
        let narrow = Settings {
            tab_width: 30,
            ..Settings::default()
        };
        assert_eq!(tab_size(&narrow, 1.0), vec2(Settings::MIN_TAB_WIDTH as f32, 24.0));

        let wide = Settings {
            tab_width: 250,
            ..Settings::default()
        };
        assert_eq!(tab_size(&wide, 2.0), vec2(500.0, 48.0));
    }
}

//! Widget geometry and the clamped interpolations driven by the expansion offset.
//!
//! Offset 0 is the collapsed view (only the selected week visible);
//! [`CALENDAR_HEIGHT`] is the fully expanded month.

use crate::grid::NUMBER_OF_ROWS;

pub const BUTTON_SIZE: f64 = 48.0;
/// Button plus 2pt margin above and below
pub const ROW_HEIGHT: f64 = BUTTON_SIZE + 4.0;
pub const FOOTER_HEIGHT: f64 = 32.0;
pub const CALENDAR_HEIGHT: f64 = ROW_HEIGHT * NUMBER_OF_ROWS as f64 + FOOTER_HEIGHT;
pub const KNOB_WIDTH: f64 = 20.0;

/// Map `value` from `input` onto `output` linearly, clamping at both ends.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if in_hi == in_lo {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// Height of the rows viewport: one row when collapsed, the whole calendar when expanded.
pub fn viewport_height(offset: f64) -> f64 {
    interpolate(
        offset,
        (0.0, CALENDAR_HEIGHT),
        (ROW_HEIGHT, CALENDAR_HEIGHT),
    )
}

/// Vertical shift applied to the rows so `selected_row` stays visible while collapsed.
pub fn row_translate(offset: f64, selected_row: usize) -> f64 {
    interpolate(
        offset,
        (0.0, CALENDAR_HEIGHT),
        (-ROW_HEIGHT * selected_row as f64, 0.0),
    )
}

/// Width of the drag knob in the footer, doubling as the calendar expands.
pub fn knob_width(offset: f64, base: f64) -> f64 {
    interpolate(offset, (0.0, CALENDAR_HEIGHT), (base, base * 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(ROW_HEIGHT, 52.0);
        assert_eq!(CALENDAR_HEIGHT, 344.0);
    }

    #[test]
    fn test_interpolate_clamps() {
        assert_eq!(interpolate(-10.0, (0.0, 100.0), (1.0, 2.0)), 1.0);
        assert_eq!(interpolate(50.0, (0.0, 100.0), (1.0, 2.0)), 1.5);
        assert_eq!(interpolate(500.0, (0.0, 100.0), (1.0, 2.0)), 2.0);
        assert_eq!(interpolate(5.0, (3.0, 3.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn test_viewport_and_translate() {
        assert_eq!(viewport_height(0.0), ROW_HEIGHT);
        assert_eq!(viewport_height(CALENDAR_HEIGHT), CALENDAR_HEIGHT);
        assert_eq!(viewport_height(-CALENDAR_HEIGHT), ROW_HEIGHT);

        assert_eq!(row_translate(0.0, 3), -3.0 * ROW_HEIGHT);
        assert_eq!(row_translate(CALENDAR_HEIGHT, 3), 0.0);
        assert_eq!(row_translate(CALENDAR_HEIGHT / 2.0, 2), -ROW_HEIGHT);
    }

    #[test]
    fn test_knob_width() {
        assert_eq!(knob_width(0.0, KNOB_WIDTH), 20.0);
        assert_eq!(knob_width(CALENDAR_HEIGHT * 4.0, KNOB_WIDTH), 40.0);
    }
}

//! Geometry for the dashboard's SVG line chart.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Number of intervals between y-axis ticks.
pub const Y_TICK_INTERVALS: u32 = 4;

/// Drawing area of the chart in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self { width: 640.0, height: 280.0, pad_left: 40.0, pad_right: 16.0, pad_top: 16.0, pad_bottom: 32.0 }
    }
}

impl ChartFrame {
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(0.0)
    }

    #[must_use]
    pub fn inner_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(0.0)
    }

    /// Baseline y coordinate (value zero).
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.pad_top + self.inner_height()
    }

    /// Y coordinate for `value` on an axis topping out at `axis_max`.
    #[must_use]
    pub fn y_for(&self, value: u32, axis_max: u32) -> f64 {
        let axis_max = f64::from(axis_max.max(1));
        self.baseline() - self.inner_height() * f64::from(value).min(axis_max) / axis_max
    }
}

/// Smallest "nice" axis maximum (1, 2, 3 or 5 times a power of ten per tick)
/// covering `max_value` in [`Y_TICK_INTERVALS`] steps.
pub fn nice_axis_max(max_value: u32) -> u32 {
    if max_value == 0 {
        return Y_TICK_INTERVALS;
    }
    let raw_step = max_value.div_ceil(Y_TICK_INTERVALS);
    let mut magnitude = 1u32;
    loop {
        for factor in [1, 2, 3, 5] {
            let step = factor * magnitude;
            if step >= raw_step {
                return step * Y_TICK_INTERVALS;
            }
        }
        magnitude = magnitude.saturating_mul(10);
    }
}

/// Tick values from zero to `axis_max` inclusive.
pub fn y_ticks(axis_max: u32) -> Vec<u32> {
    let step = (axis_max / Y_TICK_INTERVALS).max(1);
    (0..=Y_TICK_INTERVALS).map(|i| i * step).collect()
}

/// SVG coordinates for each value, spread evenly across the frame.
pub fn plot_points(values: &[u32], axis_max: u32, frame: &ChartFrame) -> Vec<(f64, f64)> {
    let count = values.len();
    #[allow(clippy::cast_precision_loss)]
    let gap = if count > 1 { frame.inner_width() / (count - 1) as f64 } else { 0.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            #[allow(clippy::cast_precision_loss)]
            let x = if count > 1 {
                frame.pad_left + gap * i as f64
            } else {
                frame.pad_left + frame.inner_width() / 2.0
            };
            (x, frame.y_for(*value, axis_max))
        })
        .collect()
}

/// `points` attribute for an SVG `<polyline>`.
pub fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

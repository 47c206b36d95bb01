//! SVG line chart for the weekly appointments series.
//!
//! DESIGN
//! ======
//! All geometry comes from `util::chart`; this component only turns the
//! computed coordinates into SVG elements. Labels sit under each point and
//! the y axis gets evenly spaced grid lines.

use leptos::prelude::*;

use crate::state::dashboard::WeeklyPoint;
use crate::util::chart::{ChartFrame, nice_axis_max, plot_points, polyline_points, y_ticks};

#[component]
pub fn LineChart(points: Vec<WeeklyPoint>) -> impl IntoView {
    let frame = ChartFrame::default();
    let values = points.iter().map(|p| p.appointments).collect::<Vec<_>>();
    let axis_max = nice_axis_max(values.iter().copied().max().unwrap_or(0));
    let coords = plot_points(&values, axis_max, &frame);
    let line = polyline_points(&coords);
    let view_box = format!("0 0 {} {}", frame.width, frame.height);
    let left = coord(frame.pad_left);
    let right = coord(frame.width - frame.pad_right);
    let label_y = coord(frame.height - frame.pad_bottom / 3.0);

    let grid = y_ticks(axis_max)
        .into_iter()
        .map(|tick| {
            let y = frame.y_for(tick, axis_max);
            view! {
                <g class="line-chart__grid">
                    <line x1=left.clone() y1=coord(y) x2=right.clone() y2=coord(y)/>
                    <text x=coord(frame.pad_left - 8.0) y=coord(y + 4.0) text-anchor="end">
                        {tick.to_string()}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    let markers = points
        .iter()
        .zip(coords.iter())
        .map(|(point, (x, y))| {
            let label = format!("{}: {} appointments", point.day, point.appointments);
            view! {
                <g class="line-chart__point" aria-label=label>
                    <circle cx=coord(*x) cy=coord(*y) r="4"></circle>
                    <text x=coord(*x) y=label_y.clone() text-anchor="middle">
                        {point.day.clone()}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="line-chart" viewBox=view_box role="img" aria-label="Weekly appointments">
            {grid}
            <polyline class="line-chart__line" points=line fill="none"/>
            {markers}
        </svg>
    }
}

/// SVG coordinate attribute value.
fn coord(value: f64) -> String {
    format!("{value:.1}")
}

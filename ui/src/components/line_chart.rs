//! Inline SVG line chart over the derived gender series.

use dioxus::prelude::*;

use crate::core::model::GenderCategory;
use crate::core::transform::{Extrema, LinePoint, LineSeries};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN: f64 = 40.0;

fn color_for(category: GenderCategory) -> &'static str {
    match category {
        GenderCategory::Female => "#d45087",
        GenderCategory::Male => "#2f4b7c",
        GenderCategory::Other => "#ffa600",
    }
}

#[component]
pub fn LineChart(series: Vec<LineSeries>, extrema: Extrema) -> Element {
    let has_points = series.iter().any(|s| !s.points.is_empty());
    if !has_points {
        return rsx! {
            p { class: "line-chart__placeholder", "No data points in the selected range." }
        };
    }

    let (x_min, x_max) = x_domain(&series);
    let y_max = if extrema.total_max.is_finite() && extrema.total_max > 0.0 {
        extrema.total_max
    } else {
        1.0
    };

    let plots: Vec<(&'static str, String)> = series
        .iter()
        .map(|s| (color_for(s.category), polyline_points(&s.points, x_min, x_max, y_max)))
        .collect();

    let first_key = series
        .first()
        .and_then(|s| s.points.first())
        .map(|p| p.key.clone())
        .unwrap_or_default();
    let last_key = series
        .first()
        .and_then(|s| s.points.last())
        .map(|p| p.key.clone())
        .unwrap_or_default();
    let y_max_label = format!("{y_max:.0}");

    let baseline = HEIGHT - MARGIN;
    let right = WIDTH - MARGIN;
    let tick_row = baseline + 16.0;
    let axis_label_x = MARGIN - 4.0;
    let y_top_label = MARGIN + 4.0;
    let y_zero_label = baseline + 4.0;

    rsx! {
        figure { class: "line-chart",
            svg {
                class: "line-chart__svg",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                role: "img",
                "aria-label": "Gender counts per group",

                line {
                    x1: "{MARGIN}", y1: "{baseline}", x2: "{right}", y2: "{baseline}",
                    stroke: "#9a9a9a", "stroke-width": "1",
                }
                line {
                    x1: "{MARGIN}", y1: "{MARGIN}", x2: "{MARGIN}", y2: "{baseline}",
                    stroke: "#9a9a9a", "stroke-width": "1",
                }

                for (color, points) in plots.iter() {
                    polyline {
                        points: "{points}",
                        fill: "none",
                        stroke: "{color}",
                        "stroke-width": "2",
                    }
                }

                text { class: "line-chart__tick", x: "{MARGIN}", y: "{tick_row}", "{first_key}" }
                text {
                    class: "line-chart__tick",
                    x: "{right}", y: "{tick_row}", "text-anchor": "end",
                    "{last_key}"
                }
                text {
                    class: "line-chart__tick",
                    x: "{axis_label_x}", y: "{y_top_label}", "text-anchor": "end",
                    "{y_max_label}"
                }
                text {
                    class: "line-chart__tick",
                    x: "{axis_label_x}", y: "{y_zero_label}", "text-anchor": "end",
                    "0"
                }
            }

            figcaption { class: "line-chart__legend",
                for s in series.iter() {
                    span { class: "line-chart__legend-item",
                        span {
                            class: "line-chart__swatch",
                            style: "background: {color_for(s.category)}",
                        }
                        "{s.category.series_name()}"
                    }
                }
            }
        }
    }
}

fn x_domain(series: &[LineSeries]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in series.iter().flat_map(|s| s.points.iter()) {
        if point.x < min {
            min = point.x;
        }
        if point.x > max {
            max = point.x;
        }
    }
    (min, max)
}

fn polyline_points(points: &[LinePoint], x_min: f64, x_max: f64, y_max: f64) -> String {
    let span = x_max - x_min;
    let plot_width = WIDTH - 2.0 * MARGIN;
    let plot_height = HEIGHT - 2.0 * MARGIN;

    points
        .iter()
        .map(|point| {
            let x = if span > 0.0 {
                MARGIN + (point.x - x_min) / span * plot_width
            } else {
                WIDTH / 2.0
            };
            let y = HEIGHT - MARGIN - (point.value as f64 / y_max) * plot_height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, value: u64) -> LinePoint {
        LinePoint {
            x,
            key: x.to_string(),
            value,
        }
    }

    #[test]
    fn points_scale_into_the_plot_area() {
        let points = vec![point(1600.0, 0), point(1800.0, 50), point(2000.0, 100)];
        let rendered = polyline_points(&points, 1600.0, 2000.0, 100.0);
        let coords: Vec<&str> = rendered.split(' ').collect();

        assert_eq!(coords[0], "40.0,280.0");
        assert_eq!(coords[1], "320.0,160.0");
        assert_eq!(coords[2], "600.0,40.0");
    }

    #[test]
    fn single_point_domain_centers_horizontally() {
        let points = vec![point(1900.0, 10)];
        let rendered = polyline_points(&points, 1900.0, 1900.0, 10.0);
        assert_eq!(rendered, "320.0,40.0");
    }
}

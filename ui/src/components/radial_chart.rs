//! SVG donut showing the data-completeness fraction.

use dioxus::prelude::*;

use crate::core::format::format_percent;

const RADIUS: f64 = 45.0;

#[component]
pub fn RadialChart(coverage: f64) -> Element {
    let fraction = if coverage.is_finite() {
        coverage.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let dash = format!("{:.2} {:.2}", fraction * circumference, circumference);
    let label = format_percent(fraction * 100.0);

    rsx! {
        figure { class: "radial-chart",
            svg {
                class: "radial-chart__svg",
                view_box: "0 0 120 120",
                role: "img",
                "aria-label": "Completeness {label}",

                circle {
                    cx: "60", cy: "60", r: "{RADIUS}",
                    fill: "none", stroke: "#e6e6e6", "stroke-width": "14",
                }
                circle {
                    cx: "60", cy: "60", r: "{RADIUS}",
                    fill: "none", stroke: "#d45087", "stroke-width": "14",
                    "stroke-dasharray": "{dash}",
                    "stroke-linecap": "round",
                    transform: "rotate(-90 60 60)",
                }
                text {
                    class: "radial-chart__label",
                    x: "60", y: "66", "text-anchor": "middle",
                    "{label}"
                }
            }
        }
    }
}

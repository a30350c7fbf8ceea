use dioxus::prelude::*;

/// Message toasted when a committed year fails to parse.
pub const INVALID_YEAR_MESSAGE: &str = "Please enter a numeric year";

/// Strict year parser for the range inputs.
pub fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Year committed in a range input. Non-numeric input falls back to
/// `default`; the flag reports the fallback so the owning view can raise a
/// toast.
pub fn committed_year(raw: &str, default: i32) -> (i32, bool) {
    match parse_year(raw) {
        Some(year) => (year, false),
        None => (default, true),
    }
}

/// Start/end year inputs. Emits the raw text on commit; validation and
/// fallback live in the owning view.
#[component]
pub fn YearRangeInputs(
    start: i32,
    end: i32,
    on_start: EventHandler<String>,
    on_end: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "year-range",
            span { class: "year-range__label", "Year range" }
            input {
                class: "year-range__input",
                r#type: "text",
                aria_label: "Start year",
                placeholder: "{start}",
                onchange: move |evt| on_start.call(evt.value()),
            }
            input {
                class: "year-range__input",
                r#type: "text",
                aria_label: "End year",
                placeholder: "{end}",
                onchange: move |evt| on_end.call(evt.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_years_parse() {
        assert_eq!(parse_year("1900"), Some(1900));
        assert_eq!(parse_year(" -350 "), Some(-350));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert_eq!(parse_year("abc"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("19o0"), None);
    }

    #[test]
    fn invalid_input_falls_back_to_the_default_bound() {
        assert_eq!(committed_year("1750", 1600), (1750, false));
        assert_eq!(committed_year(" -350 ", 1600), (-350, false));
        assert_eq!(committed_year("abc", 1600), (1600, true));
        assert_eq!(committed_year("", 2026), (2026, true));
    }
}

pub mod app_navbar;
pub use app_navbar::{register_nav, AppNavbar, NavBuilder};

mod error_panel;
pub use error_panel::ErrorPanel;

mod footer;
pub use footer::AppFooter;

mod gender_table;
pub use gender_table::GenderTable;

mod licensing;
pub use licensing::LicensingNote;

mod line_chart;
pub use line_chart::LineChart;

mod population_toggle;
pub use population_toggle::PopulationToggle;

mod radial_chart;
pub use radial_chart::RadialChart;

mod snapshot_select;
pub use snapshot_select::SnapshotSelect;

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastHost};

mod tooltip;
pub use tooltip::HoverTooltip;

mod year_range;
pub use year_range::{committed_year, parse_year, YearRangeInputs, INVALID_YEAR_MESSAGE};

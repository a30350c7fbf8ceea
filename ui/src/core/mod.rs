pub mod api;
pub mod fetch;
pub mod filters;
pub mod format;
pub mod model;
pub mod timing;
pub mod transform;

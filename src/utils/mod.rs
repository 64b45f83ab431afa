pub mod event_grid;
pub mod validation;

//! UI Components
//!
//! Reusable Leptos components.

mod customer_table;
mod fruit_picker;
mod preference_table;
mod shell;
mod status;
mod total_bounds;

pub use customer_table::CustomerTable;
pub use fruit_picker::FruitPicker;
pub use preference_table::PreferenceTable;
pub use shell::Shell;
pub use status::{LoadError, Loading};
pub use total_bounds::TotalBoundsInputs;

//! Basket Rules
//!
//! Customer and fruit models as they cross the REST boundary, plus the
//! preference-editing and aggregate-bound rules the edit form applies
//! before an update is sent.

mod models;
mod preferences;
mod validation;

pub use models::{Customer, Fruit, FruitPreference};
pub use preferences::{
    add_preference, available_fruits, parse_count, remove_preference, resolve_bound,
    seed_preferences, set_count, CountField,
};
pub use validation::{apply_edits, build_update, validate, BasketViolation, TotalBounds};

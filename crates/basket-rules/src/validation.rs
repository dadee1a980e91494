//! Aggregate Bound Validation
//!
//! Checks a customer's preference counts against its total-fruit range.

use thiserror::Error;

use crate::models::{Customer, FruitPreference};
use crate::preferences::resolve_bound;

/// Why a customer update was rejected before it reached the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasketViolation {
    #[error("Fruit preferences cannot exceed the maximum fruit in the basket: the max counts add up to {total}, but at most {allowed} are allowed")]
    MaxExceeded { total: i64, allowed: i64 },
    #[error("Fruit preferences cannot fall below the minimum fruit in the basket: the min counts add up to {total}, but at least {required} are required")]
    MinNotMet { total: i64, required: i64 },
}

/// Customer-level total fruit range, as entered on the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalBounds {
    pub min: i32,
    pub max: i32,
}

impl TotalBounds {
    pub fn of(customer: &Customer) -> Self {
        Self {
            min: customer.min_total_fruit,
            max: customer.max_total_fruit,
        }
    }

    /// Largest allowed sum of per-fruit max counts
    pub fn allowed_max_sum(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min) + 1
    }
}

/// Customer as it will be sent: edited bounds, and the edited rows in place of
/// the stored preference list
pub fn apply_edits(
    customer: &Customer,
    bounds: TotalBounds,
    prefs: &[FruitPreference],
) -> Customer {
    Customer {
        min_total_fruit: bounds.min,
        max_total_fruit: bounds.max,
        fruits: prefs.to_vec(),
        ..customer.clone()
    }
}

/// Customer to send for the submitted form: blank bound inputs keep the stored
/// values, the edited rows replace the stored list, and the result must pass [`validate`]
pub fn build_update(
    customer: &Customer,
    min_input: &str,
    max_input: &str,
    prefs: &[FruitPreference],
) -> Result<Customer, BasketViolation> {
    let bounds = TotalBounds {
        min: resolve_bound(min_input, customer.min_total_fruit),
        max: resolve_bound(max_input, customer.max_total_fruit),
    };
    let updated = apply_edits(customer, bounds, prefs);
    validate(&updated)?;
    Ok(updated)
}

/// Check the customer's preferences against its total bounds. The max check runs first.
pub fn validate(customer: &Customer) -> Result<(), BasketViolation> {
    let bounds = TotalBounds::of(customer);
    let allowed = bounds.allowed_max_sum();
    let total_max: i64 = customer.fruits.iter().map(|f| i64::from(f.max)).sum();
    let total_min: i64 = customer.fruits.iter().map(|f| i64::from(f.min)).sum();

    log::debug!(
        "validating basket for customer {}: allowed max {}, total max {}, required min {}, total min {}",
        customer.id,
        allowed,
        total_max,
        bounds.min,
        total_min
    );

    if total_max > allowed {
        return Err(BasketViolation::MaxExceeded {
            total: total_max,
            allowed,
        });
    }
    if total_min < i64::from(bounds.min) {
        return Err(BasketViolation::MinNotMet {
            total: total_min,
            required: i64::from(bounds.min),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{remove_preference, seed_preferences, set_count, CountField};

    fn customer(min: i32, max: i32, fruits: Vec<FruitPreference>) -> Customer {
        Customer {
            id: 1,
            name: "Anton".to_string(),
            min_total_fruit: min,
            max_total_fruit: max,
            fruits,
        }
    }

    fn pref(id: u32, min: i32, max: i32) -> FruitPreference {
        FruitPreference {
            id,
            name: format!("Fruit {}", id),
            min,
            max,
        }
    }

    #[test]
    fn test_edit_within_bounds_is_allowed() {
        let stored = customer(1, 10, vec![pref(1, 0, 0)]);
        let mut prefs = seed_preferences(&stored);
        set_count(&mut prefs, 1, CountField::Min, "5");
        set_count(&mut prefs, 1, CountField::Max, "8");

        let updated = apply_edits(&stored, TotalBounds::of(&stored), &prefs);
        assert_eq!(validate(&updated), Ok(()));
        assert_eq!(updated.fruits, vec![pref(1, 5, 8)]);
    }

    #[test]
    fn test_max_over_allowed_is_blocked() {
        let stored = customer(1, 10, vec![pref(1, 0, 0)]);
        let mut prefs = seed_preferences(&stored);
        set_count(&mut prefs, 1, CountField::Max, "12");

        let updated = apply_edits(&stored, TotalBounds::of(&stored), &prefs);
        assert_eq!(
            validate(&updated),
            Err(BasketViolation::MaxExceeded {
                total: 12,
                allowed: 10,
            })
        );
    }

    #[test]
    fn test_max_equal_to_allowed_passes() {
        let c = customer(1, 10, vec![pref(1, 1, 4), pref(2, 0, 6)]);
        assert_eq!(validate(&c), Ok(()));
    }

    #[test]
    fn test_min_below_required_is_blocked() {
        let c = customer(3, 10, vec![pref(1, 1, 2), pref(2, 1, 2)]);
        assert_eq!(
            validate(&c),
            Err(BasketViolation::MinNotMet {
                total: 2,
                required: 3,
            })
        );
    }

    #[test]
    fn test_max_checked_before_min() {
        let c = customer(5, 6, vec![pref(1, 0, 9)]);
        assert!(matches!(
            validate(&c),
            Err(BasketViolation::MaxExceeded { .. })
        ));
    }

    #[test]
    fn test_deleting_only_row_fails_min() {
        let stored = customer(1, 10, vec![pref(1, 2, 3)]);
        let mut prefs = seed_preferences(&stored);
        remove_preference(&mut prefs, 1);

        let updated = apply_edits(&stored, TotalBounds::of(&stored), &prefs);
        assert!(updated.fruits.is_empty());
        assert_eq!(
            validate(&updated),
            Err(BasketViolation::MinNotMet {
                total: 0,
                required: 1,
            })
        );

        let lenient = apply_edits(&stored, TotalBounds { min: 0, max: 10 }, &prefs);
        assert_eq!(validate(&lenient), Ok(()));
    }

    #[test]
    fn test_apply_edits_replaces_rows_without_duplicates() {
        let stored = customer(1, 10, vec![pref(1, 1, 2), pref(2, 0, 1)]);
        let prefs = vec![pref(2, 0, 3)];

        let updated = apply_edits(&stored, TotalBounds { min: 2, max: 9 }, &prefs);
        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.name, stored.name);
        assert_eq!((updated.min_total_fruit, updated.max_total_fruit), (2, 9));
        assert_eq!(updated.fruits, vec![pref(2, 0, 3)]);
    }

    #[test]
    fn test_build_update_scenarios() {
        let stored = customer(1, 10, vec![pref(1, 0, 0)]);

        let mut prefs = seed_preferences(&stored);
        set_count(&mut prefs, 1, CountField::Min, "5");
        set_count(&mut prefs, 1, CountField::Max, "8");
        let updated = build_update(&stored, "1", "10", &prefs).unwrap();
        assert_eq!(updated.fruits, vec![pref(1, 5, 8)]);

        set_count(&mut prefs, 1, CountField::Max, "12");
        assert_eq!(
            build_update(&stored, "1", "10", &prefs),
            Err(BasketViolation::MaxExceeded {
                total: 12,
                allowed: 10,
            })
        );
    }

    #[test]
    fn test_build_update_blank_inputs_keep_stored_bounds() {
        let stored = customer(2, 8, vec![pref(1, 2, 3)]);
        let updated = build_update(&stored, "", " ", &stored.fruits).unwrap();
        assert_eq!((updated.min_total_fruit, updated.max_total_fruit), (2, 8));

        let widened = build_update(&stored, "0", "20", &stored.fruits).unwrap();
        assert_eq!((widened.min_total_fruit, widened.max_total_fruit), (0, 20));
    }

    #[test]
    fn test_build_update_checks_edited_bounds() {
        let stored = customer(1, 10, vec![pref(1, 2, 3)]);
        assert_eq!(
            build_update(&stored, "4", "", &stored.fruits),
            Err(BasketViolation::MinNotMet {
                total: 2,
                required: 4,
            })
        );
    }

    #[test]
    fn test_sums_do_not_overflow() {
        let c = customer(
            0,
            i32::MAX,
            vec![pref(1, 0, i32::MAX), pref(2, 0, i32::MAX)],
        );
        assert!(matches!(
            validate(&c),
            Err(BasketViolation::MaxExceeded { .. })
        ));
    }

    #[test]
    fn test_violation_message_names_constraint() {
        let max = BasketViolation::MaxExceeded {
            total: 12,
            allowed: 10,
        }
        .to_string();
        assert!(max.contains("maximum"));
        assert!(max.contains("12"));
        let min = BasketViolation::MinNotMet {
            total: 0,
            required: 1,
        }
        .to_string();
        assert!(min.contains("minimum"));
    }
}

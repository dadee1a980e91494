//! Preference Editing
//!
//! Operations behind the preference table on the customer edit page.

use crate::models::{Customer, Fruit, FruitPreference};

/// Which count of a preference row an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountField {
    Min,
    Max,
}

/// Editable rows seeded from a customer's stored preferences
pub fn seed_preferences(customer: &Customer) -> Vec<FruitPreference> {
    customer.fruits.clone()
}

/// Catalog fruits whose id is not already in `chosen`, in catalog order
pub fn available_fruits(catalog: &[Fruit], chosen: &[FruitPreference]) -> Vec<Fruit> {
    catalog
        .iter()
        .filter(|fruit| !chosen.iter().any(|pref| pref.id == fruit.id))
        .cloned()
        .collect()
}

/// Append `fruit` with zero counts. Returns false if its id is already present.
pub fn add_preference(prefs: &mut Vec<FruitPreference>, fruit: &Fruit) -> bool {
    if prefs.iter().any(|pref| pref.id == fruit.id) {
        return false;
    }
    prefs.push(FruitPreference::from_fruit(fruit));
    true
}

/// Store the parsed `raw` input into one count of row `id`
pub fn set_count(prefs: &mut [FruitPreference], id: u32, field: CountField, raw: &str) {
    let value = parse_count(raw);
    if let Some(pref) = prefs.iter_mut().find(|pref| pref.id == id) {
        match field {
            CountField::Min => pref.min = value,
            CountField::Max => pref.max = value,
        }
    }
}

/// Drop row `id`
pub fn remove_preference(prefs: &mut Vec<FruitPreference>, id: u32) {
    prefs.retain(|pref| pref.id != id);
}

/// Read a count the way a browser reads a number field with `parseInt`:
/// leading whitespace, optional sign, then digits up to the first non-digit.
/// Anything without leading digits (or out of range) is 0.
pub fn parse_count(raw: &str) -> i32 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return 0;
    }
    let magnitude: i64 = match digits.parse() {
        Ok(n) => n,
        Err(_) => return 0,
    };
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).unwrap_or(0)
}

/// Bound from a total-bound input, falling back to `existing` when the input is blank
pub fn resolve_bound(raw: &str, existing: i32) -> i32 {
    if raw.trim().is_empty() {
        existing
    } else {
        parse_count(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit(id: u32, name: &str) -> Fruit {
        Fruit {
            id,
            name: name.to_string(),
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

    fn catalog() -> Vec<Fruit> {
        vec![
            fruit(1, "Apple"),
            fruit(2, "Banana"),
            fruit(3, "Cherry"),
            fruit(4, "Date"),
        ]
    }

    #[test]
    fn test_available_excludes_every_chosen_fruit() {
        let chosen = vec![pref(1, 0, 0), pref(3, 0, 0)];
        let ids: Vec<u32> = available_fruits(&catalog(), &chosen)
            .iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_available_with_nothing_chosen_is_whole_catalog() {
        assert_eq!(available_fruits(&catalog(), &[]), catalog());
    }

    #[test]
    fn test_add_never_reoffered() {
        let catalog = catalog();
        let mut prefs = Vec::new();

        // Add every fruit the picker offers, one at a time
        while let Some(next) = available_fruits(&catalog, &prefs).first().cloned() {
            assert!(add_preference(&mut prefs, &next));
            let offered = available_fruits(&catalog, &prefs);
            for p in &prefs {
                assert!(offered.iter().all(|f| f.id != p.id));
            }
        }

        assert_eq!(prefs.len(), catalog.len());
        assert!(prefs.iter().all(|p| p.min == 0 && p.max == 0));
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut prefs = vec![pref(2, 1, 4)];
        assert!(!add_preference(&mut prefs, &fruit(2, "Banana")));
        assert_eq!(prefs, vec![pref(2, 1, 4)]);
    }

    #[test]
    fn test_set_count_stores_parsed_value() {
        let mut prefs = vec![pref(1, 0, 0), pref(2, 0, 0)];
        set_count(&mut prefs, 2, CountField::Min, "5");
        set_count(&mut prefs, 2, CountField::Max, "8");
        assert_eq!(prefs[1], pref(2, 5, 8));
        assert_eq!(prefs[0], pref(1, 0, 0));

        set_count(&mut prefs, 2, CountField::Max, "abc");
        assert_eq!(prefs[1].max, 0);

        set_count(&mut prefs, 2, CountField::Min, "");
        assert_eq!(prefs[1].min, 0);
    }

    #[test]
    fn test_set_count_unknown_id_is_ignored() {
        let mut prefs = vec![pref(1, 2, 3)];
        set_count(&mut prefs, 99, CountField::Min, "7");
        assert_eq!(prefs, vec![pref(1, 2, 3)]);
    }

    #[test]
    fn test_remove_preference() {
        let mut prefs = vec![pref(1, 0, 0), pref(2, 0, 0)];
        remove_preference(&mut prefs, 1);
        assert_eq!(prefs, vec![pref(2, 0, 0)]);
        remove_preference(&mut prefs, 2);
        assert!(prefs.is_empty());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count("  7"), 7);
        assert_eq!(parse_count("-3"), -3);
        assert_eq!(parse_count("+4"), 4);
        assert_eq!(parse_count("9.5"), 9);
        assert_eq!(parse_count("5abc"), 5);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-"), 0);
        assert_eq!(parse_count("99999999999"), 0);
    }

    #[test]
    fn test_resolve_bound_falls_back_on_blank() {
        assert_eq!(resolve_bound("", 4), 4);
        assert_eq!(resolve_bound("   ", 4), 4);
        assert_eq!(resolve_bound("6", 4), 6);
        assert_eq!(resolve_bound("0", 4), 0);
    }

    #[test]
    fn test_seed_preferences_copies_rows() {
        let customer = Customer {
            id: 1,
            name: "Anton".to_string(),
            min_total_fruit: 1,
            max_total_fruit: 10,
            fruits: vec![pref(1, 0, 2)],
        };
        assert_eq!(seed_preferences(&customer), vec![pref(1, 0, 2)]);
    }
}

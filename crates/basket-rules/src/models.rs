//! Wire Models
//!
//! Data structures matching the REST backend's JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Customer record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u32,
    pub name: String,
    /// Inclusive lower bound on the total fruit count of an order
    pub min_total_fruit: i32,
    /// Inclusive upper bound on the total fruit count of an order
    pub max_total_fruit: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fruits: Vec<FruitPreference>,
}

/// Catalog fruit, independent of any customer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u32,
    pub name: String,
}

/// A fruit with a per-customer min/max count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitPreference {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max: i32,
}

impl FruitPreference {
    /// New preference row for a catalog fruit, both counts zero
    pub fn from_fruit(fruit: &Fruit) -> Self {
        Self {
            id: fruit.id,
            name: fruit.name.clone(),
            min: 0,
            max: 0,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

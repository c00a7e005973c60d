use serde::{Deserialize, Serialize};

use super::units::{Dimension, Unit};
use crate::util::next_row_id;

/// One editable comparison row. `price` and `amount` stay raw edit buffers so
/// partially filled forms are representable; parsing happens in the ranking
/// engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub amount: String,
    pub unit: Unit,
    #[serde(rename = "unitType")]
    pub dimension: Dimension,
}

impl Item {
    pub fn blank() -> Self {
        let dimension = Dimension::default();
        Self {
            id: next_row_id(),
            name: String::new(),
            price: String::new(),
            amount: String::new(),
            unit: dimension.default_unit(),
            dimension,
        }
    }

    /// All three user-entered fields filled in; required before saving.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.price.trim().is_empty()
            && !self.amount.trim().is_empty()
    }

    /// Switching dimension resets the unit to the new dimension's default so
    /// the unit always stays a member of the dimension's unit set.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        if self.dimension != dimension {
            self.dimension = dimension;
            self.unit = dimension.default_unit();
        }
    }

    /// Repairs the unit/dimension invariant on data read back from disk.
    pub fn normalize_unit(&mut self) {
        if self.unit.dimension() != self.dimension {
            self.unit = self.dimension.default_unit();
        }
    }
}

/// Immutable snapshot of a working item list, created only by an explicit
/// save. `id` is the save time in milliseconds, strictly increasing within
/// one store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedComparison {
    pub id: i64,
    pub items: Vec<Item>,
    pub date: String,
}

/// Per-item save rejection, reported to the user next to the offending row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub item_id: u64,
    pub reason: String,
}

impl ValidationError {
    pub fn required_fields(item_id: u64) -> Self {
        Self {
            item_id,
            reason: "All fields are required".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_items_get_unique_ids_and_default_units() {
        let first = Item::blank();
        let second = Item::blank();
        assert_ne!(first.id, second.id);
        assert_eq!(first.dimension, Dimension::Volume);
        assert_eq!(first.unit, Unit::Milliliter);
        assert!(!first.is_complete());
    }

    #[test]
    fn set_dimension_resets_unit_to_default() {
        let mut item = Item::blank();
        item.unit = Unit::Liter;
        item.set_dimension(Dimension::Weight);
        assert_eq!(item.unit, Unit::Gram);
        // same dimension keeps the chosen unit
        item.unit = Unit::Kilogram;
        item.set_dimension(Dimension::Weight);
        assert_eq!(item.unit, Unit::Kilogram);
    }

    #[test]
    fn normalize_unit_repairs_mismatched_rows() {
        let mut item = Item::blank();
        item.dimension = Dimension::Weight;
        item.unit = Unit::Liter;
        item.normalize_unit();
        assert_eq!(item.unit, Unit::Gram);
    }

    #[test]
    fn persisted_layout_uses_unit_type_and_symbol_strings() {
        let mut item = Item::blank();
        item.name = "Milk".to_string();
        item.price = "3.00".to_string();
        item.amount = "1".to_string();
        item.unit = Unit::Liter;

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["unitType"], "volume");
        assert_eq!(json["unit"], "L");
        assert_eq!(json["price"], "3.00");

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn saved_comparison_round_trips_losslessly() {
        let mut item = Item::blank();
        item.name = "Eggs".to_string();
        item.price = "4.50".to_string();
        item.amount = "12".to_string();
        item.dimension = Dimension::Count;
        item.unit = Unit::Each;

        let saved = SavedComparison {
            id: 1_725_000_000_000,
            items: vec![item],
            date: "2026-08-30 11:15".to_string(),
        };
        let json = serde_json::to_string(&saved).unwrap();
        let back: SavedComparison = serde_json::from_str(&json).unwrap();
        assert_eq!(back, saved);
    }
}

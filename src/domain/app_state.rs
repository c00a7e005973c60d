use super::entities::Item;
use super::ranking::sanitize_price;
use super::units::{Dimension, Unit};
use crate::util::reserve_row_ids;

/// Field identifiers for the plain edit events the UI sends to the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Price,
    Amount,
    Unit,
    Dimension,
}

/// Working state of the active editing session. Exclusively owns the working
/// item list; saved comparisons own their own copies.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub items: Vec<Item>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            items: vec![Item::blank()],
        }
    }
}

impl AppState {
    pub fn add_row(&mut self) -> u64 {
        let item = Item::blank();
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Removes a row, keeping a floor of one blank row so the session can
    /// never save an empty comparison.
    pub fn remove_row(&mut self, item_id: u64) {
        self.items.retain(|item| item.id != item_id);
        if self.items.is_empty() {
            self.items.push(Item::blank());
        }
    }

    /// Replaces the working list with a loaded snapshot. Reserves past the
    /// snapshot's ids so new rows never collide with loaded ones; an empty
    /// snapshot falls back to the one-blank-row floor.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        if let Some(max_id) = items.iter().map(|item| item.id).max() {
            reserve_row_ids(max_id);
        }
        self.items = items;
        if self.items.is_empty() {
            self.items.push(Item::blank());
        }
    }

    /// Applies one raw field edit. Unknown item ids and unit symbols outside
    /// the row's dimension leave the state untouched; the price field goes
    /// through the keystroke guard.
    pub fn apply_field_edit(&mut self, item_id: u64, field: ItemField, raw: &str) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) else {
            return;
        };

        match field {
            ItemField::Name => item.name = raw.to_string(),
            ItemField::Amount => item.amount = raw.to_string(),
            ItemField::Price => item.price = sanitize_price(&item.price, raw),
            ItemField::Unit => {
                if let Ok(unit) = Unit::parse(item.dimension, raw) {
                    item.unit = unit;
                }
            }
            ItemField::Dimension => {
                if let Ok(dimension) = raw.parse::<Dimension>() {
                    item.set_dimension(dimension);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_blank_row() {
        let state = AppState::default();
        assert_eq!(state.items.len(), 1);
        assert!(!state.items[0].is_complete());
    }

    #[test]
    fn field_edits_update_the_addressed_row() {
        let mut state = AppState::default();
        let id = state.items[0].id;
        state.apply_field_edit(id, ItemField::Name, "Olive oil");
        state.apply_field_edit(id, ItemField::Amount, "750");
        state.apply_field_edit(id, ItemField::Price, "$8.99");
        assert_eq!(state.items[0].name, "Olive oil");
        assert_eq!(state.items[0].amount, "750");
        assert_eq!(state.items[0].price, "8.99");
    }

    #[test]
    fn rejected_price_keystrokes_keep_the_prior_value() {
        let mut state = AppState::default();
        let id = state.items[0].id;
        state.apply_field_edit(id, ItemField::Price, "4.2");
        state.apply_field_edit(id, ItemField::Price, "4.2x");
        assert_eq!(state.items[0].price, "4.2");
    }

    #[test]
    fn dimension_edit_resets_unit_to_the_new_default() {
        let mut state = AppState::default();
        let id = state.items[0].id;
        state.apply_field_edit(id, ItemField::Unit, "L");
        assert_eq!(state.items[0].unit, Unit::Liter);
        state.apply_field_edit(id, ItemField::Dimension, "weight");
        assert_eq!(state.items[0].dimension, Dimension::Weight);
        assert_eq!(state.items[0].unit, Unit::Gram);
    }

    #[test]
    fn unit_outside_current_dimension_is_ignored() {
        let mut state = AppState::default();
        let id = state.items[0].id;
        state.apply_field_edit(id, ItemField::Unit, "kg");
        assert_eq!(state.items[0].unit, Unit::Milliliter);
    }

    #[test]
    fn edits_to_unknown_rows_are_no_ops() {
        let mut state = AppState::default();
        let before = state.clone();
        state.apply_field_edit(u64::MAX, ItemField::Name, "ghost");
        assert_eq!(state, before);
    }

    #[test]
    fn removing_the_last_row_leaves_one_blank_row() {
        let mut state = AppState::default();
        let first = state.items[0].id;
        state.apply_field_edit(first, ItemField::Name, "Milk");
        state.remove_row(first);

        assert_eq!(state.items.len(), 1);
        assert_ne!(state.items[0].id, first);
        assert!(!state.items[0].is_complete());
    }

    #[test]
    fn replacing_with_an_empty_snapshot_keeps_the_row_floor() {
        let mut state = AppState::default();
        state.replace_items(Vec::new());
        assert_eq!(state.items.len(), 1);
        assert!(!state.items[0].is_complete());
    }

    #[test]
    fn replace_items_reserves_loaded_ids() {
        let mut state = AppState::default();
        let mut loaded = Item::blank();
        loaded.id += 100;
        let loaded_id = loaded.id;
        state.replace_items(vec![loaded]);
        let fresh = state.add_row();
        assert!(fresh > loaded_id);
    }
}

use dioxus::prelude::*;

use crate::{
    app::SharedStore,
    domain::{evaluate, AppState, Item, ItemField, ItemOutcome, ValidationError},
    ui::components::{
        item_table::{ItemRow, ItemTable, RowStatus},
        kpi_card::KpiCard,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::persistence::SaveError,
};

#[component]
pub fn ComparePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let store = use_context::<SharedStore>();

    // Ranking is recomputed from scratch on every render, which in turn runs
    // on every field edit; there is no cached result to go stale.
    let items = state.with(|st| st.items.clone());
    let result = evaluate(&items);

    let best_item = result
        .best
        .and_then(|id| items.iter().find(|item| item.id == id));
    let best_name = best_item
        .map(|item| item.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or("—")
        .to_string();
    let best_price_label = result
        .best
        .and_then(|id| result.outcome_for(id))
        .and_then(|outcome| outcome.ranked())
        .zip(best_item)
        .map(|(ranked, item)| {
            format!(
                "{:.4} / {}",
                ranked.price_per_base_unit,
                item.dimension.base_symbol()
            )
        })
        .unwrap_or_else(|| "—".to_string());
    let ranked_label = format!("{} of {}", result.included_count(), items.len());

    let rows: Vec<ItemRow> = items
        .iter()
        .map(|item| {
            let outcome = result.outcome_for(item.id);
            let status = match outcome {
                Some(ItemOutcome::Included(ranked)) => {
                    if result.best == Some(item.id) {
                        RowStatus::Best
                    } else {
                        RowStatus::Ranked(ranked.percentage_diff)
                    }
                }
                Some(ItemOutcome::ExcludedInvalid) => RowStatus::Invalid,
                _ => RowStatus::Incomplete,
            };
            let unit_price_label = outcome.and_then(|o| o.ranked()).map(|ranked| {
                format!(
                    "{:.4} / {}",
                    ranked.price_per_base_unit,
                    item.dimension.base_symbol()
                )
            });
            ItemRow {
                id: item.id,
                name: item.name.clone(),
                price: item.price.clone(),
                amount: item.amount.clone(),
                dimension: item.dimension,
                unit: item.unit,
                unit_price_label,
                status,
            }
        })
        .collect();

    let on_edit = {
        let mut state = state.clone();
        move |(item_id, field, value): (u64, ItemField, String)| {
            state.with_mut(|st| st.apply_field_edit(item_id, field, &value));
        }
    };

    let on_remove = {
        let mut state = state.clone();
        move |item_id: u64| {
            state.with_mut(|st| st.remove_row(item_id));
        }
    };

    let on_add_row = {
        let mut state = state.clone();
        move |_| {
            state.with_mut(|st| {
                st.add_row();
            });
        }
    };

    let on_save = {
        let state = state.clone();
        let toasts = toasts.clone();
        let store = store.clone();
        move |_| {
            let Some(store) = store.get() else {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "Storage is unavailable; comparisons cannot be saved.",
                );
                return;
            };
            let items = state.with(|st| st.items.clone());
            match store.save(&items) {
                Ok(saved) => {
                    println!("Saved comparison {} ({} items).", saved.id, saved.items.len());
                    push_toast(
                        toasts.clone(),
                        ToastKind::Success,
                        format!("Comparison saved ({}).", saved.date),
                    );
                }
                Err(SaveError::Invalid(errors)) => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        validation_message(&items, &errors),
                    );
                }
                Err(err) => {
                    println!("Failed to save comparison: {err}");
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        format!("Failed to save comparison: {err}"),
                    );
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            section {
                class: "kpi-grid",
                KpiCard {
                    title: "Best Value".to_string(),
                    value: best_name,
                    description: Some("Lowest price per base unit".to_string()),
                }
                KpiCard {
                    title: "Best Unit Price".to_string(),
                    value: best_price_label,
                    description: Some("Price per ml, g, or single unit".to_string()),
                }
                KpiCard {
                    title: "Items Ranked".to_string(),
                    value: ranked_label,
                    description: Some("Rows with both price and amount filled in".to_string()),
                }
            }

            section {
                class: "compare-section",
                ItemTable {
                    rows,
                    on_edit,
                    on_remove,
                }
                div {
                    class: "compare-actions",
                    button {
                        class: "btn-ghost",
                        onclick: on_add_row,
                        "+ Add item"
                    }
                    button {
                        class: "btn-primary",
                        onclick: on_save,
                        "Save comparison"
                    }
                }
            }
        }
    }
}

fn row_label(items: &[Item], item_id: u64) -> String {
    let position = items.iter().position(|item| item.id == item_id);
    match position.map(|idx| (idx, &items[idx])) {
        Some((_, item)) if !item.name.trim().is_empty() => item.name.trim().to_string(),
        Some((idx, _)) => format!("Row {}", idx + 1),
        None => format!("Row {item_id}"),
    }
}

/// One toast covering the whole validation set; toasting per row would push
/// the earliest errors out of the stack when many rows fail at once.
fn validation_message(items: &[Item], errors: &[ValidationError]) -> String {
    let labels: Vec<String> = errors
        .iter()
        .map(|error| row_label(items, error.item_id))
        .collect();
    match (labels.as_slice(), errors.first()) {
        ([single], Some(error)) => format!("{single}: {}", error.reason),
        _ => format!(
            "{} rows are missing required fields: {}",
            labels.len(),
            labels.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_item(name: &str) -> Item {
        let mut item = Item::blank();
        item.name = name.to_string();
        item
    }

    #[test]
    fn single_failure_names_the_row_and_reason() {
        let items = vec![named_item("Milk"), named_item("")];
        let errors = vec![ValidationError::required_fields(items[1].id)];
        let message = validation_message(&items, &errors);
        assert_eq!(message, "Row 2: All fields are required");
    }

    #[test]
    fn many_failures_collapse_into_one_message_listing_every_row() {
        let items: Vec<Item> = ["A", "B", "C", "D", "E", ""]
            .iter()
            .map(|name| named_item(name))
            .collect();
        let errors: Vec<ValidationError> = items
            .iter()
            .map(|item| ValidationError::required_fields(item.id))
            .collect();

        let message = validation_message(&items, &errors);
        assert!(message.starts_with("6 rows are missing required fields:"));
        for label in ["A", "B", "C", "D", "E", "Row 6"] {
            assert!(message.contains(label), "missing {label} in {message}");
        }
    }
}

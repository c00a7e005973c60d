use dioxus::prelude::*;

use super::diff_badge::DiffBadge;
use crate::domain::{Dimension, ItemField, Unit};

/// How one row fared in the last ranking pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowStatus {
    Best,
    /// Percent more expensive than the best value.
    Ranked(f64),
    Incomplete,
    Invalid,
}

#[derive(Clone, PartialEq)]
pub struct ItemRow {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub amount: String,
    pub dimension: Dimension,
    pub unit: Unit,
    /// e.g. "0.0030 / ml"; None while the row is excluded.
    pub unit_price_label: Option<String>,
    pub status: RowStatus,
}

#[component]
pub fn ItemTable(
    rows: Vec<ItemRow>,
    on_edit: EventHandler<(u64, ItemField, String)>,
    on_remove: EventHandler<u64>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "table-panel",
            table {
                class: "item-table",
                thead {
                    tr {
                        th { "Item" }
                        th { "Price" }
                        th { "Amount" }
                        th { "Unit" }
                        th { "Measure" }
                        th { "Unit price" }
                        th { "vs. best" }
                        th {}
                    }
                }
                tbody {
                    for row in rows {
                        ItemRowView {
                            row,
                            on_edit: on_edit.clone(),
                            on_remove: on_remove.clone(),
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "empty-cell",
                                colspan: "8",
                                "Add an item to start comparing."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ItemRowViewProps {
    row: ItemRow,
    on_edit: EventHandler<(u64, ItemField, String)>,
    on_remove: EventHandler<u64>,
}

#[component]
fn ItemRowView(props: ItemRowViewProps) -> Element {
    let row = props.row;
    let on_edit = props.on_edit;
    let id = row.id;
    let row_class = if row.status == RowStatus::Best {
        "item-row best"
    } else {
        "item-row"
    };
    let unit_price = row
        .unit_price_label
        .clone()
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        tr {
            class: "{row_class}",
            td {
                input {
                    class: "field-input",
                    value: "{row.name}",
                    placeholder: "e.g. Milk (store brand)",
                    oninput: move |evt| on_edit.call((id, ItemField::Name, evt.value())),
                }
            }
            td {
                input {
                    class: "field-input field-narrow",
                    inputmode: "decimal",
                    value: "{row.price}",
                    placeholder: "0.00",
                    oninput: move |evt| on_edit.call((id, ItemField::Price, evt.value())),
                }
            }
            td {
                input {
                    class: "field-input field-narrow",
                    inputmode: "decimal",
                    value: "{row.amount}",
                    placeholder: "1000",
                    oninput: move |evt| on_edit.call((id, ItemField::Amount, evt.value())),
                }
            }
            td {
                select {
                    class: "select-input",
                    onchange: move |evt| on_edit.call((id, ItemField::Unit, evt.value())),
                    for unit in row.dimension.units() {
                        option {
                            value: unit.symbol(),
                            selected: *unit == row.unit,
                            "{unit.symbol()}"
                        }
                    }
                }
            }
            td {
                select {
                    class: "select-input",
                    onchange: move |evt| on_edit.call((id, ItemField::Dimension, evt.value())),
                    for dimension in Dimension::ALL {
                        option {
                            value: dimension.key(),
                            selected: dimension == row.dimension,
                            "{dimension.label()}"
                        }
                    }
                }
            }
            td { class: "unit-price-cell", "{unit_price}" }
            td {
                DiffBadge { status: row.status }
            }
            td {
                class: "row-actions",
                button {
                    class: "btn-danger",
                    onclick: move |_| props.on_remove.call(id),
                    "Remove"
                }
            }
        }
    }
}

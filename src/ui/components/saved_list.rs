use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SavedRow {
    pub id: i64,
    pub date: String,
    pub item_count: usize,
    pub preview: String,
}

#[component]
pub fn SavedList(
    rows: Vec<SavedRow>,
    on_load: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    if rows.is_empty() {
        return rsx! {
            div {
                class: "panel empty-panel",
                "No saved comparisons yet. Save one from the Compare page."
            }
        };
    }

    rsx! {
        ul {
            class: "saved-list",
            for row in rows {
                SavedCard {
                    row,
                    on_load: on_load.clone(),
                    on_delete: on_delete.clone(),
                }
            }
        }
    }
}

#[component]
fn SavedCard(row: SavedRow, on_load: EventHandler<i64>, on_delete: EventHandler<i64>) -> Element {
    let id = row.id;
    let count_label = if row.item_count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", row.item_count)
    };

    rsx! {
        li {
            class: "saved-card",
            div {
                class: "saved-card-body",
                p { class: "saved-date", "{row.date}" }
                p { class: "saved-meta", "{count_label}" }
                if !row.preview.is_empty() {
                    p { class: "saved-preview", "{row.preview}" }
                }
            }
            div {
                class: "saved-card-actions",
                button {
                    class: "btn-primary",
                    onclick: move |_| on_load.call(id),
                    "Load"
                }
                button {
                    class: "btn-danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    app::{Route, SharedStore},
    domain::AppState,
    ui::components::{
        saved_list::{SavedList, SavedRow},
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn SavedPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let store = use_context::<SharedStore>();
    let nav = use_navigator();

    // Bumped after each delete so the list re-reads from disk.
    let mut revision = use_signal(|| 0u32);
    let _ = revision();

    let comparisons = store
        .get()
        .map(|store| store.list_saved())
        .unwrap_or_default();

    let rows: Vec<SavedRow> = comparisons
        .iter()
        .map(|saved| SavedRow {
            id: saved.id,
            date: saved.date.clone(),
            item_count: saved.items.len(),
            preview: saved
                .items
                .iter()
                .map(|item| item.name.trim())
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let on_load = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let store = store.clone();
        move |id: i64| {
            match store.get().and_then(|store| store.load(id)) {
                Some(items) => {
                    println!("Loaded comparison {id} ({} items).", items.len());
                    state.with_mut(|st| st.replace_items(items));
                    push_toast(toasts.clone(), ToastKind::Success, "Comparison loaded.");
                    nav.push(Route::Compare {});
                }
                None => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Warning,
                        "That comparison no longer exists.",
                    );
                }
            }
        }
    };

    let on_delete = {
        let toasts = toasts.clone();
        let store = store.clone();
        move |id: i64| {
            let Some(store) = store.get() else {
                push_toast(toasts.clone(), ToastKind::Error, "Storage is unavailable.");
                return;
            };
            match store.delete(id) {
                Ok(()) => {
                    push_toast(toasts.clone(), ToastKind::Info, "Comparison deleted.");
                    let next = revision() + 1;
                    revision.set(next);
                }
                Err(err) => {
                    println!("Failed to delete comparison {id}: {err}");
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        format!("Failed to delete comparison: {err}"),
                    );
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            h2 { class: "page-heading", "Saved comparisons" }
            SavedList {
                rows,
                on_load,
                on_delete,
            }
        }
    }
}

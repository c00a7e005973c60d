use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{ComparePage, SavedPage},
        shell::Shell,
    },
    util::{assets, persistence::ComparisonStore},
};

pub const APP_NAME: &str = "Unit Price Comparer";

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/compare")]
    Compare {},
    #[route("/saved")]
    Saved {},
}

/// Process-wide handle to the saved-comparison store. Holds `None` when the
/// platform config directory cannot be resolved; the app then runs in
/// live-comparison-only mode and save/load surface an error toast.
#[derive(Clone)]
pub struct SharedStore(Arc<Option<ComparisonStore>>);

impl SharedStore {
    pub fn open() -> Self {
        let store = match ComparisonStore::new() {
            Ok(store) => Some(store),
            Err(err) => {
                println!("Comparison storage unavailable: {err}");
                None
            }
        };
        Self(Arc::new(store))
    }

    pub fn get(&self) -> Option<&ComparisonStore> {
        self.0.as_ref().as_ref()
    }
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    let store = use_hook(SharedStore::open);
    use_context_provider(|| store.clone());

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Compare() -> Element {
    rsx! { Shell { ComparePage {} } }
}

#[component]
pub fn Saved() -> Element {
    rsx! { Shell { SavedPage {} } }
}

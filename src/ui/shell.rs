use dioxus::prelude::*;

use crate::app::{Route, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "shell",
            header {
                class: "shell-header",
                div { class: "shell-header-inner",
                    div {
                        h1 { class: "shell-title", "{APP_NAME}" }
                        p { class: "shell-subtitle", "compare the cost per unit, not the sticker price" }
                    }
                    nav { class: "shell-nav",
                        NavButton {
                            active: matches!(current_route, Route::Compare {}),
                            onclick: move |_| { nav.push(Route::Compare {}); },
                            label: "Compare",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Saved {}),
                            onclick: move |_| { nav.push(Route::Saved {}); },
                            label: "Saved",
                        }
                    }
                }
            }
            main { class: "shell-main",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-btn active" } else { "nav-btn" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

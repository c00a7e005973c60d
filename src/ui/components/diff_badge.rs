use dioxus::prelude::*;

use super::item_table::RowStatus;

#[component]
pub fn DiffBadge(status: RowStatus) -> Element {
    let (label, class) = match status {
        RowStatus::Best => ("Best value".to_string(), "badge badge-best"),
        // the diff is infinite when the best item is free
        RowStatus::Ranked(diff) if diff.is_finite() => (format!("+{diff:.2}%"), "badge badge-diff"),
        RowStatus::Ranked(_) => ("vs. free".to_string(), "badge badge-diff"),
        RowStatus::Incomplete => ("—".to_string(), "badge badge-muted"),
        RowStatus::Invalid => ("Check input".to_string(), "badge badge-invalid"),
    };

    rsx! {
        span { class: "{class}", "{label}" }
    }
}

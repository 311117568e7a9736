use dioxus::prelude::*;

use crate::vm::HistoryRowVm;

#[component]
pub fn HistoryList(rows: Vec<HistoryRowVm>) -> Element {
    rsx! {
        section { class: "card history",
            h2 { "Answer History" }
            if rows.is_empty() {
                p { class: "history-empty", "No answers yet." }
            } else {
                ul {
                    for (index, row) in rows.iter().enumerate() {
                        li { key: "{index}",
                            strong { "{row.label}" }
                            " {row.input} – "
                            span { class: "history-feedback", "{row.feedback}" }
                        }
                    }
                }
            }
        }
    }
}

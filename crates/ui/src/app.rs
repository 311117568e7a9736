use dioxus::prelude::*;

use crate::views::PracticeView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "English Survival" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                PracticeView {}
            }
        }
    }
}

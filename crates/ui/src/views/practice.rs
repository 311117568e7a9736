use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::history::HistoryList;
use crate::vm::{SessionIntent, SessionPhase, SessionVm, map_practice_screen};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || SessionVm::new(ctx.start_practice()));

    let dispatch_intent = use_callback(move |intent: SessionIntent| {
        let mut vm = vm;
        vm.write().dispatch(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PracticeTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let (screen, phase) = {
        let guard = vm.read();
        (map_practice_screen(&guard.snapshot()), guard.phase())
    };
    let card_class = match phase {
        SessionPhase::AwaitingInput => "card task",
        SessionPhase::FeedbackShown => "card task answered",
    };

    rsx! {
        div { class: "page",
            h1 { "{screen.heading}" }
            p { class: "stats",
                "Streak: "
                strong { "{screen.streak}" }
                " days | Points: "
                strong { "{screen.points}" }
                " | Level: "
                strong { "{screen.level}" }
            }

            section { class: "{card_class}",
                h2 { "{screen.title}" }
                p { class: "progress", "{screen.progress_label}" }
                p { "{screen.explanation}" }
                ul { class: "examples",
                    for (index, example) in screen.examples.iter().enumerate() {
                        li {
                            key: "{index}",
                            class: "example",
                            onclick: move |_| dispatch_intent.call(SessionIntent::Listen(index)),
                            "{example} "
                            span { class: "listen-hint", "(Click to listen)" }
                        }
                    }
                }
                p { class: "prompt", "{screen.prompt}" }
                textarea {
                    id: "practice-answer",
                    placeholder: "Write your English answer here...",
                    value: "{screen.draft}",
                    oninput: move |evt: FormEvent| dispatch_intent.call(SessionIntent::Edit(evt.value())),
                }
                div { class: "actions",
                    button {
                        id: "practice-submit",
                        onclick: move |_| dispatch_intent.call(SessionIntent::Submit),
                        "Check Answer"
                    }
                    button {
                        id: "practice-next",
                        onclick: move |_| dispatch_intent.call(SessionIntent::Advance),
                        "Next Task"
                    }
                }
                {screen.feedback.as_ref().map(|feedback| rsx! {
                    p { class: "feedback", "{feedback}" }
                })}
            }

            HistoryList { rows: screen.history.clone() }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PracticeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionIntent>>>>,
}

#[cfg(test)]
impl PracticeTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<SessionIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<SessionIntent> {
        (*self.dispatch.borrow()).expect("practice dispatch registered")
    }
}

use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use learn_core::SessionState;
use learn_core::model::Catalog;
use services::{Narrator, RecordingNarrator};

use crate::context::{UiApp, build_app_context};
use crate::views::PracticeView;
use crate::views::practice::PracticeTestHandles;
use crate::vm::SessionIntent;

struct TestApp {
    catalog: Arc<Catalog>,
    narrator: Arc<RecordingNarrator>,
    initial_state: Option<SessionState>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn narrator(&self) -> Arc<dyn Narrator> {
        self.narrator.clone()
    }

    fn locale(&self) -> String {
        "en-US".to_string()
    }

    fn initial_state(&self) -> SessionState {
        self.initial_state
            .clone()
            .unwrap_or_else(|| SessionState::new(self.catalog()))
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: PracticeTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn PracticeHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { PracticeView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub narrator: Arc<RecordingNarrator>,
    handles: PracticeTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: SessionIntent) {
        self.handles.dispatch().call(intent);
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> ViewHarness {
    setup_view_harness_with_state(None)
}

pub fn setup_view_harness_with_state(initial_state: Option<SessionState>) -> ViewHarness {
    let narrator = Arc::new(RecordingNarrator::new());
    let handles = PracticeTestHandles::default();
    let app = Arc::new(TestApp {
        catalog: Arc::new(Catalog::english_survival()),
        narrator: Arc::clone(&narrator),
        initial_state,
    });

    let dom = VirtualDom::new_with_props(
        PracticeHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness {
        dom,
        narrator,
        handles,
    };
    harness.rebuild();
    harness
}

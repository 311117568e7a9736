use services::PracticeLoop;
use learn_core::SessionSnapshot;

/// User actions the practice view can dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    Edit(String),
    Submit,
    Advance,
    Listen(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingInput,
    FeedbackShown,
}

pub struct SessionVm {
    practice: PracticeLoop,
}

impl SessionVm {
    #[must_use]
    pub fn new(practice: PracticeLoop) -> Self {
        Self { practice }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.practice.state().is_showing_feedback() {
            SessionPhase::FeedbackShown
        } else {
            SessionPhase::AwaitingInput
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.practice.snapshot()
    }

    pub fn dispatch(&mut self, intent: SessionIntent) {
        match intent {
            SessionIntent::Edit(text) => self.practice.edit_draft(text),
            SessionIntent::Submit => {
                self.practice.submit();
            }
            SessionIntent::Advance => {
                self.practice.advance();
            }
            SessionIntent::Listen(index) => {
                self.practice.narrate_example(index);
            }
        }
    }
}

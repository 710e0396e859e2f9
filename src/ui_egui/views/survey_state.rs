//! Submission state machine behind the RSVP form.
//!
//! Editing --valid submit--> Submitting --delivered--> Success
//! Submitting --failed--> Editing (generic error shown)
//! Editing --invalid submit--> Editing (first validation error shown)

use crate::models::rsvp::RsvpResponse;
use crate::services::notifier::{NotifyError, Notifier};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Shown to the guest for any configuration or delivery failure; the cause
/// only goes to the log.
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Something went wrong while sending your answer. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Editing,
    Submitting,
    Success,
}

/// Outcome reported when a pending submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    Delivered,
    Failed,
}

type SubmissionResult = Result<(), NotifyError>;

pub struct SurveyState {
    /// Bound directly to the form widgets
    pub form: RsvpResponse,
    phase: SubmissionPhase,
    /// Stays visible while the guest edits; cleared on the next submit
    error: Option<String>,
    pending: Option<Receiver<SubmissionResult>>,
}

impl Default for SurveyState {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyState {
    pub fn new() -> Self {
        Self {
            form: RsvpResponse::default(),
            phase: SubmissionPhase::Editing,
            error: None,
            pending: None,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Validate and, if valid, move to Submitting.
    ///
    /// Returns the answer to send, or `None` when nothing should be sent
    /// (invalid form, or not in the Editing phase).
    pub fn begin_submit(&mut self) -> Option<RsvpResponse> {
        if self.phase != SubmissionPhase::Editing {
            return None;
        }

        self.error = None;
        match self.form.validate() {
            Ok(()) => {
                self.phase = SubmissionPhase::Submitting;
                Some(self.form.clone())
            }
            Err(err) => {
                log::debug!("RSVP form rejected: {}", err);
                self.error = Some(err.user_message().to_string());
                None
            }
        }
    }

    /// Settle a submission started with [`SurveyState::begin_submit`].
    pub fn finish_submit(&mut self, result: SubmissionResult) -> SubmissionEvent {
        self.pending = None;
        match result {
            Ok(()) => {
                self.phase = SubmissionPhase::Success;
                SubmissionEvent::Delivered
            }
            Err(err) => {
                log::error!("RSVP submission failed: {}", err);
                self.fail()
            }
        }
    }

    /// Validate and send on a background thread. Returns true if a
    /// submission was started.
    pub fn submit(&mut self, notifier: &Notifier) -> bool {
        let Some(response) = self.begin_submit() else {
            return false;
        };

        let notifier = notifier.clone();
        let (tx, rx) = mpsc::channel();
        self.pending = Some(rx);

        thread::spawn(move || {
            let result = notifier.notify(&response);
            let _ = tx.send(result);
        });

        true
    }

    /// Check whether the background submission has finished.
    ///
    /// Should be called once per frame while submitting.
    pub fn poll(&mut self) -> Option<SubmissionEvent> {
        let rx = self.pending.as_ref()?;
        match rx.try_recv() {
            Ok(result) => Some(self.finish_submit(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::error!("RSVP submission worker disconnected unexpectedly");
                self.pending = None;
                Some(self.fail())
            }
        }
    }

    fn fail(&mut self) -> SubmissionEvent {
        self.phase = SubmissionPhase::Editing;
        self.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
        SubmissionEvent::Failed
    }
}

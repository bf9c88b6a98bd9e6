//! Request coordinator.
//!
//! Owns the session's [`RequestOutcome`] and the selected [`Subject`]. All
//! mutation goes through this type; observers only ever get a
//! [`watch::Receiver`].
//!
//! At most one request is outstanding. Outstanding is tracked apart from the
//! published outcome, since `reset` shows `Idle` while a call is still
//! pending. The check and the transition into `InFlight` happen inside the
//! watch channel's lock, so concurrent `submit` calls cannot both be
//! accepted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use eduvision_core::failure::{EMPTY_PROMPT_MESSAGE, NO_OUTPUT_MESSAGE, classify_fault};
use eduvision_core::{
    ClientFault, EduError, GenerationPrompt, GenerativeClient, PreparedImage, PromptRequest,
    RequestKind, RequestOutcome, Subject,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::image_preprocessor::{ImagePreprocessor, ImageSource};

/// What happened to a submission.
#[derive(Debug)]
pub enum Submission {
    /// The request is in flight; the handle resolves once the outcome has
    /// been published.
    Accepted(JoinHandle<()>),
    /// Another request was still outstanding. Nothing changed.
    Rejected,
    /// Blank prompt and no image. The outcome is now `Failed`.
    Invalid,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Waits until an accepted request has published its terminal outcome.
    /// Returns immediately for rejected or invalid submissions.
    pub async fn wait(self) {
        if let Self::Accepted(handle) = self
            && let Err(e) = handle.await
        {
            tracing::error!("Request task failed: {}", e);
        }
    }
}

/// Coordinates prompt building, the model call and outcome publication.
pub struct RequestCoordinator {
    client: Arc<dyn GenerativeClient>,
    outcome: Arc<watch::Sender<RequestOutcome>>,
    outstanding: Arc<AtomicBool>,
    subject: watch::Sender<Subject>,
    preprocessor: ImagePreprocessor,
}

impl RequestCoordinator {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        let (outcome, _) = watch::channel(RequestOutcome::Idle);
        let (subject, _) = watch::channel(Subject::default());
        Self {
            client,
            outcome: Arc::new(outcome),
            outstanding: Arc::new(AtomicBool::new(false)),
            subject,
            preprocessor: ImagePreprocessor::default(),
        }
    }

    pub fn with_preprocessor(mut self, preprocessor: ImagePreprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    pub fn with_subject(self, subject: Subject) -> Self {
        self.subject.send_replace(subject);
        self
    }

    // ============================================================================
    // Observation
    // ============================================================================

    /// Subscribes to outcome changes.
    pub fn subscribe(&self) -> watch::Receiver<RequestOutcome> {
        self.outcome.subscribe()
    }

    /// Snapshot of the current outcome.
    pub fn outcome(&self) -> RequestOutcome {
        self.outcome.borrow().clone()
    }

    /// Whether a model call is still pending, even if `reset` already
    /// returned the outcome to `Idle`.
    pub fn has_outstanding_request(&self) -> bool {
        self.outstanding.load(Ordering::Acquire)
    }

    pub fn subscribe_subject(&self) -> watch::Receiver<Subject> {
        self.subject.subscribe()
    }

    pub fn selected_subject(&self) -> Subject {
        *self.subject.borrow()
    }

    // ============================================================================
    // Commands
    // ============================================================================

    /// Replaces the active subject. Requests already submitted keep the
    /// subject they were built with.
    pub fn select_subject(&self, subject: Subject) {
        tracing::debug!("Selected subject: {}", subject);
        self.subject.send_replace(subject);
    }

    /// Returns the outcome to `Idle`. Resetting an idle coordinator notifies
    /// nobody.
    ///
    /// A request still in flight is not cancelled; its result is published
    /// when it arrives, and new submissions are rejected until then.
    pub fn reset(&self) {
        self.outcome.send_if_modified(|state| {
            if state.is_idle() {
                false
            } else {
                *state = RequestOutcome::Idle;
                true
            }
        });
    }

    /// Builds a prompt with the selected subject and submits it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(
        &self,
        kind: RequestKind,
        image: Option<PreparedImage>,
        user_text: impl Into<String>,
    ) -> Submission {
        let mut request = PromptRequest::new(kind, self.selected_subject(), user_text);
        request.image = image;
        self.submit_request(request)
    }

    /// Submits a fully specified request, using its own subject.
    pub fn submit_request(&self, request: PromptRequest) -> Submission {
        tracing::info!(
            kind = ?request.kind,
            subject = %request.subject,
            has_image = request.image.is_some(),
            "Submitting request"
        );
        let prompt = request.build_prompt();
        self.send_prompt(request.image, prompt)
    }

    pub fn explain_diagram(
        &self,
        image: Option<PreparedImage>,
        question: impl Into<String>,
    ) -> Submission {
        self.submit(RequestKind::ExplainDiagram, image, question)
    }

    pub fn generate_quiz(&self, concept: impl Into<String>) -> Submission {
        self.submit(RequestKind::GenerateQuiz, None, concept)
    }

    pub fn visualize_concept(&self, concept: impl Into<String>) -> Submission {
        self.submit(RequestKind::VisualizeConcept, None, concept)
    }

    /// Sends a literal prompt (and optional image) to the model.
    ///
    /// Validation looks at the prompt text itself: a blank prompt is only
    /// accepted when an image is attached.
    pub fn send_prompt(&self, image: Option<PreparedImage>, prompt: impl Into<String>) -> Submission {
        let prompt = prompt.into();
        let is_blank = prompt.trim().is_empty() && image.is_none();
        tracing::debug!(
            prompt_len = prompt.len(),
            has_image = image.is_some(),
            "send_prompt called"
        );

        let mut verdict = Verdict::Accepted;
        self.outcome.send_if_modified(|state| {
            if self.outstanding.load(Ordering::Acquire) {
                verdict = Verdict::Rejected;
                false
            } else if is_blank {
                verdict = Verdict::Invalid;
                *state = RequestOutcome::Failed(EMPTY_PROMPT_MESSAGE.to_string());
                true
            } else {
                self.outstanding.store(true, Ordering::Release);
                *state = RequestOutcome::InFlight;
                true
            }
        });

        match verdict {
            Verdict::Rejected => {
                tracing::warn!("A request is already outstanding; ignoring submission");
                Submission::Rejected
            }
            Verdict::Invalid => {
                tracing::warn!("Rejected blank prompt without image");
                Submission::Invalid
            }
            Verdict::Accepted => Submission::Accepted(self.dispatch(GenerationPrompt::new(prompt, image))),
        }
    }

    /// Decodes and bounds an image for a later submission.
    ///
    /// On failure the outcome becomes `Failed` with a readable reason (unless
    /// a request is in flight) and the error is returned, so the caller does
    /// not go on to submit.
    pub async fn load_image(&self, source: ImageSource) -> Result<PreparedImage, EduError> {
        match self.preprocessor.decode_and_bound(source).await {
            Ok(image) => Ok(image),
            Err(err) => {
                tracing::warn!("Failed to load image: {}", err);
                let reason = match &err {
                    EduError::Decode(reason) => reason.clone(),
                    other => other.to_string(),
                };
                self.outcome.send_if_modified(|state| {
                    if state.is_in_flight() {
                        false
                    } else {
                        *state = RequestOutcome::Failed(format!("Failed to load image: {reason}"));
                        true
                    }
                });
                Err(err)
            }
        }
    }

    fn dispatch(&self, prompt: GenerationPrompt) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        let call = OutstandingCall {
            outcome: Arc::clone(&self.outcome),
            outstanding: Arc::clone(&self.outstanding),
        };

        tokio::spawn(async move {
            tracing::debug!("Starting model call");
            let result = client.generate(prompt).await;
            let next = resolve(result);
            match &next {
                RequestOutcome::Succeeded(text) => {
                    tracing::info!("Request succeeded: {} characters", text.len())
                }
                RequestOutcome::Failed(message) => tracing::error!("Request failed: {}", message),
                _ => {}
            }
            call.finish(next);
        })
    }
}

/// Held by the spawned model call. Dropping it clears the outstanding flag,
/// so a panicking client does not wedge the coordinator.
struct OutstandingCall {
    outcome: Arc<watch::Sender<RequestOutcome>>,
    outstanding: Arc<AtomicBool>,
}

impl OutstandingCall {
    /// Publishes the result and clears the flag under the same lock that
    /// `send_prompt` checks it under.
    fn finish(self, next: RequestOutcome) {
        self.outcome.send_modify(|state| {
            *state = next;
            self.outstanding.store(false, Ordering::Release);
        });
    }
}

impl Drop for OutstandingCall {
    fn drop(&mut self) {
        self.outstanding.store(false, Ordering::Release);
    }
}

enum Verdict {
    Accepted,
    Rejected,
    Invalid,
}

fn resolve(result: Result<Option<String>, ClientFault>) -> RequestOutcome {
    match result {
        Ok(Some(text)) if !text.trim().is_empty() => RequestOutcome::Succeeded(text),
        Ok(_) => RequestOutcome::Failed(NO_OUTPUT_MESSAGE.to_string()),
        Err(fault) => RequestOutcome::Failed(classify_fault(fault.message.as_deref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(
            resolve(Ok(Some("Photosynthesis is...".into()))),
            RequestOutcome::Succeeded("Photosynthesis is...".into())
        );
        assert_eq!(
            resolve(Ok(Some(" \n".into()))),
            RequestOutcome::Failed(NO_OUTPUT_MESSAGE.into())
        );
        assert_eq!(resolve(Ok(None)), RequestOutcome::Failed(NO_OUTPUT_MESSAGE.into()));
        assert_eq!(
            resolve(Err(ClientFault::unknown())),
            RequestOutcome::Failed("Error: Unknown error occurred".into())
        );
    }
}

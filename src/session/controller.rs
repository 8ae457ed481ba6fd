use super::fsm::{SessionEvent, SessionPhase, SessionStateMachine};
use super::preview::PreviewHandle;
use crate::{
    Error, Result,
    translate::{ImageFile, TargetLanguage, TranslateClient, TranslationRequest, TranslationResult},
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One tagged submission handed to the transport. The tag implements
/// discard-on-arrival: an outcome whose tag no longer matches the
/// controller's in-flight submission is ignored.
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    pub id: Uuid,
    pub request: TranslationRequest,
}

/// Owns the single session state and serializes every transition. The
/// transport is stateless between calls; at most one submission is in flight
/// per session.
pub struct SessionController {
    transport: Arc<dyn TranslateClient>,
    machine: SessionStateMachine,
    selected_file: Option<ImageFile>,
    preview: Option<PreviewHandle>,
    last_result: Option<TranslationResult>,
    in_flight: Option<Uuid>,
}

impl SessionController {
    pub fn new(transport: Arc<dyn TranslateClient>) -> Self {
        Self {
            transport,
            machine: SessionStateMachine::new(),
            selected_file: None,
            preview: None,
            last_result: None,
            in_flight: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.machine.current_phase()
    }

    pub fn selected_file(&self) -> Option<&ImageFile> {
        self.selected_file.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn last_result(&self) -> Option<&TranslationResult> {
        self.last_result.as_ref()
    }

    /// Accepts a new selection. Replaces the previous selection wholesale,
    /// releases its preview, discards any prior result, and supersedes a
    /// pending submission. Rejected candidates leave the session untouched.
    pub fn select_file(&mut self, candidate: ImageFile) -> Result<()> {
        if candidate.is_empty() {
            return Err(Error::EmptyImage);
        }
        if !candidate.is_image() {
            return Err(Error::UnsupportedFileType {
                media_type: candidate.media_type,
            });
        }

        let preview = PreviewHandle::create(&candidate.media_type, &candidate.bytes)?;

        if let Some(mut old) = self.preview.take() {
            old.release();
        }
        if let Some(stale) = self.in_flight.take() {
            debug!("Selection supersedes in-flight submission {}", stale);
        }

        info!(
            "Selected file '{}' ({}, {} bytes)",
            candidate.file_name,
            candidate.media_type,
            candidate.bytes.len()
        );

        self.selected_file = Some(candidate);
        self.preview = Some(preview);
        self.last_result = None;
        self.machine.transition(SessionEvent::FileSelected)
    }

    /// Admits a submission: builds the request from the current selection and
    /// moves to Submitting. Fails fast, with no state change, when nothing is
    /// selected or a submission is already in flight.
    pub fn begin_submission(&mut self, target_language: TargetLanguage) -> Result<SubmissionTicket> {
        if self.machine.is_submitting() || self.in_flight.is_some() {
            return Err(Error::SubmissionInFlight);
        }
        let image = self.selected_file.clone().ok_or(Error::NoFileSelected)?;

        let request = TranslationRequest::new(image, target_language)?;
        let id = Uuid::new_v4();

        self.machine.transition(SessionEvent::SubmitStarted)?;
        self.in_flight = Some(id);

        info!("Submission {} admitted (target '{}')", id, target_language);

        Ok(SubmissionTicket { id, request })
    }

    /// Reconciles a transport outcome. Stale outcomes (superseded by a newer
    /// selection) are discarded; a valid success moves to Succeeded; any
    /// failure, including a malformed success, moves to Failed with the
    /// labeled fallback result.
    pub fn resolve_submission(&mut self, id: Uuid, outcome: Result<TranslationResult>) {
        if self.in_flight != Some(id) {
            debug!("Discarding outcome for superseded submission {}", id);
            return;
        }
        self.in_flight = None;

        let checked = outcome.and_then(|result| {
            result.validate()?;
            Ok(result)
        });

        let (event, result) = match checked {
            Ok(result) => {
                info!(
                    "Submission {} succeeded: script '{}', confidence {}",
                    id, result.source_script, result.confidence
                );
                (SessionEvent::TransportSucceeded, result)
            }
            Err(e) => {
                warn!("Submission {} failed, using fallback result: {}", id, e);
                (
                    SessionEvent::TransportFailed,
                    TranslationResult::simulated_fallback(),
                )
            }
        };

        // The in-flight guard means the machine is still Submitting here.
        if let Err(e) = self.machine.transition(event) {
            warn!("Dropping outcome for submission {}: {}", id, e);
            return;
        }
        self.last_result = Some(result);
    }

    /// Full cycle: admit, one transport call, reconcile. Transport failures
    /// are absorbed into the Failed phase; only validation errors propagate.
    pub async fn submit(&mut self, target_language: TargetLanguage) -> Result<()> {
        let ticket = self.begin_submission(target_language)?;
        let outcome = self.transport.send(ticket.request).await;
        self.resolve_submission(ticket.id, outcome);
        Ok(())
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        if let Some(mut preview) = self.preview.take() {
            preview.release();
        }
    }
}

use crate::{Error, Result};
use tracing::{debug, info, warn};

// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Ready,
    Submitting,
    Succeeded,
    Failed,
}

// Session events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    FileSelected,
    SubmitStarted,
    TransportSucceeded,
    TransportFailed,
}

/// Phase machine for one translation session. Selecting a file always resets
/// to Ready, from every phase; Succeeded and Failed are re-submittable, not
/// terminal.
pub struct SessionStateMachine {
    phase: SessionPhase,
}

impl SessionStateMachine {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
        }
    }

    pub fn current_phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn transition(&mut self, event: SessionEvent) -> Result<()> {
        let old_phase = self.phase;
        debug!(
            "Session FSM processing event {:?} in phase {:?}",
            event, old_phase
        );

        let new_phase = match (self.phase, event) {
            // A new selection supersedes everything, including an in-flight
            // submission and any prior result.
            (_, SessionEvent::FileSelected) => SessionPhase::Ready,
            // Succeeded and Failed keep their selection, so they admit a
            // fresh submission directly.
            (
                SessionPhase::Ready | SessionPhase::Succeeded | SessionPhase::Failed,
                SessionEvent::SubmitStarted,
            ) => SessionPhase::Submitting,
            (SessionPhase::Submitting, SessionEvent::TransportSucceeded) => {
                SessionPhase::Succeeded
            }
            (SessionPhase::Submitting, SessionEvent::TransportFailed) => SessionPhase::Failed,
            _ => {
                warn!(
                    "Invalid session transition from {:?} with event {:?}",
                    self.phase, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self.phase),
                    requested: format!("{event:?}"),
                });
            }
        };

        if old_phase != new_phase {
            info!(
                "Session phase transition: {:?} -> {:?} (event: {:?})",
                old_phase, new_phase, event
            );
        }

        self.phase = new_phase;
        Ok(())
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SessionPhase::Submitting
    }
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

mod controller;
pub mod fsm;
mod preview;

pub use controller::{SessionController, SubmissionTicket};
pub use fsm::{SessionEvent, SessionPhase, SessionStateMachine};
pub use preview::PreviewHandle;

//! Application layer - session state, commands and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The [`PropagationController`] is the only writer of an
//! [`AssessmentSession`]; everything else reads it.

mod controller;
pub mod handlers;
mod session;

pub use controller::PropagationController;
pub use handlers::{
    ChangeScoreCommand, ChangeScoreError, ChangeScoreHandler, ChangeScoreResult, DataSource,
    OpenDomainCommand, OpenDomainError, OpenDomainHandler, OpenDomainResult, StartSessionHandler,
    StartSessionResult,
};
pub use session::AssessmentSession;

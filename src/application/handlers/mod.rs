//! Application handlers.
//!
//! Command handlers that orchestrate the assessment session.

mod change_score;
mod open_domain;
mod start_session;

#[cfg(test)]
pub(crate) mod test_support;

pub use change_score::{
    ChangeScoreCommand, ChangeScoreError, ChangeScoreHandler, ChangeScoreResult,
};
pub use open_domain::{OpenDomainCommand, OpenDomainError, OpenDomainHandler, OpenDomainResult};
pub use start_session::{DataSource, StartSessionHandler, StartSessionResult};

//! Audit trail handler.
//!
//! Registered after the primary handler of each delete command, so it
//! only runs when the primary handler succeeded. Demonstrates and
//! exercises command fan-out in the production wiring.

use async_trait::async_trait;
use tracing::info;

use crate::application::mediator::CommandHandler;
use crate::application::requests::{Command, CommandOutcome};
use crate::domain::foundation::DomainError;

/// Logs every mutation it sees. Serves any command tag.
#[derive(Default)]
pub struct AuditTrailHandler;

impl AuditTrailHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandHandler for AuditTrailHandler {
    async fn handle(&self, command: &Command) -> Result<CommandOutcome, DomainError> {
        info!(kind = ?command.kind(), "command executed");
        Ok(CommandOutcome::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::requests::DeleteNews;
    use crate::domain::foundation::NewsId;

    #[tokio::test]
    async fn audit_handler_always_completes() {
        let handler = AuditTrailHandler::new();
        let cmd = Command::DeleteNews(DeleteNews { id: NewsId::new() });
        let outcome = handler.handle(&cmd).await.unwrap();
        assert!(matches!(outcome, CommandOutcome::Done));
    }
}

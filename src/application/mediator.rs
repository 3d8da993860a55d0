//! Mediator - the process-wide registry routing requests to handlers.
//!
//! Two registries, built once at startup and immutable afterwards:
//! command tags map to an ordered handler list (fan-out), query tags
//! map to exactly one handler. Dispatch is a pure lookup by exact tag;
//! the mediator catches nothing, so handler errors propagate to the
//! caller with their structured fields intact.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::requests::{Command, CommandKind, CommandOutcome, Query, QueryKind, QueryOutcome};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Handles one command tag (or, for side-effect handlers, any tag it
/// is registered under).
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, command: &Command) -> Result<CommandOutcome, DomainError>;
}

/// Handles exactly one query tag.
#[async_trait]
pub trait QueryHandler: Send + Sync {
    async fn handle(&self, query: &Query) -> Result<QueryOutcome, DomainError>;
}

/// Error for a handler invoked with a command variant it does not
/// serve. Unreachable when the registry is wired correctly.
pub fn mismatched_request(handler: &str) -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        format!("{} received a request it is not registered for", handler),
    )
}

/// Registry and dispatcher for commands and queries.
#[derive(Default)]
pub struct Mediator {
    command_handlers: HashMap<CommandKind, Vec<Arc<dyn CommandHandler>>>,
    query_handlers: HashMap<QueryKind, Arc<dyn QueryHandler>>,
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates an ordered handler list with a command tag.
    /// Re-registering the same tag overwrites the prior association.
    pub fn register_command(&mut self, kind: CommandKind, handlers: Vec<Arc<dyn CommandHandler>>) {
        self.command_handlers.insert(kind, handlers);
    }

    /// Associates exactly one handler with a query tag; re-registering
    /// overwrites.
    pub fn register_query(&mut self, kind: QueryKind, handler: Arc<dyn QueryHandler>) {
        self.query_handlers.insert(kind, handler);
    }

    /// Dispatches a command to every registered handler, sequentially
    /// in registration order, returning their results as an ordered
    /// list of the same length.
    ///
    /// A later handler can observe side effects of an earlier one; if
    /// a handler fails, the remaining handlers do not run.
    ///
    /// # Errors
    ///
    /// - `UnregisteredRequest` if no handlers are registered for the
    ///   command's exact tag
    pub async fn handle_command(
        &self,
        command: &Command,
    ) -> Result<Vec<CommandOutcome>, DomainError> {
        let handlers = self
            .command_handlers
            .get(&command.kind())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| unregistered("command", format!("{:?}", command.kind())))?;

        let mut outcomes = Vec::with_capacity(handlers.len());
        for handler in handlers {
            outcomes.push(handler.handle(command).await?);
        }
        Ok(outcomes)
    }

    /// Dispatches a query to its single registered handler and returns
    /// the result directly (not wrapped in a list).
    ///
    /// # Errors
    ///
    /// - `UnregisteredRequest` if no handler is registered for the
    ///   query's exact tag
    pub async fn handle_query(&self, query: &Query) -> Result<QueryOutcome, DomainError> {
        let handler = self
            .query_handlers
            .get(&query.kind())
            .ok_or_else(|| unregistered("query", format!("{:?}", query.kind())))?;

        handler.handle(query).await
    }

    /// Startup check: every command tag has at least one handler and
    /// every query tag has exactly one.
    pub fn validate(&self) -> Result<(), DomainError> {
        for kind in CommandKind::ALL {
            let registered = self
                .command_handlers
                .get(&kind)
                .map(|h| h.len())
                .unwrap_or(0);
            if registered == 0 {
                return Err(DomainError::new(
                    ErrorCode::InternalError,
                    format!("no handlers registered for command {:?}", kind),
                ));
            }
        }
        for kind in QueryKind::ALL {
            if !self.query_handlers.contains_key(&kind) {
                return Err(DomainError::new(
                    ErrorCode::InternalError,
                    format!("no handler registered for query {:?}", kind),
                ));
            }
        }
        Ok(())
    }
}

fn unregistered(category: &str, kind: String) -> DomainError {
    DomainError::new(
        ErrorCode::UnregisteredRequest,
        format!("no handler registered for {} {}", category, kind),
    )
    .with_detail("kind", kind)
}

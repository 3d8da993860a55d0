//! Application layer - request dispatch.
//!
//! Commands and queries enter through the [`Mediator`](mediator::Mediator),
//! which routes each to its handlers; handlers delegate to the domain
//! services. The [`AppContext`](context::AppContext) wires everything
//! once at startup.

pub mod context;
pub mod handlers;
pub mod mediator;
pub mod requests;

pub use context::AppContext;
pub use mediator::{CommandHandler, Mediator, QueryHandler};

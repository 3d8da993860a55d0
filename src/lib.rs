//! Backoffice - Administrative backend core for company site content.
//!
//! Implements the layer stack shared by every managed content entity:
//! command/query dispatch through a mediator, invariant-enforcing
//! domain services, and a uniform repository contract satisfied by a
//! PostgreSQL adapter and an in-memory test double.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

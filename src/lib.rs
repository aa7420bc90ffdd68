//! User account API with JWT authentication.
//!
//! The crate is split into four layers:
//! - `domain` holds entities, value objects, typed errors, and the ports
//!   (traits) the core depends on.
//! - `application` holds one use case per operation; each use case validates
//!   its command before touching any business logic.
//! - `infrastructure` provides the concrete collaborators: configuration,
//!   clock, Argon2 hashing, JWT signing, and the Postgres repository.
//! - `adapters` exposes the HTTP surface and maps domain errors to
//!   transport-facing responses.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod testing;

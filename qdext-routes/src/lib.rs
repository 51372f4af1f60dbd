//! Route namespace composer for the qd extension.
//!
//! Declares the complete static tree of client routes for every feature
//! module (board, betting, shop, pay, dress, vip, apply, center) under the
//! reserved `/qd` prefix, and the conflict-checked table the host router
//! builds at startup:
//! - [`NAMESPACE_NODES`] — the full node set, statically enumerable
//! - [`RouteTable`] — name → path table that fails fast on collisions
//! - [`compose`] — registers the whole namespace, once, at boot
//!
//! Nothing here runs at request time; collisions are configuration errors
//! surfaced before the application finishes initializing.

mod node;
mod table;

pub use node::{RouteNode, NAMESPACE_NODES, NAMESPACE_PREFIX};
pub use table::{compose, RouteTable};

use thiserror::Error;

/// Fatal route-table configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("duplicate route name: {0}")]
    DuplicateName(&'static str),

    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),

    #[error("route template has more than one dynamic segment: {0}")]
    InvalidTemplate(&'static str),
}

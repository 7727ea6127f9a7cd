//! Association resolution
//!
//! Read-only queries that walk the user → role → access graph:
//! the accesses granted to a role, the roles held by a user and the
//! distinct access names a user ends up with.

mod helpers;
mod resolver;

pub use resolver::AssociationResolver;

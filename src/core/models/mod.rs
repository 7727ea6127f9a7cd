//! Domain models
//!
//! Plain records exchanged between the store, the resolver and the HTTP
//! layer. Audit timestamps live only in the store.

pub mod access;
pub mod assignment;
pub mod role;
pub mod user;

pub use access::Access;
pub use assignment::{RoleAccess, RoleAccessKey, UserRole, UserRoleKey};
pub use role::Role;
pub use user::User;

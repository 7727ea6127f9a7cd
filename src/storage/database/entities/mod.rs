/// Access entity module
pub mod access;
/// Role entity module
pub mod role;
/// Access grant (`access_role`) entity module
pub mod role_access;
/// User entity module
pub mod user;
/// Role assignment entity module
pub mod user_role;

pub use access::Entity as Access;
pub use role::Entity as Role;
pub use role_access::Entity as RoleAccess;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;

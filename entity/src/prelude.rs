pub use super::guest::Entity as Guest;
pub use super::invitation::Entity as Invitation;
pub use super::table::Entity as Table;
pub use super::user::Entity as User;

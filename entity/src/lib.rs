//! SeaORM entity definitions for the weddingboard database schema.

pub mod guest;
pub mod invitation;
pub mod table;
pub mod user;

pub mod prelude;

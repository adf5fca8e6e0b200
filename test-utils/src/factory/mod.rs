//! Entity factories for seeding test data.
//!
//! Each factory inserts one entity with sensible defaults and a builder for
//! overriding individual fields. Names are suffixed with a process-wide
//! counter so repeated factory calls never collide with the unique indexes.

pub mod guest;
pub mod helpers;
pub mod invitation;
pub mod table;
pub mod user;

//! Request-processing middleware: authentication extraction.

pub mod auth;

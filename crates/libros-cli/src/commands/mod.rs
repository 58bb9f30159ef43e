//! Command implementations.

pub mod auth;
pub mod books;
pub mod config;

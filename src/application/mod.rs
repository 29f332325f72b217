//! Application services orchestrating domain logic.

pub mod services;

//! HTTP surface: DTOs, request handlers, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;

//! Infrastructure implementations: persistence.

pub mod persistence;

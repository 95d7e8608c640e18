//! Request handlers

pub mod health;
pub mod invoice;
pub mod policy;
pub mod reports;

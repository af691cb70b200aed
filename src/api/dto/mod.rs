//! Data Transfer Objects for API requests and responses.

pub mod company;
pub mod health;

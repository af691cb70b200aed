//! Core domain entities.

mod company;

pub use company::CompanyRecord;

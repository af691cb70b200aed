//! Domain layer: the canonical company record and the rules that produce it.
//!
//! Nothing here performs I/O. Backends and caches live in
//! [`crate::infrastructure`]; orchestration lives in [`crate::application`].
//!
//! - [`entities`] - [`entities::CompanyRecord`]
//! - [`format`] - Wire formats and their normalization
//! - [`activity`] - Closing date interpretation and timestamp rendering
//! - [`backend_registry`] - Country code routing table

pub mod activity;
pub mod backend_registry;
pub mod entities;
pub mod format;

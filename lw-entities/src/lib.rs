#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # lw-entities
//!
//! Reusable, agnostic domain entities for landsat-watch.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod image;
pub mod notification;
pub mod pass;
pub mod date;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

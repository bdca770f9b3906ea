#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # bookstore-entities
//!
//! Reusable, agnostic domain entities for the book store wish list.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod book;
pub mod user;
pub mod wish_list;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

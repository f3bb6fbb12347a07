//! Genealogy entity model over the record tree.
//!
//! # Responsibility
//! - Wrap person, family and event lines in typed, navigable handles.
//! - Turn pointer links into entities lazily.
//!
//! # Invariants
//! - Entities borrow the tree and never mutate it.
//! - Missing data is reported as `None`, never as an error.

pub mod event;
pub mod family;
pub mod individual;

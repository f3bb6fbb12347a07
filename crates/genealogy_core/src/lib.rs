//! Typed genealogy model over a parsed GEDCOM record tree.
//! Individuals, families and events are borrowed views; pointer links are
//! resolved lazily through a caller-supplied index.

pub mod element;
pub mod logging;
pub mod model;
pub mod tags;

pub use element::index::{PointerIndex, RecordIndex};
pub use element::node::{is_pointer, Element, ElementKind, EventKind, LinkRole};
pub use element::tree::RecordTree;
pub use logging::{
    default_log_level, init_logging, logging_status, LogLevel, LoggingConfig, LoggingError,
};
pub use model::event::Event;
pub use model::family::Family;
pub use model::individual::Individual;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

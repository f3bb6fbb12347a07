//! Family domain wrapper with lazy spouse resolution.
//!
//! # Responsibility
//! - Classify a `FAM` record's lines once: events, spouse and child links.
//! - Resolve spouse pointers on demand through a caller-supplied index.
//!
//! # Invariants
//! - Classification runs once, at construction; the record is never
//!   re-scanned.
//! - When a link line repeats, the last one wins.
//! - Successful resolutions are memoized and returned without touching the
//!   index again. Failed ones are not, so a later call with a more complete
//!   index can still succeed.
//! - An absent pointer never reaches the index.
//! - Caches live in `Cell`s: `Family` is `!Sync`. Wrap it in a lock to share
//!   it across threads.

use super::event::Event;
use super::individual::Individual;
use crate::element::index::PointerIndex;
use crate::element::node::{Element, ElementKind, LinkRole};
use log::debug;
use std::cell::Cell;

/// Borrowed view over one `FAM` record.
#[derive(Debug)]
pub struct Family<'t> {
    element: &'t Element,
    events: Vec<Event<'t>>,
    husband_pointer: Option<&'t str>,
    wife_pointer: Option<&'t str>,
    child_pointers: Vec<&'t str>,
    husband: Cell<Option<Individual<'t>>>,
    wife: Cell<Option<Individual<'t>>>,
}

impl<'t> Family<'t> {
    /// Wraps a family record and classifies its immediate children.
    pub fn new(element: &'t Element) -> Self {
        let mut events = Vec::new();
        let mut husband_pointer = None;
        let mut wife_pointer = None;
        let mut child_pointers = Vec::new();

        for child in element.children() {
            if child.is_event() {
                events.push(Event::new(child));
            }
            match child.kind() {
                ElementKind::Link(LinkRole::Husband) => husband_pointer = child.value(),
                ElementKind::Link(LinkRole::Wife) => wife_pointer = child.value(),
                ElementKind::Link(LinkRole::Child) => child_pointers.extend(child.value()),
                _ => {}
            }
        }

        Self {
            element,
            events,
            husband_pointer,
            wife_pointer,
            child_pointers,
            husband: Cell::new(None),
            wife: Cell::new(None),
        }
    }

    pub fn get_raw_element(&self) -> &'t Element {
        self.element
    }

    /// The family's own cross-reference, e.g. `@F1@`.
    pub fn pointer(&self) -> Option<&'t str> {
        self.element.pointer()
    }

    /// Event lines in source order.
    pub fn events(&self) -> &[Event<'t>] {
        &self.events
    }

    pub fn husband_pointer(&self) -> Option<&'t str> {
        self.husband_pointer
    }

    pub fn wife_pointer(&self) -> Option<&'t str> {
        self.wife_pointer
    }

    /// `CHIL` pointers in source order, empty lines skipped.
    pub fn child_pointers(&self) -> &[&'t str] {
        &self.child_pointers
    }

    /// Resolves the `HUSB` link, memoizing a success.
    pub fn get_husband<I>(&self, index: &I) -> Option<Individual<'t>>
    where
        I: PointerIndex<'t> + ?Sized,
    {
        resolve_spouse(&self.husband, self.husband_pointer, index, LinkRole::Husband)
    }

    /// Resolves the `WIFE` link, memoizing a success.
    pub fn get_wife<I>(&self, index: &I) -> Option<Individual<'t>>
    where
        I: PointerIndex<'t> + ?Sized,
    {
        resolve_spouse(&self.wife, self.wife_pointer, index, LinkRole::Wife)
    }

    /// Resolves every `CHIL` link, skipping dangling ones. Not cached.
    pub fn get_children<I>(&self, index: &I) -> Vec<Individual<'t>>
    where
        I: PointerIndex<'t> + ?Sized,
    {
        self.child_pointers
            .iter()
            .filter_map(|pointer| Individual::from_pointer(index, pointer))
            .collect()
    }
}

fn resolve_spouse<'t, I>(
    cache: &Cell<Option<Individual<'t>>>,
    pointer: Option<&'t str>,
    index: &I,
    role: LinkRole,
) -> Option<Individual<'t>>
where
    I: PointerIndex<'t> + ?Sized,
{
    if let Some(cached) = cache.get() {
        return Some(cached);
    }
    let pointer = pointer?;

    let resolved = Individual::from_pointer(index, pointer);
    match resolved {
        Some(individual) => {
            cache.set(Some(individual));
            debug!(
                "event=resolve_spouse module=model status=ok role={:?} pointer={}",
                role, pointer
            );
        }
        None => debug!(
            "event=resolve_spouse module=model status=unresolved role={:?} pointer={}",
            role, pointer
        ),
    }
    resolved
}

use genealogy_core::{Element, Family, Individual, PointerIndex, RecordIndex, RecordTree};
use std::cell::Cell;

/// Index wrapper that counts lookups.
struct SpyIndex<'t> {
    inner: RecordIndex<'t>,
    calls: Cell<usize>,
}

impl<'t> SpyIndex<'t> {
    fn new(tree: &'t RecordTree) -> Self {
        Self {
            inner: tree.index(),
            calls: Cell::new(0),
        }
    }
}

impl<'t> PointerIndex<'t> for SpyIndex<'t> {
    fn element_by_pointer(&self, pointer: &str) -> Option<&'t Element> {
        self.calls.set(self.calls.get() + 1);
        self.inner.element_by_pointer(pointer)
    }
}

fn family_record() -> Element {
    Element::new("FAM")
        .with_pointer("@F1@")
        .with_child(Element::new("HUSB").with_value("@I1@"))
        .with_child(Element::new("WIFE").with_value("@I2@"))
        .with_child(Element::new("BIRT").with_child(Element::new("DATE").with_value("1 JAN 1900")))
        .with_child(Element::new("MARR"))
}

fn people() -> Vec<Element> {
    vec![
        Element::new("INDI").with_pointer("@I1@"),
        Element::new("INDI").with_pointer("@I2@"),
        Element::new("INDI").with_pointer("@I3@"),
    ]
}

#[test]
fn construction_classifies_links_and_events() {
    let record = family_record();
    let family = Family::new(&record);

    assert_eq!(family.husband_pointer(), Some("@I1@"));
    assert_eq!(family.wife_pointer(), Some("@I2@"));
    assert_eq!(family.pointer(), Some("@F1@"));

    let events = family.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].get_raw_event().tag(), "BIRT");
    assert_eq!(events[1].get_raw_event().tag(), "MARR");
    assert!(events[0].has_date());
    assert_eq!(
        events[0].get_date().and_then(Element::value),
        Some("1 JAN 1900")
    );
    assert!(!events[1].has_date());
    assert!(events[1].get_date().is_none());
}

#[test]
fn last_husband_line_wins() {
    let record = Element::new("FAM")
        .with_child(Element::new("HUSB").with_value("@I1@"))
        .with_child(Element::new("HUSB").with_value("@I9@"));
    let family = Family::new(&record);

    assert_eq!(family.husband_pointer(), Some("@I9@"));
}

#[test]
fn absent_pointer_never_queries_index() {
    let tree = RecordTree::new(people());
    let index = SpyIndex::new(&tree);
    let record = Element::new("FAM").with_child(Element::new("CHIL").with_value("@I3@"));
    let family = Family::new(&record);

    assert!(family.get_husband(&index).is_none());
    assert!(family.get_wife(&index).is_none());
    assert_eq!(index.calls.get(), 0);
}

#[test]
fn resolved_spouse_is_memoized() {
    let mut records = people();
    records.push(family_record());
    let tree = RecordTree::new(records);
    let index = SpyIndex::new(&tree);
    let family = tree.families().next().unwrap();

    let first = family.get_husband(&index).unwrap();
    let second = family.get_husband(&index).unwrap();

    assert_eq!(first, second);
    assert!(std::ptr::eq(
        first.get_raw_element(),
        second.get_raw_element()
    ));
    assert!(std::ptr::eq(first.get_raw_element(), &tree.records()[0]));
    assert_eq!(index.calls.get(), 1);
}

#[test]
fn cached_spouse_ignores_later_index() {
    let mut records = people();
    records.push(family_record());
    let tree = RecordTree::new(records);
    let family = tree.families().next().unwrap();

    let wife = family.get_wife(&tree.index()).unwrap();

    let empty = RecordIndex::default();
    assert_eq!(family.get_wife(&empty), Some(wife));
}

#[test]
fn failed_resolution_is_retried_with_later_index() {
    let record = family_record();
    let family = Family::new(&record);

    let partial = RecordIndex::default();
    assert!(family.get_husband(&partial).is_none());

    let complete_records = people();
    let complete = RecordIndex::build(&complete_records);
    let husband = family.get_husband(&complete).unwrap();
    assert_eq!(husband.pointer(), Some("@I1@"));
}

#[test]
fn spouse_pointing_at_family_record_is_unresolved() {
    let tree = RecordTree::new([
        Element::new("INDI").with_pointer("@I1@"),
        Element::new("FAM")
            .with_pointer("@FI9@")
            .with_child(Element::new("HUSB").with_value("@FI9@")),
    ]);
    let index = tree.index();
    let family = tree.families().next().unwrap();

    assert!(family.get_husband(&index).is_none());
}

#[test]
fn distinct_families_yield_equal_individuals() {
    let mut records = people();
    records.push(family_record());
    records.push(
        Element::new("FAM")
            .with_pointer("@F2@")
            .with_child(Element::new("HUSB").with_value("@I1@")),
    );
    let tree = RecordTree::new(records);
    let index = tree.index();
    let families: Vec<Family<'_>> = tree.families().collect();

    let from_first = families[0].get_husband(&index).unwrap();
    let from_second = families[1].get_husband(&index).unwrap();
    assert_eq!(from_first, from_second);
}

#[test]
fn children_resolve_in_order_and_skip_dangling() {
    let mut records = people();
    records.push(
        Element::new("FAM")
            .with_pointer("@F1@")
            .with_child(Element::new("CHIL").with_value("@I3@"))
            .with_child(Element::new("CHIL").with_value("@I404@"))
            .with_child(Element::new("CHIL").with_value("@I2@")),
    );
    let tree = RecordTree::new(records);
    let index = tree.index();
    let family = tree.families().next().unwrap();

    let children: Vec<_> = family
        .get_children(&index)
        .iter()
        .filter_map(Individual::pointer)
        .collect();
    assert_eq!(children, vec!["@I3@", "@I2@"]);
}

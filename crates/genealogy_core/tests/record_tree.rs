use genealogy_core::{ElementKind, EventKind, LinkRole, RecordTree};

fn fixture() -> serde_json::Value {
    serde_json::json!([
        { "tag": "HEAD" },
        {
            "tag": "INDI",
            "pointer": "@I1@",
            "children": [
                { "tag": "NAME", "value": "John /Doe/" },
                { "tag": "BIRT", "children": [{ "tag": "DATE", "value": "2 FEB 1870" }] }
            ]
        },
        { "tag": "INDI", "pointer": "@I2@" },
        {
            "tag": "FAM",
            "pointer": "@F1@",
            "children": [
                { "tag": "HUSB", "value": "@I1@" },
                { "tag": "WIFE", "value": "@I2@" },
                { "tag": "MARR", "children": [{ "tag": "DATE", "value": "1895" }] }
            ]
        },
        { "tag": "TRLR", "value": "" }
    ])
}

#[test]
fn json_fixture_builds_classified_tree() {
    let tree: RecordTree = serde_json::from_value(fixture()).unwrap();

    assert_eq!(tree.records().len(), 5);
    assert_eq!(tree.records()[1].kind(), ElementKind::Individual);
    assert_eq!(tree.records()[3].kind(), ElementKind::Family);
    assert_eq!(
        tree.records()[3].children()[0].kind(),
        ElementKind::Link(LinkRole::Husband)
    );
    assert!(tree.records()[3].children()[0].is_pointer_reference());
    assert_eq!(tree.records()[4].value(), None);
}

#[test]
fn navigation_from_family_to_spouse_event_dates() {
    let tree: RecordTree = serde_json::from_value(fixture()).unwrap();
    let index = tree.index();
    let family = tree.families().next().unwrap();

    let marriage = family.events()[0];
    assert_eq!(marriage.kind(), Some(EventKind::Marriage));
    assert_eq!(marriage.get_date().and_then(|date| date.value()), Some("1895"));

    let husband = family.get_husband(&index).unwrap();
    let births: Vec<_> = husband
        .events()
        .into_iter()
        .filter_map(|event| event.get_date())
        .filter_map(|date| date.value())
        .collect();
    assert_eq!(births, vec!["2 FEB 1870"]);

    let wife = family.get_wife(&index).unwrap();
    assert!(wife.events().is_empty());
}

#[test]
fn serialization_omits_kind_and_empty_fields() {
    let tree: RecordTree = serde_json::from_value(fixture()).unwrap();
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json[0], serde_json::json!({ "tag": "HEAD" }));
    assert!(json[1].get("kind").is_none());
    assert_eq!(json[3]["children"][0]["value"], "@I1@");
    assert_eq!(json[4], serde_json::json!({ "tag": "TRLR" }));
}

#[test]
fn event_kind_uses_snake_case_names() {
    let json = serde_json::to_value(EventKind::MarriageLicense).unwrap();
    assert_eq!(json, "marriage_license");
}

use form_autofill::dom::snapshot::parse_snapshot;
use form_autofill::error::AutofillError;

// ============================================================================
// Snapshot ingestion
// ============================================================================

#[test]
fn minimal_snapshot_builds_a_document() {
    let doc = parse_snapshot(r#"{"url": "https://example.com/jobs", "nodes": []}"#).unwrap();

    assert_eq!(doc.url(), "https://example.com/jobs");
    assert_eq!(doc.title(), "", "Title defaults to empty");
    assert!(doc.descendants(doc.root()).is_empty());
}

#[test]
fn nested_nodes_attach_under_the_root() {
    let json = r#"{
        "url": "https://example.com",
        "title": "Fixture",
        "nodes": [
            {
                "tag": "form",
                "attrs": {"id": "apply"},
                "children": [
                    {"tag": "input", "attrs": {"name": "email", "type": "email"}},
                    {"tag": "SELECT", "options": [{"value": "us", "text": "United States"}]}
                ]
            }
        ]
    }"#;
    let doc = parse_snapshot(json).unwrap();

    let form = doc.find_by_id("apply").unwrap();
    assert_eq!(doc.parent(form), Some(doc.root()));

    let children = doc.children(form);
    assert_eq!(children.len(), 2);

    let input = doc.get(children[0]).unwrap();
    assert_eq!(input.tag, "input");
    assert_eq!(input.attr("type"), Some("email"));

    let select = doc.get(children[1]).unwrap();
    assert_eq!(select.tag, "select", "Tags normalize to lowercase");
    assert_eq!(select.options.len(), 1);
    assert_eq!(select.options[0].value, "us");
    assert_eq!(select.options[0].text, "United States");
}

#[test]
fn attribute_names_are_lowercased_values_kept() {
    let json = r#"{
        "url": "https://example.com",
        "nodes": [{"tag": "div", "attrs": {"DATA-Automation-ID": "applicationPage"}}]
    }"#;
    let doc = parse_snapshot(json).unwrap();
    let node = doc.get(doc.descendants(doc.root())[0]).unwrap();

    assert_eq!(node.attr("data-automation-id"), Some("applicationPage"));
    assert_eq!(node.attr("DATA-Automation-ID"), None, "Lookup is lowercase");
}

#[test]
fn visibility_defaults_to_true() {
    let json = r#"{
        "url": "https://example.com",
        "nodes": [
            {"tag": "input"},
            {"tag": "input", "visible": false}
        ]
    }"#;
    let doc = parse_snapshot(json).unwrap();
    let nodes = doc.descendants(doc.root());

    assert!(doc.get(nodes[0]).unwrap().visible, "Absent means visible");
    assert!(!doc.get(nodes[1]).unwrap().visible);
}

#[test]
fn control_state_fields_carry_over() {
    let json = r#"{
        "url": "https://example.com",
        "nodes": [
            {"tag": "input", "value": "prefilled", "checked": true, "text": "x"}
        ]
    }"#;
    let doc = parse_snapshot(json).unwrap();
    let node = doc.get(doc.descendants(doc.root())[0]).unwrap();

    assert_eq!(node.value, "prefilled");
    assert!(node.checked);
    assert_eq!(node.text, "x");
}

#[test]
fn malformed_json_is_a_snapshot_parse_error() {
    let err = parse_snapshot("{not json").unwrap_err();
    assert!(
        matches!(err, AutofillError::SnapshotParse { .. }),
        "got {:?}",
        err
    );
    assert!(
        err.to_string().starts_with("snapshot parse error"),
        "Display carries the context: {}",
        err
    );
}

#[test]
fn missing_url_is_rejected() {
    assert!(parse_snapshot(r#"{"nodes": []}"#).is_err(), "url is required");
}

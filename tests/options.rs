//! Tests for the option tree model.

use purlin::options::{
    OptionNode, OptionValue, SelectOption, checked_items, checked_text_summary, first_leaf,
    flatten, has_group, menu_entries,
};
use purlin::prelude::MenuEntry;

fn nested_tree() -> Vec<OptionNode> {
    vec![
        OptionNode::item("a", "A"),
        OptionNode::group(
            "G1",
            vec![
                OptionNode::item("b", "B"),
                OptionNode::group("G2", vec![OptionNode::item("c", "C")]),
            ],
        ),
        OptionNode::item("d", "D"),
    ]
}

#[test]
fn test_flatten_preserves_document_order() {
    let tree = nested_tree();
    let flat = flatten(&tree);
    let values: Vec<_> = flat.iter().map(|option| option.value.clone()).collect();
    assert_eq!(
        values,
        vec![
            OptionValue::from("a"),
            OptionValue::from("b"),
            OptionValue::from("c"),
            OptionValue::from("d"),
        ]
    );
}

#[test]
fn test_flatten_count_matches_leaf_count() {
    let tree = nested_tree();
    assert_eq!(flatten(&tree).len(), 4);
}

#[test]
fn test_flatten_is_deterministic() {
    let tree = nested_tree();
    let first: Vec<_> = flatten(&tree).iter().map(|o| o.value.clone()).collect();
    let second: Vec<_> = flatten(&tree).iter().map(|o| o.value.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_flatten_single_group() {
    // A tree of one group with one leaf flattens to that single leaf.
    let tree = vec![OptionNode::group("G", vec![OptionNode::item("x", "X")])];
    let flat = flatten(&tree);
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].value, OptionValue::from("x"));
    assert!(has_group(&tree));
}

#[test]
fn test_has_group_false_for_leaves_only() {
    let tree = vec![OptionNode::item("a", "A"), OptionNode::item("b", "B")];
    assert!(!has_group(&tree));
}

#[test]
fn test_empty_group_contributes_nothing() {
    let tree = vec![
        OptionNode::group("empty", vec![]),
        OptionNode::item("a", "A"),
    ];
    let flat = flatten(&tree);
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].value, OptionValue::from("a"));
}

#[test]
fn test_first_leaf_descends_into_groups() {
    let tree = vec![OptionNode::group(
        "outer",
        vec![OptionNode::group("inner", vec![OptionNode::item("x", "X")])],
    )];
    assert_eq!(first_leaf(&tree).unwrap().value, OptionValue::from("x"));
}

#[test]
fn test_first_leaf_empty_tree() {
    assert!(first_leaf(&[]).is_none());
}

#[test]
fn test_checked_items_in_document_order() {
    let tree = nested_tree();
    let value = vec![OptionValue::from("d"), OptionValue::from("b")];
    let checked = checked_items(&tree, &value);
    let values: Vec<_> = checked.iter().map(|o| o.value.clone()).collect();
    // Document order, not selection order.
    assert_eq!(values, vec![OptionValue::from("b"), OptionValue::from("d")]);
}

#[test]
fn test_checked_text_summary_prefers_checked_text() {
    let tree = vec![
        OptionNode::Item(SelectOption::new("a", "Apple").checked_text("A.")),
        OptionNode::item("b", "Banana"),
    ];
    let value = vec![OptionValue::from("a"), OptionValue::from("b")];
    assert_eq!(checked_text_summary(&tree, &value), "A., Banana");
}

#[test]
fn test_menu_entries_merges_icon_and_description() {
    let tree = vec![
        OptionNode::Item(
            SelectOption::new("a", "Apple")
                .description("A fine apple")
                .icon("fruit"),
        ),
        OptionNode::group("G", vec![OptionNode::item("b", "Banana")]),
    ];
    let entries = menu_entries(&tree);
    assert_eq!(entries.len(), 2);
    match &entries[0] {
        MenuEntry::Item(item) => {
            assert_eq!(item.value, OptionValue::from("a"));
            assert_eq!(item.content.icon.as_deref(), Some("fruit"));
            // Description overrides text as the display body.
            assert_eq!(item.content.body, "A fine apple");
        }
        other => panic!("expected item, got {other:?}"),
    }
    match &entries[1] {
        MenuEntry::Group(group) => {
            assert_eq!(group.title, "G");
            assert_eq!(group.entries.len(), 1);
            match &group.entries[0] {
                MenuEntry::Item(item) => assert_eq!(item.content.body, "Banana"),
                other => panic!("expected item, got {other:?}"),
            }
        }
        other => panic!("expected group, got {other:?}"),
    }
}

#[test]
fn test_option_value_display() {
    assert_eq!(OptionValue::from("a").to_string(), "a");
    assert_eq!(OptionValue::from(7i64).to_string(), "7");
}

#[test]
fn test_native_and_checked_labels_fall_back_to_text() {
    let plain = SelectOption::new("a", "Apple");
    assert_eq!(plain.native_label(), "Apple");
    assert_eq!(plain.checked_label(), "Apple");
    let rich = SelectOption::new("b", "Banana")
        .native_text("banana (plain)")
        .checked_text("B!");
    assert_eq!(rich.native_label(), "banana (plain)");
    assert_eq!(rich.checked_label(), "B!");
}

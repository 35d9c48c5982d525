//! Tests for the native list-control path: render model, change
//! reduction and the mobile adapters.

use purlin::options::{OptionNode, OptionValue, flatten};
use purlin::select::{
    MobileMenuMode, NativeEntry, Select, SelectProps, SelectRequest, SelectionMode,
    native_render_model, reduce_native_change,
};

fn flat_options() -> Vec<OptionNode> {
    vec![
        OptionNode::item("a", "A"),
        OptionNode::item("b", "B"),
        OptionNode::item("c", "C"),
    ]
}

fn grouped_options() -> Vec<OptionNode> {
    vec![
        OptionNode::item("a", "A"),
        OptionNode::group(
            "G",
            vec![OptionNode::item("b", "B"), OptionNode::item("c", "C")],
        ),
    ]
}

fn values(raw: &[&str]) -> Vec<OptionValue> {
    raw.iter().map(|&v| OptionValue::from(v)).collect()
}

#[test]
fn test_placeholder_is_group_header_in_check_mode() {
    let options = flat_options();
    let model = native_render_model(&options, SelectionMode::Check, &[], "pick");
    match &model[0] {
        NativeEntry::Placeholder { label, as_group } => {
            assert_eq!(*label, "pick");
            assert!(*as_group);
        }
        other => panic!("expected placeholder first, got {other:?}"),
    }
}

#[test]
fn test_placeholder_is_option_for_ungrouped_radio() {
    let options = flat_options();
    let model = native_render_model(&options, SelectionMode::Radio, &[], "pick");
    assert!(matches!(
        model[0],
        NativeEntry::Placeholder {
            as_group: false,
            ..
        }
    ));
}

#[test]
fn test_placeholder_is_group_header_for_grouped_radio() {
    let options = grouped_options();
    let model = native_render_model(&options, SelectionMode::Radio, &[], "pick");
    assert!(matches!(
        model[0],
        NativeEntry::Placeholder { as_group: true, .. }
    ));
}

#[test]
fn test_render_model_order_matches_flatten() {
    let options = grouped_options();
    let model = native_render_model(&options, SelectionMode::Check, &values(&["b"]), "");
    let mut rendered = Vec::new();
    for entry in &model {
        match entry {
            NativeEntry::Placeholder { .. } => {}
            NativeEntry::Option(option) => rendered.push(option.value.clone()),
            NativeEntry::Group { options, .. } => {
                rendered.extend(options.iter().map(|o| o.value.clone()));
            }
        }
    }
    let flat: Vec<_> = flatten(&options)
        .into_iter()
        .map(|o| o.value.clone())
        .collect();
    assert_eq!(rendered, flat);
}

#[test]
fn test_render_model_marks_selected() {
    let options = flat_options();
    let model = native_render_model(
        &options,
        SelectionMode::Check,
        &values(&["a", "c"]),
        "",
    );
    let selected: Vec<bool> = model
        .iter()
        .filter_map(|entry| match entry {
            NativeEntry::Option(option) => Some(option.selected),
            _ => None,
        })
        .collect();
    assert_eq!(selected, vec![true, false, true]);
}

#[test]
fn test_reduce_check_mode_has_no_index_shift() {
    // The check-mode placeholder is a group header, so option indices start
    // at 0.
    let value = reduce_native_change(&flat_options(), SelectionMode::Check, &[0, 2]);
    assert_eq!(value, values(&["a", "c"]));
}

#[test]
fn test_reduce_ungrouped_radio_shifts_past_placeholder() {
    let value = reduce_native_change(&flat_options(), SelectionMode::Radio, &[1]);
    assert_eq!(value, values(&["a"]));
}

#[test]
fn test_reduce_placeholder_index_is_dropped() {
    let value = reduce_native_change(&flat_options(), SelectionMode::Radio, &[0]);
    assert!(value.is_empty());
}

#[test]
fn test_reduce_grouped_radio_has_no_index_shift() {
    let value = reduce_native_change(&grouped_options(), SelectionMode::Radio, &[2]);
    assert_eq!(value, values(&["c"]));
}

#[test]
fn test_reduce_out_of_range_index_is_ignored() {
    let value = reduce_native_change(&flat_options(), SelectionMode::Check, &[1, 99]);
    assert_eq!(value, values(&["b"]));
}

#[test]
fn test_reduce_matches_custom_path_commit() {
    // Both rendering strategies must land the same logical selection in the
    // store.
    let options = flat_options();
    let native = Select::new(SelectProps {
        mode: SelectionMode::Check,
        options: options.clone(),
        ..SelectProps::default()
    });
    let custom = Select::new(SelectProps {
        mode: SelectionMode::Check,
        options,
        ..SelectProps::default()
    });

    native.handle_native_change(&[0, 1]);
    custom.handle_item_check(values(&["a", "b"]));
    assert_eq!(native.value(), custom.value());
}

#[test]
fn test_native_change_single_mode_blurs() {
    let select = Select::new(SelectProps {
        mode: SelectionMode::Radio,
        options: flat_options(),
        ..SelectProps::default()
    });
    select.take_requests();
    select.handle_native_change(&[1]);
    assert_eq!(select.value(), values(&["a"]));
    assert!(select.take_requests().contains(&SelectRequest::Blur));
}

#[test]
fn test_native_change_check_mode_keeps_focus() {
    let select = Select::new(SelectProps {
        mode: SelectionMode::Check,
        options: flat_options(),
        ..SelectProps::default()
    });
    select.take_requests();
    select.handle_native_change(&[0]);
    assert!(!select.take_requests().contains(&SelectRequest::Blur));
}

#[test]
fn test_native_focus_blur_toggle_affordance() {
    let select = Select::new(SelectProps {
        mobile_menu_mode: MobileMenuMode::Native,
        options: flat_options(),
        ..SelectProps::default()
    });
    select.handle_viewport_change(true);
    assert!(select.native_control_active());

    select.handle_native_focus();
    assert!(select.opened());
    select.handle_native_blur();
    assert!(!select.opened());
}

#[test]
fn test_native_focus_noop_when_disabled() {
    let select = Select::new(SelectProps {
        disabled: true,
        options: flat_options(),
        ..SelectProps::default()
    });
    select.handle_native_focus();
    assert!(!select.opened());
}

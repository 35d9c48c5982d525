//! Tests for popup width sync against the anchor.

use purlin::options::{OptionNode, OptionValue};
use purlin::select::{Select, SelectProps, SelectRequest};

fn options() -> Vec<OptionNode> {
    vec![
        OptionNode::item("short", "AB"),
        OptionNode::item("long", "a considerably longer label"),
    ]
}

#[test]
fn test_mount_estimates_bounds_from_button_content() {
    let select = Select::new(SelectProps {
        placeholder: Some("Pick something".to_string()),
        options: options(),
        ..SelectProps::default()
    });
    let bounds = select.popup_bounds();
    // Label width plus the tick reservation.
    assert_eq!(bounds.min_width, "Pick something".len() as u16 + 2);
    assert_eq!(bounds.max_width, None);
}

#[test]
fn test_anchor_width_floor() {
    let select = Select::new(SelectProps {
        placeholder: Some("ab".to_string()),
        options: options(),
        ..SelectProps::default()
    });
    assert_eq!(select.popup_bounds().min_width, 10);
}

#[test]
fn test_anchor_resize_updates_min_width() {
    let select = Select::new(SelectProps {
        options: options(),
        ..SelectProps::default()
    });
    select.handle_anchor_resize(42);
    let bounds = select.popup_bounds();
    assert_eq!(bounds.min_width, 42);
    assert_eq!(bounds.max_width, None);
}

#[test]
fn test_equal_popup_width_pins_max() {
    let select = Select::new(SelectProps {
        equal_popup_width: true,
        options: options(),
        ..SelectProps::default()
    });
    select.handle_anchor_resize(42);
    let bounds = select.popup_bounds();
    assert_eq!(bounds.min_width, 42);
    assert_eq!(bounds.max_width, Some(42));
}

#[test]
fn test_selection_change_then_props_resyncs_width() {
    // Committing a longer label and pushing the same props back widens the
    // intrinsic estimate.
    let select = Select::new(SelectProps {
        options: options(),
        ..SelectProps::default()
    });
    let narrow = select.popup_bounds().min_width;

    select.set_selection(vec![OptionValue::from("long")]);
    select.set_props(SelectProps {
        options: options(),
        ..SelectProps::default()
    });
    assert!(select.popup_bounds().min_width > narrow);
}

#[test]
fn test_mount_requests_popup_target_sync() {
    let select = Select::new(SelectProps {
        options: options(),
        ..SelectProps::default()
    });
    assert!(
        select
            .take_requests()
            .contains(&SelectRequest::SyncPopupTarget)
    );
}

//! Select Widget Demo
//!
//! Drives the headless Select through a scripted interaction and prints the
//! state transitions:
//! - Opening with Enter and committing with the keyboard
//! - Check mode staying open across commits
//! - The escape-then-blur close
//! - The requests a host would have to execute at each step
//!
//! Debug logging goes to `select_demo.log`.

use std::fs::File;

use log::LevelFilter;
use purlin::prelude::*;
use simplelog::{Config, WriteLogger};

fn print_state(label: &str, select: &Select) {
    println!("-- {label}");
    println!("   opened:   {}", select.opened());
    println!("   value:    {}", select.form_value());
    println!("   button:   {:?}", select.button_content());
    let requests = select.take_requests();
    if !requests.is_empty() {
        println!("   requests: {requests:?}");
    }
}

fn main() {
    if let Ok(file) = File::create("select_demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    let select = Select::new(SelectProps {
        mode: SelectionMode::Check,
        placeholder: Some("Choose a fruit".to_string()),
        options: vec![
            OptionNode::item("apple", "Apple"),
            OptionNode::item("banana", "Banana"),
            OptionNode::group(
                "Berries",
                vec![
                    OptionNode::item("cherry", "Cherry"),
                    OptionNode::item("elderberry", "Elderberry"),
                ],
            ),
        ],
        ..SelectProps::default()
    });
    select.on_change(|value| println!("   on_change -> {value:?}"));
    print_state("mounted", &select);

    select.handle_button_key(&KeyCombo::key(Key::Enter));
    print_state("Enter on the anchor", &select);

    select.handle_item_check(vec![OptionValue::from("apple")]);
    print_state("checked apple", &select);

    select.handle_item_check(vec![OptionValue::from("apple"), OptionValue::from("cherry")]);
    print_state("checked cherry too", &select);

    select.handle_menu_key(&KeyCombo::key(Key::Escape), None, None);
    print_state("Escape in the menu", &select);

    select.handle_menu_blur(Some(FocusTarget::Button));
    print_state("menu blur back to the anchor", &select);

    select.teardown();
}

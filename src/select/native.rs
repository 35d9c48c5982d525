//! Native list-control path.
//!
//! On small viewports (native mobile menu mode) the widget renders a
//! platform list control instead of the anchor+popup pair. Both paths write
//! to the same selection store; this module holds the adapters and the pure
//! index reconciliation they share with tests.
//!
//! The control's first entry is a synthetic disabled placeholder working
//! around a native multi-select quirk on touch platforms (selecting,
//! deselecting and re-selecting entries misbehaves without it). In check
//! mode, or whenever the tree has groups, the placeholder is an empty
//! disabled group header which contributes no option index; otherwise it is
//! a real disabled option occupying index 0 and must be filtered back out
//! of change events.

use log::trace;

use crate::options::{OptionNode, OptionValue, flatten, has_group};

use super::Select;
use super::config::SelectionMode;

/// One flattened option of the native control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeOption<'a> {
    /// Option value committed when selected
    pub value: &'a OptionValue,
    /// Plain-text label (`native_text`, falling back to `text`)
    pub label: &'a str,
    /// Whether the option is currently selected
    pub selected: bool,
}

/// One rendered entry of the native control, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeEntry<'a> {
    /// Synthetic disabled placeholder; `as_group` entries hold no option
    /// index, plain ones occupy index 0
    Placeholder {
        /// Caption shown for the placeholder
        label: &'a str,
        /// Rendered as an empty disabled group header instead of an option
        as_group: bool,
    },
    /// Group header followed by its member options
    Group {
        /// Group heading
        title: &'a str,
        /// Options belonging to the group, already flattened
        options: Vec<NativeOption<'a>>,
    },
    /// A top-level option
    Option(NativeOption<'a>),
}

/// Whether the placeholder occupies a real option index.
pub fn has_placeholder_option(mode: SelectionMode, grouped: bool) -> bool {
    mode != SelectionMode::Check && !grouped
}

/// Render model for the native control.
///
/// Option order (placeholder aside) must match [`flatten`] exactly: the
/// change reduction maps control indices back through the flattened order
/// positionally.
pub fn native_render_model<'a>(
    options: &'a [OptionNode],
    mode: SelectionMode,
    value: &[OptionValue],
    placeholder: &'a str,
) -> Vec<NativeEntry<'a>> {
    let grouped = has_group(options);
    let mut entries = Vec::with_capacity(options.len() + 1);
    entries.push(NativeEntry::Placeholder {
        label: placeholder,
        as_group: !has_placeholder_option(mode, grouped),
    });
    push_native_entries(options, value, &mut entries);
    entries
}

fn push_native_entries<'a>(
    nodes: &'a [OptionNode],
    value: &[OptionValue],
    out: &mut Vec<NativeEntry<'a>>,
) {
    for node in nodes {
        match node {
            OptionNode::Item(option) => out.push(NativeEntry::Option(NativeOption {
                value: &option.value,
                label: option.native_label(),
                selected: value.contains(&option.value),
            })),
            OptionNode::Group(group) => out.push(NativeEntry::Group {
                title: &group.title,
                options: flatten(&group.content)
                    .into_iter()
                    .map(|option| NativeOption {
                        value: &option.value,
                        label: option.native_label(),
                        selected: value.contains(&option.value),
                    })
                    .collect(),
            }),
        }
    }
}

/// Reduce a native change event to a value list.
///
/// `selected_indices` are the control's selected option indices, counting
/// every rendered option including the synthetic placeholder when it
/// occupies one. Pure, and shared by both rendering strategies' tests: for
/// the same logical selection it must produce exactly the value list the
/// custom-panel path commits.
pub fn reduce_native_change(
    options: &[OptionNode],
    mode: SelectionMode,
    selected_indices: &[usize],
) -> Vec<OptionValue> {
    let flat = flatten(options);
    let skip_first = has_placeholder_option(mode, has_group(options));
    let offset = usize::from(skip_first);
    selected_indices
        .iter()
        .filter(|&&index| !(skip_first && index == 0))
        .filter_map(|&index| flat.get(index - offset).map(|option| option.value.clone()))
        .collect()
}

impl Select {
    /// Native control change event.
    ///
    /// Reduces the selected indices through the flattened order, commits
    /// the result, and for single-select modes immediately blurs to close
    /// the visual affordance.
    pub fn handle_native_change(&self, selected_indices: &[usize]) {
        let props = self.props();
        let value = reduce_native_change(&props.options, props.mode, selected_indices);
        trace!("{}: native change -> {:?}", self.id(), value);
        if props.mode.is_single() {
            self.blur();
        }
        self.set_internal_value(value.clone());
        self.emit_change(&value);
    }

    /// Native control received focus: toggle the open flag for visual
    /// affordance only (no panel exists on this path).
    pub fn handle_native_focus(&self) {
        self.set_current_focus(Some(crate::focus::FocusTarget::Native));
        if !self.disabled() {
            self.toggle_opened();
        }
        let event = crate::focus::FocusEvent::new(crate::focus::FocusTarget::Native, self.value());
        self.emit_focus_event(|handlers| handlers.on_focus.clone(), &event);
    }

    /// Native control lost focus: inverse affordance toggle.
    pub fn handle_native_blur(&self) {
        if self.current_focus() == Some(crate::focus::FocusTarget::Native) {
            self.set_current_focus(None);
        }
        if !self.disabled() {
            self.toggle_opened();
        }
        let event = crate::focus::FocusEvent::new(crate::focus::FocusTarget::Native, self.value());
        self.emit_focus_event(|handlers| handlers.on_blur.clone(), &event);
    }

    /// Native control click: forward only.
    pub fn handle_native_click(&self) {
        self.emit_plain(|handlers| handlers.on_click.clone());
    }
}

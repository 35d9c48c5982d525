//! Focus targets and focus event payloads.
//!
//! A Select routes physical focus between three places: the always-visible
//! anchor button, the floating menu, and (on small viewports) the native
//! list control. Blur handlers receive where focus went next, when the host
//! already knows it.

use crate::options::OptionValue;

/// A focusable part of a widget, or the world outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The anchor button
    Button,
    /// The floating menu inside the popup
    Menu,
    /// The native fallback control
    Native,
    /// Anything that is not part of the widget
    Outside,
}

/// Payload delivered to focus/blur handlers.
///
/// The current value snapshot is attached so hosts can inspect it without
/// reaching back into the widget mid-handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusEvent {
    /// Which part of the widget the event concerns
    pub target: FocusTarget,
    /// Value snapshot at the time of the event
    pub value: Vec<OptionValue>,
}

impl FocusEvent {
    /// Create a new focus event.
    pub fn new(target: FocusTarget, value: Vec<OptionValue>) -> Self {
        Self { target, value }
    }
}

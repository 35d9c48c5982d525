//! Popup geometry sync.
//!
//! The popup's minimum width always tracks the anchor's rendered width; the
//! equal-width option pins the maximum to the same value so the panel
//! matches the anchor exactly instead of only floor-matching it. The sync
//! is synchronous relative to the render that triggered it: anchor width
//! changes come from the same render pass (label or icon change) that must
//! be reflected before the panel paints, so there is nothing to debounce.

use crate::utils::text::display_width;

use super::Select;

/// Space reserved on the anchor for the tick icon.
const TICK_WIDTH: u16 = 2;

/// Narrowest anchor the widget renders.
const MIN_ANCHOR_WIDTH: u16 = 10;

/// Popup width constraints derived from the anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopupBounds {
    /// Popup is never narrower than the anchor
    pub min_width: u16,
    /// Pinned to the anchor width when equal-popup-width is configured
    pub max_width: Option<u16>,
}

/// Estimate of an anchor's rendered width from its label text.
pub fn anchor_width_for(label: &str) -> u16 {
    (display_width(label) + TICK_WIDTH).max(MIN_ANCHOR_WIDTH)
}

impl Select {
    /// Anchor width estimate from the current button content. Used at mount
    /// and on prop updates, before the host has measured anything.
    pub fn anchor_intrinsic_width(&self) -> u16 {
        anchor_width_for(&self.button_content())
    }

    /// Anchor resize notification from the host's resize sensor.
    pub fn handle_anchor_resize(&self, width: u16) {
        self.sync_popup_bounds(width);
    }

    /// Recompute popup bounds from an anchor width.
    pub(super) fn sync_popup_bounds(&self, anchor_width: u16) {
        let equal = self
            .props()
            .equal_popup_width;
        self.set_popup_bounds(PopupBounds {
            min_width: anchor_width,
            max_width: equal.then_some(anchor_width),
        });
    }
}

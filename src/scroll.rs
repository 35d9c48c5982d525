//! Scroll requests and highlighted-item scroll math.
//!
//! The widget never scrolls anything itself; it emits [`ScrollRequest`]
//! values for the host's smooth-scroll utility to execute.

use std::time::Duration;

/// Gap left above a widget when scrolling the page to it.
pub const SCROLL_TO_CORRECTION: i32 = 16;

/// Duration for scrolling a highlighted item into view.
pub const SCROLL_TO_NORMAL_DURATION: Duration = Duration::from_millis(250);

/// What should be scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollContainer {
    /// The page/root scroll container
    Page,
    /// The popup's inner scroll container
    PopupInner,
}

/// A scroll the host should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Container to scroll
    pub container: ScrollContainer,
    /// Target vertical offset within the container
    pub target_y: i32,
    /// Animation duration; `None` means the host default
    pub duration: Option<Duration>,
}

/// Measured geometry of a menu item, relative to the popup's inner
/// scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemGeometry {
    /// Offset of the item's top edge
    pub top: i32,
    /// Rendered height of the item
    pub height: i32,
}

/// Measured state of the popup's inner scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupViewport {
    /// Current scroll offset
    pub scroll_top: i32,
    /// Visible height
    pub height: i32,
}

/// Target offset that brings a highlighted item into the popup viewport.
///
/// Returns `None` when the item is already fully visible. An item below the
/// viewport scrolls until its top lands at the viewport top; an item above
/// scrolls the minimum needed to expose it at the bottom.
pub fn highlight_scroll_target(item: ItemGeometry, viewport: PopupViewport) -> Option<i32> {
    let correction = item.height;
    if item.top + correction > viewport.scroll_top + viewport.height {
        Some(item.top)
    } else if item.top < viewport.scroll_top {
        Some(item.top - viewport.height + correction)
    } else {
        None
    }
}

//! purlin - headless form-input widgets.
//!
//! The core is [`select::Select`]: a dropdown selection widget running an
//! interaction state machine over an anchor button, a floating menu and a
//! native list fallback on small viewports. The widget is renderer-agnostic:
//! it consumes host events (keys, focus, clicks, viewport changes, measured
//! geometry), keeps the selection store in sync, and emits
//! [`select::SelectRequest`]s for the host to execute.
//!
//! [`input::Input`] and [`toggle::Toggle`] are simple
//! controlled/uncontrolled value mirrors; all three widgets share the
//! per-field [`utils::resolve`] merge.

pub mod class_name;
pub mod events;
pub mod focus;
pub mod input;
pub mod keybinds;
pub mod options;
pub mod schedule;
pub mod scroll;
pub mod select;
pub mod toggle;
pub mod utils;
pub mod viewport;

pub mod prelude {
    //! Convenience re-exports.

    pub use crate::class_name::ClassName;
    pub use crate::events::{EventResult, Modifiers};
    pub use crate::focus::{FocusEvent, FocusTarget};
    pub use crate::input::Input;
    pub use crate::keybinds::{Key, KeyCombo};
    pub use crate::options::{
        MenuEntry, OptionGroup, OptionNode, OptionValue, SelectOption, checked_items,
        checked_text_summary, first_leaf, flatten, has_group, menu_entries,
    };
    pub use crate::schedule::{DeferredHandle, TaskQueue};
    pub use crate::scroll::{ItemGeometry, PopupViewport, ScrollContainer, ScrollRequest};
    pub use crate::select::{
        Direction, GroupView, MobileMenuMode, PopupBounds, Select, SelectId, SelectProps,
        SelectRequest, SelectionMode, Size, Theme, View, WidthBehavior, native_render_model,
        reduce_native_change,
    };
    pub use crate::toggle::Toggle;
    pub use crate::viewport::{ViewportClass, ViewportQuery};
}

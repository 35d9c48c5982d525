//! Select widget - a dropdown select field with anchor, floating menu and
//! native fallback, kept in value-sync through one selection store.

pub mod config;
pub mod events;
pub mod geometry;
pub mod native;
mod state;

pub use config::{
    Direction, GroupView, MobileMenuMode, SelectProps, SelectionMode, Size, Theme, View,
    WidthBehavior,
};
pub use geometry::PopupBounds;
pub use native::{NativeEntry, NativeOption, native_render_model, reduce_native_change};
pub use state::{Select, SelectId, SelectRequest};

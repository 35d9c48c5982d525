//! Select configuration: props and config enums.
//!
//! Props mirror the host-facing configuration surface. Enums carry an
//! `as_str` form used by the class-name builder.

use crate::options::{OptionNode, OptionValue};
use serde::{Deserialize, Serialize};

/// Fallback caption when neither placeholder nor label is configured.
pub const DEFAULT_TEXT_FALLBACK: &str = "Choose:";

/// Selection semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Multi-select; committing toggles membership and keeps the panel open
    #[default]
    Check,
    /// Single-select; committing replaces the selection and closes
    Radio,
    /// Single-select with check-style visuals
    RadioCheck,
}

impl SelectionMode {
    /// Whether the mode holds at most one value.
    pub fn is_single(self) -> bool {
        matches!(self, Self::Radio | Self::RadioCheck)
    }

    /// Class-modifier form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Radio => "radio",
            Self::RadioCheck => "radio-check",
        }
    }
}

/// Group heading placement in the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupView {
    /// Heading on its own row
    #[default]
    Default,
    /// Heading inline with the group's first item
    Line,
}

impl GroupView {
    /// Class-modifier form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Line => "line",
        }
    }
}

/// Field visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Plain field
    #[default]
    Default,
    /// Filled background
    Filled,
}

impl View {
    /// Class-modifier form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Filled => "filled",
        }
    }
}

/// Horizontal sizing strategy of the anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthBehavior {
    /// Content width
    #[default]
    Default,
    /// Stretch to the parent's full width
    Available,
}

impl WidthBehavior {
    /// Class-modifier form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Available => "available",
        }
    }
}

/// Component size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Small
    S,
    /// Medium
    #[default]
    M,
    /// Large
    L,
    /// Extra large
    Xl,
}

impl Size {
    /// Class-modifier form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
        }
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// For colored backgrounds
    OnColor,
    /// For white backgrounds
    #[default]
    OnWhite,
}

impl Theme {
    /// Class-modifier form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnColor => "on-color",
            Self::OnWhite => "on-white",
        }
    }
}

/// Direction the popup may open toward, relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Above, left-aligned
    TopLeft,
    /// Above, centered
    TopCenter,
    /// Above, right-aligned
    TopRight,
    /// Left side, top-aligned
    LeftTop,
    /// Left side, centered
    LeftCenter,
    /// Left side, bottom-aligned
    LeftBottom,
    /// Right side, top-aligned
    RightTop,
    /// Right side, centered
    RightCenter,
    /// Right side, bottom-aligned
    RightBottom,
    /// Below, left-aligned
    BottomLeft,
    /// Below, centered
    BottomCenter,
    /// Below, right-aligned
    BottomRight,
}

/// Rendering strategy on small viewports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileMenuMode {
    /// Native list control instead of the anchor+popup pair
    #[default]
    Native,
    /// Keep the rich popup, fullscreen-style
    Popup,
}

/// Host-facing configuration of a [`Select`](super::Select).
///
/// `opened` and `value` are the per-field controlled overrides: when
/// supplied, that field is externally owned and internal mutation of it is
/// suppressed (change/toggle callbacks still fire).
#[derive(Debug, Clone)]
pub struct SelectProps {
    /// Selection semantics
    pub mode: SelectionMode,
    /// Group heading placement
    pub group_view: GroupView,
    /// Field visual variant
    pub view: View,
    /// Anchor sizing strategy
    pub width: WidthBehavior,
    /// Allowed popup directions, in preference order
    pub directions: Vec<Direction>,
    /// Disable all interaction
    pub disabled: bool,
    /// Controlled override of the open flag
    pub opened: Option<bool>,
    /// Pin the popup width to the anchor width instead of floor-matching it
    pub equal_popup_width: bool,
    /// Controlled override of the selected values
    pub value: Option<Vec<OptionValue>>,
    /// The option tree
    pub options: Vec<OptionNode>,
    /// Mount the popup only while the widget is active
    pub render_popup_on_focus: bool,
    /// Component size
    pub size: Size,
    /// DOM-ish id for the hidden form field
    pub id: Option<String>,
    /// Form field name
    pub name: Option<String>,
    /// Field label
    pub label: Option<String>,
    /// Placeholder shown when nothing is selected
    pub placeholder: Option<String>,
    /// Disabled first entry shown by the native control
    pub native_option_placeholder: String,
    /// Hint line under the field
    pub hint: Option<String>,
    /// Error line under the field (also sets the invalid modifier)
    pub error: Option<String>,
    /// Rendering strategy on small viewports
    pub mobile_menu_mode: MobileMenuMode,
    /// Caption above the menu in mobile popup mode
    pub mobile_title: String,
    /// Popup offset along the main direction (desktop only)
    pub popup_main_offset: Option<i16>,
    /// Popup offset along the secondary direction (desktop only)
    pub popup_secondary_offset: Option<i16>,
    /// Hide the open/close tick on the anchor
    pub hide_tick: bool,
    /// Color theme
    pub theme: Theme,
    /// Maximum popup height
    pub max_height: Option<u16>,
}

impl Default for SelectProps {
    fn default() -> Self {
        Self {
            mode: SelectionMode::default(),
            group_view: GroupView::default(),
            view: View::default(),
            width: WidthBehavior::default(),
            directions: vec![
                Direction::BottomLeft,
                Direction::BottomRight,
                Direction::TopLeft,
                Direction::TopRight,
            ],
            disabled: false,
            opened: None,
            equal_popup_width: false,
            value: None,
            options: Vec::new(),
            render_popup_on_focus: false,
            size: Size::default(),
            id: None,
            name: None,
            label: None,
            placeholder: None,
            native_option_placeholder: DEFAULT_TEXT_FALLBACK.to_string(),
            hint: None,
            error: None,
            mobile_menu_mode: MobileMenuMode::default(),
            mobile_title: DEFAULT_TEXT_FALLBACK.to_string(),
            popup_main_offset: None,
            popup_secondary_offset: None,
            hide_tick: false,
            theme: Theme::default(),
            max_height: None,
        }
    }
}

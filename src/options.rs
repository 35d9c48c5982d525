//! Option tree model.
//!
//! Options form a nested tree of selectable items and named groups. The
//! tree is consumed two ways: flattened into document order for the native
//! control (whose option indices map back positionally), and transformed
//! into a [`MenuEntry`] tree for the popup menu renderer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value carried by a selectable option.
///
/// Unique within a flattened tree. Serializes untagged so string and
/// numeric ids round-trip naturally in the form-field mirror.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// String id
    Str(String),
    /// Numeric id
    Num(i64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

/// A leaf selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique value submitted when the option is selected
    pub value: OptionValue,
    /// Display text
    pub text: String,
    /// Plain-text label for the native control; falls back to `text`
    pub native_text: Option<String>,
    /// Label shown on the anchor once selected; falls back to `text`
    pub checked_text: Option<String>,
    /// Richer display override of `text` in the popup menu
    pub description: Option<String>,
    /// Opaque icon id rendered next to the content
    pub icon: Option<String>,
    /// Opaque pass-through properties for the menu-item renderer
    pub props: BTreeMap<String, String>,
}

impl Default for OptionValue {
    fn default() -> Self {
        Self::Str(String::new())
    }
}

impl SelectOption {
    /// Create an option from a value and display text.
    pub fn new(value: impl Into<OptionValue>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the native-control label.
    pub fn native_text(mut self, text: impl Into<String>) -> Self {
        self.native_text = Some(text.into());
        self
    }

    /// Set the label shown once selected.
    pub fn checked_text(mut self, text: impl Into<String>) -> Self {
        self.checked_text = Some(text.into());
        self
    }

    /// Set the rich display override.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Set the icon id.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Label used by the native control.
    pub fn native_label(&self) -> &str {
        self.native_text.as_deref().unwrap_or(&self.text)
    }

    /// Label used on the anchor once selected.
    pub fn checked_label(&self) -> &str {
        self.checked_text.as_deref().unwrap_or(&self.text)
    }
}

/// A named container of options (may nest further groups).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Group heading
    pub title: String,
    /// Ordered children
    pub content: Vec<OptionNode>,
}

impl OptionGroup {
    /// Create a group.
    pub fn new(title: impl Into<String>, content: Vec<OptionNode>) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }
}

/// A node of the option tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OptionNode {
    /// Leaf selectable option
    Item(SelectOption),
    /// Named group of nodes
    Group(OptionGroup),
}

impl OptionNode {
    /// Shorthand for a leaf node.
    pub fn item(value: impl Into<OptionValue>, text: impl Into<String>) -> Self {
        Self::Item(SelectOption::new(value, text))
    }

    /// Shorthand for a group node.
    pub fn group(title: impl Into<String>, content: Vec<OptionNode>) -> Self {
        Self::Group(OptionGroup::new(title, content))
    }
}

impl From<SelectOption> for OptionNode {
    fn from(option: SelectOption) -> Self {
        Self::Item(option)
    }
}

/// Flatten the tree into depth-first document order, groups elided.
///
/// The native control renders its options in exactly this order, and its
/// change handler maps option indices back through it positionally. Any
/// divergence between the two orders is a correctness bug.
pub fn flatten(nodes: &[OptionNode]) -> Vec<&SelectOption> {
    let mut out = Vec::new();
    collect_flat(nodes, &mut out);
    out
}

fn collect_flat<'a>(nodes: &'a [OptionNode], out: &mut Vec<&'a SelectOption>) {
    for node in nodes {
        match node {
            OptionNode::Item(option) => out.push(option),
            OptionNode::Group(group) => collect_flat(&group.content, out),
        }
    }
}

/// Check whether the tree contains at least one group.
pub fn has_group(nodes: &[OptionNode]) -> bool {
    nodes.iter().any(|node| matches!(node, OptionNode::Group(_)))
}

/// First leaf option in document order, descending into groups.
pub fn first_leaf(nodes: &[OptionNode]) -> Option<&SelectOption> {
    nodes.first().and_then(|node| match node {
        OptionNode::Item(option) => Some(option),
        OptionNode::Group(group) => first_leaf(&group.content),
    })
}

/// Leaf options whose value is in `value`, in document order.
pub fn checked_items<'a>(nodes: &'a [OptionNode], value: &[OptionValue]) -> Vec<&'a SelectOption> {
    flatten(nodes)
        .into_iter()
        .filter(|option| value.contains(&option.value))
        .collect()
}

/// Comma-joined checked labels for the anchor button content.
pub fn checked_text_summary(nodes: &[OptionNode], value: &[OptionValue]) -> String {
    checked_items(nodes, value)
        .iter()
        .map(|option| option.checked_label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Merged icon+content payload for one menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuContent {
    /// Icon id, if the option carries one
    pub icon: Option<String>,
    /// Display body: the description when present, the text otherwise
    pub body: String,
}

/// A menu row ready for the popup renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Option value for check-state lookup and commit
    pub value: OptionValue,
    /// Display payload
    pub content: MenuContent,
    /// Opaque pass-through properties
    pub props: BTreeMap<String, String>,
}

/// A titled section of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    /// Group heading
    pub title: String,
    /// Transformed children
    pub entries: Vec<MenuEntry>,
}

/// One entry of the transformed menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Selectable row
    Item(MenuItem),
    /// Titled section
    Group(MenuGroup),
}

/// Transform the option tree for the popup menu renderer.
///
/// Each item's display payload becomes a merged icon+content fragment;
/// groups keep their title with recursively transformed children.
pub fn menu_entries(nodes: &[OptionNode]) -> Vec<MenuEntry> {
    nodes
        .iter()
        .map(|node| match node {
            OptionNode::Item(option) => MenuEntry::Item(MenuItem {
                value: option.value.clone(),
                content: MenuContent {
                    icon: option.icon.clone(),
                    body: option
                        .description
                        .clone()
                        .unwrap_or_else(|| option.text.clone()),
                },
                props: option.props.clone(),
            }),
            OptionNode::Group(group) => MenuEntry::Group(MenuGroup {
                title: group.title.clone(),
                entries: menu_entries(&group.content),
            }),
        })
        .collect()
}

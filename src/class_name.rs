//! BEM-style class-name builder.
//!
//! Pure string assembly: a block, an optional element, and a set of
//! modifiers. Flag modifiers render as `block_mod`, valued modifiers as
//! `block_mod_value`. No state, no caching.

/// Builder for a single class-name string.
#[derive(Debug, Clone)]
pub struct ClassName {
    base: String,
    mods: Vec<(String, Option<String>)>,
}

impl ClassName {
    /// Start a class name for a block.
    pub fn block(block: impl Into<String>) -> Self {
        Self {
            base: block.into(),
            mods: Vec::new(),
        }
    }

    /// Start a class name for an element of a block (`block__elem`).
    pub fn element(block: &str, elem: &str) -> Self {
        Self {
            base: format!("{block}__{elem}"),
            mods: Vec::new(),
        }
    }

    /// Add a flag modifier when `on` is true.
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.mods.push((name.to_string(), None));
        }
        self
    }

    /// Add a valued modifier.
    pub fn value(mut self, name: &str, value: impl Into<String>) -> Self {
        self.mods.push((name.to_string(), Some(value.into())));
        self
    }

    /// Assemble the final space-separated class string.
    pub fn build(&self) -> String {
        let mut out = self.base.clone();
        for (name, value) in &self.mods {
            out.push(' ');
            out.push_str(&self.base);
            out.push('_');
            out.push_str(name);
            if let Some(value) = value {
                out.push('_');
                out.push_str(value);
            }
        }
        out
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

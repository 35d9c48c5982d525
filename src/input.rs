//! Text input widget.
//!
//! A plain controlled/uncontrolled value mirror with no state machine
//! beyond focused/not-focused; kept as the minimal contrast to the Select's
//! interaction machinery. The same per-field `resolve` merge applies: a
//! host-supplied value suppresses internal mutation while `on_change`
//! still fires.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::utils::resolve;

/// Unique identifier for an Input widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

#[derive(Debug, Default)]
struct InputInner {
    /// Internally tracked value (ignored while the value override is set)
    value: String,
    /// Controlled override of the value
    external_value: Option<String>,
    /// Placeholder text
    placeholder: String,
    /// Focus flag
    focused: bool,
}

type ChangeHandler = Rc<dyn Fn(&str)>;
type FocusHandler = Rc<dyn Fn()>;

#[derive(Clone, Default)]
struct InputHandlers {
    on_change: Option<ChangeHandler>,
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
}

/// A single-line text input widget.
#[derive(Clone)]
pub struct Input {
    id: InputId,
    inner: Arc<RwLock<InputInner>>,
    dirty: Arc<AtomicBool>,
    handlers: Arc<RwLock<InputHandlers>>,
}

impl Input {
    /// Create an empty input.
    pub fn new() -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(InputInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            handlers: Arc::new(RwLock::new(InputHandlers::default())),
        }
    }

    /// Create an input with an initial (uncontrolled) value.
    pub fn with_default_value(value: impl Into<String>) -> Self {
        let input = Self::new();
        if let Ok(mut inner) = input.inner.write() {
            inner.value = value.into();
        }
        input
    }

    /// Get the unique ID for this input.
    pub fn id(&self) -> InputId {
        self.id
    }

    /// Current value: the external override when supplied, internal state
    /// otherwise.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| resolve(guard.external_value.as_ref(), &guard.value).clone())
            .unwrap_or_default()
    }

    /// Supply or clear the controlled value override.
    pub fn set_external_value(&self, value: Option<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.external_value = value;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Commit a value change: mutate internal state only when uncontrolled,
    /// fire `on_change` always.
    pub fn change_value(&self, value: impl Into<String>) {
        let value = value.into();
        if let Ok(mut inner) = self.inner.write() {
            if inner.external_value.is_none() {
                inner.value = value.clone();
            }
        }
        self.dirty.store(true, Ordering::SeqCst);
        let handler = self
            .handlers
            .read()
            .ok()
            .and_then(|handlers| handlers.on_change.clone());
        if let Some(handler) = handler {
            handler(&value);
        }
    }

    /// Clear the (uncontrolled) value.
    pub fn clear(&self) {
        self.change_value(String::new());
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.placeholder = placeholder.into();
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Whether the input holds focus.
    pub fn focused(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.focused)
            .unwrap_or(false)
    }

    /// Focus event from the host.
    pub fn handle_focus(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.focused = true;
        }
        self.dirty.store(true, Ordering::SeqCst);
        let handler = self
            .handlers
            .read()
            .ok()
            .and_then(|handlers| handlers.on_focus.clone());
        if let Some(handler) = handler {
            handler();
        }
    }

    /// Blur event from the host.
    pub fn handle_blur(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.focused = false;
        }
        self.dirty.store(true, Ordering::SeqCst);
        let handler = self
            .handlers
            .read()
            .ok()
            .and_then(|handlers| handlers.on_blur.clone());
        if let Some(handler) = handler {
            handler();
        }
    }

    /// Register the change handler.
    pub fn on_change(&self, handler: impl Fn(&str) + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_change = Some(Rc::new(handler));
        }
    }

    /// Register the focus handler.
    pub fn on_focus(&self, handler: impl Fn() + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_focus = Some(Rc::new(handler));
        }
    }

    /// Register the blur handler.
    pub fn on_blur(&self, handler: impl Fn() + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_blur = Some(Rc::new(handler));
        }
    }

    /// Check if the input state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input").field("id", &self.id).finish_non_exhaustive()
    }
}

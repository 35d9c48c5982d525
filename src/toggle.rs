//! Toggle widget.
//!
//! The other contrast widget: an on/off mirror using the same per-field
//! resolve merge as Input and Select. `on_change` receives the new checked
//! flag and the toggle's form value.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::utils::resolve;

/// Unique identifier for a Toggle widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleId(usize);

impl ToggleId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ToggleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__toggle_{}", self.0)
    }
}

#[derive(Debug, Default)]
struct ToggleInner {
    /// Internally tracked checked flag
    checked: bool,
    /// Controlled override of the checked flag
    external_checked: Option<bool>,
    /// Form value submitted while checked
    value: String,
    /// Focus flag
    focused: bool,
    /// Disable interaction
    disabled: bool,
}

type ChangeHandler = Rc<dyn Fn(bool, &str)>;

#[derive(Clone, Default)]
struct ToggleHandlers {
    on_change: Option<ChangeHandler>,
}

/// An on/off toggle widget.
#[derive(Clone)]
pub struct Toggle {
    id: ToggleId,
    inner: Arc<RwLock<ToggleInner>>,
    dirty: Arc<AtomicBool>,
    handlers: Arc<RwLock<ToggleHandlers>>,
}

impl Toggle {
    /// Create an unchecked toggle with a form value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: ToggleId::new(),
            inner: Arc::new(RwLock::new(ToggleInner {
                value: value.into(),
                ..ToggleInner::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            handlers: Arc::new(RwLock::new(ToggleHandlers::default())),
        }
    }

    /// Get the unique ID for this toggle.
    pub fn id(&self) -> ToggleId {
        self.id
    }

    /// Current checked flag: the external override when supplied, internal
    /// state otherwise.
    pub fn checked(&self) -> bool {
        self.inner
            .read()
            .map(|guard| *resolve(guard.external_checked.as_ref(), &guard.checked))
            .unwrap_or(false)
    }

    /// Supply or clear the controlled checked override.
    pub fn set_external_checked(&self, checked: Option<bool>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.external_checked = checked;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Disable or enable interaction.
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut inner) = self.inner.write() {
            inner.disabled = disabled;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Whether the toggle holds focus.
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
    }

    /// Blur event from the host.
    pub fn handle_blur(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.focused = false;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Flip the toggle: mutate internal state only when uncontrolled, fire
    /// `on_change` always with the flag the interaction asked for.
    pub fn handle_change(&self) {
        let (value, next) = match self.inner.read() {
            Ok(guard) => {
                if guard.disabled {
                    return;
                }
                let current = *resolve(guard.external_checked.as_ref(), &guard.checked);
                (guard.value.clone(), !current)
            }
            Err(_) => return,
        };
        if let Ok(mut inner) = self.inner.write() {
            if inner.external_checked.is_none() {
                inner.checked = next;
            }
        }
        self.dirty.store(true, Ordering::SeqCst);
        let handler = self
            .handlers
            .read()
            .ok()
            .and_then(|handlers| handlers.on_change.clone());
        if let Some(handler) = handler {
            handler(next, &value);
        }
    }

    /// Register the change handler.
    pub fn on_change(&self, handler: impl Fn(bool, &str) + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_change = Some(Rc::new(handler));
        }
    }

    /// Check if the toggle state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl fmt::Debug for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toggle").field("id", &self.id).finish_non_exhaustive()
    }
}

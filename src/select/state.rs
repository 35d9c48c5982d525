//! Select widget state.
//!
//! The Select owns its selection set and open flag, unless the host
//! supplies either as a controlled prop, in which case that field is
//! externally owned (resolved per field through [`crate::utils::resolve`])
//! and internal mutation of it is suppressed. Everything the widget wants
//! from the outside world is emitted as a [`SelectRequest`] for the host to
//! drain; host notification happens through registered handlers.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use log::{debug, trace};

use crate::focus::{FocusEvent, FocusTarget};
use crate::keybinds::KeyCombo;
use crate::options::{OptionValue, checked_text_summary, has_group};
use crate::schedule::TaskQueue;
use crate::scroll::{SCROLL_TO_CORRECTION, ScrollContainer, ScrollRequest};
use crate::utils::resolve;

use super::config::{DEFAULT_TEXT_FALLBACK, MobileMenuMode, SelectProps, SelectionMode};
use super::geometry::PopupBounds;
use crate::class_name::ClassName;

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for SelectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// Something the host must do on the widget's behalf.
///
/// Focus transfer failure is not retried: a request the host cannot honor
/// (target unmounted) is simply dropped, and the state machine proceeds as
/// if the transfer happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectRequest {
    /// Move physical focus to the anchor button
    FocusButton,
    /// Move physical focus into the menu
    FocusMenu,
    /// Move physical focus to the native control
    FocusNative,
    /// Drop focus from whatever widget part holds it
    Blur,
    /// Re-point the popup positioner at the anchor node
    SyncPopupTarget,
    /// Reset the popup inner container scroll to the top
    ResetPopupScroll,
    /// Run a smooth scroll
    Scroll(ScrollRequest),
}

/// Internal state for a Select widget.
#[derive(Debug, Default)]
pub(super) struct SelectInner {
    /// Internally tracked selection (ignored while the value prop is set)
    pub(super) value: Vec<OptionValue>,
    /// Internally tracked open flag (ignored while the opened prop is set)
    pub(super) opened: bool,
    /// Small-viewport flag from the host's viewport observer
    pub(super) is_mobile: bool,
    /// Whether the option tree contains at least one group
    pub(super) has_group: bool,
    /// Whether the popup is mounted (focus-triggered rendering only)
    pub(super) popup_ready: bool,
    /// Popup width constraints derived from the anchor
    pub(super) popup_bounds: PopupBounds,
    /// Last observed focus target, for the deferred blur re-check
    pub(super) current_focus: Option<FocusTarget>,
}

type ChangeHandler = Rc<dyn Fn(&[OptionValue])>;
type FocusHandler = Rc<dyn Fn(&FocusEvent)>;
type PlainHandler = Rc<dyn Fn()>;
type KeyHandler = Rc<dyn Fn(&KeyCombo)>;

/// Registered host callbacks.
#[derive(Clone, Default)]
pub(super) struct SelectHandlers {
    pub(super) on_change: Option<ChangeHandler>,
    pub(super) on_focus: Option<FocusHandler>,
    pub(super) on_blur: Option<FocusHandler>,
    pub(super) on_button_focus: Option<FocusHandler>,
    pub(super) on_button_blur: Option<FocusHandler>,
    pub(super) on_menu_focus: Option<FocusHandler>,
    pub(super) on_menu_blur: Option<FocusHandler>,
    pub(super) on_click: Option<PlainHandler>,
    pub(super) on_click_outside: Option<PlainHandler>,
    pub(super) on_key_down: Option<KeyHandler>,
}

impl fmt::Debug for SelectHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectHandlers").finish_non_exhaustive()
    }
}

/// A dropdown select widget.
///
/// The widget is headless: it runs the interaction state machine (anchor,
/// floating menu, native fallback) and leaves rendering, positioning and
/// physical focus to the host, which drains [`SelectRequest`]s after each
/// handler call.
///
/// Cloning shares the underlying state; clones are handles, not copies.
#[derive(Debug)]
pub struct Select {
    /// Unique identifier for this select instance
    id: SelectId,
    /// Host-facing configuration
    props: Arc<RwLock<SelectProps>>,
    /// Internal state
    inner: Arc<RwLock<SelectInner>>,
    /// Escape pressed while open; close must complete on the next menu blur
    await_closing: Arc<AtomicBool>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Pending host requests
    requests: Arc<Mutex<Vec<SelectRequest>>>,
    /// Deferred work tied to this widget's lifetime
    tasks: TaskQueue,
    /// Registered host callbacks
    handlers: Arc<RwLock<SelectHandlers>>,
}

impl Select {
    /// Create a select from its configuration.
    ///
    /// Performs the mount-time work: the group flag, the initial popup
    /// bounds estimate, and the radio auto-select rule (focus-triggered
    /// rendering, radio mode, non-empty options, nothing checked).
    pub fn new(props: SelectProps) -> Self {
        let inner = SelectInner {
            value: props.value.clone().unwrap_or_default(),
            opened: props.opened.unwrap_or(false),
            has_group: has_group(&props.options),
            ..SelectInner::default()
        };
        let select = Self {
            id: SelectId::new(),
            props: Arc::new(RwLock::new(props)),
            inner: Arc::new(RwLock::new(inner)),
            await_closing: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
            requests: Arc::new(Mutex::new(Vec::new())),
            tasks: TaskQueue::new(),
            handlers: Arc::new(RwLock::new(SelectHandlers::default())),
        };
        if select.auto_select_required() {
            select.select_first_option();
        }
        select.push_request(SelectRequest::SyncPopupTarget);
        select.sync_popup_bounds(select.anchor_intrinsic_width());
        select
    }

    /// Get the unique ID for this select.
    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Get the ID as a string (for node binding and the form field id).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Resolved state
    // -------------------------------------------------------------------------

    /// Current selection: the value prop when supplied, internal state
    /// otherwise. Read-only merge, never mutates either side.
    pub fn value(&self) -> Vec<OptionValue> {
        let props = match self.props.read() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };
        let inner = match self.inner.read() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };
        resolve(props.value.as_ref(), &inner.value).clone()
    }

    /// Whether the panel is logically open.
    ///
    /// A disabled widget always reports closed, even under a controlled
    /// `opened: Some(true)`.
    pub fn opened(&self) -> bool {
        let props = match self.props.read() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        if props.disabled {
            return false;
        }
        let inner = match self.inner.read() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        *resolve(props.opened.as_ref(), &inner.opened)
    }

    /// Small-viewport flag, as last reported by the viewport observer.
    pub fn is_mobile(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.is_mobile)
            .unwrap_or(false)
    }

    /// Whether the option tree contains at least one group.
    pub fn has_group(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.has_group)
            .unwrap_or(false)
    }

    /// Current popup width constraints.
    pub fn popup_bounds(&self) -> PopupBounds {
        self.inner
            .read()
            .map(|guard| guard.popup_bounds)
            .unwrap_or_default()
    }

    /// Snapshot of the current configuration.
    pub fn props(&self) -> SelectProps {
        self.props
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Whether interaction is disabled.
    pub fn disabled(&self) -> bool {
        self.props
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Selection semantics shortcut.
    pub fn mode(&self) -> SelectionMode {
        self.props
            .read()
            .map(|guard| guard.mode)
            .unwrap_or_default()
    }

    /// Whether the native list control is the active rendering path.
    pub fn native_control_active(&self) -> bool {
        let mobile_mode = self
            .props
            .read()
            .map(|guard| guard.mobile_menu_mode)
            .unwrap_or_default();
        self.is_mobile() && mobile_mode == MobileMenuMode::Native
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Commit a new selection.
    ///
    /// Always fires `on_change`, even when the value is controlled. In
    /// check mode the panel stays open; radio modes close it and, when that
    /// close actually transitions state, request focus back on the anchor.
    /// Radio modes never hold more than one value; an oversized commit is
    /// clamped to its most recent entry.
    pub fn set_selection(&self, new_value: Vec<OptionValue>) {
        let (mode, value_controlled) = match self.props.read() {
            Ok(guard) => (guard.mode, guard.value.is_some()),
            Err(_) => return,
        };
        let mut new_value = new_value;
        if mode.is_single() && new_value.len() > 1 {
            debug!(
                "{}: clamping {}-element commit in single-select mode",
                self.id,
                new_value.len()
            );
            new_value = new_value.into_iter().rev().take(1).collect();
        }
        let was_opened = self.opened();
        if let Ok(mut inner) = self.inner.write() {
            if !value_controlled {
                inner.value = new_value.clone();
            }
            inner.opened = mode == SelectionMode::Check;
        }
        self.dirty.store(true, Ordering::SeqCst);
        let now_opened = self.opened();
        if !now_opened && was_opened != now_opened {
            // The menu is going away; keep keyboard context on the anchor.
            self.push_request(SelectRequest::FocusButton);
        }
        trace!("{}: selection -> {:?}", self.id, new_value);
        self.emit_change(&new_value);
    }

    /// Flip the open flag (uncontrolled) and move focus into the menu when
    /// the flip lands on open.
    pub fn toggle_opened(&self) {
        let new_opened = !self.opened();
        let opened_controlled = self
            .props
            .read()
            .map(|guard| guard.opened.is_some())
            .unwrap_or(false);
        if !opened_controlled && let Ok(mut inner) = self.inner.write() {
            inner.opened = new_opened;
        }
        self.dirty.store(true, Ordering::SeqCst);
        trace!("{}: toggled opened -> {}", self.id, new_opened);
        if new_opened {
            self.focus_on_menu();
        }
    }

    /// Apply a configuration update.
    ///
    /// Recomputes the group flag, re-syncs the popup target and geometry,
    /// and force-closes the panel when `disabled` arrives while it is open.
    pub fn set_props(&self, next: SelectProps) {
        let next_has_group = has_group(&next.options);
        let disabling = next.disabled;
        if let Ok(mut props) = self.props.write() {
            *props = next;
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.has_group = next_has_group;
            if disabling && inner.opened {
                debug!("{}: closed by disabled prop transition", self.id);
                inner.opened = false;
            }
        }
        self.push_request(SelectRequest::SyncPopupTarget);
        self.sync_popup_bounds(self.anchor_intrinsic_width());
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Viewport observer callback: flip the small-viewport flag and re-sync
    /// the popup against the (possibly re-rendered) anchor.
    pub fn handle_viewport_change(&self, is_small: bool) {
        if let Ok(mut inner) = self.inner.write() {
            if inner.is_mobile == is_small {
                return;
            }
            inner.is_mobile = is_small;
        }
        debug!("{}: viewport class changed, mobile={}", self.id, is_small);
        self.dirty.store(true, Ordering::SeqCst);
        self.push_request(SelectRequest::SyncPopupTarget);
        self.sync_popup_bounds(self.anchor_intrinsic_width());
    }

    /// Host notification that the popup mounted or unmounted.
    ///
    /// Under focus-triggered rendering the menu only exists after this
    /// fires, so the focus transfer into it is deferred one drain.
    pub fn notify_popup_mounted(&self, mounted: bool) {
        let render_on_focus = self
            .props
            .read()
            .map(|guard| guard.render_popup_on_focus)
            .unwrap_or(false);
        if mounted {
            self.push_request(SelectRequest::SyncPopupTarget);
        }
        if render_on_focus {
            if let Ok(mut inner) = self.inner.write() {
                inner.popup_ready = mounted;
            }
            self.dirty.store(true, Ordering::SeqCst);
            if mounted {
                let widget = self.clone();
                self.tasks.defer(move || widget.focus_on_menu());
            }
        }
    }

    /// Request focus on the menu, honoring the mobile exception: on small
    /// viewports the browser-native control (or fullscreen popup) owns
    /// focus and no synthetic transfer is issued.
    pub(super) fn focus_on_menu(&self) {
        if self.is_mobile() {
            return;
        }
        let (render_on_focus, ready) = {
            let render_on_focus = self
                .props
                .read()
                .map(|guard| guard.render_popup_on_focus)
                .unwrap_or(false);
            let ready = self
                .inner
                .read()
                .map(|guard| guard.popup_ready)
                .unwrap_or(false);
            (render_on_focus, ready)
        };
        if render_on_focus && !ready {
            // The popup is not mounted yet; notify_popup_mounted defers it.
            return;
        }
        self.push_request(SelectRequest::FocusMenu);
    }

    // -------------------------------------------------------------------------
    // Imperative surface
    // -------------------------------------------------------------------------

    /// Focus the widget.
    ///
    /// On the native path this focuses the native control; otherwise it
    /// focuses the anchor, opens the panel and transfers focus into the
    /// menu.
    pub fn focus(&self) {
        if self.native_control_active() {
            self.push_request(SelectRequest::FocusNative);
            return;
        }
        self.push_request(SelectRequest::FocusButton);
        let opened_controlled = self
            .props
            .read()
            .map(|guard| guard.opened.is_some())
            .unwrap_or(false);
        if !opened_controlled && let Ok(mut inner) = self.inner.write() {
            inner.opened = true;
        }
        self.dirty.store(true, Ordering::SeqCst);
        self.focus_on_menu();
    }

    /// Drop focus from the widget.
    pub fn blur(&self) {
        self.push_request(SelectRequest::Blur);
    }

    /// Scroll the page so the widget lands just below the viewport top.
    ///
    /// `anchor_top` is the host-measured page offset of the widget root.
    pub fn scroll_to(&self, anchor_top: i32) {
        self.push_request(SelectRequest::Scroll(ScrollRequest {
            container: ScrollContainer::Page,
            target_y: anchor_top - SCROLL_TO_CORRECTION,
            duration: None,
        }));
    }

    /// Cancel pending deferred work. Call on unmount; a deferral that would
    /// land after teardown must not mutate a destroyed instance.
    pub fn teardown(&self) {
        trace!("{}: teardown", self.id);
        self.tasks.cancel_all();
    }

    /// Run deferred work scheduled by earlier handler calls. The host calls
    /// this once per loop turn, after rendering.
    pub fn run_deferred(&self) {
        self.tasks.run_pending();
    }

    // -------------------------------------------------------------------------
    // Render support
    // -------------------------------------------------------------------------

    /// Value mirror for the hidden form-submittable field.
    pub fn form_value(&self) -> String {
        self.value()
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Anchor button content: checked labels joined, else the placeholder,
    /// else the label, else the fallback caption.
    pub fn button_content(&self) -> String {
        let props = match self.props.read() {
            Ok(guard) => guard,
            Err(_) => return DEFAULT_TEXT_FALLBACK.to_string(),
        };
        let summary = checked_text_summary(&props.options, &self.value_with_props(&props));
        if !summary.is_empty() {
            return summary;
        }
        props
            .placeholder
            .clone()
            .or_else(|| props.label.clone())
            .unwrap_or_else(|| DEFAULT_TEXT_FALLBACK.to_string())
    }

    /// Root class-name string for the styling layer.
    pub fn class_names(&self) -> String {
        let opened = self.opened();
        let props = match self.props.read() {
            Ok(guard) => guard,
            Err(_) => return String::from("select"),
        };
        let value = self.value_with_props(&props);
        ClassName::block("select")
            .value("mode", props.mode.as_str())
            .value("size", props.size.as_str())
            .value("view", props.view.as_str())
            .value("width", props.width.as_str())
            .value("theme", props.theme.as_str())
            .flag("checked", !value.is_empty())
            .flag("disabled", props.disabled)
            .flag("has-label", props.label.is_some())
            .flag("has-value", !value.is_empty())
            .flag("has-placeholder", props.placeholder.is_some())
            .flag("invalid", props.error.is_some())
            .flag("opened", opened)
            .flag("no-tick", props.hide_tick)
            .build()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the select state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Requests
    // -------------------------------------------------------------------------

    /// Drain pending host requests, in emit order.
    pub fn take_requests(&self) -> Vec<SelectRequest> {
        self.requests
            .lock()
            .map(|mut requests| std::mem::take(&mut *requests))
            .unwrap_or_default()
    }

    pub(super) fn push_request(&self, request: SelectRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }

    // -------------------------------------------------------------------------
    // Handler registration
    // -------------------------------------------------------------------------

    /// Register the value-change handler.
    pub fn on_change(&self, handler: impl Fn(&[OptionValue]) + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_change = Some(Rc::new(handler));
        }
    }

    /// Register the widget-level focus handler.
    pub fn on_focus(&self, handler: impl Fn(&FocusEvent) + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_focus = Some(Rc::new(handler));
        }
    }

    /// Register the widget-level blur handler.
    pub fn on_blur(&self, handler: impl Fn(&FocusEvent) + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_blur = Some(Rc::new(handler));
        }
    }

    /// Register the anchor-button focus handler.
    pub fn on_button_focus(&self, handler: impl Fn(&FocusEvent) + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_button_focus = Some(Rc::new(handler));
        }
    }

    /// Register the anchor-button blur handler.
    pub fn on_button_blur(&self, handler: impl Fn(&FocusEvent) + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_button_blur = Some(Rc::new(handler));
        }
    }

    /// Register the menu focus handler.
    pub fn on_menu_focus(&self, handler: impl Fn(&FocusEvent) + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_menu_focus = Some(Rc::new(handler));
        }
    }

    /// Register the menu blur handler.
    pub fn on_menu_blur(&self, handler: impl Fn(&FocusEvent) + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_menu_blur = Some(Rc::new(handler));
        }
    }

    /// Register the anchor click handler.
    pub fn on_click(&self, handler: impl Fn() + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_click = Some(Rc::new(handler));
        }
    }

    /// Register the click-outside handler.
    pub fn on_click_outside(&self, handler: impl Fn() + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_click_outside = Some(Rc::new(handler));
        }
    }

    /// Register the key-down forwarder. Fires after internal key handling
    /// for every key the widget sees, handled or not.
    pub fn on_key_down(&self, handler: impl Fn(&KeyCombo) + 'static) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.on_key_down = Some(Rc::new(handler));
        }
    }

    // -------------------------------------------------------------------------
    // Internals shared with the event and native modules
    // -------------------------------------------------------------------------

    pub(super) fn await_closing(&self) -> &AtomicBool {
        &self.await_closing
    }

    pub(super) fn tasks(&self) -> &TaskQueue {
        &self.tasks
    }

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub(super) fn set_current_focus(&self, target: Option<FocusTarget>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.current_focus = target;
        }
    }

    pub(super) fn current_focus(&self) -> Option<FocusTarget> {
        self.inner
            .read()
            .map(|guard| guard.current_focus)
            .unwrap_or(None)
    }

    pub(super) fn set_internal_opened(&self, opened: bool) {
        let opened_controlled = self
            .props
            .read()
            .map(|guard| guard.opened.is_some())
            .unwrap_or(false);
        if !opened_controlled && let Ok(mut inner) = self.inner.write() {
            inner.opened = opened;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub(super) fn set_internal_value(&self, value: Vec<OptionValue>) {
        let value_controlled = self
            .props
            .read()
            .map(|guard| guard.value.is_some())
            .unwrap_or(false);
        if !value_controlled && let Ok(mut inner) = self.inner.write() {
            inner.value = value;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub(super) fn set_popup_bounds(&self, bounds: PopupBounds) {
        if let Ok(mut inner) = self.inner.write() {
            if inner.popup_bounds == bounds {
                return;
            }
            inner.popup_bounds = bounds;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    fn value_with_props(&self, props: &SelectProps) -> Vec<OptionValue> {
        let inner = match self.inner.read() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };
        resolve(props.value.as_ref(), &inner.value).clone()
    }

    fn auto_select_required(&self) -> bool {
        let props = match self.props.read() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        props.render_popup_on_focus
            && props.mode == SelectionMode::Radio
            && !props.options.is_empty()
            && checked_text_summary(&props.options, &self.value_with_props(&props)).is_empty()
    }

    fn select_first_option(&self) {
        let first = self
            .props
            .read()
            .ok()
            .and_then(|props| crate::options::first_leaf(&props.options).map(|o| o.value.clone()));
        if let Some(value) = first {
            debug!("{}: auto-selecting first option", self.id);
            self.set_selection(vec![value]);
        }
    }

    // -------------------------------------------------------------------------
    // Handler dispatch
    // -------------------------------------------------------------------------

    pub(super) fn emit_change(&self, value: &[OptionValue]) {
        let handler = self
            .handlers
            .read()
            .ok()
            .and_then(|handlers| handlers.on_change.clone());
        if let Some(handler) = handler {
            handler(value);
        }
    }

    pub(super) fn emit_focus_event(
        &self,
        pick: impl Fn(&SelectHandlers) -> Option<FocusHandler>,
        event: &FocusEvent,
    ) {
        let handler = self.handlers.read().ok().and_then(|handlers| pick(&handlers));
        if let Some(handler) = handler {
            handler(event);
        }
    }

    pub(super) fn emit_plain(&self, pick: impl Fn(&SelectHandlers) -> Option<PlainHandler>) {
        let handler = self.handlers.read().ok().and_then(|handlers| pick(&handlers));
        if let Some(handler) = handler {
            handler();
        }
    }

    pub(super) fn emit_key_down(&self, key: &KeyCombo) {
        let handler = self
            .handlers
            .read()
            .ok()
            .and_then(|handlers| handlers.on_key_down.clone());
        if let Some(handler) = handler {
            handler(key);
        }
    }
}

impl Clone for Select {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            props: Arc::clone(&self.props),
            inner: Arc::clone(&self.inner),
            await_closing: Arc::clone(&self.await_closing),
            dirty: Arc::clone(&self.dirty),
            requests: Arc::clone(&self.requests),
            tasks: self.tasks.clone(),
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new(SelectProps::default())
    }
}

//! Event handling for the Select widget: the focus coordinator and the
//! keyboard router.
//!
//! Focus rules, in the order they matter:
//! 1. Anchor click (not disabled) toggles the panel.
//! 2. Menu focus changes no state; handlers get a value snapshot.
//! 3. Menu blur closes the panel iff an escape-close is pending or focus
//!    landed somewhere other than the anchor. The dual condition covers the
//!    escape race: escape moves focus to the anchor, and the blur that
//!    follows would otherwise see focus already back on the anchor and keep
//!    the panel open.
//! 4. Escape while open arms the pending-close flag and sends focus to the
//!    anchor; rule 3 then completes the close.
//! 5. Native-control focus/blur toggle the open flag for visual affordance
//!    only.
//!
//! A blur whose destination the host does not know yet is re-checked one
//! drain later, against wherever focus was last observed; both orderings of
//! escape and blur settle on closed.

use std::sync::atomic::Ordering;

use log::debug;

use crate::events::EventResult;
use crate::focus::{FocusEvent, FocusTarget};
use crate::keybinds::{Key, KeyCombo};
use crate::scroll::{
    ItemGeometry, PopupViewport, SCROLL_TO_NORMAL_DURATION, ScrollContainer, ScrollRequest,
    highlight_scroll_target,
};

use super::config::SelectionMode;
use super::state::{Select, SelectRequest};

impl Select {
    /// Anchor click: toggle the panel unless disabled; always forward
    /// `on_click`.
    pub fn handle_button_click(&self) {
        if !self.disabled() {
            self.toggle_opened();
        }
        self.emit_plain(|handlers| handlers.on_click.clone());
    }

    /// Key press while the anchor holds focus. Enter or Space toggles the
    /// panel; everything else passes through.
    pub fn handle_button_key(&self, key: &KeyCombo) -> EventResult {
        let mut result = EventResult::Ignored;
        if !key.modifiers.ctrl
            && !key.modifiers.alt
            && !self.disabled()
            && matches!(key.key, Key::Enter | Key::Char(' '))
        {
            self.toggle_opened();
            result = EventResult::Consumed;
        }
        self.emit_key_down(key);
        result
    }

    /// Anchor received focus.
    pub fn handle_button_focus(&self) {
        self.set_current_focus(Some(FocusTarget::Button));
        let event = FocusEvent::new(FocusTarget::Button, self.value());
        self.emit_focus_event(|handlers| handlers.on_button_focus.clone(), &event);
    }

    /// Anchor lost focus.
    pub fn handle_button_blur(&self) {
        if self.current_focus() == Some(FocusTarget::Button) {
            self.set_current_focus(None);
        }
        let event = FocusEvent::new(FocusTarget::Button, self.value());
        self.emit_focus_event(|handlers| handlers.on_button_blur.clone(), &event);
    }

    /// Menu received focus: state unchanged, handlers get the snapshot.
    pub fn handle_menu_focus(&self) {
        self.set_current_focus(Some(FocusTarget::Menu));
        let event = FocusEvent::new(FocusTarget::Menu, self.value());
        self.emit_focus_event(|handlers| handlers.on_focus.clone(), &event);
        self.emit_focus_event(|handlers| handlers.on_menu_focus.clone(), &event);
    }

    /// Menu lost focus.
    ///
    /// `related` is where focus went, when the host already knows. When it
    /// does not (`None`), the close decision is deferred one drain so the
    /// host can finish its own focus transfer first.
    pub fn handle_menu_blur(&self, related: Option<FocusTarget>) {
        match related {
            Some(target) => {
                self.set_current_focus(match target {
                    FocusTarget::Outside => None,
                    other => Some(other),
                });
                self.apply_menu_blur_close(target);
            }
            None => {
                self.set_current_focus(None);
                let widget = self.clone();
                self.tasks().defer(move || {
                    let target = widget.current_focus().unwrap_or(FocusTarget::Outside);
                    widget.apply_menu_blur_close(target);
                });
            }
        }
        let event = FocusEvent::new(FocusTarget::Menu, self.value());
        self.emit_focus_event(|handlers| handlers.on_blur.clone(), &event);
        self.emit_focus_event(|handlers| handlers.on_menu_blur.clone(), &event);
    }

    /// Rule 3: close iff an escape-close is pending or focus left the
    /// anchor. Consuming the flag and re-closing are both idempotent, so
    /// the deferred and direct paths may both run.
    fn apply_menu_blur_close(&self, related: FocusTarget) {
        if self.await_closing().swap(false, Ordering::SeqCst) || related != FocusTarget::Button {
            debug!("{}: closing after menu blur toward {:?}", self.id(), related);
            self.set_internal_opened(false);
        }
    }

    /// Key press routed from the focused menu.
    ///
    /// Up/Down leave state alone (the menu collaborator moves its own
    /// highlight) but keep the highlighted item scrolled into view. Enter
    /// and Space commit: check mode stays open, radio modes close; either
    /// way the menu is refocused to keep keyboard context. Escape arms the
    /// pending close and returns focus to the anchor.
    ///
    /// The four handled codes come back [`EventResult::Consumed`] so the
    /// host suppresses native scroll/submit side effects; `on_key_down` is
    /// forwarded for every key after internal handling.
    pub fn handle_menu_key(
        &self,
        key: &KeyCombo,
        highlighted: Option<ItemGeometry>,
        viewport: Option<PopupViewport>,
    ) -> EventResult {
        if key.modifiers.ctrl || key.modifiers.alt {
            self.emit_key_down(key);
            return EventResult::Ignored;
        }
        let mut result = EventResult::Ignored;
        match key.key {
            Key::Up | Key::Down => {
                self.scroll_to_highlighted(highlighted, viewport);
                result = EventResult::Consumed;
            }
            Key::Enter | Key::Char(' ') => {
                let opened = self.opened();
                let next = match self.mode() {
                    SelectionMode::Check => true,
                    _ => !opened,
                };
                self.set_internal_opened(next);
                self.focus_on_menu();
                result = EventResult::Consumed;
            }
            Key::Escape => {
                self.await_closing().store(true, Ordering::SeqCst);
                self.push_request(SelectRequest::FocusButton);
                result = EventResult::Consumed;
            }
            _ => {}
        }
        self.emit_key_down(key);
        result
    }

    /// Highlight moved while the panel is not logically open yet (the
    /// focus-triggered path highlights before the open state commits):
    /// reset the popup scroll and bring the item into view.
    pub fn handle_highlight_item(
        &self,
        item: Option<ItemGeometry>,
        viewport: Option<PopupViewport>,
    ) {
        if self.opened() {
            return;
        }
        if let (Some(item), Some(mut viewport)) = (item, viewport) {
            self.push_request(SelectRequest::ResetPopupScroll);
            viewport.scroll_top = 0;
            self.emit_highlight_scroll(item, viewport);
        }
    }

    /// Custom-path commit adapter: the menu's item-check callback feeds the
    /// selection store directly. When a keyboard commit triggers both this
    /// and [`Select::handle_menu_key`], route the key first.
    pub fn handle_item_check(&self, value: Vec<crate::options::OptionValue>) {
        self.set_selection(value);
    }

    /// Click landed outside the widget: close and forward.
    pub fn handle_click_outside(&self) {
        self.set_internal_opened(false);
        self.emit_plain(|handlers| handlers.on_click_outside.clone());
    }

    /// Closer button of the mobile popup header.
    pub fn handle_popup_closer_click(&self) {
        self.set_internal_opened(false);
    }

    fn scroll_to_highlighted(
        &self,
        item: Option<ItemGeometry>,
        viewport: Option<PopupViewport>,
    ) {
        if let (Some(item), Some(viewport)) = (item, viewport) {
            self.emit_highlight_scroll(item, viewport);
        }
    }

    fn emit_highlight_scroll(&self, item: ItemGeometry, viewport: PopupViewport) {
        if let Some(target_y) = highlight_scroll_target(item, viewport) {
            self.push_request(SelectRequest::Scroll(ScrollRequest {
                container: ScrollContainer::PopupInner,
                target_y,
                duration: Some(SCROLL_TO_NORMAL_DURATION),
            }));
        }
    }
}

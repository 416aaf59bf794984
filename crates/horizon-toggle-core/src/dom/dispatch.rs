//! Event dispatch and native activation behavior.
//!
//! # Event Flow
//!
//! 1. **Path**: the propagation path is computed once, before any listener
//!    runs: the target, then each parent up to the document root. Slotted
//!    nodes pass through their assigned slot. Composed events (`click`,
//!    `keydown`) continue from a shadow root to its host; `change` stops at
//!    the shadow root of its target's tree.
//!
//! 2. **Retargeting**: listeners outside a shadow tree see its host as the
//!    event target.
//!
//! 3. **Bubbling**: listeners of each node run in registration order. After a
//!    node's listeners, dispatch ends if one of them stopped propagation.
//!
//! 4. **Activation**: [`Document::click`] and [`Document::press_key`]
//!    emulate the native default actions of checkboxes and labels, honoring
//!    `preventDefault`.

use super::{Document, Event, EventKind, EventType, Key, KeyboardEvent, NodeId};
use crate::logging::targets;
use crate::{DomError, Result};

/// Outcome of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchResult {
    /// A listener called `prevent_default`.
    pub default_prevented: bool,
    /// A listener called `stop_propagation`.
    pub propagation_stopped: bool,
    /// Number of listener invocations.
    pub listeners_invoked: usize,
}

impl DispatchResult {
    /// Check if any listener saw the event.
    pub fn was_handled(&self) -> bool {
        self.listeners_invoked > 0
    }
}

/// Activation behavior found on the click path.
#[derive(Clone, Copy)]
enum Activation {
    Checkbox(NodeId),
    Label(NodeId),
}

impl Document {
    /// Compute the propagation path of an event, paired with the target seen
    /// by listeners at each step.
    ///
    /// Slotted nodes continue to their assigned slot, so the path follows
    /// the flat tree.
    fn event_path(&self, target: NodeId, event_type: EventType) -> Vec<(NodeId, NodeId)> {
        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(node) = current {
            path.push((node, self.retarget(target, node)));
            current = if let Some(host) = self.shadow_host(node) {
                // non-composed events stay inside the target's own shadow tree
                if !event_type.is_composed() && self.is_inclusive_ancestor(node, target) {
                    None
                } else {
                    Some(host)
                }
            } else if let Some(slot) = self.assigned_slot(node) {
                Some(slot)
            } else {
                self.parent(node)
            };
        }
        path
    }

    /// `target` as seen from `node`: hosts stand in for shadow content that
    /// `node` cannot see.
    fn retarget(&self, target: NodeId, node: NodeId) -> NodeId {
        let mut seen = target;
        while let Some(root) = self.containing_shadow_root(seen) {
            if self.is_inclusive_ancestor(root, node) {
                break;
            }
            match self.shadow_host(root) {
                Some(host) => seen = host,
                None => break,
            }
        }
        seen
    }

    /// Dispatch an event to `target` and bubble it along its path.
    pub fn dispatch_event(&mut self, target: NodeId, kind: EventKind) -> Result<DispatchResult> {
        if !self.contains(target) {
            return Err(DomError::NodeNotFound(target));
        }
        let event_type = kind.event_type();
        let path = self.event_path(target, event_type);
        let mut event = Event::new(kind, target);
        let mut result = DispatchResult::default();

        tracing::trace!(
            target: targets::DISPATCH,
            event = event_type.name(),
            ?target,
            path_len = path.len(),
            "dispatching event"
        );

        for (node, seen_target) in path {
            let listeners = self.listeners_for(node, event_type);
            if listeners.is_empty() {
                continue;
            }
            event.set_current_target(node);
            event.set_target(seen_target);
            for listener in listeners {
                listener(self, &mut event);
                result.listeners_invoked += 1;
            }
            if event.is_propagation_stopped() {
                tracing::trace!(target: targets::DISPATCH, ?node, "propagation stopped");
                break;
            }
        }

        result.default_prevented = event.is_default_prevented();
        result.propagation_stopped = event.is_propagation_stopped();
        Ok(result)
    }

    /// Simulate a pointer click on `target`.
    ///
    /// The nearest checkbox or label on the click path supplies the
    /// activation behavior:
    ///
    /// - a checkbox flips its `checked` property before the `click` event,
    ///   restores it if a listener prevented the default, and otherwise
    ///   fires `change`;
    /// - a label forwards the click to its labeled control (its first
    ///   descendant `<input>`) unless the click already hit that control.
    ///
    /// Disabled checkboxes swallow the click entirely.
    pub fn click(&mut self, target: NodeId) -> Result<DispatchResult> {
        if !self.contains(target) {
            return Err(DomError::NodeNotFound(target));
        }
        if self.is_checkbox(target) && self.has_attribute(target, "disabled") {
            tracing::trace!(target: targets::DISPATCH, ?target, "click on disabled checkbox ignored");
            return Ok(DispatchResult::default());
        }

        let activation = self.activation_target(target);
        let checked_before = match activation {
            Some(Activation::Checkbox(input)) => {
                let before = self.is_checked(input);
                self.set_checked(input, !before)?;
                Some(before)
            }
            _ => None,
        };

        let result = self.dispatch_event(target, EventKind::Click)?;

        match activation {
            Some(Activation::Checkbox(input)) => {
                if result.default_prevented {
                    if let Some(before) = checked_before {
                        self.set_checked(input, before)?;
                    }
                } else {
                    tracing::trace!(
                        target: targets::DISPATCH,
                        ?input,
                        checked = self.is_checked(input),
                        "checkbox activated"
                    );
                    self.dispatch_event(input, EventKind::Change)?;
                }
            }
            Some(Activation::Label(label)) if !result.default_prevented => {
                if let Some(control) = self.labeled_control(label) {
                    if !self.is_inclusive_ancestor(control, target) {
                        tracing::trace!(target: targets::DISPATCH, ?label, ?control, "label activation");
                        self.click(control)?;
                    }
                }
            }
            _ => {}
        }
        Ok(result)
    }

    /// Simulate a key press on `target`.
    ///
    /// Dispatches `keydown`; if nothing prevented the default and the target
    /// is a focusable checkbox, Space activates it like a click.
    pub fn press_key(&mut self, target: NodeId, key: KeyboardEvent) -> Result<DispatchResult> {
        let activates = key.key == Key::Space;
        let result = self.dispatch_event(target, EventKind::KeyDown(key))?;
        if activates
            && !result.default_prevented
            && self.is_checkbox(target)
            && self.is_focusable(target)
        {
            self.click(target)?;
        }
        Ok(result)
    }

    fn activation_target(&self, target: NodeId) -> Option<Activation> {
        self.event_path(target, EventType::Click)
            .into_iter()
            .find_map(|(node, _)| {
                if self.is_checkbox(node) {
                    Some(Activation::Checkbox(node))
                } else if self.tag_name(node) == Some("label") {
                    Some(Activation::Label(node))
                } else {
                    None
                }
            })
    }

    /// The control a label activates: its first descendant `<input>`.
    pub fn labeled_control(&self, label: NodeId) -> Option<NodeId> {
        self.descendants(label)
            .into_iter()
            .find(|node| self.tag_name(*node) == Some("input"))
    }
}

//! Behavior of the toggle switch in a document: state, interaction,
//! rendering and styling.

use std::sync::Arc;

use horizon_toggle::prelude::*;
use horizon_toggle::widget::VALUE_HOLDER;
use horizon_toggle_core::dom::ElementBuilder;
use horizon_toggle_core::EventKind;
use parking_lot::Mutex;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_toggle=trace,horizon_toggle_core=debug")
        .with_test_writer()
        .try_init();
}

/// A connected toggle inside `<main>`, with its first render flushed.
fn mounted(doc: &mut Document) -> (Arc<ToggleSwitch>, NodeId) {
    let root = doc.root();
    let main = elements::div().build_into(doc, root).unwrap();
    let toggle = ToggleSwitch::new(doc).unwrap();
    doc.append_child(main, toggle.host()).unwrap();
    doc.flush_renders();
    (toggle, main)
}

fn space() -> KeyboardEvent {
    KeyboardEvent::new(Key::Space)
}

fn assert_rendered(doc: &Document, toggle: &ToggleSwitch) {
    let checkbox = toggle.part(VALUE_HOLDER).unwrap();
    assert_eq!(doc.is_checked(checkbox), toggle.value());
    assert_eq!(doc.has_attribute(toggle.host(), "checked"), toggle.value());
}

// =========================================================================
// State
// =========================================================================

#[test]
fn checked_reads_back_the_last_assignment() {
    let mut doc = Document::new();
    let (toggle, _) = mounted(&mut doc);

    for sequence in [
        vec![true],
        vec![false, false],
        vec![true, false, true],
        vec![true, true, false, false, true, false],
    ] {
        for value in &sequence {
            toggle.set_checked(*value);
            assert_eq!(toggle.checked(), *value);
            assert_eq!(toggle.value(), toggle.checked());
        }
        toggle.set_value(!sequence[sequence.len() - 1]);
        assert_eq!(toggle.checked(), !sequence[sequence.len() - 1]);
    }
}

#[test]
fn assignment_reaches_the_document_on_render() {
    let mut doc = Document::new();
    let (toggle, _) = mounted(&mut doc);

    toggle.set_checked(true);
    assert!(!doc.has_attribute(toggle.host(), "checked"));

    toggle.queue_render(&mut doc, false);
    assert_eq!(doc.flush_renders(), 1);
    assert_rendered(&doc, &toggle);
}

// =========================================================================
// Connection
// =========================================================================

#[test]
fn connection_seeds_value_from_the_checked_attribute_once() {
    init_tracing();
    let mut doc = Document::new();
    let root = doc.root();

    let with = ElementBuilder::new("x-toggle").flag("checked").build(&mut doc).unwrap();
    let without = ElementBuilder::new("x-toggle").build(&mut doc).unwrap();
    let on = ToggleSwitch::upgrade(&mut doc, with).unwrap();
    let off = ToggleSwitch::upgrade(&mut doc, without).unwrap();
    doc.append_child(root, with).unwrap();
    doc.append_child(root, without).unwrap();

    assert!(on.value());
    assert!(!off.value());

    // re-connection does not re-seed
    doc.remove(without).unwrap();
    doc.set_attribute(without, "checked", "").unwrap();
    doc.append_child(root, without).unwrap();
    assert!(!off.value());
}

#[test]
fn upgrade_of_connected_element_initializes_immediately() {
    let mut doc = Document::new();
    let root = doc.root();
    let host = ElementBuilder::new("x-toggle")
        .flag("checked")
        .flag("disabled")
        .build_into(&mut doc, root)
        .unwrap();

    let toggle = ToggleSwitch::upgrade(&mut doc, host).unwrap();
    assert!(toggle.value());
    assert!(toggle.is_disabled());
    assert_eq!(doc.attribute(host, "tabindex"), Some("0"));
    assert_eq!(doc.attribute(host, "role"), Some("checkbox"));

    doc.flush_renders();
    assert_rendered(&doc, &toggle);
}

#[test]
fn listeners_survive_reconnection() {
    let mut doc = Document::new();
    let (toggle, main) = mounted(&mut doc);
    let host = toggle.host();

    toggle.queue_render(&mut doc, false);
    doc.remove(host).unwrap();
    assert!(!doc.has_pending_render(host));

    doc.append_child(main, host).unwrap();
    doc.press_key(host, space()).unwrap();
    assert!(toggle.value());
    assert_eq!(doc.listener_count(host, EventType::KeyDown), 1);
}

// =========================================================================
// Keyboard
// =========================================================================

#[test]
fn space_toggles_value_and_attribute() {
    init_tracing();
    let mut doc = Document::new();
    let (toggle, _) = mounted(&mut doc);
    let host = toggle.host();

    let result = doc.press_key(host, space()).unwrap();
    assert!(toggle.value());
    assert!(doc.has_attribute(host, "checked"));
    assert!(result.default_prevented);
    assert!(result.propagation_stopped);
    // rendered synchronously
    assert_eq!(doc.pending_renders(), 0);
    assert_rendered(&doc, &toggle);

    doc.press_key(host, space()).unwrap();
    assert!(!toggle.value());
    assert!(!doc.has_attribute(host, "checked"));
}

#[test]
fn space_does_not_reach_ancestors() {
    let mut doc = Document::new();
    let (toggle, main) = mounted(&mut doc);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    doc.add_event_listener(main, EventType::KeyDown, move |_, event| {
        log.lock().push(event.keyboard().map(|k| k.key.code()));
    })
    .unwrap();

    doc.press_key(toggle.host(), space()).unwrap();
    doc.press_key(toggle.host(), KeyboardEvent::new(Key::Enter)).unwrap();
    assert_eq!(*seen.lock(), vec![Some("Enter".to_string())]);
}

#[test]
fn other_keys_are_ignored_and_propagate() {
    let mut doc = Document::new();
    let (toggle, _) = mounted(&mut doc);

    for key in [Key::Enter, Key::Tab, Key::Letter('x'), Key::ArrowRight] {
        let result = doc.press_key(toggle.host(), KeyboardEvent::new(key)).unwrap();
        assert!(!toggle.value());
        assert!(!result.default_prevented);
        assert!(!result.propagation_stopped);
        assert!(result.was_handled());
    }
}

#[test]
fn keydown_from_inside_reaches_the_host_handler() {
    let mut doc = Document::new();
    let (toggle, _) = mounted(&mut doc);
    let knob = toggle.part("knob").unwrap();

    doc.press_key(knob, space()).unwrap();
    assert!(toggle.value());
}

#[test]
fn disabled_ignores_every_key() {
    let mut doc = Document::new();
    let (toggle, _) = mounted(&mut doc);
    toggle.set_disabled(&mut doc, true);

    for key in [Key::Space, Key::Enter, Key::Letter('a')] {
        let result = doc.press_key(toggle.host(), KeyboardEvent::new(key)).unwrap();
        assert!(!toggle.value());
        assert!(!result.default_prevented);
    }

    toggle.set_checked(true);
    doc.press_key(toggle.host(), space()).unwrap();
    assert!(toggle.value());
}

// =========================================================================
// Pointer and change events
// =========================================================================

#[test]
fn change_event_copies_the_checkbox_state() {
    let mut doc = Document::new();
    let (toggle, _) = mounted(&mut doc);
    let checkbox = toggle.part(VALUE_HOLDER).unwrap();

    doc.set_checked(checkbox, true).unwrap();
    doc.dispatch_event(checkbox, EventKind::Change).unwrap();
    assert!(toggle.value());

    // the host attribute follows on the next batched render
    assert!(doc.has_pending_render(toggle.host()));
    doc.flush_renders();
    assert_rendered(&doc, &toggle);
}

#[test]
fn clicking_the_label_text_toggles() {
    init_tracing();
    let mut doc = Document::new();
    let root = doc.root();
    let host = ElementBuilder::new("x-toggle")
        .child(elements::span().attr("slot", "on").text("On"))
        .child(elements::span().attr("slot", "off").text("Off"))
        .build_into(&mut doc, root)
        .unwrap();
    let toggle = ToggleSwitch::upgrade(&mut doc, host).unwrap();
    let off_text = doc.element_children(host)[1];
    let toggled = Arc::new(Mutex::new(Vec::new()));
    let log = toggled.clone();
    toggle.toggled().connect(move |value| log.lock().push(*value));

    doc.click(off_text).unwrap();
    assert!(toggle.value());
    doc.flush_renders();
    assert!(doc.has_attribute(host, "checked"));

    let track = toggle.part("track").unwrap();
    doc.click(track).unwrap();
    assert!(!toggle.value());
    assert_eq!(*toggled.lock(), vec![true, false]);
}

#[test]
fn disabled_click_is_reverted() {
    let mut doc = Document::new();
    let (toggle, _) = mounted(&mut doc);
    let checkbox = toggle.part(VALUE_HOLDER).unwrap();
    doc.set_attribute(toggle.host(), "disabled", "").unwrap();

    doc.click(toggle.part("knob").unwrap()).unwrap();
    assert!(!toggle.value());
    assert!(!doc.is_checked(checkbox));
}

#[test]
fn batched_renders_coalesce() {
    let mut doc = Document::new();
    let (toggle, _) = mounted(&mut doc);
    let track = toggle.part("track").unwrap();
    let coalesced = doc.coalesced_renders();

    for _ in 0..3 {
        doc.click(track).unwrap();
    }
    toggle.queue_render(&mut doc, false);

    assert_eq!(doc.flush_renders(), 1);
    assert_eq!(doc.coalesced_renders() - coalesced, 3);
    assert!(toggle.value());
    assert_rendered(&doc, &toggle);
}

// =========================================================================
// Styling
// =========================================================================

fn styled(options: &ToggleOptions) -> (Document, Arc<dyn Component>, StyleEngine) {
    let mut registry = Registry::new();
    registry.define(options.blueprint().unwrap()).unwrap();

    let mut doc = Document::new();
    let root = doc.root();
    let host = ElementBuilder::new(&options.tag)
        .child(elements::span().attr("slot", "on").text("On"))
        .child(elements::span().attr("slot", "off").text("Off"))
        .build_into(&mut doc, root)
        .unwrap();
    assert_eq!(registry.upgrade(&mut doc, root).unwrap(), 1);
    doc.flush_renders();

    let toggle = doc.component(host).unwrap();
    let engine = registry.style_engine();
    (doc, toggle, engine)
}

#[test]
fn slots_show_exactly_one_state() {
    let (mut doc, toggle, engine) = styled(&ToggleOptions::default());
    let host = toggle.host();
    let on = doc.element_children(host)[0];
    let off = doc.element_children(host)[1];

    assert!(!engine.is_displayed(&doc, on));
    assert!(engine.is_displayed(&doc, off));

    doc.press_key(host, space()).unwrap();
    assert!(engine.is_displayed(&doc, on));
    assert!(!engine.is_displayed(&doc, off));
}

#[test]
fn knob_moves_and_track_recolors_when_on() {
    let (mut doc, toggle, engine) = styled(&ToggleOptions::default());
    let host = toggle.host();
    let knob = part(&doc, host, "knob");
    let track = part(&doc, host, "track");

    assert_eq!(engine.computed_length(&doc, knob, "left").unwrap(), Some(0.0));
    assert_eq!(
        engine.computed_value(&doc, track, "background").unwrap().as_deref(),
        Some("lightgray")
    );

    doc.press_key(host, space()).unwrap();
    assert_eq!(engine.computed_length(&doc, knob, "left").unwrap(), Some(24.0));
    assert_eq!(
        engine.computed_value(&doc, knob, "background").unwrap().as_deref(),
        Some("limegreen")
    );
    assert_eq!(
        engine.computed_value(&doc, track, "background").unwrap().as_deref(),
        Some("lightgray")
    );
}

#[test]
fn knob_size_override_changes_track_height() {
    let (doc, toggle, engine) = styled(&ToggleOptions::default());
    let track = part(&doc, toggle.host(), "track");
    assert_eq!(engine.computed_length(&doc, track, "height").unwrap(), Some(8.0));
    assert_eq!(engine.computed_length(&doc, track, "borderRadius").unwrap(), Some(4.0));

    let options = ToggleOptions::default().with_token("--toggle-knob-size", "40px");
    let (doc, toggle, engine) = styled(&options);
    let track = part(&doc, toggle.host(), "track");
    assert_eq!(engine.computed_length(&doc, track, "height").unwrap(), Some(24.0));
    assert_eq!(engine.computed_length(&doc, track, "borderRadius").unwrap(), Some(12.0));
}

#[test]
fn disabled_host_is_de_emphasized() {
    let (mut doc, toggle, engine) = styled(&ToggleOptions::default().with_tag("my-switch"));
    let host = toggle.host();
    assert_eq!(engine.computed_value(&doc, host, "opacity").unwrap(), None);

    doc.set_attribute(host, "disabled", "").unwrap();
    assert_eq!(engine.computed_value(&doc, host, "opacity").unwrap().as_deref(), Some("0.5"));
    assert_eq!(
        engine.computed_value(&doc, host, "pointerEvents").unwrap().as_deref(),
        Some("none")
    );
}

#[test]
fn emitted_css_carries_every_token() {
    let options = ToggleOptions::default()
        .with_tag("my-switch")
        .with_token("toggle-on-color", "teal");
    let blueprint = options.blueprint().unwrap();

    let global = blueprint.global_css();
    assert!(global.starts_with(":root {\n  --toggle-track-color: lightgray;\n"));
    assert!(global.contains("  --toggle-on-color: teal;\n"));
    assert!(global.contains("my-switch[disabled] {"));
    assert!(!global.contains(":host"));
    for (name, _) in horizon_toggle::widget::TOKEN_DEFAULTS {
        assert!(global.contains(&format!("--{name}:")), "missing --{name}");
    }

    let component = blueprint.component_css();
    assert!(component.contains(":host::part(container) {"));
    assert!(component.contains(
        "input:not(:checked) + * + * > [name=on], input:checked + * + * > [name=off] {\n  display: none;\n}"
    ));
}

fn part(doc: &Document, host: NodeId, name: &str) -> NodeId {
    let shadow = doc.shadow_root(host).unwrap();
    horizon_toggle_core::Parts::collect(doc, shadow).get(name).unwrap()
}

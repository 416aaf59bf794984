//! Toggle switch walkthrough.
//!
//! Registers the toggle under a custom tag with a brand color, mounts two
//! instances, drives them with clicks and key presses and prints the
//! resulting state and CSS.
//!
//! Run with: cargo run -p horizon-toggle --example toggle_demo
//!
//! Set `RUST_LOG=horizon_toggle=debug` to watch the component log.

use horizon_toggle::prelude::*;
use horizon_toggle::widget::VALUE_HOLDER;
use horizon_toggle_core::dom::ElementBuilder;

const OPTIONS: &str = r#"
tag = "demo-toggle"

[tokens]
toggle-on-color = "teal"
toggle-knob-size = "32px"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "horizon_toggle=info".into()),
        )
        .init();

    let options = ToggleOptions::from_toml_str(OPTIONS)?;
    let mut registry = Registry::new();
    registry.define(options.blueprint()?)?;

    let mut doc = Document::new();
    let root = doc.root();
    let wifi = ElementBuilder::new(&options.tag)
        .child(elements::span().attr("slot", "on").text("Wi-Fi on"))
        .child(elements::span().attr("slot", "off").text("Wi-Fi off"))
        .build_into(&mut doc, root)?;
    let airplane = ElementBuilder::new(&options.tag)
        .flag("checked")
        .flag("disabled")
        .build_into(&mut doc, root)?;

    let upgraded = registry.upgrade(&mut doc, root)?;
    doc.flush_renders();
    println!("upgraded {upgraded} element(s)");

    let engine = registry.style_engine();
    let report = |doc: &Document, label: &str, host: NodeId| -> Result<()> {
        let knob = doc
            .component(host)
            .and_then(|_| doc.shadow_root(host))
            .and_then(|shadow| horizon_toggle_core::Parts::collect(doc, shadow).get("knob"));
        let left = match knob {
            Some(knob) => engine.computed_value(doc, knob, "left")?,
            None => None,
        };
        println!(
            "{label:>9}: checked={} disabled={} knob.left={}",
            doc.has_attribute(host, "checked"),
            doc.has_attribute(host, "disabled"),
            left.as_deref().unwrap_or("-"),
        );
        Ok(())
    };

    report(&doc, "wifi", wifi)?;
    report(&doc, "airplane", airplane)?;

    println!("\n-- click the wifi label text");
    let off_text = doc.element_children(wifi)[1];
    doc.click(off_text)?;
    doc.flush_renders();
    report(&doc, "wifi", wifi)?;

    println!("\n-- press Space on both");
    doc.press_key(wifi, KeyboardEvent::new(Key::Space))?;
    doc.press_key(airplane, KeyboardEvent::new(Key::Space))?;
    report(&doc, "wifi", wifi)?;
    report(&doc, "airplane", airplane)?;

    println!("\n-- click the disabled checkbox directly");
    let checkbox = doc
        .shadow_root(airplane)
        .and_then(|shadow| horizon_toggle_core::Parts::collect(&doc, shadow).get(VALUE_HOLDER));
    if let Some(checkbox) = checkbox {
        doc.click(checkbox)?;
        println!("airplane checkbox still checked: {}", doc.is_checked(checkbox));
    }

    println!("\n-- document CSS\n{}", registry.global_css());
    if let Some(blueprint) = registry.get(&options.tag) {
        println!("-- shadow CSS\n{}", blueprint.component_css());
    }
    Ok(())
}

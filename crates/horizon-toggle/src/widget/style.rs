//! Style specification and design tokens of the toggle switch.

use horizon_toggle_style::{Declarations, Result, StyleSheet, TokenSet, var, var_scaled};

/// Default values of every toggle token, in definition order.
pub const TOKEN_DEFAULTS: &[(&str, &str)] = &[
    ("toggle-track-color", "lightgray"),
    ("toggle-track-on-color", "var(--toggle-track-color)"),
    ("toggle-off-color", "gray"),
    ("toggle-on-color", "limegreen"),
    ("toggle-knob-size", "24px"),
    ("toggle-knob-radius", "calc(var(--toggle-knob-size) * 0.5)"),
    ("toggle-transition", "ease-in-out 0.2s"),
    ("toggle-track-width", "32px"),
    ("toggle-track-inset", "8px"),
    (
        "toggle-track-height",
        "calc(var(--toggle-knob-size) - calc(var(--toggle-track-inset) * 2))",
    ),
    ("toggle-track-radius", "calc(var(--toggle-track-height) * 0.5)"),
    ("toggle-disabled-opacity", "0.5"),
    (
        "toggle-knob-shadow",
        "inset 0 1px 1px #fff8, inset 0 -1px 1px #0004, 0 2px 4px #0006",
    ),
    ("toggle-track-shadow", "inset 0 1px 2px #0004"),
    ("toggle-gap", "8px"),
];

/// The default token record.
pub fn default_tokens() -> TokenSet {
    TOKEN_DEFAULTS.iter().copied().collect()
}

/// Rules adopted by every toggle's shadow root.
pub fn component_sheet() -> Result<StyleSheet> {
    StyleSheet::component()
        .rule(":host", Declarations::new().set("display", "inline-block"))?
        .rule(
            ":host label",
            Declarations::new()
                .set("display", "inline-flex")
                .set("gap", var("toggle-gap"))
                .set("alignItems", "center"),
        )?
        .rule(
            ":host::part(container)",
            Declarations::new()
                .set("display", "block")
                .set("height", var("toggle-knob-size"))
                .set("lineHeight", var("toggle-knob-size"))
                .set("position", "relative"),
        )?
        .rule(
            "[part=track]",
            Declarations::new()
                .set("transition", var("toggle-transition"))
                .set("margin", var("toggle-track-inset"))
                .set("height", var("toggle-track-height"))
                .set("width", var("toggle-track-width"))
                .set("borderRadius", var("toggle-track-radius"))
                .set("background", var("toggle-track-color"))
                .set("boxShadow", var("toggle-track-shadow")),
        )?
        .rule(
            "input:checked + div > [part=track]",
            Declarations::new().set("background", var("toggle-track-on-color")),
        )?
        .rule(
            "[part=knob]",
            Declarations::new()
                .set("transition", var("toggle-transition"))
                .set("height", var("toggle-knob-size"))
                .set("width", var("toggle-knob-size"))
                .set("borderRadius", var("toggle-knob-radius"))
                .set("top", "0")
                .set("left", "0")
                .set("position", "absolute")
                .set("background", var("toggle-off-color"))
                .set("boxShadow", var("toggle-knob-shadow")),
        )?
        .rule(
            "input:checked + div > [part=knob]",
            Declarations::new()
                .set(
                    "left",
                    format!(
                        "calc({} + {} - {})",
                        var("toggle-track-width"),
                        var_scaled("toggle-track-inset", 200),
                        var("toggle-knob-size")
                    ),
                )
                .set("background", var("toggle-on-color")),
        )?
        .rule(
            "input:not(:checked) + * + * > [name=on], input:checked + * + * > [name=off]",
            Declarations::new().set("display", "none"),
        )
}

/// Document-level rules: the token record on `:root` and the disabled
/// de-emphasis of the host.
pub fn global_sheet(tokens: &TokenSet) -> Result<StyleSheet> {
    StyleSheet::global()
        .rule(":root", tokens.to_declarations())?
        .rule(
            ":host[disabled]",
            Declarations::new()
                .set("pointerEvents", "none")
                .set("opacity", var("toggle-disabled-opacity")),
        )
}

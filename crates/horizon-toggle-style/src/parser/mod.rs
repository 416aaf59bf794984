//! CSS parsing module.

mod css_parser;

pub use css_parser::{parse_css, parse_custom_properties, parse_declaration_list, parse_selector_list};

use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css"))
}

/// Returns the contents of `assets/tailwind.css`.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS.get_or_init(|| load_text("tailwind.css"))
}

/// Returns the SVG favicon as a `data:` URI.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI.get_or_init(|| svg_data_uri(&load_text("favicon.svg")))
}

fn load_text(name: &str) -> String {
    let asset = load_asset(name);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {name} is not valid UTF-8"))
}

fn load_asset(name: &str) -> Cow<'static, [u8]> {
    EmbeddedAssets::get(name.trim_start_matches('/'))
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {name}"))
}

/// SVG is text, so it can ride in a data URI with only the reserved characters escaped.
fn svg_data_uri(svg: &str) -> String {
    let mut encoded = String::with_capacity(svg.len());
    for ch in svg.trim().chars() {
        match ch {
            '"' => encoded.push('\''),
            '%' => encoded.push_str("%25"),
            '#' => encoded.push_str("%23"),
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            '\n' | '\r' => encoded.push(' '),
            _ => encoded.push(ch),
        }
    }
    format!("data:image/svg+xml,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheets_are_embedded() {
        assert!(tailwind_css().contains(".bg-red-600"));
        assert!(tailwind_css().contains(".bg-gray-300"));
        assert!(!main_css().is_empty());
    }

    #[test]
    fn svg_uri_escapes_reserved_characters() {
        let uri = svg_data_uri("<svg fill=\"#fff\">\n</svg>");
        assert_eq!(uri, "data:image/svg+xml,%3Csvg fill='%23fff'%3E %3C/svg%3E");
        assert!(favicon_data_uri().starts_with("data:image/svg+xml,"));
    }
}

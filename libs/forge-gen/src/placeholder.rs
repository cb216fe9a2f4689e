//! Placeholder image generation
//!
//! Emits a self-contained SVG document: a filled rectangle with centered
//! label text, defaulting to the `{width}×{height}` dimensions. Raster
//! output is a rendering concern and stays out of this crate.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Placeholder image parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderSpec {
    pub width: u32,
    pub height: u32,
    /// Background fill, `#rgb` or `#rrggbb`
    pub background: String,
    /// Text fill, `#rgb` or `#rrggbb`
    pub foreground: String,
    /// Label text; empty means the dimensions
    pub text: Option<String>,
}

impl Default for PlaceholderSpec {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            background: "#cccccc".to_string(),
            foreground: "#333333".to_string(),
            text: None,
        }
    }
}

/// Build the SVG document for a placeholder spec
///
/// # Examples
/// ```
/// use forge_gen::placeholder::{build_svg, PlaceholderSpec};
///
/// let svg = build_svg(&PlaceholderSpec::default()).unwrap();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("600×400"));
/// ```
pub fn build_svg(spec: &PlaceholderSpec) -> Result<String> {
    validate_color(&spec.background)?;
    validate_color(&spec.foreground)?;

    let width = spec.width.max(1);
    let height = spec.height.max(1);
    let label = match spec.text.as_deref() {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => format!("{}×{}", width, height),
    };
    let font_size = (width.min(height) / 5).max(10);

    Ok(format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<rect width="100%" height="100%" fill="{bg}"/>"#,
            r#"<text x="50%" y="50%" fill="{fg}" font-family="sans-serif" font-size="{fs}" "#,
            r#"text-anchor="middle" dominant-baseline="middle">{label}</text>"#,
            "</svg>"
        ),
        w = width,
        h = height,
        bg = spec.background,
        fg = spec.foreground,
        fs = font_size,
        label = escape_xml(&label),
    ))
}

/// Escape the five XML-significant characters
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

fn validate_color(color: &str) -> Result<()> {
    let digits = color.strip_prefix('#').ok_or_else(|| bad_color(color))?;
    if !(digits.len() == 3 || digits.len() == 6) {
        return Err(bad_color(color));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad_color(color));
    }
    Ok(())
}

fn bad_color(color: &str) -> GenError {
    GenError::invalid_input(format!(
        "'{}' is not a #rgb or #rrggbb color",
        color
    ))
}

//! Stateless constructors for single Yaplot commands.
//!
//! Each function renders one line of the Yaplot scene-file grammar and
//! returns it terminated with a newline:
//!
//! | Mnemonic | Command |
//! |----------|---------------------------------|
//! | `l`      | line segment                    |
//! | `t`      | text label                      |
//! | `c`      | circle (point marker)           |
//! | `s`      | arrow                           |
//! | `p`      | polygon                         |
//! | `@`      | select color / define palette   |
//! | `r`      | point and line size             |
//! | `y`      | drawing layer                   |
//! | `a`      | arrow style                     |
//!
//! A blank line ends the current page. The constructors perform no state
//! tracking; [`crate::palette`] and the stateful frame layer build on top
//! of them.

use crate::color::Rgb;

/// Renders coordinate components as fixed four-decimal fields.
///
/// Every component is followed by exactly one space, including the last,
/// so rendered fragments concatenate without separator bookkeeping.
pub fn format_coords(v: &[f64]) -> String {
    let mut out = String::new();
    for x in v {
        out.push_str(&format!("{:.4} ", x));
    }
    out
}

/// Renders a line segment from `start` to `end`.
pub fn line(start: &[f64], end: &[f64]) -> String {
    format!("l {}{}\n", format_coords(start), format_coords(end))
}

/// Renders a text label anchored at `position`.
pub fn text(position: &[f64], label: &str) -> String {
    format!("t {} {}\n", format_coords(position), label)
}

/// Renders a circle marker at `center`.
pub fn circle(center: &[f64]) -> String {
    format!("c {}\n", format_coords(center))
}

/// Renders an arrow from `start` to `end`.
pub fn arrow(start: &[f64], end: &[f64]) -> String {
    format!("s {}{}\n", format_coords(start), format_coords(end))
}

/// Renders a polygon over `vertices`, prefixed with the vertex count.
pub fn polygon<V: AsRef<[f64]>>(vertices: &[V]) -> String {
    let mut out = format!("p {} ", vertices.len());
    for v in vertices {
        out.push_str(&format_coords(v.as_ref()));
    }
    out.push('\n');
    out
}

/// Renders a switch to palette slot `index` for subsequent primitives.
pub fn color(index: u32) -> String {
    format!("@ {}\n", index)
}

/// Renders a palette definition for slot `index`.
///
/// Channels are scaled from `0.0..=maxval` onto integer `0..=255` with
/// truncation toward zero.
pub fn set_palette(index: u32, rgb: impl Into<Rgb>, maxval: f64) -> String {
    let rgb = rgb.into();
    let r = (rgb.r * 255.0 / maxval) as i64;
    let g = (rgb.g * 255.0 / maxval) as i64;
    let b = (rgb.b * 255.0 / maxval) as i64;
    format!("@ {} {} {} {}\n", index, r, g, b)
}

/// Renders a point and line size change.
///
/// Debug formatting keeps the decimal point on integral values, so a
/// size of one renders as `r 1.0` rather than `r 1`.
pub fn size(value: f64) -> String {
    format!("r {:?}\n", value)
}

/// Renders a switch to drawing layer `index`.
pub fn layer(index: u32) -> String {
    format!("y {}\n", index)
}

/// Renders an arrow style change.
pub fn arrow_type(style: u32) -> String {
    format!("a {}\n", style)
}

/// Renders a page break.
pub fn new_page() -> String {
    "\n".to_string()
}

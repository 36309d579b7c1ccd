//! Property tests for the command grammar.
//!
//! These tests pin down the formatting invariants every emitted command
//! obeys: fixed four-decimal coordinate fields, one trailing space per
//! component, newline-terminated lines, and palette channels clamped to
//! the byte range by construction.

use proptest::prelude::*;
use yaplotkit_core::commands;
use yaplotkit_core::palette;

fn coord_vec() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 0..8)
}

fn byte_triple() -> impl Strategy<Value = (u8, u8, u8)> {
    any::<(u8, u8, u8)>()
}

proptest! {
    /// Every component renders as a parseable number with exactly four
    /// fractional digits and exactly one trailing space.
    #[test]
    fn coords_render_fixed_fields(v in coord_vec()) {
        let s = commands::format_coords(&v);
        prop_assert_eq!(s.matches(' ').count(), v.len());
        if !v.is_empty() {
            prop_assert!(s.ends_with(' '));
        }
        let tokens: Vec<&str> = s.split_whitespace().collect();
        prop_assert_eq!(tokens.len(), v.len());
        for tok in tokens {
            prop_assert!(tok.parse::<f64>().is_ok(), "unparseable token {}", tok);
            let frac = tok.rsplit('.').next().unwrap();
            prop_assert_eq!(frac.len(), 4, "token {} lacks four decimals", tok);
        }
    }

    /// A line command carries both endpoints and nothing else.
    #[test]
    fn line_carries_both_endpoints(a in coord_vec(), b in coord_vec()) {
        let s = commands::line(&a, &b);
        prop_assert!(s.starts_with("l "));
        prop_assert!(s.ends_with('\n'));
        let tokens = s.trim_end().split_whitespace().count();
        prop_assert_eq!(tokens, 1 + a.len() + b.len());
    }

    /// A polygon command leads with its vertex count.
    #[test]
    fn polygon_leads_with_vertex_count(
        verts in prop::collection::vec(prop::array::uniform3(-100.0..100.0f64), 0..6)
    ) {
        let s = commands::polygon(&verts);
        let prefix = format!("p {} ", verts.len());
        prop_assert!(s.starts_with(&prefix));
        prop_assert!(s.ends_with('\n'));
    }

    /// Palette definitions stay in the integer byte range whenever the
    /// channels respect the declared maximum.
    #[test]
    fn set_palette_stays_in_byte_range(
        r in 0.0..=255.0f64,
        g in 0.0..=255.0f64,
        b in 0.0..=255.0f64,
        index in 0u32..100,
    ) {
        let s = commands::set_palette(index, (r, g, b), 255.0);
        let fields: Vec<&str> = s.trim_end().split(' ').collect();
        prop_assert_eq!(fields.len(), 5);
        prop_assert_eq!(fields[0], "@");
        prop_assert_eq!(fields[1].parse::<u32>().unwrap(), index);
        for field in &fields[2..] {
            let channel: i64 = field.parse().unwrap();
            prop_assert!((0..=255).contains(&channel), "channel {} out of range", channel);
        }
    }

    /// A gradation reproduces its endpoints exactly in the first and
    /// last slots.
    #[test]
    fn gradation_hits_endpoints_exactly(
        n in 2usize..12,
        from in byte_triple(),
        to in byte_triple(),
    ) {
        let block = palette::gradation_palettes(n, from, to, 10, 255.0).unwrap();
        let lines: Vec<&str> = block.lines().collect();
        prop_assert_eq!(lines.len(), n);
        let first = format!("@ 10 {} {} {}", from.0, from.1, from.2);
        let last = format!("@ {} {} {} {}", 10 + n - 1, to.0, to.1, to.2);
        prop_assert_eq!(lines[0], first.as_str());
        prop_assert_eq!(lines[n - 1], last.as_str());
    }

    /// Hue-sweep generators emit one definition per slot, all channels
    /// in the byte range.
    #[test]
    fn hue_generators_fill_requested_slots(n in 0usize..64) {
        for block in [
            palette::rainbow_palettes(n, 10),
            palette::random_palettes(n, 10),
        ] {
            let lines: Vec<&str> = block.lines().collect();
            prop_assert_eq!(lines.len(), n);
            for line in lines {
                let fields: Vec<&str> = line.split(' ').collect();
                prop_assert_eq!(fields[0], "@");
                for field in &fields[2..] {
                    let channel: i64 = field.parse().unwrap();
                    prop_assert!((0..=255).contains(&channel));
                }
            }
        }
    }
}

//! 3D text typesetting
//!
//! Glyphs are stroke polylines in a unit em box; typesetting turns each
//! stroke segment into an extruded bar, producing a plain triangle list the
//! court pipeline can draw. A richer glyph table can be fetched as JSON at
//! runtime; the built-in table covers the score label and the demo string,
//! and stays as the fallback when the fetch fails.

use std::collections::HashMap;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::vertex::Vertex;

/// A glyph: polyline strokes on a 0..1 em grid, plus its advance width
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glyph {
    pub strokes: Vec<Vec<[f32; 2]>>,
    pub advance: f32,
}

/// A stroke font: glyph table keyed by character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Font {
    pub glyphs: HashMap<char, Glyph>,
}

impl Font {
    /// Look up a glyph; letters fall back to their uppercase form.
    /// Unknown characters return None and are skipped by the typesetter.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs
            .get(&c)
            .or_else(|| self.glyphs.get(&c.to_ascii_uppercase()))
    }

    /// Built-in fallback font
    pub fn builtin() -> Self {
        let mut glyphs = HashMap::new();
        let mut put = |c: char, strokes: Vec<Vec<[f32; 2]>>| {
            glyphs.insert(
                c,
                Glyph {
                    strokes,
                    advance: 0.8,
                },
            );
        };

        put('0', vec![vec![
            [0.0, 0.0],
            [0.6, 0.0],
            [0.6, 1.0],
            [0.0, 1.0],
            [0.0, 0.0],
        ]]);
        put('1', vec![
            vec![[0.3, 0.0], [0.3, 1.0]],
            vec![[0.15, 0.85], [0.3, 1.0]],
        ]);
        put('2', vec![vec![
            [0.0, 1.0],
            [0.6, 1.0],
            [0.6, 0.5],
            [0.0, 0.5],
            [0.0, 0.0],
            [0.6, 0.0],
        ]]);
        put('3', vec![
            vec![[0.0, 1.0], [0.6, 1.0], [0.6, 0.0], [0.0, 0.0]],
            vec![[0.15, 0.5], [0.6, 0.5]],
        ]);
        put('4', vec![
            vec![[0.0, 1.0], [0.0, 0.5], [0.6, 0.5]],
            vec![[0.6, 1.0], [0.6, 0.0]],
        ]);
        put('5', vec![vec![
            [0.6, 1.0],
            [0.0, 1.0],
            [0.0, 0.5],
            [0.6, 0.5],
            [0.6, 0.0],
            [0.0, 0.0],
        ]]);
        put('6', vec![vec![
            [0.6, 1.0],
            [0.0, 1.0],
            [0.0, 0.0],
            [0.6, 0.0],
            [0.6, 0.5],
            [0.0, 0.5],
        ]]);
        put('7', vec![vec![[0.0, 1.0], [0.6, 1.0], [0.3, 0.0]]]);
        put('8', vec![
            vec![[0.0, 0.0], [0.6, 0.0], [0.6, 1.0], [0.0, 1.0], [0.0, 0.0]],
            vec![[0.0, 0.5], [0.6, 0.5]],
        ]);
        put('9', vec![vec![
            [0.6, 0.5],
            [0.0, 0.5],
            [0.0, 1.0],
            [0.6, 1.0],
            [0.6, 0.0],
            [0.0, 0.0],
        ]]);
        put(':', vec![
            vec![[0.3, 0.25], [0.3, 0.35]],
            vec![[0.3, 0.65], [0.3, 0.75]],
        ]);
        put('-', vec![vec![[0.1, 0.5], [0.5, 0.5]]]);
        put(',', vec![vec![[0.3, 0.1], [0.2, -0.1]]]);
        put('!', vec![
            vec![[0.3, 1.0], [0.3, 0.3]],
            vec![[0.3, 0.1], [0.3, 0.0]],
        ]);
        put('C', vec![vec![[0.6, 1.0], [0.0, 1.0], [0.0, 0.0], [0.6, 0.0]]]);
        put('E', vec![
            vec![[0.6, 1.0], [0.0, 1.0], [0.0, 0.0], [0.6, 0.0]],
            vec![[0.0, 0.5], [0.4, 0.5]],
        ]);
        put('G', vec![vec![
            [0.6, 1.0],
            [0.0, 1.0],
            [0.0, 0.0],
            [0.6, 0.0],
            [0.6, 0.4],
            [0.35, 0.4],
        ]]);
        put('H', vec![
            vec![[0.0, 0.0], [0.0, 1.0]],
            vec![[0.6, 0.0], [0.6, 1.0]],
            vec![[0.0, 0.5], [0.6, 0.5]],
        ]);
        put('L', vec![vec![[0.0, 1.0], [0.0, 0.0], [0.6, 0.0]]]);
        put('N', vec![vec![[0.0, 0.0], [0.0, 1.0], [0.6, 0.0], [0.6, 1.0]]]);
        put('O', vec![vec![
            [0.0, 0.0],
            [0.6, 0.0],
            [0.6, 1.0],
            [0.0, 1.0],
            [0.0, 0.0],
        ]]);
        put('P', vec![vec![
            [0.0, 0.0],
            [0.0, 1.0],
            [0.6, 1.0],
            [0.6, 0.5],
            [0.0, 0.5],
        ]]);
        put('R', vec![
            vec![[0.0, 0.0], [0.0, 1.0], [0.6, 1.0], [0.6, 0.5], [0.0, 0.5]],
            vec![[0.2, 0.5], [0.6, 0.0]],
        ]);
        put('S', vec![vec![
            [0.6, 1.0],
            [0.0, 1.0],
            [0.0, 0.5],
            [0.6, 0.5],
            [0.6, 0.0],
            [0.0, 0.0],
        ]]);
        // Space: advance only
        put(' ', Vec::new());

        Self { glyphs }
    }
}

/// Typesetting parameters, mirroring the usual extruded-text knobs
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Em height in world units
    pub size: f32,
    /// Extrusion depth
    pub depth: f32,
    /// Extra outset on each stroke
    pub bevel: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 1.0,
            depth: 0.2,
            bevel: 0.02,
        }
    }
}

/// Stroke half-width in em units, before bevel
const STROKE_HALF: f32 = 0.06;

/// Total advance width of a typeset string in world units
pub fn measure(text: &str, font: &Font, style: &TextStyle) -> f32 {
    text.chars()
        .filter_map(|c| font.glyph(c))
        .map(|g| g.advance * style.size)
        .sum()
}

/// Typeset a string into a triangle list in the XY plane, extruded toward +Z.
/// The baseline starts at the origin and runs along +X. Unknown characters
/// are skipped without advancing.
pub fn typeset(text: &str, font: &Font, style: &TextStyle, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let half = (STROKE_HALF + style.bevel) * style.size;
    let mut pen_x = 0.0;

    for c in text.chars() {
        let Some(glyph) = font.glyph(c) else {
            continue;
        };
        for stroke in &glyph.strokes {
            for pair in stroke.windows(2) {
                let a = Vec2::new(pen_x + pair[0][0] * style.size, pair[0][1] * style.size);
                let b = Vec2::new(pen_x + pair[1][0] * style.size, pair[1][1] * style.size);
                emit_bar(&mut vertices, a, b, half, style.depth, color);
            }
        }
        pen_x += glyph.advance * style.size;
    }

    vertices
}

/// Emit one extruded bar covering the segment a→b, with square end caps
fn emit_bar(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, half: f32, depth: f32, color: [f32; 4]) {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let perp = Vec2::new(-dir.y, dir.x);

    // Extend the segment by the half-width so joined strokes overlap cleanly
    let a = a - dir * half;
    let b = b + dir * half;

    let corner = |p: Vec2, side: f32, z: f32| -> Vec3 {
        let q = p + perp * (side * half);
        Vec3::new(q.x, q.y, z)
    };

    // Front/back rectangles
    let quads: [(Vec3, [Vec3; 4]); 6] = [
        // Front face (+Z)
        (
            Vec3::Z,
            [
                corner(a, -1.0, depth),
                corner(b, -1.0, depth),
                corner(b, 1.0, depth),
                corner(a, 1.0, depth),
            ],
        ),
        // Back face (-Z)
        (
            Vec3::NEG_Z,
            [
                corner(a, 1.0, 0.0),
                corner(b, 1.0, 0.0),
                corner(b, -1.0, 0.0),
                corner(a, -1.0, 0.0),
            ],
        ),
        // Side walls along the segment
        (
            Vec3::new(perp.x, perp.y, 0.0),
            [
                corner(a, 1.0, depth),
                corner(b, 1.0, depth),
                corner(b, 1.0, 0.0),
                corner(a, 1.0, 0.0),
            ],
        ),
        (
            Vec3::new(-perp.x, -perp.y, 0.0),
            [
                corner(a, -1.0, 0.0),
                corner(b, -1.0, 0.0),
                corner(b, -1.0, depth),
                corner(a, -1.0, depth),
            ],
        ),
        // End caps
        (
            Vec3::new(-dir.x, -dir.y, 0.0),
            [
                corner(a, -1.0, 0.0),
                corner(a, -1.0, depth),
                corner(a, 1.0, depth),
                corner(a, 1.0, 0.0),
            ],
        ),
        (
            Vec3::new(dir.x, dir.y, 0.0),
            [
                corner(b, 1.0, 0.0),
                corner(b, 1.0, depth),
                corner(b, -1.0, depth),
                corner(b, -1.0, 0.0),
            ],
        ),
    ];

    for (normal, [p0, p1, p2, p3]) in quads {
        out.push(Vertex::new(p0, normal, color));
        out.push(Vertex::new(p1, normal, color));
        out.push(Vertex::new(p2, normal, color));

        out.push(Vertex::new(p0, normal, color));
        out.push(Vertex::new(p2, normal, color));
        out.push(Vertex::new(p3, normal, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_label_and_demo_strings() {
        let font = Font::builtin();
        for c in "score : 0 - 9".chars() {
            assert!(font.glyph(c).is_some(), "missing glyph for {c:?}");
        }
        for c in "Hello, Pong!".chars() {
            assert!(font.glyph(c).is_some(), "missing glyph for {c:?}");
        }
    }

    #[test]
    fn test_digits_produce_geometry() {
        let font = Font::builtin();
        let style = TextStyle::default();
        for c in '0'..='9' {
            let verts = typeset(&c.to_string(), &font, &style, [1.0; 4]);
            assert!(!verts.is_empty(), "no geometry for {c}");
            // Whole triangles only
            assert_eq!(verts.len() % 3, 0);
        }
    }

    #[test]
    fn test_punctuation_and_space() {
        let font = Font::builtin();
        let style = TextStyle::default();
        assert!(!typeset(":", &font, &style, [1.0; 4]).is_empty());
        assert!(!typeset("-", &font, &style, [1.0; 4]).is_empty());

        // Space advances the pen without emitting geometry
        assert!(typeset(" ", &font, &style, [1.0; 4]).is_empty());
        assert!(measure(" ", &font, &style) > 0.0);
    }

    #[test]
    fn test_unknown_characters_skipped() {
        let font = Font::builtin();
        let style = TextStyle::default();
        assert!(typeset("~~~", &font, &style, [1.0; 4]).is_empty());

        // Unknown glyphs contribute neither geometry nor advance
        let with = typeset("1~1", &font, &style, [1.0; 4]);
        let without = typeset("11", &font, &style, [1.0; 4]);
        assert_eq!(with.len(), without.len());
    }

    #[test]
    fn test_measure_scales_with_size() {
        let font = Font::builtin();
        let small = TextStyle {
            size: 1.0,
            ..Default::default()
        };
        let big = TextStyle {
            size: 2.0,
            ..Default::default()
        };
        let w1 = measure("100", &font, &small);
        let w2 = measure("100", &font, &big);
        assert!((w2 - 2.0 * w1).abs() < 1e-5);
    }

    #[test]
    fn test_extrusion_depth_bounds() {
        let font = Font::builtin();
        let style = TextStyle {
            depth: 0.2,
            ..Default::default()
        };
        let verts = typeset("8", &font, &style, [1.0; 4]);
        for v in &verts {
            assert!(v.position[2] >= -1e-6 && v.position[2] <= 0.2 + 1e-6);
        }
    }

    #[test]
    fn test_shipped_glyph_table_covers_builtin() {
        // The table served at fonts/glyphs.json replaces the builtin font
        // wholesale, so it must parse and cover at least the builtin set
        let shipped: Font =
            serde_json::from_str(include_str!("../../fonts/glyphs.json")).unwrap();
        let builtin = Font::builtin();
        for c in builtin.glyphs.keys() {
            assert!(shipped.glyph(*c).is_some(), "shipped table missing {c:?}");
        }
        assert!(shipped.glyphs.len() >= builtin.glyphs.len());

        let style = TextStyle::default();
        assert!(!typeset("score : 1 - 0", &shipped, &style, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_font_json_round_trip() {
        let font = Font::builtin();
        let json = serde_json::to_string(&font).unwrap();
        let back: Font = serde_json::from_str(&json).unwrap();
        assert_eq!(back.glyphs.len(), font.glyphs.len());
        assert!(back.glyph('0').is_some());
    }
}

//! Fixed-width glyph bar rendering

/// Partial-fill glyphs ordered from thinnest to widest.
///
/// Index 6 is the "full cell" glyph. A cell may be rendered by more than one
/// code point in future glyph sets, so width is always counted in emitted
/// cells, never in bytes or code points.
const FILL_LEVELS: [&str; 7] = ["\u{258F}", "\u{258E}", "\u{258D}", "\u{258C}", "\u{258B}", "\u{258A}", "\u{2589}"];

/// Render `fraction` of `width` display cells as a bracketed glyph bar.
///
/// The fractional budget (`fraction * width`) is consumed one full cell at a
/// time left to right; the cell where the budget runs out gets a partial-fill
/// glyph, the rest are spaces. Out-of-range fractions are tolerated: negative
/// budgets render an empty bar, budgets above `width` render a full one.
pub fn render_bar(fraction: f64, width: usize) -> String {
    let mut out = String::with_capacity(width * 4 + 2);
    out.push('[');

    let mut remaining = fraction * width as f64;
    for _ in 0..width {
        if remaining > 0.0 {
            let index = ((remaining * 7.0).floor() as i64).clamp(0, 6) as usize;
            out.push_str(FILL_LEVELS[index]);
            remaining -= 1.0;
        } else {
            out.push(' ');
        }
    }

    out.push(']');
    out
}

//! TikZ picture rendering.

use polyqr_core::Polygon;

/// Renders one `tikzpicture` drawing every polygon with the `qrpoly`
/// style: filled, strokeless, even-odd rule, with the caller's style text
/// appended (e.g. corner rounding).
///
/// `size` is the edge length of one module; with `full_size` set it is
/// the edge length of the whole code instead, divided down inside a TikZ
/// math expression. Vertices map to `(x, -y)` so the code reads top-down
/// in TikZ's y-up coordinates.
pub(crate) fn render(
    polygons: &[Polygon],
    modules: usize,
    size: &str,
    style: &str,
    full_size: bool,
) -> String {
    let unit = if full_size {
        format!("{{({size})/{modules}}}")
    } else {
        size.to_string()
    };

    let mut lines = vec![format!(
        "\\begin{{tikzpicture}}[x={unit},y={unit},qrpoly/.style={{fill=black, draw=none, even odd rule, {style}}}]"
    )];

    for polygon in polygons {
        // Every ring becomes a closed sub-path of one draw command.
        let command = polygon
            .rings()
            .iter()
            .map(|ring| {
                ring.vertices()
                    .iter()
                    .map(|v| format!("({}, {})", v.x(), -v.y()))
                    .collect::<Vec<_>>()
                    .join(" -- ")
                    + " -- cycle"
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("  \\draw[qrpoly] {command};"));
    }

    lines.push("\\end{tikzpicture}%".to_string());
    lines.join("\n")
}

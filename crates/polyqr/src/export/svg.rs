//! SVG document and path-element rendering.

use svg::Document;
use svg::node::element::Path;

use polyqr_core::Polygon;

use super::path::PathEncoder;
use crate::color::Color;

/// The minimized `d` data of one merged path covering every polygon.
pub(crate) fn merged_path_data(polygons: &[Polygon]) -> String {
    let mut encoder = PathEncoder::minimized();
    polygons
        .iter()
        .map(|polygon| encoder.encode_polygon(polygon))
        .collect()
}

/// A path element rendering `d` under the even-odd fill rule.
fn path_element(d: String, fill: Option<&Color>) -> Path {
    let mut path = Path::new().set("fill-rule", "evenodd").set("d", d);
    if let Some(fill) = fill {
        path = path.set("fill", fill);
    }
    path
}

/// The single merged `<path>` element as text.
pub(crate) fn merged_path(polygons: &[Polygon], fill: Option<&Color>) -> String {
    path_element(merged_path_data(polygons), fill).to_string()
}

/// One standalone `<path>` element per component polygon, produced on
/// demand.
pub(crate) fn component_paths<'a>(
    polygons: &'a [Polygon],
    fill: Option<&'a Color>,
) -> impl Iterator<Item = String> + 'a {
    polygons.iter().map(move |polygon| {
        let d = PathEncoder::absolute().encode_polygon(polygon);
        path_element(d, fill).to_string()
    })
}

/// A complete SVG document wrapping the merged path, with a viewBox of
/// one unit per module.
pub(crate) fn document(modules: usize, polygons: &[Polygon], fill: Option<&Color>) -> String {
    Document::new()
        .set("viewBox", format!("0 0 {modules} {modules}"))
        .add(path_element(merged_path_data(polygons), fill))
        .to_string()
}

//! Integration tests for the QrCodePainter API
//!
//! These tests verify that the public API works and is usable.

use polyqr::{
    QrCodePainter,
    config::{AppConfig, StyleConfig},
};

#[test]
fn test_painter_api_exists() {
    let painter = QrCodePainter::new("https://example.org");
    assert!(painter.is_ok(), "Should encode a short message");
}

#[test]
fn test_tikz_output_shape() {
    let painter = QrCodePainter::new("HELLO WORLD").expect("Failed to encode message");
    let tikz = painter.tikz("1mm", "", false);

    assert!(tikz.starts_with("\\begin{tikzpicture}"));
    assert!(tikz.contains("\\draw[qrpoly]"));
    assert!(tikz.contains("even odd rule"));
    assert!(tikz.ends_with("\\end{tikzpicture}%"));
}

#[test]
fn test_full_size_mode() {
    let painter = QrCodePainter::new("HELLO WORLD").expect("Failed to encode message");
    let tikz = painter.tikz("30mm", "", true);
    let expected = format!("x={{(30mm)/{}}}", painter.modules());
    assert!(tikz.contains(&expected), "missing scaled unit in: {tikz}");
}

#[test]
fn test_svg_document_is_complete() {
    let painter = QrCodePainter::new("HELLO WORLD").expect("Failed to encode message");
    let svg = painter.svg();

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    let viewbox = format!("viewBox=\"0 0 {n} {n}\"", n = painter.modules());
    assert!(svg.contains(&viewbox));
    assert!(svg.contains("fill-rule=\"evenodd\""));
}

#[test]
fn test_svg_paths_is_restartable() {
    let painter = QrCodePainter::new("restartable").expect("Failed to encode message");

    let first: Vec<String> = painter.svg_paths().collect();
    let second: Vec<String> = painter.svg_paths().collect();

    assert!(!first.is_empty());
    assert_eq!(first, second, "Fresh iterators yield the same sequence");
}

#[test]
fn test_merged_path_matches_component_count() {
    let painter = QrCodePainter::new("42").expect("Failed to encode message");

    // Each component contributes one move per ring; the standalone paths
    // cover the same rings as the merged path.
    let merged = painter.svg_path();
    let moves = merged.matches(['M', 'm']).count();
    let ring_total: usize = painter
        .svg_paths()
        .map(|path| path.matches(['M', 'm']).count())
        .sum();
    assert_eq!(moves, ring_total);
}

#[test]
fn test_configured_fill_reaches_svg() {
    let config = AppConfig::new(StyleConfig::new(Some("black".to_string())));
    let painter =
        QrCodePainter::with_config("HELLO", config).expect("Failed to encode message");
    assert!(painter.svg().contains("fill=\"black\""));
}

#[test]
fn test_oversized_message_fails_cleanly() {
    // Far beyond the byte capacity of the largest QR version.
    let msg = "A".repeat(8000);
    let result = QrCodePainter::new(&msg);
    assert!(result.is_err(), "Should fail for an oversized message");
}

#[test]
fn test_painter_determinism() {
    let a = QrCodePainter::new("deterministic").expect("Failed to encode message");
    let b = QrCodePainter::new("deterministic").expect("Failed to encode message");
    assert_eq!(a.svg(), b.svg());
    assert_eq!(a.tikz("1pt", "", false), b.tikz("1pt", "", false));
}

//! Shortest-text path encoding.
//!
//! A ring becomes a move instruction, one axis-aligned line instruction
//! per further vertex, and a close instruction. Every instruction exists
//! in an absolute and a relative form; whichever renders shorter is
//! emitted, with ties going to the relative form.

use std::fmt;

use polyqr_core::geometry::Vertex;
use polyqr_core::{Polygon, Ring};

/// One rendering instruction of a path description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathOp {
    MoveAbs { x: i32, y: i32 },
    MoveRel { dx: i32, dy: i32 },
    HLineAbs { x: i32 },
    HLineRel { dx: i32 },
    VLineAbs { y: i32 },
    VLineRel { dy: i32 },
    Close,
}

impl fmt::Display for PathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOp::MoveAbs { x, y } => write!(f, "M{x} {y}"),
            PathOp::MoveRel { dx, dy } => write!(f, "m{dx} {dy}"),
            PathOp::HLineAbs { x } => write!(f, "H{x}"),
            PathOp::HLineRel { dx } => write!(f, "h{dx}"),
            PathOp::VLineAbs { y } => write!(f, "V{y}"),
            PathOp::VLineRel { dy } => write!(f, "v{dy}"),
            PathOp::Close => write!(f, "z"),
        }
    }
}

/// Encodes rings into minimal path text, tracking the reference point for
/// relative moves across rings.
pub(crate) struct PathEncoder {
    carry_moves: bool,
    prev: Option<Vertex>,
}

impl PathEncoder {
    /// An encoder emitting every move in absolute form, for standalone
    /// per-component paths.
    pub(crate) fn absolute() -> Self {
        Self {
            carry_moves: false,
            prev: None,
        }
    }

    /// An encoder that carries the move reference point across rings, for
    /// one merged path.
    pub(crate) fn minimized() -> Self {
        Self {
            carry_moves: true,
            prev: None,
        }
    }

    /// Encodes all rings of one polygon into a single path string, to be
    /// rendered under the even-odd fill rule.
    pub(crate) fn encode_polygon(&mut self, polygon: &Polygon) -> String {
        let mut ops = Vec::new();
        for ring in polygon.rings() {
            self.encode_ring(ring, &mut ops);
        }
        ops.iter().map(PathOp::to_string).collect()
    }

    fn encode_ring(&mut self, ring: &Ring, ops: &mut Vec<PathOp>) {
        let vertices = ring.vertices();
        let first = vertices[0];
        ops.push(move_op(self.prev, first));

        let (mut xp, mut yp) = (first.x(), first.y());
        for vertex in &vertices[1..] {
            let (x, y) = (vertex.x(), vertex.y());
            debug_assert!(x == xp || y == yp, "rings are rectilinear");
            ops.push(if y == yp {
                shorter(PathOp::HLineAbs { x }, PathOp::HLineRel { dx: x - xp })
            } else {
                shorter(PathOp::VLineAbs { y }, PathOp::VLineRel { dy: y - yp })
            });
            (xp, yp) = (x, y);
        }
        ops.push(PathOp::Close);

        // Close returns to the ring's first vertex; that is where the next
        // move starts from.
        if self.carry_moves {
            self.prev = Some(first);
        }
    }
}

fn move_op(prev: Option<Vertex>, to: Vertex) -> PathOp {
    let abs = PathOp::MoveAbs {
        x: to.x(),
        y: to.y(),
    };
    match prev {
        None => abs,
        Some(p) => shorter(
            abs,
            PathOp::MoveRel {
                dx: to.x() - p.x(),
                dy: to.y() - p.y(),
            },
        ),
    }
}

/// Relative wins ties.
fn shorter(abs: PathOp, rel: PathOp) -> PathOp {
    if rel.to_string().len() <= abs.to_string().len() {
        rel
    } else {
        abs
    }
}

#[cfg(test)]
mod tests {
    use polyqr_core::grid::Grid;
    use polyqr_core::polygons;

    use super::*;

    /// Parses a path string back into rings of absolute coordinates.
    pub(crate) fn parse_path(d: &str) -> Vec<Vec<(i32, i32)>> {
        fn read_num(chars: &[char], i: &mut usize) -> i32 {
            let begin = *i;
            if chars[*i] == '-' {
                *i += 1;
            }
            while *i < chars.len() && chars[*i].is_ascii_digit() {
                *i += 1;
            }
            chars[begin..*i]
                .iter()
                .collect::<String>()
                .parse()
                .expect("path numbers are integers")
        }

        let chars: Vec<char> = d.chars().collect();
        let mut rings = Vec::new();
        let mut current = Vec::new();
        let (mut x, mut y) = (0i32, 0i32);
        let mut start = (0i32, 0i32);
        let mut i = 0;
        while i < chars.len() {
            let cmd = chars[i];
            i += 1;
            match cmd {
                'M' | 'm' => {
                    let a = read_num(&chars, &mut i);
                    assert_eq!(chars[i], ' ');
                    i += 1;
                    let b = read_num(&chars, &mut i);
                    if cmd == 'M' {
                        (x, y) = (a, b);
                    } else {
                        (x, y) = (x + a, y + b);
                    }
                    start = (x, y);
                    current.push((x, y));
                }
                'H' => {
                    x = read_num(&chars, &mut i);
                    current.push((x, y));
                }
                'h' => {
                    x += read_num(&chars, &mut i);
                    current.push((x, y));
                }
                'V' => {
                    y = read_num(&chars, &mut i);
                    current.push((x, y));
                }
                'v' => {
                    y += read_num(&chars, &mut i);
                    current.push((x, y));
                }
                'z' => {
                    (x, y) = start;
                    rings.push(std::mem::take(&mut current));
                }
                other => panic!("unexpected path command {other:?}"),
            }
        }
        rings
    }

    pub(crate) fn ring_coords(polygons: &[Polygon]) -> Vec<Vec<(i32, i32)>> {
        polygons
            .iter()
            .flat_map(Polygon::rings)
            .map(|ring| ring.vertices().iter().map(|v| (v.x(), v.y())).collect())
            .collect()
    }

    fn encode_all(polygons: &[Polygon]) -> String {
        let mut encoder = PathEncoder::minimized();
        polygons
            .iter()
            .map(|polygon| encoder.encode_polygon(polygon))
            .collect()
    }

    #[test]
    fn test_single_cell_path() {
        let grid = Grid::from_fn(1, |_, _| true);
        let polygons = polygons(&grid).expect("valid grid");
        assert_eq!(encode_all(&polygons), "M0 0v1h1V0z");
    }

    #[test]
    fn test_ties_prefer_relative() {
        // V1 and v1 render equally long; the relative form must win.
        let d = encode_all(&polygons(&Grid::from_fn(1, |_, _| true)).expect("valid grid"));
        assert!(d.contains('v'));
        assert!(!d.contains("V1"));
    }

    #[test]
    fn test_absolute_encoder_restarts_every_move() {
        let grid = Grid::from_fn(3, |row, col| (row, col) == (0, 0) || (row, col) == (2, 2));
        let polygons = polygons(&grid).expect("valid grid");
        let paths: Vec<String> = polygons
            .iter()
            .map(|polygon| PathEncoder::absolute().encode_polygon(polygon))
            .collect();
        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert!(path.starts_with('M'), "expected absolute move: {path}");
        }
    }

    #[test]
    fn test_parse_back_recovers_rings() {
        let grid = Grid::from_fn(3, |row, col| !(row == 1 && col == 1));
        let polygons = polygons(&grid).expect("valid grid");
        assert_eq!(parse_path(&encode_all(&polygons)), ring_coords(&polygons));
    }

    #[test]
    fn test_empty_polygon_list_is_empty_path() {
        assert_eq!(encode_all(&[]), "");
    }
}

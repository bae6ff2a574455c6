use crate::math::{Point, Real};
use crate::partitioning::HashGrid;

/// Collapses vertices closer than `threshold` onto a single representative
/// vertex.
///
/// Returns the welded positions and, for each input vertex, the id of the
/// welded vertex it maps to. Inputs are scanned in order: a vertex within
/// `threshold` of an already-kept vertex maps to the first such neighbor,
/// otherwise it is kept as a new unique vertex. Welding an already-welded set
/// again therefore returns it unchanged, with an identity mapping.
pub fn weld_vertices(positions: &[Point<Real>], threshold: Real) -> (Vec<Point<Real>>, Vec<u32>) {
    let mut indices = Vec::with_capacity(positions.len());
    let mut welded: Vec<Point<Real>> = Vec::new();
    let mut grid = HashGrid::new(threshold);
    let mut neighbors = Vec::new();

    for position in positions {
        grid.find_neighbors(&mut neighbors, position, threshold);
        match neighbors.first() {
            Some(neighbor) => indices.push(*neighbor),
            None => {
                welded.push(*position);
                indices.push(welded.len() as u32 - 1);
                let _ = grid.insert(*position);
            }
        }
    }

    (welded, indices)
}

/// Welds triangle-mesh vertices within `threshold` and remaps the index
/// triples accordingly.
pub fn weld_triangles(
    triangles: &[[u32; 3]],
    positions: &[Point<Real>],
    threshold: Real,
) -> (Vec<[u32; 3]>, Vec<Point<Real>>) {
    let (welded, indices) = weld_vertices(positions, threshold);
    let triangles = triangles
        .iter()
        .map(|[a, b, c]| {
            [
                indices[*a as usize],
                indices[*b as usize],
                indices[*c as usize],
            ]
        })
        .collect();
    (triangles, welded)
}

/// Welds quad-mesh vertices within `threshold` and remaps the index
/// quadruples accordingly.
pub fn weld_quads(
    quads: &[[u32; 4]],
    positions: &[Point<Real>],
    threshold: Real,
) -> (Vec<[u32; 4]>, Vec<Point<Real>>) {
    let (welded, indices) = weld_vertices(positions, threshold);
    let quads = quads
        .iter()
        .map(|[a, b, c, d]| {
            [
                indices[*a as usize],
                indices[*b as usize],
                indices[*c as usize],
                indices[*d as usize],
            ]
        })
        .collect();
    (quads, welded)
}

//! Uniform spatial hash grid for radius-bounded neighbor queries.

use crate::math::{Point, Point3, Real};
use hashbrown::HashMap;

/// A uniform spatial hash grid over 3D points.
///
/// The grid maps every integer cell coordinate to the ids of the points whose
/// position falls inside that cell: id `i` lives in cell
/// `floor(positions[i] / cell_size)`, componentwise. Ids are assigned in
/// insertion order starting from 0 and double as indices into
/// [`HashGrid::positions`].
///
/// The grid is insert-only: points can never be removed or moved. When the
/// underlying point set changes, rebuild the grid from scratch — it is the
/// cheap part of any pipeline that uses it (see
/// [`weld_vertices`](crate::transformation::weld_vertices)).
#[derive(Clone, Debug)]
pub struct HashGrid {
    cell_size: Real,
    cell_inv_size: Real,
    positions: Vec<Point<Real>>,
    cells: HashMap<Point3<i32>, Vec<u32>>,
}

impl HashGrid {
    /// Creates an empty grid with the given cell size.
    pub fn new(cell_size: Real) -> Self {
        Self {
            cell_size,
            cell_inv_size: 1.0 / cell_size,
            positions: Vec::new(),
            cells: HashMap::new(),
        }
    }

    /// Creates a grid containing `positions`, inserted in order, so point
    /// ids equal input indices.
    pub fn from_points(positions: &[Point<Real>], cell_size: Real) -> Self {
        let mut grid = Self::new(cell_size);
        for position in positions {
            let _ = grid.insert(*position);
        }
        grid
    }

    /// The cell containing `position`.
    #[inline]
    fn cell_index(&self, position: &Point<Real>) -> Point3<i32> {
        let scaled = *position * self.cell_inv_size;
        Point3::new(
            scaled.x.floor() as i32,
            scaled.y.floor() as i32,
            scaled.z.floor() as i32,
        )
    }

    /// Inserts a point and returns its id.
    pub fn insert(&mut self, position: Point<Real>) -> u32 {
        let id = self.positions.len() as u32;
        let cell = self.cell_index(&position);
        self.cells.entry(cell).or_default().push(id);
        self.positions.push(position);
        id
    }

    /// Collects into `neighbors` the id of every point within `max_radius` of
    /// `position`.
    ///
    /// The buffer is cleared first; passing the same buffer across calls
    /// reuses its allocation.
    pub fn find_neighbors(
        &self,
        neighbors: &mut Vec<u32>,
        position: &Point<Real>,
        max_radius: Real,
    ) {
        self.find_neighbors_filtered(neighbors, position, max_radius, None);
    }

    /// Collects into `neighbors` the id of every point within `max_radius` of
    /// the already-inserted point `vertex`, excluding `vertex` itself.
    pub fn find_neighbors_of(&self, neighbors: &mut Vec<u32>, vertex: u32, max_radius: Real) {
        let position = self.positions[vertex as usize];
        self.find_neighbors_filtered(neighbors, &position, max_radius, Some(vertex));
    }

    fn find_neighbors_filtered(
        &self,
        neighbors: &mut Vec<u32>,
        position: &Point<Real>,
        max_radius: Real,
        skip: Option<u32>,
    ) {
        neighbors.clear();

        let cell = self.cell_index(position);
        let cell_radius = (max_radius * self.cell_inv_size) as i32 + 1;
        let max_radius_sq = max_radius * max_radius;

        for k in -cell_radius..=cell_radius {
            for j in -cell_radius..=cell_radius {
                for i in -cell_radius..=cell_radius {
                    let ncell = Point3::new(cell.x + i, cell.y + j, cell.z + k);
                    let Some(ids) = self.cells.get(&ncell) else {
                        continue;
                    };
                    for id in ids {
                        if (self.positions[*id as usize] - *position).norm_squared()
                            > max_radius_sq
                        {
                            continue;
                        }
                        if skip == Some(*id) {
                            continue;
                        }
                        neighbors.push(*id);
                    }
                }
            }
        }
    }

    /// The inserted positions, in id order.
    #[inline]
    pub fn positions(&self) -> &[Point<Real>] {
        &self.positions
    }

    /// The grid spacing.
    #[inline]
    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// The number of inserted points.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the grid holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

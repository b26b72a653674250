// Uniform-grid neighbor search used by the cutoff Coulomb sum. The domain is
// described by half-extents centered on the origin, matching the simulation.

use crate::body::Body;
use ultraviolet::Vec2;

pub struct CellList {
    pub domain_width: f32,  // half-width
    pub domain_height: f32, // half-height
    pub cell_size: f32,
    grid_x: usize,
    grid_y: usize,
    cells: Vec<Vec<usize>>,
}

impl CellList {
    pub fn new(domain_width: f32, domain_height: f32, cell_size: f32) -> Self {
        let grid_x = ((2.0 * domain_width) / cell_size).ceil() as usize + 1;
        let grid_y = ((2.0 * domain_height) / cell_size).ceil() as usize + 1;
        Self {
            domain_width,
            domain_height,
            cell_size,
            grid_x,
            grid_y,
            cells: Vec::new(),
        }
    }

    /// Re-bin all bodies. Must be called after positions change and before
    /// any neighbor queries.
    pub fn rebuild(&mut self, bodies: &[Body]) {
        self.grid_x = ((2.0 * self.domain_width) / self.cell_size).ceil() as usize + 1;
        self.grid_y = ((2.0 * self.domain_height) / self.cell_size).ceil() as usize + 1;
        self.cells.clear();
        self.cells.resize(self.grid_x * self.grid_y, Vec::new());
        for (i, b) in bodies.iter().enumerate() {
            let (cx, cy) = self.coord(b.pos);
            self.cells[cx + cy * self.grid_x].push(i);
        }
    }

    pub fn update_domain_size(&mut self, domain_width: f32, domain_height: f32) {
        self.domain_width = domain_width;
        self.domain_height = domain_height;
        // grid dimensions are recomputed on the next rebuild
    }

    fn coord(&self, pos: Vec2) -> (usize, usize) {
        let x = ((pos.x + self.domain_width) / self.cell_size).floor() as isize;
        let y = ((pos.y + self.domain_height) / self.cell_size).floor() as isize;
        (
            x.clamp(0, self.grid_x as isize - 1) as usize,
            y.clamp(0, self.grid_y as isize - 1) as usize,
        )
    }

    /// Indices of all bodies within `cutoff` of body `i`, excluding `i` itself.
    pub fn find_neighbors_within(&self, bodies: &[Body], i: usize, cutoff: f32) -> Vec<usize> {
        let (cx, cy) = self.coord(bodies[i].pos);
        let range = (cutoff / self.cell_size).ceil() as isize;
        let cutoff_sq = cutoff * cutoff;
        let mut neighbors = Vec::new();
        for dy in -range..=range {
            let y = cy as isize + dy;
            if y < 0 || y >= self.grid_y as isize {
                continue;
            }
            for dx in -range..=range {
                let x = cx as isize + dx;
                if x < 0 || x >= self.grid_x as isize {
                    continue;
                }
                for &j in &self.cells[x as usize + y as usize * self.grid_x] {
                    if j == i {
                        continue;
                    }
                    if (bodies[j].pos - bodies[i].pos).mag_sq() <= cutoff_sq {
                        neighbors.push(j);
                    }
                }
            }
        }
        neighbors
    }
}

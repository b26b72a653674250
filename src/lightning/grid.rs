// lightning/grid.rs
// Row-major potential grid with Dirichlet boundaries. Row 0 is the cloud
// (φ = 1), the last row is the ground (φ = 0); the growing channel is
// clamped to φ = 0 like the ground it is reaching for.

use serde::{Deserialize, Serialize};

/// What a grid cell is allowed to do during relaxation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CellState {
    /// Interior cell, updated by the solver.
    Free,
    /// Dirichlet boundary (cloud or ground row), never updated.
    Fixed,
    /// Part of the lightning channel; held at φ = 0.
    Channel,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct PotentialGrid {
    pub nx: usize,
    pub ny: usize,
    pub phi: Vec<f32>,
    pub state: Vec<CellState>,
    /// Growth step at which each cell joined the channel (usize::MAX if never).
    pub step_added: Vec<usize>,
}

impl PotentialGrid {
    /// Build the initial grid: cloud row at φ=1, ground row at φ=0, interior
    /// linearly interpolated so the first relaxation starts close to the
    /// channel-free solution.
    pub fn new(nx: usize, ny: usize) -> Self {
        assert!(nx >= 3 && ny >= 3, "grid must have an interior");
        let mut phi = vec![0.0; nx * ny];
        let mut state = vec![CellState::Free; nx * ny];
        for y in 0..ny {
            let level = 1.0 - y as f32 / (ny - 1) as f32;
            for x in 0..nx {
                phi[x + y * nx] = level;
            }
        }
        for x in 0..nx {
            state[x] = CellState::Fixed; // cloud row, φ = 1
            state[x + (ny - 1) * nx] = CellState::Fixed; // ground row, φ = 0
        }
        Self {
            nx,
            ny,
            phi,
            state,
            step_added: vec![usize::MAX; nx * ny],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        x + y * self.nx
    }

    pub fn phi_at(&self, x: usize, y: usize) -> f32 {
        self.phi[self.idx(x, y)]
    }

    pub fn state_at(&self, x: usize, y: usize) -> CellState {
        self.state[self.idx(x, y)]
    }

    /// Seed the channel one cell below the cloud, at the horizontal midpoint.
    pub fn seed_channel(&mut self) -> (usize, usize) {
        let seed = (self.nx / 2, 1);
        self.add_to_channel(seed.0, seed.1, 0);
        seed
    }

    pub fn add_to_channel(&mut self, x: usize, y: usize, step: usize) {
        let i = self.idx(x, y);
        self.state[i] = CellState::Channel;
        self.phi[i] = 0.0;
        self.step_added[i] = step;
    }

    /// The four in-grid neighbors of (x, y).
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let (nx, ny) = (self.nx, self.ny);
        [(1i64, 0i64), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(move |(dx, dy)| {
                let (px, py) = (x as i64 + dx, y as i64 + dy);
                (px >= 0 && py >= 0 && (px as usize) < nx && (py as usize) < ny)
                    .then(|| (px as usize, py as usize))
            })
    }

    /// True once any channel cell touches the row above the ground.
    pub fn reached_ground(&self) -> bool {
        let y = self.ny - 2;
        (0..self.nx).any(|x| self.state_at(x, y) == CellState::Channel)
    }

    pub fn channel_len(&self) -> usize {
        self.state
            .iter()
            .filter(|&&s| s == CellState::Channel)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_fixed_and_interior_interpolated() {
        let g = PotentialGrid::new(11, 11);
        assert_eq!(g.state_at(5, 0), CellState::Fixed);
        assert_eq!(g.state_at(5, 10), CellState::Fixed);
        assert_eq!(g.state_at(5, 5), CellState::Free);
        assert!((g.phi_at(3, 0) - 1.0).abs() < 1e-6);
        assert!(g.phi_at(3, 10).abs() < 1e-6);
        assert!((g.phi_at(3, 5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn seed_sits_below_cloud_midpoint() {
        let mut g = PotentialGrid::new(11, 11);
        let (x, y) = g.seed_channel();
        assert_eq!((x, y), (5, 1));
        assert_eq!(g.state_at(5, 1), CellState::Channel);
        assert_eq!(g.phi_at(5, 1), 0.0);
        assert_eq!(g.step_added[g.idx(5, 1)], 0);
    }

    #[test]
    fn neighbors_clip_at_edges() {
        let g = PotentialGrid::new(5, 5);
        let corner: Vec<_> = g.neighbors(0, 0).collect();
        assert_eq!(corner.len(), 2);
        let center: Vec<_> = g.neighbors(2, 2).collect();
        assert_eq!(center.len(), 4);
    }

    #[test]
    fn reached_ground_detects_channel_above_ground_row() {
        let mut g = PotentialGrid::new(5, 5);
        assert!(!g.reached_ground());
        g.add_to_channel(2, 3, 1);
        assert!(g.reached_ground());
    }
}

// lightning/solver.rs
// Jacobi relaxation of the Laplace equation on the potential grid.
// Free cells move toward the mean of their four neighbors; Fixed and
// Channel cells are boundaries and never change.

use rayon::prelude::*;

use super::grid::{CellState, PotentialGrid};
use crate::profile_scope;

/// Relax until the largest per-cell update drops below `tolerance` or
/// `max_sweeps` is hit. Returns the number of sweeps performed.
pub fn relax(grid: &mut PotentialGrid, tolerance: f32, max_sweeps: usize) -> usize {
    profile_scope!("lightning_relax");
    let nx = grid.nx;
    let mut next = grid.phi.clone();
    for sweep in 0..max_sweeps {
        // Jacobi update, parallel over interior rows. Each row only reads
        // from grid.phi and writes its own slice of `next`.
        let phi = &grid.phi;
        let state = &grid.state;
        let max_delta = next[nx..(grid.ny - 1) * nx]
            .par_chunks_mut(nx)
            .enumerate()
            .map(|(row, chunk)| {
                let y = row + 1;
                let mut row_max = 0.0f32;
                for x in 1..nx - 1 {
                    let i = x + y * nx;
                    if state[i] != CellState::Free {
                        chunk[x] = phi[i];
                        continue;
                    }
                    let new = 0.25 * (phi[i - 1] + phi[i + 1] + phi[i - nx] + phi[i + nx]);
                    row_max = row_max.max((new - phi[i]).abs());
                    chunk[x] = new;
                }
                row_max
            })
            .reduce(|| 0.0f32, f32::max);

        // Side columns take their horizontal neighbor's value (reflecting,
        // i.e. zero-flux sides). Channel cells that reached a side keep φ=0.
        for y in 1..grid.ny - 1 {
            let left = y * nx;
            let right = left + nx - 1;
            next[left] = if state[left] == CellState::Free {
                next[left + 1]
            } else {
                phi[left]
            };
            next[right] = if state[right] == CellState::Free {
                next[right - 1]
            } else {
                phi[right]
            };
        }

        std::mem::swap(&mut grid.phi, &mut next);
        if max_delta < tolerance {
            return sweep + 1;
        }
    }
    max_sweeps
}

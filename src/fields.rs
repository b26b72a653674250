// fields.rs
// Static electric field and potential evaluation for point-charge systems,
// sampled on a regular grid for quiver/heatmap export.

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use crate::config;
use crate::units;

/// A point charge in the plane. Charge in units of e, position in angstroms.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PointCharge {
    pub q: f32,
    pub pos: Vec2,
}

/// Electric field at `r` due to a charge `q0` at `r0`: E = k q₀ r̂ / |r−r₀|².
/// Sampling exactly on top of the charge contributes nothing instead of NaN.
pub fn efield_q(q0: f32, r: Vec2, r0: Vec2) -> Vec2 {
    let dr = r - r0;
    let dist = dr.mag();
    if dist < config::MIN_COULOMB_DISTANCE {
        return Vec2::zero();
    }
    dr * (units::COULOMB_CONSTANT * q0 / (dist * dist * dist))
}

/// Potential at `r` due to a charge `q0` at `r0`: V = k q₀ / |r−r₀|.
pub fn potential_q(q0: f32, r: Vec2, r0: Vec2) -> f32 {
    let dist = (r - r0).mag().max(config::MIN_COULOMB_DISTANCE);
    units::COULOMB_CONSTANT * q0 / dist
}

/// Superposed field of a charge list.
pub fn efield(charges: &[PointCharge], r: Vec2) -> Vec2 {
    charges
        .iter()
        .fold(Vec2::zero(), |acc, c| acc + efield_q(c.q, r, c.pos))
}

/// Superposed potential of a charge list.
pub fn potential(charges: &[PointCharge], r: Vec2) -> f32 {
    charges.iter().map(|c| potential_q(c.q, r, c.pos)).sum()
}

/// Field components sampled on an N×N meshgrid over [-half_extent, half_extent]²,
/// the layout a quiver plot wants: parallel x/y/Ex/Ey arrays in row-major order.
#[derive(Clone, Serialize, Deserialize)]
pub struct FieldGrid {
    pub n: usize,
    pub half_extent: f32,
    pub xs: Vec<f32>,
    pub ys: Vec<f32>,
    pub ex: Vec<f32>,
    pub ey: Vec<f32>,
}

impl FieldGrid {
    pub fn sample(charges: &[PointCharge], half_extent: f32, n: usize) -> Self {
        assert!(n >= 2);
        let mut grid = Self {
            n,
            half_extent,
            xs: Vec::with_capacity(n * n),
            ys: Vec::with_capacity(n * n),
            ex: Vec::with_capacity(n * n),
            ey: Vec::with_capacity(n * n),
        };
        let step = 2.0 * half_extent / (n - 1) as f32;
        for iy in 0..n {
            let y = -half_extent + iy as f32 * step;
            for ix in 0..n {
                let x = -half_extent + ix as f32 * step;
                let e = efield(charges, Vec2::new(x, y));
                grid.xs.push(x);
                grid.ys.push(y);
                grid.ex.push(e.x);
                grid.ey.push(e.y);
            }
        }
        grid
    }
}

/// Potential of two equal charges at ±a on the x-axis, sampled along the axis.
/// Returns (x, V) pairs; points inside the clamp radius of a charge are skipped.
pub fn two_charge_potential_profile(q: f32, a: f32, samples: usize) -> Vec<(f32, f32)> {
    assert!(samples >= 2);
    let charges = [
        PointCharge { q, pos: Vec2::new(a, 0.0) },
        PointCharge { q, pos: Vec2::new(-a, 0.0) },
    ];
    let step = 2.0 * a / (samples - 1) as f32;
    (0..samples)
        .filter_map(|i| {
            let x = -a + i as f32 * step;
            let r = Vec2::new(x, 0.0);
            if (r - charges[0].pos).mag() < config::MIN_COULOMB_DISTANCE
                || (r - charges[1].pos).mag() < config::MIN_COULOMB_DISTANCE
            {
                return None;
            }
            Some((x, potential(&charges, r)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_points_away_from_positive_charge() {
        let e = efield_q(1.0, Vec2::new(2.0, 0.0), Vec2::zero());
        assert!(e.x > 0.0);
        assert!(e.y.abs() < 1e-9);
    }

    #[test]
    fn field_magnitude_falls_off_as_inverse_square() {
        let e1 = efield_q(1.0, Vec2::new(1.0, 0.0), Vec2::zero()).mag();
        let e2 = efield_q(1.0, Vec2::new(2.0, 0.0), Vec2::zero()).mag();
        assert!((e1 / e2 - 4.0).abs() < 1e-3);
    }

    #[test]
    fn sampling_on_the_charge_is_finite() {
        let e = efield_q(1.0, Vec2::zero(), Vec2::zero());
        assert_eq!(e, Vec2::zero());
    }

    #[test]
    fn dipole_field_vanishes_on_perpendicular_bisector_x_component() {
        let charges = [
            PointCharge { q: 1.0, pos: Vec2::new(1.0, 0.0) },
            PointCharge { q: -1.0, pos: Vec2::new(-1.0, 0.0) },
        ];
        // on the y-axis the x-components add and y-components cancel
        let e = efield(&charges, Vec2::new(0.0, 2.0));
        assert!(e.y.abs() < 1e-6, "y-component should cancel by symmetry");
        assert!(e.x < 0.0, "field points from + toward - across the bisector");
    }

    #[test]
    fn meshgrid_has_row_major_layout() {
        let charges = [PointCharge { q: 1.0, pos: Vec2::zero() }];
        let g = FieldGrid::sample(&charges, 5.0, 3);
        assert_eq!(g.xs.len(), 9);
        assert_eq!(g.xs[0], -5.0);
        assert_eq!(g.ys[0], -5.0);
        assert_eq!(g.xs[1], 0.0); // x varies fastest
        assert_eq!(g.ys[3], 0.0);
    }

    #[test]
    #[should_panic]
    fn two_charge_profile_rejects_single_sample() {
        two_charge_potential_profile(1.0, 5.0, 1);
    }

    #[test]
    fn two_charge_profile_is_symmetric_with_midpoint_minimum() {
        let profile = two_charge_potential_profile(1.0, 5.0, 101);
        let mid = profile[profile.len() / 2];
        assert!(mid.0.abs() < 1e-4);
        for &(x, v) in &profile {
            let mirrored = profile
                .iter()
                .find(|&&(mx, _)| (mx + x).abs() < 1e-4)
                .map(|&(_, mv)| mv)
                .unwrap();
            assert!((v - mirrored).abs() < 1e-3);
            assert!(v >= mid.1 - 1e-3, "midpoint is the potential minimum on the axis");
        }
    }
}

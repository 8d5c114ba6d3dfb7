//! The stock raw-to-simulation coordinate convention.

use kerb_core::{GeometryConverter, RawPoint, SimPoint};

/// The simulation engine's native coordinate convention.
///
/// Raw map data is right-handed with y growing to the left of travel;
/// the simulation plane flips the y axis and drops z:
/// `[x, y, z] → [x, -y]`. The mapping is a planar isometry, so
/// point-to-point distances are identical in raw and converted space.
///
/// Order- and count-preserving, deterministic, no side effects — the
/// full [`GeometryConverter`] contract.
///
/// # Examples
///
/// ```
/// use kerb_core::GeometryConverter;
/// use kerb_map::FlipYConvention;
///
/// let sim = FlipYConvention.convert(&[[1.0, 2.0, 5.0]]);
/// assert_eq!(sim, vec![[1.0, -2.0]]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FlipYConvention;

impl GeometryConverter for FlipYConvention {
    fn convert(&self, raw: &[RawPoint]) -> Vec<SimPoint> {
        raw.iter().map(|p| [p[0], -p[1]]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn conversion_preserves_count_and_order(
            xs in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6, -1e3f64..1e3), 0..64)
        ) {
            let raw: Vec<[f64; 3]> = xs.iter().map(|&(x, y, z)| [x, y, z]).collect();
            let sim = FlipYConvention.convert(&raw);
            prop_assert_eq!(sim.len(), raw.len());
            for (r, s) in raw.iter().zip(&sim) {
                prop_assert_eq!(s[0], r[0]);
                prop_assert_eq!(s[1], -r[1]);
            }
        }

        #[test]
        fn conversion_is_an_isometry(
            a in (-1e6f64..1e6, -1e6f64..1e6),
            b in (-1e6f64..1e6, -1e6f64..1e6),
        ) {
            let raw = [[a.0, a.1, 0.0], [b.0, b.1, 0.0]];
            let sim = FlipYConvention.convert(&raw);
            let raw_dist = ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt();
            let sim_dist =
                ((sim[0][0] - sim[1][0]).powi(2) + (sim[0][1] - sim[1][1]).powi(2)).sqrt();
            prop_assert!((raw_dist - sim_dist).abs() < 1e-9);
        }
    }
}

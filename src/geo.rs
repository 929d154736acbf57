// src/geo.rs
// Approximate placement for trails whose pages publish no coordinates.

use rand::Rng;

use crate::config::consts::JITTER_DEGREES;
use crate::trail::{Coordinates, Trail};

/// Place `trail` near its state's center if it has no coordinates yet.
///
/// Each axis gets an independent uniform offset in `[-JITTER_DEGREES, JITTER_DEGREES]`
/// so fallback markers for the same state don't stack on one point.
/// Returns `true` if coordinates were synthesized.
pub fn estimate_coordinates<R: Rng>(trail: &mut Trail, rng: &mut R) -> bool {
    if trail.coordinates.is_some() {
        return false;
    }
    let center = trail.region.center();
    trail.coordinates = Some(Coordinates {
        lat: center.lat + rng.random_range(-JITTER_DEGREES..=JITTER_DEGREES),
        lng: center.lng + rng.random_range(-JITTER_DEGREES..=JITTER_DEGREES),
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;
    use rand::{SeedableRng, rngs::StdRng};

    fn trail(region: Region) -> Trail {
        let mut t = Trail::new("https://h/trail/t", region);
        t.name = "T".into();
        t.length = 1.0;
        t
    }

    #[test]
    fn vermont_fallback_stays_within_jitter() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let mut t = trail(Region::VT);
            assert!(estimate_coordinates(&mut t, &mut rng));
            let c = t.coordinates.unwrap();
            assert!((c.lat - 44.5588).abs() <= JITTER_DEGREES + 1e-9);
            assert!((c.lng - -72.5778).abs() <= JITTER_DEGREES + 1e-9);
        }
    }

    #[test]
    fn existing_coordinates_are_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut t = trail(Region::ME);
        let exact = Coordinates { lat: 44.0, lng: -70.0 };
        t.coordinates = Some(exact);
        assert!(!estimate_coordinates(&mut t, &mut rng));
        assert_eq!(t.coordinates, Some(exact));
    }

    #[test]
    fn same_state_fallbacks_spread_out() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut a = trail(Region::RI);
        let mut b = trail(Region::RI);
        estimate_coordinates(&mut a, &mut rng);
        estimate_coordinates(&mut b, &mut rng);
        assert_ne!(a.coordinates, b.coordinates);
    }

    #[test]
    fn every_state_gets_a_fallback() {
        let mut rng = StdRng::seed_from_u64(3);
        for region in Region::ALL {
            let mut t = trail(region);
            estimate_coordinates(&mut t, &mut rng);
            assert!(t.coordinates.is_some(), "{region} has no center");
        }
    }
}

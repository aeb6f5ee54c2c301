use crate::domain::types::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points given in degrees.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push near-antipodal points just past 1
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const OSLO: Coordinate = Coordinate { latitude: 59.91, longitude: 10.75 };
    const BERGEN: Coordinate = Coordinate { latitude: 60.39, longitude: 5.32 };

    #[test]
    fn identical_points_are_zero_apart() {
        assert!(haversine_km(OSLO, OSLO).abs() < 1e-6);
    }

    #[test]
    fn oslo_to_bergen_is_plausible() {
        let d = haversine_km(OSLO, BERGEN);
        assert!((300.0..=600.0).contains(&d), "got {d}");
    }

    #[test]
    fn quarter_meridian_matches_radius() {
        let d = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(90.0, 0.0));
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn is_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            prop_assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-6);
        }

        #[test]
        fn point_to_itself_is_zero(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let a = Coordinate::new(lat, lon);
            prop_assert!(haversine_km(a, a).abs() < 1e-6);
        }
    }
}

//! Unit tests for rw-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoCoordinate;

    #[test]
    fn zero_distance() {
        let p = GeoCoordinate::new(37.77, -122.42);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoCoordinate::new(30.0, -88.0);
        let b = GeoCoordinate::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn validity() {
        assert!(GeoCoordinate::new(90.0, 180.0).is_valid());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_valid());
        assert!(!GeoCoordinate::new(90.1, 0.0).is_valid());
        assert!(!GeoCoordinate::new(0.0, -180.5).is_valid());
        assert!(!GeoCoordinate::new(f64::NAN, 0.0).is_valid());
        assert!(GeoCoordinate::checked(91.0, 0.0).is_err());
        assert_eq!(
            GeoCoordinate::checked(1.0, 2.0).unwrap(),
            GeoCoordinate::new(1.0, 2.0)
        );
    }

    #[test]
    fn bbox_check() {
        let center = GeoCoordinate::new(37.77, -122.42);
        assert!(GeoCoordinate::new(37.775, -122.41).within_bbox(center, 0.01));
        assert!(!GeoCoordinate::new(38.5, -122.42).within_bbox(center, 0.01));
    }

    #[test]
    fn display() {
        assert_eq!(GeoCoordinate::new(1.5, -2.0).to_string(), "(1.500000, -2.000000)");
    }
}

#[cfg(test)]
mod goal {
    use crate::DistanceGoal;

    #[test]
    fn positive_values_kept() {
        assert_eq!(DistanceGoal::new(3.1).value(), 3.1);
        assert_eq!(DistanceGoal::new(0.25).value(), 0.25);
    }

    #[test]
    fn invalid_values_fall_back() {
        for v in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(DistanceGoal::new(v), DistanceGoal::DEFAULT, "input {v}");
        }
        assert_eq!(DistanceGoal::DEFAULT.value(), 1.0);
    }

    #[test]
    fn parse_text() {
        assert_eq!(DistanceGoal::parse(" 2.5 ").value(), 2.5);
        assert_eq!(DistanceGoal::parse("3").value(), 3.0);
        assert_eq!(DistanceGoal::parse(""), DistanceGoal::DEFAULT);
        assert_eq!(DistanceGoal::parse("five miles"), DistanceGoal::DEFAULT);
        assert_eq!(DistanceGoal::parse("-4"), DistanceGoal::DEFAULT);
        assert_eq!(DistanceGoal::parse("inf"), DistanceGoal::DEFAULT);
    }
}

#[cfg(test)]
mod shape {
    use crate::{RwError, ShapeId};

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("bunny".parse::<ShapeId>().unwrap(), ShapeId::Bunny);
        assert_eq!(" SHRIMP".parse::<ShapeId>().unwrap(), ShapeId::Shrimp);
        assert!(matches!(
            "Unknown".parse::<ShapeId>(),
            Err(RwError::UnknownShape(name)) if name == "Unknown"
        ));
    }

    #[test]
    fn display_matches_picker_names() {
        let names: Vec<String> = ShapeId::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Bird", "Bunny", "Butterfly", "Shrimp"]);
    }
}

#[cfg(test)]
mod time {
    use crate::Timestamp;

    #[test]
    fn age_saturates_at_zero() {
        let t = Timestamp(10_000);
        assert_eq!(t.age_ms(Timestamp(12_500)), 2_500);
        assert_eq!(t.age_ms(Timestamp(5_000)), 0);
    }

    #[test]
    fn from_secs_and_add() {
        assert_eq!(Timestamp::from_secs(3), Timestamp(3_000));
        assert_eq!(Timestamp(100) + 50, Timestamp(150));
    }

    #[test]
    fn now_is_after_epoch() {
        assert!(Timestamp::now() > Timestamp::EPOCH);
    }
}

//! Unit tests for rw-route.

use rw_core::{DistanceGoal, GeoCoordinate, ShapeId};
use rw_shapes::lookup;

use crate::{RouteGenerator, generate};

// ── Helpers ───────────────────────────────────────────────────────────────────

const TOL: f64 = 1e-9;

fn sf() -> GeoCoordinate {
    GeoCoordinate::new(37.77, -122.42)
}

fn assert_close(a: GeoCoordinate, b: GeoCoordinate) {
    assert!(
        (a.lat - b.lat).abs() < TOL && (a.lon - b.lon).abs() < TOL,
        "{a} != {b}"
    );
}

// ── generate ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;
    use crate::LongitudeScaling;

    #[test]
    fn one_coordinate_per_vertex() {
        for id in ShapeId::ALL {
            for goal in [0.5, 1.0, 3.0] {
                let coords = generate(id.as_str(), sf(), goal);
                assert_eq!(coords.len(), lookup(id).len(), "{id} at goal {goal}");
            }
        }
    }

    #[test]
    fn bunny_at_origin() {
        let coords = generate("Bunny", GeoCoordinate::new(0.0, 0.0), 1.0);
        assert_close(coords[0], GeoCoordinate::new(0.0, 0.0));
        assert_close(coords[1], GeoCoordinate::new(0.001, 0.0));
        assert_close(coords[2], GeoCoordinate::new(0.0015, -0.0005));
    }

    #[test]
    fn first_point_is_exactly_the_anchor() {
        for id in ShapeId::ALL {
            let coords = generate(id.as_str(), sf(), 2.7);
            assert_eq!(coords[0], sf(), "{id}");
        }
    }

    #[test]
    fn doubling_goal_doubles_offsets() {
        let anchor = sf();
        for id in ShapeId::ALL {
            let single = generate(id.as_str(), anchor, 1.5);
            let double = generate(id.as_str(), anchor, 3.0);
            for (a, b) in single.iter().zip(&double) {
                assert!(((b.lat - anchor.lat) - 2.0 * (a.lat - anchor.lat)).abs() < TOL);
                assert!(((b.lon - anchor.lon) - 2.0 * (a.lon - anchor.lon)).abs() < TOL);
            }
        }
    }

    #[test]
    fn order_follows_template() {
        let template = lookup(ShapeId::Shrimp);
        let coords = generate("Shrimp", GeoCoordinate::new(0.0, 0.0), 1.0);
        for (v, c) in template.vertices().iter().zip(&coords) {
            assert_close(*c, GeoCoordinate::new(v.dx * 0.001, v.dy * 0.001));
        }
    }

    #[test]
    fn unknown_shape_is_just_the_anchor() {
        assert_eq!(generate("Unknown", sf(), 1.0), vec![sf()]);
        assert_eq!(generate("", sf(), 5.0), vec![sf()]);
    }

    #[test]
    fn invalid_goal_uses_default() {
        let expected = generate("Butterfly", sf(), 1.0);
        assert_eq!(generate("Butterfly", sf(), -1.0), expected);
        assert_eq!(generate("Butterfly", sf(), f64::NAN), expected);
        assert_eq!(generate("Butterfly", sf(), 0.0), expected);
        assert_eq!(generate("Butterfly", sf(), DistanceGoal::parse("abc")), expected);
    }

    #[test]
    fn closed_templates_close_the_route() {
        for id in ShapeId::ALL {
            let coords = generate(id.as_str(), sf(), 1.0);
            assert_eq!(coords.first(), coords.last(), "{id}");
        }
    }

    #[test]
    fn custom_base_unit() {
        let g = RouteGenerator::new().with_base_unit(0.002);
        let coords = g.generate(&lookup(ShapeId::Bunny), GeoCoordinate::new(0.0, 0.0), DistanceGoal::new(1.0));
        assert_close(coords[1], GeoCoordinate::new(0.002, 0.0));

        let fallback = RouteGenerator::new().with_base_unit(-3.0);
        assert_eq!(fallback.base_unit(), crate::BASE_UNIT);
    }

    #[test]
    fn cos_latitude_widens_longitude_only() {
        let anchor = GeoCoordinate::new(60.0, 10.0); // cos(60°) = 0.5
        let template = lookup(ShapeId::Bird);
        let goal = DistanceGoal::new(1.0);
        let plain = RouteGenerator::new().generate(&template, anchor, goal);
        let corrected = RouteGenerator::new()
            .with_longitude_scaling(LongitudeScaling::CosLatitude)
            .generate(&template, anchor, goal);

        for (p, c) in plain.iter().zip(&corrected) {
            assert!((p.lat - c.lat).abs() < TOL);
            assert!(((c.lon - anchor.lon) - 2.0 * (p.lon - anchor.lon)).abs() < 1e-6);
        }
    }

    #[test]
    fn cos_latitude_is_identity_at_equator() {
        let anchor = GeoCoordinate::new(0.0, 0.0);
        let template = lookup(ShapeId::Bunny);
        let goal = DistanceGoal::new(2.0);
        let plain = RouteGenerator::new().generate(&template, anchor, goal);
        let corrected = RouteGenerator::new()
            .with_longitude_scaling(LongitudeScaling::CosLatitude)
            .generate(&template, anchor, goal);
        for (p, c) in plain.iter().zip(&corrected) {
            assert_close(*p, *c);
        }
    }

    #[test]
    fn cos_latitude_stays_finite_at_pole() {
        let coords = RouteGenerator::new()
            .with_longitude_scaling(LongitudeScaling::CosLatitude)
            .generate(&lookup(ShapeId::Bird), GeoCoordinate::new(90.0, 0.0), DistanceGoal::new(1.0));
        assert!(coords.iter().all(|c| c.lon.is_finite()));
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::*;

    #[test]
    fn route_records_inputs() {
        let route = RouteGenerator::new().route(&lookup(ShapeId::Bird), sf(), DistanceGoal::new(2.0));
        assert_eq!(route.shape, "Bird");
        assert_eq!(route.anchor, sf());
        assert_eq!(route.goal.value(), 2.0);
        assert_eq!(route.len(), 19);
        assert_eq!(route.start(), Some(sf()));
        assert!(route.is_closed(0.01));
    }

    #[test]
    fn length_scales_with_goal() {
        let g = RouteGenerator::new();
        let t = lookup(ShapeId::Bunny);
        let a = g.route(&t, sf(), DistanceGoal::new(1.0)).length_m();
        let b = g.route(&t, sf(), DistanceGoal::new(2.0)).length_m();
        assert!(a > 0.0);
        assert!((b / a - 2.0).abs() < 1e-3, "ratio {}", b / a);
    }

    #[test]
    fn degenerate_route_has_zero_length() {
        let route = RouteGenerator::new().route(&rw_shapes::lookup_name("Nope"), sf(), DistanceGoal::DEFAULT);
        assert_eq!(route.len(), 1);
        assert_eq!(route.length_m(), 0.0);
    }

    #[test]
    fn bounds_of_bird() {
        let route = RouteGenerator::new().route(&lookup(ShapeId::Bird), GeoCoordinate::new(0.0, 0.0), DistanceGoal::new(1.0));
        let b = route.bounds().unwrap();
        assert!((b.min.lat - 0.0).abs() < TOL);
        assert!((b.max.lat - 0.012).abs() < TOL);
        assert!((b.min.lon + 0.018).abs() < TOL);
        assert!((b.max.lon - 0.018).abs() < TOL);
        assert!(b.contains(GeoCoordinate::new(0.006, 0.0)));
        assert_close(b.center(), GeoCoordinate::new(0.006, 0.0));
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod viewport {
    use super::*;
    use crate::Viewport;

    #[test]
    fn fit_covers_route_with_padding() {
        let coords = generate("Bird", GeoCoordinate::new(0.0, 0.0), 1.0);
        let v = Viewport::fit(&coords, 0.2, 0.0).unwrap();
        assert!((v.lat_delta - 0.012 * 1.2).abs() < TOL);
        assert!((v.lon_delta - 0.036 * 1.2).abs() < TOL);
        assert!(coords.iter().all(|c| v.contains(*c)));
    }

    #[test]
    fn single_point_gets_minimum_span() {
        let v = Viewport::fit(&[sf()], 0.1, 0.01).unwrap();
        assert_eq!(v.center, sf());
        assert_eq!(v.lat_delta, 0.01);
        assert_eq!(v.lon_delta, 0.01);
    }

    #[test]
    fn empty_has_no_viewport() {
        assert!(Viewport::fit(&[], 0.1, 0.01).is_none());
    }

    #[test]
    fn recenter_keeps_span() {
        let v = Viewport::around(sf(), 0.05).recentered(GeoCoordinate::new(1.0, 2.0));
        assert_eq!(v.center, GeoCoordinate::new(1.0, 2.0));
        assert_eq!(v.lat_delta, 0.05);
    }
}

// ── Export ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod export {
    use super::*;
    use crate::{route_geojson, write_route_csv, write_route_geojson};

    fn bunny() -> crate::Route {
        RouteGenerator::new().route(&lookup(ShapeId::Bunny), GeoCoordinate::new(0.0, 0.0), DistanceGoal::new(1.0))
    }

    #[test]
    fn csv_rows_in_walking_order() {
        let mut buf = Vec::new();
        write_route_csv(&bunny(), &mut buf).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["seq", "latitude", "longitude"]);

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 21);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[1][1], "0.001");
        assert_eq!(&rows[20][0], "20");
    }

    #[test]
    fn geojson_uses_lon_lat_order() {
        let value = route_geojson(&bunny());
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "LineString");
        let coords = value["geometry"]["coordinates"].as_array().unwrap();
        assert_eq!(coords.len(), 21);
        assert_eq!(coords[2][0].as_f64().unwrap(), -0.0005);
        assert_eq!(value["properties"]["shape"], "Bunny");
    }

    #[test]
    fn geojson_file_written() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("route.geojson");
        write_route_geojson(&bunny(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["properties"]["goal"], 1.0);
    }
}

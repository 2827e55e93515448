//! Unit tests for rw-shapes.

use rw_core::ShapeId;

use crate::{NormalizedOffset, ShapeTemplate};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn square() -> ShapeTemplate {
    ShapeTemplate::new(
        "Square",
        vec![
            NormalizedOffset::new(0.0, 0.0),
            NormalizedOffset::new(1.0, 0.0),
            NormalizedOffset::new(1.0, 1.0),
            NormalizedOffset::new(0.0, 1.0),
            NormalizedOffset::new(0.0, 0.0),
        ],
    )
}

// ── Built-in tables ───────────────────────────────────────────────────────────

#[cfg(test)]
mod builtin {
    use super::*;
    use crate::{lookup, lookup_name};

    #[test]
    fn vertex_counts() {
        let counts: Vec<usize> = ShapeId::ALL.iter().map(|&id| lookup(id).len()).collect();
        assert_eq!(counts, vec![19, 21, 37, 25]);
    }

    #[test]
    fn every_builtin_starts_at_origin_and_closes() {
        for id in ShapeId::ALL {
            let t = lookup(id);
            assert_eq!(t.vertices()[0], NormalizedOffset::ORIGIN, "{id}");
            assert!(t.is_closed(1e-12), "{id} should return to its start");
            assert_eq!(t.name(), id.as_str());
        }
    }

    #[test]
    fn bunny_leads_with_the_nose() {
        let t = lookup(ShapeId::Bunny);
        assert_eq!(
            &t.vertices()[..3],
            &[
                NormalizedOffset::new(0.0, 0.0),
                NormalizedOffset::new(1.0, 0.0),
                NormalizedOffset::new(1.5, -0.5),
            ]
        );
    }

    #[test]
    fn bird_is_mirror_symmetric() {
        // Every vertex east of the spine has a twin reflected across it.
        let t = lookup(ShapeId::Bird);
        for v in t.vertices().iter().filter(|v| v.dy > 0.0 && v.dx < 10.0) {
            assert!(
                t.vertices().iter().any(|w| w.dx == v.dx && w.dy == -v.dy),
                "no mirror for {v:?}"
            );
        }
    }

    #[test]
    fn lookup_name_is_case_insensitive() {
        assert_eq!(lookup_name("butterfly"), lookup(ShapeId::Butterfly));
    }

    #[test]
    fn unknown_name_is_single_origin_point() {
        let t = lookup_name("Unknown");
        assert!(t.is_degenerate());
        assert_eq!(t.vertices(), &[NormalizedOffset::ORIGIN]);
        assert_eq!(t.name(), "Unknown");
    }
}

// ── ShapeTemplate ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod template {
    use super::*;

    #[test]
    fn empty_vertex_list_becomes_origin() {
        let t = ShapeTemplate::new("Nothing", vec![]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.vertices()[0], NormalizedOffset::ORIGIN);
    }

    #[test]
    fn open_template_is_not_closed() {
        let t = ShapeTemplate::new(
            "Line",
            vec![NormalizedOffset::new(0.0, 0.0), NormalizedOffset::new(2.0, 0.0)],
        );
        assert!(!t.is_closed(0.5));
        assert!(t.is_closed(2.0));
    }

    #[test]
    fn perimeter_of_unit_square() {
        assert!((square().perimeter_units() - 4.0).abs() < 1e-12);
        assert_eq!(ShapeTemplate::origin_only("x").perimeter_units(), 0.0);
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let b = crate::lookup(ShapeId::Bird).bounds();
        assert_eq!(b.min, NormalizedOffset::new(0.0, -18.0));
        assert_eq!(b.max, NormalizedOffset::new(12.0, 18.0));
        assert_eq!(b.width(), 36.0);
        assert_eq!(b.height(), 12.0);
    }
}

// ── ShapeLibrary ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod library {
    use super::*;
    use crate::ShapeLibrary;

    #[test]
    fn builtin_library_has_four_shapes() {
        let lib = ShapeLibrary::default();
        assert_eq!(lib.len(), 4);
        assert_eq!(lib.names(), vec!["Bird", "Bunny", "Butterfly", "Shrimp"]);
    }

    #[test]
    fn register_custom_and_lookup() {
        let mut lib = ShapeLibrary::builtin();
        assert!(lib.register(square()).is_none());
        assert!(lib.contains("Square"));
        assert!(!lib.contains("square"), "custom names are case-sensitive");
        assert_eq!(lib.lookup("Square").len(), 5);
    }

    #[test]
    fn register_replaces_builtin() {
        let mut lib = ShapeLibrary::builtin();
        let custom = ShapeTemplate::new("Bunny", vec![NormalizedOffset::new(0.0, 0.0)]);
        let prev = lib.register(custom).expect("built-in Bunny replaced");
        assert_eq!(prev.len(), 21);
        assert_eq!(lib.lookup("bunny").len(), 1);
    }

    #[test]
    fn unknown_lookup_is_degenerate() {
        let lib = ShapeLibrary::builtin();
        assert!(lib.lookup("Dragon").is_degenerate());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{ShapeError, load_templates_csv, load_templates_reader};

    const CSV: &str = "\
name,seq,dx,dy\n\
Square,2,1,1\n\
Square,0,0,0\n\
Zigzag,0,0,0\n\
Square,1,1,0\n\
Zigzag,1,1,1\n\
Square,3,0,1\n\
Square,4,0,0\n\
";

    #[test]
    fn groups_by_name_and_sorts_by_seq() {
        let templates = load_templates_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name(), "Square");
        assert_eq!(templates[1].name(), "Zigzag");

        let dx: Vec<f64> = templates[0].vertices().iter().map(|v| v.dx).collect();
        assert_eq!(dx, vec![0.0, 1.0, 1.0, 0.0, 0.0]);
        assert!(templates[0].is_closed(1e-12));
        assert!(!templates[1].is_closed(1e-12));
    }

    #[test]
    fn duplicate_seq_rejected() {
        let csv = "name,seq,dx,dy\nA,0,0,0\nA,0,1,1\n";
        let err = load_templates_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ShapeError::DuplicateVertex { seq: 0, .. }));
    }

    #[test]
    fn non_finite_offset_rejected() {
        let csv = "name,seq,dx,dy\nA,0,NaN,0\n";
        let err = load_templates_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ShapeError::NonFinite { seq: 0, .. }));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let csv = "name,seq,dx,dy\nA,first,0,0\n";
        let err = load_templates_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ShapeError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("shapes.csv");
        std::fs::write(&path, CSV).unwrap();
        let templates = load_templates_csv(&path).unwrap();
        assert_eq!(templates.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_templates_csv(std::path::Path::new("/nonexistent/shapes.csv")).unwrap_err();
        assert!(matches!(err, ShapeError::Io(_)));
    }
}

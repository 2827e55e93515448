//! Generate a shape route at a recorded or simulated position.
//!
//! Starts a location tracker on a replayed fix feed, generates the selected
//! silhouette at the latest fix, and writes the route as CSV and GeoJSON.
//! With `--walk`, it then walks the route with a simulated GPS feed while the
//! map camera follows along.
//!
//! ```text
//! RUST_LOG=info cargo run -p stroll -- --shape Bunny --distance 2
//! cargo run -p stroll -- --trace fixes.csv --shape Shrimp --walk
//! ```

mod feed;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use clap::Parser;

use rw_app::{AppConfig, AppState, GenerateOutcome};
use rw_core::GeoCoordinate;
use rw_location::{FnObserver, LocationFix, LocationTracker};
use rw_route::{write_route_csv, write_route_geojson};

/// Slowest walk the demo will simulate.
const MIN_SPEED_MPS: f64 = 0.1;

#[derive(Parser, Debug)]
#[command(name = "stroll", about = "Generate a walkable silhouette route")]
struct Args {
    /// Shape to draw (Bird, Bunny, Butterfly, Shrimp, or a custom template).
    #[arg(short, long)]
    shape: Option<String>,

    /// Distance goal; anything that is not a positive number means 1.
    #[arg(short, long, default_value = "")]
    distance: String,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Replay fixes from a CSV trace instead of simulating a position.
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// Simulated position as `LAT,LON` (ignored with --trace).
    #[arg(long, value_parser = parse_coordinate)]
    at: Option<GeoCoordinate>,

    /// Walk the generated route with a simulated GPS feed.
    #[arg(long)]
    walk: bool,

    /// Walking speed for --walk, metres per second (at least 0.1).
    #[arg(long, default_value_t = 2.8, value_parser = parse_speed)]
    speed: f64,

    /// Seed for simulated GPS jitter.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output directory.
    #[arg(short, long, default_value = "output/stroll")]
    out: PathBuf,
}

fn parse_coordinate(s: &str) -> Result<GeoCoordinate, String> {
    let (lat, lon) = s.split_once(',').ok_or("expected LAT,LON")?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("latitude: {e}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("longitude: {e}"))?;
    GeoCoordinate::checked(lat, lon).map_err(|e| e.to_string())
}

fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.trim().parse().map_err(|e| format!("speed: {e}"))?;
    if speed.is_finite() && speed >= MIN_SPEED_MPS {
        Ok(speed)
    } else {
        Err(format!("speed must be a number of at least {MIN_SPEED_MPS} m/s"))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    println!("=== stroll: silhouette route generator ===");

    // 1. App state and tracker.
    let mut state = AppState::from_config(&config)?;
    if let Some(shape) = &args.shape {
        if !state.knows_shape(shape) {
            println!("Unknown shape {shape:?}: the route will be the anchor point only.");
        }
        state.select_shape(shape.as_str());
    }
    state.set_distance_text(args.distance.as_str());
    println!("Shapes: {}", state.shape_names().join(", "));

    let tracker = LocationTracker::new();
    state.follow(&tracker);

    // 2. Position feed.
    let mut source = match &args.trace {
        Some(path) => feed::recorded(path)?,
        None => feed::standing(args.at.unwrap_or(config.initial_center), args.seed),
    };
    tracker.start(&mut source);
    source.join();
    tracker.stop(&mut source);

    let Some(fix) = tracker.current_fix() else {
        println!("No position fix available ({}); nothing to generate.", tracker.state());
        return Ok(());
    };
    println!("Position: {}", fix.coordinate);

    // 3. Generate.
    let points = match state.generate(&tracker) {
        GenerateOutcome::Generated { points } => points,
        GenerateOutcome::NoFix => {
            println!("No position fix available; nothing to generate.");
            return Ok(());
        }
    };
    let Some(route) = state.route().cloned() else {
        return Ok(());
    };
    println!(
        "Route: {} × {} → {} points, {:.0} m, closed: {}",
        route.shape,
        route.goal,
        points,
        route.length_m(),
        route.is_closed(1.0),
    );

    // 4. Write outputs.
    std::fs::create_dir_all(&args.out)?;
    let csv_path = args.out.join("route.csv");
    write_route_csv(&route, std::fs::File::create(&csv_path)?)?;
    let geojson_path = args.out.join("route.geojson");
    write_route_geojson(&route, &geojson_path)?;
    println!("Wrote {}", csv_path.display());
    println!("Wrote {}", geojson_path.display());

    // 5. Optionally walk it.
    if args.walk {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let sub = tracker.subscribe(FnObserver(move |_: &LocationFix| {
            counter.fetch_add(1, Ordering::Relaxed);
        }));

        let mut walk = feed::walking(&route.coordinates, args.speed, args.seed);
        tracker.start(&mut walk);
        walk.join();
        tracker.stop(&mut walk);
        tracker.unsubscribe(sub);

        let end = tracker.current_fix().map(|f| f.coordinate);
        println!();
        println!("Walked route: {} fixes at {:.1} m/s", seen.load(Ordering::Relaxed), args.speed);
        if let Some(end) = end {
            println!("  finished {:.1} m from the start", end.distance_m(route.anchor));
        }
        println!("  camera centre: {}", state.camera().viewport().center);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_coordinate, parse_speed};

    #[test]
    fn speed_must_be_walkable() {
        assert_eq!(parse_speed("2.5"), Ok(2.5));
        assert!(parse_speed("1e-9").is_err());
        assert!(parse_speed("0").is_err());
        assert!(parse_speed("inf").is_err());
        assert!(parse_speed("fast").is_err());
    }

    #[test]
    fn coordinate_flag() {
        assert!(parse_coordinate("37.77, -122.42").is_ok());
        assert!(parse_coordinate("95,0").is_err());
        assert!(parse_coordinate("37.77").is_err());
    }
}

//! Route export for overlay renderers and external tools.
//!
//! - CSV: `seq,latitude,longitude`, one row per coordinate.
//! - GeoJSON: a single `Feature` with a `LineString` geometry.  GeoJSON
//!   positions are `[longitude, latitude]`.

use std::io::Write;
use std::path::Path;

use serde_json::{Value, json};

use crate::{Route, RouteResult};

/// Write the route coordinates as CSV to any `Write` sink.
pub fn write_route_csv<W: Write>(route: &Route, sink: W) -> RouteResult<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(["seq", "latitude", "longitude"])?;
    for (i, c) in route.coordinates.iter().enumerate() {
        writer.write_record(&[i.to_string(), c.lat.to_string(), c.lon.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// The route as a GeoJSON `Feature`.
pub fn route_geojson(route: &Route) -> Value {
    let positions: Vec<Value> = route
        .coordinates
        .iter()
        .map(|c| json!([c.lon, c.lat]))
        .collect();

    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": positions,
        },
        "properties": {
            "shape": route.shape,
            "goal": route.goal.value(),
            "anchor": [route.anchor.lon, route.anchor.lat],
            "length_m": route.length_m(),
        },
    })
}

/// Write [`route_geojson`] to `path`, pretty-printed.
pub fn write_route_geojson(route: &Route, path: &Path) -> RouteResult<()> {
    let text = serde_json::to_string_pretty(&route_geojson(route))?;
    std::fs::write(path, text)?;
    Ok(())
}

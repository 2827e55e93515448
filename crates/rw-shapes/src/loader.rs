//! CSV template loader.
//!
//! # CSV format
//!
//! One row per vertex.  Rows for the same template may appear in any order;
//! `seq` fixes the walking order within a template.
//!
//! ```csv
//! name,seq,dx,dy
//! Square,0,0,0
//! Square,1,1,0
//! Square,2,1,1
//! Square,3,0,1
//! Square,4,0,0
//! ```
//!
//! Templates are returned in order of first appearance in the file.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::template::{NormalizedOffset, ShapeTemplate};
use crate::ShapeError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VertexRecord {
    name: String,
    seq:  u32,
    dx:   f64,
    dy:   f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load templates from a CSV file.
pub fn load_templates_csv(path: &Path) -> Result<Vec<ShapeTemplate>, ShapeError> {
    let file = std::fs::File::open(path)?;
    load_templates_reader(file)
}

/// Like [`load_templates_csv`] but accepts any `Read` source.
pub fn load_templates_reader<R: Read>(reader: R) -> Result<Vec<ShapeTemplate>, ShapeError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut order: Vec<String> = Vec::new();
    let mut by_name: HashMap<String, Vec<VertexRecord>> = HashMap::new();

    for result in csv_reader.deserialize::<VertexRecord>() {
        let row = result.map_err(|e| ShapeError::Parse(e.to_string()))?;
        if !row.dx.is_finite() || !row.dy.is_finite() {
            return Err(ShapeError::NonFinite { name: row.name, seq: row.seq });
        }
        let name = row.name.trim().to_owned();
        if name.is_empty() {
            return Err(ShapeError::Parse(format!("vertex {} has an empty template name", row.seq)));
        }
        if !by_name.contains_key(&name) {
            order.push(name.clone());
        }
        by_name.entry(name).or_default().push(row);
    }

    // ── Build one template per name ───────────────────────────────────────
    let mut templates = Vec::with_capacity(order.len());
    for name in order {
        let mut rows = by_name.remove(&name).unwrap_or_default();
        rows.sort_by_key(|r| r.seq);

        if let Some(dup) = rows.windows(2).find(|w| w[0].seq == w[1].seq) {
            return Err(ShapeError::DuplicateVertex { name, seq: dup[0].seq });
        }

        let vertices = rows
            .iter()
            .map(|r| NormalizedOffset::new(r.dx, r.dy))
            .collect();
        log::debug!("loaded shape template {name:?} ({} vertices)", rows.len());
        templates.push(ShapeTemplate::new(name, vertices));
    }

    Ok(templates)
}

//! Loader for the classified location dataset.
//!
//! The external ETL emits a two-column record stream: one record per
//! line, `location name,category tag`. The loader maps each category to
//! its fixed safety score, inserts one vertex per record, and finishes by
//! generating a random topology over the vertices.
//!
//! Only dataset-sourced categories carry a score; any other tag fails
//! the load. Location names may themselves contain commas, so the tag is
//! taken from the text after the *last* comma.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use manhunt_types::{LocationId, LocationKind};
use rand::Rng;
use tracing::info;

use crate::graph::LocationGraph;

/// Errors that can occur while loading the location dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A record did not have the `name,category` shape.
    #[error("malformed record on line {line}")]
    MalformedRecord {
        /// 1-based line number of the offending record.
        line: usize,
    },

    /// A record carried a category tag outside the fixed vocabulary.
    #[error("unknown category tag {tag:?} on line {line}")]
    UnknownCategory {
        /// The unrecognized tag text.
        tag: String,
        /// 1-based line number of the offending record.
        line: usize,
    },

    /// A record carried a known tag with no entry in the score table.
    #[error("category {tag:?} on line {line} has no score assigned")]
    UnscoredCategory {
        /// The tag without a score.
        tag: String,
        /// 1-based line number of the offending record.
        line: usize,
    },

    /// A graph operation failed during construction.
    #[error("graph construction failed: {source}")]
    World {
        /// The underlying graph error.
        #[from]
        source: crate::error::WorldError,
    },
}

/// Fixed safety score for each dataset-sourced category.
///
/// Returns `None` for categories that never appear in the dataset.
pub const fn score_for_category(kind: LocationKind) -> Option<u8> {
    match kind {
        LocationKind::Park | LocationKind::FireStation => Some(3),
        LocationKind::Cemetery => Some(0),
        LocationKind::Health => Some(7),
        LocationKind::PoliceStation => Some(10),
        LocationKind::TouristSpot => Some(5),
        LocationKind::Store
        | LocationKind::Food
        | LocationKind::FinancialServices
        | LocationKind::AutomobileServices
        | LocationKind::EmergencyServices
        | LocationKind::School => None,
    }
}

/// Build a location graph from a two-column record stream.
///
/// Each non-empty line is parsed as `name,category`; the category's fixed
/// score is looked up, a vertex is inserted, and once all records are in,
/// a random topology is generated over them with the given iteration
/// budget ([`crate::graph::DEFAULT_RANDOMIZE_ITERATIONS`] is the usual
/// choice).
///
/// # Errors
///
/// Returns [`DatasetError`] on I/O failure, a malformed record, or a
/// category outside the scored vocabulary.
pub fn load_location_graph<R: BufRead>(
    reader: R,
    rng: &mut impl Rng,
    iterations: u32,
) -> Result<LocationGraph, DatasetError> {
    let mut graph = LocationGraph::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index.saturating_add(1);
        let record = line?;
        let record = record.trim();
        if record.is_empty() {
            continue;
        }

        let Some((name, tag)) = record.rsplit_once(',') else {
            return Err(DatasetError::MalformedRecord { line: line_number });
        };
        let name = name.trim();
        let tag = tag.trim();
        if name.is_empty() {
            return Err(DatasetError::MalformedRecord { line: line_number });
        }

        let kind: LocationKind = tag.parse().map_err(|_tag| DatasetError::UnknownCategory {
            tag: tag.to_owned(),
            line: line_number,
        })?;
        let score = score_for_category(kind).ok_or_else(|| DatasetError::UnscoredCategory {
            tag: tag.to_owned(),
            line: line_number,
        })?;

        graph.add_vertex(LocationId::from(name), kind, score);
    }

    graph.randomize_edges(rng, iterations)?;

    info!(
        vertices = graph.vertex_count(),
        edges = graph.edges().len(),
        "location graph loaded"
    );
    Ok(graph)
}

/// Load a location graph from a dataset file on disk.
///
/// # Errors
///
/// Returns [`DatasetError`] on I/O failure or any record error; see
/// [`load_location_graph`].
pub fn load_location_graph_from_path(
    path: impl AsRef<Path>,
    rng: &mut impl Rng,
    iterations: u32,
) -> Result<LocationGraph, DatasetError> {
    let file = File::open(path)?;
    load_location_graph(BufReader::new(file), rng, iterations)
}

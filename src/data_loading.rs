use std::path::{Path, PathBuf};

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

pub const ACTORS_FILE: &str = "actors.txt";
pub const MOVIES_FILE: &str = "movies.txt";
pub const CAST_FILE: &str = "movie-actors.txt";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Locations of the three pipe-delimited datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub actors: PathBuf,
    pub movies: PathBuf,
    pub cast: PathBuf,
}

impl DataFiles {
    /// Default file names resolved under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            actors: dir.join(ACTORS_FILE),
            movies: dir.join(MOVIES_FILE),
            cast: dir.join(CAST_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastEntry {
    pub movie_id: String,
    pub actor_id: String,
}

/// The raw datasets, each kept in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub actors: IndexMap<String, String>,
    pub movies: IndexMap<String, String>,
    pub cast: Vec<CastEntry>,
}

// one `left|right` line of any of the three files
#[derive(Debug, Deserialize)]
struct PairRow {
    left: String,
    right: String,
}

/// Reads a `|`-delimited file of two-field records.
///
/// Rows that don't have exactly two fields, or aren't valid UTF-8, are logged and
/// skipped. Only I/O failures are returned as errors.
pub fn read_pairs(path: &Path) -> Result<Vec<(String, String)>, LoadError> {
    let read_error = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false) // the files carry no column titles
        .quoting(false) // titles may contain quote characters
        .flexible(true)
        .from_path(path)
        .map_err(&read_error)?;

    let mut pairs = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(err) if matches!(err.kind(), ErrorKind::Utf8 { .. }) => {
                warn!("{}: skipping row that is not valid UTF-8: {}", path.display(), err);
                continue;
            }
            Err(err) => return Err(read_error(err)),
        }

        let line = record.position().map_or(0, |pos| pos.line());
        if record.len() != 2 {
            warn!(
                "{}:{}: skipping malformed row with {} field(s)",
                path.display(),
                line,
                record.len()
            );
            continue;
        }
        match record.deserialize::<PairRow>(None) {
            Ok(row) => pairs.push((row.left, row.right)),
            Err(err) => warn!("{}:{}: skipping row: {}", path.display(), line, err),
        }
    }
    Ok(pairs)
}

pub fn load_dataset(files: &DataFiles) -> Result<Dataset, LoadError> {
    // a repeated id keeps its first position and takes the later name
    let actors: IndexMap<String, String> = read_pairs(&files.actors)?.into_iter().collect();
    let movies: IndexMap<String, String> = read_pairs(&files.movies)?.into_iter().collect();
    let cast: Vec<CastEntry> = read_pairs(&files.cast)?
        .into_iter()
        .map(|(movie_id, actor_id)| CastEntry { movie_id, actor_id })
        .collect();

    info!(
        "loaded {} actors, {} movies, {} cast entries",
        actors.len(),
        movies.len(),
        cast.len()
    );
    Ok(Dataset {
        actors,
        movies,
        cast,
    })
}

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file {0:?} not found")]
    NotFound(PathBuf),
    #[error("could not read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("could not write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not serialize GeoJSON")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed KML markup: {0}")]
    Markup(#[from] roxmltree::Error),
    #[error("bad coordinates in placemark {placemark:?}: {reason}")]
    Coordinates {
        placemark: String,
        reason: CoordinateError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("{0:?} is not a number")]
    InvalidNumber(String),
    #[error("tuple {0:?} needs at least a longitude and a latitude")]
    IncompleteTuple(String),
    #[error("{0} has no coordinates element")]
    MissingElement(&'static str),
}

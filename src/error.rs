use std::path::PathBuf;

use thiserror::Error;

use crate::adjacency_lists::NodeId;

/// Fatal failures. Range violations are not errors; they are reported.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV, including a header missing a required column
    #[error("malformed csv in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}:{line}: missing field `{field}`")]
    MissingField {
        path: PathBuf,
        line: u64,
        field: &'static str,
    },

    #[error("{path}:{line}: field `{field}` is not an integer: {value:?}")]
    InvalidInteger {
        path: PathBuf,
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("node {0} is not in the graph")]
    UnknownNode(NodeId),

    #[error("invalid {what} range: min {min} > max {max}")]
    InvalidRange {
        what: &'static str,
        min: usize,
        max: usize,
    },
}

pub type CheckResult<T> = Result<T, CheckError>;

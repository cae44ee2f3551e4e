use crate::api::ApiError;
use std::fmt;
use thiserror::Error;

/// Remote resource that could not be matched by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// The account has no workspaces at all.
    NoWorkspaces,
    Workspace(String),
    Project(String),
    Tag(String),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::NoWorkspaces => write!(f, "no workspaces found in your account"),
            Resource::Workspace(name) => write!(f, "workspace '{}' not found", name),
            Resource::Project(name) => write!(f, "project '{}' not found in the workspace", name),
            Resource::Tag(name) => write!(f, "tag '{}' not found in the workspace", name),
        }
    }
}

/// Everything that can stop a run.
///
/// All variants except `CreationFailed` are raised before any entry is
/// created.
#[derive(Debug, Error)]
pub enum FillError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    NotFound(Resource),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("no time entries found for this project; run once with --from, --to and --desc first")]
    NoHistory,

    #[error("could not load Argentina holidays for {year}: {source}")]
    HolidayLookup {
        year: i32,
        #[source]
        source: ApiError,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("{failed} of {total} entries could not be created")]
    CreationFailed { failed: usize, total: usize },
}

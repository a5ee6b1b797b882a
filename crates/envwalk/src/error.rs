use std::path::PathBuf;

/// Errors surfaced by a walk or by loading an environment source.
///
/// A walk that fails leaves the structure partially substituted: every
/// string reached before the failure keeps its new value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("structure nesting exceeds the configured limit of {limit} levels")]
    DepthLimitExceeded { limit: usize },

    #[error("failed to load environment file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

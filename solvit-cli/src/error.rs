//! Error types emitted by the Solvit CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use solvit_core::OptimizeError;
use thiserror::Error;

/// Errors emitted by the Solvit CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the optimise request file failed.
    #[error("failed to open optimise request at {path:?}: {source}")]
    OpenRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Optimise request JSON could not be decoded.
    #[error("failed to parse optimise request JSON at {path:?}: {source}")]
    ParseRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The optimizer rejected the request.
    #[error("optimisation failed: {source}")]
    Optimize {
        #[source]
        source: OptimizeError,
    },
    /// Serialising the optimised route failed.
    #[error("failed to serialise optimised route: {0}")]
    SerialiseRoute(#[source] serde_json::Error),
    /// Writing the optimised route failed.
    #[error("failed to write optimised route: {0}")]
    WriteOutput(#[source] std::io::Error),
}

//! Optimize command implementation for the Solvit CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use solvit_core::{OptimizeRequest, OptimizedRoute, OverflowPolicy, RouteOptimizer};
use solvit_optimizer::{BranchAndBoundOptimizer, OptimizerConfig};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_MAX_EXACT_JOBS, ARG_OVERFLOW, ARG_PRUNE, ARG_REQUEST, CliError, ENV_REQUEST};

/// Behaviour when a request exceeds the exact search limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum OverflowArg {
    /// Fail with an excessive job count error.
    Reject,
    /// Order the jobs greedily instead.
    NearestNeighbour,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(value: OverflowArg) -> Self {
        match value {
            OverflowArg::Reject => Self::Reject,
            OverflowArg::NearestNeighbour => Self::NearestNeighbour,
        }
    }
}

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "optimize",
    long_about = "Order a provider's jobs so the round trip from the start \
                 location is as short as possible. The request is a JSON \
                 file holding a start position and a list of jobs. Search \
                 limits can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Optimise the visiting order of a provider's jobs"
)]
#[ortho_config(prefix = "SOLVIT")]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON file containing an optimise request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Largest job count searched exhaustively.
    #[arg(long = ARG_MAX_EXACT_JOBS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_exact_jobs: Option<usize>,
    /// What to do with requests above the exact search limit.
    #[arg(long = ARG_OVERFLOW, value_enum, value_name = "policy")]
    #[serde(default)]
    pub(crate) overflow: Option<OverflowArg>,
    /// Enable or disable branch pruning.
    #[arg(long = ARG_PRUNE, value_name = "bool", action = ArgAction::Set)]
    #[serde(default)]
    pub(crate) prune: Option<bool>,
}

impl OptimizeArgs {
    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptimizeConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Search settings handed to the optimizer.
    pub(crate) optimizer: OptimizerConfig,
}

impl OptimizeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_REQUEST,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_REQUEST,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_REQUEST,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;

        let defaults = OptimizerConfig::default();
        let optimizer = OptimizerConfig {
            max_exact_jobs: args.max_exact_jobs.unwrap_or(defaults.max_exact_jobs),
            overflow: args.overflow.map_or(defaults.overflow, OverflowPolicy::from),
            prune: args.prune.unwrap_or(defaults.prune),
        };

        Ok(Self {
            request_path,
            optimizer,
        })
    }
}

pub(super) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &mut stdout)
}

pub(super) fn run_optimize_with(
    args: OptimizeArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let route = execute_optimize(&config)?;
    write_route(writer, &route)
}

pub(super) fn execute_optimize(config: &OptimizeConfig) -> Result<OptimizedRoute, CliError> {
    let request = load_request(&config.request_path)?;
    log::debug!(
        "loaded {} jobs from {}",
        request.jobs.len(),
        config.request_path
    );
    BranchAndBoundOptimizer::with_config(config.optimizer.clone())
        .optimize(&request)
        .map_err(|source| CliError::Optimize { source })
}

/// Loads a JSON-encoded [`OptimizeRequest`] from disk.
pub(super) fn load_request(path: &Utf8Path) -> Result<OptimizeRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_route(writer: &mut dyn Write, route: &OptimizedRoute) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(route).map_err(CliError::SerialiseRoute)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}

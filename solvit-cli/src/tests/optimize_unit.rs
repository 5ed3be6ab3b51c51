//! Focused unit tests covering optimize CLI configuration and request handling.

use super::helpers::{diagonal_request, utf8_tempdir, write_request, write_utf8};
use super::*;
use crate::optimize::{
    OptimizeConfig, config_from_layers_for_test, execute_optimize, load_request,
    run_optimize_with,
};
use rstest::rstest;
use solvit_core::test_support::position;
use solvit_core::{
    OptimizeError, OptimizeRequest, OptimizedRoute, OverflowPolicy, SearchStrategy,
};
use solvit_optimizer::OptimizerConfig;

fn labels(route: &OptimizedRoute) -> Vec<&str> {
    route.stops.iter().map(|stop| stop.label.as_str()).collect()
}

#[rstest]
fn converting_optimize_without_request_errors() {
    let err = OptimizeConfig::try_from(OptimizeArgs::default())
        .expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn optimize_config_fills_optimizer_defaults() {
    let args = OptimizeArgs {
        request_path: Some("day.json".into()),
        ..OptimizeArgs::default()
    };
    let config = OptimizeConfig::try_from(args).expect("config should build");
    assert_eq!(config.request_path.as_str(), "day.json");
    assert_eq!(config.optimizer, OptimizerConfig::default());
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let (_tmp, root) = utf8_tempdir();
    let config = OptimizeConfig {
        request_path: root.join("absent.json"),
        optimizer: OptimizerConfig::default(),
    };
    let err = config
        .validate_sources()
        .expect_err("missing request should fail validation");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(path, root.join("absent.json"));
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = utf8_tempdir();
    let dir_path = root.join("requests");
    std::fs::create_dir(&dir_path).expect("create request directory");
    let config = OptimizeConfig {
        request_path: dir_path,
        optimizer: OptimizerConfig::default(),
    };
    let err = config
        .validate_sources()
        .expect_err("directory should fail validation");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_REQUEST),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_request_decodes_json() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    let request = diagonal_request();
    write_request(&request_path, &request);

    let decoded = load_request(&request_path).expect("request should decode");
    assert_eq!(decoded, request);
}

#[rstest]
fn load_request_accepts_missing_start_and_labels() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    write_utf8(
        &request_path,
        br#"{ "jobs": [{ "latitude": 1.0, "longitude": 2.0 }] }"#,
    );

    let decoded = load_request(&request_path).expect("request should decode");
    assert_eq!(decoded.start, None);
    assert_eq!(decoded.jobs, vec![position("", 1.0, 2.0)]);
}

#[rstest]
fn load_request_rejects_invalid_json() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    write_utf8(&request_path, b"{ not valid json");

    let err = load_request(&request_path).expect_err("invalid json should error");
    match err {
        CliError::ParseRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_request_io_error_returns_open_error() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");

    let err = load_request(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenRequest, found {other:?}"),
    }
}

#[rstest]
fn execute_optimize_orders_diagonal_jobs() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    write_request(&request_path, &diagonal_request());

    let config = OptimizeConfig {
        request_path,
        optimizer: OptimizerConfig::default(),
    };
    let route = execute_optimize(&config).expect("optimise should succeed");
    assert_eq!(labels(&route), ["C", "A", "B"]);
    assert_eq!(route.diagnostics.strategy, SearchStrategy::Exhaustive);
}

#[rstest]
#[case::missing_start(
    OptimizeRequest { start: None, ..diagonal_request() },
    OptimizerConfig::default(),
    OptimizeError::MissingStartLocation
)]
#[case::over_limit(
    diagonal_request(),
    OptimizerConfig { max_exact_jobs: 2, ..OptimizerConfig::default() },
    OptimizeError::ExcessiveJobCount { count: 3, limit: 2 }
)]
fn execute_optimize_surfaces_optimizer_errors(
    #[case] request: OptimizeRequest,
    #[case] optimizer: OptimizerConfig,
    #[case] expected: OptimizeError,
) {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    write_request(&request_path, &request);

    let config = OptimizeConfig {
        request_path,
        optimizer,
    };
    let err = execute_optimize(&config).expect_err("optimise should fail");
    match err {
        CliError::Optimize { source } => assert_eq!(source, expected),
        other => panic!("expected Optimize, found {other:?}"),
    }
}

#[rstest]
fn execute_optimize_falls_back_when_configured() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    write_request(&request_path, &diagonal_request());

    let config = OptimizeConfig {
        request_path,
        optimizer: OptimizerConfig {
            max_exact_jobs: 2,
            overflow: OverflowPolicy::NearestNeighbour,
            prune: true,
        },
    };
    let route = execute_optimize(&config).expect("fallback should succeed");
    assert_eq!(route.diagnostics.strategy, SearchStrategy::NearestNeighbour);
    assert_eq!(labels(&route), ["C", "A", "B"]);
}

#[rstest]
fn run_optimize_writes_pretty_json_route() {
    let (_tmp, root) = utf8_tempdir();
    let request_path = root.join("request.json");
    write_request(&request_path, &diagonal_request());

    let args = OptimizeArgs {
        request_path: Some(request_path),
        ..OptimizeArgs::default()
    };
    let mut output = Vec::new();
    run_optimize_with(args, &mut output).expect("run should succeed");

    let text = String::from_utf8(output).expect("output should be UTF-8");
    assert!(text.ends_with('\n'));
    let route: OptimizedRoute = serde_json::from_str(&text).expect("output should be a route");
    assert_eq!(labels(&route), ["C", "A", "B"]);
    assert!(route.total_distance_km > 0.0);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "max_exact_jobs": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "request_path": "from-file.json",
            "max_exact_jobs": 5,
            "overflow": "nearest-neighbour",
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": "from-env.json",
        "max_exact_jobs": 7,
    }));
    composer.push_cli(json!({ "prune": false }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path.as_str(), "from-env.json");
    assert_eq!(
        config.optimizer,
        OptimizerConfig {
            max_exact_jobs: 7,
            overflow: OverflowPolicy::NearestNeighbour,
            prune: false,
        }
    );
}

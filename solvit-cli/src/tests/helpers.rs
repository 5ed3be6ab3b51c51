//! Test helpers for writing optimise requests into temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use solvit_core::OptimizeRequest;
use solvit_core::test_support::position;
use std::fs;
use tempfile::TempDir;

/// Create a temporary directory and return it with its UTF-8 path.
pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write test file");
}

pub(super) fn write_request(path: &Utf8Path, request: &OptimizeRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}

/// The three jobs on the diagonal north-east of the origin.
pub(super) fn diagonal_request() -> OptimizeRequest {
    OptimizeRequest::new(
        position("start", 0.0, 0.0),
        vec![
            position("A", 1.0, 1.0),
            position("B", 2.0, 2.0),
            position("C", 0.5, 0.5),
        ],
    )
}

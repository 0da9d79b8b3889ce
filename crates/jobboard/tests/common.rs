use std::path::Path;

use mockito::{Matcher, Mock, ServerGuard};

pub fn run_cli(args: &[&str]) -> (String, String, bool) {
    match jobboard::run_cli(args) {
        Ok(stdout) => (stdout, String::new(), true),
        Err(stderr) => (String::new(), stderr, false),
    }
}

/// Run the CLI without colors and with storage below `data_dir`.
pub fn run_in(data_dir: &Path, args: &[&str]) -> (String, String, bool) {
    let dir = data_dir.to_str().expect("utf-8 temp path");
    let mut full = vec!["--color", "never", "--data-dir", dir];
    full.extend_from_slice(args);
    run_cli(&full)
}

/// Answer every GET on `server` with one canned response.
pub fn mock_jobs(
    server: &mut ServerGuard,
    status: usize,
    content_type: &str,
    body: &[u8],
) -> Mock {
    server
        .mock("GET", Matcher::Any)
        .with_status(status)
        .with_header("content-type", content_type)
        .with_body(body)
        .create()
}

pub fn endpoint(server: &ServerGuard) -> String {
    format!("{}/jobs", server.url())
}

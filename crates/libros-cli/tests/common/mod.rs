use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI with an isolated HOME so state never leaks between tests.
pub fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_libros"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure; returns stderr.
pub fn run_cli_failure(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Point the CLI at a mock server playing both services.
pub fn configure(home: &Path, server_uri: &str, port: u16) {
    run_cli_success(
        &[
            "config",
            "set",
            "--host",
            "127.0.0.1",
            "--port",
            &port.to_string(),
            "--auth-url",
            server_uri,
        ],
        home,
    );
}

#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Test helper for running geosieve commands with less boilerplate
pub struct GeosieveTest {
    cmd: Command,
}

pub fn geosieve_command() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("geosieve"))
}

impl GeosieveTest {
    /// Create a new geosieve command test
    pub fn new() -> Self {
        Self {
            cmd: geosieve_command(),
        }
    }

    /// Add arguments to the command
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    /// Add a single argument to the command
    pub fn arg<S: AsRef<std::ffi::OsStr>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg);
        self
    }

    /// Feed the command's stdin
    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Assert the command succeeds
    pub fn assert_success(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().success()
    }

    /// Assert the command succeeds and contains text in stdout
    pub fn assert_success_contains(mut self, text: &str) -> assert_cmd::assert::Assert {
        self.cmd
            .assert()
            .success()
            .stdout(predicate::str::contains(text))
    }

    /// Assert the command fails
    pub fn assert_failure(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().failure()
    }

    /// Get the raw command for complex assertions (when helpers aren't enough)
    pub fn command(self) -> Command {
        self.cmd
    }

    /// Get command output for inspection
    pub fn get_output(mut self) -> std::process::Output {
        self.cmd.output().unwrap()
    }
}

/// Quick helper for filtering a dataset file
pub fn filter_file_test(path: &str, bbox: &str) -> GeosieveTest {
    GeosieveTest::new().args(["--path", path, "--bbox", bbox])
}

/// Quick helper for filtering stdin
pub fn filter_stdin_test(input: &str, bbox: &str) -> GeosieveTest {
    GeosieveTest::new()
        .args(["--path", "-", "--bbox", bbox])
        .stdin(input)
}

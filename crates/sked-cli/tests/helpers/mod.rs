use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness running the `sked` binary against a throwaway state file
pub struct CliTestHarness {
    temp_dir: TempDir,
    state_path: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let state_path = temp_dir.path().join("sked.json");

        Self {
            temp_dir,
            state_path,
        }
    }

    /// A `sked` command isolated in the temp directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sked").expect("Failed to find sked binary");
        cmd.current_dir(self.temp_dir.path())
            .env("SKED_STATE_PATH", &self.state_path)
            .env("SKED_EXPORT_DIR", self.export_dir())
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    pub fn export_dir(&self) -> PathBuf {
        self.temp_dir.path().join("weekly_schedules")
    }

    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Monday morning standup, 9:00 to 9:30 on Jan 6, 2025
    pub fn standup_args() -> Vec<&'static str> {
        vec![
            "add", "Standup",
            "--location", "Room 1",
            "--start", "2025-01-06 09:00",
            "--end", "2025-01-06 09:30",
        ]
    }

    /// Mon/Wed sync at the standup slot over two weeks
    pub fn recurring_sync_args() -> Vec<&'static str> {
        vec![
            "recur", "Sync",
            "--location", "Room 2",
            "--on", "mon,wed",
            "--from", "2025-01-06",
            "--to", "2025-01-19",
            "--at", "9:00 AM",
            "--until", "9:30 AM",
        ]
    }
}

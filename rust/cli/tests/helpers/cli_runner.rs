use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::helpers::temp_files::TempDir;
use crate::helpers::{TestError, TestErrorKind};

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    temp_dir: TempDir,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl CliRunner {
    pub fn new() -> Result<Self, TestError> {
        let temp_dir = TempDir::new().map_err(|err| {
            TestError::with_source(
                TestErrorKind::FileOperationFailed,
                "failed to create temporary CLI workspace",
                err,
            )
        })?;

        let binary_path = Self::resolve_binary_path()?;

        Ok(Self {
            binary_path,
            temp_dir,
        })
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    #[allow(dead_code)]
    pub fn run_with_timeout(&self, args: &[&str], timeout: Duration) -> CliResult {
        self.run_inner(args, &[], Some(timeout))
    }

    fn run_inner(
        &self,
        args: &[&str],
        env: &[(&str, &str)],
        timeout: Option<Duration>,
    ) -> CliResult {
        if self.binary_path.is_file() {
            self.run_via_binary(args, env, timeout)
        } else {
            assert!(
                env.is_empty(),
                "environment overrides need the compiled war_game binary"
            );
            self.run_via_library(args)
        }
    }

    fn run_via_binary(
        &self,
        args: &[&str],
        env: &[(&str, &str)],
        timeout: Option<Duration>,
    ) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .env_remove("WARSIM_CONFIG")
            .env_remove("WARSIM_MAX_ROUNDS")
            .env_remove("WARSIM_DETECT_REPEATS")
            .env_remove("WARSIM_LOG");

        for (key, value) in env.iter() {
            cmd.env(key, value);
        }

        let start = Instant::now();
        let mut child = cmd.spawn().expect("failed to spawn war_game binary");

        let (status, stdout, stderr) = if let Some(limit) = timeout {
            loop {
                if child.try_wait().expect("failed to poll child").is_some()
                    || start.elapsed() >= limit
                {
                    if start.elapsed() >= limit {
                        let _ = child.kill();
                    }
                    let output = child.wait_with_output().expect("failed to read output");
                    break (output.status, output.stdout, output.stderr);
                }
                std::thread::sleep(Duration::from_millis(10));
            }
        } else {
            let output = child.wait_with_output().expect("failed to read output");
            (output.status, output.stdout, output.stderr)
        };

        CliResult {
            exit_code: status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&stdout).to_string(),
            stderr: String::from_utf8_lossy(&stderr).to_string(),
            duration: start.elapsed(),
        }
    }

    fn run_via_library(&self, args: &[&str]) -> CliResult {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let start = Instant::now();
        let argv: Vec<String> = std::iter::once("war_game".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let code = warsim_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
            duration: start.elapsed(),
        }
    }

    fn resolve_binary_path() -> Result<PathBuf, TestError> {
        if let Some(explicit) = option_env!("CARGO_BIN_EXE_war_game") {
            let candidate = PathBuf::from(explicit);
            if candidate.is_file() {
                return Ok(candidate);
            }

            return Err(TestError::new(
                TestErrorKind::BinaryNotFound,
                format!(
                    "CARGO_BIN_EXE_war_game points to '{}', but the file does not exist",
                    explicit
                ),
            ));
        }

        let executable = if cfg!(windows) {
            "war_game.exe"
        } else {
            "war_game"
        };
        let mut search_roots = Vec::new();
        if let Ok(custom_target) = std::env::var("CARGO_TARGET_DIR") {
            search_roots.push(PathBuf::from(custom_target));
        }
        search_roots.push(PathBuf::from("target"));

        for root in &search_roots {
            for profile in ["debug", "release"] {
                let candidate = root.join(profile).join(executable);
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }

        // not found: run_inner falls back to the library entry point
        Ok(search_roots[0].join("debug").join(executable))
    }
}

#[cfg(test)]
mod tests {
    use super::CliRunner;
    use std::time::Duration;

    #[test]
    fn run_executes_help() {
        let cli = CliRunner::new().expect("CliRunner init");
        let result = cli.run(&["--help"]);

        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("Usage"));
    }

    #[test]
    fn run_with_timeout_finishes_quickly() {
        let cli = CliRunner::new().expect("CliRunner init");
        let result = cli.run_with_timeout(&["--version"], Duration::from_secs(5));

        assert_eq!(result.exit_code, 0);
        assert!(result.duration <= Duration::from_secs(5));
    }
}

//! CUPS spooler gateway
//!
//! Sends encoded print jobs to CUPS via `lp -o raw` and answers
//! printer list/status questions via `lpstat`. All spooler access goes
//! through the [`CommandRunner`] trait so the parsing and error logic
//! can be tested without a real spooler present.

use std::io::{self, Write};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Captured result of one external command invocation.
#[derive(Debug, Clone)]
pub struct CmdOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Narrow seam over process execution.
///
/// Production uses [`OsCommandRunner`]; tests substitute an in-memory
/// fake that scripts `lp`/`lpstat` behavior.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str]) -> io::Result<CmdOutput>;
}

/// Runs commands as OS processes.
#[derive(Debug, Default, Clone)]
pub struct OsCommandRunner;

#[async_trait]
impl CommandRunner for OsCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> io::Result<CmdOutput> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .output()
            .await?;

        Ok(CmdOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Spooler gateway error types
#[derive(Debug, Error)]
pub enum SpoolError {
    /// Spool file or spooler process could not be set up / executed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The spooler ran but rejected the job
    #[error("Job rejected: {0}")]
    Rejected(String),
}

/// Result type for spooler operations
pub type SpoolResult<T> = Result<T, SpoolError>;

/// Gateway to the CUPS print spooler.
pub struct CupsSpooler<R = OsCommandRunner> {
    runner: R,
}

impl CupsSpooler<OsCommandRunner> {
    pub fn new() -> Self {
        Self {
            runner: OsCommandRunner,
        }
    }
}

impl Default for CupsSpooler<OsCommandRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> CupsSpooler<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Access the underlying command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Submit an encoded job to a printer in raw mode.
    ///
    /// The bytes are written to a uniquely named spool file which is
    /// deleted when this call returns, on every path — the
    /// `NamedTempFile` guard owns the file for the duration of the
    /// `lp` invocation. Returns the trimmed `lp` stdout (the job id
    /// line) on success.
    #[instrument(skip(self, data), fields(printer = %printer, bytes = data.len()))]
    pub async fn submit(&self, data: &[u8], printer: &str) -> SpoolResult<String> {
        let mut spool = tempfile::Builder::new()
            .prefix("memo-")
            .suffix(".bin")
            .tempfile()?;
        spool.write_all(data)?;
        spool.flush()?;

        let path = spool.path().to_string_lossy().into_owned();
        let output = self
            .runner
            .run("lp", &["-d", printer, "-o", "raw", &path])
            .await?;

        if output.success {
            let job = output.stdout.trim().to_string();
            info!(job = %job, "print job submitted");
            Ok(job)
        } else {
            let stderr = output.stderr.trim().to_string();
            warn!(stderr = %stderr, "lp rejected print job");
            Err(SpoolError::Rejected(stderr))
        }
    }

    /// List printer names known to CUPS.
    ///
    /// Parses `lpstat -p` output, keeping only printer-declaration
    /// lines. Any invocation failure yields an empty list — "no
    /// printers known" rather than an error.
    #[instrument(skip(self))]
    pub async fn list_printers(&self) -> Vec<String> {
        let output = match self.runner.run("lpstat", &["-p"]).await {
            Ok(o) if o.success => o,
            Ok(o) => {
                warn!(stderr = %o.stderr.trim(), "lpstat -p failed");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "lpstat not available");
                return Vec::new();
            }
        };

        output
            .stdout
            .lines()
            .filter(|line| line.starts_with("printer "))
            .filter_map(|line| line.split_whitespace().nth(1))
            .map(str::to_string)
            .collect()
    }

    /// Raw status text for one printer.
    ///
    /// Returns `lpstat -p <name>` output verbatim (trimmed), a
    /// not-found message when CUPS does not know the device, or a
    /// check-failed message when the spooler cannot be invoked.
    #[instrument(skip(self), fields(printer = %printer))]
    pub async fn query_status(&self, printer: &str) -> String {
        match self.runner.run("lpstat", &["-p", printer]).await {
            Ok(o) if o.success => o.stdout.trim().to_string(),
            Ok(_) => format!("프린터 '{printer}'을 찾을 수 없습니다."),
            Err(e) => format!("상태 확인 실패: {e}"),
        }
    }
}

/// Best-effort availability check over spooler status phrasing.
///
/// CUPS wording varies by version and locale; "idle" and "accepting"
/// cover the common ready states.
pub fn is_available(status: &str) -> bool {
    let s = status.to_lowercase();
    s.contains("idle") || s.contains("accepting")
}

//! Agent configuration
//!
//! All settings come from environment variables with sensible
//! defaults; a `.env` file is honored at startup.

/// Print agent configuration
///
/// # 환경변수
///
/// | 환경변수 | 기본값 | 설명 |
/// |----------|--------|------|
/// | PRINTER_NAME | BIXOLON_SRP_330II | 기본 프린터 이름 |
/// | SPOOL_WORKERS | 2 | 동시 spooler 호출 상한 |
/// | LOG_LEVEL | info | 로그 레벨 |
/// | LOG_DIR | (없음) | 로그 파일 디렉터리 (없으면 stderr만) |
#[derive(Debug, Clone)]
pub struct Config {
    /// Default printer used when the caller does not name one
    pub printer_name: String,
    /// Upper bound on concurrent spooler invocations
    pub spool_workers: usize,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Optional directory for daily rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            printer_name: std::env::var("PRINTER_NAME")
                .unwrap_or_else(|_| "BIXOLON_SRP_330II".into()),
            spool_workers: std::env::var("SPOOL_WORKERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

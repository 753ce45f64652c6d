//! Memo print service
//!
//! The three operations exposed to callers (CLI today, a tool protocol
//! layer tomorrow): print/preview a memo, list printers, check printer
//! status. Every operation returns human-readable text and never
//! panics or propagates an error past this boundary; a failed spooler
//! call becomes a diagnostic message.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{error, info, instrument, warn};

use receipt_printer::{encode_page, paginate, preview};

use crate::spooler::{CommandRunner, CupsSpooler, OsCommandRunner, is_available};

/// Maximum memo length in characters, enforced before formatting.
pub const MAX_MEMO_CHARS: usize = 500;

/// Bounded-concurrency print service over the CUPS gateway.
///
/// Formatting is pure and runs inline; only spooler invocations are
/// gated, through a small semaphore, so a burst of requests cannot
/// pile up `lp` processes. Print volume is low and one job at a time
/// per device is the expected pattern.
pub struct PrintService<R: CommandRunner = OsCommandRunner> {
    spooler: CupsSpooler<R>,
    spool_permits: Arc<Semaphore>,
}

impl PrintService<OsCommandRunner> {
    pub fn new(workers: usize) -> Self {
        Self::with_spooler(CupsSpooler::new(), workers)
    }
}

impl<R: CommandRunner> PrintService<R> {
    pub fn with_spooler(spooler: CupsSpooler<R>, workers: usize) -> Self {
        Self {
            spooler,
            spool_permits: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    /// Print a memo, or render its preview.
    ///
    /// Validates the text (non-empty after trim, ≤ 500 chars), then
    /// wraps/composes it into a page. Preview mode renders the
    /// bordered block; print mode encodes ESC/POS bytes and submits
    /// them through the spooler.
    #[instrument(skip(self, text), fields(printer = %printer, preview = preview_mode))]
    pub async fn print_memo(&self, text: &str, printer: &str, preview_mode: bool) -> String {
        let text = text.trim();

        if text.is_empty() {
            return "❌ 출력할 텍스트가 비어있습니다.".to_string();
        }

        let chars = text.chars().count();
        if chars > MAX_MEMO_CHARS {
            return format!(
                "❌ 텍스트가 너무 깁니다. ({chars}/{MAX_MEMO_CHARS}자) {MAX_MEMO_CHARS}자 이내로 입력하세요."
            );
        }

        let page = paginate(text);

        if preview_mode {
            return format!("📄 출력 미리보기 ({chars}자):\n{}", preview::render(&page));
        }

        let data = encode_page(&page);

        let _permit = match self.spool_permits.acquire().await {
            Ok(permit) => permit,
            Err(_) => {
                error!("spool semaphore closed");
                return format!("❌ 출력 실패: {printer}");
            }
        };

        match self.spooler.submit(&data, printer).await {
            Ok(job) => {
                info!(job = %job, lines = page.len(), "memo printed");
                format!("✅ 출력 완료: {chars}자")
            }
            Err(e) => {
                warn!(error = %e, "memo print failed");
                format!("❌ 출력 실패: {printer}")
            }
        }
    }

    /// List printers known to CUPS, with each printer's status line.
    pub async fn list_printers(&self) -> String {
        let printers = self.spooler.list_printers().await;

        if printers.is_empty() {
            return "❌ 사용 가능한 프린터가 없습니다.\n\
                    💡 CUPS에 프린터가 등록되어 있는지 확인하세요: lpstat -p"
                .to_string();
        }

        let mut out = vec!["🖨️  사용 가능한 프린터:".to_string()];
        for name in &printers {
            let status = self.spooler.query_status(name).await;
            out.push(format!("  ✅ {name}"));
            out.push(format!("     상태: {status}"));
        }
        out.push(format!("\n총 {}개 프린터", printers.len()));

        out.join("\n")
    }

    /// Status report for one printer, with an availability icon and
    /// check timestamp.
    pub async fn printer_status(&self, printer: &str) -> String {
        let status = self.spooler.query_status(printer).await;
        let icon = if is_available(&status) { "✅" } else { "❌" };
        let checked_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

        format!(
            "📊 프린터 상태: {printer}\n{icon} {status}\n🕒 확인 시각: {checked_at}"
        )
    }
}

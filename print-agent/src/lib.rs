//! Print Agent - 메모 영수증 출력 에이전트
//!
//! Takes short memo text, formats it with the `receipt-printer` crate
//! and dispatches it to a CUPS-managed thermal printer.
//!
//! # 모듈 구조
//!
//! ```text
//! print-agent/src/
//! ├── config.rs    # 환경변수 기반 설정
//! ├── logger.rs    # tracing 초기화
//! ├── spooler.rs   # CUPS 게이트웨이 (lp / lpstat)
//! └── service.rs   # print / list / status 오퍼레이션
//! ```
//!
//! The service surface is three operations — print a memo (or its
//! preview), list printers, query printer status — each returning
//! human-readable text. A tool-protocol or RPC layer can wrap those
//! operations without knowing anything about ESC/POS or CUPS.

pub mod config;
pub mod logger;
pub mod service;
pub mod spooler;

// 공용 타입 re-export
pub use config::Config;
pub use service::{MAX_MEMO_CHARS, PrintService};
pub use spooler::{
    CmdOutput, CommandRunner, CupsSpooler, OsCommandRunner, SpoolError, SpoolResult, is_available,
};

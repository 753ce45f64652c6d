use clap::Parser;

use print_agent::{Config, PrintService, logger};

/// 빅솔론 영수증 프린터 메모 출력 (CUPS 사용)
#[derive(Parser, Debug)]
#[command(name = "print-agent", version, about)]
struct Cli {
    /// 출력할 텍스트
    text: Option<String>,

    /// 프린터 이름 (기본값: PRINTER_NAME 환경변수)
    #[arg(short, long)]
    printer: Option<String>,

    /// 출력 미리보기만 표시
    #[arg(long)]
    preview: bool,

    /// 사용 가능한 프린터 목록 표시
    #[arg(long)]
    list_printers: bool,

    /// 프린터 상태 확인
    #[arg(long)]
    status: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    logger::init_logger(&config);

    let cli = Cli::parse();
    let printer = cli.printer.unwrap_or_else(|| config.printer_name.clone());
    let service = PrintService::new(config.spool_workers);

    if cli.list_printers {
        println!("{}", service.list_printers().await);
        return Ok(());
    }

    if cli.status {
        println!("{}", service.printer_status(&printer).await);
        return Ok(());
    }

    let Some(text) = cli.text else {
        println!("❌ 출력할 텍스트를 입력하세요.");
        println!("💡 사용법: print-agent \"출력할 텍스트\"");
        return Ok(());
    };

    let result = service.print_memo(&text, &printer, cli.preview).await;
    println!("{result}");

    if result.starts_with("❌ 출력 실패") {
        println!();
        println!("🔧 문제 해결 방법:");
        println!("1. 프린터가 CUPS에 등록되어 있는지 확인: --list-printers");
        println!("2. 프린터 상태 확인: --status");
        println!("3. 프린터 이름이 정확한지 확인: -p 프린터이름");
        println!("4. 미리보기로 내용 확인: --preview");
    }

    Ok(())
}

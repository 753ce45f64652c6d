//! Gateway integration tests against a scripted command runner.
//!
//! Drives the CUPS gateway through the `CommandRunner` seam so the
//! lp/lpstat argv shapes, output parsing and spool-file lifecycle can
//! be verified without a spooler installed.

use std::io;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use print_agent::{CmdOutput, CommandRunner, CupsSpooler, SpoolError};

type Script = Box<dyn Fn(&str, &[&str]) -> io::Result<CmdOutput> + Send + Sync>;

/// Command runner driven by a closure, recording every invocation.
struct ScriptedRunner {
    script: Script,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    fn new(script: impl Fn(&str, &[&str]) -> io::Result<CmdOutput> + Send + Sync + 'static) -> Self {
        Self {
            script: Box::new(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> io::Result<CmdOutput> {
        let mut argv = vec![program.to_string()];
        argv.extend(args.iter().map(|a| a.to_string()));
        self.calls.lock().unwrap().push(argv);
        (self.script)(program, args)
    }
}

fn ok(stdout: &str) -> io::Result<CmdOutput> {
    Ok(CmdOutput {
        success: true,
        stdout: stdout.to_string(),
        stderr: String::new(),
    })
}

fn failed(stderr: &str) -> io::Result<CmdOutput> {
    Ok(CmdOutput {
        success: false,
        stdout: String::new(),
        stderr: stderr.to_string(),
    })
}

#[tokio::test]
async fn submit_invokes_lp_raw_with_spool_file() {
    // Capture the spool file content at invocation time, before the
    // gateway deletes it.
    let spooled = std::sync::Arc::new(Mutex::new(Vec::new()));
    let spooled_in_script = spooled.clone();

    let runner = ScriptedRunner::new(move |program, args| {
        assert_eq!(program, "lp");
        let path = args.last().unwrap();
        *spooled_in_script.lock().unwrap() = std::fs::read(path).unwrap();
        ok("request id is BIXOLON_SRP_330II-7 (1 file(s))\n")
    });
    let spooler = CupsSpooler::with_runner(runner);

    let job = spooler
        .submit(&[0x1B, 0x40, 0xBF, 0xEC], "BIXOLON_SRP_330II")
        .await
        .unwrap();
    assert_eq!(job, "request id is BIXOLON_SRP_330II-7 (1 file(s))");

    let calls = spooler.runner().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(&calls[0][..5], &["lp", "-d", "BIXOLON_SRP_330II", "-o", "raw"]);

    // Payload reached the spool file intact
    assert_eq!(*spooled.lock().unwrap(), vec![0x1B, 0x40, 0xBF, 0xEC]);

    // Spool file is gone after the call
    let path = calls[0].last().unwrap().clone();
    assert!(path.ends_with(".bin"));
    assert!(!Path::new(&path).exists());
}

#[tokio::test]
async fn submit_rejected_cleans_spool_file() {
    let runner =
        ScriptedRunner::new(|_, _| failed("lp: The printer or class does not exist.\n"));
    let spooler = CupsSpooler::with_runner(runner);

    let err = spooler.submit(b"data", "NOPE").await.unwrap_err();
    match err {
        SpoolError::Rejected(stderr) => {
            assert_eq!(stderr, "lp: The printer or class does not exist.")
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let path = spooler.runner().calls()[0].last().unwrap().clone();
    assert!(!Path::new(&path).exists());
}

#[tokio::test]
async fn submit_spawn_failure_cleans_spool_file() {
    let runner = ScriptedRunner::new(|_, _| {
        Err(io::Error::new(io::ErrorKind::NotFound, "lp: command not found"))
    });
    let spooler = CupsSpooler::with_runner(runner);

    let err = spooler.submit(b"data", "BIXOLON_SRP_330II").await.unwrap_err();
    assert!(matches!(err, SpoolError::Io(_)));

    let path = spooler.runner().calls()[0].last().unwrap().clone();
    assert!(!Path::new(&path).exists());
}

#[tokio::test]
async fn list_printers_keeps_only_declaration_lines() {
    let runner = ScriptedRunner::new(|_, _| {
        ok("printer BIXOLON_SRP_330II is idle.  enabled since Mon 01 Jan 2026\n\
            printer Office_Laser disabled since Tue 02 Jan 2026 -\n\
            \treason unknown\n\
            system default destination: BIXOLON_SRP_330II\n")
    });
    let spooler = CupsSpooler::with_runner(runner);

    let printers = spooler.list_printers().await;
    assert_eq!(printers, vec!["BIXOLON_SRP_330II", "Office_Laser"]);
    assert_eq!(spooler.runner().calls(), vec![vec!["lpstat", "-p"]]);
}

#[tokio::test]
async fn list_printers_empty_on_failure() {
    let runner = ScriptedRunner::new(|_, _| {
        Err(io::Error::new(io::ErrorKind::NotFound, "no lpstat"))
    });
    let spooler = CupsSpooler::with_runner(runner);
    assert!(spooler.list_printers().await.is_empty());

    let runner = ScriptedRunner::new(|_, _| failed("lpstat: No destinations added.\n"));
    let spooler = CupsSpooler::with_runner(runner);
    assert!(spooler.list_printers().await.is_empty());
}

#[tokio::test]
async fn query_status_reports_unknown_device() {
    let runner = ScriptedRunner::new(|_, _| failed("lpstat: Invalid destination name\n"));
    let spooler = CupsSpooler::with_runner(runner);

    let status = spooler.query_status("GHOST").await;
    assert_eq!(status, "프린터 'GHOST'을 찾을 수 없습니다.");
}

#[tokio::test]
async fn listed_printers_all_resolve_a_status() {
    // Scripted CUPS with two printers: every name from list_printers
    // must produce a non-"not found" status.
    let runner = ScriptedRunner::new(|_, args| match args {
        ["-p"] => ok("printer BIXOLON_SRP_330II is idle.  enabled since Mon\n\
                      printer Kitchen_SRP is idle.  enabled since Mon\n"),
        ["-p", name] => ok(&format!("printer {name} is idle.  enabled since Mon\n")),
        _ => failed("unexpected lpstat invocation"),
    });
    let spooler = CupsSpooler::with_runner(runner);

    let printers = spooler.list_printers().await;
    assert_eq!(printers.len(), 2);
    for name in &printers {
        let status = spooler.query_status(name).await;
        assert!(!status.contains("찾을 수 없습니다"), "{name}: {status}");
        assert!(print_agent::is_available(&status));
    }
}

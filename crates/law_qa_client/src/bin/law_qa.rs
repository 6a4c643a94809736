//! law-qa: terminal front end for the Immigration Law Q&A backend.
//! Reads config, takes a question from the first positional argument (or
//! stdin), asks the backend with endpoint failover, and prints the answer
//! plus any video reference to stdout.

use law_qa_client::{config, Client, Session, SessionState};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

fn resolve_config_path() -> PathBuf {
    // 1. --config <path> flag
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        if let Some(path) = args.get(pos + 1) {
            return PathBuf::from(path);
        }
    }
    // 2. LAW_QA_CONFIG env var
    if let Ok(val) = std::env::var("LAW_QA_CONFIG") {
        return PathBuf::from(val);
    }
    // 3. Default path (~/.law-qa/config.yaml)
    config::default_config_path().unwrap_or_else(|| {
        eprintln!("Error: unable to determine config path (set --config or LAW_QA_CONFIG)");
        process::exit(1);
    })
}

/// First positional argument after skipping the `--config <path>` pair.
fn positional_question() -> Option<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--config" {
            skip_next = true;
            continue;
        }
        return Some(arg);
    }
    None
}

fn main() {
    let config_path = resolve_config_path();
    let explicit = std::env::args().any(|a| a == "--config")
        || std::env::var("LAW_QA_CONFIG").is_ok();

    // An explicitly named config must load; a missing default file just
    // means built-in endpoints.
    let cfg = match config::load(&config_path) {
        Ok(c) => c,
        Err(e) if explicit || config_path.exists() => {
            eprintln!(
                "Error: failed to load config from {}: {}",
                config_path.display(),
                e
            );
            process::exit(1);
        }
        Err(_) => config::Config::default(),
    };

    let endpoints = cfg.endpoints();
    let video_source = cfg.video.source_url.clone();

    // Question from the positional argument, else the first stdin line.
    let question = positional_question().unwrap_or_else(|| {
        let stdin = io::stdin();
        let mut line = String::new();
        stdin.lock().read_line(&mut line).unwrap_or(0);
        line
    });

    let mut session = Session::new();
    session.set_input(&question);
    let Some((ticket, question)) = session.submit() else {
        eprintln!("Error: no question provided");
        process::exit(1);
    };

    let client = match Client::new(endpoints, video_source) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Pending indicator goes to stderr so stdout carries only the answer.
    eprintln!("{}", session.display_text());

    // Run the async query on a tokio runtime.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to create runtime: {}", e);
            process::exit(1);
        });

    let outcome = rt.block_on(client.ask(&question));
    match outcome {
        Ok(answer) => {
            session.resolve(ticket, Ok(answer));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            session.resolve(ticket, Err(e.user_message().to_string()));
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match session.state() {
        SessionState::Answered { answer, .. } => {
            let _ = writeln!(out, "{}", answer.text);
            if let Some(video) = &answer.reference {
                let _ = writeln!(out);
                match video.cue_seconds {
                    Some(seconds) => {
                        let _ = writeln!(out, "Reference: {} (starts at {}s)", video.url, seconds);
                    }
                    None => {
                        let _ = writeln!(out, "Reference: {}", video.url);
                    }
                }
            }
        }
        SessionState::Failed { message, .. } => {
            let _ = writeln!(out, "{}", message);
            process::exit(1);
        }
        // submit() put the session in Awaiting and resolve() always applies
        // with a fresh ticket, so these arms are unreachable here.
        SessionState::Idle | SessionState::Awaiting { .. } => {}
    }
}

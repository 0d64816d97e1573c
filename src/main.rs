mod debug_report;

use chrono::NaiveDateTime;
use komut::{
    Classifier, Context, NlpResult, Options, ProcessedCommand, analyze_verbose_with, analyze_with, command_suggestions,
    process_with,
};
use serde::Serialize;
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "KOMUT_LOG";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("error: {0}")]
    Usage(String),
    #[error("error: failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error("error: failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Stdin(_) | CliError::Json(_) => 1,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    command: &'a ProcessedCommand,
    analysis: &'a NlpResult,
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run() -> Result<(), CliError> {
    let config = parse_args()?;

    if config.suggest {
        for suggestion in command_suggestions(&config.input) {
            println!("{suggestion}");
        }
        return Ok(());
    }

    let ctx = config.reference_time.map(|reference_time| Context { reference_time }).unwrap_or_default();
    let opts = Options { classifier: config.classifier };
    let command = process_with(&config.input, &ctx, &opts);
    tracing::debug!(intent = %command.intent, action = %command.action, "processed");

    if config.json {
        let analysis = analyze_with(&config.input, &ctx);
        let report = JsonReport { command: &command, analysis: &analysis };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let verbose = analyze_verbose_with(&config.input, &ctx);
        debug_report::print_run(&config.input, &verbose, &command, config.color);
    }
    Ok(())
}

struct CliConfig {
    input: String,
    reference_time: Option<NaiveDateTime>,
    classifier: Classifier,
    json: bool,
    suggest: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, CliError> {
    let mut input: Option<String> = None;
    let mut reference_time = None;
    let mut classifier = Classifier::default();
    let mut json = false;
    let mut suggest = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    let set_input = |slot: &mut Option<String>, value: String| -> Result<(), CliError> {
        if slot.is_some() {
            return Err(CliError::Usage("input provided multiple times".to_string()));
        }
        *slot = Some(value);
        Ok(())
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("komut {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--suggest" => suggest = true,
            "--reference" => {
                let value = args.next().ok_or_else(|| CliError::Usage("--reference expects a value".to_string()))?;
                reference_time = Some(parse_reference(&value)?);
            }
            "--classifier" => {
                let value = args.next().ok_or_else(|| CliError::Usage("--classifier expects a value".to_string()))?;
                classifier = parse_classifier(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| CliError::Usage("--input expects a value".to_string()))?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                reference_time = Some(parse_reference(arg.trim_start_matches("--reference="))?);
            }
            _ if arg.starts_with("--classifier=") => {
                classifier = parse_classifier(arg.trim_start_matches("--classifier="))?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option '{arg}'")));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None if suggest && io::stdin().is_terminal() => String::new(),
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() && !suggest {
        return Err(CliError::Usage(format!("no input provided\n\n{}", help_text())));
    }

    Ok(CliConfig { input, reference_time, classifier, json, suggest, color })
}

fn read_stdin_input() -> Result<String, CliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, CliError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| CliError::Usage(format!("invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)")))
}

fn parse_classifier(value: &str) -> Result<Classifier, CliError> {
    Classifier::from_name(value)
        .ok_or_else(|| CliError::Usage(format!("invalid --classifier '{value}' (expected patterns or keywords)")))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "komut {version}

Turkish command interpreter CLI.

Usage:
  komut [OPTIONS] [--] <input...>
  komut [OPTIONS] --input <text>

Options:
  -i, --input <text>         Command text. If omitted, reads remaining args
                             or stdin when no args are provided.
  --reference <timestamp>    Reference time in YYYY-MM-DDTHH:MM:SS for
                             relative dates. Default: now.
  --classifier <name>        Intent table for the command: patterns (default)
                             or keywords.
  --json                     Print {{command, analysis}} as JSON.
  --suggest                  Print example commands for a partial input.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                  Log filter (tracing syntax), e.g. komut=debug.
                             Default: warn. Logs go to stderr.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}

//! CLI entry point for commitguard.
//!
//! This module stays thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `commitguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use commitguard_app::{
    CheckInput, Cleanup, ExplainOutput, MessageInput, parse_report_json, render_annotations,
    render_markdown, render_text, run_check, run_explain, runtime_error_report, serialize_report,
    to_renderable, verdict_exit_code,
};
use commitguard_settings::Overrides;
use std::io::Read;
use std::process::Command;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "COMMITGUARD_LOG";

/// Separates commits in the `git log` output used for ranges.
const RECORD_SEP: char = '\u{1e}';

#[derive(Parser, Debug)]
#[command(
    name = "commitguard",
    version,
    about = "Commit message policy guard: conventional commits with issue-id scopes"
)]
struct Cli {
    /// Path to commitguard config TOML (a missing file means defaults).
    #[arg(long, default_value = "commitguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (flexible|strict).
    #[arg(long)]
    profile: Option<String>,

    /// Override scope policy variant (flexible|strict).
    #[arg(long)]
    variant: Option<String>,

    /// Override failure threshold (error|warning).
    #[arg(long)]
    fail_on: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lint commit messages. Reads stdin when no source is given.
    Check {
        /// Lint this message text.
        #[arg(long, group = "source")]
        message: Option<String>,

        /// Lint the message stored in this file.
        #[arg(long, group = "source")]
        file: Option<Utf8PathBuf>,

        /// Lint the message git is editing (commit-msg hook).
        #[arg(
            long,
            group = "source",
            num_args = 0..=1,
            default_missing_value = ".git/COMMIT_EDITMSG"
        )]
        edit: Option<Utf8PathBuf>,

        /// Lint every commit after this revision (e.g. origin/main).
        #[arg(long, group = "source")]
        from: Option<String>,

        /// Last revision of the range (default HEAD).
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// What to print on stdout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Where to write a Markdown report.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/commitguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/commitguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "scope.issue_id") or code (e.g., "scope_required") to explain.
        identifier: String,
    },
}

/// Where the messages to lint come from.
#[derive(Clone, Debug)]
enum MessageSource {
    Text(String),
    File(Utf8PathBuf),
    Range { from: String, to: String },
    Stdin,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref message,
            ref file,
            ref edit,
            ref from,
            ref to,
            format,
            ref report_out,
            ref markdown_out,
        } => {
            let source = match (message, file.as_ref().or(edit.as_ref()), from) {
                (Some(text), _, _) => MessageSource::Text(text.clone()),
                (None, Some(path), _) => MessageSource::File(path.clone()),
                (None, None, Some(from)) => MessageSource::Range {
                    from: from.clone(),
                    to: to.clone().unwrap_or_else(|| "HEAD".to_string()),
                },
                (None, None, None) => MessageSource::Stdin,
            };
            cmd_check(
                &cli,
                source,
                format,
                report_out.as_deref(),
                markdown_out.as_deref(),
            )
        }
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(&report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_check(
    cli: &Cli,
    source: MessageSource,
    format: OutputFormat,
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;
        let messages = load_messages(&source)?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            variant: cli.variant.clone(),
            fail_on: cli.fail_on.clone(),
        };

        let output = run_check(CheckInput {
            messages,
            config_text: &cfg_text,
            overrides,
        })?;
        let report = output.report;

        if let Some(path) = report_out {
            write_report_file(path, &serialize_report(&report)?).context("write report json")?;
        }

        let renderable = to_renderable(&report);
        if let Some(path) = markdown_out {
            write_text_file(path, &render_markdown(&renderable)).context("write markdown")?;
        }

        match format {
            OutputFormat::Text => print!("{}", render_text(&renderable)),
            OutputFormat::Json => {
                let bytes = serialize_report(&report)?;
                println!("{}", String::from_utf8_lossy(&bytes));
            }
        }

        Ok(verdict_exit_code(report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(path) = report_out {
                let profile = cli.profile.as_deref().unwrap_or("unknown");
                let report = runtime_error_report(profile, &format!("{err:#}"));
                if let Ok(bytes) = serialize_report(&report) {
                    let _ = write_report_file(path, &bytes);
                }
            }
            eprintln!("commitguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Missing config is allowed (defaults apply); unreadable config is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(%path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
}

fn load_messages(source: &MessageSource) -> anyhow::Result<Vec<MessageInput>> {
    match source {
        MessageSource::Text(text) => Ok(vec![MessageInput::new(text.clone())]),
        MessageSource::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read commit message: {path}"))?;
            Ok(vec![MessageInput::new(text)])
        }
        MessageSource::Range { from, to } => git_range_messages(from, to),
        MessageSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read commit message from stdin")?;
            Ok(vec![MessageInput::new(text)])
        }
    }
}

/// Oldest first, so findings read in history order.
fn git_range_messages(from: &str, to: &str) -> anyhow::Result<Vec<MessageInput>> {
    let output = Command::new("git")
        .args([
            "log",
            "--reverse",
            "--format=%H%x00%B%x1e",
            &format!("{from}..{to}"),
        ])
        .output()
        .context("spawn git")?;

    if !output.status.success() {
        anyhow::bail!(
            "git log returned non-zero exit status: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let messages = parse_git_log(&stdout);
    tracing::debug!(from, to, commits = messages.len(), "loaded git range");
    Ok(messages)
}

fn parse_git_log(stdout: &str) -> Vec<MessageInput> {
    stdout
        .split(RECORD_SEP)
        .filter_map(|record| {
            let record = record.trim_start_matches(['\n', '\r']);
            let (commit, body) = record.split_once('\0')?;
            // git already applied its cleanup; `#` lines here are content.
            Some(
                MessageInput::new(body)
                    .with_commit(commit.trim())
                    .with_cleanup(Cleanup::Whitespace),
            )
        })
        .collect()
}

fn write_report_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_report_file(path, text.as_bytes()).with_context(|| format!("write text: {path}"))
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{annotation}");
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(topic) => {
            print!("{}", commitguard_app::format_explanation(&topic));
            Ok(())
        }
        ExplainOutput::NotFound { identifier } => {
            eprint!("{}", commitguard_app::format_not_found(&identifier));
            std::process::exit(1);
        }
    }
}

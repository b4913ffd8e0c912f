use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use canvas_timeline::{EditorSession, ScriptRunner, SessionOpts, load_script};

#[derive(Parser, Debug)]
#[command(name = "canvas-timeline", version)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `canvas_timeline=debug`).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a JSON command script against a fresh session.
    Run(RunArgs),
    /// Print the default session config as JSON.
    Defaults,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Script file: a JSON array of commands.
    #[arg(long)]
    script: PathBuf,

    /// Session config JSON. Missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write output lines here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Sleep for each `advance` instead of applying it instantly.
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Exit with an error if any command was rejected.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .with_context(|| format!("invalid log filter '{}'", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Defaults => {
            println!("{}", serde_json::to_string_pretty(&SessionOpts::default())?);
            Ok(())
        }
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let opts = match &args.config {
        Some(path) => SessionOpts::from_path(path)?,
        None => SessionOpts::default(),
    };
    let commands = load_script(&args.script)?;
    let mut session = EditorSession::new(opts)?;

    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let mut write_err: Option<anyhow::Error> = None;
    let failures = ScriptRunner::new(&mut session)
        .realtime(args.realtime)
        .run(&commands, |line| {
            if write_err.is_some() {
                return;
            }
            let res = serde_json::to_writer(&mut out, &line)
                .map_err(anyhow::Error::from)
                .and_then(|()| writeln!(out).map_err(anyhow::Error::from));
            if let Err(err) = res {
                write_err = Some(err);
            }
        });
    if let Some(err) = write_err {
        return Err(err.context("write script output"));
    }
    out.flush().context("flush script output")?;

    tracing::info!(commands = commands.len(), failures, "script finished");
    if args.strict && failures > 0 {
        anyhow::bail!("{failures} of {} commands were rejected", commands.len());
    }
    Ok(())
}

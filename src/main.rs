use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "searchbox", about = "searchbox — debounced search box demo gallery")]
struct Cli {
    /// Write debug logs to a file (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Debug log destination.
    #[arg(long, default_value = "/tmp/searchbox-debug.log")]
    debug_log: PathBuf,

    /// Scenario to open first.
    #[arg(long)]
    scenario: Option<String>,

    /// Debounce for scenarios that do not pin their own (overrides config).
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Print the scenario catalogue and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for s in searchbox_tui::scenarios::catalogue() {
            let debounce = s
                .debounce_ms
                .map(|ms| format!("{ms}ms"))
                .unwrap_or_else(|| "config".to_string());
            println!("{:<20} {:>8}  {}", s.name, debounce, s.description);
        }
        return Ok(());
    }

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&cli.debug_log)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %cli.debug_log.display(), "searchbox debug log started");
    }

    searchbox_tui::run(searchbox_tui::RunOptions {
        scenario: cli.scenario,
        debounce_ms: cli.debounce_ms,
    })
}

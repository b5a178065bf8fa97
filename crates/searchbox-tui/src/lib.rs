//! searchbox TUI — interactive demo gallery for the search controller.

pub mod action_log;
pub mod app;
pub mod event;
pub mod scenarios;
pub mod session;
pub mod theme;
pub mod widgets;

pub use app::App;

/// Launch options, filled in by the binary's CLI.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Scenario to open first (see [`scenarios::catalogue`]).
    pub scenario: Option<String>,
    /// Overrides `search.debounce_ms` from the config file.
    pub debounce_ms: Option<u64>,
}

/// Start the demo on a tokio runtime that hosts the debounce timers.
pub fn run(opts: RunOptions) -> anyhow::Result<()> {
    let mut config = searchbox_core::config::Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config load failed, using defaults");
        searchbox_core::config::Config::defaults()
    });
    if let Some(ms) = opts.debounce_ms {
        config.search.debounce_ms = ms;
    }

    let active = match opts.scenario.as_deref() {
        Some(name) => scenarios::position(name)
            .ok_or_else(|| anyhow::anyhow!("unknown scenario: {name}"))?,
        None => 0,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()?;
    let _guard = runtime.enter();

    App::new(config, theme::Theme::load_default(), active)?.run()
}

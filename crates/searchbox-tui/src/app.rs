//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Controller events are
//! drained once per frame, before drawing.

use crate::{
    action_log::ActionLog,
    event::{self, AppEvent},
    scenarios,
    session::Session,
    theme::Theme,
    widgets::{
        action_panel::ActionPanel, help::HelpPopup, scenario_bar::ScenarioBar,
        search_box::SearchBox,
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use searchbox_core::config::Config;
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub active: usize,
    pub session: Session,
    pub log: ActionLog,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme, active: usize) -> anyhow::Result<Self> {
        let scenario = scenarios::catalogue()
            .get(active)
            .ok_or_else(|| anyhow::anyhow!("no scenario at index {active}"))?;
        let session = Session::new(scenario, &config.search)?;
        let log = ActionLog::new(config.ui.action_log_len, config.ui.timestamp_format.clone());
        Ok(Self {
            active,
            session,
            log,
            theme,
            config,
            show_help: false,
            quit: false,
        })
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            match event {
                AppEvent::ToggleHelp | AppEvent::ClearQuery | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::ToggleHelp => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::NextScenario => {
                let next = (self.active + 1) % scenarios::catalogue().len();
                self.switch_to(next);
            }
            AppEvent::PrevScenario => {
                let n = scenarios::catalogue().len();
                self.switch_to((self.active + n - 1) % n);
            }
            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}
            other => self.session.handle(&other),
        }
    }

    /// Replace the live session. The old controller is dropped here, which
    /// cancels its pending search.
    pub fn switch_to(&mut self, idx: usize) {
        let Some(scenario) = scenarios::catalogue().get(idx) else {
            return;
        };
        // Flush whatever the outgoing controller already emitted.
        self.session.pump(&mut self.log);
        match Session::new(scenario, &self.config.search) {
            Ok(session) => {
                tracing::debug!(from = self.active, to = idx, "scenario switch");
                self.session = session;
                self.active = idx;
                self.log.log("scenario", Some(&serde_json::json!(scenario.name)));
            }
            Err(err) => {
                tracing::warn!(scenario = scenario.name, error = %err, "scenario failed to start");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(config: Config, theme: Theme, active: usize) -> anyhow::Result<Self> {
        Ok(App {
            state: AppState::new(config, theme, active)?,
        })
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.state.session.pump(&mut self.state.log);
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                if let Some(ev) = event::to_app_event(raw) {
                    tracing::debug!(event = ?ev, scenario = self.state.active, "key event");
                    self.state.handle(ev);
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line scenario bar | search box | action panel
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .split(area);

    frame.render_widget(ScenarioBar::new(scenarios::catalogue(), state.active), vert[0]);

    let search_box = SearchBox::new(&state.session, &state.theme);
    let (cx, cy) = search_box.cursor_position(vert[1]);
    frame.render_widget(search_box, vert[1]);

    frame.render_widget(
        ActionPanel::new(&state.session, &state.log, &state.theme),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup, area);
        return;
    }
    frame.set_cursor_position((cx, cy));
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::io::{self, stdout};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use app_logging::app_info;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use ratatui::widgets::ListState;

use hotissue_core::{update, AppState, Msg};
use hotissue_engine::ApiSettings;

use crate::effects::EffectRunner;
use crate::keys;
use crate::ui;
use crate::Cli;

/// Keyboard poll timeout; a quiet interval becomes one tick, which is what
/// ages notices out.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub fn run(cli: Cli) -> Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let settings = ApiSettings {
        base_url: cli.api_url,
        ..ApiSettings::default()
    };
    let runner = EffectRunner::new(settings, cli.export_dir, msg_tx);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, &runner, &msg_rx);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runner: &EffectRunner,
    msg_rx: &mpsc::Receiver<Msg>,
) -> Result<()> {
    let mut state = AppState::new();
    let mut list_state = ListState::default();
    let mut force_redraw = true;

    dispatch(&mut state, Msg::Started, runner);

    loop {
        if state.consume_dirty() || force_redraw {
            force_redraw = false;
            let view = state.view();
            let selection = (!view.cards.is_empty()).then_some(view.selected);
            list_state.select(selection);
            terminal.draw(|frame| ui::render::draw(frame, &view, &mut list_state))?;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(msg) = keys::msg_for_key(key, state.input_mode()) {
                        dispatch(&mut state, msg, runner);
                    }
                }
                Event::Resize(_, _) => force_redraw = true,
                _ => {}
            }
        } else {
            dispatch(&mut state, Msg::Tick, runner);
        }

        // Drain whatever the IO bridge delivered while we were waiting.
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, msg, runner);
        }

        if state.should_quit() {
            app_info!("shutting down");
            return Ok(());
        }
    }
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
}

use std::{
    io::{Error, Result, stdout},
    time::{Duration, Instant},
};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{
    Terminal,
    prelude::{Backend, CrosstermBackend},
};

use super::{config::Config, data::DataManager, screens::App};

pub const FPS: u64 = 30;

pub fn run_app(config: &Config, data: Box<dyn DataManager>) -> Result<()> {
    let mut app = App::new(config, data).map_err(Error::other)?;

    run_then(
        || {
            init()?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
            terminal.clear()?;
            frame_loop(&mut app, &mut terminal)
        },
        leave,
    )?;
    info!("bye");
    Ok(())
}

fn frame_loop<B: Backend>(app: &mut App, terminal: &mut Terminal<B>) -> Result<()> {
    let frame_duration = Duration::from_millis(1000 / FPS);
    loop {
        let frame_start = Instant::now();

        let exit = app.update(terminal)?;
        if exit {
            return Ok(());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }
}

/// Runs `body`, then `restore` no matter how `body` ended.
/// An error from `body` takes precedence over one from `restore`.
fn run_then<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

pub fn init() -> Result<()> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    Ok(())
}

pub fn leave() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

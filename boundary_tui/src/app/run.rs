use std::io;
use std::time::Duration;

use anyhow::Result;
use boundary_core::{Command, Session, VizConfig};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::{runtime, sync::mpsc};

use crate::{
    sink::FileSink,
    state::App,
    surface::ChartSurface,
    ticker::TokioScheduler,
    ui::screens::{menu, Action, Screen},
};

/// Upper bound on how long a key poll blocks, so ticks are picked up promptly.
const FRAME: Duration = Duration::from_millis(30);

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the TUI application.
///
/// # Args
/// * `config` - The visualizer settings.
/// * `weights` - Weight text to load before the first frame, if any.
///
/// # Errors
/// Returns an error if the config is invalid or terminal setup or rendering fails.
pub fn run(config: VizConfig, weights: Option<String>) -> Result<()> {
    let runtime = runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()?;

    let (ticks_tx, mut ticks) = mpsc::unbounded_channel();
    let scheduler = TokioScheduler::new(runtime.handle().clone(), ticks_tx);
    let sink = FileSink::new(&config.export_dir);

    let session = Session::new(&config, ChartSurface::default(), scheduler, sink)?;
    let mut app = App::new(session);
    if let Some(text) = weights {
        app.dispatch(Command::LoadWeights(text));
    }

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut screen = Screen::Menu(menu::MenuState::new());

    loop {
        terminal.draw(|f| screen.draw(f, &app))?;

        if event::poll(FRAME)? {
            if let Event::Key(k) = event::read()? {
                if k.kind == KeyEventKind::Press {
                    match screen.handle_key(k.code, &mut app) {
                        Action::Quit => break,
                        Action::Transition(next) => screen = next,
                        Action::None => {}
                    }
                }
            }
        }

        while let Ok(task) = ticks.try_recv() {
            app.dispatch(Command::Tick(task));
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

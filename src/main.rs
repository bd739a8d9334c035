use std::io::{self, stdout, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use folio::app::LogicThread;
use folio::config::Config;
use folio::headless;
use folio::mail::{Mailer, RelayClient};
use folio::render::RenderState;
use folio::{flog, ui, Interpreter, Result, Theme, ThemeStore};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// folio - portfolio with a built-in terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    FOLIO_DEBUG=1         Enable debug logging (alternative to --debug)\n    FOLIO_ACCESS_KEY=KEY  Form relay access key for sendmail and the contact form")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.folio/folio.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Start with this theme instead of the stored preference
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<Theme>,

    /// Form relay access key (overrides FOLIO_ACCESS_KEY and the config file)
    #[arg(long)]
    pub access_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run terminal commands without the TUI and print their output
    Exec {
        /// Command lines, one per argument
        #[arg(required = true)]
        lines: Vec<String>,
    },
}

fn parse_theme(s: &str) -> std::result::Result<Theme, String> {
    s.parse::<Theme>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    folio::log::init_with_debug(cli.debug);
    if folio::log::is_debug() {
        flog!("folio starting (debug mode enabled)");
    } else {
        flog!("folio starting");
    }

    let mut config = Config::load()?;
    config.apply_env();
    if let Some(key) = cli.access_key {
        config.access_key = Some(key);
    }

    let theme = ThemeStore::new(cli.theme.unwrap_or_else(|| config.initial_theme()));
    let mailer: Arc<dyn Mailer> = Arc::new(RelayClient::from_config(&config));

    if let Some(Command::Exec { lines }) = cli.command {
        return run_exec(lines, theme, mailer);
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let shutdown_clone = shutdown.clone();
    let logic_handle =
        thread::spawn(move || LogicThread::run(config, theme, mailer, state_tx, shutdown_clone));

    let mut terminal = setup_terminal()?;
    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let logic_result = logic_handle.join();
    restore_terminal(&mut terminal)?;
    match logic_result {
        Ok(Err(e)) => {
            flog!("Logic thread failed: {}", e);
            Err(e)
        }
        _ => result,
    }
}

fn run_exec(lines: Vec<String>, theme: ThemeStore, mailer: Arc<dyn Mailer>) -> Result<()> {
    flog!("Exec command: {} lines", lines.len());
    let mut interp = Interpreter::new(theme, mailer.is_configured());
    let runtime = tokio::runtime::Runtime::new()?;
    let mut out = io::stdout().lock();
    runtime.block_on(headless::run_script(
        &lines,
        &mut interp,
        mailer.as_ref(),
        &mut out,
    ))
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}

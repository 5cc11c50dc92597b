//! maneuver_tui - Click a ship zone, roll a d6, read off the maneuvers

mod app;
mod logger;
mod ui;

use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use maneuver_core::{default_config, AppConfig};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io;
use std::path::{Path, PathBuf};

/// Where the bundled sample data may live relative to the working directory
const DATA_ROOTS: [&str; 3] = ["maneuver_tui", ".", "../maneuver_tui"];

fn load_config() -> io::Result<AppConfig> {
    match std::env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string())),
        None => {
            let mut config = default_config();
            if let Some(root) = DATA_ROOTS
                .iter()
                .map(PathBuf::from)
                .find(|root| root.join(maneuver_core::cache::ZONES_PATH).exists())
            {
                config.data_root = root;
            }
            Ok(config)
        }
    }
}

/// Whether the main loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Apply one terminal event; `area` is the full terminal size
fn handle_event(app: &mut App, event: Event, area: Rect) -> Flow {
    match event {
        Event::Key(key) => match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return Flow::Quit
            }
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => app.toggle_focus(),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.on_enter(),
            (KeyCode::Char('r'), _) => app.reroll(),
            (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => app.toggle_help(),
            (KeyCode::Char(c), _) if c.is_ascii_digit() && c != '0' => {
                let index = c as usize - '1' as usize;
                app.select_ship(index);
            }
            _ => {}
        },
        Event::Mouse(mouse)
            if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && app.current_tab == app::Tab::Board =>
        {
            let inner = ui::board_inner(area, app.ships.len());
            if inner.width > 0
                && inner.height > 0
                && (inner.x..inner.x + inner.width).contains(&mouse.column)
                && (inner.y..inner.y + inner.height).contains(&mouse.row)
            {
                let fx = (mouse.column - inner.x) as f64 + 0.5;
                let fy = (mouse.row - inner.y) as f64 + 0.5;
                app.click_board(fx / inner.width as f64, fy / inner.height as f64);
            }
        }
        _ => {}
    }
    Flow::Continue
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let event = event::read()?;
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        if handle_event(app, event, area) == Flow::Quit {
            return Ok(());
        }
    }
}

fn main() -> io::Result<()> {
    let logs = logger::init().map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let config = load_config()?;
    log::info!("Data root: {}", config.data_root.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, logs);
    let result = run(&mut terminal, &mut app);

    // Restore terminal, also when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

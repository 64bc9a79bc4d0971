//! Chroma Blitz entry point
//!
//! Terminal setup/teardown, the fixed-timestep game loop, and the
//! mapping from key/mouse events to simulation inputs.

use std::io::{self, BufWriter, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{QueueableCommand, execute};

use chroma_blitz::Settings;
use chroma_blitz::consts::TICK_HZ;
use chroma_blitz::render::{self, TerminalSurface};
use chroma_blitz::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Duration of one simulation tick
const TICK: Duration = Duration::from_nanos(1_000_000_000 / TICK_HZ as u64);
/// Maximum catch-up ticks per frame to prevent spiral of death
const MAX_SUBSTEPS: u32 = 8;

struct Game {
    state: GameState,
    surface: TerminalSurface,
    settings: Settings,
    input: TickInput,
    /// Score as last reported by the simulation's events
    score_shown: u64,
    // FPS tracking
    fps: u32,
    frames: u32,
    fps_window: Instant,
}

impl Game {
    fn new(cols: u16, rows: u16, settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Session seed: {seed}");

        let surface = TerminalSurface::new(cols, rows);
        let (width, height) = surface.world_size();
        let mut state = GameState::new(width, height, seed);
        state.spawn_interval_ticks = settings.spawn_interval_ticks();

        Self {
            state,
            surface,
            settings,
            input: TickInput::default(),
            score_shown: 0,
            fps: 0,
            frames: 0,
            fps_window: Instant::now(),
        }
    }

    /// Fold a terminal event into the pending tick input.
    /// Returns false when the player asked to quit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return false,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return false;
                }
                KeyCode::Char(' ') | KeyCode::Enter => self.input.start = true,
                _ => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                self.input.fire = Some(self.surface.cell_center(column, row));
            }
            _ => {}
        }
        true
    }

    /// Run the simulation ticks owed by the accumulator
    fn update(&mut self, accumulator: &mut Duration) {
        let mut substeps = 0;
        while *accumulator >= TICK && substeps < MAX_SUBSTEPS {
            for event in tick(&mut self.state, &self.input) {
                match event {
                    GameEvent::ScoreChanged(total) => self.score_shown = total,
                    GameEvent::GameOver { final_score } => {
                        log::info!("Game over with score {final_score}");
                    }
                }
            }
            // One-shot inputs are consumed by the first tick they reach
            self.input = TickInput::default();
            *accumulator -= TICK;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Too far behind; drop the debt instead of spiraling
            *accumulator = Duration::ZERO;
        }
    }

    fn draw(&mut self, out: &mut impl Write) -> io::Result<()> {
        render::draw_frame(&self.state, &mut self.surface, self.settings.particles);
        self.surface.present(out)?;

        out.queue(SetForegroundColor(Color::White))?;
        out.queue(MoveTo(1, 0))?;
        out.queue(Print(format!(" Score: {} ", self.score_shown)))?;
        if self.settings.show_fps {
            out.queue(MoveTo(1, 1))?;
            out.queue(Print(format!(" {} fps ", self.fps)))?;
        }

        match self.state.phase {
            GamePhase::Idle => {
                self.draw_overlay(
                    out,
                    &[
                        "C H R O M A   B L I T Z",
                        "",
                        "click: fire at the swarm",
                        "SPACE: start    q: quit",
                    ],
                )?;
            }
            GamePhase::GameOver => {
                let score_line = format!("Final score: {}", self.state.score);
                self.draw_overlay(
                    out,
                    &["GAME OVER", "", &score_line, "SPACE: restart    q: quit"],
                )?;
            }
            GamePhase::Running => {}
        }

        out.queue(ResetColor)?;
        out.flush()?;

        self.frames += 1;
        if self.fps_window.elapsed() >= Duration::from_secs(1) {
            self.fps = self.frames;
            self.frames = 0;
            self.fps_window = Instant::now();
        }
        Ok(())
    }

    /// Centered text block over the field
    fn draw_overlay(&self, out: &mut impl Write, lines: &[&str]) -> io::Result<()> {
        let (cols, rows) = (self.surface.cols(), self.surface.rows());
        let top = (rows / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let col = (cols / 2).saturating_sub(line.len() as u16 / 2);
            out.queue(MoveTo(col, top + i as u16))?;
            out.queue(Print(line))?;
        }
        Ok(())
    }

    fn run(&mut self, out: &mut impl Write) -> io::Result<()> {
        let mut last = Instant::now();
        let mut accumulator = Duration::ZERO;

        loop {
            // Sleep inside poll until the next tick is due
            let timeout = TICK.saturating_sub(accumulator + last.elapsed());
            if event::poll(timeout).map_err(|e| {
                log::error!("Failed to poll events: {e}");
                e
            })? {
                // Drain everything that queued up before simulating
                loop {
                    if !self.handle_event(event::read()?) {
                        return Ok(());
                    }
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            let now = Instant::now();
            accumulator += now - last;
            last = now;

            self.update(&mut accumulator);
            self.draw(out)?;
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("Chroma Blitz starting...");

    let settings = Settings::load();
    let (cols, rows) = terminal::size().map_err(|e| {
        log::error!("Failed to query terminal size: {e}");
        e
    })?;
    let mut game = Game::new(cols, rows, settings);

    enable_raw_mode().map_err(|e| {
        log::error!("Failed to enable raw mode: {e}");
        e
    })?;
    execute!(io::stdout(), EnterAlternateScreen, Hide, EnableMouseCapture)?;

    let mut out = BufWriter::new(io::stdout());
    let result = game.run(&mut out);
    restore_terminal(&mut out);

    if result.is_ok() {
        log::info!("Quit with final score {}", game.state.score);
    }
    result
}

/// Unwind the terminal on every exit path, keeping the run's error
fn restore_terminal(out: &mut BufWriter<Stdout>) {
    let _ = out.flush();
    if let Err(e) = execute!(
        io::stdout(),
        DisableMouseCapture,
        Show,
        LeaveAlternateScreen
    ) {
        log::error!("Failed to restore terminal: {e}");
    }
    if let Err(e) = disable_raw_mode() {
        log::error!("Failed to disable raw mode: {e}");
    }
}

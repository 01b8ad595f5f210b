mod clock;
mod input;
mod logging;

use std::io::{self, Write, stdout};
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::DefaultTerminal;
use snowfall_config::Config;
use snowfall_core::{Elapsed, FieldError, ParticleField, StepStats, Viewport};
use snowfall_scene::{Background, Scene};

use crate::clock::FrameClock;
use crate::input::{InputMonitor, InputSignal};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    logging::init(config.log_file.as_deref())?;
    let background = load_background(&config)?;

    let terminal = ratatui::init();
    install_panic_hook();
    let result = run(terminal, &config, background);
    if let Err(e) = release_mouse(&mut stdout()) {
        warn!("failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
    result
}

/// Wrap the current panic hook so mouse capture is turned off before the
/// terminal is restored and the panic is reported.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = release_mouse(&mut stdout());
        hook(info);
    }));
}

/// Write the escape sequence that stops mouse event reporting.
fn release_mouse<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableMouseCapture)
}

fn load_background(config: &Config) -> color_eyre::Result<Background> {
    let settings = &config.background;
    match &settings.image {
        Some(path) => Background::load(path)
            .wrap_err_with(|| format!("failed to load background image {}", path.display())),
        None => Ok(Background::gradient(settings.top, settings.bottom)),
    }
}

fn run(
    terminal: DefaultTerminal,
    config: &Config,
    background: Background,
) -> color_eyre::Result<()> {
    execute!(stdout(), EnableMouseCapture)?;
    let size = terminal.size()?;
    let viewport = Viewport::from_cells(size.width, size.height, config.display.cell_metrics())
        .wrap_err("terminal has no drawable area")?;
    let app = App::new(config, background, viewport, StdRng::from_entropy())?;
    app.run(terminal)
}

/// The screensaver: owns the particle field and drives it frame by frame.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The falling snow.
    field: ParticleField,
    /// Paints the field to the terminal.
    scene: Scene,
    /// Current surface in virtual pixels; `None` while the terminal has no area.
    viewport: Option<Viewport>,
    /// Time between ticks.
    clock: FrameClock,
    /// Detects user activity.
    input: InputMonitor,
    /// Random source for respawns.
    rng: StdRng,
    /// How long to wait for input each frame.
    frame_interval: Duration,
}

impl App {
    /// Construct a new instance of [`App`] for the given initial viewport.
    pub fn new(
        config: &Config,
        background: Background,
        viewport: Viewport,
        mut rng: StdRng,
    ) -> Result<Self, FieldError> {
        let field = ParticleField::new(&config.particles, viewport, &mut rng)?;
        info!(
            "starting with {} particles on a {}x{} viewport",
            field.len(),
            viewport.width(),
            viewport.height()
        );
        Ok(Self {
            running: false,
            field,
            scene: Scene::new(background, config.display.cell_metrics()),
            viewport: Some(viewport),
            clock: FrameClock::new(config.display.max_frame_delta()),
            input: InputMonitor::new(),
            rng,
            frame_interval: config.display.frame_interval(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.clock.reset();
        while self.running {
            terminal.draw(|frame| self.scene.render(frame, &self.field))?;
            self.handle_crossterm_events()?;
            if !self.running {
                break;
            }
            let elapsed = self.clock.tick();
            self.tick(elapsed);
        }
        info!("exiting on user input");
        Ok(())
    }

    /// Advance the simulation by one tick using the current viewport.
    pub fn tick(&mut self, elapsed: Elapsed) -> StepStats {
        match self.viewport {
            Some(viewport) => self.field.step(elapsed, viewport, &mut self.rng),
            None => StepStats::default(),
        }
    }

    /// Waits up to one frame interval for events, then drains anything else
    /// already queued.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let mut timeout = self.frame_interval;
        while event::poll(timeout)? {
            let event = event::read()?;
            let signal = self.input.observe(&event);
            self.on_signal(signal);
            if !self.running {
                break;
            }
            timeout = Duration::ZERO;
        }
        Ok(())
    }

    fn on_signal(&mut self, signal: InputSignal) {
        match signal {
            InputSignal::Exit => self.quit(),
            InputSignal::Resize { cols, rows } => self.on_resize(cols, rows),
            InputSignal::Ignore => {}
        }
    }

    /// Track the new terminal size. Existing particles are kept and respawn
    /// within the new bounds.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        match Viewport::from_cells(cols, rows, self.scene.cell_metrics()) {
            Ok(viewport) => {
                info!("resized to {}x{} cells", cols, rows);
                self.viewport = Some(viewport);
            }
            Err(e) => {
                warn!("{}; pausing simulation", e);
                self.viewport = None;
            }
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    cursor,
    event::{self, Event as TermEvent},
    execute,
    terminal::{
        self, BeginSynchronizedUpdate, DisableLineWrap, EnableLineWrap, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::info;

use crate::config::Config;
use crate::http::HttpServices;
use crate::input::map_key_to_action;
use crate::loader::load_session;
use crate::model::GeoPoint;
use crate::overlay::{self, Canvas};
use crate::render::{draw, View};
use crate::scheduler::{Effect, Event, Scheduler};
use crate::services::Services;

/// Steps of the decorative progress bar, 10% each.
const PROGRESS_STEPS: u8 = 10;

pub(crate) async fn run(cfg: Arc<Config>) -> Result<()> {
    let http = Arc::new(HttpServices::new(cfg.timeouts).context("building HTTP client")?);
    let services = Services {
        geocoder: http.clone(),
        weather: http.clone(),
        radar: http,
    };

    let (tx, mut rx) = mpsc::channel::<Event>(64);
    let runtime = Runtime {
        tx,
        services,
        cfg: cfg.clone(),
    };
    let mut sched = Scheduler::new(cfg);

    let mut terminal = setup_terminal()?;
    info!("session started");

    let result = event_loop(&mut terminal, &mut sched, &runtime, &mut rx);

    restore_terminal(&mut terminal)?;
    info!("session ended");
    result
}

/// Blocks the runtime thread between key polls; spawned tasks run on the
/// worker threads.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    sched: &mut Scheduler,
    runtime: &Runtime,
    rx: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let cfg = runtime.cfg.clone();
    let mut overlay = OverlayCache::default();
    loop {
        // Timer fires and finished loads.
        while let Ok(ev) = rx.try_recv() {
            if runtime.apply(sched.handle(ev)) {
                return Ok(());
            }
        }

        let center = sched.session().and_then(|s| s.center);
        let canvas = overlay.get(center, cfg.grid_width, cfg.grid_height);
        let view = View {
            sched: &*sched,
            overlay: canvas,
            cfg: &cfg,
            now: Utc::now(),
        };
        draw_frame(terminal, &view)?;

        if event::poll(Duration::from_millis(33))? {
            if let TermEvent::Key(k) = event::read()? {
                if let Some(action) = map_key_to_action(sched.screen(), k) {
                    if runtime.apply(sched.handle(Event::Key(action))) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Turns scheduler effects into spawned tasks that report back as events.
struct Runtime {
    tx: mpsc::Sender<Event>,
    services: Services,
    cfg: Arc<Config>,
}

impl Runtime {
    /// Returns true when the app should exit.
    fn apply(&self, effects: Vec<Effect>) -> bool {
        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::ScheduleFrameTick { chain, delay } => {
                    self.after(delay, Event::FrameTick { chain })
                }
                Effect::ScheduleRefresh { chain, delay } => {
                    self.after(delay, Event::RefreshTick { chain })
                }
                Effect::ScheduleSpinner { chain, delay } => {
                    self.after(delay, Event::SpinnerTick { chain })
                }
                Effect::StartProgress { request } => self.spawn_progress(request),
                Effect::StartLoad {
                    request,
                    zip,
                    background,
                } => self.spawn_load(request, zip, background),
                Effect::Quit => quit = true,
            }
        }
        quit
    }

    fn after(&self, delay: Duration, ev: Event) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tx.send(ev).await.ok();
        });
    }

    fn spawn_progress(&self, request: u64) {
        let tx = self.tx.clone();
        let step = self.cfg.progress_step;
        tokio::spawn(async move {
            for i in 1..=PROGRESS_STEPS {
                tokio::time::sleep(step).await;
                let percent = i * (100 / PROGRESS_STEPS);
                if tx.send(Event::Progress { request, percent }).await.is_err() {
                    break;
                }
            }
        });
    }

    fn spawn_load(&self, request: u64, zip: String, background: bool) {
        let tx = self.tx.clone();
        let services = self.services.clone();
        let cfg = self.cfg.clone();
        tokio::spawn(async move {
            info!(zip = %zip, background, "load started");
            let result = load_session(&zip, &services, &cfg).await;
            tx.send(Event::Loaded { request, result }).await.ok();
        });
    }
}

/// The basemap depends only on the map centre, so it is redrawn only when
/// that changes.
#[derive(Default)]
struct OverlayCache {
    center: Option<GeoPoint>,
    canvas: Option<Canvas>,
}

impl OverlayCache {
    fn get(&mut self, center: Option<GeoPoint>, width: usize, height: usize) -> Option<&Canvas> {
        if self.canvas.is_none() || self.center != center {
            self.center = center;
            self.canvas = Some(overlay::render(center, width, height));
        }
        self.canvas.as_ref()
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, DisableLineWrap, cursor::Hide)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(term: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let mut out = io::stdout();
    execute!(
        out,
        BeginSynchronizedUpdate,
        cursor::Show,
        EnableLineWrap,
        LeaveAlternateScreen,
        EndSynchronizedUpdate
    )?;
    terminal::disable_raw_mode()?;
    term.show_cursor()?;
    Ok(())
}

fn draw_frame(term: &mut Terminal<CrosstermBackend<Stdout>>, view: &View) -> Result<()> {
    term.draw(|f| {
        let _ = execute!(io::stdout(), BeginSynchronizedUpdate);
        draw(f, view);
        let _ = execute!(io::stdout(), EndSynchronizedUpdate);
    })?;
    Ok(())
}

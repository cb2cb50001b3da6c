//! Playback and refresh state machine.
//!
//! `Scheduler::handle` consumes one `Event` at a time and returns the side
//! effects the runtime must perform (arm a timer, start a load, quit). It
//! never sleeps or does I/O itself. Every timer carries the id of the chain
//! that armed it so superseded chains die on their next tick, and every load
//! carries a request id so late results are dropped.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::{clamp_frame_rate, Config, FRAME_RATE_STEP};
use crate::error::LoadError;
use crate::model::{Frame, RadarSession};

pub(crate) const ZIP_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Input,
    Loading,
    Displaying,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlaybackState {
    pub(crate) current_frame: usize,
    pub(crate) paused: bool,
    pub(crate) frame_rate: Duration,
    pub(crate) animation_active: bool,
    pub(crate) last_refresh: Option<DateTime<Utc>>,
}

/// User intents, already decoded from raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Digit(char),
    Backspace,
    Submit,
    Cancel,
    Quit,
    TogglePause,
    PrevFrame,
    NextFrame,
    SpeedUp,
    SlowDown,
    Refresh,
    ToggleHelp,
}

#[derive(Debug)]
pub(crate) enum Event {
    Key(Action),
    FrameTick { chain: u64 },
    RefreshTick { chain: u64 },
    SpinnerTick { chain: u64 },
    Progress { request: u64, percent: u8 },
    Loaded {
        request: u64,
        result: Result<RadarSession, LoadError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Effect {
    ScheduleFrameTick { chain: u64, delay: Duration },
    ScheduleRefresh { chain: u64, delay: Duration },
    ScheduleSpinner { chain: u64, delay: Duration },
    StartProgress { request: u64 },
    StartLoad { request: u64, zip: String, background: bool },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingLoad {
    request: u64,
    background: bool,
}

pub(crate) struct Scheduler {
    cfg: Arc<Config>,
    screen: Screen,
    zip_input: String,
    zip: String,
    session: Option<RadarSession>,
    playback: PlaybackState,
    error: Option<String>,
    show_help: bool,
    progress: u8,
    spinner: usize,
    pending: Option<PendingLoad>,
    next_request: u64,
    frame_chain: u64,
    refresh_chain: u64,
    spinner_chain: u64,
}

impl Scheduler {
    pub(crate) fn new(cfg: Arc<Config>) -> Self {
        let frame_rate = cfg.frame_rate;
        Self {
            cfg,
            screen: Screen::Input,
            zip_input: String::new(),
            zip: String::new(),
            session: None,
            playback: PlaybackState {
                current_frame: 0,
                paused: false,
                frame_rate,
                animation_active: false,
                last_refresh: None,
            },
            error: None,
            show_help: false,
            progress: 0,
            spinner: 0,
            pending: None,
            next_request: 0,
            frame_chain: 0,
            refresh_chain: 0,
            spinner_chain: 0,
        }
    }

    pub(crate) fn screen(&self) -> Screen {
        self.screen
    }

    pub(crate) fn zip_input(&self) -> &str {
        &self.zip_input
    }

    pub(crate) fn session(&self) -> Option<&RadarSession> {
        self.session.as_ref()
    }

    pub(crate) fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn show_help(&self) -> bool {
        self.show_help
    }

    /// Decorative load progress, 0..=100.
    pub(crate) fn progress(&self) -> u8 {
        self.progress
    }

    pub(crate) fn spinner(&self) -> usize {
        self.spinner
    }

    pub(crate) fn current_frame(&self) -> Option<&Frame> {
        let frames = &self.session.as_ref()?.frames;
        if frames.is_empty() {
            return None;
        }
        frames.get(self.playback.current_frame % frames.len())
    }

    pub(crate) fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Key(action) => self.on_action(action),
            Event::FrameTick { chain } => self.on_frame_tick(chain),
            Event::RefreshTick { chain } => self.on_refresh_tick(chain),
            Event::SpinnerTick { chain } => self.on_spinner_tick(chain),
            Event::Progress { request, percent } => {
                if self.screen == Screen::Loading
                    && self.pending.is_some_and(|p| p.request == request && !p.background)
                {
                    self.progress = percent.min(100);
                }
                Vec::new()
            }
            Event::Loaded { request, result } => self.on_loaded(request, result),
        }
    }

    fn on_action(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Quit => vec![Effect::Quit],
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                Vec::new()
            }
            Action::SpeedUp => {
                self.adjust_frame_rate(false);
                Vec::new()
            }
            Action::SlowDown => {
                self.adjust_frame_rate(true);
                Vec::new()
            }
            Action::Digit(ch) => {
                if self.screen == Screen::Input
                    && ch.is_ascii_digit()
                    && self.zip_input.len() < ZIP_LEN
                {
                    self.zip_input.push(ch);
                }
                Vec::new()
            }
            Action::Backspace => {
                if self.screen == Screen::Input {
                    self.zip_input.pop();
                }
                Vec::new()
            }
            Action::Submit => {
                if self.screen == Screen::Input && self.zip_input.len() == ZIP_LEN {
                    self.zip = self.zip_input.clone();
                    return self.begin_foreground_load();
                }
                Vec::new()
            }
            Action::Cancel => {
                if matches!(self.screen, Screen::Displaying | Screen::Error) {
                    self.reset_to_input();
                }
                Vec::new()
            }
            Action::Refresh => {
                if self.screen == Screen::Displaying && !self.zip.is_empty() {
                    self.playback.animation_active = false;
                    self.frame_chain = self.frame_chain.wrapping_add(1);
                    return self.begin_foreground_load();
                }
                Vec::new()
            }
            Action::TogglePause => {
                if self.screen != Screen::Displaying {
                    return Vec::new();
                }
                self.playback.paused = !self.playback.paused;
                if !self.playback.paused && !self.playback.animation_active {
                    return vec![self.start_frame_chain()];
                }
                Vec::new()
            }
            Action::PrevFrame => {
                self.step_frame(-1);
                Vec::new()
            }
            Action::NextFrame => {
                self.step_frame(1);
                Vec::new()
            }
        }
    }

    fn adjust_frame_rate(&mut self, slower: bool) {
        let rate = self.playback.frame_rate;
        let next = if slower {
            rate + FRAME_RATE_STEP
        } else {
            rate.saturating_sub(FRAME_RATE_STEP)
        };
        self.playback.frame_rate = clamp_frame_rate(next);
    }

    fn frame_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.frames.len())
    }

    fn step_frame(&mut self, delta: isize) {
        let n = self.frame_count();
        if self.screen != Screen::Displaying || n == 0 {
            return;
        }
        let cur = (self.playback.current_frame % n) as isize;
        self.playback.current_frame = (cur + delta).rem_euclid(n as isize) as usize;
    }

    fn start_frame_chain(&mut self) -> Effect {
        self.playback.animation_active = true;
        self.frame_chain = self.frame_chain.wrapping_add(1);
        Effect::ScheduleFrameTick {
            chain: self.frame_chain,
            delay: self.playback.frame_rate,
        }
    }

    fn start_refresh_chain(&mut self) -> Effect {
        self.refresh_chain = self.refresh_chain.wrapping_add(1);
        Effect::ScheduleRefresh {
            chain: self.refresh_chain,
            delay: self.cfg.refresh_interval,
        }
    }

    fn new_request(&mut self, background: bool) -> u64 {
        self.next_request = self.next_request.wrapping_add(1);
        self.pending = Some(PendingLoad {
            request: self.next_request,
            background,
        });
        self.next_request
    }

    fn begin_foreground_load(&mut self) -> Vec<Effect> {
        info!(zip = %self.zip, "loading radar");
        self.screen = Screen::Loading;
        self.progress = 0;
        self.spinner = 0;
        self.error = None;
        let request = self.new_request(false);
        self.spinner_chain = self.spinner_chain.wrapping_add(1);
        vec![
            Effect::StartLoad {
                request,
                zip: self.zip.clone(),
                background: false,
            },
            Effect::StartProgress { request },
            Effect::ScheduleSpinner {
                chain: self.spinner_chain,
                delay: self.cfg.spinner_step,
            },
        ]
    }

    fn reset_to_input(&mut self) {
        info!("back to ZIP entry");
        self.screen = Screen::Input;
        self.session = None;
        self.error = None;
        self.pending = None;
        self.zip_input.clear();
        self.playback.current_frame = 0;
        self.playback.paused = false;
        self.playback.animation_active = false;
        self.playback.last_refresh = None;
        self.frame_chain = self.frame_chain.wrapping_add(1);
        self.refresh_chain = self.refresh_chain.wrapping_add(1);
    }

    fn on_frame_tick(&mut self, chain: u64) -> Vec<Effect> {
        if chain != self.frame_chain {
            return Vec::new();
        }
        let n = self.frame_count();
        if self.screen == Screen::Displaying
            && self.playback.animation_active
            && !self.playback.paused
            && n > 0
        {
            self.playback.current_frame = (self.playback.current_frame + 1) % n;
            return vec![Effect::ScheduleFrameTick {
                chain,
                delay: self.playback.frame_rate,
            }];
        }
        self.playback.animation_active = false;
        Vec::new()
    }

    fn on_refresh_tick(&mut self, chain: u64) -> Vec<Effect> {
        if chain != self.refresh_chain
            || self.screen != Screen::Displaying
            || !self.cfg.auto_refresh
            || self.zip.is_empty()
        {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if self.pending.is_none() {
            let request = self.new_request(true);
            debug!(request, "background refresh");
            effects.push(Effect::StartLoad {
                request,
                zip: self.zip.clone(),
                background: true,
            });
        }
        effects.push(Effect::ScheduleRefresh {
            chain,
            delay: self.cfg.refresh_interval,
        });
        effects
    }

    fn on_spinner_tick(&mut self, chain: u64) -> Vec<Effect> {
        if chain != self.spinner_chain || self.screen != Screen::Loading {
            return Vec::new();
        }
        self.spinner = self.spinner.wrapping_add(1);
        vec![Effect::ScheduleSpinner {
            chain,
            delay: self.cfg.spinner_step,
        }]
    }

    fn on_loaded(&mut self, request: u64, result: Result<RadarSession, LoadError>) -> Vec<Effect> {
        let Some(pending) = self.pending.filter(|p| p.request == request) else {
            debug!(request, "dropping stale load result");
            return Vec::new();
        };
        self.pending = None;

        if pending.background {
            if self.screen != Screen::Displaying {
                return Vec::new();
            }
            let live = self.session.as_ref().is_some_and(|s| s.is_real_data);
            match result {
                Ok(session) if live && !session.is_real_data => {
                    warn!("radar unavailable on background refresh, keeping live loop");
                }
                Ok(session) => {
                    let n = session.frames.len();
                    if n > 0 {
                        self.playback.current_frame %= n;
                    }
                    self.playback.last_refresh = Some(session.last_updated);
                    info!(frames = n, real = session.is_real_data, "background refresh applied");
                    self.session = Some(session);
                }
                Err(e) => warn!(error = %e, "background refresh failed, keeping current loop"),
            }
            return Vec::new();
        }

        if self.screen != Screen::Loading {
            return Vec::new();
        }
        match result {
            Ok(session) => {
                info!(
                    location = %session.location,
                    station = %session.station,
                    frames = session.frames.len(),
                    real = session.is_real_data,
                    "radar loaded"
                );
                self.screen = Screen::Displaying;
                self.progress = 100;
                self.playback.current_frame = 0;
                self.playback.paused = false;
                self.playback.last_refresh = Some(session.last_updated);
                self.session = Some(session);

                let mut effects = Vec::new();
                if !self.playback.animation_active {
                    effects.push(self.start_frame_chain());
                }
                if self.cfg.auto_refresh {
                    effects.push(self.start_refresh_chain());
                }
                effects
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                self.screen = Screen::Error;
                self.error = Some(e.to_string());
                self.session = None;
                self.playback.animation_active = false;
                Vec::new()
            }
        }
    }
}

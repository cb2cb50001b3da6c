use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub(crate) const GRID_WIDTH: usize = 60;
pub(crate) const GRID_HEIGHT: usize = 30;
pub(crate) const MAX_FRAMES: usize = 20;

pub(crate) const MIN_FRAME_RATE: Duration = Duration::from_millis(100);
pub(crate) const MAX_FRAME_RATE: Duration = Duration::from_millis(2000);
pub(crate) const FRAME_RATE_STEP: Duration = Duration::from_millis(100);

#[derive(Parser, Debug, Clone)]
#[command(name = "radarloop")]
#[command(about = "Animated terminal weather radar for US ZIP codes (RainViewer + Iowa Mesonet)")]
pub(crate) struct Cli {
    /// Force monochrome (no colors)
    #[arg(long, default_value_t = false)]
    pub(crate) mono: bool,

    /// Initial delay between animation frames (milliseconds, 100..=2000)
    #[arg(long, default_value_t = 300)]
    pub(crate) frame_rate_ms: u64,

    /// Number of radar frames to keep per loop
    #[arg(long, default_value_t = MAX_FRAMES)]
    pub(crate) max_frames: usize,

    /// Disable the 5 minute background refresh
    #[arg(long, default_value_t = false)]
    pub(crate) no_auto_refresh: bool,

    /// Write logs here instead of the default data directory
    #[arg(long)]
    pub(crate) log_file: Option<PathBuf>,
}

/// Upstream request timeouts, one per endpoint family.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Timeouts {
    pub(crate) geocode: Duration,
    pub(crate) weather: Duration,
    pub(crate) composite: Duration,
    pub(crate) station: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            geocode: Duration::from_secs(10),
            weather: Duration::from_secs(5),
            composite: Duration::from_secs(10),
            station: Duration::from_secs(30),
        }
    }
}

/// Session-wide settings. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) grid_width: usize,
    pub(crate) grid_height: usize,
    pub(crate) max_frames: usize,
    pub(crate) frame_rate: Duration,
    pub(crate) refresh_interval: Duration,
    pub(crate) auto_refresh: bool,
    pub(crate) station_lookback: usize,
    pub(crate) composite_zoom: u8,
    pub(crate) progress_step: Duration,
    pub(crate) spinner_step: Duration,
    pub(crate) timeouts: Timeouts,
    pub(crate) mono: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            max_frames: MAX_FRAMES,
            frame_rate: Duration::from_millis(300),
            refresh_interval: Duration::from_secs(5 * 60),
            auto_refresh: true,
            station_lookback: 24,
            composite_zoom: 7,
            progress_step: Duration::from_millis(200),
            spinner_step: Duration::from_millis(100),
            timeouts: Timeouts::default(),
            mono: false,
        }
    }
}

impl Config {
    pub(crate) fn from_cli(cli: &Cli) -> Self {
        Self {
            max_frames: cli.max_frames.max(1),
            frame_rate: clamp_frame_rate(Duration::from_millis(cli.frame_rate_ms)),
            auto_refresh: !cli.no_auto_refresh,
            mono: cli.mono,
            ..Self::default()
        }
    }
}

pub(crate) fn clamp_frame_rate(rate: Duration) -> Duration {
    rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE)
}

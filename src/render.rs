use chrono::{DateTime, Local, Timelike, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};

use crate::config::Config;
use crate::model::{Alert, IntensityGrid, RadarSession};
use crate::overlay::{Canvas, Mark};
use crate::scheduler::{Scheduler, Screen, ZIP_LEN};
use crate::weather::{alert_banner, condition_emoji, most_severe};

const PRECIP_GLYPHS: [char; 11] = [' ', '·', '∘', '○', '●', '◉', '◆', '◈', '▰', '▱', '█'];
/// xterm-256 colours, light cyan through yellow to deep red.
const PRECIP_COLORS: [u8; 11] = [0, 51, 50, 49, 226, 220, 214, 208, 202, 196, 160];
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const LOADING_MESSAGES: [&str; 4] = [
    "Locating ZIP code...",
    "Finding nearest radar station...",
    "Fetching radar data...",
    "Processing frames...",
];

/// Everything a draw needs, borrowed from the app for one frame.
pub(crate) struct View<'a> {
    pub(crate) sched: &'a Scheduler,
    pub(crate) overlay: Option<&'a Canvas>,
    pub(crate) cfg: &'a Config,
    pub(crate) now: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ink {
    Precip(u8),
    Map(Mark),
}

pub(crate) fn draw(f: &mut Frame, view: &View) {
    let mono = view.cfg.mono;
    let area = f.size();
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::styled(" radarloop ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                "terminal weather radar ",
                Style::default().fg(if mono { Color::White } else { Color::Cyan }),
            ),
        ]))
        .border_style(Style::default().fg(if mono { Color::Gray } else { Color::DarkGray }));
    f.render_widget(outer, area);
    let inner = area.inner(Margin { horizontal: 1, vertical: 1 });

    match view.sched.screen() {
        Screen::Input => render_input(f, inner, view),
        Screen::Loading => render_loading(f, inner, view),
        Screen::Displaying => render_displaying(f, inner, view),
        Screen::Error => render_error(f, inner, view),
    }

    if view.sched.show_help() {
        render_help(f, inner, view);
    }
}

fn render_input(f: &mut Frame, area: Rect, view: &View) {
    let mono = view.cfg.mono;
    let typed = view.sched.zip_input();
    let blanks = "_".repeat(ZIP_LEN.saturating_sub(typed.len()));
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Enter a US ZIP code",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                typed.to_string(),
                Style::default().fg(if mono { Color::White } else { Color::Cyan }),
            ),
            Span::styled(blanks, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Try: 10001 (NYC), 60601 (Chicago), 98101 (Seattle), 33101 (Miami)",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from("[Enter] Load radar • [?] Help • [Q] Quit"),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Location")),
        area,
    );
}

fn render_loading(f: &mut Frame, area: Rect, view: &View) {
    let mono = view.cfg.mono;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let spin = SPINNER[view.sched.spinner() % SPINNER.len()];
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                spin.to_string(),
                Style::default().fg(if mono { Color::White } else { Color::Cyan }),
            ),
            Span::raw(" "),
            Span::raw(loading_message(view.sched.progress())),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Loading"))
        .gauge_style(Style::default().fg(if mono { Color::White } else { Color::Cyan }))
        .percent(u16::from(view.sched.progress().min(100)));
    f.render_widget(gauge, rows[1]);
}

fn render_error(f: &mut Frame, area: Rect, view: &View) {
    let mono = view.cfg.mono;
    let msg = view.sched.error().unwrap_or("unknown error");
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Error: {msg}"),
            Style::default()
                .fg(if mono { Color::White } else { Color::Red })
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press ESC to try again or Q to quit"),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Error")),
        area,
    );
}

fn render_displaying(f: &mut Frame, area: Rect, view: &View) {
    let Some(session) = view.sched.session() else {
        return;
    };
    let radar_h = view.cfg.grid_height as u16 + 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(radar_h + 1),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(view.cfg.grid_width as u16 + 2),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    render_radar(f, cols[0], view, session);
    render_info(f, rows[1], view, session);
    render_controls(f, rows[2], view);
}

fn render_radar(f: &mut Frame, area: Rect, view: &View, session: &RadarSession) {
    let mono = view.cfg.mono;
    let title = match view.sched.current_frame() {
        Some(frame) => format!("Radar · {}", frame.product),
        None => "Radar".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let lines = match (view.sched.current_frame(), view.overlay) {
        (Some(frame), Some(overlay)) => radar_lines(&composite(&frame.grid, overlay), mono),
        _ => Vec::new(),
    };
    f.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let dots = frame_dots(session.frames.len(), view.sched.playback().current_frame);
    let caption = Line::from(vec![
        Span::raw(dots),
        Span::raw("  "),
        Span::styled("───── = 50 miles", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(caption), chunks[1]);
}

fn render_info(f: &mut Frame, area: Rect, view: &View, session: &RadarSession) {
    let mono = view.cfg.mono;
    let playback = view.sched.playback();
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!("📍 {}", session.location),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   📡 {}", session.station)),
    ]));

    let mut weather = Vec::new();
    if let Some(t) = session.temperature {
        let style = if mono {
            Style::default()
        } else {
            Style::default().fg(Color::Indexed(temperature_color(t)))
        };
        weather.push(Span::styled(format!("{t}°F"), style));
    }
    if let Some(c) = &session.conditions {
        let hour = view.now.with_timezone(&Local).hour();
        weather.push(Span::raw(format!("  {} {c}", condition_emoji(c, hour))));
    }
    if !weather.is_empty() {
        lines.push(Line::from(weather));
    }

    if let Some(banner) = alert_banner(&session.alerts) {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if !mono {
            style = style.fg(Color::Indexed(banner.color));
            if banner.highlight {
                style = style.bg(Color::Indexed(52));
            }
        }
        lines.push(Line::from(Span::styled(
            format!("{} {}", banner.emoji, banner.text),
            style,
        )));
        if let Some(top) = most_severe(&session.alerts) {
            lines.push(Line::from(Span::styled(
                alert_detail(top),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    if let Some(frame) = view.sched.current_frame() {
        let n = session.frames.len();
        let idx = playback.current_frame % n.max(1);
        let mut spans = vec![Span::raw(format!(
            "Frame {}/{} ({} ago)",
            idx + 1,
            n,
            short_ago(view.now, frame.timestamp)
        ))];
        if playback.paused {
            spans.push(Span::styled(
                " (PAUSED)",
                Style::default().fg(if mono { Color::White } else { Color::Yellow }),
            ));
        }
        lines.push(Line::from(spans));
    }

    let mut status = Vec::new();
    if let Some(at) = playback.last_refresh {
        status.push(Span::styled(
            format!("Updated {} ago", short_ago(view.now, at)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if !session.is_real_data {
        status.push(Span::styled(
            "  ⚠ simulated data",
            Style::default().fg(if mono { Color::White } else { Color::Yellow }),
        ));
    }
    if !status.is_empty() {
        lines.push(Line::from(status));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Info")),
        area,
    );
}

fn render_controls(f: &mut Frame, area: Rect, view: &View) {
    let line = Line::from(
        "[Space] Play/Pause • [←/→] Previous/Next • [R] Refresh • [+/-] Speed • [ESC] New location • [Q] Quit",
    );
    f.render_widget(
        Paragraph::new(line)
            .style(Style::default().fg(if view.cfg.mono { Color::White } else { Color::Gray }))
            .block(Block::default().borders(Borders::ALL).title("Keys")),
        area,
    );
}

fn render_help(f: &mut Frame, area: Rect, view: &View) {
    let playback = view.sched.playback();
    let refresh = if view.cfg.auto_refresh {
        format!("every {} min", view.cfg.refresh_interval.as_secs() / 60)
    } else {
        "off".to_string()
    };
    let lines = vec![
        Line::from("Space      play / pause"),
        Line::from("←/a  →/d   previous / next frame"),
        Line::from("+/=  -/_   faster / slower"),
        Line::from("r          reload now"),
        Line::from("Esc        new location"),
        Line::from("?/h        toggle this help"),
        Line::from("q          quit"),
        Line::from(""),
        Line::from(format!("Frame rate: {} ms", playback.frame_rate.as_millis())),
        Line::from(format!("Auto-refresh: {refresh}")),
    ];

    let w = area.width.min(44);
    let h = area.height.min(lines.len() as u16 + 2);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(w),
        y: area.y,
        width: w,
        height: h,
    };
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .style(Style::default().fg(if view.cfg.mono { Color::White } else { Color::Gray })),
        popup,
    );
}

/// Precipitation over the basemap: any non-zero level hides the map cell.
fn composite(grid: &IntensityGrid, overlay: &Canvas) -> Vec<Vec<(char, Ink)>> {
    (0..overlay.height())
        .map(|y| {
            (0..overlay.width())
                .map(|x| {
                    let level = grid.get(x, y);
                    if level > 0 {
                        (precip_glyph(level), Ink::Precip(level))
                    } else {
                        let cell = overlay.get(x as i32, y as i32);
                        (cell.glyph, Ink::Map(cell.mark))
                    }
                })
                .collect()
        })
        .collect()
}

fn radar_lines(cells: &[Vec<(char, Ink)>], mono: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(cells.len());
    for row in cells {
        let Some(&(_, first)) = row.first() else {
            lines.push(Line::from(""));
            continue;
        };
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut current = first;
        let mut buf = String::new();
        for &(ch, ink) in row {
            if ink != current {
                spans.push(Span::styled(std::mem::take(&mut buf), ink_style(current, mono)));
                current = ink;
            }
            buf.push(ch);
        }
        if !buf.is_empty() {
            spans.push(Span::styled(buf, ink_style(current, mono)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn ink_style(ink: Ink, mono: bool) -> Style {
    if mono {
        return match ink {
            Ink::Map(Mark::Center) => Style::default().add_modifier(Modifier::BOLD),
            _ => Style::default(),
        };
    }
    match ink {
        Ink::Precip(level) => Style::default().fg(Color::Indexed(precip_color(level))),
        Ink::Map(mark) => match mark {
            Mark::Blank => Style::default(),
            Mark::Border => Style::default().fg(Color::Indexed(240)),
            Mark::Label => Style::default().fg(Color::Indexed(239)),
            Mark::River | Mark::Coast | Mark::Lake => Style::default().fg(Color::Indexed(33)),
            Mark::Mountain => Style::default().fg(Color::Indexed(94)),
            Mark::Ring => Style::default().fg(Color::Indexed(238)),
            Mark::Center => Style::default()
                .fg(Color::Indexed(226))
                .add_modifier(Modifier::BOLD),
        },
    }
}

/// Headline (or first description line), urgency and local expiry time.
fn alert_detail(alert: &Alert) -> String {
    let mut text = if alert.headline.is_empty() {
        alert.description.lines().next().unwrap_or_default().to_string()
    } else {
        alert.headline.clone()
    };
    if !alert.urgency.is_empty() {
        text.push_str(&format!(" [{}]", alert.urgency));
    }
    if let Some(until) = alert.expires {
        text.push_str(&format!(" until {}", until.with_timezone(&Local).format("%H:%M")));
    }
    text
}

fn precip_glyph(level: u8) -> char {
    PRECIP_GLYPHS[usize::from(level).min(PRECIP_GLYPHS.len() - 1)]
}

fn precip_color(level: u8) -> u8 {
    PRECIP_COLORS[usize::from(level).min(PRECIP_COLORS.len() - 1)]
}

fn temperature_color(f: i32) -> u8 {
    match f {
        t if t >= 90 => 196,
        t if t >= 70 => 214,
        t if t >= 50 => 226,
        t if t >= 32 => 87,
        _ => 51,
    }
}

fn loading_message(percent: u8) -> &'static str {
    let idx = usize::from(percent) * LOADING_MESSAGES.len() / 100;
    LOADING_MESSAGES[idx.min(LOADING_MESSAGES.len() - 1)]
}

fn frame_dots(count: usize, current: usize) -> String {
    let current = current % count.max(1);
    (0..count)
        .map(|i| if i == current { '●' } else { '·' })
        .collect()
}

/// "42s" under a minute, "7m" after. Future instants read as zero.
fn short_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{}m", secs / 60)
    }
}

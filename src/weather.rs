//! NWS payloads and the small amount of interpretation done on them:
//! unit normalization, alert ranking and display hints.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::{Alert, Conditions, Severity};

#[derive(Debug, Deserialize)]
pub(crate) struct PointResp {
    pub(crate) properties: PointProps,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PointProps {
    #[serde(rename = "observationStations")]
    pub(crate) observation_stations: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StationsResp {
    #[serde(default)]
    pub(crate) features: Vec<StationFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StationFeature {
    pub(crate) properties: StationProps,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StationProps {
    #[serde(rename = "stationIdentifier")]
    pub(crate) station_identifier: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObservationResp {
    pub(crate) properties: ObservationProps,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ObservationProps {
    pub(crate) temperature: Measurement,
    #[serde(rename = "textDescription", default)]
    pub(crate) text_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Measurement {
    pub(crate) value: Option<f64>,
    #[serde(rename = "unitCode", default)]
    pub(crate) unit_code: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlertsResp {
    #[serde(default)]
    pub(crate) features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlertFeature {
    pub(crate) properties: AlertProps,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlertProps {
    #[serde(default)]
    event: Option<String>,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    urgency: Option<String>,
    #[serde(default)]
    headline: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    expires: Option<String>,
}

impl ObservationResp {
    pub(crate) fn into_conditions(self) -> Conditions {
        let t = self.properties.temperature;
        let description = self
            .properties
            .text_description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "Clear".to_string());
        Conditions {
            temperature_f: t.value.map(|v| to_fahrenheit(v, &t.unit_code)),
            description,
        }
    }
}

impl AlertsResp {
    pub(crate) fn into_alerts(self) -> Vec<Alert> {
        self.features
            .into_iter()
            .map(|f| {
                let p = f.properties;
                Alert {
                    event: p.event.unwrap_or_default(),
                    severity: Severity::parse(p.severity.as_deref().unwrap_or("")),
                    urgency: p.urgency.unwrap_or_default(),
                    headline: p.headline.unwrap_or_default(),
                    description: p.description.unwrap_or_default(),
                    expires: p
                        .expires
                        .as_deref()
                        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                        .map(|t| t.with_timezone(&Utc)),
                }
            })
            .collect()
    }
}

pub(crate) fn is_celsius(unit_code: &str) -> bool {
    let lower = unit_code.to_ascii_lowercase();
    lower.contains("degc")
        || lower.contains("celsius")
        || unit_code == "wmoUnit:degC"
        || unit_code == "unit:degC"
}

/// Whole degrees Fahrenheit, converting from Celsius when the unit says so.
pub(crate) fn to_fahrenheit(value: f64, unit_code: &str) -> i32 {
    let f = if is_celsius(unit_code) {
        value * 9.0 / 5.0 + 32.0
    } else {
        value
    };
    f.round() as i32
}

/// Most severe alert; on equal severity the earlier one wins.
pub(crate) fn most_severe(alerts: &[Alert]) -> Option<&Alert> {
    let mut best: Option<&Alert> = None;
    for alert in alerts {
        match best {
            Some(b) if alert.severity <= b.severity => {}
            _ => best = Some(alert),
        }
    }
    best
}

/// What the info panel shows for the current alert set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AlertBanner {
    pub(crate) emoji: &'static str,
    /// xterm-256 palette index.
    pub(crate) color: u8,
    pub(crate) text: String,
    pub(crate) highlight: bool,
}

pub(crate) fn alert_banner(alerts: &[Alert]) -> Option<AlertBanner> {
    let top = most_severe(alerts)?;
    let event = top.event.to_lowercase();
    let kind = alert_kind(&top.event);

    let (emoji, color, text) = if event.contains("tornado") {
        ("🌪️", 196, format!("TORNADO {kind}"))
    } else if event.contains("severe thunderstorm") {
        ("⛈️", 208, format!("SEVERE T-STORM {kind}"))
    } else if event.contains("flood") {
        ("🌊", 33, format!("FLOOD {kind}"))
    } else if event.contains("winter") || event.contains("snow") || event.contains("blizzard") {
        ("❄️", 51, kind.to_string())
    } else if event.contains("heat") {
        ("🔥", 202, format!("HEAT {kind}"))
    } else if event.contains("wind") {
        ("💨", 226, format!("WIND {kind}"))
    } else {
        let color = match top.severity {
            Severity::Extreme => 196,
            Severity::Severe => 208,
            _ => 226,
        };
        ("⚠️", color, kind.to_string())
    };

    Some(AlertBanner {
        emoji,
        color,
        text,
        highlight: alerts.iter().any(|a| a.severity == Severity::Extreme),
    })
}

fn alert_kind(event: &str) -> &'static str {
    if event.contains("Warning") {
        "WARNING"
    } else if event.contains("Watch") {
        "WATCH"
    } else if event.contains("Advisory") {
        "ADVISORY"
    } else {
        "ALERT"
    }
}

/// Icon for an NWS text description. `local_hour` picks sun or moon for clear skies.
pub(crate) fn condition_emoji(conditions: &str, local_hour: u32) -> &'static str {
    if conditions.is_empty() {
        return "";
    }
    let c = conditions.to_lowercase();
    let has = |needle: &str| c.contains(needle);

    if has("thunder") || has("storm") {
        "⛈️"
    } else if has("snow") || has("blizzard") {
        "🌨️"
    } else if has("rain") || has("shower") {
        if has("heavy") {
            "🌧️"
        } else {
            "🌦️"
        }
    } else if has("drizzle") || has("mist") {
        "🌫️"
    } else if has("cloud") {
        if has("partly") || has("few") {
            "⛅"
        } else {
            "☁️"
        }
    } else if has("clear") || has("sunny") {
        if (6..18).contains(&local_hour) {
            "☀️"
        } else {
            "🌙"
        }
    } else if has("fog") {
        "🌫️"
    } else if has("wind") {
        "💨"
    } else if has("hail") {
        "🌨️"
    } else {
        "🌤️"
    }
}

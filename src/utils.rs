use std::time::Duration;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};

use crate::jamendo::{ParamValue, Parameters, params::DATE_FORMAT};

/// Random value sent as `state` to the authorize page.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Parses a command-line `key=value` parameter.
///
/// A value containing commas becomes a list, so `include=musicinfo,stats`
/// is sent as `include=musicinfo+stats`.
pub fn parse_param(raw: &str) -> Result<(String, ParamValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing parameter name in `{raw}`"));
    }

    let value = if value.contains(',') {
        ParamValue::List(value.split(',').map(|v| v.trim().to_string()).collect())
    } else {
        ParamValue::Text(value.trim().to_string())
    };

    Ok((key.to_string(), value))
}

/// Parses `FROM..TO` (both `YYYY-MM-DD`) into a date range.
pub fn parse_date_range(raw: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let (from, to) = raw
        .split_once("..")
        .ok_or_else(|| format!("expected FROM..TO, got `{raw}`"))?;

    let from = parse_date(from)?;
    let to = parse_date(to)?;
    if from > to {
        return Err(format!("range starts on {from} but ends on {to}"));
    }
    Ok((from, to))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| format!("invalid date `{}`: {e}", raw.trim()))
}

/// Assembles request parameters from parsed command-line options.
pub fn build_parameters(
    params: &[(String, ParamValue)],
    between: Option<(NaiveDate, NaiveDate)>,
) -> Parameters {
    let mut parameters: Parameters = params.iter().cloned().collect();
    if let Some((from, to)) = between {
        parameters = parameters.date_between(from, to);
    }
    parameters
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

//! Loading daily logs from JSON (file or stdin).

use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLog;
use crate::utils::time::parse_date;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use tracing::{debug, info};

/// Shapes accepted on input.
#[derive(Deserialize)]
#[serde(untagged)]
enum LogInput {
    /// Trip response: `{ "logs": [ ... ], ... }`
    Trip { logs: Vec<DailyLog> },
    Many(Vec<DailyLog>),
    Single(DailyLog),
}

/// Which log of a multi-day input to use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DaySelector {
    #[default]
    First,
    /// 1-based position in the input.
    Index(usize),
    Date(String),
}

impl DaySelector {
    pub fn from_args(day: Option<usize>, date: Option<&str>) -> Self {
        match (day, date) {
            (_, Some(d)) => DaySelector::Date(d.to_string()),
            (Some(n), None) => DaySelector::Index(n),
            (None, None) => DaySelector::First,
        }
    }
}

pub fn parse_logs(json: &str) -> AppResult<Vec<DailyLog>> {
    let logs = match serde_json::from_str::<LogInput>(json)? {
        LogInput::Trip { logs } | LogInput::Many(logs) => logs,
        LogInput::Single(log) => vec![log],
    };
    debug!(days = logs.len(), "parsed daily logs");
    Ok(logs)
}

/// Read logs from `path`, or from stdin when `path` is `-`.
pub fn load_logs(path: &str) -> AppResult<Vec<DailyLog>> {
    let content = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| {
            AppError::InvalidInput(format!("cannot read log file '{path}': {e}"))
        })?
    };

    let logs = parse_logs(&content)?;
    info!(source = path, days = logs.len(), "loaded daily logs");
    Ok(logs)
}

pub fn select_day<'a>(logs: &'a [DailyLog], selector: &DaySelector) -> AppResult<&'a DailyLog> {
    match selector {
        DaySelector::First => logs
            .first()
            .ok_or_else(|| AppError::DayNotFound("input (no logs)".to_string())),
        DaySelector::Index(n) => n
            .checked_sub(1)
            .and_then(|i| logs.get(i))
            .ok_or_else(|| AppError::DayNotFound(format!("day {n} (input has {})", logs.len()))),
        DaySelector::Date(d) => {
            let wanted = parse_date(d)?;
            logs.iter()
                .find(|log| parse_date(&log.date).is_ok_and(|ld| ld == wanted))
                .ok_or_else(|| AppError::DayNotFound(d.clone()))
        }
    }
}

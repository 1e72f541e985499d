use chrono::{
    format::{Item, StrftimeItems},
    DateTime, Local,
};
use std::fmt::Write;
use thiserror::Error;

pub use logform::{Format, LogInfo};

/// Timestamp layout of the `asctime` field: local time with milliseconds,
/// e.g. `2024-05-01 13:45:10,042`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Meta key carrying the name of the logger that produced a record.
pub const LOGGER_NAME_KEY: &str = "logger";

const DELIMITER: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date format `{0}`")]
pub struct InvalidDateFormat(pub String);

/// Rewrites a record's message into `name|timestamp|LEVEL|message`.
///
/// Field order and delimiter are fixed; only the timestamp layout can be
/// changed. The logger name is read from the [`LOGGER_NAME_KEY`] meta entry.
#[derive(Debug, Clone)]
pub struct PipeFormat {
    date_format: String,
}

impl PipeFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `chrono` strftime layout used for the timestamp field.
    ///
    /// Layouts `chrono` cannot render, such as `%Q`, are rejected.
    pub fn date_format<T: Into<String>>(mut self, date_format: T) -> Result<Self, InvalidDateFormat> {
        let date_format = date_format.into();
        if StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error)) {
            return Err(InvalidDateFormat(date_format));
        }
        self.date_format = date_format;
        Ok(self)
    }

    pub(crate) fn render(&self, info: &LogInfo, time: DateTime<Local>) -> String {
        let name = info
            .meta
            .get(LOGGER_NAME_KEY)
            .and_then(|name| name.as_str())
            .unwrap_or_default();

        let mut asctime = String::new();
        if write!(asctime, "{}", time.format(&self.date_format)).is_err() {
            asctime = time.format(DEFAULT_DATE_FORMAT).to_string();
        }

        let mut line = String::with_capacity(name.len() + asctime.len() + info.message.len() + 12);
        line.push_str(name);
        line.push(DELIMITER);
        line.push_str(&asctime);
        line.push(DELIMITER);
        line.push_str(&info.level);
        line.push(DELIMITER);
        line.push_str(&info.message);
        line
    }
}

impl Default for PipeFormat {
    fn default() -> Self {
        PipeFormat {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Format for PipeFormat {
    type Input = LogInfo;

    fn transform(&self, input: Self::Input) -> Option<Self::Input> {
        let line = self.render(&input, Local::now());
        let mut info = input;
        info.message = line;
        Some(info)
    }
}

pub fn pipe() -> PipeFormat {
    PipeFormat::default()
}

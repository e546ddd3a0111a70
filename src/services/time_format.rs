//! Relative-time format strings
//!
//! Client-side timestamp rendering needs the localized format strings the
//! server is configured with; this service hands them over, plain or as
//! camelCase JSON.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Format strings for relative timestamp display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFormats {
    pub today_time: String,
    pub yesterday_time: String,
    pub minutes_ago: String,
    pub one_minute_ago: String,
    pub less_than_minute: String,
}

impl Default for TimeFormats {
    fn default() -> Self {
        Self {
            today_time: "Today {0}".to_string(),
            yesterday_time: "Yesterday {0}".to_string(),
            minutes_ago: "{0} minutes ago".to_string(),
            one_minute_ago: "One minute ago".to_string(),
            less_than_minute: "Less than a minute ago".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct TimeFormatStringService;

impl TimeFormatStringService {
    pub fn get_time_formats(&self) -> TimeFormats {
        TimeFormats::default()
    }

    pub fn get_time_formats_as_json(&self) -> Result<String> {
        let formats = self.get_time_formats();
        Ok(serde_json::to_string(&formats)?)
    }
}

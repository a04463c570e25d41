use chrono::{DateTime, Utc};

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(playkit_engine::export::TIMESTAMP_FORMAT).to_string()
}

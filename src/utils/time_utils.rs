use chrono::{TimeZone, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Parse a trailing-period shorthand like "180d", "6mo", "1y" into days.
/// Returns None for anything the chart endpoint would also reject.
pub fn period_to_days(period: &str) -> Option<u64> {
    let period = period.trim();

    let (number, unit) = match period.find(|c: char| !c.is_ascii_digit()) {
        Some(split) if split > 0 => period.split_at(split),
        _ => return None,
    };
    let number: u64 = number.parse().ok()?;

    match unit {
        "d" => Some(number),
        "mo" => Some(number * 30),
        "y" => Some(number * 365),
        _ => None,
    }
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    epoch_sec_to_utc(epoch_ms / 1000)
}

pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    // Used for display purposes
    if let chrono::LocalResult::Single(datetime) = Utc.timestamp_opt(epoch_sec, 0) {
        datetime.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
    } else {
        // Handle invalid timestamp values
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parsing() {
        assert_eq!(period_to_days("180d"), Some(180));
        assert_eq!(period_to_days("6mo"), Some(180));
        assert_eq!(period_to_days("1y"), Some(365));
        assert_eq!(period_to_days("d"), None);
        assert_eq!(period_to_days("180x"), None);
        assert_eq!(period_to_days(""), None);
    }

    #[test]
    fn test_epoch_formatting() {
        // 2024-01-15 00:00:00 UTC
        assert_eq!(epoch_sec_to_utc(1_705_276_800), "2024-01-15");
        assert_eq!(epoch_ms_to_utc(1_705_276_800_000), "2024-01-15");
    }
}

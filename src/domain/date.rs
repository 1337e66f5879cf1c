//! Order date normalization
//!
//! Sample orders carry free-text dates that mix relative phrases
//! ("Just now", "Yesterday") with calendar dates ("Feb 2, 2023"). Both are
//! normalized once when an order is built so sorting never has to guess.
//!
//! Ordering (ascending): unparsed text, then calendar dates oldest first,
//! then relative phrases oldest first ("Yesterday" before "Just now").
//! Relative phrases are assumed to be more recent than any calendar date.

use std::cmp::Ordering;

use chrono::NaiveDate;

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    /// Minutes before "now"
    Relative(u32),
    Calendar(NaiveDate),
    Unparsed,
}

impl DateValue {
    fn rank(&self) -> u8 {
        match self {
            DateValue::Unparsed => 0,
            DateValue::Calendar(_) => 1,
            DateValue::Relative(_) => 2,
        }
    }
}

impl Ord for DateValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DateValue::Calendar(a), DateValue::Calendar(b)) => a.cmp(b),
            // more minutes ago means older
            (DateValue::Relative(a), DateValue::Relative(b)) => b.cmp(a),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for DateValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A display date plus its normalized value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDate {
    raw: String,
    value: DateValue,
}

impl OrderDate {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = normalize(&raw);
        Self { raw, value }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> DateValue {
        self.value
    }

    pub fn is_parsed(&self) -> bool {
        self.value != DateValue::Unparsed
    }
}

impl Ord for OrderDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Equal only when the text matches too, in step with Eq
        self.value
            .cmp(&other.value)
            .then_with(|| self.raw.to_lowercase().cmp(&other.raw.to_lowercase()))
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for OrderDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn normalize(raw: &str) -> DateValue {
    let text = raw.trim();
    if let Some(minutes) = parse_relative(&text.to_lowercase()) {
        return DateValue::Relative(minutes);
    }
    parse_calendar(text)
        .map(DateValue::Calendar)
        .unwrap_or(DateValue::Unparsed)
}

fn parse_relative(text: &str) -> Option<u32> {
    match text {
        "just now" | "now" => return Some(0),
        "a minute ago" => return Some(1),
        "an hour ago" => return Some(MINUTES_PER_HOUR),
        "yesterday" => return Some(MINUTES_PER_DAY),
        _ => {}
    }

    let rest = text.strip_suffix(" ago")?;
    let (count, unit) = rest.split_once(' ')?;
    let count: u32 = count.parse().ok()?;
    let per_unit = match unit.trim_end_matches('s') {
        "minute" | "min" => 1,
        "hour" => MINUTES_PER_HOUR,
        "day" => MINUTES_PER_DAY,
        "week" => 7 * MINUTES_PER_DAY,
        _ => return None,
    };
    count.checked_mul(per_unit)
}

fn parse_calendar(text: &str) -> Option<NaiveDate> {
    ["%b %d, %Y", "%B %d, %Y", "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative_phrases() {
        assert_eq!(OrderDate::parse("Just now").value(), DateValue::Relative(0));
        assert_eq!(OrderDate::parse("A minute ago").value(), DateValue::Relative(1));
        assert_eq!(OrderDate::parse("1 hour ago").value(), DateValue::Relative(60));
        assert_eq!(OrderDate::parse("3 hours ago").value(), DateValue::Relative(180));
        assert_eq!(OrderDate::parse("Yesterday").value(), DateValue::Relative(1440));
    }

    #[test]
    fn test_parse_calendar_dates() {
        let expected = NaiveDate::from_ymd_opt(2023, 2, 2).unwrap();
        assert_eq!(
            OrderDate::parse("Feb 2, 2023").value(),
            DateValue::Calendar(expected)
        );
        assert_eq!(
            OrderDate::parse("2023-02-02").value(),
            DateValue::Calendar(expected)
        );
        assert_eq!(
            OrderDate::parse("Feb 12, 2023").value(),
            DateValue::Calendar(NaiveDate::from_ymd_opt(2023, 2, 12).unwrap())
        );
    }

    #[test]
    fn test_unparsed_keeps_raw_text() {
        let date = OrderDate::parse("sometime soon");
        assert_eq!(date.value(), DateValue::Unparsed);
        assert_eq!(date.raw(), "sometime soon");
        assert!(!date.is_parsed());
    }

    #[test]
    fn test_total_order() {
        let unparsed = OrderDate::parse("???");
        let old = OrderDate::parse("Feb 2, 2023");
        let newer = OrderDate::parse("Feb 12, 2023");
        let yesterday = OrderDate::parse("Yesterday");
        let now = OrderDate::parse("Just now");

        let mut dates = vec![
            now.clone(),
            newer.clone(),
            unparsed.clone(),
            yesterday.clone(),
            old.clone(),
        ];
        dates.sort();
        assert_eq!(dates, vec![unparsed, old, newer, yesterday, now]);
    }

    #[test]
    fn test_same_day_different_text_is_not_equal() {
        let spelled = OrderDate::parse("Feb 2, 2023");
        let iso = OrderDate::parse("2023-02-02");
        assert_eq!(spelled.value(), iso.value());
        assert_ne!(spelled, iso);
        assert_ne!(spelled.cmp(&iso), Ordering::Equal);
        assert_eq!(spelled.cmp(&spelled.clone()), Ordering::Equal);

        let lower = OrderDate::parse("just now");
        let upper = OrderDate::parse("Just now");
        assert_eq!(lower.cmp(&upper) == Ordering::Equal, lower == upper);
    }
}

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Asia::Seoul;

use super::Emotion;

/// The calendar date an instant falls on in the product's display
/// timezone (Asia/Seoul).
pub fn display_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Seoul).date_naive()
}

/// Mapping from Seoul calendar date to the glyphs contributed by ended
/// chatrooms, one glyph per chatroom, in aggregation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmotionCalendar {
    days: BTreeMap<NaiveDate, Vec<&'static str>>,
}

impl EmotionCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the emotion's glyph under the Seoul date of `instant`.
    pub fn add(&mut self, instant: DateTime<Utc>, emotion: Emotion) -> NaiveDate {
        let date = display_date(instant);
        self.days.entry(date).or_default().push(emotion.glyph());
        date
    }

    pub fn glyphs_on(&self, date: NaiveDate) -> &[&'static str] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[&'static str])> {
        self.days.iter().map(|(date, glyphs)| (*date, glyphs.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }
}

use chrono::{DateTime, Duration, Utc};

use crate::errors::{GenerateError, GenerateResult};
use crate::random::Random;

const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const WEEKDAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Instants relative to a reference time, `Utc::now()` unless set with
/// [`DateModule::at`]. Only a fixed reference replays under a seed.
pub struct DateModule<'a> {
    random: &'a mut Random,
    reference: DateTime<Utc>,
}

impl<'a> DateModule<'a> {
    pub fn new(random: &'a mut Random) -> Self {
        Self {
            random,
            reference: Utc::now(),
        }
    }

    pub fn at(mut self, reference: DateTime<Utc>) -> Self {
        self.reference = reference;
        self
    }

    /// Uniform instant in `[from, to]` at millisecond resolution.
    pub fn between(
        &mut self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> GenerateResult<DateTime<Utc>> {
        let millis = self
            .random
            .int(from.timestamp_millis(), to.timestamp_millis())?;
        DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            GenerateError::InvalidRange {
                min: from.to_rfc3339(),
                max: to.to_rfc3339(),
            }
        })
    }

    /// Within `years` 365-day years before the reference.
    pub fn past(&mut self, years: u32) -> GenerateResult<DateTime<Utc>> {
        let from = self.reference - Duration::days(365 * i64::from(years));
        self.between(from, self.reference)
    }

    pub fn future(&mut self, years: u32) -> GenerateResult<DateTime<Utc>> {
        let to = self.reference + Duration::days(365 * i64::from(years));
        self.between(self.reference, to)
    }

    /// Within `days` before the reference.
    pub fn recent(&mut self, days: u32) -> GenerateResult<DateTime<Utc>> {
        let from = self.reference - Duration::days(i64::from(days));
        self.between(from, self.reference)
    }

    pub fn soon(&mut self, days: u32) -> GenerateResult<DateTime<Utc>> {
        let to = self.reference + Duration::days(i64::from(days));
        self.between(self.reference, to)
    }

    /// Between the Unix epoch and the reference.
    pub fn date_time(&mut self) -> GenerateResult<DateTime<Utc>> {
        self.between(DateTime::<Utc>::UNIX_EPOCH, self.reference)
    }

    pub fn month(&mut self) -> GenerateResult<String> {
        self.random.pick(MONTHS).map(|month| month.to_string())
    }

    pub fn weekday(&mut self) -> GenerateResult<String> {
        self.random.pick(WEEKDAYS).map(|day| day.to_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn relative_dates_stay_on_their_side() {
        let mut random = Random::seeded(33);
        let mut date = DateModule::new(&mut random).at(reference());
        for _ in 0..50 {
            let past = date.past(1).unwrap();
            assert!(past <= reference());
            assert!(past >= reference() - Duration::days(365));
            let soon = date.soon(2).unwrap();
            assert!(soon >= reference());
            assert!(soon <= reference() + Duration::days(2));
        }
    }

    #[test]
    fn fixed_reference_replays_under_a_seed() {
        let mut first = Random::seeded(5);
        let mut second = Random::seeded(5);
        let a = DateModule::new(&mut first).at(reference()).future(3).unwrap();
        let b = DateModule::new(&mut second).at(reference()).future(3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let mut random = Random::seeded(1);
        let err = DateModule::new(&mut random)
            .between(reference(), reference() - Duration::days(1))
            .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidRange { .. }));
    }

    #[test]
    fn names_come_from_english_calendars() {
        let mut random = Random::seeded(11);
        let mut date = DateModule::new(&mut random);
        assert!(MONTHS.contains(&date.month().unwrap().as_str()));
        assert!(WEEKDAYS.contains(&date.weekday().unwrap().as_str()));
    }
}

//! Birthdate sampling under an age-bucket distribution.

use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};
use time::{Date, OffsetDateTime};

use crate::config::AgeBucket;
use crate::error::PoolError;

/// Draws birthdates whose age on `today` falls in a weighted bucket.
///
/// A bucket is picked by weight, then a birth year uniformly among the
/// years that can yield an age inside the bucket, then a day uniformly
/// within the part of that year that keeps the age inside the bucket.
#[derive(Debug, Clone)]
pub struct BirthdatePolicy {
    today: Date,
    /// Earliest and latest valid birthdate per bucket.
    ranges: Vec<(Date, Date)>,
    index: WeightedIndex<f64>,
}

impl BirthdatePolicy {
    pub fn new(buckets: &[AgeBucket], today: Date) -> Result<Self, PoolError> {
        let index = WeightedIndex::new(buckets.iter().map(|b| b.weight))
            .map_err(|e| PoolError::Config(format!("age bucket weights: {e}")))?;

        let ranges = buckets
            .iter()
            .map(|bucket| {
                let latest = years_before(today, bucket.min_age)?;
                let before = years_before(today, bucket.max_age + 1)?;
                let earliest = Date::from_julian_day(before.to_julian_day() + 1)?;
                Ok((earliest, latest))
            })
            .collect::<Result<Vec<_>, PoolError>>()?;

        Ok(Self {
            today,
            ranges,
            index,
        })
    }

    /// Policy measured against the current UTC date.
    pub fn today_utc(buckets: &[AgeBucket]) -> Result<Self, PoolError> {
        Self::new(buckets, OffsetDateTime::now_utc().date())
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Result<Date, PoolError> {
        let (earliest, latest) = self.ranges[self.index.sample(rng)];

        let year = rng.gen_range(earliest.year()..=latest.year());
        let first = Date::from_ordinal_date(year, 1)?.max(earliest);
        let last = Date::from_ordinal_date(year, time::util::days_in_year(year))?.min(latest);

        let day = rng.gen_range(first.to_julian_day()..=last.to_julian_day());
        Ok(Date::from_julian_day(day)?)
    }
}

/// Completed years between `birthdate` and `today`.
pub fn age_on(birthdate: Date, today: Date) -> i32 {
    let birthday_passed =
        (u8::from(today.month()), today.day()) >= (u8::from(birthdate.month()), birthdate.day());
    today.year() - birthdate.year() - if birthday_passed { 0 } else { 1 }
}

/// Same calendar day `years` earlier; Feb 29 maps to Feb 28 in common years.
fn years_before(date: Date, years: i32) -> Result<Date, PoolError> {
    let year = date.year() - years;
    let day = date.day().min(date.month().length(year));
    Ok(Date::from_calendar_date(year, date.month(), day)?)
}

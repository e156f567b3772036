//! Insertable pool rows and their uniqueness keys.

use std::hash::Hash;

use sqlx::Row;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use time::Date;

use crate::error::PoolError;
use crate::models::{
    Category, CityRecord, Gender, Locale, NameRecord, PoolKind, PoolRecord, SecurityAnswerRecord,
    format_birthdate, parse_birthdate,
};

pub(crate) type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A row that can be synthesized and inserted into one pool.
pub trait PoolEntry: Clone + Send + Sync + 'static {
    /// Identity of the row. Two entries with equal keys never coexist in a pool.
    type Key: Eq + Hash + Clone + Send + Sync;

    const KIND: PoolKind;

    /// Content columns, in bind order.
    const COLUMNS: &'static [&'static str];

    fn key(&self) -> Self::Key;

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> Result<SqliteQuery<'q>, PoolError>;

    fn from_row(row: &SqliteRow) -> Result<Self, PoolError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewName {
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Date,
    pub locale: Locale,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCity {
    pub city_name: String,
    pub country: String,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSecurityAnswer {
    pub category: Category,
    pub answer_text: String,
}

impl PoolEntry for NewName {
    type Key = (String, String, Date, Locale);

    const KIND: PoolKind = PoolKind::Names;
    const COLUMNS: &'static [&'static str] =
        &["first_name", "last_name", "birthdate", "locale", "gender"];

    fn key(&self) -> Self::Key {
        (
            self.first_name.clone(),
            self.last_name.clone(),
            self.birthdate,
            self.locale,
        )
    }

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> Result<SqliteQuery<'q>, PoolError> {
        Ok(query
            .bind(self.first_name.as_str())
            .bind(self.last_name.as_str())
            .bind(format_birthdate(self.birthdate)?)
            .bind(self.locale.as_str())
            .bind(self.gender.map(|g| g.as_str())))
    }

    fn from_row(row: &SqliteRow) -> Result<Self, PoolError> {
        Ok(Self {
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            birthdate: parse_birthdate(row.try_get("birthdate")?)?,
            locale: decode_locale(row.try_get("locale")?)?,
            gender: decode_gender(row.try_get("gender")?)?,
        })
    }
}

impl PoolEntry for NewCity {
    type Key = (String, Locale);

    const KIND: PoolKind = PoolKind::Cities;
    const COLUMNS: &'static [&'static str] = &["city_name", "country", "locale"];

    fn key(&self) -> Self::Key {
        (self.city_name.clone(), self.locale)
    }

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> Result<SqliteQuery<'q>, PoolError> {
        Ok(query
            .bind(self.city_name.as_str())
            .bind(self.country.as_str())
            .bind(self.locale.as_str()))
    }

    fn from_row(row: &SqliteRow) -> Result<Self, PoolError> {
        Ok(Self {
            city_name: row.try_get("city_name")?,
            country: row.try_get("country")?,
            locale: decode_locale(row.try_get("locale")?)?,
        })
    }
}

impl PoolEntry for NewSecurityAnswer {
    type Key = (Category, String);

    const KIND: PoolKind = PoolKind::SecurityAnswers;
    const COLUMNS: &'static [&'static str] = &["category", "answer_text"];

    fn key(&self) -> Self::Key {
        (self.category, self.answer_text.clone())
    }

    fn bind<'q>(&'q self, query: SqliteQuery<'q>) -> Result<SqliteQuery<'q>, PoolError> {
        Ok(query
            .bind(self.category.as_str())
            .bind(self.answer_text.as_str()))
    }

    fn from_row(row: &SqliteRow) -> Result<Self, PoolError> {
        Ok(Self {
            category: row.try_get::<&str, _>("category")?.parse()?,
            answer_text: row.try_get("answer_text")?,
        })
    }
}

fn decode_locale(tag: &str) -> Result<Locale, PoolError> {
    tag.parse()
        .map_err(|_| PoolError::CorruptRow(format!("unknown locale tag {tag:?}")))
}

fn decode_gender(tag: Option<&str>) -> Result<Option<Gender>, PoolError> {
    tag.map(str::parse).transpose()
}

/// Columns selected when a full record is read back.
pub(crate) fn record_columns(kind: PoolKind) -> &'static str {
    match kind {
        PoolKind::Names => "id, first_name, last_name, birthdate, locale, gender, used",
        PoolKind::Cities => "id, city_name, country, locale, used",
        PoolKind::SecurityAnswers => "id, category, answer_text, used",
    }
}

pub(crate) fn decode_record(kind: PoolKind, row: &SqliteRow) -> Result<PoolRecord, PoolError> {
    let id: i64 = row.try_get("id")?;
    let used: bool = row.try_get("used")?;

    let record = match kind {
        PoolKind::Names => {
            let entry = NewName::from_row(row)?;
            PoolRecord::Name(NameRecord {
                id,
                first_name: entry.first_name,
                last_name: entry.last_name,
                birthdate: entry.birthdate,
                locale: entry.locale,
                gender: entry.gender,
                used,
            })
        }
        PoolKind::Cities => {
            let entry = NewCity::from_row(row)?;
            PoolRecord::City(CityRecord {
                id,
                city_name: entry.city_name,
                country: entry.country,
                locale: entry.locale,
                used,
            })
        }
        PoolKind::SecurityAnswers => {
            let entry = NewSecurityAnswer::from_row(row)?;
            PoolRecord::SecurityAnswer(SecurityAnswerRecord {
                id,
                category: entry.category,
                answer_text: entry.answer_text,
                used,
            })
        }
    };
    Ok(record)
}

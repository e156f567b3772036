//! Pool record types and the enumerations stored alongside them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::{PoolError, VocabularyError};

/// Birthdates are persisted as fixed-width `MM.DD.YYYY` text.
pub const BIRTHDATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month].[day].[year]");

pub fn format_birthdate(date: Date) -> Result<String, PoolError> {
    date.format(BIRTHDATE_FORMAT)
        .map_err(|e| PoolError::CorruptRow(format!("unformattable birthdate {date}: {e}")))
}

pub fn parse_birthdate(text: &str) -> Result<Date, PoolError> {
    Date::parse(text, BIRTHDATE_FORMAT)
        .map_err(|e| PoolError::CorruptRow(format!("invalid birthdate {text:?}: {e}")))
}

/// The fixed set of supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "en_GB")]
    EnGb,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "it_IT")]
    ItIt,
    #[serde(rename = "pl_PL")]
    PlPl,
    #[serde(rename = "uk_UA")]
    UkUa,
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "cs_CZ")]
    CsCz,
    #[serde(rename = "sv_SE")]
    SvSe,
    #[serde(rename = "no_NO")]
    NoNo,
    #[serde(rename = "da_DK")]
    DaDk,
    #[serde(rename = "fi_FI")]
    FiFi,
}

impl Locale {
    pub const ALL: [Locale; 14] = [
        Locale::EnUs,
        Locale::EnGb,
        Locale::DeDe,
        Locale::FrFr,
        Locale::EsEs,
        Locale::ItIt,
        Locale::PlPl,
        Locale::UkUa,
        Locale::RuRu,
        Locale::CsCz,
        Locale::SvSe,
        Locale::NoNo,
        Locale::DaDk,
        Locale::FiFi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::EnGb => "en_GB",
            Locale::DeDe => "de_DE",
            Locale::FrFr => "fr_FR",
            Locale::EsEs => "es_ES",
            Locale::ItIt => "it_IT",
            Locale::PlPl => "pl_PL",
            Locale::UkUa => "uk_UA",
            Locale::RuRu => "ru_RU",
            Locale::CsCz => "cs_CZ",
            Locale::SvSe => "sv_SE",
            Locale::NoNo => "no_NO",
            Locale::DaDk => "da_DK",
            Locale::FiFi => "fi_FI",
        }
    }

    /// Country name recorded on city rows.
    pub fn country(&self) -> &'static str {
        match self {
            Locale::EnUs => "United States",
            Locale::EnGb => "United Kingdom",
            Locale::DeDe => "Germany",
            Locale::FrFr => "France",
            Locale::EsEs => "Spain",
            Locale::ItIt => "Italy",
            Locale::PlPl => "Poland",
            Locale::UkUa => "Ukraine",
            Locale::RuRu => "Russia",
            Locale::CsCz => "Czech Republic",
            Locale::SvSe => "Sweden",
            Locale::NoNo => "Norway",
            Locale::DaDk => "Denmark",
            Locale::FiFi => "Finland",
        }
    }

    /// Share of synthesized records drawn from this locale when no
    /// weights are configured. English and Western European names dominate.
    pub fn default_weight(&self) -> f64 {
        match self {
            Locale::EnUs => 0.25,
            Locale::EnGb => 0.15,
            Locale::DeDe => 0.12,
            Locale::FrFr => 0.10,
            Locale::EsEs => 0.08,
            Locale::ItIt => 0.06,
            Locale::PlPl => 0.05,
            Locale::UkUa => 0.05,
            Locale::RuRu => 0.04,
            Locale::CsCz => 0.03,
            Locale::SvSe => 0.02,
            Locale::NoNo => 0.02,
            Locale::DaDk => 0.02,
            Locale::FiFi => 0.01,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| VocabularyError::UnknownLocale(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Form-of-address used by registration forms.
    pub fn salutation(&self) -> &'static str {
        match self {
            Gender::Male => "Mr",
            Gender::Female => "Ms",
        }
    }
}

impl FromStr for Gender {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" | "Mr" => Ok(Gender::Male),
            "female" | "Ms" => Ok(Gender::Female),
            other => Err(PoolError::CorruptRow(format!("unknown gender tag {other:?}"))),
        }
    }
}

/// Security question categories with a dedicated answer vocabulary each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MotherMaidenName,
    FirstPet,
    BirthCity,
    ChildhoodFriend,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::MotherMaidenName,
        Category::FirstPet,
        Category::BirthCity,
        Category::ChildhoodFriend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MotherMaidenName => "mother_maiden_name",
            Category::FirstPet => "first_pet",
            Category::BirthCity => "birth_city",
            Category::ChildhoodFriend => "childhood_friend",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| PoolError::CorruptRow(format!("unknown category {s:?}")))
    }
}

/// One of the three independently managed pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Names,
    Cities,
    SecurityAnswers,
}

impl PoolKind {
    pub const ALL: [PoolKind; 3] = [PoolKind::Names, PoolKind::Cities, PoolKind::SecurityAnswers];

    pub fn as_str(&self) -> &'static str {
        match self {
            PoolKind::Names => "names",
            PoolKind::Cities => "cities",
            PoolKind::SecurityAnswers => "security_answers",
        }
    }

    pub(crate) fn table(&self) -> &'static str {
        match self {
            PoolKind::Names => "names_pool",
            PoolKind::Cities => "cities_pool",
            PoolKind::SecurityAnswers => "security_answers_pool",
        }
    }

    /// Column a draw filter and breakdown statistics group on.
    pub(crate) fn filter_column(&self) -> &'static str {
        match self {
            PoolKind::Names | PoolKind::Cities => "locale",
            PoolKind::SecurityAnswers => "category",
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoolKind {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "names" | "name" => Ok(PoolKind::Names),
            "cities" | "city" => Ok(PoolKind::Cities),
            "security_answers" | "security" | "answers" => Ok(PoolKind::SecurityAnswers),
            other => Err(PoolError::Config(format!("unknown pool kind {other:?}"))),
        }
    }
}

/// Narrows a draw to rows of one locale or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawFilter {
    Locale(Locale),
    Category(Category),
}

impl DrawFilter {
    pub(crate) fn value(&self) -> &'static str {
        match self {
            DrawFilter::Locale(locale) => locale.as_str(),
            DrawFilter::Category(category) => category.as_str(),
        }
    }

    pub(crate) fn applies_to(&self, kind: PoolKind) -> bool {
        matches!(
            (self, kind),
            (DrawFilter::Locale(_), PoolKind::Names | PoolKind::Cities)
                | (DrawFilter::Category(_), PoolKind::SecurityAnswers)
        )
    }
}

impl fmt::Display for DrawFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawFilter::Locale(locale) => write!(f, "locale={locale}"),
            DrawFilter::Category(category) => write!(f, "category={category}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Date,
    pub locale: Locale,
    pub gender: Option<Gender>,
    pub used: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityRecord {
    pub id: i64,
    pub city_name: String,
    pub country: String,
    pub locale: Locale,
    pub used: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityAnswerRecord {
    pub id: i64,
    pub category: Category,
    pub answer_text: String,
    pub used: bool,
}

/// A row drawn from any pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoolRecord {
    Name(NameRecord),
    City(CityRecord),
    SecurityAnswer(SecurityAnswerRecord),
}

impl PoolRecord {
    pub fn id(&self) -> i64 {
        match self {
            PoolRecord::Name(r) => r.id,
            PoolRecord::City(r) => r.id,
            PoolRecord::SecurityAnswer(r) => r.id,
        }
    }

    pub fn kind(&self) -> PoolKind {
        match self {
            PoolRecord::Name(_) => PoolKind::Names,
            PoolRecord::City(_) => PoolKind::Cities,
            PoolRecord::SecurityAnswer(_) => PoolKind::SecurityAnswers,
        }
    }

    pub fn used(&self) -> bool {
        match self {
            PoolRecord::Name(r) => r.used,
            PoolRecord::City(r) => r.used,
            PoolRecord::SecurityAnswer(r) => r.used,
        }
    }
}

impl fmt::Display for PoolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolRecord::Name(r) => {
                let salutation = r.gender.map(|g| g.salutation()).unwrap_or("-");
                write!(
                    f,
                    "#{} {} {} | {} | {} | {}",
                    r.id,
                    r.first_name,
                    r.last_name,
                    format_birthdate(r.birthdate).unwrap_or_else(|_| r.birthdate.to_string()),
                    salutation,
                    r.locale
                )
            }
            PoolRecord::City(r) => {
                write!(f, "#{} {} ({}, {})", r.id, r.city_name, r.country, r.locale)
            }
            PoolRecord::SecurityAnswer(r) => {
                write!(f, "#{} [{}] {}", r.id, r.category, r.answer_text)
            }
        }
    }
}

/// Usage counters for one pool. `available` is always `total - used`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolCount {
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

impl PoolCount {
    pub fn new(total: u64, used: u64) -> Self {
        Self {
            total,
            used,
            available: total.saturating_sub(used),
        }
    }
}

/// Counters for all three pools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    pub names: PoolCount,
    pub cities: PoolCount,
    pub security_answers: PoolCount,
}

impl PoolStats {
    pub fn get(&self, kind: PoolKind) -> PoolCount {
        match kind {
            PoolKind::Names => self.names,
            PoolKind::Cities => self.cities,
            PoolKind::SecurityAnswers => self.security_answers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn test_birthdate_is_fixed_width() {
        let date = Date::from_calendar_date(1990, Month::March, 7).unwrap();
        assert_eq!(format_birthdate(date).unwrap(), "03.07.1990");
        assert_eq!(parse_birthdate("03.07.1990").unwrap(), date);
    }

    #[test]
    fn test_leap_day_birthdate() {
        let date = Date::from_calendar_date(2004, Month::February, 29).unwrap();
        assert_eq!(format_birthdate(date).unwrap(), "02.29.2004");
        assert!(parse_birthdate("02.29.2003").is_err());
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("de_DE".parse::<Locale>().unwrap(), Locale::DeDe);
        assert_eq!(
            "xx_XX".parse::<Locale>(),
            Err(VocabularyError::UnknownLocale("xx_XX".to_string()))
        );
        for locale in Locale::ALL {
            assert_eq!(locale.as_str().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let sum: f64 = Locale::ALL.iter().map(Locale::default_weight).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_filter_applicability() {
        let locale = DrawFilter::Locale(Locale::FrFr);
        let category = DrawFilter::Category(Category::FirstPet);
        assert!(locale.applies_to(PoolKind::Names));
        assert!(locale.applies_to(PoolKind::Cities));
        assert!(!locale.applies_to(PoolKind::SecurityAnswers));
        assert!(category.applies_to(PoolKind::SecurityAnswers));
        assert!(!category.applies_to(PoolKind::Names));
    }
}

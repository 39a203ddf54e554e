use crate::domain::error::AstroError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve Western tropical signs plus a defensive `Unknown`.
///
/// `Unknown` is unreachable for well-formed dates (the ranges below are
/// total over the calendar) but kept so the resolver never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
    Unknown,
}

impl ZodiacSign {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Inclusive (month, day) ranges. Capricorn is split across the year
// boundary, so it appears twice.
const ZODIAC_DATES: [(ZodiacSign, (u32, u32), (u32, u32)); 13] = [
    (ZodiacSign::Capricorn, (1, 1), (1, 19)),
    (ZodiacSign::Aquarius, (1, 20), (2, 18)),
    (ZodiacSign::Pisces, (2, 19), (3, 20)),
    (ZodiacSign::Aries, (3, 21), (4, 19)),
    (ZodiacSign::Taurus, (4, 20), (5, 20)),
    (ZodiacSign::Gemini, (5, 21), (6, 20)),
    (ZodiacSign::Cancer, (6, 21), (7, 22)),
    (ZodiacSign::Leo, (7, 23), (8, 22)),
    (ZodiacSign::Virgo, (8, 23), (9, 22)),
    (ZodiacSign::Libra, (9, 23), (10, 22)),
    (ZodiacSign::Scorpio, (10, 23), (11, 21)),
    (ZodiacSign::Sagittarius, (11, 22), (12, 21)),
    (ZodiacSign::Capricorn, (12, 22), (12, 31)),
];

fn in_range(month: u32, day: u32, start: (u32, u32), end: (u32, u32)) -> bool {
    let (start_month, start_day) = start;
    let (end_month, end_day) = end;
    if start_month == end_month {
        month == start_month && day >= start_day && day <= end_day
    } else {
        (month == start_month && day >= start_day) || (month == end_month && day <= end_day)
    }
}

/// Determine the zodiac sign for a birth date.
pub fn resolve(date: NaiveDate) -> ZodiacSign {
    let (month, day) = (date.month(), date.day());
    for (sign, start, end) in ZODIAC_DATES {
        if in_range(month, day, start, end) {
            return sign;
        }
    }
    ZodiacSign::Unknown
}

/// Parse a `YYYY-MM-DD` birth date string.
pub fn parse_birth_date(date_str: &str) -> Result<NaiveDate, AstroError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AstroError::InvalidDate(date_str.to_string()))
}

/// Determine the zodiac sign from a `YYYY-MM-DD` birth date string.
///
/// # Example
///
/// ```
/// use astro_insight::domain::zodiac::{resolve_str, ZodiacSign};
///
/// assert_eq!(resolve_str("1995-08-20").unwrap(), ZodiacSign::Leo);
/// ```
pub fn resolve_str(date_str: &str) -> Result<ZodiacSign, AstroError> {
    Ok(resolve(parse_birth_date(date_str)?))
}

//! `date()`-style formatting with translated day and month names.
//!
//! A format string is split into translatable characters (`D l S F M a A`)
//! and literal runs. Literal runs are rendered directly, honouring backslash
//! escapes; translatable characters are rendered in English and then looked up
//! in the translator's table. Tokenised formats are cached for the life of the
//! process.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};
use once_cell::sync::Lazy;

use crate::error::ConfigurationError;
use crate::translator::Translator;

const TRANSLATABLE: &[char] = &['D', 'l', 'S', 'F', 'M', 'a', 'A'];

#[derive(Clone, Debug, PartialEq, Eq)]
enum FormatToken {
    Translatable(char),
    Literal(String),
}

static FORMAT_CACHE: Lazy<RwLock<HashMap<String, Arc<[FormatToken]>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn tokenize(format: &str) -> Vec<FormatToken> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut characters = format.chars();
    while let Some(character) = characters.next() {
        if TRANSLATABLE.contains(&character) {
            if !run.is_empty() {
                tokens.push(FormatToken::Literal(std::mem::take(&mut run)));
            }
            tokens.push(FormatToken::Translatable(character));
            continue;
        }
        run.push(character);
        if character == '\\' {
            if let Some(escaped) = characters.next() {
                run.push(escaped);
            }
        }
    }
    if !run.is_empty() {
        tokens.push(FormatToken::Literal(run));
    }
    tokens
}

fn cached_tokens(format: &str) -> Arc<[FormatToken]> {
    if let Some(tokens) = FORMAT_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(format)
    {
        return Arc::clone(tokens);
    }

    let tokens: Arc<[FormatToken]> = tokenize(format).into();
    let mut cache = FORMAT_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(cache.entry(format.to_owned()).or_insert(tokens))
}

pub(crate) fn translate_date<Tz>(
    translator: &Translator,
    format: &str,
    datetime: &DateTime<Tz>,
) -> Result<String, ConfigurationError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut output = String::with_capacity(format.len() * 2);
    for token in cached_tokens(format).iter() {
        match token {
            FormatToken::Translatable(character) => {
                let part = Rendered::field(*character, datetime).to_string();
                output.push_str(translator.translate(&part, &[])?.as_str());
            }
            FormatToken::Literal(run) => output.push_str(&Rendered::run(run, datetime).to_string()),
        }
    }
    Ok(output)
}

/// Render `datetime` with a `date()`-style `format`, without translation.
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use parlance::date::format_date;
///
/// let offset = FixedOffset::east_opt(3600).unwrap();
/// let date = offset.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).single().unwrap();
/// assert_eq!(format_date("D, jS F Y \\a\\t H:i", &date), "Fri, 1st March 2024 at 09:05");
/// ```
#[must_use]
pub fn format_date<Tz>(format: &str, datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    Rendered::run(format, datetime).to_string()
}

enum Pattern<'a> {
    Run(&'a str),
    Field(char),
}

/// A format run or single field bound to the datetime it describes.
struct Rendered<'a, Tz: TimeZone> {
    pattern: Pattern<'a>,
    datetime: &'a DateTime<Tz>,
}

impl<'a, Tz: TimeZone> Rendered<'a, Tz> {
    const fn run(run: &'a str, datetime: &'a DateTime<Tz>) -> Self {
        Self {
            pattern: Pattern::Run(run),
            datetime,
        }
    }

    const fn field(field: char, datetime: &'a DateTime<Tz>) -> Self {
        Self {
            pattern: Pattern::Field(field),
            datetime,
        }
    }
}

impl<Tz> fmt::Display for Rendered<'_, Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pattern {
            Pattern::Run(run) => write_run(formatter, run, self.datetime),
            Pattern::Field(field) => write_field(formatter, field, self.datetime),
        }
    }
}

fn write_run<W, Tz>(output: &mut W, run: &str, datetime: &DateTime<Tz>) -> fmt::Result
where
    W: fmt::Write,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut characters = run.chars();
    while let Some(character) = characters.next() {
        if character == '\\' {
            output.write_char(characters.next().unwrap_or('\\'))?;
        } else {
            write_field(output, character, datetime)?;
        }
    }
    Ok(())
}

fn write_field<W, Tz>(output: &mut W, field: char, datetime: &DateTime<Tz>) -> fmt::Result
where
    W: fmt::Write,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let offset = datetime.offset().fix().local_minus_utc();
    match field {
        'd' => write!(output, "{:02}", datetime.day()),
        'D' => write!(output, "{}", datetime.format("%a")),
        'j' => write!(output, "{}", datetime.day()),
        'l' => write!(output, "{}", datetime.format("%A")),
        'N' => write!(output, "{}", datetime.weekday().number_from_monday()),
        'S' => output.write_str(ordinal_suffix(datetime.day())),
        'w' => write!(output, "{}", datetime.weekday().num_days_from_sunday()),
        'z' => write!(output, "{}", datetime.ordinal0()),
        'W' => write!(output, "{:02}", datetime.iso_week().week()),
        'F' => write!(output, "{}", datetime.format("%B")),
        'm' => write!(output, "{:02}", datetime.month()),
        'M' => write!(output, "{}", datetime.format("%b")),
        'n' => write!(output, "{}", datetime.month()),
        't' => write!(output, "{}", days_in_month(datetime.year(), datetime.month())),
        'L' => write!(output, "{}", u8::from(is_leap_year(datetime.year()))),
        'o' => write_year(output, datetime.iso_week().year()),
        'Y' => write_year(output, datetime.year()),
        'y' => write!(output, "{:02}", datetime.year().rem_euclid(100)),
        'a' => output.write_str(if datetime.hour12().0 { "pm" } else { "am" }),
        'A' => output.write_str(if datetime.hour12().0 { "PM" } else { "AM" }),
        'B' => write!(output, "{:03}", swatch_beat(datetime.timestamp())),
        'g' => write!(output, "{}", datetime.hour12().1),
        'G' => write!(output, "{}", datetime.hour()),
        'h' => write!(output, "{:02}", datetime.hour12().1),
        'H' => write!(output, "{:02}", datetime.hour()),
        'i' => write!(output, "{:02}", datetime.minute()),
        's' => write!(output, "{:02}", datetime.second()),
        'u' => write!(output, "{:06}", datetime.nanosecond() % 1_000_000_000 / 1_000),
        'v' => write!(output, "{:03}", datetime.nanosecond() % 1_000_000_000 / 1_000_000),
        'e' | 'T' => write!(output, "{}", datetime.offset()),
        'I' => output.write_str("0"),
        'O' => write_offset(output, offset, ""),
        'P' => write_offset(output, offset, ":"),
        'p' if offset == 0 => output.write_str("Z"),
        'p' => write_offset(output, offset, ":"),
        'Z' => write!(output, "{offset}"),
        'c' => write_run(output, "Y-m-d\\TH:i:sP", datetime),
        'r' => write_run(output, "D, d M Y H:i:s O", datetime),
        'U' => write!(output, "{}", datetime.timestamp()),
        other => output.write_char(other),
    }
}

const fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn write_year(output: &mut impl fmt::Write, year: i32) -> fmt::Result {
    if year < 0 {
        write!(output, "-{:04}", year.unsigned_abs())
    } else {
        write!(output, "{year:04}")
    }
}

fn write_offset(output: &mut impl fmt::Write, seconds: i32, separator: &str) -> fmt::Result {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    write!(output, "{sign}{:02}{separator}{:02}", minutes / 60, minutes % 60)
}

/// Swatch Internet Time: thousandths of a day in UTC+1.
fn swatch_beat(timestamp: i64) -> i64 {
    (timestamp + 3600).rem_euclid(86_400) * 10 / 864
}

//! printf-style substitution of parameters into templates.
//!
//! Conversions follow the familiar `sprintf` grammar:
//! `%[argnum$][flags][width][.precision]conversion`. Argument numbers let a
//! translation reorder parameters (`%2$s before %1$s`). Any template that
//! cannot be satisfied by the supplied parameters is reported as an
//! [`InterpolationError`] instead of producing partial output.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

/// Largest width or precision a conversion may request.
pub const MAX_FIELD: usize = u16::MAX as usize;

/// A value ready for substitution.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    /// Text, including pre-rendered numbers and escaped markup.
    Text(String),
    /// An integer.
    Integer(i64),
    /// A float.
    Float(f64),
}

impl Param {
    /// The parameter as an integer; text contributes its leading number.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "integer conversions truncate toward zero and saturate"
    )]
    pub fn as_integer(&self) -> i64 {
        match self {
            Self::Integer(value) => *value,
            Self::Float(value) => value.trunc() as i64,
            Self::Text(text) => leading_number(text).trunc() as i64,
        }
    }

    /// The parameter as a float; text contributes its leading number.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "integers beyond 2^53 are rare in messages"
    )]
    pub fn as_float(&self) -> f64 {
        match self {
            Self::Integer(value) => *value as f64,
            Self::Float(value) => *value,
            Self::Text(text) => leading_number(text),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.write_str(text),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
        }
    }
}

/// Raised when a template cannot be filled from the supplied parameters.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterpolationError {
    /// The template refers to more parameters than were supplied.
    #[error("template needs argument {needed} but only {supplied} were supplied")]
    TooFewArguments {
        /// One-based number of the missing argument.
        needed: usize,
        /// Number of parameters supplied.
        supplied: usize,
    },
    /// An explicit argument number of zero.
    #[error("argument numbers start at 1")]
    ZeroArgumentNumber,
    /// A conversion character the formatter does not know.
    #[error("unknown conversion `%{0}`")]
    UnknownConversion(char),
    /// The template ends in the middle of a conversion.
    #[error("template ends inside a conversion")]
    MissingConversion,
    /// A width, precision, or argument number too large to represent.
    #[error("numeric field in conversion is too large")]
    NumberTooLarge,
}

/// Substitute `params` into `template`.
///
/// ```
/// use parlance::interpolate::{Param, interpolate};
///
/// let params = [Param::Text("Alice".into()), Param::Text("the cat".into())];
/// assert_eq!(
///     interpolate("%2$s is owned by %1$s.", &params).as_deref(),
///     Ok("the cat is owned by Alice.")
/// );
/// ```
pub fn interpolate(template: &str, params: &[Param]) -> Result<String, InterpolationError> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_sequential = 0;

    while let Some(character) = chars.next() {
        if character != '%' {
            output.push(character);
            continue;
        }
        if chars.next_if_eq(&'%').is_some() {
            output.push('%');
            continue;
        }

        let spec = Conversion::parse(&mut chars)?;
        let index = match spec.argnum {
            Some(0) => return Err(InterpolationError::ZeroArgumentNumber),
            Some(number) => number - 1,
            None => {
                next_sequential += 1;
                next_sequential - 1
            }
        };
        let param = params
            .get(index)
            .ok_or(InterpolationError::TooFewArguments {
                needed: index + 1,
                supplied: params.len(),
            })?;
        spec.render_into(&mut output, param)?;
    }

    Ok(output)
}

#[derive(Debug)]
struct Conversion {
    argnum: Option<usize>,
    left_align: bool,
    show_sign: bool,
    padding: char,
    width: usize,
    precision: Option<usize>,
    kind: char,
}

impl Conversion {
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Result<Self, InterpolationError> {
        let mut spec = Self {
            argnum: None,
            left_align: false,
            show_sign: false,
            padding: ' ',
            width: 0,
            precision: None,
            kind: 's',
        };

        let mut lookahead = chars.clone();
        if let Some(number) = take_number(&mut lookahead)? {
            if lookahead.next_if_eq(&'$').is_some() {
                spec.argnum = Some(number);
                *chars = lookahead;
            }
        }

        loop {
            match chars.peek() {
                Some('-') => spec.left_align = true,
                Some('+') => spec.show_sign = true,
                Some('0') => spec.padding = '0',
                Some(' ') => spec.padding = ' ',
                Some('\'') => {
                    chars.next();
                    spec.padding = chars.next().ok_or(InterpolationError::MissingConversion)?;
                    continue;
                }
                _ => break,
            }
            chars.next();
        }

        spec.width = bounded(take_number(chars)?.unwrap_or(0))?;
        if chars.next_if_eq(&'.').is_some() {
            spec.precision = Some(bounded(take_number(chars)?.unwrap_or(0))?);
        }
        chars.next_if_eq(&'l');
        spec.kind = chars.next().ok_or(InterpolationError::MissingConversion)?;
        Ok(spec)
    }

    fn render_into(&self, output: &mut String, param: &Param) -> Result<(), InterpolationError> {
        let body = match self.kind {
            's' => {
                let text = param.to_string();
                match self.precision {
                    Some(limit) => text.chars().take(limit).collect(),
                    None => text,
                }
            }
            'd' => self.signed(param.as_integer().to_string()),
            'u' => u64::from_ne_bytes(param.as_integer().to_ne_bytes()).to_string(),
            'f' | 'F' => {
                let precision = self.precision.unwrap_or(6);
                let value = param.as_float();
                self.signed(format!("{value:.precision$}"))
            }
            'e' | 'E' => {
                let text = scientific(param.as_float(), self.precision.unwrap_or(6));
                self.signed(if self.kind == 'E' { text.to_uppercase() } else { text })
            }
            'g' | 'G' => {
                let text = general(param.as_float(), self.precision.unwrap_or(6));
                self.signed(if self.kind == 'G' { text.to_uppercase() } else { text })
            }
            'x' => format!("{:x}", param.as_integer()),
            'X' => format!("{:X}", param.as_integer()),
            'o' => format!("{:o}", param.as_integer()),
            'b' => format!("{:b}", param.as_integer()),
            'c' => {
                let code = u32::try_from(param.as_integer()).ok();
                if let Some(character) = code.and_then(char::from_u32) {
                    output.push(character);
                }
                return Ok(());
            }
            other => return Err(InterpolationError::UnknownConversion(other)),
        };

        self.pad_into(output, &body);
        Ok(())
    }

    fn signed(&self, digits: String) -> String {
        if self.show_sign && !digits.starts_with('-') {
            format!("+{digits}")
        } else {
            digits
        }
    }

    fn pad_into(&self, output: &mut String, body: &str) {
        let length = body.chars().count();
        let fill = self.width.saturating_sub(length);
        if self.left_align {
            output.push_str(body);
            output.extend(std::iter::repeat_n(self.padding, fill));
            return;
        }

        let numeric = !matches!(self.kind, 's' | 'c');
        let (sign, digits) = match body.chars().next() {
            Some(sign @ ('-' | '+')) if numeric && self.padding == '0' => (Some(sign), &body[1..]),
            _ => (None, body),
        };
        if let Some(sign) = sign {
            output.push(sign);
        }
        output.extend(std::iter::repeat_n(self.padding, fill));
        output.push_str(digits);
    }
}

fn bounded(field: usize) -> Result<usize, InterpolationError> {
    if field > MAX_FIELD {
        return Err(InterpolationError::NumberTooLarge);
    }
    Ok(field)
}

fn take_number(chars: &mut Peekable<Chars<'_>>) -> Result<Option<usize>, InterpolationError> {
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|character| character.to_digit(10)) {
        chars.next();
        let current = number.unwrap_or(0);
        number = Some(
            current
                .checked_mul(10)
                .and_then(|value| value.checked_add(digit as usize))
                .ok_or(InterpolationError::NumberTooLarge)?,
        );
    }
    Ok(number)
}

/// `1.234500e+3` style output with an unpadded, always-signed exponent.
fn scientific(value: f64, precision: usize) -> String {
    let rendered = format!("{value:.precision$e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => format!("{mantissa}e{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}e+{exponent}"),
        None => rendered,
    }
}

/// Shortest of fixed and scientific notation with `precision` significant digits.
fn general(value: f64, precision: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let significant = precision.max(1);
    let rounded = format!("{value:.prec$e}", prec = significant - 1);
    let exponent: i64 = rounded
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0);
    let limit = i64::try_from(significant).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= limit {
        let text = scientific(value, significant - 1);
        match text.split_once('e') {
            Some((mantissa, exponent)) => format!("{}e{exponent}", trim_fraction(mantissa)),
            None => text,
        }
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// The longest numeric prefix of `text`, ignoring leading whitespace; zero if none.
pub(crate) fn leading_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        let mut fraction_end = end + 1;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
        }
        if fraction_end > end + 1 || end > digits_start {
            end = fraction_end;
        }
    }
    if end > digits_start && matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits {
            end = exponent_end;
        }
    }
    trimmed
        .get(..end)
        .and_then(|prefix| prefix.parse().ok())
        .unwrap_or(0.0)
}

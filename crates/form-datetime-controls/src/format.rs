//! Picker format strings and their translation to chrono patterns.
//!
//! Client-side pickers describe dates with tokens such as `dd`, `mm`, `yyyy`,
//! `hh`, `ii` and the meridian markers `p`/`P`. The server parses and formats
//! with chrono's strftime items. [`translate`] maps one dialect onto the other
//! and [`HostPattern`] wraps the result for parsing and formatting.
//!
//! Translation scans the picker format left to right and, at each position,
//! takes the first entry of the token table whose source is a prefix of the
//! remaining input. The tables are ordered so longer tokens win (`dd` before
//! `d`, `yyyy` before `yyy` before `yy`). Characters that start no token are
//! copied as literals.

use std::fmt;

use chrono::format::{self, Item, Parsed, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use form_datetime_core::{FormDateTimeError, FormDateTimeResult};

/// The calendar or clock field a token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Day of month.
    Day,
    /// Month, numeric or by name.
    Month,
    /// Year, two or four digits.
    Year,
    /// Hour of day.
    Hour,
    /// Minute of hour.
    Minute,
    /// Second of minute.
    Second,
    /// `am`/`pm` marker.
    Meridian,
}

impl Component {
    /// Returns `true` for day, month and year.
    pub const fn is_date(self) -> bool {
        matches!(self, Self::Day | Self::Month | Self::Year)
    }
}

/// One entry of a token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDef {
    /// The picker token, e.g. `dd`.
    pub source: &'static str,
    /// The chrono strftime replacement, e.g. `%d`.
    pub host: &'static str,
    /// The field the token carries.
    pub component: Component,
}

const fn token(source: &'static str, host: &'static str, component: Component) -> TokenDef {
    TokenDef {
        source,
        host,
        component,
    }
}

/// Time tokens: `p`, `P`, `hh`, `ii`, `ss`.
pub const TIME_TOKENS: &[TokenDef] = &[
    token("p", "%P", Component::Meridian),
    token("P", "%p", Component::Meridian),
    token("hh", "%H", Component::Hour),
    token("ii", "%M", Component::Minute),
    token("ss", "%S", Component::Second),
];

/// Date tokens: `dd`, `d`, `mm`, `m`, `MM`, `M`, `yyyy`, `yyy`, `yy`.
pub const DATE_TOKENS: &[TokenDef] = &[
    token("dd", "%d", Component::Day),
    token("d", "%-d", Component::Day),
    token("mm", "%m", Component::Month),
    token("m", "%-m", Component::Month),
    token("MM", "%B", Component::Month),
    token("M", "%b", Component::Month),
    token("yyyy", "%Y", Component::Year),
    token("yyy", "%y", Component::Year),
    token("yy", "%y", Component::Year),
];

/// The token vocabulary a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenSet {
    /// Date tokens only.
    Date,
    /// Time tokens only.
    Time,
    /// Time tokens, then date tokens.
    DateTime,
}

impl TokenSet {
    /// Returns the tables to search, in priority order.
    fn tables(self) -> &'static [&'static [TokenDef]] {
        match self {
            Self::Date => &[DATE_TOKENS],
            Self::Time => &[TIME_TOKENS],
            Self::DateTime => &[TIME_TOKENS, DATE_TOKENS],
        }
    }

    fn match_at(self, rest: &str) -> Option<&'static TokenDef> {
        self.tables()
            .iter()
            .flat_map(|table| table.iter())
            .find(|def| rest.starts_with(def.source))
    }
}

/// A piece of a tokenized picker format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A recognized picker token.
    Component(&'static TokenDef),
    /// Any other character, kept as is.
    Literal(char),
}

/// A tokenized picker format string.
///
/// # Examples
///
/// ```
/// use form_datetime_controls::format::{FormatSpec, TokenSet};
///
/// let spec = FormatSpec::new("dd-mm-yyyy", TokenSet::Date);
/// assert_eq!(spec.translate(), "%d-%m-%Y");
/// assert!(spec.has_date());
/// assert!(!spec.has_time());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    source: String,
    tokens: Vec<Token>,
}

impl FormatSpec {
    /// Tokenizes `source` against the given vocabulary.
    pub fn new(source: impl Into<String>, set: TokenSet) -> Self {
        let source = source.into();
        let mut tokens = Vec::new();
        let mut rest = source.as_str();

        while let Some(c) = rest.chars().next() {
            if let Some(def) = set.match_at(rest) {
                tokens.push(Token::Component(def));
                rest = &rest[def.source.len()..];
            } else {
                tokens.push(Token::Literal(c));
                rest = &rest[c.len_utf8()..];
            }
        }

        Self { source, tokens }
    }

    /// The picker format this spec was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns `true` if the format contains a token for `component`.
    pub fn has(&self, component: Component) -> bool {
        self.components().any(|c| c == component)
    }

    /// Returns `true` if the format carries any date token.
    pub fn has_date(&self) -> bool {
        self.components().any(Component::is_date)
    }

    /// Returns `true` if the format carries any time token.
    pub fn has_time(&self) -> bool {
        self.components().any(|c| !c.is_date())
    }

    /// Returns `true` if the format has an `am`/`pm` marker.
    pub fn has_meridian(&self) -> bool {
        self.has(Component::Meridian)
    }

    /// Renders the chrono strftime equivalent.
    pub fn translate(&self) -> String {
        let mut out = String::with_capacity(self.source.len() * 2);
        for token in &self.tokens {
            match token {
                Token::Component(def) => out.push_str(def.host),
                Token::Literal('%') => out.push_str("%%"),
                Token::Literal(c) => out.push(*c),
            }
        }
        out
    }

    fn components(&self) -> impl Iterator<Item = Component> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            Token::Component(def) => Some(def.component),
            Token::Literal(_) => None,
        })
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Translates a picker format into a chrono strftime pattern.
///
/// Never fails: unknown characters pass through.
///
/// # Examples
///
/// ```
/// use form_datetime_controls::format::{translate, TokenSet};
///
/// assert_eq!(translate("dd-mm-yyyy hh:ii", TokenSet::DateTime), "%d-%m-%Y %H:%M");
/// assert_eq!(translate("d M yy", TokenSet::Date), "%-d %b %y");
/// ```
pub fn translate(format: &str, set: TokenSet) -> String {
    FormatSpec::new(format, set).translate()
}

/// Joins a date format and a time format the way composite fields submit them.
pub fn merge_formats(date: &str, time: &str) -> String {
    format!("{date} {time}")
}

/// A translated pattern used to parse and format canonical values.
///
/// Parsing is strict: the whole input must match. Whitespace is only accepted
/// where the picker format has a space, never in front of a field. Fields the
/// pattern does not
/// mention reset to the Unix epoch (1970-01-01 00:00:00), so a date-only
/// pattern yields midnight and a time-only pattern yields a time on
/// 1970-01-01.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPattern {
    spec: FormatSpec,
    host: String,
}

impl HostPattern {
    /// Builds the pattern for a picker format.
    pub fn new(format: impl Into<String>, set: TokenSet) -> Self {
        let spec = FormatSpec::new(format, set);
        let host = spec.translate();
        Self { spec, host }
    }

    /// The picker-side spec.
    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    /// The chrono strftime pattern.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Formats a value with this pattern.
    pub fn format(&self, value: &NaiveDateTime) -> String {
        // Host patterns only contain items from the token tables and escaped
        // literals, none of which need a time zone.
        value.format(&self.host).to_string()
    }

    /// Parses `input`, which must match the whole pattern.
    pub fn parse(&self, input: &str) -> FormDateTimeResult<NaiveDateTime> {
        let mut parsed = self.scan(input)?;

        let date = if self.spec.has_date() {
            self.fill_missing_date(&mut parsed)
                .and_then(|()| parsed.to_naive_date())
                .map_err(|e| self.mismatch(input, e))?
        } else {
            NaiveDate::default()
        };

        let time = if self.spec.has_time() {
            self.fill_missing_time(&mut parsed)
                .and_then(|()| parsed.to_naive_time())
                .map_err(|e| self.mismatch(input, e))?
        } else {
            NaiveTime::default()
        };

        Ok(date.and_time(time))
    }

    /// Runs the strftime items one at a time so that chrono's leniency
    /// around whitespace does not leak through.
    fn scan(&self, input: &str) -> FormDateTimeResult<Parsed> {
        let mut parsed = Parsed::new();
        let mut rest = input;
        for item in StrftimeItems::new(&self.host) {
            let starts_blank = rest.starts_with(char::is_whitespace);
            match item {
                Item::Space(_) if !starts_blank => {
                    return Err(self.mismatch(input, "expected whitespace"));
                }
                Item::Numeric(..) | Item::Fixed(_) if starts_blank => {
                    return Err(self.mismatch(input, "unexpected whitespace"));
                }
                _ => {}
            }
            rest = format::parse_and_remainder(&mut parsed, rest, std::iter::once(&item))
                .map_err(|e| self.mismatch(input, e))?;
        }
        if !rest.is_empty() {
            return Err(self.mismatch(input, "trailing input"));
        }
        Ok(parsed)
    }

    fn fill_missing_date(&self, parsed: &mut Parsed) -> format::ParseResult<()> {
        if !self.spec.has(Component::Year) {
            parsed.set_year(1970)?;
        }
        if !self.spec.has(Component::Month) {
            parsed.set_month(1)?;
        }
        if !self.spec.has(Component::Day) {
            parsed.set_day(1)?;
        }
        Ok(())
    }

    fn fill_missing_time(&self, parsed: &mut Parsed) -> format::ParseResult<()> {
        if !self.spec.has(Component::Minute) {
            parsed.set_minute(0)?;
        }
        Ok(())
    }

    fn mismatch(&self, input: &str, err: impl fmt::Display) -> FormDateTimeError {
        FormDateTimeError::InvalidInput(format!(
            "'{input}' does not match format '{}': {err}",
            self.spec.source()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_translate_w3c_date() {
        assert_eq!(translate("yyyy-mm-dd", TokenSet::Date), "%Y-%m-%d");
    }

    #[test]
    fn test_translate_day_first() {
        assert_eq!(translate("dd-mm-yyyy", TokenSet::Date), "%d-%m-%Y");
    }

    #[test]
    fn test_translate_longest_token_wins() {
        assert_eq!(translate("yyyy yyy yy", TokenSet::Date), "%Y %y %y");
        assert_eq!(translate("dd d", TokenSet::Date), "%d %-d");
        assert_eq!(translate("mm m MM M", TokenSet::Date), "%m %-m %B %b");
    }

    #[test]
    fn test_translate_odd_run_of_year_letters() {
        // Five `y` resolve as `yyyy` followed by a lone `y` literal.
        assert_eq!(translate("yyyyy", TokenSet::Date), "%Yy");
    }

    #[test]
    fn test_translate_time() {
        assert_eq!(translate("hh:ii:ss", TokenSet::Time), "%H:%M:%S");
        assert_eq!(translate("hh:ii P", TokenSet::Time), "%H:%M %p");
        assert_eq!(translate("hh:ii p", TokenSet::Time), "%H:%M %P");
    }

    #[test]
    fn test_date_vocabulary_ignores_time_tokens() {
        assert_eq!(translate("yyyy-mm-dd hh:ii", TokenSet::Date), "%Y-%m-%d hh:ii");
    }

    #[test]
    fn test_time_vocabulary_ignores_date_tokens() {
        assert_eq!(translate("dd hh", TokenSet::Time), "dd %H");
    }

    #[test]
    fn test_translate_combined() {
        let combined = merge_formats("dd.mm.yyyy", "hh:ii");
        assert_eq!(combined, "dd.mm.yyyy hh:ii");
        assert_eq!(translate(&combined, TokenSet::DateTime), "%d.%m.%Y %H:%M");
    }

    #[test]
    fn test_literals_pass_through() {
        assert_eq!(translate("dd/mm/yyyy (x)", TokenSet::Date), "%d/%m/%Y (x)");
        assert_eq!(translate("", TokenSet::DateTime), "");
        assert_eq!(translate("день dd", TokenSet::Date), "день %d");
    }

    #[test]
    fn test_percent_is_escaped() {
        assert_eq!(translate("dd%", TokenSet::Date), "%d%%");
    }

    #[test]
    fn test_spec_components() {
        let spec = FormatSpec::new("hh:ii P", TokenSet::Time);
        assert!(spec.has_time());
        assert!(!spec.has_date());
        assert!(spec.has_meridian());
        assert_eq!(spec.tokens().len(), 5);
        assert_eq!(spec.to_string(), "hh:ii P");
    }

    #[test]
    fn test_parse_day_first_date() {
        let pattern = HostPattern::new("dd-mm-yyyy", TokenSet::Date);
        assert_eq!(pattern.parse("25-12-2024").unwrap(), dt(2024, 12, 25, 0, 0, 0));
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        let pattern = HostPattern::new("yyyy-mm-dd", TokenSet::Date);
        let err = pattern.parse("2024-12-25 10:00").unwrap_err();
        assert!(matches!(err, FormDateTimeError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_stray_whitespace() {
        let date = HostPattern::new("yyyy-mm-dd", TokenSet::Date);
        for input in [" 2024-12-25", "2024- 12-25", "2024-12- 25"] {
            let err = date.parse(input).unwrap_err();
            assert!(matches!(err, FormDateTimeError::InvalidInput(_)), "{input:?}");
        }

        let combined = HostPattern::new("yyyy-mm-dd hh:ii", TokenSet::DateTime);
        let err = combined.parse("2024-12-2510:00").unwrap_err();
        assert!(matches!(err, FormDateTimeError::InvalidInput(_)));
        assert!(combined.parse("2024-12-25 :00").is_err());
        assert_eq!(
            combined.parse("2024-12-25 10:00").unwrap(),
            dt(2024, 12, 25, 10, 0, 0)
        );
    }

    #[test]
    fn test_parse_rejects_whitespace_before_names() {
        let pattern = HostPattern::new("d M yyyy", TokenSet::Date);
        assert!(pattern.parse("5  Mar 2021").is_ok());
        assert!(pattern.parse(" 5 Mar 2021").is_err());
        assert!(pattern.parse("5 Mar 2021 ").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        let pattern = HostPattern::new("yyyy-mm-dd", TokenSet::Date);
        assert!(pattern.parse("2023-02-30").is_err());
        assert!(pattern.parse("").is_err());
    }

    #[test]
    fn test_parse_time_only_sits_on_epoch() {
        let pattern = HostPattern::new("hh:ii", TokenSet::Time);
        assert_eq!(pattern.parse("09:45").unwrap(), dt(1970, 1, 1, 9, 45, 0));
    }

    #[test]
    fn test_parse_hour_only_time() {
        let pattern = HostPattern::new("hh", TokenSet::Time);
        assert_eq!(pattern.parse("17").unwrap(), dt(1970, 1, 1, 17, 0, 0));
    }

    #[test]
    fn test_parse_missing_year_defaults_to_epoch_year() {
        let pattern = HostPattern::new("dd.mm.", TokenSet::Date);
        assert_eq!(pattern.parse("03.07.").unwrap(), dt(1970, 7, 3, 0, 0, 0));
    }

    #[test]
    fn test_parse_month_names() {
        let pattern = HostPattern::new("d MM yyyy", TokenSet::Date);
        assert_eq!(pattern.parse("5 March 2021").unwrap(), dt(2021, 3, 5, 0, 0, 0));

        let pattern = HostPattern::new("d M yyyy", TokenSet::Date);
        assert_eq!(pattern.parse("5 Mar 2021").unwrap(), dt(2021, 3, 5, 0, 0, 0));
    }

    #[test]
    fn test_parse_two_digit_year() {
        let pattern = HostPattern::new("dd/mm/yy", TokenSet::Date);
        assert_eq!(pattern.parse("01/02/24").unwrap(), dt(2024, 2, 1, 0, 0, 0));
    }

    #[test]
    fn test_parse_combined() {
        let pattern = HostPattern::new("yyyy-mm-dd hh:ii:ss", TokenSet::DateTime);
        assert_eq!(
            pattern.parse("2024-06-01 23:59:58").unwrap(),
            dt(2024, 6, 1, 23, 59, 58)
        );
    }

    #[test]
    fn test_format_roundtrip_at_pattern_precision() {
        let value = dt(2024, 2, 29, 13, 7, 42);

        let date = HostPattern::new("d.m.yyyy", TokenSet::Date);
        assert_eq!(date.format(&value), "29.2.2024");
        assert_eq!(date.parse(&date.format(&value)).unwrap(), dt(2024, 2, 29, 0, 0, 0));

        let minutes = HostPattern::new("yyyy-mm-dd hh:ii", TokenSet::DateTime);
        assert_eq!(minutes.format(&value), "2024-02-29 13:07");
        assert_eq!(
            minutes.parse(&minutes.format(&value)).unwrap(),
            dt(2024, 2, 29, 13, 7, 0)
        );

        let full = HostPattern::new("yyyy-mm-dd hh:ii:ss", TokenSet::DateTime);
        assert_eq!(full.parse(&full.format(&value)).unwrap(), value);
    }

    #[test]
    fn test_format_meridian() {
        let pattern = HostPattern::new("hh:ii P", TokenSet::Time);
        assert_eq!(pattern.format(&dt(1970, 1, 1, 15, 30, 0)), "15:30 PM");
        assert_eq!(pattern.parse("15:30 PM").unwrap(), dt(1970, 1, 1, 15, 30, 0));
    }

    #[test]
    fn test_host_accessors() {
        let pattern = HostPattern::new("yyyy", TokenSet::Date);
        assert_eq!(pattern.host(), "%Y");
        assert_eq!(pattern.spec().source(), "yyyy");
    }
}

//! Line-oriented `xychart-beta` reader with best-effort defaults.
//!
//! Every line is classified by its leading keyword into a [`Directive`] and
//! applied to the [`ChartModel`] in a single pass. Nothing here fails: a
//! missing directive keeps its default, a bad number becomes `NaN`.

use regex::Regex;
use tracing::{debug, trace};

use crate::core::constants::{DEFAULT_TITLE, DEFAULT_Y_MAX, DEFAULT_Y_MIN};

// --- Public Model ---

/// Numeric (vertical) axis: optional title plus the plotted value range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl ValueAxis {
    /// `max - min`; zero or negative ranges are passed through untouched.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for ValueAxis {
    fn default() -> Self {
        Self {
            label: String::new(),
            min: DEFAULT_Y_MIN,
            max: DEFAULT_Y_MAX,
        }
    }
}

/// Everything the layout and emitter need to know about one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub title: String,
    /// Category (x-axis) labels in display order.
    pub categories: Vec<String>,
    pub value_axis: ValueAxis,
    /// Plotted values, index-aligned with `categories`.
    pub series: Vec<f64>,
}

impl Default for ChartModel {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            categories: Vec::new(),
            value_axis: ValueAxis::default(),
            series: Vec::new(),
        }
    }
}

// --- Line Classification ---

/// One input line, tagged by its leading keyword. The payload is the text
/// after the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    Title(&'a str),
    XAxis(&'a str),
    YAxis(&'a str),
    Line(&'a str),
    Other,
}

impl<'a> Directive<'a> {
    /// First matching keyword wins, in declaration order.
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix("title") {
            Self::Title(rest)
        } else if let Some(rest) = line.strip_prefix("x-axis") {
            Self::XAxis(rest)
        } else if let Some(rest) = line.strip_prefix("y-axis") {
            Self::YAxis(rest.trim())
        } else if let Some(rest) = line.strip_prefix("line") {
            Self::Line(rest)
        } else {
            Self::Other
        }
    }
}

// --- Parser ---

/// Compiled patterns for the bracket list, the `a --> b` range and the
/// quoted axis label.
pub struct ChartParser {
    list_pattern: Regex,
    range_pattern: Regex,
    quoted_pattern: Regex,
}

impl Default for ChartParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list_pattern: Regex::new(r"\[(.*?)\]").expect("Invalid regex"),
            range_pattern: Regex::new(r"(-?\d+(?:\.\d+)?)\s*-->\s*(-?\d+(?:\.\d+)?)")
                .expect("Invalid regex"),
            quoted_pattern: Regex::new(r#""(.*?)""#).expect("Invalid regex"),
        }
    }

    /// Build a [`ChartModel`] from chart text. Unknown lines are skipped.
    #[must_use]
    pub fn parse(&self, content: &str) -> ChartModel {
        let mut chart = ChartModel::default();

        for line in content.lines().map(trim_line).filter(|l| !l.is_empty()) {
            match Directive::classify(line) {
                Directive::Title(rest) => {
                    chart.title = rest.replace('"', "").trim().to_owned();
                }
                Directive::XAxis(rest) => {
                    if let Some(items) = self.bracketed(rest) {
                        chart.categories = items.split(',').map(|s| s.trim().to_owned()).collect();
                    }
                }
                Directive::YAxis(rest) => self.apply_value_axis(&mut chart.value_axis, rest),
                Directive::Line(rest) => {
                    if let Some(items) = self.bracketed(rest) {
                        chart.series = items.split(',').map(parse_number).collect();
                    }
                }
                Directive::Other => trace!(line, "ignoring line"),
            }
        }

        debug!(
            title = %chart.title,
            categories = chart.categories.len(),
            points = chart.series.len(),
            y_min = chart.value_axis.min,
            y_max = chart.value_axis.max,
            "parsed chart"
        );
        chart
    }

    fn bracketed<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.list_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn apply_value_axis(&self, axis: &mut ValueAxis, rest: &str) {
        let numeric = normalized(rest);
        if let Some(caps) = self.range_pattern.captures(&numeric) {
            axis.min = parse_number(&caps[1]);
            axis.max = parse_number(&caps[2]);
        }
        if let Some(caps) = self.quoted_pattern.captures(rest) {
            axis.label = caps[1].to_owned();
        }
    }
}

/// Parse chart text with a freshly compiled [`ChartParser`].
#[must_use]
pub fn parse(content: &str) -> ChartModel {
    ChartParser::new().parse(content)
}

// --- Helpers ---

/// Replace every U+2212 MINUS SIGN with an ASCII `-`, in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

fn normalized(text: &str) -> String {
    let mut buf = text.as_bytes().to_vec();
    normalize_unicode_minus(&mut buf);
    // U+2212 -> '-' swaps a whole scalar for an ASCII byte, so this stays UTF-8.
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Longest numeric prefix of `token` (`"12px"` reads as 12, `"3e"` as 3);
/// `NaN` when there is none. Only the exact spelling `Infinity` (optionally
/// signed) reads as infinite.
#[must_use]
pub fn parse_number(token: &str) -> f64 {
    let mut buf = trim_line(token).as_bytes().to_vec();
    normalize_unicode_minus(&mut buf);
    decimal_prefix(&buf)
        .and_then(|lit| lexical_core::parse::<f64>(&lit).ok())
        .unwrap_or(f64::NAN)
}

/// Canonical `[-]int[.frac][e[-]exp]` literal for the longest decimal prefix
/// of `b`, or `inf`/`-inf` for a leading `Infinity`. A dangling exponent
/// marker (`12em`, `1e+`) is left out of the prefix.
fn decimal_prefix(b: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(b.len() + 1);
    let mut i = 0;
    if let Some(&sign) = b.first().filter(|c| matches!(**c, b'+' | b'-')) {
        if sign == b'-' {
            out.push(b'-');
        }
        i = 1;
    }
    if b[i..].starts_with(b"Infinity") {
        out.extend_from_slice(b"inf");
        return Some(out);
    }

    let digits = |from: usize| b[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let int_len = digits(i);
    let int_part = &b[i..i + int_len];
    i += int_len;
    let mut frac_part: &[u8] = &[];
    if b.get(i) == Some(&b'.') {
        let frac_len = digits(i + 1);
        frac_part = &b[i + 1..i + 1 + frac_len];
        i += 1 + frac_len;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    if int_part.is_empty() {
        out.push(b'0');
    }
    out.extend_from_slice(int_part);
    if !frac_part.is_empty() {
        out.push(b'.');
        out.extend_from_slice(frac_part);
    }

    if matches!(b.get(i).copied(), Some(b'e' | b'E')) {
        let mut j = i + 1;
        let exp_sign = b.get(j).copied().filter(|c| matches!(*c, b'+' | b'-'));
        if exp_sign.is_some() {
            j += 1;
        }
        let exp_len = digits(j);
        if exp_len > 0 {
            out.push(b'e');
            if exp_sign == Some(b'-') {
                out.push(b'-');
            }
            out.extend_from_slice(&b[j..j + exp_len]);
        }
    }
    Some(out)
}

/// `str::trim` plus U+FEFF, which editors leave at the start of a file.
#[inline]
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;

use crate::models::PointRecord;
use crate::utils::constants::{FIELD_DELIMITER, LINE_DELIMITER};
use std::str::Split;

pub struct PointReader {
    skip_header: bool,
}

impl PointReader {
    pub fn new() -> Self {
        Self { skip_header: true }
    }

    pub fn with_skip_header(skip_header: bool) -> Self {
        Self { skip_header }
    }

    /// Stream point records from raw text, one per line after the header.
    ///
    /// Every line yields a record, including blank ones. Fields that do not
    /// parse as numbers come back as `None`, so the only way a row can fail
    /// is later, during coordinate validation.
    pub fn read_points<'a>(&self, text: &'a str) -> PointIterator<'a> {
        PointIterator::new(text, self.skip_header)
    }

    /// Parse a single `lat,lng,value` line.
    pub fn parse_point_line(&self, line: &str) -> PointRecord {
        parse_point_line(line)
    }
}

impl Default for PointReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy, single-pass iterator over the data rows of a text block.
pub struct PointIterator<'a> {
    lines: Split<'a, char>,
    header_pending: bool,
}

impl<'a> PointIterator<'a> {
    fn new(text: &'a str, skip_header: bool) -> Self {
        Self {
            lines: text.split(LINE_DELIMITER),
            header_pending: skip_header,
        }
    }
}

impl Iterator for PointIterator<'_> {
    type Item = PointRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.header_pending {
            self.header_pending = false;
            // Header content is never inspected
            self.lines.next()?;
        }

        self.lines.next().map(parse_point_line)
    }
}

fn parse_point_line(line: &str) -> PointRecord {
    // Expected format: LAT, LNG, VALUE
    let mut fields = line.split(FIELD_DELIMITER).map(str::trim);

    let latitude = parse_field(fields.next());
    let longitude = parse_field(fields.next());
    let value = parse_field(fields.next());

    PointRecord::new(latitude, longitude, value)
}

fn parse_field(field: Option<&str>) -> Option<f64> {
    field
        .and_then(numeric_prefix)
        .and_then(|prefix| prefix.parse::<f64>().ok())
}

/// Longest leading slice of `text` that reads as a decimal number, the way
/// JavaScript's `parseFloat` reads it. Trailing text is ignored; the only
/// spelled-out value accepted is `Infinity` with an optional sign.
fn numeric_prefix(text: &str) -> Option<&str> {
    const INFINITY: &str = "Infinity";

    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with(INFINITY) {
        return Some(&text[..end + INFINITY.len()]);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // An exponent only counts when it has digits
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&text[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

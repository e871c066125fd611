//! ISO-8601 date-time scanner.
//!
//! # Responsibility
//! - Split ISO-8601 text into a local date-time and an optional offset.
//!
//! # Invariants
//! - Every string `timestamp::format_iso` renders is accepted, including
//!   signed years outside `0000..=9999` and `+HH:MM:SS` offsets.
//! - Numeric fields are fixed-width ASCII digits; no signs inside fields.
//!
//! Accepted shapes:
//! - date: `YYYY-MM-DD`, `±YYYYY-MM-DD` (expanded year), `YYYYMMDD`
//! - time: `HH`, `HH:MM`, `HH:MM:SS`, `HHMM`, `HHMMSS`, optional `.f`/`,f`
//! - offset: `Z`, `±HH`, `±HH:MM`, `±HH:MM:SS`, `±HHMM`, `±HHMMSS`
//! - date-only text means local midnight

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc};

const NANOS_DIGITS: usize = 9;

/// Scanned date-time before offset resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IsoDateTime {
    pub local: NaiveDateTime,
    pub offset: Option<FixedOffset>,
}

/// Scans `text`; the error is a short human-readable reason.
pub(crate) fn parse(text: &str) -> Result<IsoDateTime, &'static str> {
    let mut cursor = Cursor::new(text);
    let date = parse_date(&mut cursor)?;
    if cursor.is_done() {
        return Ok(IsoDateTime {
            local: date.and_time(NaiveTime::MIN),
            offset: None,
        });
    }
    if !matches!(cursor.bump(), Some(b'T' | b't' | b' ')) {
        return Err("expected `T` or space between date and time");
    }
    let time = parse_time(&mut cursor)?;
    let offset = parse_offset(&mut cursor)?;
    if !cursor.is_done() {
        return Err("unexpected trailing characters");
    }
    Ok(IsoDateTime {
        local: date.and_time(time),
        offset,
    })
}

fn parse_date(cursor: &mut Cursor<'_>) -> Result<NaiveDate, &'static str> {
    let sign = cursor.sign();
    let year_digits = cursor.digit_run();
    let (year, month, day) = if cursor.eat(b'-') {
        let width_ok = match sign {
            Some(_) => year_digits.len() >= 4,
            None => year_digits.len() == 4,
        };
        if !width_ok {
            return Err("year must have four digits or a sign and at least four");
        }
        let year = to_number(year_digits).ok_or("year is out of range")?;
        let month = cursor.digits(2).ok_or("month must have two digits")?;
        if !cursor.eat(b'-') {
            return Err("expected `-` after month");
        }
        let day = cursor.digits(2).ok_or("day must have two digits")?;
        (year, month, day)
    } else if sign.is_none() && year_digits.len() == 8 {
        let (year, rest) = year_digits.split_at(4);
        let (month, day) = rest.split_at(2);
        let number = |digits: &[u8]| to_number(digits).ok_or("date is out of range");
        (number(year)?, number(month)?, number(day)?)
    } else {
        return Err("date must be YYYY-MM-DD or YYYYMMDD");
    };
    let year = i32::try_from(year).map_err(|_| "year is out of range")?;
    NaiveDate::from_ymd_opt(sign.unwrap_or(1) * year, month, day).ok_or("date is out of range")
}

fn parse_time(cursor: &mut Cursor<'_>) -> Result<NaiveTime, &'static str> {
    let hour = cursor.digits(2).ok_or("hour must have two digits")?;
    let (mut minute, mut second, mut nanos) = (0, 0, 0);
    let extended = cursor.eat(b':');
    if extended || cursor.at_digit() {
        minute = cursor.digits(2).ok_or("minute must have two digits")?;
        if (extended && cursor.eat(b':')) || (!extended && cursor.at_digit()) {
            second = cursor.digits(2).ok_or("second must have two digits")?;
            if cursor.eat(b'.') || cursor.eat(b',') {
                nanos = parse_fraction(cursor)?;
            }
        }
    }
    // Leap second: chrono keeps it as second 59 with an extra full second of nanos.
    let (second, nanos) = if second == 60 {
        (59, nanos + 1_000_000_000)
    } else {
        (second, nanos)
    };
    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos).ok_or("time is out of range")
}

// Digits past nanosecond precision are dropped.
fn parse_fraction(cursor: &mut Cursor<'_>) -> Result<u32, &'static str> {
    let digits = cursor.digit_run();
    if digits.is_empty() {
        return Err("fraction must have at least one digit");
    }
    Ok((0..NANOS_DIGITS).fold(0, |nanos, index| {
        nanos * 10 + digits.get(index).map_or(0, |digit| u32::from(digit - b'0'))
    }))
}

fn parse_offset(cursor: &mut Cursor<'_>) -> Result<Option<FixedOffset>, &'static str> {
    if cursor.is_done() {
        return Ok(None);
    }
    if cursor.eat(b'Z') || cursor.eat(b'z') {
        return Ok(Some(Utc.fix()));
    }
    let sign = cursor.sign().ok_or("unexpected characters after time")?;
    let hours = cursor.digits(2).ok_or("offset hours must have two digits")?;
    let (mut minutes, mut seconds) = (0, 0);
    let extended = cursor.eat(b':');
    if extended || cursor.at_digit() {
        minutes = cursor
            .digits(2)
            .ok_or("offset minutes must have two digits")?;
        if (extended && cursor.eat(b':')) || (!extended && cursor.at_digit()) {
            seconds = cursor
                .digits(2)
                .ok_or("offset seconds must have two digits")?;
        }
    }
    if minutes >= 60 || seconds >= 60 {
        return Err("offset minutes and seconds must be below 60");
    }
    let total = i32::try_from(hours * 3600 + minutes * 60 + seconds)
        .map_err(|_| "offset is out of range")?;
    FixedOffset::east_opt(sign * total)
        .map(Some)
        .ok_or("offset must be less than 24 hours")
}

fn to_number(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, digit| {
        acc.checked_mul(10)?.checked_add(u32::from(digit - b'0'))
    })
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn at_digit(&self) -> bool {
        self.peek().is_some_and(|byte| byte.is_ascii_digit())
    }

    fn sign(&mut self) -> Option<i32> {
        if self.eat(b'+') {
            Some(1)
        } else if self.eat(b'-') {
            Some(-1)
        } else {
            None
        }
    }

    fn digit_run(&mut self) -> &'a [u8] {
        let start = self.pos;
        while self.at_digit() {
            self.pos += 1;
        }
        &self.bytes[start..self.pos]
    }

    /// Exactly `count` ASCII digits as a number.
    fn digits(&mut self, count: usize) -> Option<u32> {
        let end = self.pos.checked_add(count)?;
        let slice = self.bytes.get(self.pos..end)?;
        if !slice.iter().all(u8::is_ascii_digit) {
            return None;
        }
        self.pos = end;
        to_number(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use chrono::{FixedOffset, NaiveDate};

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, nanos: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_nano_opt(h, mi, s, nanos)
            .unwrap()
    }

    fn east(secs: i32) -> Option<FixedOffset> {
        FixedOffset::east_opt(secs)
    }

    #[test]
    fn extended_form_with_offset() {
        let parsed = parse("2024-12-20T16:53:49.493484+00:00").unwrap();
        assert_eq!(parsed.local, local(2024, 12, 20, 16, 53, 49, 493_484_000));
        assert_eq!(parsed.offset, east(0));
    }

    #[test]
    fn minute_precision_time() {
        let parsed = parse("2024-12-20T16:53+00:00").unwrap();
        assert_eq!(parsed.local, local(2024, 12, 20, 16, 53, 0, 0));
        assert_eq!(parsed.offset, east(0));
    }

    #[test]
    fn hour_precision_time() {
        let parsed = parse("2024-12-20T16").unwrap();
        assert_eq!(parsed.local, local(2024, 12, 20, 16, 0, 0, 0));
        assert_eq!(parsed.offset, None);
    }

    #[test]
    fn date_only_is_local_midnight() {
        let parsed = parse("2024-12-20").unwrap();
        assert_eq!(parsed.local, local(2024, 12, 20, 0, 0, 0, 0));
        assert_eq!(parsed.offset, None);
    }

    #[test]
    fn basic_date_time_and_offset() {
        let parsed = parse("20241220T165349+0000").unwrap();
        assert_eq!(parsed.local, local(2024, 12, 20, 16, 53, 49, 0));
        assert_eq!(parsed.offset, east(0));

        let parsed = parse("20241220").unwrap();
        assert_eq!(parsed.local, local(2024, 12, 20, 0, 0, 0, 0));
    }

    #[test]
    fn offset_shapes() {
        let cases = [
            ("2024-12-20T16:53:49+0530", east(19_800)),
            ("2024-12-20T16:53:49-07", east(-25_200)),
            ("2024-12-20T16:53:49+05:30:15", east(19_815)),
            ("2024-12-20T16:53:49+053015", east(19_815)),
            ("2024-12-20T16:53:49z", east(0)),
        ];
        for (text, expected) in cases {
            assert_eq!(parse(text).unwrap().offset, expected, "{text}");
        }
    }

    #[test]
    fn expanded_and_negative_years() {
        let parsed = parse("+10000-01-01T00:00:00+00:00").unwrap();
        assert_eq!(parsed.local, local(10_000, 1, 1, 0, 0, 0, 0));

        let parsed = parse("-0001-03-01T12:00:00-05:00").unwrap();
        assert_eq!(parsed.local, local(-1, 3, 1, 12, 0, 0, 0));
    }

    #[test]
    fn fraction_is_truncated_to_nanoseconds() {
        let parsed = parse("2024-12-20T16:53:49,1234567891").unwrap();
        assert_eq!(parsed.local, local(2024, 12, 20, 16, 53, 49, 123_456_789));
    }

    #[test]
    fn leap_second_is_kept() {
        let parsed = parse("2016-12-31T23:59:60+00:00").unwrap();
        assert_eq!(
            parsed.local,
            local(2016, 12, 31, 23, 59, 59, 1_000_000_000)
        );
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in [
            "",
            "yesterday",
            "2024-13-01T00:00:00+00:00",
            "2024-12-20T16:53:49+05:+1:15",
            "2024-12-20T16:53:49+24:00",
            "2024-12-20T16:53:49+05:60",
            "2024-12-20T1:53:49",
            "2024-12-20T16:",
            "2024-12-20T16:53:49.",
            "2024-12-20X16:53:49",
            "2024-12-20T16:53:49+00:00 ",
            "24-12-20",
            "12024-12-20",
            "2024-1-20",
            "2024-12-20T16:53:49Zjunk",
        ] {
            assert!(parse(bad).is_err(), "`{bad}` should be rejected");
        }
    }
}

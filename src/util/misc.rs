//! Small time and randomness helpers

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use rand::{rng, Rng};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Local time as `YYYY-M-D:H-m-S`, without zero padding.
pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

fn format_timestamp<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    format!(
        "{}-{}-{}:{}-{}-{}",
        t.year(),
        t.month(),
        t.day(),
        t.hour(),
        t.minute(),
        t.second()
    )
}

/// Random string of `len` characters drawn from `0-9a-f`.
pub fn random_hex(len: usize) -> String {
    let mut rng = rng();
    (0..len)
        .map(|_| HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())] as char)
        .collect()
}

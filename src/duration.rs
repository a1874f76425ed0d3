//! Formatting of YouTube `contentDetails.duration` values.
//!
//! The API reports durations as a subset of ISO 8601 (`PT1H2M3S`). After the
//! `PT` marker is removed, the remainder is read as a run of
//! `<number><unit>` components. Anything that doesn't parse is shown as a
//! zero-length video rather than an error.

use std::time::Duration;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Largest representable elapsed time, in nanoseconds
const MAX_NANOS: u128 = i64::MAX as u128;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(3600 * NANOS_PER_SECOND),
        _ => None,
    }
}

/// Parse a duration such as `PT1H2M3S` into elapsed time.
///
/// The `PT` prefix is matched case-insensitively and is optional. A leading
/// `+` is accepted; negative values collapse to zero. Returns `None` for
/// empty or padded input, unknown units (including day designators like
/// `P1DT2H`), components without a number, or values that overflow.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let lower = raw.to_lowercase();
    let rest = lower.strip_prefix("pt").unwrap_or(&lower);

    let (negative, rest) = match rest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };

    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    let mut chars = rest.chars().peekable();

    while chars.peek().is_some() {
        let mut whole = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
            whole.push(c);
        }

        let mut fraction = String::new();
        let has_point = chars.next_if_eq(&'.').is_some();
        if has_point {
            while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
                fraction.push(c);
            }
        }

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut unit = String::new();
        while let Some(c) = chars.next_if(|c| !c.is_ascii_digit() && *c != '.') {
            unit.push(c);
        }
        let scale = unit_nanos(&unit)?;

        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };
        total = total.checked_add(whole.checked_mul(scale)?)?;

        // Digits beyond nanosecond precision can't change the result
        let fraction: String = fraction.chars().take(18).collect();
        if !fraction.is_empty() {
            let numerator: u128 = fraction.parse().ok()?;
            let denominator = 10u128.pow(fraction.len() as u32);
            total = total.checked_add(numerator * scale / denominator)?;
        }

        if total > MAX_NANOS {
            return None;
        }
    }

    if negative {
        return Some(Duration::ZERO);
    }

    Some(Duration::from_nanos(total as u64))
}

/// Format a raw API duration as `H:MM:SS`, or `M:SS` when under an hour.
///
/// Malformed input formats as `0:00`.
pub fn format_duration(raw: &str) -> String {
    let seconds = parse_duration(raw).unwrap_or_default().as_secs();

    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

use crate::errors::TimingError;

/// ASS timing fields carry hundredths of a second
const FRACTION_DIGITS: usize = 2;

/// Bring a `H:MM:SS.fraction` timestamp to exactly two fractional digits.
///
/// Longer fractions are cut (not rounded), shorter ones are padded with zeros.
pub fn normalize_timestamp(timestamp: &str) -> Result<String, TimingError> {
    let found = timestamp.matches('.').count();
    let Some((whole, fraction)) = timestamp.split_once('.').filter(|_| found == 1) else {
        return Err(TimingError::DecimalPoints {
            timestamp: timestamp.to_string(),
            found,
        });
    };

    let digits = fraction.chars().count();
    if digits == FRACTION_DIGITS {
        return Ok(timestamp.to_string());
    }

    let mut normalized = String::with_capacity(whole.len() + 1 + FRACTION_DIGITS);
    normalized.push_str(whole);
    normalized.push('.');
    if digits > FRACTION_DIGITS {
        normalized.extend(fraction.chars().take(FRACTION_DIGITS));
    } else {
        normalized.push_str(fraction);
        normalized.extend(std::iter::repeat_n('0', FRACTION_DIGITS - digits));
    }
    Ok(normalized)
}

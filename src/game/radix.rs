//! Positional numerals in an arbitrary base.

use crate::error::RadixError;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn check_base(base: u32) -> Result<(), RadixError> {
    if base < 2 {
        return Err(RadixError::InvalidBase(base));
    }
    Ok(())
}

/// Digits of `value` in `base`, most significant first. Zero is `[0]`.
pub fn digits(mut value: usize, base: u32) -> Result<Vec<u32>, RadixError> {
    check_base(base)?;
    let base = base as usize;

    let mut out = Vec::new();
    loop {
        out.push((value % base) as u32);
        value /= base;
        if value == 0 {
            break;
        }
    }
    out.reverse();
    Ok(out)
}

/// Digits of `value` in `base`, left-padded with zeros to at least `width`.
pub fn padded_digits(value: usize, base: u32, width: usize) -> Result<Vec<u32>, RadixError> {
    let mut out = digits(value, base)?;
    if out.len() < width {
        let mut padded = vec![0; width - out.len()];
        padded.append(&mut out);
        out = padded;
    }
    Ok(out)
}

/// Inverse of [`digits`]. Digits at or above `base` are rejected, as are
/// values that do not fit in a `usize`.
pub fn from_digits(digits: &[u32], base: u32) -> Result<usize, RadixError> {
    check_base(base)?;
    digits.iter().try_fold(0usize, |acc, &digit| {
        if digit >= base {
            return Err(RadixError::InvalidDigit { digit, base });
        }
        acc.checked_mul(base as usize)
            .and_then(|shifted| shifted.checked_add(digit as usize))
            .ok_or(RadixError::Overflow)
    })
}

/// Render `value` in `base` using `0-9a-z`, so `base` is at most 36.
pub fn to_string(value: usize, base: u32) -> Result<String, RadixError> {
    if base as usize > ALPHABET.len() {
        return Err(RadixError::InvalidBase(base));
    }
    Ok(digits(value, base)?
        .into_iter()
        .map(|d| ALPHABET[d as usize] as char)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_single_digit() {
        assert_eq!(digits(0, 4).unwrap(), vec![0]);
        assert_eq!(to_string(0, 2).unwrap(), "0");
    }

    #[test]
    fn test_known_conversions() {
        assert_eq!(to_string(10, 2).unwrap(), "1010");
        assert_eq!(to_string(255, 16).unwrap(), "ff");
        assert_eq!(to_string(35, 36).unwrap(), "z");
        assert_eq!(to_string(7, 3).unwrap(), "21");
        assert_eq!(digits(11, 4).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_matches_std_formatting() {
        for value in 0..500usize {
            assert_eq!(to_string(value, 2).unwrap(), format!("{value:b}"));
            assert_eq!(to_string(value, 8).unwrap(), format!("{value:o}"));
            assert_eq!(to_string(value, 16).unwrap(), format!("{value:x}"));
        }
    }

    #[test]
    fn test_padded_digits() {
        assert_eq!(padded_digits(3, 4, 2).unwrap(), vec![0, 3]);
        assert_eq!(padded_digits(13, 4, 2).unwrap(), vec![3, 1]);
        assert_eq!(padded_digits(17, 4, 2).unwrap(), vec![1, 0, 1]);
    }

    #[test]
    fn test_from_digits_inverts_digits() {
        for base in 2..=12u32 {
            for value in 0..200usize {
                let ds = digits(value, base).unwrap();
                assert_eq!(from_digits(&ds, base).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(digits(5, 1), Err(RadixError::InvalidBase(1)));
        assert_eq!(to_string(5, 37), Err(RadixError::InvalidBase(37)));
        assert_eq!(digits(40, 40).unwrap(), vec![1, 0]);
        assert_eq!(from_digits(&[1], 0), Err(RadixError::InvalidBase(0)));
        assert_eq!(
            from_digits(&[1, 4], 4),
            Err(RadixError::InvalidDigit { digit: 4, base: 4 })
        );
    }

    #[test]
    fn test_from_digits_overflow() {
        assert_eq!(from_digits(&[1; 70], 2), Err(RadixError::Overflow));
        assert_eq!(
            from_digits(&digits(usize::MAX, 2).unwrap(), 2),
            Ok(usize::MAX)
        );
        let mut past_max = digits(usize::MAX, 10).unwrap();
        *past_max.last_mut().unwrap() += 1;
        assert_eq!(from_digits(&past_max, 10), Err(RadixError::Overflow));
    }
}

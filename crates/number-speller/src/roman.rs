//! Strict Roman numeral parsing.

use crate::skeleton::SpellError;

const DIGITS: [(u64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Canonical Roman spelling of `n` (1..=3999).
pub fn int_to_roman(n: u64) -> Result<String, SpellError> {
    if n == 0 || n > 3999 {
        return Err(SpellError::new(format!("{n} is out of Roman range")));
    }
    let mut n = n;
    let mut out = String::new();
    for (value, digit) in DIGITS {
        while n >= value {
            out.push_str(digit);
            n -= value;
        }
    }
    Ok(out)
}

/// Parse a Roman numeral. Non-canonical sequences ("IIII", "VX") are
/// rejected so malformed tokens reach the digit-by-digit fallback.
pub fn roman_to_int(s: &str) -> Result<u64, SpellError> {
    if s.is_empty() {
        return Err(SpellError::new("empty Roman numeral"));
    }
    let value_of = |c: char| -> Result<u64, SpellError> {
        match c {
            'I' => Ok(1),
            'V' => Ok(5),
            'X' => Ok(10),
            'L' => Ok(50),
            'C' => Ok(100),
            'D' => Ok(500),
            'M' => Ok(1000),
            _ => Err(SpellError::new(format!("invalid Roman letter '{c}'"))),
        }
    };

    let chars: Vec<char> = s.chars().collect();
    let mut total: i64 = 0;
    for i in 0..chars.len() {
        let v = value_of(chars[i])? as i64;
        let next = chars.get(i + 1).map(|c| value_of(*c)).transpose()?;
        if next.is_some_and(|next| (next as i64) > v) {
            total -= v;
        } else {
            total += v;
        }
    }
    if total <= 0 {
        return Err(SpellError::new(format!("malformed Roman numeral '{s}'")));
    }

    // Canonical form check rejects sequences like "IIII" or "VX".
    let total = total as u64;
    if int_to_roman(total)? != s {
        return Err(SpellError::new(format!("malformed Roman numeral '{s}'")));
    }
    Ok(total)
}

//! Counter formatting for list markers.

use serde::{Deserialize, Serialize};

/// Number format of a list level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NumberFormat {
    /// 1, 2, 3, ...
    #[default]
    Decimal,
    /// a, b, c, ... z, aa, ab, ...
    LowerLetter,
    /// A, B, C, ...
    UpperLetter,
    /// i, ii, iii, ...
    LowerRoman,
    /// I, II, III, ...
    UpperRoman,
    /// 1st, 2nd, 3rd, ...
    Ordinal,
    /// One, Two, Three (rendered as digits)
    CardinalText,
    /// A bullet glyph; no counter
    Bullet,
    /// No marker number
    None,
}

impl NumberFormat {
    /// Map a source format keyword. Unknown keywords fall back to decimal.
    pub fn from_keyword(keyword: &str) -> Self {
        let normalized: String = keyword
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "decimal" | "decimalzero" => NumberFormat::Decimal,
            "lowerletter" | "loweralpha" => NumberFormat::LowerLetter,
            "upperletter" | "upperalpha" => NumberFormat::UpperLetter,
            "lowerroman" => NumberFormat::LowerRoman,
            "upperroman" => NumberFormat::UpperRoman,
            "ordinal" => NumberFormat::Ordinal,
            "cardinaltext" => NumberFormat::CardinalText,
            "bullet" => NumberFormat::Bullet,
            "none" | "" => NumberFormat::None,
            other => {
                log::debug!("unknown number format '{}', using decimal", other);
                NumberFormat::Decimal
            }
        }
    }

    /// Canonical keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            NumberFormat::Decimal => "decimal",
            NumberFormat::LowerLetter => "lowerLetter",
            NumberFormat::UpperLetter => "upperLetter",
            NumberFormat::LowerRoman => "lowerRoman",
            NumberFormat::UpperRoman => "upperRoman",
            NumberFormat::Ordinal => "ordinal",
            NumberFormat::CardinalText => "cardinalText",
            NumberFormat::Bullet => "bullet",
            NumberFormat::None => "none",
        }
    }

    /// Check if markers of this format carry a running counter.
    pub fn synthesizes_counter(&self) -> bool {
        !matches!(self, NumberFormat::Bullet | NumberFormat::None)
    }
}

impl From<String> for NumberFormat {
    fn from(value: String) -> Self {
        NumberFormat::from_keyword(&value)
    }
}

impl From<NumberFormat> for String {
    fn from(value: NumberFormat) -> Self {
        value.keyword().to_string()
    }
}

/// Format a counter value.
///
/// Bullet and none formats yield an empty string.
pub fn format_counter(value: u32, format: NumberFormat) -> String {
    match format {
        NumberFormat::Decimal | NumberFormat::CardinalText => value.to_string(),
        NumberFormat::LowerLetter => to_letters(value).unwrap_or_else(|| value.to_string()),
        NumberFormat::UpperLetter => to_letters(value)
            .map(|s| s.to_ascii_uppercase())
            .unwrap_or_else(|| value.to_string()),
        NumberFormat::LowerRoman => to_roman(value)
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_else(|| value.to_string()),
        NumberFormat::UpperRoman => to_roman(value).unwrap_or_else(|| value.to_string()),
        NumberFormat::Ordinal => to_ordinal(value),
        NumberFormat::Bullet | NumberFormat::None => String::new(),
    }
}

/// Bijective base-26: 1 → a, 26 → z, 27 → aa. `None` for 0.
pub fn to_letters(value: u32) -> Option<String> {
    if value == 0 {
        return None;
    }
    let mut n = value;
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    String::from_utf8(out).ok()
}

/// Upper-case subtractive roman numerals for 1..=3999.
pub fn to_roman(value: u32) -> Option<String> {
    const TABLE: [(u32, &str); 13] = [
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
    if value == 0 || value > 3999 {
        return None;
    }
    let mut n = value;
    let mut out = String::new();
    for (weight, digits) in TABLE {
        while n >= weight {
            out.push_str(digits);
            n -= weight;
        }
    }
    Some(out)
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, ...
pub fn to_ordinal(value: u32) -> String {
    let suffix = if (11..=20).contains(&(value % 100)) {
        "th"
    } else {
        match value % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", value, suffix)
}

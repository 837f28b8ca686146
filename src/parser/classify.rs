use crate::vector::DimIndex;

/// Outcome of classifying a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Token reads as a non-negative integer dimension index
    Index(DimIndex),
    /// Anything else; the token becomes a label
    Label,
}

/// Largest token accepted as a dimension index
pub const MAX_INDEX: DimIndex = i32::MAX as DimIndex;

/// Decide whether `token` is a dimension index
///
/// Failure is the normal path for labels, so it is a variant rather than
/// an error. A leading `+` is accepted; signs, fractions, exponents and
/// values above [`MAX_INDEX`] are labels.
pub fn classify(token: &str) -> TokenClass {
    match token.parse::<DimIndex>() {
        Ok(index) if index <= MAX_INDEX => TokenClass::Index(index),
        _ => TokenClass::Label,
    }
}

/// Read a coordinate value
///
/// Decimal and exponent forms may carry a trailing `f`/`F`/`d`/`D` type
/// suffix. The only non-finite spellings are `NaN` and `Infinity`, with an
/// optional sign.
pub fn parse_value(token: &str) -> Option<f32> {
    let unsigned = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    if unsigned == "NaN" || unsigned == "Infinity" {
        return token.parse::<f32>().ok();
    }

    let number = token
        .strip_suffix(|c: char| matches!(c, 'f' | 'F' | 'd' | 'D'))
        .unwrap_or(token);
    if number
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    number.parse::<f32>().ok()
}

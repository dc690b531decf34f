//! The fixed digit set used by serial numbers.
//!
//! Uppercase alphanumerics with the look-alike pair `'0'` / `'O'` removed.
//! The order of [`ALPHABET`] is also the increment order.

/// Number of symbols in the alphabet.
pub const RADIX: usize = 34;

/// Digit symbols in increment order.
pub const ALPHABET: [char; RADIX] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// First symbol; fills positions that wrapped on carry.
pub const FIRST: char = ALPHABET[0];

/// Last symbol; incrementing it carries.
pub const LAST: char = ALPHABET[RADIX - 1];

/// Characters excluded from the alphabet.
pub const EXCLUDED: [char; 2] = ['0', 'O'];

/// Returns the alphabet index of `c`, or `None` if `c` is not a symbol.
#[must_use]
pub const fn index_of(c: char) -> Option<usize> {
    match c {
        '1'..='9' => Some(c as usize - '1' as usize),
        'A'..='N' => Some(c as usize - 'A' as usize + 9),
        'P'..='Z' => Some(c as usize - 'P' as usize + 23),
        _ => None,
    }
}

/// Returns true if `c` belongs to the alphabet.
#[must_use]
pub const fn contains(c: char) -> bool {
    index_of(c).is_some()
}

/// Returns the symbol that follows `c`, or `None` when `c` is the last
/// symbol or not a symbol at all.
#[must_use]
pub fn successor(c: char) -> Option<char> {
    index_of(c).and_then(|idx| ALPHABET.get(idx + 1).copied())
}

use core::cmp::Ordering;

use crate::digit::rank;

/// Compares two encoded identifiers.
///
/// A longer identifier is always greater than a shorter one. Identifiers of
/// equal length are compared digit by digit starting from the most
/// significant symbol, which is the *last* byte since storage is
/// least-significant first.
///
/// Digits are compared by decoded value, never by byte value: `"z"` (25) is
/// less than `"A"` (26) even though `b'z' > b'A'`. Bytes outside the alphabet
/// rank above every valid digit.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use seqid::compare;
///
/// assert_eq!(compare(b"z", b"aa"), Ordering::Less);
/// assert_eq!(compare(b"z", b"A"), Ordering::Less);
/// assert_eq!(compare(b"ab", b"ba"), Ordering::Greater);
/// ```
#[must_use]
pub fn compare(x: &[u8], y: &[u8]) -> Ordering {
    x.len().cmp(&y.len()).then_with(|| {
        x.iter()
            .rev()
            .zip(y.iter().rev())
            .map(|(&a, &b)| rank(a).cmp(&rank(b)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_symbols_follow_digit_values() {
        assert_eq!(compare(b"b", b"a"), Ordering::Greater);
        assert_eq!(compare(b"a", b"a"), Ordering::Equal);
        assert_eq!(compare(b"a", b"b"), Ordering::Less);
        assert_eq!(compare(b"z", b"A"), Ordering::Less);
        assert_eq!(compare(b"Z", b"A"), Ordering::Greater);
    }

    #[test]
    fn length_decides_before_content() {
        assert_eq!(compare(b"z", b"aa"), Ordering::Less);
        assert_eq!(compare(b"aa", b"z"), Ordering::Greater);
        assert_eq!(compare(b"ZZ", b"aaa"), Ordering::Less);
        assert_eq!(compare(b"", b"a"), Ordering::Less);
        assert_eq!(compare(b"", b""), Ordering::Equal);
    }

    #[test]
    fn most_significant_symbol_is_last() {
        // "ab" = a + b*52, "ba" = b + a*52
        assert_eq!(compare(b"ab", b"ba"), Ordering::Greater);
        assert_eq!(compare(b"Za", b"ab"), Ordering::Less);
        assert_eq!(compare(b"zz", b"Za"), Ordering::Greater);
        assert_eq!(compare(b"aZ", b"ZZ"), Ordering::Less);
    }

    #[test]
    fn does_not_use_byte_order() {
        // bytewise, "Z" < "a"
        assert!(b"Z".as_slice() < b"a".as_slice());
        assert_eq!(compare(b"Z", b"a"), Ordering::Greater);
    }
}

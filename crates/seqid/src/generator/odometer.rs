use crate::{
    SeqId,
    digit::{MAX_SYMBOL, MIN_SYMBOL, encode_digit, rank},
};

/// The next fresh identifier, advanced by carry-propagating increment.
///
/// Every identifier previously counted out is strictly less than the current
/// value, and the value's length never shrinks. Counting from `"a"` yields
/// `a, b, .., z, A, .., Z, aa, ba, .., Za, ab, ..`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Odometer {
    value: SeqId,
}

impl Odometer {
    /// An odometer starting at `"a"`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_id(SeqId::first())
    }

    /// An odometer starting at `start`.
    #[must_use]
    pub const fn from_id(start: SeqId) -> Self {
        Self { value: start }
    }

    /// The value the next [`Self::take_and_advance`] will return.
    #[must_use]
    pub const fn peek(&self) -> &SeqId {
        &self.value
    }

    /// Adds one to the current value.
    ///
    /// Maximum symbols roll over to the minimum and carry into the next
    /// symbol. When the carry runs off the most significant end a new
    /// minimum symbol is appended, the only way the length grows.
    pub fn advance(&mut self) {
        let symbols = self.value.symbols_mut();
        for symbol in symbols.iter_mut() {
            if *symbol != MAX_SYMBOL {
                *symbol = encode_digit(rank(*symbol) + 1);
                return;
            }
            *symbol = MIN_SYMBOL;
        }
        symbols.push(MIN_SYMBOL);
    }

    /// Returns a copy of the current value and advances past it.
    pub fn take_and_advance(&mut self) -> SeqId {
        let id = self.value.clone();
        self.advance();
        id
    }
}

impl Default for Odometer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn odometer(start: &str) -> Odometer {
        Odometer::from_id(start.parse().unwrap())
    }

    #[test]
    fn counts_through_the_alphabet() {
        let mut odo = Odometer::new();
        let ids: Vec<SeqId> = (0..52).map(|_| odo.take_and_advance()).collect();
        let printed: alloc::string::String = ids.iter().map(SeqId::as_str).collect();
        assert_eq!(
            printed,
            "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
        assert_eq!(odo.peek(), "aa");
    }

    #[test]
    fn carry_stops_at_first_non_max_symbol() {
        let mut odo = odometer("ZZb");
        odo.advance();
        assert_eq!(odo.peek(), "aac");

        let mut odo = odometer("zq");
        odo.advance();
        assert_eq!(odo.peek(), "Aq");
    }

    #[test]
    fn overflow_grows_by_exactly_one() {
        let mut odo = odometer("ZZZ");
        odo.advance();
        assert_eq!(odo.peek(), "aaaa");
    }

    #[test]
    fn empty_advances_to_first() {
        let mut odo = odometer("");
        assert_eq!(odo.take_and_advance(), "");
        assert_eq!(odo.peek(), "a");
    }

    #[test]
    fn strictly_increasing_and_never_shrinks() {
        let mut odo = odometer("Xa");
        let mut prev = odo.take_and_advance();
        for _ in 0..10_000 {
            let next = odo.take_and_advance();
            assert!(prev < next, "{prev} !< {next}");
            assert!(next.len() >= prev.len());
            prev = next;
        }
    }

    #[test]
    fn returned_copy_is_not_aliased() {
        let mut odo = odometer("Z");
        let taken = odo.take_and_advance();
        assert_eq!(taken, "Z");
        assert_eq!(odo.peek(), "aa");
    }
}

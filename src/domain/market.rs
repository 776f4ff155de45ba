//! Market percentage (overround) math.
//!
//! The market percentage of a book is the sum of the reciprocal of every
//! quoted price. A value near 1.0 is a near-fair market; the further above
//! 1.0, the larger the bookmaker's margin.

/// Calculate the market percentage for a set of prices.
///
/// Prices are summed in iteration order. An empty input yields `0.0`.
///
/// # Panics
///
/// Panics if any price is zero. Callers are expected to drop unpriced
/// selections before calling.
///
/// # Example
///
/// ```
/// use oddsreport::domain::calc_market_percentage;
///
/// let book = calc_market_percentage([1.95, 2.05]);
/// assert!((book - 1.000_625_390_869_293_5).abs() < 1e-12);
/// ```
#[must_use]
pub fn calc_market_percentage<I>(prices: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    prices.into_iter().fold(0.0, |value, price| {
        assert!(
            price != 0.0,
            "division by zero: market percentage requires non-zero prices"
        );
        value + 1.0 / price
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn empty_book_is_zero() {
        assert_eq!(calc_market_percentage(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn two_way_market() {
        let value = calc_market_percentage([1.95, 2.05]);
        assert!((value - 1.000_625_390_869_293_5).abs() < EPSILON);
    }

    #[test]
    fn five_way_market() {
        let value = calc_market_percentage([1.30, 7.90, 14.65, 5.90, 33.20]);
        assert!((value - 1.163_684_440_728_750_3).abs() < EPSILON);
    }

    #[test]
    fn single_even_money_price() {
        assert_eq!(calc_market_percentage([2.0]), 0.5);
    }

    #[test]
    fn accepts_lazy_iterators() {
        let cents = [195_i64, 205];
        let value = calc_market_percentage(cents.iter().map(|c| *c as f64 / 100.0));
        assert!((value - 1.000_625_390_869_293_5).abs() < EPSILON);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn zero_price_is_a_programming_error() {
        let _ = calc_market_percentage([2.0, 0.0]);
    }
}

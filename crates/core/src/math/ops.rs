//! Arithmetic helpers.

use rust_decimal::{Decimal, MathematicalOps};

use super::error::{MathError, MathResult};

/// Adds two numbers.
#[must_use]
pub fn add(a: Decimal, b: Decimal) -> Decimal {
    a + b
}

/// Multiplies two numbers.
#[must_use]
pub fn multiply(a: Decimal, b: Decimal) -> Decimal {
    a * b
}

/// Sums `values`, returning zero for an empty slice.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if the sum leaves the decimal range.
pub fn calculate_total(values: &[Decimal]) -> MathResult<Decimal> {
    values.iter().try_fold(Decimal::ZERO, |sum, value| {
        sum.checked_add(*value).ok_or(MathError::Overflow)
    })
}

/// Calculates the arithmetic mean of `numbers`.
///
/// Accepts anything convertible to `Decimal`. For `f64` input, NaN and
/// infinities do not convert and are reported as [`MathError::InvalidType`].
///
/// # Errors
///
/// - [`MathError::EmptyInput`] if `numbers` is empty.
/// - [`MathError::InvalidType`] if an element is not a finite number.
/// - [`MathError::Overflow`] if the sum leaves the decimal range.
pub fn calculate_average<T>(numbers: &[T]) -> MathResult<Decimal>
where
    T: Copy + TryInto<Decimal>,
{
    if numbers.is_empty() {
        return Err(MathError::EmptyInput);
    }

    let mut sum = Decimal::ZERO;
    for (index, number) in numbers.iter().enumerate() {
        let value: Decimal = (*number)
            .try_into()
            .map_err(|_| MathError::InvalidType { index })?;
        sum = sum.checked_add(value).ok_or(MathError::Overflow)?;
    }

    sum.checked_div(Decimal::from(numbers.len()))
        .ok_or(MathError::Overflow)
}

/// Calculates the percentage change from `old_value` to `new_value`.
///
/// Positive for an increase, negative for a decrease.
///
/// # Errors
///
/// Returns [`MathError::DivisionByZero`] when `old_value` is zero.
pub fn percentage_change(old_value: Decimal, new_value: Decimal) -> MathResult<Decimal> {
    if old_value.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    new_value
        .checked_sub(old_value)
        .and_then(|delta| delta.checked_div(old_value))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(MathError::Overflow)
}

/// Calculates the savings rate as a percentage of income.
///
/// Non-positive income yields zero rather than an error.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if an intermediate result leaves the
/// decimal range.
pub fn calculate_savings_rate(income: Decimal, expenses: Decimal) -> MathResult<Decimal> {
    if income <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    income
        .checked_sub(expenses)
        .and_then(|savings| savings.checked_div(income))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(MathError::Overflow)
}

/// Calculates `principal * (1 + rate)^years`.
///
/// `rate` is a fraction, e.g. `0.07` for 7% per year.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if the result leaves the decimal range.
pub fn calculate_compound_growth(
    principal: Decimal,
    rate: Decimal,
    years: u32,
) -> MathResult<Decimal> {
    let factor = Decimal::ONE
        .checked_add(rate)
        .and_then(|base| base.checked_powi(i64::from(years)))
        .ok_or(MathError::Overflow)?;

    principal.checked_mul(factor).ok_or(MathError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_and_multiply() {
        assert_eq!(add(dec!(2), dec!(3)), dec!(5));
        assert_eq!(add(dec!(-1.5), dec!(0.5)), dec!(-1));
        assert_eq!(multiply(dec!(4), dec!(2.5)), dec!(10));
        assert_eq!(multiply(dec!(-3), dec!(0)), dec!(0));
    }

    #[test]
    fn test_average_of_decimals() {
        let avg = calculate_average(&[dec!(100.00), dec!(25.00)]).unwrap();
        assert_eq!(avg, dec!(62.5));
    }

    #[test]
    fn test_average_of_integers() {
        assert_eq!(calculate_average(&[1i64, 2, 3, 4]).unwrap(), dec!(2.5));
    }

    #[test]
    fn test_average_of_floats() {
        assert_eq!(calculate_average(&[1.5f64, 2.5]).unwrap(), dec!(2));
    }

    #[test]
    fn test_average_empty() {
        let empty: [Decimal; 0] = [];
        assert_eq!(calculate_average(&empty), Err(MathError::EmptyInput));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_average_rejects_non_numeric(#[case] bad: f64) {
        assert_eq!(
            calculate_average(&[1.0, 2.0, bad]),
            Err(MathError::InvalidType { index: 2 })
        );
    }

    #[rstest]
    #[case(dec!(100), dec!(120), dec!(20))]
    #[case(dec!(50), dec!(25), dec!(-50))]
    #[case(dec!(80), dec!(80), dec!(0))]
    #[case(dec!(-10), dec!(-5), dec!(-50))]
    fn test_percentage_change(#[case] old: Decimal, #[case] new: Decimal, #[case] expected: Decimal) {
        assert_eq!(percentage_change(old, new).unwrap(), expected);
    }

    #[test]
    fn test_percentage_change_from_zero() {
        assert_eq!(
            percentage_change(Decimal::ZERO, dec!(10)),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_savings_rate() {
        assert_eq!(calculate_savings_rate(dec!(5000), dec!(3200)), Ok(dec!(36)));
        assert_eq!(calculate_savings_rate(dec!(1000), dec!(1500)), Ok(dec!(-50)));
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-100))]
    fn test_savings_rate_without_income(#[case] income: Decimal) {
        assert_eq!(calculate_savings_rate(income, dec!(250)), Ok(Decimal::ZERO));
    }

    #[rstest]
    #[case(dec!(1), Decimal::MIN)]
    #[case(dec!(0.0001), Decimal::MIN)]
    #[case(Decimal::MAX, Decimal::MIN)]
    fn test_savings_rate_overflow(#[case] income: Decimal, #[case] expenses: Decimal) {
        assert_eq!(
            calculate_savings_rate(income, expenses),
            Err(MathError::Overflow)
        );
    }

    #[test]
    fn test_total() {
        assert_eq!(calculate_total(&[]), Ok(Decimal::ZERO));
        assert_eq!(
            calculate_total(&[dec!(100.00), dec!(50.00), dec!(-25.50)]),
            Ok(dec!(124.50))
        );
        assert_eq!(
            calculate_total(&[Decimal::MAX, Decimal::MAX]),
            Err(MathError::Overflow)
        );
        assert_eq!(
            calculate_total(&[Decimal::MAX, dec!(-1), dec!(1)]),
            Ok(Decimal::MAX)
        );
    }

    #[test]
    fn test_compound_growth() {
        let grown = calculate_compound_growth(dec!(1000), dec!(0.07), 10).unwrap();
        assert_eq!(grown.round_dp(2), dec!(1967.15));
        assert_eq!(
            calculate_compound_growth(dec!(500), dec!(0.1), 0).unwrap(),
            dec!(500)
        );
        assert_eq!(
            calculate_compound_growth(dec!(100), dec!(0.5), 2).unwrap(),
            dec!(225)
        );
    }

    #[test]
    fn test_compound_growth_overflow() {
        assert_eq!(
            calculate_compound_growth(Decimal::MAX, dec!(1), 200),
            Err(MathError::Overflow)
        );
    }
}

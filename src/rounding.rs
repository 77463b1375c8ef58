//! Fixed-precision rounding shared by every calculator.
//!
//! All published figures go through [`round_to`] so that fixtures produced
//! by other implementations of the engine compare bit-for-bit. Rounding is
//! half-away-from-zero, which is what [`f64::round`] does.
//!
//! | Quantity | Helper | Places |
//! |---|---|---|
//! | currency, ratios | [`round_currency`] | 2 |
//! | months, percentages, price-to-value | [`round_tenths`] | 1 |
//! | perceived value | [`round_whole`] | 0 |

/// Decimal places used for currency amounts and LTV:CAC ratios.
pub const CURRENCY_PLACES: u32 = 2;

/// Decimal places used for months, retention percentages and offer ratios.
pub const TENTHS_PLACES: u32 = 1;

/// Round `value` to `places` decimal places, half away from zero.
///
/// Non-finite inputs are returned unchanged so that sentinels such as
/// `f64::INFINITY` survive rounding.
///
/// # Examples
///
/// ```rust
/// use unit_economics::rounding::round_to;
///
/// assert_eq!(round_to(2.5, 0), 3.0);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// assert_eq!(round_to(1.234, 2), 1.23);
/// assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Round to two decimal places.
pub fn round_currency(value: f64) -> f64 {
    round_to(value, CURRENCY_PLACES)
}

/// Round to one decimal place.
pub fn round_tenths(value: f64) -> f64 {
    round_to(value, TENTHS_PLACES)
}

/// Round to the nearest whole number.
pub fn round_whole(value: f64) -> f64 {
    round_to(value, 0)
}

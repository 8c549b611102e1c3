//! Fixed-point token amounts.
//!
//! All amounts are raw `u128` integers scaled by 10^18 (18 decimals), so
//! supply and balance accounting stays exact — no floating point anywhere.

/// Number of decimal places in the token's fixed-point representation.
pub const DECIMALS: u8 = 18;

/// One whole token expressed in raw units (10^18).
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// Convert a whole-token count into raw units.
///
/// Cannot overflow: `u64::MAX * 10^18` fits comfortably in a `u128`.
pub fn from_whole(whole: u64) -> u128 {
    whole as u128 * UNIT
}

/// Render a raw amount as a decimal string, trimming trailing zeros from
/// the fractional part (`1500000000000000000` → `"1.5"`).
pub fn to_decimal_string(raw: u128) -> String {
    let whole = raw / UNIT;
    let frac = raw % UNIT;
    if frac == 0 {
        return whole.to_string();
    }
    let frac_str = format!("{frac:018}");
    format!("{}.{}", whole, frac_str.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_matches_decimals() {
        assert_eq!(UNIT, 10u128.pow(DECIMALS as u32));
    }

    #[test]
    fn from_whole_scales_by_unit() {
        assert_eq!(from_whole(0), 0);
        assert_eq!(from_whole(1), UNIT);
        assert_eq!(from_whole(10_000), 10_000 * UNIT);
    }

    #[test]
    fn decimal_string_trims_fraction() {
        assert_eq!(to_decimal_string(0), "0");
        assert_eq!(to_decimal_string(UNIT), "1");
        assert_eq!(to_decimal_string(UNIT + UNIT / 2), "1.5");
        assert_eq!(to_decimal_string(1), "0.000000000000000001");
    }
}

use super::{PricingError, PricingResult};

/// Normalize a raw observation to a price per unit.
///
/// Fails when `units` is zero, negative, or not finite rather than
/// producing infinity or NaN. The insert boundary validates the same
/// invariant; this guard also runs on every read so a bad row can
/// never leak a non-finite value into a response.
pub fn unit_price(total_price: f64, units: f64) -> PricingResult<f64> {
    if !units.is_finite() || units <= 0.0 {
        return Err(PricingError::NonPositiveUnits(units));
    }
    Ok(total_price / units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price_identity() {
        assert_eq!(unit_price(4.0, 2.0).unwrap(), 2.0);
        assert_eq!(unit_price(4.5, 2.0).unwrap(), 2.25);
        assert_eq!(unit_price(0.0, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_units_fails() {
        assert!(matches!(
            unit_price(4.0, 0.0),
            Err(PricingError::NonPositiveUnits(_))
        ));
    }

    #[test]
    fn test_negative_units_fails() {
        assert!(matches!(
            unit_price(4.0, -2.0),
            Err(PricingError::NonPositiveUnits(_))
        ));
    }

    #[test]
    fn test_nan_units_fails() {
        assert!(unit_price(4.0, f64::NAN).is_err());
        assert!(unit_price(4.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_never_returns_non_finite() {
        // Any units value that would divide to infinity is rejected up front.
        for units in [0.0, -0.0, -1.0, f64::NAN] {
            if let Ok(v) = unit_price(1.0, units) {
                assert!(v.is_finite());
            }
        }
    }
}

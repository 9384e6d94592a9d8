//! Hick's-law response-time model.

/// Linear-in-bits model of choice reaction time.
///
/// The predicted time is `base_ms + bits_ms * log2(n + 1)`, where `n` is
/// the number of alternatives the user has to discriminate between.
///
/// ### Fields
/// - `base_ms` - Base reaction time in milliseconds (`a`).
/// - `bits_ms` - Cost per bit of choice information in milliseconds (`b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HickModel {
    pub base_ms: f64,
    pub bits_ms: f64,
}

impl Default for HickModel {
    fn default() -> Self {
        Self {
            base_ms: 50.0,
            bits_ms: 150.0,
        }
    }
}

impl HickModel {
    pub fn new(base_ms: f64, bits_ms: f64) -> Self {
        Self { base_ms, bits_ms }
    }

    /// Predicts the response time for `alternatives` choices.
    ///
    /// With no alternatives `log2(1) = 0`, so the result is `base_ms`.
    ///
    /// ### Parameters
    /// - `alternatives` - Number of leaves sharing the target's depth.
    ///
    /// ### Returns
    /// The predicted response time in milliseconds.
    pub fn predict_ms(&self, alternatives: usize) -> f64 {
        self.base_ms + self.bits_ms * (alternatives as f64 + 1.0).log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn zero_alternatives_predicts_base_time() {
        let model = HickModel::default();
        assert_eq!(model.predict_ms(0), 50.0);
    }

    #[test]
    fn prediction_follows_log2_formula() {
        let model = HickModel::default();
        for n in [1usize, 2, 3, 7, 15, 100] {
            let expected = 50.0 + 150.0 * ((n + 1) as f64).log2();
            assert!(
                (model.predict_ms(n) - expected).abs() < EPS,
                "n={n}: got {}, expected {expected}",
                model.predict_ms(n)
            );
        }
    }

    #[test]
    fn powers_of_two_minus_one_give_whole_bits() {
        let model = HickModel::default();
        // 1 alternative -> 1 bit, 3 -> 2 bits, 7 -> 3 bits.
        assert!((model.predict_ms(1) - 200.0).abs() < EPS);
        assert!((model.predict_ms(3) - 350.0).abs() < EPS);
        assert!((model.predict_ms(7) - 500.0).abs() < EPS);
    }

    #[test]
    fn two_alternatives_matches_reference_value() {
        let model = HickModel::default();
        assert!((model.predict_ms(2) - 287.744_375).abs() < 1e-3);
    }

    #[test]
    fn custom_constants_are_used() {
        let model = HickModel::new(0.0, 1.0);
        assert!((model.predict_ms(3) - 2.0).abs() < EPS);
        assert_eq!(model.predict_ms(0), 0.0);
    }

    #[test]
    fn prediction_grows_with_alternatives() {
        let model = HickModel::default();
        let mut last = model.predict_ms(0);
        for n in 1..50 {
            let next = model.predict_ms(n);
            assert!(next > last);
            last = next;
        }
    }
}

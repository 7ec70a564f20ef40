use serde::Deserialize;

/// Shapes normalized progress before it is scaled to the target value.
///
/// Every curve maps 0 to 0 and 1 to 1 and never decreases in between, so a
/// count-up driven by any of them stays monotonic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        // NaN compares false everywhere, treat it as "not started"
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseOutQuad,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{:?}", easing);
        }
    }

    #[test]
    fn curves_never_decrease() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for step in 1..=1000 {
                let next = easing.apply(step as f64 / 1000.0);
                assert!(next >= prev, "{:?} dipped at step {}", easing, step);
                prev = next;
            }
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert!((easing.apply(7.5) - 1.0).abs() < 1e-12);
            assert_eq!(easing.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::default(), Easing::Linear);
    }
}

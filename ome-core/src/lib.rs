//! OME Core - Fundamental numeric types
//!
//! This crate provides the numeric types shared by the OME unit crates:
//! - `Number`: Exact decimal numbers for lossless metric rescaling
//! - `NumberError`: Parse and range failures

mod number;

pub use number::{Number, NumberError, DEFAULT_PRECISION};

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;

        fn num(s: &str) -> Number {
            s.parse().unwrap()
        }

        #[test]
        fn test_from_i64() {
            let n = Number::from_i64(42);
            assert_eq!(n, num("42"));
            assert_eq!(n.to_string(), "42");
        }

        #[test]
        fn test_from_str_decimal() {
            let n = num("3.14");
            assert_eq!(n.to_string(), "3.14");
            assert_eq!(num("-0.005").to_string(), "-0.005");
            assert_eq!(num(".5"), num("0.5"));
        }

        #[test]
        fn test_from_str_scientific() {
            assert_eq!(num("1.5e2"), Number::from_i64(150));
            assert_eq!(num("1.5E-2"), num("0.015"));
            // Integer mantissa keeps every digit
            let avogadro = num("602214076e15");
            assert_eq!(avogadro.to_string(), "602214076000000000000000");
        }

        #[test]
        fn test_from_str_rejects_garbage() {
            for bad in ["", "-", "1.2.3", "abc", "1e", "--1", "1/3", "1 kW"] {
                assert!(
                    matches!(bad.parse::<Number>(), Err(NumberError::ParseError(_))),
                    "{:?} should not parse",
                    bad
                );
            }
        }

        #[test]
        fn test_from_f64_uses_shortest_decimal() {
            assert_eq!(Number::from_f64(0.1).unwrap(), num("0.1"));
            assert_eq!(Number::from_f64(-2500.0).unwrap(), Number::from_i64(-2500));
        }

        #[test]
        fn test_from_f64_non_finite() {
            assert!(matches!(Number::from_f64(f64::INFINITY), Err(NumberError::NonFinite(_))));
            assert!(matches!(Number::from_f64(f64::NAN), Err(NumberError::NonFinite(_))));
        }

        #[test]
        fn test_scale_pow10_is_exact() {
            let n = num("1.5");
            assert_eq!(n.scale_pow10(3), Number::from_i64(1500));
            assert_eq!(n.scale_pow10(-48), num("1.5e-48"));
            assert_eq!(n.scale_pow10(-48).scale_pow10(48), n);
            assert_eq!(n.scale_pow10(0), n);
        }

        #[test]
        fn test_scale_zero() {
            let zero = Number::from_i64(0);
            assert!(zero.scale_pow10(24).is_zero());
            assert!(!zero.is_negative());
        }

        #[test]
        fn test_to_f64() {
            assert_eq!(num("0.1").to_f64(), Some(0.1));
            assert_eq!(num("-1.5e-24").to_f64(), Some(-1.5e-24));
            assert_eq!(num("1e400").to_f64(), None);
            assert_eq!(num("1e-400").to_f64(), None);
            assert_eq!(num("-1e-400").to_f64(), None);
            assert_eq!(Number::from_i64(0).to_f64(), Some(0.0));
        }

        #[test]
        fn test_exponent_out_of_range_rejected() {
            for bad in ["0.1e-9223372036854775808", "1e9223372036854775800", "0.1e-2147483648"] {
                assert!(
                    matches!(bad.parse::<Number>(), Err(NumberError::ParseError(_))),
                    "{:?} should not parse",
                    bad
                );
            }
            assert!(serde_json::from_str::<Number>("\"1e100000000000000000\"").is_err());
        }

        #[test]
        fn test_scale_near_exponent_limit() {
            let n = num("1e2147483647");
            assert_eq!(n.scale_pow10(24).to_string(), "1e2147483671");
            assert_eq!(n.scale_pow10(24).scale_pow10(-24), n);
        }

        #[test]
        fn test_display_wide_exponents_stays_bounded() {
            let huge = num("1e2000000000");
            assert_eq!(huge.to_string(), "1e2000000000");
            assert_eq!(num("-25e-100").to_string(), "-25e-100");
            assert_eq!(num(&huge.to_string()), huge);

            let json = serde_json::to_string(&huge).unwrap();
            assert_eq!(json, "\"1e2000000000\"");
            assert_eq!(serde_json::from_str::<Number>(&json).unwrap(), huge);
        }

        #[test]
        fn test_display_small_values() {
            assert_eq!(num("1e-3").to_string(), "0.001");
            assert_eq!(num("-12.5e-1").to_string(), "-1.25");
            assert_eq!(num("1000").to_string(), "1000");
        }

        #[test]
        fn test_ordering() {
            assert!(num("0.001") < num("0.01"));
            assert!(num("-5") < Number::from_i64(0));
            assert!(num("-5").is_negative());
        }

        #[test]
        fn test_serde_as_string() {
            let n = num("1.25e-6");
            let json = serde_json::to_string(&n).unwrap();
            assert_eq!(json, "\"0.00000125\"");
            let back: Number = serde_json::from_str(&json).unwrap();
            assert_eq!(back, n);
        }
    }
}

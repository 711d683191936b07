use std::f64::consts::SQRT_2;

use crate::error::SizingErr;
use crate::power::error::PowerDomainErr;
use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::function::erf::erfc;

pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

fn central_t(df: f64) -> Result<StudentsT, SizingErr> {
    if df <= 0.0 || df.is_nan() {
        return Err(PowerDomainErr::NonPositiveDf(df).into());
    }
    StudentsT::new(0.0, 1.0, df).map_err(|_| PowerDomainErr::NonPositiveDf(df).into())
}

#[cfg(test)]
pub fn t_cdf(x: f64, df: f64) -> Result<f64, SizingErr> {
    Ok(central_t(df)?.cdf(x))
}

/// Quantile of the central t distribution with `df` degrees of freedom
pub fn t_quantile(p: f64, df: f64) -> Result<f64, SizingErr> {
    if p <= 0.0 || p >= 1.0 || p.is_nan() {
        return Err(PowerDomainErr::QuantileOutOfBounds(p).into());
    }
    let q = central_t(df)?.inverse_cdf(p);
    if q.is_nan() {
        return Err(PowerDomainErr::NonFinite {
            name: "t quantile",
            value: q,
        }
        .into());
    }
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_normal_cdf_values() {
        assert!((std_normal_cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((std_normal_cdf(1.959964) - 0.975).abs() < 1e-6);
        assert!((std_normal_cdf(-1.0) - 0.1586553).abs() < 1e-6);
    }

    #[test]
    fn std_normal_cdf_symmetric() {
        assert!((std_normal_cdf(1.3) + std_normal_cdf(-1.3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn t_quantile_value() {
        // t_{0.975, 10} from standard tables
        let q = t_quantile(0.975, 10.).expect("failed to compute t quantile");
        assert!((q - 2.228139).abs() < 1e-4);
    }

    #[test]
    fn t_quantile_inverts_cdf() {
        let q = t_quantile(0.9, 7.5).expect("failed to compute t quantile");
        let p = t_cdf(q, 7.5).expect("failed to compute t cdf");
        assert!((p - 0.9).abs() < 1e-8);
    }

    #[test]
    fn t_quantile_bad_df() {
        if let Err(e) = t_quantile(0.975, 0.) {
            assert_eq!(
                String::from(
                    "while evaluating power function: degrees of freedom \
                    should be positive; got 0"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}

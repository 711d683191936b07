use statrs::function::gamma::ln_gamma;

use crate::error::SizingErr;
use crate::power::distributions::std_normal_cdf;
use crate::power::error::PowerDomainErr;
use crate::power::quadrature::Quadrature;

// Integration range is cut where the log density has dropped TAIL below its mode
const TAIL: f64 = 40.0;
const PANELS: usize = 16;

/// Bounds on y = ln U, U = sqrt(chi2(df) / df), outside of which the density
/// of y is below exp(-TAIL) times its value at the mode (y = 0).
///
/// With f(y) = df * (e^{2y} - 1 - 2y) / 2 the log-density drop from the mode:
///   y > 0: f(y) >= df * y^2
///   -1/2 <= y < 0: f(y) >= df * y^2 / e
///   y < 0: f(y) >= df * (-1 - 2y) / 2
fn log_chi_bounds(df: f64) -> (f64, f64) {
    let near = (TAIL * std::f64::consts::E / df).sqrt();
    let lower = if near <= 0.5 {
        -near
    } else {
        -(TAIL / df + 0.5)
    };
    let upper = (TAIL / df).sqrt();
    (lower, upper)
}

/// Cumulative distribution function of the noncentral t distribution with
/// `df` degrees of freedom and noncentrality `delta`, evaluated at `t`.
///
/// T = (Z + delta) / U with Z standard normal and U = sqrt(chi2(df) / df), so
///   P(T <= t) = E[Phi(t * U - delta)]
/// The expectation is taken over y = ln U, whose density
///   exp(log_norm + df * y - df * e^{2y} / 2)
/// is smooth and unimodal even for fractional df, with a composite
/// Gauss-Legendre rule.
///
/// See http://faculty.washington.edu/fscholz/DATAFILES498B2008/NoncentralT.pdf
pub fn noncentral_t_cdf(t: f64, df: f64, delta: f64) -> Result<f64, SizingErr> {
    //----------------------------------------
    // Check arguments
    if df <= 0.0 || df.is_nan() {
        return Err(PowerDomainErr::NonPositiveDf(df).into());
    }
    if !df.is_finite() {
        return Err(PowerDomainErr::NonFinite {
            name: "degrees of freedom",
            value: df,
        }
        .into());
    }
    if !delta.is_finite() {
        return Err(PowerDomainErr::NonFinite {
            name: "noncentrality",
            value: delta,
        }
        .into());
    }
    if t.is_nan() {
        return Err(PowerDomainErr::NonFinite {
            name: "t",
            value: t,
        }
        .into());
    }
    if t == f64::INFINITY {
        return Ok(1.0);
    }
    if t == f64::NEG_INFINITY {
        return Ok(0.0);
    }

    //----------------------------------------
    // Integrate over ln U
    let half_df = df / 2.0;
    let log_norm = (2.0_f64).ln() + half_df * half_df.ln() - ln_gamma(half_df);
    let (lower, upper) = log_chi_bounds(df);
    let quad = Quadrature::new(lower, upper, PANELS);

    let integral = quad.integrate(|y| {
        let u = y.exp();
        let log_density = log_norm + df * y - df * u * u / 2.0;
        log_density.exp() * std_normal_cdf(t * u - delta)
    });

    Ok(integral.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::distributions::t_cdf;

    #[test]
    fn central_case_matches_t() {
        for &df in &[2.0, 5.5, 30.0, 3_000.0] {
            for &t in &[-3.0, -1.2, 0.0, 0.4, 2.5] {
                let nct = noncentral_t_cdf(t, df, 0.0).expect("failed to compute nct cdf");
                let ct = t_cdf(t, df).expect("failed to compute t cdf");
                assert!((nct - ct).abs() < 1e-8, "df {df}, t {t}: {nct} vs {ct}");
            }
        }
    }

    #[test]
    fn reflection() {
        let a = noncentral_t_cdf(1.7, 12., 2.3).unwrap();
        let b = noncentral_t_cdf(-1.7, 12., -2.3).unwrap();
        assert!((a + b - 1.0).abs() < 1e-8);
    }

    #[test]
    fn large_df_approaches_normal() {
        // With df -> infinity, T -> N(delta, 1)
        let p = noncentral_t_cdf(2.0, 1e6, 1.0).unwrap();
        assert!((p - std_normal_cdf(1.0)).abs() < 1e-4);
    }

    #[test]
    fn increasing_in_t() {
        let mut prev = 0.0;
        for i in -20..=20 {
            let p = noncentral_t_cdf(i as f64 * 0.5, 8., 1.5).unwrap();
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn decreasing_in_delta() {
        let p_small = noncentral_t_cdf(2.0, 20., 0.5).unwrap();
        let p_large = noncentral_t_cdf(2.0, 20., 3.0).unwrap();
        assert!(p_large < p_small);
    }

    #[test]
    fn infinite_t() {
        assert_eq!(noncentral_t_cdf(f64::INFINITY, 4., 1.).unwrap(), 1.0);
        assert_eq!(noncentral_t_cdf(f64::NEG_INFINITY, 4., 1.).unwrap(), 0.0);
    }

    #[test]
    fn bad_df() {
        if let Err(e) = noncentral_t_cdf(1.0, -2.0, 0.0) {
            assert_eq!(
                String::from(
                    "while evaluating power function: degrees of freedom \
                    should be positive; got -2"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}

//! Tange et al. (2009) Grüneisen parameter,
//! `γ = γ0 (1 + a ((V/V0)^b - 1))`.

use pvt_core::Scalar;

use super::debye_thermal_pressure;
use crate::params::{MaterialConstants, param_set};

param_set!(
    TangeParams, "tange" {
        v0,
        gamma0,
        a,
        b,
        theta0,
    }
);

pub fn gruneisen<S: Scalar>(v: &S, v0: &S, gamma0: &S, a: &S, b: &S) -> S {
    let x = v.clone() / v0.clone();
    gamma0.clone() * (a.clone() * (x.pow(b) - 1.0) + 1.0)
}

pub fn debye_temperature<S: Scalar>(v: &S, v0: &S, gamma0: &S, a: &S, b: &S, theta0: &S) -> S {
    let x = v.clone() / v0.clone();
    let gamma = gruneisen(v, v0, gamma0, a, b);
    let exponent = (a.clone() - 1.0) * gamma0.clone();
    theta0.clone() * x.pow(&exponent) * ((gamma0.clone() - gamma) / b.clone()).exp()
}

pub fn pressure<S: Scalar>(v: &S, temp: &S, p: &TangeParams<S>, mat: &MaterialConstants) -> S {
    let gamma = gruneisen(v, &p.v0, &p.gamma0, &p.a, &p.b);
    let theta = debye_temperature(v, &p.v0, &p.gamma0, &p.a, &p.b, &p.theta0);
    debye_thermal_pressure(v, temp, &gamma, &theta, mat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvt_core::numeric::central_difference;
    use pvt_core::CoreError;

    // MgO, Tange et al. 2009
    const P: TangeParams<f64> = TangeParams {
        v0: 74.698,
        gamma0: 1.431,
        a: 0.29,
        b: 3.5,
        theta0: 761.0,
    };

    #[test]
    fn debye_temperature_consistent_with_gruneisen() {
        // γ = -d ln θ / d ln V
        let v = 65.0;
        let dlnth = central_difference(
            |x: f64| {
                Ok::<_, CoreError>(
                    debye_temperature(&x.exp(), &P.v0, &P.gamma0, &P.a, &P.b, &P.theta0).ln(),
                )
            },
            v.ln(),
            1e-5,
        )
        .unwrap();
        let gamma = gruneisen(&v, &P.v0, &P.gamma0, &P.a, &P.b);
        assert!((-dlnth - gamma).abs() < 1e-7);
    }

    #[test]
    fn positive_above_reference() {
        let mat = MaterialConstants::new(2.0, 4.0);
        assert!(pressure(&70.0, &2000.0, &P, &mat) > 0.0);
        assert!(pressure(&70.0, &200.0, &P, &mat) < 0.0);
    }
}

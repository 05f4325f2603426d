//! Intrinsic anharmonic pressure.

use std::fmt;
use std::str::FromStr;

use pvt_core::Scalar;
use pvt_core::constants::PA_TO_GPA;
use pvt_core::units::vol_uc_to_mol;

use crate::error::{EosError, EosResult};
use crate::params::{MaterialConstants, param_set};

param_set!(
    /// Zharkov anharmonicity `a = a0 (V/V0)^m` (Dorogokupets and Oganov 2007).
    ZharkovAnharmonicParams, "zharkov_panh" {
        v0,
        /// Anharmonicity parameter at `v0` (1/K)
        a0,
        m,
    }
);

/// `3nR/2 · a m / V_mol · (T² - T_ref²)` in GPa.
pub fn zharkov_pressure<S: Scalar>(
    v: &S,
    temp: &S,
    p: &ZharkovAnharmonicParams<S>,
    mat: &MaterialConstants,
) -> S {
    let v_mol = vol_uc_to_mol(v, mat.z);
    let a = p.a0.clone() * (v.clone() / p.v0.clone()).pow(&p.m);
    let dt2 = temp.powi(2) - mat.t_ref * mat.t_ref;
    a * p.m.clone() / v_mol * dt2 * (mat.three_r * mat.n / 2.0 * PA_TO_GPA)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnharmonicFamily {
    #[cfg_attr(feature = "serde", serde(rename = "zharkov_panh"))]
    Zharkov,
}

impl AnharmonicFamily {
    pub fn tag(&self) -> &'static str {
        ZharkovAnharmonicParams::<f64>::FAMILY
    }

    pub fn param_names(&self) -> &'static [&'static str] {
        ZharkovAnharmonicParams::<f64>::NAMES
    }
}

impl fmt::Display for AnharmonicFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AnharmonicFamily {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zharkov_panh" | "zharkov" => Ok(Self::Zharkov),
            _ => Err(EosError::UnknownFamily {
                kind: "anharmonic",
                tag: s.to_string(),
            }),
        }
    }
}

/// Parameters of the anharmonic term.
#[derive(Clone, Debug, PartialEq)]
pub enum AnharmonicParams<S> {
    Zharkov(ZharkovAnharmonicParams<S>),
}

impl<S: Scalar> AnharmonicParams<S> {
    pub fn from_values(family: AnharmonicFamily, values: &[S]) -> EosResult<Self> {
        match family {
            AnharmonicFamily::Zharkov => {
                Ok(Self::Zharkov(ZharkovAnharmonicParams::from_slice(values)?))
            }
        }
    }

    pub fn family(&self) -> AnharmonicFamily {
        match self {
            Self::Zharkov(_) => AnharmonicFamily::Zharkov,
        }
    }

    pub fn to_vec(&self) -> Vec<S> {
        match self {
            Self::Zharkov(p) => p.to_vec(),
        }
    }

    pub fn map<T, F: Fn(&S) -> T>(&self, f: F) -> AnharmonicParams<T> {
        match self {
            Self::Zharkov(p) => AnharmonicParams::Zharkov(p.map(f)),
        }
    }

    pub fn pressure(&self, v: &S, temp: &S, mat: &MaterialConstants) -> S {
        match self {
            Self::Zharkov(p) => zharkov_pressure(v, temp, p, mat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Au, Dorogokupets and Oganov 2007
    const AU: ZharkovAnharmonicParams<f64> = ZharkovAnharmonicParams {
        v0: 67.850,
        a0: 1e-6,
        m: 0.0,
    };

    #[test]
    fn zero_exponent_gives_zero_pressure() {
        let mat = MaterialConstants::new(1.0, 4.0);
        assert_eq!(zharkov_pressure(&60.0, &2000.0, &AU, &mat), 0.0);
    }

    #[test]
    fn quadratic_in_temperature() {
        let mat = MaterialConstants::new(1.0, 4.0).with_t_ref(0.0);
        let p = ZharkovAnharmonicParams { m: 1.5, ..AU };
        let p1 = zharkov_pressure(&60.0, &1000.0, &p, &mat);
        let p2 = zharkov_pressure(&60.0, &2000.0, &p, &mat);
        assert!((p2 / p1 - 4.0).abs() < 1e-12);
        let at_ref = zharkov_pressure(&60.0, &300.0, &p, &MaterialConstants::new(1.0, 4.0));
        assert_eq!(at_ref, 0.0);
    }

    #[test]
    fn parse_tags() {
        assert_eq!(
            "Zharkov_panh".parse::<AnharmonicFamily>().unwrap(),
            AnharmonicFamily::Zharkov
        );
        assert!("unknown".parse::<AnharmonicFamily>().is_err());
    }
}

//! Electronic (free-electron) pressure.

use std::fmt;
use std::str::FromStr;

use pvt_core::Scalar;
use pvt_core::constants::PA_TO_GPA;
use pvt_core::units::vol_uc_to_mol;

use crate::error::{EosError, EosResult};
use crate::params::{MaterialConstants, param_set};

param_set!(
    /// Zharkov electronic term, `e = e0 (V/V0)^g` (Sokolova and
    /// Dorogokupets 2013).
    ZharkovElectronicParams, "zharkov_pel" {
        v0,
        e0,
        g,
    }
);

param_set!(
    /// Tsuchiya polynomial `a + bT + cT² + dT³` (GPa).
    TsuchiyaElectronicParams, "tsuchiya_pel" {
        v0,
        a,
        b,
        c,
        d,
    }
);

pub fn zharkov_pressure<S: Scalar>(
    v: &S,
    temp: &S,
    p: &ZharkovElectronicParams<S>,
    mat: &MaterialConstants,
) -> S {
    let v_mol = vol_uc_to_mol(v, mat.z);
    let e = p.e0.clone() * (v.clone() / p.v0.clone()).pow(&p.g);
    let dt2 = temp.powi(2) - mat.t_ref * mat.t_ref;
    e * p.g.clone() / v_mol * dt2 * (mat.three_r * mat.n / 2.0 * PA_TO_GPA)
}

/// Volume independent; `n`, `z` and `three_r` are not used.
pub fn tsuchiya_pressure<S: Scalar>(
    temp: &S,
    p: &TsuchiyaElectronicParams<S>,
    mat: &MaterialConstants,
) -> S {
    let poly = |t: &S| {
        p.a.clone() + p.b.clone() * t.clone() + p.c.clone() * t.powi(2) + p.d.clone() * t.powi(3)
    };
    poly(temp) - poly(&S::from_f64(mat.t_ref))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElectronicFamily {
    #[cfg_attr(feature = "serde", serde(rename = "zharkov_pel"))]
    Zharkov,
    #[cfg_attr(feature = "serde", serde(rename = "tsuchiya_pel"))]
    Tsuchiya,
}

impl ElectronicFamily {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Zharkov => ZharkovElectronicParams::<f64>::FAMILY,
            Self::Tsuchiya => TsuchiyaElectronicParams::<f64>::FAMILY,
        }
    }

    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            Self::Zharkov => ZharkovElectronicParams::<f64>::NAMES,
            Self::Tsuchiya => TsuchiyaElectronicParams::<f64>::NAMES,
        }
    }
}

impl fmt::Display for ElectronicFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ElectronicFamily {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zharkov_pel" | "zharkov" => Ok(Self::Zharkov),
            "tsuchiya_pel" | "tsuchiya" => Ok(Self::Tsuchiya),
            _ => Err(EosError::UnknownFamily {
                kind: "electronic",
                tag: s.to_string(),
            }),
        }
    }
}

/// Parameters of the electronic term.
#[derive(Clone, Debug, PartialEq)]
pub enum ElectronicParams<S> {
    Zharkov(ZharkovElectronicParams<S>),
    Tsuchiya(TsuchiyaElectronicParams<S>),
}

impl<S: Scalar> ElectronicParams<S> {
    pub fn from_values(family: ElectronicFamily, values: &[S]) -> EosResult<Self> {
        Ok(match family {
            ElectronicFamily::Zharkov => Self::Zharkov(ZharkovElectronicParams::from_slice(values)?),
            ElectronicFamily::Tsuchiya => {
                Self::Tsuchiya(TsuchiyaElectronicParams::from_slice(values)?)
            }
        })
    }

    pub fn family(&self) -> ElectronicFamily {
        match self {
            Self::Zharkov(_) => ElectronicFamily::Zharkov,
            Self::Tsuchiya(_) => ElectronicFamily::Tsuchiya,
        }
    }

    pub fn to_vec(&self) -> Vec<S> {
        match self {
            Self::Zharkov(p) => p.to_vec(),
            Self::Tsuchiya(p) => p.to_vec(),
        }
    }

    pub fn map<T, F: Fn(&S) -> T>(&self, f: F) -> ElectronicParams<T> {
        match self {
            Self::Zharkov(p) => ElectronicParams::Zharkov(p.map(f)),
            Self::Tsuchiya(p) => ElectronicParams::Tsuchiya(p.map(f)),
        }
    }

    pub fn pressure(&self, v: &S, temp: &S, mat: &MaterialConstants) -> S {
        match self {
            Self::Zharkov(p) => zharkov_pressure(v, temp, p, mat),
            Self::Tsuchiya(p) => tsuchiya_pressure(temp, p, mat),
        }
    }
}

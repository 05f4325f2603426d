//! Thermal pressure models.
//!
//! Every Debye-type family supplies a Grüneisen parameter `γ(V)` and a
//! Debye temperature `θ(V)`; the thermal pressure is then
//! `P_th = γ/V_mol (E(T) - E(T_ref))` with `E(T) = 3nR T D(θ/T)`.

pub mod alphakt;
pub mod constq;
pub mod dorogokupets2007;
pub mod dorogokupets2015;
pub mod speziale;
pub mod tange;

use std::fmt;
use std::str::FromStr;

use pvt_core::constants::PA_TO_GPA;
use pvt_core::units::vol_uc_to_mol;
use pvt_core::{QuadratureConfig, Scalar};

use crate::debye::debye_e;
use crate::error::{EosError, EosResult};
use crate::params::MaterialConstants;

pub use alphakt::AlphaKtParams;
pub use constq::ConstQParams;
pub use dorogokupets2007::Dorogokupets2007Params;
pub use dorogokupets2015::Dorogokupets2015Params;
pub use speziale::SpezialeParams;
pub use tange::TangeParams;

/// Debye thermal energy `3nR T D(θ/T)` (J/mol); zero at `T = 0`.
pub fn debye_energy<S: Scalar>(theta: &S, temp: &S, mat: &MaterialConstants) -> S {
    if temp.nominal() == 0.0 {
        return S::from_f64(0.0);
    }
    let d = debye_e(&(theta.clone() / temp.clone()));
    temp.clone() * d * (mat.three_r * mat.n)
}

/// Mie-Grüneisen thermal pressure (GPa) relative to `mat.t_ref`.
pub fn debye_thermal_pressure<S: Scalar>(
    v: &S,
    temp: &S,
    gamma: &S,
    theta: &S,
    mat: &MaterialConstants,
) -> S {
    let v_mol = vol_uc_to_mol(v, mat.z);
    let e = debye_energy(theta, temp, mat);
    let e_ref = debye_energy(theta, &S::from_f64(mat.t_ref), mat);
    gamma.clone() / v_mol * (e - e_ref) * PA_TO_GPA
}

/// Thermal family tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThermalFamily {
    ConstQ,
    Tange,
    Speziale,
    Dorogokupets2007,
    Dorogokupets2015,
    AlphaKt,
}

impl ThermalFamily {
    pub const ALL: [Self; 6] = [
        Self::ConstQ,
        Self::Tange,
        Self::Speziale,
        Self::Dorogokupets2007,
        Self::Dorogokupets2015,
        Self::AlphaKt,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::ConstQ => ConstQParams::<f64>::FAMILY,
            Self::Tange => TangeParams::<f64>::FAMILY,
            Self::Speziale => SpezialeParams::<f64>::FAMILY,
            Self::Dorogokupets2007 => Dorogokupets2007Params::<f64>::FAMILY,
            Self::Dorogokupets2015 => Dorogokupets2015Params::<f64>::FAMILY,
            Self::AlphaKt => AlphaKtParams::<f64>::FAMILY,
        }
    }

    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            Self::ConstQ => ConstQParams::<f64>::NAMES,
            Self::Tange => TangeParams::<f64>::NAMES,
            Self::Speziale => SpezialeParams::<f64>::NAMES,
            Self::Dorogokupets2007 => Dorogokupets2007Params::<f64>::NAMES,
            Self::Dorogokupets2015 => Dorogokupets2015Params::<f64>::NAMES,
            Self::AlphaKt => AlphaKtParams::<f64>::NAMES,
        }
    }
}

impl fmt::Display for ThermalFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ThermalFamily {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.tag() == wanted)
            .ok_or_else(|| EosError::UnknownFamily {
                kind: "thermal",
                tag: s.to_string(),
            })
    }
}

/// Parameters of one thermal family.
#[derive(Clone, Debug, PartialEq)]
pub enum ThermalParams<S> {
    ConstQ(ConstQParams<S>),
    Tange(TangeParams<S>),
    Speziale(SpezialeParams<S>),
    Dorogokupets2007(Dorogokupets2007Params<S>),
    Dorogokupets2015(Dorogokupets2015Params<S>),
    AlphaKt(AlphaKtParams<S>),
}

impl<S: Scalar> ThermalParams<S> {
    /// Build from values ordered as [`ThermalFamily::param_names`].
    pub fn from_values(family: ThermalFamily, values: &[S]) -> EosResult<Self> {
        Ok(match family {
            ThermalFamily::ConstQ => Self::ConstQ(ConstQParams::from_slice(values)?),
            ThermalFamily::Tange => Self::Tange(TangeParams::from_slice(values)?),
            ThermalFamily::Speziale => Self::Speziale(SpezialeParams::from_slice(values)?),
            ThermalFamily::Dorogokupets2007 => {
                Self::Dorogokupets2007(Dorogokupets2007Params::from_slice(values)?)
            }
            ThermalFamily::Dorogokupets2015 => {
                Self::Dorogokupets2015(Dorogokupets2015Params::from_slice(values)?)
            }
            ThermalFamily::AlphaKt => Self::AlphaKt(AlphaKtParams::from_slice(values)?),
        })
    }

    pub fn family(&self) -> ThermalFamily {
        match self {
            Self::ConstQ(_) => ThermalFamily::ConstQ,
            Self::Tange(_) => ThermalFamily::Tange,
            Self::Speziale(_) => ThermalFamily::Speziale,
            Self::Dorogokupets2007(_) => ThermalFamily::Dorogokupets2007,
            Self::Dorogokupets2015(_) => ThermalFamily::Dorogokupets2015,
            Self::AlphaKt(_) => ThermalFamily::AlphaKt,
        }
    }

    pub fn to_vec(&self) -> Vec<S> {
        match self {
            Self::ConstQ(p) => p.to_vec(),
            Self::Tange(p) => p.to_vec(),
            Self::Speziale(p) => p.to_vec(),
            Self::Dorogokupets2007(p) => p.to_vec(),
            Self::Dorogokupets2015(p) => p.to_vec(),
            Self::AlphaKt(p) => p.to_vec(),
        }
    }

    pub fn map<T, F: Fn(&S) -> T>(&self, f: F) -> ThermalParams<T> {
        match self {
            Self::ConstQ(p) => ThermalParams::ConstQ(p.map(f)),
            Self::Tange(p) => ThermalParams::Tange(p.map(f)),
            Self::Speziale(p) => ThermalParams::Speziale(p.map(f)),
            Self::Dorogokupets2007(p) => ThermalParams::Dorogokupets2007(p.map(f)),
            Self::Dorogokupets2015(p) => ThermalParams::Dorogokupets2015(p.map(f)),
            Self::AlphaKt(p) => ThermalParams::AlphaKt(p.map(f)),
        }
    }

    pub fn v0(&self) -> &S {
        match self {
            Self::ConstQ(p) => &p.v0,
            Self::Tange(p) => &p.v0,
            Self::Speziale(p) => &p.v0,
            Self::Dorogokupets2007(p) => &p.v0,
            Self::Dorogokupets2015(p) => &p.v0,
            Self::AlphaKt(p) => &p.v0,
        }
    }

    pub fn gruneisen(&self, v: &S) -> EosResult<S> {
        Ok(match self {
            Self::ConstQ(p) => constq::gruneisen(v, &p.v0, &p.gamma0, &p.q),
            Self::Tange(p) => tange::gruneisen(v, &p.v0, &p.gamma0, &p.a, &p.b),
            Self::Speziale(p) => speziale::gruneisen(v, &p.v0, &p.gamma0, &p.q0, &p.q1),
            Self::Dorogokupets2007(p) => {
                dorogokupets2007::gruneisen(v, &p.v0, &p.gamma0, &p.gamma_inf, &p.beta)
            }
            Self::Dorogokupets2015(p) => p.gruneisen(v),
            Self::AlphaKt(_) => {
                return Err(EosError::NotSupported {
                    what: "gruneisen parameter for alphakt",
                });
            }
        })
    }

    /// Debye temperature (K). For Dorogokupets 2015 this is the
    /// weight-averaged Einstein temperature.
    pub fn debye_temperature(&self, v: &S, quadrature: &QuadratureConfig) -> EosResult<S> {
        Ok(match self {
            Self::ConstQ(p) => constq::debye_temperature(v, &p.v0, &p.gamma0, &p.q, &p.theta0),
            Self::Tange(p) => {
                tange::debye_temperature(v, &p.v0, &p.gamma0, &p.a, &p.b, &p.theta0)
            }
            Self::Speziale(p) => speziale::debye_temperature(v, p, quadrature)?,
            Self::Dorogokupets2007(p) => dorogokupets2007::debye_temperature(
                v,
                &p.v0,
                &p.gamma0,
                &p.gamma_inf,
                &p.beta,
                &p.theta0,
            ),
            Self::Dorogokupets2015(p) => p.debye_temperature(v),
            Self::AlphaKt(_) => {
                return Err(EosError::NotSupported {
                    what: "debye temperature for alphakt",
                });
            }
        })
    }

    /// Thermal pressure (GPa) at volume `v` and temperature `temp`.
    pub fn pressure(
        &self,
        v: &S,
        temp: &S,
        mat: &MaterialConstants,
        quadrature: &QuadratureConfig,
    ) -> EosResult<S> {
        Ok(match self {
            Self::ConstQ(p) => constq::pressure(v, temp, p, mat),
            Self::Tange(p) => tange::pressure(v, temp, p, mat),
            Self::Speziale(p) => speziale::pressure(v, temp, p, mat, quadrature)?,
            Self::Dorogokupets2007(p) => dorogokupets2007::pressure(v, temp, p, mat),
            Self::Dorogokupets2015(p) => dorogokupets2015::pressure(v, temp, p, mat),
            Self::AlphaKt(p) => alphakt::pressure(temp, p, mat),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_tags_round_trip() {
        for family in ThermalFamily::ALL {
            assert_eq!(family.tag().parse::<ThermalFamily>().unwrap(), family);
        }
        assert_eq!(
            " ConstQ ".parse::<ThermalFamily>().unwrap(),
            ThermalFamily::ConstQ
        );
        assert!(matches!(
            "einstein".parse::<ThermalFamily>(),
            Err(EosError::UnknownFamily { kind: "thermal", .. })
        ));
    }

    #[test]
    fn arity_is_checked() {
        let err = ThermalParams::from_values(ThermalFamily::Tange, &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            EosError::ArityMismatch {
                family: "tange",
                expected: 5,
                got: 2
            }
        );
        let ok = ThermalParams::from_values(ThermalFamily::AlphaKt, &[74.7, 3e-5, 160.0]).unwrap();
        assert_eq!(ok.family(), ThermalFamily::AlphaKt);
        assert_eq!(*ok.v0(), 74.7);
    }

    #[test]
    fn alphakt_has_no_debye_quantities() {
        let p = ThermalParams::from_values(ThermalFamily::AlphaKt, &[74.7, 3e-5, 160.0]).unwrap();
        assert!(matches!(p.gruneisen(&70.0), Err(EosError::NotSupported { .. })));
        assert!(p
            .debye_temperature(&70.0, &QuadratureConfig::default())
            .is_err());
    }

    #[test]
    fn debye_pressure_vanishes_at_reference() {
        let mat = MaterialConstants::new(2.0, 4.0);
        let p = debye_thermal_pressure(&70.0, &300.0, &1.5, &760.0, &mat);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn zero_reference_temperature() {
        let mat = MaterialConstants::new(2.0, 4.0).with_t_ref(0.0);
        let p = debye_thermal_pressure(&70.0, &300.0, &1.5, &760.0, &mat);
        assert!(p > 0.0);
        assert_eq!(debye_energy(&760.0, &0.0, &mat), 0.0);
    }

    #[test]
    fn constq_with_q_one_matches_direct_formula() {
        let mat = MaterialConstants::new(1.0, 4.0);
        let p = ThermalParams::ConstQ(ConstQParams {
            v0: 67.85,
            gamma0: 2.97,
            q: 1.0,
            theta0: 170.0,
        });
        let got = p
            .pressure(&67.85, &2000.0, &mat, &QuadratureConfig::default())
            .unwrap();
        assert!((got - 12.2992).abs() < 1e-3, "got {got}");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn periclase(family: ThermalFamily) -> ThermalParams<f64> {
        let values: &[f64] = match family {
            ThermalFamily::ConstQ => &[74.698, 1.45, 0.8, 800.0],
            ThermalFamily::Tange => &[74.698, 1.442, 0.138, 5.4, 761.0],
            ThermalFamily::Speziale => &[74.698, 1.524, 1.65, 11.8, 773.0],
            ThermalFamily::Dorogokupets2007 => &[74.698, 1.50, 0.75, 2.96, 760.0],
            ThermalFamily::Dorogokupets2015 => {
                &[74.698, 1.53, 0.624, 2.115, 747.0, 1.5, 399.0, 1.5]
            }
            ThermalFamily::AlphaKt => &[74.698, 3.0e-5, 160.2],
        };
        ThermalParams::from_values(family, values).unwrap()
    }

    proptest! {
        #[test]
        fn vanishes_at_reference_temperature(
            strain in 0.6f64..1.0,
            t_ref in 0.0f64..1000.0,
            index in 0usize..6,
        ) {
            let params = periclase(ThermalFamily::ALL[index]);
            let mat = MaterialConstants::new(2.0, 4.0).with_t_ref(t_ref);
            let p = params
                .pressure(&(74.698 * strain), &t_ref, &mat, &QuadratureConfig::default())
                .unwrap();
            prop_assert!(p.abs() < 1e-12, "{p}");
        }

        #[test]
        fn heating_raises_pressure(strain in 0.7f64..1.0, temp in 400.0f64..3000.0, index in 0usize..6) {
            let params = periclase(ThermalFamily::ALL[index]);
            let mat = MaterialConstants::new(2.0, 4.0);
            let p = params
                .pressure(&(74.698 * strain), &temp, &mat, &QuadratureConfig::default())
                .unwrap();
            prop_assert!(p > 0.0);
        }
    }
}

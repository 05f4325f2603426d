//! Static (reference-temperature) equations of state.
//!
//! Each family is a closed-form `P(V)` with a bracketed numeric inverse
//! `V(P)` and a bulk modulus. Formulas are generic over [`Scalar`], so the
//! same code evaluates plain numbers and values with uncertainty.

pub mod bm3;
pub mod kunc;
pub mod vinet;

use std::fmt;
use std::str::FromStr;

use pvt_core::numeric::central_difference;
use pvt_core::{BrentConfig, NumericMode, Scalar, UFloat, Values, brent};
use tracing::{debug, trace, warn};

use crate::error::{EosError, EosResult};
use crate::eval::{map_unary, mode_of, par_map_unary};
use crate::params::param_set;

/// Pressures at or below this value (GPa) invert to `v0` directly.
pub const ZERO_PRESSURE: f64 = 1e-5;
/// Default lower strain bound `v/v0` for static inversion.
pub const DEFAULT_MIN_STRAIN: f64 = 0.01;
/// Step for numerical bulk moduli, relative to `v0`.
pub const DEFAULT_PRECISION: f64 = 1e-5;

param_set!(
    /// Elastic parameters shared by every static family.
    StaticParams, "static" {
        /// Unit-cell volume at reference conditions (Å³)
        v0,
        /// Isothermal bulk modulus at reference conditions (GPa)
        k0,
        /// Pressure derivative of `k0`
        k0p,
    }
);

/// Static formula family.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaticFamily {
    /// Third-order Birch-Murnaghan with reference pressure (GPa).
    Bm3 { p_ref: f64 },
    Vinet,
    /// Kunc of the given order.
    Kunc { order: i32 },
}

impl StaticFamily {
    pub const BM3: Self = Self::Bm3 { p_ref: 0.0 };
    pub const KUNC: Self = Self::Kunc {
        order: kunc::DEFAULT_ORDER,
    };

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Bm3 { .. } => "bm3",
            Self::Vinet => "vinet",
            Self::Kunc { .. } => "kunc",
        }
    }

    pub fn param_names(&self) -> &'static [&'static str] {
        StaticParams::<f64>::NAMES
    }

    /// True when the bulk modulus has a closed form.
    pub fn has_analytic_bulk_modulus(&self) -> bool {
        !matches!(self, Self::Kunc { .. })
    }

    pub fn pressure<S: Scalar>(&self, v: &S, params: &StaticParams<S>) -> S {
        let StaticParams { v0, k0, k0p } = params;
        match *self {
            Self::Bm3 { p_ref } => bm3::pressure(v, v0, k0, k0p, p_ref),
            Self::Vinet => vinet::pressure(v, v0, k0, k0p),
            Self::Kunc { order } => kunc::pressure(v, v0, k0, k0p, order),
        }
    }

    /// Bulk modulus `-V dP/dV` (GPa), analytic where available.
    pub fn bulk_modulus(&self, v: f64, params: &StaticParams<f64>) -> EosResult<f64> {
        let StaticParams { v0, k0, k0p } = params;
        match self {
            Self::Bm3 { .. } => Ok(bm3::bulk_modulus(&v, v0, k0, k0p)),
            Self::Vinet => Ok(vinet::bulk_modulus(&v, v0, k0, k0p)),
            Self::Kunc { .. } => self.bulk_modulus_numeric(v, params, DEFAULT_PRECISION),
        }
    }

    /// Bulk modulus from a central difference with step `v0 * precision`.
    /// Agrees with the closed forms to about 1e-5 relative.
    pub fn bulk_modulus_numeric(
        &self,
        v: f64,
        params: &StaticParams<f64>,
        precision: f64,
    ) -> EosResult<f64> {
        let dpdv = central_difference(
            |x| Ok::<_, EosError>(self.pressure(&x, params)),
            v,
            params.v0 * precision,
        )?;
        Ok(-v * dpdv)
    }

    /// Volume at pressure `p` by Brent's method on `[v0 * min_strain, v0]`.
    pub fn volume_plain(
        &self,
        p: f64,
        params: &StaticParams<f64>,
        min_strain: f64,
        config: &BrentConfig,
    ) -> EosResult<f64> {
        if p <= ZERO_PRESSURE {
            return Ok(params.v0);
        }
        let lower = params.v0 * min_strain;
        let result = brent(
            |v| Ok::<_, EosError>(self.pressure(&v, params) - p),
            params.v0,
            lower,
            config,
        )
        .inspect_err(|e| warn!(family = self.tag(), p, min_strain, error = %e, "static inversion failed"))?;
        trace!(
            family = self.tag(),
            p,
            v = result.root,
            iterations = result.iterations,
            "static inversion converged"
        );
        Ok(result.root)
    }

    /// Volume at pressure `p` in either numeric mode.
    ///
    /// The root is found on nominal values; uncertainty of `p` and of the
    /// parameters is carried to the root by implicit differentiation,
    /// `dV = (dP_input - dP_params) / (∂P/∂V)`.
    pub fn volume<S: Scalar>(
        &self,
        p: &S,
        params: &StaticParams<S>,
        min_strain: f64,
        config: &BrentConfig,
    ) -> EosResult<S> {
        if p.nominal() <= ZERO_PRESSURE {
            return Ok(params.v0.clone());
        }
        let nominal = params.map(|x| x.nominal());
        let root = self.volume_plain(p.nominal(), &nominal, min_strain, config)?;
        let k = self.bulk_modulus(root, &nominal)?;
        let dpdv = -k / root;
        let p_at_root = self.pressure(&S::from_f64(root), params);
        Ok((p.clone() - p_at_root) / dpdv + root)
    }
}

impl fmt::Display for StaticFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bm3 { p_ref } if *p_ref != 0.0 => write!(f, "bm3 (p_ref = {p_ref} GPa)"),
            Self::Kunc { order } if *order != kunc::DEFAULT_ORDER => {
                write!(f, "kunc (order {order})")
            }
            _ => f.write_str(self.tag()),
        }
    }
}

impl FromStr for StaticFamily {
    type Err = EosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bm3" => Ok(Self::BM3),
            "vinet" => Ok(Self::Vinet),
            "kunc" => Ok(Self::KUNC),
            _ => Err(EosError::UnknownFamily {
                kind: "static",
                tag: s.to_string(),
            }),
        }
    }
}

/// A static family together with its parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticEos {
    family: StaticFamily,
    params: StaticParams<UFloat>,
    brent: BrentConfig,
}

impl StaticEos {
    pub fn new(family: StaticFamily, params: StaticParams<UFloat>) -> Self {
        debug!(family = %family, v0 = params.v0.nominal_value(), "static eos");
        Self {
            family,
            params,
            brent: BrentConfig::default(),
        }
    }

    /// Parameters without uncertainty.
    pub fn plain(family: StaticFamily, v0: f64, k0: f64, k0p: f64) -> Self {
        Self::new(
            family,
            StaticParams {
                v0: UFloat::exact(v0),
                k0: UFloat::exact(k0),
                k0p: UFloat::exact(k0p),
            },
        )
    }

    pub fn with_brent(mut self, config: BrentConfig) -> Self {
        self.brent = config;
        self
    }

    pub fn family(&self) -> StaticFamily {
        self.family
    }

    pub fn params(&self) -> &StaticParams<UFloat> {
        &self.params
    }

    pub fn v0(&self) -> f64 {
        self.params.v0.nominal_value()
    }

    pub fn has_uncertain_params(&self) -> bool {
        self.params.to_vec().iter().any(|p| !p.is_exact())
    }

    pub(crate) fn params_as<S: Scalar>(&self) -> StaticParams<S> {
        self.params.map(S::from_ufloat)
    }

    pub(crate) fn nominal_params(&self) -> StaticParams<f64> {
        self.params.map(UFloat::nominal_value)
    }

    /// Pressure at one volume in the scalar type of the caller.
    pub fn pressure_at<S: Scalar>(&self, v: &S) -> S {
        self.family.pressure(v, &self.params_as())
    }

    pub fn pressure(&self, v: &Values) -> EosResult<Values> {
        match mode_of(&[v], self.has_uncertain_params()) {
            NumericMode::Plain => self.pressure_with::<f64>(v),
            NumericMode::Uncertain => self.pressure_with::<UFloat>(v),
        }
    }

    fn pressure_with<S: Scalar>(&self, v: &Values) -> EosResult<Values> {
        let params = self.params_as::<S>();
        map_unary(v, |x: &S| Ok(self.family.pressure(x, &params)))
    }

    /// Volume at each pressure; `min_strain` bounds the bracket from below.
    pub fn volume(&self, p: &Values, min_strain: f64) -> EosResult<Values> {
        debug!(family = %self.family, points = p.len(), "static volume");
        match mode_of(&[p], self.has_uncertain_params()) {
            NumericMode::Plain => self.volume_with::<f64>(p, min_strain),
            NumericMode::Uncertain => self.volume_with::<UFloat>(p, min_strain),
        }
    }

    fn volume_with<S: Scalar>(&self, p: &Values, min_strain: f64) -> EosResult<Values> {
        let params = self.params_as::<S>();
        par_map_unary(p, |x: &S| {
            self.family.volume(x, &params, min_strain, &self.brent)
        })
    }

    /// Bulk modulus at each volume (nominal values only).
    pub fn bulk_modulus(&self, v: &Values) -> EosResult<Vec<f64>> {
        let params = self.nominal_params();
        v.nominal_values()
            .into_iter()
            .map(|x| self.family.bulk_modulus(x, &params))
            .collect()
    }

    /// Bulk modulus at each pressure (nominal values only).
    pub fn bulk_modulus_at_pressure(&self, p: &Values) -> EosResult<Vec<f64>> {
        let params = self.nominal_params();
        p.nominal_values()
            .into_iter()
            .map(|x| {
                let v = self
                    .family
                    .volume_plain(x, &params, DEFAULT_MIN_STRAIN, &self.brent)?;
                self.family.bulk_modulus(v, &params)
            })
            .collect()
    }

    pub fn bulk_modulus_numeric(&self, v: &Values, precision: f64) -> EosResult<Vec<f64>> {
        let params = self.nominal_params();
        v.nominal_values()
            .into_iter()
            .map(|x| self.family.bulk_modulus_numeric(x, &params, precision))
            .collect()
    }

    /// Birch-Murnaghan shear modulus at each pressure.
    pub fn shear_modulus(&self, p: &Values, g0: f64, g0p: f64) -> EosResult<Vec<f64>> {
        if !matches!(self.family, StaticFamily::Bm3 { .. }) {
            return Err(EosError::NotSupported {
                what: "shear modulus outside bm3",
            });
        }
        let params = self.nominal_params();
        let StaticParams { v0, k0, k0p } = &params;
        p.nominal_values()
            .into_iter()
            .map(|x| {
                let v = self
                    .family
                    .volume_plain(x, &params, DEFAULT_MIN_STRAIN, &self.brent)?;
                Ok(bm3::shear_modulus(&v, v0, k0, k0p, &g0, &g0p))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mgo() -> StaticEos {
        StaticEos::plain(StaticFamily::BM3, 74.698, 160.2, 4.03)
    }

    #[test]
    fn parse_tags() {
        assert_eq!("bm3".parse::<StaticFamily>().unwrap(), StaticFamily::BM3);
        assert_eq!("Vinet".parse::<StaticFamily>().unwrap(), StaticFamily::Vinet);
        assert_eq!(
            "kunc".parse::<StaticFamily>().unwrap(),
            StaticFamily::Kunc { order: 5 }
        );
        let err = "murnaghan".parse::<StaticFamily>().unwrap_err();
        assert!(matches!(err, EosError::UnknownFamily { kind: "static", .. }));
    }

    #[test]
    fn mgo_round_trip_at_60() {
        let eos = mgo();
        let p = eos.pressure(&Values::from(60.0)).unwrap();
        assert!((p.nominal(0).unwrap() - 54.646).abs() < 0.1);
        let v = eos.volume(&p, DEFAULT_MIN_STRAIN).unwrap();
        assert!((v.nominal(0).unwrap() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn zero_pressure_returns_v0() {
        let eos = mgo();
        let v = eos.volume(&Values::from(vec![0.0, 1e-6]), 0.01).unwrap();
        assert_eq!(v.nominal_values(), vec![74.698, 74.698]);
    }

    #[test]
    fn bracket_too_shallow_fails() {
        let eos = mgo();
        let err = eos.volume(&Values::from(500.0), 0.9).unwrap_err();
        assert!(matches!(
            err,
            EosError::Core(pvt_core::CoreError::RootNotBracketed { .. })
        ));
    }

    #[test]
    fn kunc_uses_numeric_bulk_modulus() {
        let eos = StaticEos::plain(StaticFamily::KUNC, 74.698, 160.3, 4.18);
        let k = eos.bulk_modulus(&Values::from(74.698)).unwrap();
        assert!((k[0] - 160.3).abs() / 160.3 < 1e-5);
    }

    #[test]
    fn bulk_modulus_at_pressure_grows() {
        let eos = mgo();
        let k = eos
            .bulk_modulus_at_pressure(&Values::from(vec![0.0, 50.0]))
            .unwrap();
        assert!((k[0] - 160.2).abs() < 1e-9);
        assert!(k[1] > k[0] + 150.0);
    }

    #[test]
    fn shear_modulus_only_for_bm3() {
        let vinet = StaticEos::plain(StaticFamily::Vinet, 74.698, 160.2, 4.03);
        assert!(vinet.shear_modulus(&Values::from(10.0), 130.0, 2.4).is_err());
        let g = mgo().shear_modulus(&Values::from(0.0), 130.0, 2.4).unwrap();
        assert!((g[0] - 130.0).abs() < 1e-9);
    }

    #[test]
    fn implicit_uncertainty_matches_numeric_wrap() {
        let params = StaticParams {
            v0: UFloat::new(74.698, 0.01),
            k0: UFloat::new(160.2, 2.0),
            k0p: UFloat::new(4.03, 0.1),
        };
        let eos = StaticEos::new(StaticFamily::Vinet, params.clone());
        let v = eos.volume(&Values::from(30.0), 0.1).unwrap();
        let v = &v.as_uncertain()[0];

        let wrapped = pvt_core::wrap_numeric(
            |x: &[f64]| {
                let p = StaticParams {
                    v0: x[0],
                    k0: x[1],
                    k0p: x[2],
                };
                StaticFamily::Vinet.volume_plain(30.0, &p, 0.1, &BrentConfig::default())
            },
            &params.to_vec(),
        )
        .unwrap();
        assert!((v.nominal_value() - wrapped.nominal_value()).abs() < 1e-8);
        assert!((v.std_dev() - wrapped.std_dev()).abs() / wrapped.std_dev() < 1e-4);
        assert!(v.covariance(&params.k0) > 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn family() -> impl Strategy<Value = StaticFamily> {
        prop_oneof![
            Just(StaticFamily::BM3),
            Just(StaticFamily::Vinet),
            Just(StaticFamily::KUNC),
        ]
    }

    proptest! {
        #[test]
        fn round_trip(
            family in family(),
            v0 in 10.0f64..200.0,
            k0 in 50.0f64..400.0,
            k0p in 3.0f64..7.0,
            ratio in 0.5f64..1.0,
        ) {
            let params = StaticParams { v0, k0, k0p };
            let v = v0 * ratio;
            let p = family.pressure(&v, &params);
            prop_assume!(p > ZERO_PRESSURE && p < 300.0);
            let back = family
                .volume_plain(p, &params, DEFAULT_MIN_STRAIN, &BrentConfig::default())
                .unwrap();
            prop_assert!((back - v).abs() / v < 1e-6);
        }

        #[test]
        fn pressure_decreases_with_volume(
            family in family(),
            k0 in 50.0f64..400.0,
            k0p in 3.0f64..7.0,
            a in 0.5f64..1.0,
            b in 0.5f64..1.0,
        ) {
            prop_assume!((a - b).abs() > 1e-6);
            let params = StaticParams { v0: 100.0, k0, k0p };
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(family.pressure(&(100.0 * lo), &params) > family.pressure(&(100.0 * hi), &params));
        }

        #[test]
        fn no_uncertainty_at_reference_volume(
            family in family(),
            k0 in 50.0f64..400.0,
            k0p in 3.0f64..7.0,
        ) {
            let params = StaticParams {
                v0: UFloat::exact(80.0),
                k0: UFloat::new(k0, 0.05 * k0),
                k0p: UFloat::new(k0p, 0.1),
            };
            let p = family.pressure(&UFloat::exact(80.0), &params);
            prop_assert!(p.nominal_value().abs() < 1e-12);
            prop_assert!(p.std_dev() < 1e-12);
        }
    }
}

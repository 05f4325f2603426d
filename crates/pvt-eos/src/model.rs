//! Common interface of the complete P-V-T equations of state.

use pvt_core::Values;
use pvt_core::units::{self, Pressure, Temperature, Volume};

use crate::error::{EosError, EosResult};
use crate::jamieson::{self, JamiesonEos};
use crate::mie_gruneisen::{self, MieGruneisenEos};
use crate::params::MaterialConstants;

/// A pressure-volume-temperature equation of state.
///
/// Implementations are immutable and shareable across threads, so a scale
/// catalog can hand out `Box<dyn PvtEos>` without caring which route
/// (Mie-Grüneisen or Hugoniot-derived) the scale uses.
pub trait PvtEos: Send + Sync {
    /// Reference unit-cell volume (Å³).
    fn v0(&self) -> f64;

    fn constants(&self) -> &MaterialConstants;

    fn reference(&self) -> Option<&str>;

    /// Total pressure (GPa) at unit-cell volume `v` (Å³) and temperature
    /// `temp` (K).
    fn pressure(&self, v: &Values, temp: &Values) -> EosResult<Values>;

    /// Pressure at the reference temperature.
    fn static_pressure(&self, v: &Values) -> EosResult<Values>;

    fn thermal_pressure(&self, v: &Values, temp: &Values) -> EosResult<Values>;

    /// Volume at `(p, temp)` inside `[v0 * max_strain, v0 * min_strain]`.
    fn volume_in(
        &self,
        p: &Values,
        temp: &Values,
        min_strain: f64,
        max_strain: f64,
    ) -> EosResult<Values>;

    /// Volume with the model's default bracket.
    fn volume(&self, p: &Values, temp: &Values) -> EosResult<Values>;

    /// Nominal pressure at a single typed state point.
    fn pressure_at(&self, v: Volume, temp: Temperature) -> EosResult<Pressure> {
        let p = self.pressure(
            &Values::from(units::to_cubic_angstrom(v)),
            &Values::from(units::to_kelvin(temp)),
        )?;
        p.nominal(0)
            .map(units::gpa)
            .ok_or(EosError::InvalidArg { what: "empty pressure result" })
    }

    /// Nominal volume at a single typed state point.
    fn volume_at(&self, p: Pressure, temp: Temperature) -> EosResult<Volume> {
        let v = self.volume(
            &Values::from(units::to_gpa(p)),
            &Values::from(units::to_kelvin(temp)),
        )?;
        v.nominal(0)
            .map(units::cubic_angstrom)
            .ok_or(EosError::InvalidArg { what: "empty volume result" })
    }
}

impl PvtEos for MieGruneisenEos {
    fn v0(&self) -> f64 {
        MieGruneisenEos::v0(self)
    }

    fn constants(&self) -> &MaterialConstants {
        MieGruneisenEos::constants(self)
    }

    fn reference(&self) -> Option<&str> {
        MieGruneisenEos::reference(self)
    }

    fn pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        MieGruneisenEos::pressure(self, v, temp)
    }

    fn static_pressure(&self, v: &Values) -> EosResult<Values> {
        MieGruneisenEos::static_pressure(self, v)
    }

    fn thermal_pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        MieGruneisenEos::thermal_pressure(self, v, temp)
    }

    fn volume_in(
        &self,
        p: &Values,
        temp: &Values,
        min_strain: f64,
        max_strain: f64,
    ) -> EosResult<Values> {
        MieGruneisenEos::volume(self, p, temp, min_strain, max_strain)
    }

    fn volume(&self, p: &Values, temp: &Values) -> EosResult<Values> {
        MieGruneisenEos::volume(
            self,
            p,
            temp,
            mie_gruneisen::DEFAULT_MIN_STRAIN,
            mie_gruneisen::DEFAULT_MAX_STRAIN,
        )
    }
}

impl PvtEos for JamiesonEos {
    fn v0(&self) -> f64 {
        JamiesonEos::v0(self)
    }

    fn constants(&self) -> &MaterialConstants {
        &self.material().constants
    }

    fn reference(&self) -> Option<&str> {
        JamiesonEos::reference(self)
    }

    fn pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        JamiesonEos::pressure(self, v, temp)
    }

    fn static_pressure(&self, v: &Values) -> EosResult<Values> {
        JamiesonEos::static_pressure(self, v)
    }

    fn thermal_pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        JamiesonEos::thermal_pressure(self, v, temp)
    }

    fn volume_in(
        &self,
        p: &Values,
        temp: &Values,
        min_strain: f64,
        max_strain: f64,
    ) -> EosResult<Values> {
        JamiesonEos::volume(self, p, temp, min_strain, max_strain)
    }

    fn volume(&self, p: &Values, temp: &Values) -> EosResult<Values> {
        JamiesonEos::volume(
            self,
            p,
            temp,
            jamieson::DEFAULT_MIN_STRAIN,
            jamieson::DEFAULT_MAX_STRAIN,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_eos::{StaticEos, StaticFamily};

    fn boxed() -> Box<dyn PvtEos> {
        Box::new(MieGruneisenEos::new(
            StaticEos::plain(StaticFamily::Vinet, 74.698, 160.3, 4.18),
            MaterialConstants::new(2.0, 4.0),
        ))
    }

    #[test]
    fn trait_object_dispatch() {
        let eos = boxed();
        assert_eq!(eos.v0(), 74.698);
        assert_eq!(eos.constants().z, 4.0);
        let p = eos.pressure(&Values::from(65.0), &Values::from(300.0)).unwrap();
        let v = eos.volume(&p, &Values::from(300.0)).unwrap();
        assert!((v.nominal(0).unwrap() - 65.0).abs() < 1e-6);
    }

    #[test]
    fn typed_state_points() {
        let eos = boxed();
        let p = eos
            .pressure_at(units::cubic_angstrom(65.0), units::k(1500.0))
            .unwrap();
        assert!(units::to_gpa(p) > 0.0);
        let v = eos.volume_at(p, units::k(1500.0)).unwrap();
        assert!((units::to_cubic_angstrom(v) - 65.0).abs() < 1e-6);
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MieGruneisenEos>();
        assert_send_sync::<JamiesonEos>();
        assert_send_sync::<Box<dyn PvtEos>>();
    }
}

//! A built pressure scale.

use std::fmt;

use pvt_core::Values;
use pvt_eos::{EosResult, JamiesonEos, MaterialConstants, MieGruneisenEos, PvtEos};

/// The EOS behind a scale.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleEos {
    MieGruneisen(MieGruneisenEos),
    /// Static isotherm derived from a shock Hugoniot.
    Jamieson(JamiesonEos),
}

impl ScaleEos {
    pub fn as_dyn(&self) -> &dyn PvtEos {
        match self {
            Self::MieGruneisen(eos) => eos,
            Self::Jamieson(eos) => eos,
        }
    }

    pub fn as_mie_gruneisen(&self) -> Option<&MieGruneisenEos> {
        match self {
            Self::MieGruneisen(eos) => Some(eos),
            Self::Jamieson(_) => None,
        }
    }

    pub fn as_jamieson(&self) -> Option<&JamiesonEos> {
        match self {
            Self::Jamieson(eos) => Some(eos),
            Self::MieGruneisen(_) => None,
        }
    }
}

/// A named literature EOS for one material.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    material: String,
    name: String,
    eos: ScaleEos,
}

impl Scale {
    pub fn new(material: impl Into<String>, name: impl Into<String>, eos: ScaleEos) -> Self {
        Self {
            material: material.into(),
            name: name.into(),
            eos,
        }
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `material/name`
    pub fn key(&self) -> String {
        format!("{}/{}", self.material, self.name)
    }

    pub fn eos(&self) -> &ScaleEos {
        &self.eos
    }
}

impl PvtEos for Scale {
    fn v0(&self) -> f64 {
        self.eos.as_dyn().v0()
    }

    fn constants(&self) -> &MaterialConstants {
        self.eos.as_dyn().constants()
    }

    fn reference(&self) -> Option<&str> {
        self.eos.as_dyn().reference()
    }

    fn pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        self.eos.as_dyn().pressure(v, temp)
    }

    fn static_pressure(&self, v: &Values) -> EosResult<Values> {
        self.eos.as_dyn().static_pressure(v)
    }

    fn thermal_pressure(&self, v: &Values, temp: &Values) -> EosResult<Values> {
        self.eos.as_dyn().thermal_pressure(v, temp)
    }

    fn volume_in(
        &self,
        p: &Values,
        temp: &Values,
        min_strain: f64,
        max_strain: f64,
    ) -> EosResult<Values> {
        self.eos.as_dyn().volume_in(p, temp, min_strain, max_strain)
    }

    fn volume(&self, p: &Values, temp: &Values) -> EosResult<Values> {
        self.eos.as_dyn().volume(p, temp)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scale: {}", self.key())?;
        match &self.eos {
            ScaleEos::MieGruneisen(eos) => write!(f, "{eos}"),
            ScaleEos::Jamieson(eos) => write!(f, "{eos}"),
        }
    }
}

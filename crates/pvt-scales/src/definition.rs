//! Serializable scale definitions.
//!
//! A [`ScaleDefinition`] is plain data: material constants plus, for each
//! term, a family tag and its ordered named parameters. [`ScaleDefinition::build`]
//! checks tags and names against the formula families and assembles the EOS.
//! Definitions round-trip through YAML and JSON.

use std::path::Path;

use pvt_core::UFloat;
use pvt_eos::hugoniot::{LinearHugoniotParams, NonlinearHugoniotParams};
use pvt_eos::thermal::ConstQParams;
use pvt_eos::{
    AnharmonicFamily, AnharmonicParams, ElectronicFamily, ElectronicParams, EosError,
    HeatCapacity, JamiesonEos, MaterialConstants, MieGruneisenEos, ShockMaterial, ShockParams,
    StaticEos, StaticFamily, StaticParams, ThermalFamily, ThermalParams,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ScaleError, ScaleResult};
use crate::scale::{Scale, ScaleEos};

fn default_t_ref() -> f64 {
    300.0
}

fn is_zero(x: &f64) -> bool {
    *x == 0.0
}

/// One parameter, `value ± std_dev`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedParam {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub std_dev: f64,
}

impl NamedParam {
    pub fn new(name: impl Into<String>, value: f64, std_dev: f64) -> Self {
        Self {
            name: name.into(),
            value,
            std_dev,
        }
    }

    /// Each parameter becomes its own independent variable.
    fn to_ufloat(&self) -> ScaleResult<UFloat> {
        if !self.value.is_finite() || !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(ScaleError::parse(format!(
                "parameter {} = {} ± {} is not a finite value with non-negative uncertainty",
                self.name, self.value, self.std_dev
            )));
        }
        Ok(UFloat::new(self.value, self.std_dev))
    }
}

fn named(params: &[(&str, f64, f64)]) -> Vec<NamedParam> {
    params
        .iter()
        .map(|&(name, value, std_dev)| NamedParam::new(name, value, std_dev))
        .collect()
}

/// Check `params` against the family's ordered names.
fn ordered_values(
    family: &'static str,
    expected: &[&str],
    params: &[NamedParam],
) -> ScaleResult<Vec<UFloat>> {
    if params.len() != expected.len() {
        return Err(EosError::ArityMismatch {
            family,
            expected: expected.len(),
            got: params.len(),
        }
        .into());
    }
    if params.iter().zip(expected).any(|(p, name)| p.name != *name) {
        return Err(EosError::ParamNameMismatch {
            family,
            expected: expected.join(", "),
            got: params
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
        .into());
    }
    params.iter().map(NamedParam::to_ufloat).collect()
}

/// A formula-family tag with its ordered parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TermDefinition {
    pub family: String,
    pub params: Vec<NamedParam>,
}

impl TermDefinition {
    /// Parameters given as `(name, value, std_dev)`.
    pub fn new(family: impl Into<String>, params: &[(&str, f64, f64)]) -> Self {
        Self {
            family: family.into(),
            params: named(params),
        }
    }

    fn thermal(&self) -> ScaleResult<ThermalParams<UFloat>> {
        let family: ThermalFamily = self.family.parse()?;
        let values = ordered_values(family.tag(), family.param_names(), &self.params)?;
        Ok(ThermalParams::from_values(family, &values)?)
    }

    fn anharmonic(&self) -> ScaleResult<AnharmonicParams<UFloat>> {
        let family: AnharmonicFamily = self.family.parse()?;
        let values = ordered_values(family.tag(), family.param_names(), &self.params)?;
        Ok(AnharmonicParams::from_values(family, &values)?)
    }

    fn electronic(&self) -> ScaleResult<ElectronicParams<UFloat>> {
        let family: ElectronicFamily = self.family.parse()?;
        let values = ordered_values(family.tag(), family.param_names(), &self.params)?;
        Ok(ElectronicParams::from_values(family, &values)?)
    }

    fn shock(&self) -> ScaleResult<ShockParams<UFloat>> {
        match self.family.trim().to_ascii_lowercase().as_str() {
            "linear" | "hugoniot_linear" => {
                let values = ordered_values(
                    LinearHugoniotParams::<UFloat>::FAMILY,
                    LinearHugoniotParams::<UFloat>::NAMES,
                    &self.params,
                )?;
                Ok(ShockParams::Linear(LinearHugoniotParams::from_slice(&values)?))
            }
            "nonlinear" | "hugoniot_nonlinear" => {
                let values = ordered_values(
                    NonlinearHugoniotParams::<UFloat>::FAMILY,
                    NonlinearHugoniotParams::<UFloat>::NAMES,
                    &self.params,
                )?;
                Ok(ShockParams::Nonlinear(NonlinearHugoniotParams::from_slice(
                    &values,
                )?))
            }
            _ => Err(EosError::UnknownFamily {
                kind: "hugoniot",
                tag: self.family.clone(),
            }
            .into()),
        }
    }

    fn constq(&self) -> ScaleResult<ConstQParams<UFloat>> {
        let family: ThermalFamily = self.family.parse()?;
        if family != ThermalFamily::ConstQ {
            return Err(EosError::NotSupported {
                what: "hugoniot scales require the constq thermal family",
            }
            .into());
        }
        let values = ordered_values(
            ConstQParams::<UFloat>::FAMILY,
            ConstQParams::<UFloat>::NAMES,
            &self.params,
        )?;
        Ok(ConstQParams::from_slice(&values)?)
    }
}

/// Static term: family tag, optional BM3 reference pressure or Kunc order,
/// and `v0, k0, k0p`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StaticDefinition {
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p_ref: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    pub params: Vec<NamedParam>,
}

impl StaticDefinition {
    pub fn new(family: impl Into<String>, params: &[(&str, f64, f64)]) -> Self {
        Self {
            family: family.into(),
            p_ref: None,
            order: None,
            params: named(params),
        }
    }

    pub fn with_p_ref(mut self, p_ref: f64) -> Self {
        self.p_ref = Some(p_ref);
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    fn family(&self) -> ScaleResult<StaticFamily> {
        let family: StaticFamily = self.family.parse()?;
        Ok(match family {
            StaticFamily::Bm3 { p_ref } => StaticFamily::Bm3 {
                p_ref: self.p_ref.unwrap_or(p_ref),
            },
            StaticFamily::Kunc { order } => StaticFamily::Kunc {
                order: self.order.unwrap_or(order),
            },
            StaticFamily::Vinet => StaticFamily::Vinet,
        })
    }

    fn build(&self) -> ScaleResult<StaticEos> {
        let family = self.family()?;
        let values = ordered_values(family.tag(), family.param_names(), &self.params)?;
        Ok(StaticEos::new(family, StaticParams::from_slice(&values)?))
    }
}

/// Static formula plus optional thermal, anharmonic and electronic terms.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MieGruneisenDefinition {
    #[serde(rename = "static")]
    pub static_term: StaticDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal: Option<TermDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anharmonic: Option<TermDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electronic: Option<TermDefinition>,
}

impl MieGruneisenDefinition {
    pub fn new(static_term: StaticDefinition) -> Self {
        Self {
            static_term,
            thermal: None,
            anharmonic: None,
            electronic: None,
        }
    }

    pub fn with_thermal(mut self, term: TermDefinition) -> Self {
        self.thermal = Some(term);
        self
    }

    pub fn with_anharmonic(mut self, term: TermDefinition) -> Self {
        self.anharmonic = Some(term);
        self
    }

    pub fn with_electronic(mut self, term: TermDefinition) -> Self {
        self.electronic = Some(term);
        self
    }

    fn build(&self, constants: MaterialConstants) -> ScaleResult<MieGruneisenEos> {
        let mut eos = MieGruneisenEos::new(self.static_term.build()?, constants);
        if let Some(term) = &self.thermal {
            eos = eos.with_thermal(term.thermal()?);
        }
        if let Some(term) = &self.anharmonic {
            eos = eos.with_anharmonic(term.anharmonic()?);
        }
        if let Some(term) = &self.electronic {
            eos = eos.with_electronic(term.electronic()?);
        }
        Ok(eos)
    }
}

/// Shock-derived scale: Hugoniot fit plus constant-q thermal term.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HugoniotDefinition {
    /// g/mol
    pub molar_mass: f64,
    pub shock: TermDefinition,
    pub thermal: TermDefinition,
    /// Fixed heat capacity (J/g/K); Debye when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_v: Option<f64>,
}

impl HugoniotDefinition {
    pub fn new(molar_mass: f64, shock: TermDefinition, thermal: TermDefinition) -> Self {
        Self {
            molar_mass,
            shock,
            thermal,
            c_v: None,
        }
    }

    pub fn with_c_v(mut self, c_v: f64) -> Self {
        self.c_v = Some(c_v);
        self
    }

    fn build(&self, constants: MaterialConstants) -> ScaleResult<JamiesonEos> {
        if !(self.molar_mass.is_finite() && self.molar_mass > 0.0) {
            return Err(ScaleError::parse(format!(
                "molar mass must be positive, got {}",
                self.molar_mass
            )));
        }
        let mut material = ShockMaterial::new(constants, self.molar_mass);
        if let Some(c_v) = self.c_v {
            material = material.with_heat_capacity(HeatCapacity::Fixed(c_v));
        }
        Ok(JamiesonEos::new(self.shock()?, self.thermal.constq()?, material))
    }

    fn shock(&self) -> ScaleResult<ShockParams<UFloat>> {
        self.shock.shock()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelDefinition {
    MieGruneisen(MieGruneisenDefinition),
    Hugoniot(HugoniotDefinition),
}

impl From<MieGruneisenDefinition> for ModelDefinition {
    fn from(model: MieGruneisenDefinition) -> Self {
        Self::MieGruneisen(model)
    }
}

impl From<HugoniotDefinition> for ModelDefinition {
    fn from(model: HugoniotDefinition) -> Self {
        Self::Hugoniot(model)
    }
}

/// A literature pressure scale as data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScaleDefinition {
    pub material: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Atoms per formula unit
    pub n: f64,
    /// Formula units per unit cell
    pub z: f64,
    #[serde(default = "default_t_ref")]
    pub t_ref: f64,
    /// Overrides 3R (J/mol/K)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_r: Option<f64>,
    pub model: ModelDefinition,
}

impl ScaleDefinition {
    pub fn new(
        material: impl Into<String>,
        name: impl Into<String>,
        n: f64,
        z: f64,
        model: impl Into<ModelDefinition>,
    ) -> Self {
        Self {
            material: material.into(),
            name: name.into(),
            reference: None,
            n,
            z,
            t_ref: default_t_ref(),
            three_r: None,
            model: model.into(),
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_three_r(mut self, three_r: f64) -> Self {
        self.three_r = Some(three_r);
        self
    }

    pub fn with_t_ref(mut self, t_ref: f64) -> Self {
        self.t_ref = t_ref;
        self
    }

    pub fn constants(&self) -> ScaleResult<MaterialConstants> {
        for (what, x) in [("n", self.n), ("z", self.z)] {
            if !(x.is_finite() && x > 0.0) {
                return Err(ScaleError::parse(format!("{what} must be positive, got {x}")));
            }
        }
        if !(self.t_ref.is_finite() && self.t_ref >= 0.0) {
            return Err(ScaleError::parse(format!(
                "t_ref must be non-negative, got {}",
                self.t_ref
            )));
        }
        let constants = MaterialConstants::new(self.n, self.z).with_t_ref(self.t_ref);
        Ok(match self.three_r {
            Some(three_r) => constants.with_three_r(three_r),
            None => constants,
        })
    }

    /// Assemble the EOS described by this definition.
    pub fn build(&self) -> ScaleResult<Scale> {
        let constants = self.constants()?;
        let eos = match &self.model {
            ModelDefinition::MieGruneisen(model) => {
                let mut eos = model.build(constants)?;
                if let Some(reference) = &self.reference {
                    eos = eos.with_reference(reference.as_str());
                }
                ScaleEos::MieGruneisen(eos)
            }
            ModelDefinition::Hugoniot(model) => {
                let mut eos = model.build(constants)?;
                if let Some(reference) = &self.reference {
                    eos = eos.with_reference(reference.as_str());
                }
                ScaleEos::Jamieson(eos)
            }
        };
        debug!(material = %self.material, name = %self.name, "scale built");
        Ok(Scale::new(self.material.clone(), self.name.clone(), eos))
    }

    pub fn validate(&self) -> ScaleResult<()> {
        self.build().map(|_| ())
    }

    pub fn from_yaml_str(content: &str) -> ScaleResult<Self> {
        let definition: Self = serde_yaml::from_str(content)?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn from_json_str(content: &str) -> ScaleResult<Self> {
        let definition: Self = serde_json::from_str(content)?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn to_yaml_string(&self) -> ScaleResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> ScaleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn load_yaml(path: &Path) -> ScaleResult<ScaleDefinition> {
    let content = std::fs::read_to_string(path)?;
    ScaleDefinition::from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, definition: &ScaleDefinition) -> ScaleResult<()> {
    definition.validate()?;
    std::fs::write(path, definition.to_yaml_string()?)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ScaleResult<ScaleDefinition> {
    let content = std::fs::read_to_string(path)?;
    ScaleDefinition::from_json_str(&content)
}

pub fn save_json(path: &Path, definition: &ScaleDefinition) -> ScaleResult<()> {
    definition.validate()?;
    std::fs::write(path, definition.to_json_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pvt_core::Values;
    use pvt_eos::PvtEos;

    const YAML: &str = r#"
material: gold
name: custom
reference: test fixture
n: 1
z: 4
model:
  type: mie_gruneisen
  static:
    family: vinet
    params:
      - { name: v0, value: 67.85, std_dev: 0.001 }
      - { name: k0, value: 167.0 }
      - { name: k0p, value: 5.9 }
  thermal:
    family: constq
    params:
      - { name: v0, value: 67.85 }
      - { name: gamma0, value: 2.97 }
      - { name: q, value: 1.0 }
      - { name: theta0, value: 170.0 }
"#;

    #[test]
    fn yaml_builds_composite() {
        let definition = ScaleDefinition::from_yaml_str(YAML).unwrap();
        assert_eq!(definition.t_ref, 300.0);
        let scale = definition.build().unwrap();
        assert_eq!(scale.key(), "gold/custom");
        assert_eq!(scale.reference(), Some("test fixture"));
        let p = scale
            .pressure(&Values::from(60.0), &Values::from(2000.0))
            .unwrap();
        assert!(p.is_uncertain());
        assert!(p.nominal(0).unwrap() > 0.0);
    }

    #[test]
    fn yaml_and_json_round_trip() {
        let definition = ScaleDefinition::from_yaml_str(YAML).unwrap();
        let json = definition.to_json_string().unwrap();
        assert_eq!(ScaleDefinition::from_json_str(&json).unwrap(), definition);
        let yaml = definition.to_yaml_string().unwrap();
        assert_eq!(yaml.matches("std_dev").count(), 1);
        assert_eq!(ScaleDefinition::from_yaml_str(&yaml).unwrap(), definition);
    }

    #[test]
    fn unknown_family_is_reported() {
        let bad = YAML.replace("family: vinet", "family: bm4");
        let err = ScaleDefinition::from_yaml_str(&bad).unwrap_err();
        assert!(matches!(
            err,
            ScaleError::Eos(EosError::UnknownFamily { kind: "static", .. })
        ));
    }

    #[test]
    fn parameter_names_must_follow_family_order() {
        let bad = YAML.replace("name: gamma0", "name: gamma");
        let err = ScaleDefinition::from_yaml_str(&bad).unwrap_err();
        assert!(matches!(
            err,
            ScaleError::Eos(EosError::ParamNameMismatch { family: "constq", .. })
        ));

        let short = MieGruneisenDefinition::new(StaticDefinition::new(
            "bm3",
            &[("v0", 67.85, 0.0), ("k0", 167.0, 0.0)],
        ));
        let err = ScaleDefinition::new("gold", "short", 1.0, 4.0, short)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ScaleError::Eos(EosError::ArityMismatch { expected: 3, got: 2, .. })
        ));
    }

    #[test]
    fn invalid_constants_and_values() {
        let model = MieGruneisenDefinition::new(StaticDefinition::new(
            "vinet",
            &[("v0", 67.85, 0.0), ("k0", 167.0, -1.0), ("k0p", 5.9, 0.0)],
        ));
        let err = ScaleDefinition::new("gold", "neg", 1.0, 4.0, model.clone())
            .build()
            .unwrap_err();
        assert!(matches!(err, ScaleError::Parse { .. }));
        let err = ScaleDefinition::new("gold", "zero-z", 1.0, 0.0, model)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("z must be positive"));
    }

    #[test]
    fn static_options_are_applied() {
        let term = StaticDefinition::new(
            "kunc",
            &[("v0", 74.698, 0.0), ("k0", 160.3, 0.0), ("k0p", 4.25, 0.0)],
        )
        .with_order(3);
        assert_eq!(term.family().unwrap(), StaticFamily::Kunc { order: 3 });
        let term = StaticDefinition::new("bm3", &[]).with_p_ref(1.0);
        assert_eq!(term.family().unwrap(), StaticFamily::Bm3 { p_ref: 1.0 });
    }

    #[test]
    fn hugoniot_requires_constq() {
        let model = HugoniotDefinition::new(
            196.966_57,
            TermDefinition::new("linear", &[("rho0", 19.2827, 0.0), ("c0", 3.071, 0.0), ("s", 1.536, 0.0)]),
            TermDefinition::new(
                "tange",
                &[("v0", 67.85, 0.0), ("gamma0", 2.96, 0.0), ("a", 0.45, 0.0), ("b", 4.2, 0.0), ("theta0", 170.0, 0.0)],
            ),
        );
        let err = ScaleDefinition::new("gold", "shock", 1.0, 4.0, model)
            .build()
            .unwrap_err();
        assert!(matches!(err, ScaleError::Eos(EosError::NotSupported { .. })));
    }

    #[test]
    fn unknown_shock_family() {
        let term = TermDefinition::new("cubic", &[]);
        assert!(matches!(
            term.shock(),
            Err(ScaleError::Eos(EosError::UnknownFamily { kind: "hugoniot", .. }))
        ));
    }

    #[test]
    fn file_round_trip() {
        let definition = ScaleDefinition::from_yaml_str(YAML).unwrap();
        let dir = std::env::temp_dir().join(format!("pvt-scales-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let yaml = dir.join("scale.yaml");
        let json = dir.join("scale.json");
        save_yaml(&yaml, &definition).unwrap();
        save_json(&json, &definition).unwrap();
        assert_eq!(load_yaml(&yaml).unwrap(), definition);
        assert_eq!(load_json(&json).unwrap(), definition);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}

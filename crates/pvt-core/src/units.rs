// pvt-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, MolarMass as UomMolarMass, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
    Volume as UomVolume,
};

use crate::scalar::Scalar;

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;
pub type Volume = UomVolume;

#[inline]
pub fn gpa(v: f64) -> Pressure {
    use uom::si::pressure::gigapascal;
    Pressure::new::<gigapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Unit-cell volume in Å³.
#[inline]
pub fn cubic_angstrom(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v * constants::ANGSTROM3_TO_M3)
}

#[inline]
pub fn g_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::gram_per_mole;
    MolarMass::new::<gram_per_mole>(v)
}

#[inline]
pub fn g_per_cm3(v: f64) -> Density {
    use uom::si::mass_density::gram_per_cubic_centimeter;
    Density::new::<gram_per_cubic_centimeter>(v)
}

#[inline]
pub fn km_per_s(v: f64) -> Velocity {
    use uom::si::velocity::kilometer_per_second;
    Velocity::new::<kilometer_per_second>(v)
}

pub fn to_gpa(p: Pressure) -> f64 {
    use uom::si::pressure::gigapascal;
    p.get::<gigapascal>()
}

pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

pub fn to_cubic_angstrom(v: Volume) -> f64 {
    use uom::si::volume::cubic_meter;
    v.get::<cubic_meter>() / constants::ANGSTROM3_TO_M3
}

pub mod constants {
    /// Molar gas constant, J/(mol K) (CODATA 2018).
    pub const GAS_CONSTANT: f64 = 8.314_462_618;
    /// Avogadro constant, 1/mol (CODATA 2018).
    pub const AVOGADRO: f64 = 6.022_140_76e23;
    pub const THREE_R: f64 = 3.0 * GAS_CONSTANT;
    pub const ANGSTROM3_TO_M3: f64 = 1e-30;
    pub const PA_TO_GPA: f64 = 1e-9;
}

/// Unit-cell volume (Å³) to molar volume (m³/mol); `z` formula units per
/// cell.
pub fn vol_uc_to_mol<S: Scalar>(v_uc: &S, z: f64) -> S {
    v_uc.clone() * constants::ANGSTROM3_TO_M3 * constants::AVOGADRO / z
}

/// Molar volume (m³/mol) back to unit-cell volume (Å³).
pub fn vol_mol_to_uc<S: Scalar>(v_mol: &S, z: f64) -> S {
    v_mol.clone() / constants::ANGSTROM3_TO_M3 / constants::AVOGADRO * z
}

/// Density in g/cm³ from unit-cell volume (Å³) and molar mass (g/mol).
pub fn density_from_uc_volume<S: Scalar>(v_uc: &S, z: f64, molar_mass: f64) -> S {
    S::from_f64(molar_mass) / vol_uc_to_mol(v_uc, z) * 1e-6
}

/// Unit-cell volume (Å³) from density in g/cm³.
pub fn uc_volume_from_density<S: Scalar>(rho: &S, z: f64, molar_mass: f64) -> S {
    let v_mol = S::from_f64(molar_mass) / rho.clone() * 1e-6;
    vol_mol_to_uc(&v_mol, z)
}

/// Bulk and shear velocities (km/s) to adiabatic bulk and shear moduli
/// (GPa) at density `rho` (g/cm³).
pub fn velocities_to_moduli<S: Scalar>(rho: &S, v_phi: &S, v_s: &S) -> (S, S) {
    let k_s = rho.clone() * v_phi.powi(2);
    let g = rho.clone() * v_s.powi(2);
    (k_s, g)
}

/// Moduli (GPa) to bulk and shear sound velocities (km/s).
pub fn moduli_to_velocities<S: Scalar>(rho: &S, k_s: &S, g: &S) -> (S, S) {
    let v_phi = (k_s.clone() / rho.clone()).sqrt();
    let v_s = (g.clone() / rho.clone()).sqrt();
    (v_phi, v_s)
}

/// Longitudinal (P-wave) velocity from bulk and shear velocities.
pub fn longitudinal_velocity<S: Scalar>(v_phi: &S, v_s: &S) -> S {
    (v_phi.powi(2) + v_s.powi(2) * (4.0 / 3.0)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = gpa(10.0);
        let _t = k(300.0);
        let _m = g_per_mol(196.966569);
        let _rho = g_per_cm3(19.3);
        let _v = km_per_s(5.0);
        assert!((to_cubic_angstrom(cubic_angstrom(67.85)) - 67.85).abs() < 1e-10);
        assert!((to_gpa(gpa(12.5)) - 12.5).abs() < 1e-12);
    }

    #[test]
    fn molar_volume_roundtrip() {
        let v_uc = 74.698_f64;
        let v_mol = vol_uc_to_mol(&v_uc, 4.0);
        // MgO: about 11.25 cm3/mol
        assert!((v_mol * 1e6 - 11.246).abs() < 1e-2);
        assert!((vol_mol_to_uc(&v_mol, 4.0) - v_uc).abs() < 1e-10);
    }

    #[test]
    fn gold_density() {
        let rho = density_from_uc_volume(&67.85_f64, 4.0, 196.966569);
        assert!((rho - 19.28).abs() < 0.01);
        let v = uc_volume_from_density(&rho, 4.0, 196.966569);
        assert!((v - 67.85).abs() < 1e-9);
    }

    #[test]
    fn velocities_and_moduli() {
        let (k_s, g) = velocities_to_moduli(&3.58_f64, &6.6, &6.0);
        let (v_phi, v_s) = moduli_to_velocities(&3.58, &k_s, &g);
        assert!((v_phi - 6.6).abs() < 1e-12);
        assert!((v_s - 6.0).abs() < 1e-12);
        assert!(longitudinal_velocity(&v_phi, &v_s) > v_phi);
    }
}

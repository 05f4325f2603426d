//! pvt-eos: pressure-volume-temperature equations of state.
//!
//! Contains:
//! - static_eos (Birch-Murnaghan, Vinet, Kunc with inversion and bulk modulus)
//! - debye (Debye internal-energy function)
//! - thermal (constant-q, Tange, Speziale, Dorogokupets 2007/2015, alpha-KT)
//! - anharmonic, electronic (secondary thermal terms)
//! - mie_gruneisen (composite model), hugoniot and jamieson (shock route)
//! - model (`PvtEos` trait), fitting (model functions for least squares)
//!
//! Every formula is generic over [`pvt_core::Scalar`]; the public
//! `Values`-based entry points pick plain or uncertain arithmetic once per
//! call.

pub mod anharmonic;
pub mod debye;
pub mod electronic;
pub mod error;
mod eval;
pub mod fitting;
pub mod hugoniot;
pub mod jamieson;
pub mod mie_gruneisen;
pub mod model;
pub mod params;
pub mod static_eos;
pub mod thermal;

pub use anharmonic::{AnharmonicFamily, AnharmonicParams};
pub use debye::{debye_e, debye_e_values};
pub use electronic::{ElectronicFamily, ElectronicParams};
pub use error::{EosError, EosResult};
pub use fitting::{FitKind, FitModel};
pub use hugoniot::{HeatCapacity, ShockMaterial, ShockParams};
pub use jamieson::JamiesonEos;
pub use mie_gruneisen::MieGruneisenEos;
pub use model::PvtEos;
pub use params::MaterialConstants;
pub use static_eos::{StaticEos, StaticFamily, StaticParams};
pub use thermal::{ThermalFamily, ThermalParams};

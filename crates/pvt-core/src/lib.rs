//! pvt-core: numeric foundation for the pressure-volume-temperature EOS crates.
//!
//! Contains:
//! - scalar (the `Scalar` trait every EOS formula is generic over)
//! - uncertain (`UFloat` with correlated linear uncertainty propagation)
//! - values (plain/uncertain result arrays, mode detection, broadcasting)
//! - units (uom types, physical constants, molar volume and density helpers)
//! - roots, quadrature, ode (Brent, Gauss-Legendre, Dormand-Prince)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod ode;
pub mod quadrature;
pub mod roots;
pub mod scalar;
pub mod uncertain;
pub mod units;
pub mod values;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use ode::{OdeConfig, OdeSolution};
pub use quadrature::QuadratureConfig;
pub use roots::{BrentConfig, RootResult, brent};
pub use scalar::Scalar;
pub use uncertain::{UFloat, VariableId, wrap_numeric};
pub use units::constants;
pub use values::{HasUncertainty, NumericMode, Values, broadcast, broadcast_len};

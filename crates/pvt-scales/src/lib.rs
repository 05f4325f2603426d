//! pvt-scales: published pressure scales as data.
//!
//! Contains:
//! - catalog (materials, scale lookup and search, per-request options)
//! - definition (serde scale definitions, YAML/JSON load and save)
//! - scale (a built scale, usable through [`pvt_eos::PvtEos`])
//! - one module per reference material
//!
//! A scale is a [`ScaleDefinition`] value: family tags plus ordered named
//! parameters. Catalog entries and user files go through the same `build`.

pub mod catalog;
pub mod definition;
pub mod error;
pub mod gold;
pub mod neon;
pub mod periclase;
pub mod platinum;
pub mod scale;
pub mod sodium_chloride;
pub mod sodium_chloride_b2;

pub use catalog::{
    CatalogEntry, Material, ScaleOptions, TableVariant, catalog, filter_catalog, lookup,
    scale_by_key,
};
pub use definition::{
    HugoniotDefinition, MieGruneisenDefinition, ModelDefinition, NamedParam, ScaleDefinition,
    StaticDefinition, TermDefinition, load_json, load_yaml, save_json, save_yaml,
};
pub use error::{ScaleError, ScaleResult};
pub use scale::{Scale, ScaleEos};

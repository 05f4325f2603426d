//! Ordered parameter sets and per-material constants.

use pvt_core::constants::THREE_R;

/// Define an ordered, named parameter set generic over the scalar type.
///
/// Generates the struct, its ordered `NAMES`, arity-checked construction
/// from a slice or from named pairs, `to_vec`, and `map` for switching the
/// scalar type (e.g. stripping uncertainty for root finding).
macro_rules! param_set {
    (
        $(#[$meta:meta])*
        $name:ident, $family:literal {
            $( $(#[$fmeta:meta])* $field:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name<S> {
            $( $(#[$fmeta])* pub $field: S, )+
        }

        impl<S: pvt_core::Scalar> $name<S> {
            pub const FAMILY: &'static str = $family;
            pub const NAMES: &'static [&'static str] = &[$(stringify!($field)),+];

            pub fn from_slice(values: &[S]) -> $crate::EosResult<Self> {
                let arity = || $crate::EosError::ArityMismatch {
                    family: $family,
                    expected: Self::NAMES.len(),
                    got: values.len(),
                };
                if values.len() != Self::NAMES.len() {
                    return Err(arity());
                }
                let mut it = values.iter().cloned();
                Ok(Self {
                    $( $field: it.next().ok_or_else(arity)?, )+
                })
            }

            /// Build from `(name, value)` pairs that must follow `NAMES` in
            /// order.
            pub fn from_named<K: AsRef<str>>(named: &[(K, S)]) -> $crate::EosResult<Self> {
                if named.len() != Self::NAMES.len() {
                    return Err($crate::EosError::ArityMismatch {
                        family: $family,
                        expected: Self::NAMES.len(),
                        got: named.len(),
                    });
                }
                let names_match = named
                    .iter()
                    .zip(Self::NAMES)
                    .all(|((k, _), n)| k.as_ref() == *n);
                if !names_match {
                    return Err($crate::EosError::ParamNameMismatch {
                        family: $family,
                        expected: Self::NAMES.join(", "),
                        got: named
                            .iter()
                            .map(|(k, _)| k.as_ref())
                            .collect::<Vec<_>>()
                            .join(", "),
                    });
                }
                let values: Vec<S> = named.iter().map(|(_, v)| v.clone()).collect();
                Self::from_slice(&values)
            }

            pub fn to_vec(&self) -> Vec<S> {
                vec![$( self.$field.clone() ),+]
            }

            pub fn map<T, F: Fn(&S) -> T>(&self, f: F) -> $name<T> {
                $name { $( $field: f(&self.$field), )+ }
            }
        }
    };
}

pub(crate) use param_set;

/// Per-material constants shared by every term of a composite EOS.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialConstants {
    /// Atoms per formula unit
    pub n: f64,
    /// Formula units per unit cell
    pub z: f64,
    /// Reference temperature (K)
    pub t_ref: f64,
    /// 3R equivalent (J/mol/K), overridable to reproduce historical tables
    pub three_r: f64,
}

impl MaterialConstants {
    pub fn new(n: f64, z: f64) -> Self {
        Self {
            n,
            z,
            t_ref: 300.0,
            three_r: THREE_R,
        }
    }

    pub fn with_t_ref(mut self, t_ref: f64) -> Self {
        self.t_ref = t_ref;
        self
    }

    pub fn with_three_r(mut self, three_r: f64) -> Self {
        self.three_r = three_r;
        self
    }
}

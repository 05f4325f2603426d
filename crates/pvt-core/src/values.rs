use crate::error::{CoreError, CoreResult};
use crate::scalar::Scalar;
use crate::uncertain::UFloat;

/// Plain or uncertain numeric mode of a computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericMode {
    Plain,
    Uncertain,
}

impl NumericMode {
    /// Uncertain as soon as any operand carries uncertainty.
    pub fn detect(operands: &[&dyn HasUncertainty]) -> Self {
        if operands.iter().any(|o| o.has_uncertainty()) {
            Self::Uncertain
        } else {
            Self::Plain
        }
    }

    pub fn is_uncertain(self) -> bool {
        matches!(self, Self::Uncertain)
    }
}

/// Mode detection for user-facing inputs.
///
/// Scalars report their own state; sequences are judged by their first
/// element.
pub trait HasUncertainty {
    fn has_uncertainty(&self) -> bool;
}

impl HasUncertainty for f64 {
    fn has_uncertainty(&self) -> bool {
        false
    }
}

impl HasUncertainty for UFloat {
    fn has_uncertainty(&self) -> bool {
        !self.is_exact()
    }
}

impl<T: HasUncertainty> HasUncertainty for [T] {
    fn has_uncertainty(&self) -> bool {
        self.first().is_some_and(HasUncertainty::has_uncertainty)
    }
}

impl<T: HasUncertainty> HasUncertainty for Vec<T> {
    fn has_uncertainty(&self) -> bool {
        self.as_slice().has_uncertainty()
    }
}

impl<T: HasUncertainty> HasUncertainty for Option<T> {
    fn has_uncertainty(&self) -> bool {
        self.as_ref().is_some_and(HasUncertainty::has_uncertainty)
    }
}

impl HasUncertainty for Values {
    fn has_uncertainty(&self) -> bool {
        self.is_uncertain()
    }
}

/// Array of plain or uncertain numbers, as returned by vectorised EOS
/// evaluations.
#[derive(Clone, Debug, PartialEq)]
pub enum Values {
    Plain(Vec<f64>),
    Uncertain(Vec<UFloat>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Self::Plain(v) => v.len(),
            Self::Uncertain(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_uncertain(&self) -> bool {
        matches!(self, Self::Uncertain(_))
    }

    pub fn mode(&self) -> NumericMode {
        if self.is_uncertain() {
            NumericMode::Uncertain
        } else {
            NumericMode::Plain
        }
    }

    pub fn nominal_values(&self) -> Vec<f64> {
        match self {
            Self::Plain(v) => v.clone(),
            Self::Uncertain(v) => v.iter().map(UFloat::nominal_value).collect(),
        }
    }

    /// Zero for plain values.
    pub fn std_devs(&self) -> Vec<f64> {
        match self {
            Self::Plain(v) => vec![0.0; v.len()],
            Self::Uncertain(v) => v.iter().map(UFloat::std_dev).collect(),
        }
    }

    pub fn nominal(&self, index: usize) -> Option<f64> {
        match self {
            Self::Plain(v) => v.get(index).copied(),
            Self::Uncertain(v) => v.get(index).map(UFloat::nominal_value),
        }
    }

    /// Convert into the scalar type of the requested mode.
    pub fn to_scalars<S: Scalar>(&self) -> Vec<S> {
        match self {
            Self::Plain(v) => v.iter().map(|x| S::from_f64(*x)).collect(),
            Self::Uncertain(v) => v.iter().map(S::from_ufloat).collect(),
        }
    }

    pub fn as_uncertain(&self) -> Vec<UFloat> {
        self.to_scalars()
    }
}

impl From<Vec<f64>> for Values {
    fn from(v: Vec<f64>) -> Self {
        Self::Plain(v)
    }
}

impl From<Vec<UFloat>> for Values {
    fn from(v: Vec<UFloat>) -> Self {
        Self::Uncertain(v)
    }
}

impl From<f64> for Values {
    fn from(v: f64) -> Self {
        Self::Plain(vec![v])
    }
}

impl From<UFloat> for Values {
    fn from(v: UFloat) -> Self {
        Self::Uncertain(vec![v])
    }
}

/// Common length of two operands: equal lengths, or one of them has a
/// single element that is repeated.
pub fn broadcast_len(left: usize, right: usize) -> CoreResult<usize> {
    match (left, right) {
        (l, r) if l == r => Ok(l),
        (1, r) => Ok(r),
        (l, 1) => Ok(l),
        (l, r) => Err(CoreError::ShapeMismatch { left: l, right: r }),
    }
}

/// Pair up two operand arrays with broadcasting of single elements.
pub fn broadcast<A: Clone, B: Clone>(left: &[A], right: &[B]) -> CoreResult<Vec<(A, B)>> {
    let n = broadcast_len(left.len(), right.len())?;
    Ok((0..n)
        .map(|i| {
            let a = if left.len() == 1 { &left[0] } else { &left[i] };
            let b = if right.len() == 1 { &right[0] } else { &right[i] };
            (a.clone(), b.clone())
        })
        .collect())
}

//! Values with linearly propagated standard uncertainty.
//!
//! A [`UFloat`] stores its nominal value together with first-order
//! sensitivities to a set of independent, unit-variance input variables.
//! Every arithmetic operation applies the chain rule to those sensitivities,
//! so correlations between quantities derived from a shared input (the
//! reference volume `v0` feeding both the static and the thermal term, say)
//! are kept exactly to first order.
//!
//! ```text
//! f = f(x1, x2, ...)      c_f,k = Σ_i ∂f/∂x_i · c_i,k      σ_f = sqrt(Σ_k c_f,k²)
//! ```

use std::cmp::Ordering as CmpOrdering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VARIABLE: AtomicU64 = AtomicU64::new(0);

/// Relative step used by [`wrap_numeric`] for central differences.
pub const WRAP_RELATIVE_STEP: f64 = 1e-5;

/// Identity of an independent input variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(u64);

impl VariableId {
    fn fresh() -> Self {
        Self(NEXT_VARIABLE.fetch_add(1, Ordering::Relaxed))
    }
}

/// Scalar with first-order (linear) uncertainty propagation.
#[derive(Clone, Debug, PartialEq)]
pub struct UFloat {
    value: f64,
    /// Sensitivities to independent unit-variance variables, sorted by id.
    terms: Vec<(VariableId, f64)>,
}

impl UFloat {
    /// New independent variable `value ± std_dev`.
    ///
    /// A zero standard deviation produces an exact value that carries no
    /// variable at all.
    pub fn new(value: f64, std_dev: f64) -> Self {
        if std_dev == 0.0 {
            return Self::exact(value);
        }
        Self {
            value,
            terms: vec![(VariableId::fresh(), std_dev.abs())],
        }
    }

    /// Exact (zero-uncertainty) value.
    pub fn exact(value: f64) -> Self {
        Self {
            value,
            terms: Vec::new(),
        }
    }

    pub fn nominal_value(&self) -> f64 {
        self.value
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn variance(&self) -> f64 {
        self.terms.iter().map(|(_, c)| c * c).sum()
    }

    /// True when no input variable influences this value.
    pub fn is_exact(&self) -> bool {
        self.terms.iter().all(|(_, c)| *c == 0.0)
    }

    /// Variables this value depends on, with their sensitivities.
    pub fn components(&self) -> impl Iterator<Item = (VariableId, f64)> + '_ {
        self.terms.iter().copied()
    }

    pub fn covariance(&self, other: &UFloat) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut cov = 0.0;
        while i < self.terms.len() && j < other.terms.len() {
            let (ia, ca) = self.terms[i];
            let (ib, cb) = other.terms[j];
            match ia.cmp(&ib) {
                CmpOrdering::Less => i += 1,
                CmpOrdering::Greater => j += 1,
                CmpOrdering::Equal => {
                    cov += ca * cb;
                    i += 1;
                    j += 1;
                }
            }
        }
        cov
    }

    /// Pearson correlation; zero if either side is exact.
    pub fn correlation(&self, other: &UFloat) -> f64 {
        let denom = self.std_dev() * other.std_dev();
        if denom == 0.0 {
            0.0
        } else {
            self.covariance(other) / denom
        }
    }

    /// Derivative of `self` with respect to an independent variable created
    /// by [`UFloat::new`]. `None` if `variable` is not a single independent
    /// input.
    pub fn derivative(&self, variable: &UFloat) -> Option<f64> {
        match variable.terms.as_slice() {
            [(id, scale)] if *scale != 0.0 => {
                let c = self
                    .terms
                    .iter()
                    .find(|(own, _)| own == id)
                    .map_or(0.0, |(_, c)| *c);
                Some(c / scale)
            }
            _ => None,
        }
    }

    /// Chain rule for a unary function with value `value` and derivative
    /// `derivative` at the nominal point.
    pub fn apply(&self, value: f64, derivative: f64) -> Self {
        Self {
            value,
            terms: self
                .terms
                .iter()
                .map(|&(id, c)| (id, derivative * c))
                .collect(),
        }
    }

    /// Build `value + Σ weight_i · (x_i - nominal(x_i))` to first order.
    pub fn linear_combination(value: f64, parts: &[(&UFloat, f64)]) -> Self {
        let mut out = Self::exact(value);
        for (part, weight) in parts {
            if *weight == 0.0 || part.terms.is_empty() {
                continue;
            }
            out = combine(value, &out, 1.0, part, *weight);
        }
        out
    }

    pub fn exp(&self) -> Self {
        let v = self.value.exp();
        self.apply(v, v)
    }

    pub fn ln(&self) -> Self {
        self.apply(self.value.ln(), 1.0 / self.value)
    }

    pub fn sqrt(&self) -> Self {
        let v = self.value.sqrt();
        self.apply(v, 0.5 / v)
    }

    pub fn powf(&self, n: f64) -> Self {
        if n == 0.0 {
            return Self::exact(1.0);
        }
        let v = self.value.powf(n);
        let d = if n == 1.0 {
            1.0
        } else {
            n * self.value.powf(n - 1.0)
        };
        self.apply(v, d)
    }

    pub fn powi(&self, n: i32) -> Self {
        if n == 0 {
            return Self::exact(1.0);
        }
        let v = self.value.powi(n);
        let d = f64::from(n) * self.value.powi(n - 1);
        self.apply(v, d)
    }

    /// `self ^ exponent` with both sides uncertain.
    pub fn pow(&self, exponent: &UFloat) -> Self {
        let v = self.value.powf(exponent.value);
        let d_base = if exponent.value == 0.0 {
            0.0
        } else {
            exponent.value * self.value.powf(exponent.value - 1.0)
        };
        let d_exp = if self.value > 0.0 { v * self.value.ln() } else { 0.0 };
        combine(v, self, d_base, exponent, d_exp)
    }

    pub fn abs(&self) -> Self {
        let sign = if self.value < 0.0 { -1.0 } else { 1.0 };
        self.apply(self.value.abs(), sign)
    }
}

/// Merge two sensitivity lists: `da·a + db·b`.
fn combine(value: f64, a: &UFloat, da: f64, b: &UFloat, db: f64) -> UFloat {
    let mut terms = Vec::with_capacity(a.terms.len() + b.terms.len());
    let (mut i, mut j) = (0, 0);
    while i < a.terms.len() && j < b.terms.len() {
        let (ia, ca) = a.terms[i];
        let (ib, cb) = b.terms[j];
        match ia.cmp(&ib) {
            CmpOrdering::Less => {
                terms.push((ia, da * ca));
                i += 1;
            }
            CmpOrdering::Greater => {
                terms.push((ib, db * cb));
                j += 1;
            }
            CmpOrdering::Equal => {
                terms.push((ia, da * ca + db * cb));
                i += 1;
                j += 1;
            }
        }
    }
    terms.extend(a.terms[i..].iter().map(|&(id, c)| (id, da * c)));
    terms.extend(b.terms[j..].iter().map(|&(id, c)| (id, db * c)));
    UFloat { value, terms }
}

impl fmt::Display for UFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}+/-{:.*}", p, self.value, p, self.std_dev()),
            None => write!(f, "{}+/-{}", self.value, self.std_dev()),
        }
    }
}

impl From<f64> for UFloat {
    fn from(value: f64) -> Self {
        Self::exact(value)
    }
}

impl Add for UFloat {
    type Output = UFloat;
    fn add(self, rhs: UFloat) -> UFloat {
        combine(self.value + rhs.value, &self, 1.0, &rhs, 1.0)
    }
}

impl Sub for UFloat {
    type Output = UFloat;
    fn sub(self, rhs: UFloat) -> UFloat {
        combine(self.value - rhs.value, &self, 1.0, &rhs, -1.0)
    }
}

impl Mul for UFloat {
    type Output = UFloat;
    fn mul(self, rhs: UFloat) -> UFloat {
        combine(self.value * rhs.value, &self, rhs.value, &rhs, self.value)
    }
}

impl Div for UFloat {
    type Output = UFloat;
    fn div(self, rhs: UFloat) -> UFloat {
        let q = self.value / rhs.value;
        combine(q, &self, 1.0 / rhs.value, &rhs, -q / rhs.value)
    }
}

impl Neg for UFloat {
    type Output = UFloat;
    fn neg(self) -> UFloat {
        self.apply(-self.value, -1.0)
    }
}

impl Add<f64> for UFloat {
    type Output = UFloat;
    fn add(mut self, rhs: f64) -> UFloat {
        self.value += rhs;
        self
    }
}

impl Sub<f64> for UFloat {
    type Output = UFloat;
    fn sub(mut self, rhs: f64) -> UFloat {
        self.value -= rhs;
        self
    }
}

impl Mul<f64> for UFloat {
    type Output = UFloat;
    fn mul(self, rhs: f64) -> UFloat {
        self.apply(self.value * rhs, rhs)
    }
}

impl Div<f64> for UFloat {
    type Output = UFloat;
    fn div(self, rhs: f64) -> UFloat {
        self.apply(self.value / rhs, 1.0 / rhs)
    }
}

impl Add<UFloat> for f64 {
    type Output = UFloat;
    fn add(self, rhs: UFloat) -> UFloat {
        rhs + self
    }
}

impl Sub<UFloat> for f64 {
    type Output = UFloat;
    fn sub(self, rhs: UFloat) -> UFloat {
        rhs.apply(self - rhs.value, -1.0)
    }
}

impl Mul<UFloat> for f64 {
    type Output = UFloat;
    fn mul(self, rhs: UFloat) -> UFloat {
        rhs * self
    }
}

impl Div<UFloat> for f64 {
    type Output = UFloat;
    fn div(self, rhs: UFloat) -> UFloat {
        let q = self / rhs.value;
        rhs.apply(q, -q / rhs.value)
    }
}

/// Evaluate a plain numeric function on uncertain arguments.
///
/// Partial derivatives are estimated with central differences around the
/// nominal point, one argument at a time; exact arguments are skipped. This
/// is how routines that can only run on `f64` (root finders, ODE solvers)
/// still report a propagated uncertainty.
pub fn wrap_numeric<F, E>(f: F, args: &[UFloat]) -> Result<UFloat, E>
where
    F: Fn(&[f64]) -> Result<f64, E>,
{
    let nominal: Vec<f64> = args.iter().map(UFloat::nominal_value).collect();
    let value = f(&nominal)?;

    let mut parts = Vec::with_capacity(args.len());
    let mut shifted = nominal.clone();
    for (i, arg) in args.iter().enumerate() {
        if arg.is_exact() {
            continue;
        }
        let x = nominal[i];
        let step = if x == 0.0 {
            WRAP_RELATIVE_STEP
        } else {
            WRAP_RELATIVE_STEP * x.abs()
        };
        shifted[i] = x + step;
        let f_plus = f(&shifted)?;
        shifted[i] = x - step;
        let f_minus = f(&shifted)?;
        shifted[i] = x;
        parts.push((arg, (f_plus - f_minus) / (2.0 * step)));
    }
    Ok(UFloat::linear_combination(value, &parts))
}

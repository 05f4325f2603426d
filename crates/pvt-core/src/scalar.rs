use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::uncertain::{UFloat, wrap_numeric};
use crate::values::{HasUncertainty, Values};

/// Numeric type every EOS formula is written against.
///
/// Implemented for `f64` (plain mode) and [`UFloat`] (uncertain mode). A
/// formula written once over `S: Scalar` evaluates in either mode; the mode
/// is picked at the boundary where user inputs are converted.
pub trait Scalar:
    Clone
    + fmt::Debug
    + HasUncertainty
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    fn from_f64(value: f64) -> Self;

    /// Plain mode drops the uncertainty and keeps the nominal value.
    fn from_ufloat(value: &UFloat) -> Self;

    fn nominal(&self) -> f64;

    fn exp(&self) -> Self;
    fn ln(&self) -> Self;
    fn sqrt(&self) -> Self;
    fn powf(&self, n: f64) -> Self;
    fn powi(&self, n: i32) -> Self;
    fn pow(&self, n: &Self) -> Self;

    /// Pack a result vector into the matching [`Values`] variant.
    fn into_values(values: Vec<Self>) -> Values;

    /// Run a plain `f64` routine (root finder, ODE solve) on scalar
    /// arguments. Uncertain arguments get numerically estimated
    /// sensitivities, see [`wrap_numeric`].
    fn lift_numeric<F, E>(f: F, args: &[Self]) -> Result<Self, E>
    where
        F: Fn(&[f64]) -> Result<f64, E>;

    fn recip(&self) -> Self {
        Self::from_f64(1.0) / self.clone()
    }

    fn is_finite(&self) -> bool {
        self.nominal().is_finite()
    }
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn from_ufloat(value: &UFloat) -> Self {
        value.nominal_value()
    }

    fn nominal(&self) -> f64 {
        *self
    }

    fn exp(&self) -> Self {
        f64::exp(*self)
    }

    fn ln(&self) -> Self {
        f64::ln(*self)
    }

    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }

    fn powf(&self, n: f64) -> Self {
        f64::powf(*self, n)
    }

    fn powi(&self, n: i32) -> Self {
        f64::powi(*self, n)
    }

    fn pow(&self, n: &Self) -> Self {
        f64::powf(*self, *n)
    }

    fn into_values(values: Vec<Self>) -> Values {
        Values::Plain(values)
    }

    fn lift_numeric<F, E>(f: F, args: &[Self]) -> Result<Self, E>
    where
        F: Fn(&[f64]) -> Result<f64, E>,
    {
        f(args)
    }
}

impl Scalar for UFloat {
    fn from_f64(value: f64) -> Self {
        UFloat::exact(value)
    }

    fn from_ufloat(value: &UFloat) -> Self {
        value.clone()
    }

    fn nominal(&self) -> f64 {
        self.nominal_value()
    }

    fn exp(&self) -> Self {
        UFloat::exp(self)
    }

    fn ln(&self) -> Self {
        UFloat::ln(self)
    }

    fn sqrt(&self) -> Self {
        UFloat::sqrt(self)
    }

    fn powf(&self, n: f64) -> Self {
        UFloat::powf(self, n)
    }

    fn powi(&self, n: i32) -> Self {
        UFloat::powi(self, n)
    }

    fn pow(&self, n: &Self) -> Self {
        UFloat::pow(self, n)
    }

    fn into_values(values: Vec<Self>) -> Values {
        Values::Uncertain(values)
    }

    fn lift_numeric<F, E>(f: F, args: &[Self]) -> Result<Self, E>
    where
        F: Fn(&[f64]) -> Result<f64, E>,
    {
        wrap_numeric(f, args)
    }
}

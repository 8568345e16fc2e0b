//! # Unit Types
//!
//! Type-safe wrappers for shop units. These are plain f64 newtypes that
//! serialize as bare numbers.
//!
//! ## Metric Units (Primary)
//!
//! Extrusion is sold and cut in millimetres, so everything in the
//! calculator is millimetres internally:
//! - Length: millimetres (mm), metres (m), inches (in) for imperial input
//! - Area: square millimetres (mm²), square metres (m²)
//!
//! ## Example
//!
//! ```rust
//! use bom_core::units::{Inches, Meters, Millimeters};
//!
//! let stock = Meters(3.0);
//! let stock_mm: Millimeters = stock.into();
//! assert_eq!(stock_mm.0, 3000.0);
//!
//! let bench: Millimeters = Inches(10.0).into();
//! assert_eq!(bench.0, 254.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Millimetres per inch (exact by definition)
pub const MM_PER_INCH: f64 = 25.4;

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * MM_PER_INCH)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqM> for SqMm {
    fn from(sqm: SqM) -> Self {
        SqMm(sqm.0 * 1_000_000.0)
    }
}

impl From<SqMm> for SqM {
    fn from(sqmm: SqMm) -> Self {
        SqM(sqmm.0 / 1_000_000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Inches);
impl_arithmetic!(SqMm);
impl_arithmetic!(SqM);

//! Curve implementations.
//!
//! - [`DiscountCurve`]: log-linear discount factor curve built from nodes
//! - [`CurveSnapshot`]: its serializable form

mod discount;

pub use discount::{CurveNode, CurveSnapshot, DiscountCurve};

//! Rounding to a fixed number of decimal places

use crate::error::{ConvertError, Result};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Round half away from zero to `places` decimal places
pub fn round_decimal(value: Decimal, places: i32) -> Result<Decimal> {
    let places = u32::try_from(places).map_err(|_| ConvertError::NegativePrecision(places))?;
    Ok(value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
}

/// Round an `f64` through its decimal value, so `2.675` rounds to `2.68`
pub fn round_f64(value: f64, places: i32) -> Result<f64> {
    let decimal = Decimal::from_f64(value).ok_or(ConvertError::NotRepresentable { value })?;
    round_decimal(decimal, places)?
        .to_f64()
        .ok_or(ConvertError::NotRepresentable { value })
}

/// Round an `f32` through its decimal value
pub fn round_f32(value: f32, places: i32) -> Result<f32> {
    let decimal = Decimal::from_f32(value).ok_or(ConvertError::NotRepresentable {
        value: f64::from(value),
    })?;
    round_decimal(decimal, places)?
        .to_f32()
        .ok_or(ConvertError::NotRepresentable {
            value: f64::from(value),
        })
}

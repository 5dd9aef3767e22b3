use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Float64
///
/// Finite f64 only; -0.0 canonically stored as 0.0
///
/// The rendered query grammar admits only finite number literals, so
/// non-finite values are rejected at the boundary instead of leaking a
/// malformed token into the output.
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display, Serialize)]
pub struct Float64(f64);

impl Float64 {
    /// Fallible constructor that rejects non-finite values and normalizes -0.0.
    pub fn try_new(v: f64) -> Result<Self, FloatValueError> {
        if !v.is_finite() {
            return Err(FloatValueError::NonFinite { value: v });
        }

        // canonicalize -0.0 to 0.0 so Eq stays consistent
        Ok(Self(if v == 0.0 { 0.0 } else { v }))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

///
/// FloatValueError
///

#[derive(Clone, Copy, Debug, PartialEq, ThisError)]
pub enum FloatValueError {
    #[error("non-finite float value: {value}")]
    NonFinite { value: f64 },
}

impl Eq for Float64 {}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl TryFrom<f64> for Float64 {
    type Error = FloatValueError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::try_new(v)
    }
}

impl From<Float64> for f64 {
    fn from(x: Float64) -> Self {
        x.0
    }
}

impl<'de> Deserialize<'de> for Float64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::try_new(value)
            .map_err(|err| serde::de::Error::custom(format!("invalid Float64 value: {err}")))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::value::{Error as DeError, F64Deserializer};

    #[test]
    fn try_new_normalizes_negative_zero() {
        let value = Float64::try_new(-0.0).expect("construct -0.0");
        assert_eq!(value.get().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn try_new_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(Float64::try_new(value).is_err());
            assert!(Float64::try_from(value).is_err());
        }
    }

    #[test]
    fn conversions_round_trip_finite_values() {
        let value = Float64::try_from(2.5).expect("finite f64");
        assert_eq!(f64::from(value), 2.5);
        assert_eq!(value.get(), 2.5);
    }

    #[test]
    fn deserialize_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(Float64::deserialize(F64Deserializer::<DeError>::new(value)).is_err());
        }
    }

    #[test]
    fn display_uses_natural_representation() {
        assert_eq!(Float64::try_new(10.5).expect("finite").to_string(), "10.5");
        assert_eq!(Float64::try_new(10.0).expect("finite").to_string(), "10");
    }
}

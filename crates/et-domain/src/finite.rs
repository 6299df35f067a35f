//! Serialisation guard for monetary values.
//!
//! JSON has no representation for NaN or infinity and `serde_json` would
//! silently write them as `null`, which no longer decodes as a number.

use serde::{ser::Error, Serializer};

pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(S::Error::custom(format!(
            "non-finite amount {value} cannot be stored"
        )))
    }
}

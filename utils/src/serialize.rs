
pub use serde::{Deserialize, Serialize};

use super::error::*;

///
/// Serializes the given value into a JSON string.
///
pub fn to_json<T: Serialize> (value: & T) -> Result<String>
{
    Ok(serde_json::to_string(value)?)
}

///
/// Deserializes a value of the given type from a JSON string.
///
pub fn from_json<'a, T: Deserialize<'a>> (s: & 'a str) -> Result<T>
{
    Ok(serde_json::from_str(s)?)
}

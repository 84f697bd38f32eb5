use serde::{Deserialize, Deserializer};

pub mod common;
pub mod field;
pub mod schedule;

// Backend sends null where older payloads had no value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

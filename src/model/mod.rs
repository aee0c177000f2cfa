use serde::{Deserialize, Deserializer};

pub mod categories;
pub mod leaderboard;
pub mod result;
pub mod risk;
pub mod status;
pub mod thresholds;

/// Treats an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Serde utility functions for common patterns
use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field into `T::default()` when it is `null`.
///
/// Planka sends `"name": null` for unnamed labels; callers treat that the
/// same as an empty name.
///
/// Usage:
/// ```ignore
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(default, deserialize_with = "crate::serde_utils::null_as_default")]
///     name: String,
/// }
/// ```
pub fn null_as_default<'de, T, D>(de: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

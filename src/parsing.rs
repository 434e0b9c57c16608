//! CIK normalization and serde helpers shared by the index and the selector.

use super::error::{EdgarError, Result};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Width of a zero-padded CIK.
pub const CIK_WIDTH: usize = 10;

/// Left-pads a numeric CIK with zeros to 10 digits.
///
/// Surrounding whitespace is ignored. Already padded input is returned unchanged.
///
/// # Errors
/// `EdgarError::InvalidCik` if the input is empty, contains non-digits, or is
/// longer than 10 digits.
///
/// ```rust
/// assert_eq!(edgarlookup::pad_cik("320193").unwrap(), "0000320193");
/// ```
pub fn pad_cik(cik: &str) -> Result<String> {
    let digits = cik.trim();
    if digits.is_empty()
        || digits.len() > CIK_WIDTH
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(EdgarError::InvalidCik(cik.to_string()));
    }
    Ok(format!("{:0>width$}", digits, width = CIK_WIDTH))
}

/// Strips leading zeros from a CIK, the form used in archive paths.
///
/// An all-zero CIK becomes `"0"`.
pub fn strip_cik(cik: &str) -> &str {
    let stripped = cik.trim().trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

/// Deserializes a CIK given as a JSON number or numeric string into its padded form.
pub fn deserialize_cik<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n.to_string(),
        NumberOrString::String(s) => s,
    };
    pad_cik(&raw).map_err(de::Error::custom)
}

/// Entries of a JSON object in document order.
///
/// Values are kept as raw JSON so a single malformed entry can be rejected
/// without failing the whole document.
#[derive(Debug)]
pub(crate) struct OrderedEntries(pub(crate) Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object of ticker entries")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push(entry);
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

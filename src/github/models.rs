use serde::Deserialize;

/// One entry from the GitHub user directory.
///
/// Deserialized once on fetch completion and held immutably for the
/// lifetime of the view. `id` is opaque — it is only ever used as a
/// card key, never interpreted numerically. Fields not listed here are
/// dropped during deserialization.
///
/// The display fields are not validated: a record missing `login`,
/// `avatar_url`, or `html_url` decodes to an empty string and renders
/// as an empty/broken card element rather than failing the fetch. Only
/// `id`, the card key, is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
}

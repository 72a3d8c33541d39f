//! Pet resource and its labels.

use serde::{Deserialize, Deserializer, Serialize};

use crate::schema::{self, SchemaMismatch};
use crate::status::Status;

/// Grouping a pet belongs to (e.g. "Dog").
///
/// Labels carry no invariants beyond identity: an absent or `null` `id`
/// decodes as `0` and an absent or `null` `name` as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Free-form label attached to a pet.
///
/// Same shape as [`Category`] but a separate field in the wire schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A pet as exchanged with the store.
///
/// `id` is `None` until the service assigns one; the client never picks it.
/// Values held by the harness are snapshots of the service's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub name: String,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl Pet {
    /// Start a client-side pet with no id, category, photos, tags or status.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            category: None,
            name: name.into(),
            photo_urls: Vec::new(),
            tags: Vec::new(),
            status: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_urls.push(url.into());
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Decode a single pet from a response body.
    pub fn from_json(bytes: &[u8]) -> Result<Self, SchemaMismatch> {
        schema::decode(bytes, schema::locate_pet)
    }

    /// Decode a JSON array of pets from a response body.
    pub fn list_from_json(bytes: &[u8]) -> Result<Vec<Self>, SchemaMismatch> {
        schema::decode(bytes, schema::locate_pet_list)
    }
}

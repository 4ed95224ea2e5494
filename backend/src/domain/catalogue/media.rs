//! Media rows and representative-image selection.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use super::hotel::SabreId;

/// Owning entity key for media rows: a hotel id rendered as text, or a city
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaOwnerKey(String);

impl MediaOwnerKey {
    /// Wrap a raw owner key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The key as stored.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<SabreId> for MediaOwnerKey {
    fn from(value: SabreId) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for MediaOwnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One stored image for an owning entity. `image_seq` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub owner_key: MediaOwnerKey,
    pub image_seq: i32,
    pub url: String,
    pub alt: Option<String>,
}

/// Select the representative image for every owner key present in `rows`.
///
/// The row with the smallest `image_seq` wins; on ties the first row seen
/// is kept. Input order is not assumed to be sorted.
///
/// # Examples
/// ```
/// use backend::domain::{MediaAsset, MediaOwnerKey, first_image_per_entity};
///
/// let row = |seq: i32, url: &str| MediaAsset {
///     owner_key: MediaOwnerKey::new("101"),
///     image_seq: seq,
///     url: url.to_owned(),
///     alt: None,
/// };
/// let firsts = first_image_per_entity(vec![row(3, "c.jpg"), row(1, "a.jpg")]);
/// assert_eq!(firsts[&MediaOwnerKey::new("101")].url, "a.jpg");
/// ```
pub fn first_image_per_entity(
    rows: impl IntoIterator<Item = MediaAsset>,
) -> HashMap<MediaOwnerKey, MediaAsset> {
    let mut firsts: HashMap<MediaOwnerKey, MediaAsset> = HashMap::new();
    for row in rows {
        match firsts.entry(row.owner_key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
            Entry::Occupied(mut slot) => {
                if row.image_seq < slot.get().image_seq {
                    slot.insert(row);
                }
            }
        }
    }
    firsts
}

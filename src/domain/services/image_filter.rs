//! Image selection and ordering for the list endpoint.

use serde::{Deserialize, Serialize};

use super::content_type::has_image_extension;
use crate::domain::entities::StoredObject;

/// Which stored objects count as gallery images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFilterMode {
    /// Only objects whose content type starts with `image/`.
    #[default]
    Strict,
    /// Strict, plus objects whose pathname has an image file extension.
    Lenient,
}

impl ImageFilterMode {
    /// Returns true if `object` passes this filter.
    #[must_use]
    pub fn matches(self, object: &StoredObject) -> bool {
        let typed_image = object
            .content_type()
            .is_some_and(|ct| ct.starts_with("image/"));

        match self {
            Self::Strict => typed_image,
            Self::Lenient => typed_image || has_image_extension(&object.pathname),
        }
    }
}

impl std::fmt::Display for ImageFilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

/// Filters `objects` to images, sorts them by pathname and keeps their URLs.
///
/// Sorting is byte-wise and stable.
#[must_use]
pub fn select_image_urls(mut objects: Vec<StoredObject>, mode: ImageFilterMode) -> Vec<String> {
    objects.retain(|o| mode.matches(o));
    objects.sort_by(|a, b| a.pathname.cmp(&b.pathname));
    objects.into_iter().map(|o| o.url).collect()
}

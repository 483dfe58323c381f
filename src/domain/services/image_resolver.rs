//! Maps gallery card indices to image URLs.

use std::num::NonZeroUsize;

use crate::domain::entities::ImageList;

/// Default size of the bundled local image set.
pub const DEFAULT_FALLBACK_IMAGE_COUNT: usize = 10;

/// Bundled local images served as `/img1.jpg` .. `/imgN.jpg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackImages {
    count: NonZeroUsize,
}

impl FallbackImages {
    /// Creates a fallback set of `count` images. Zero is clamped to one.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count: NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Returns the number of bundled images.
    #[must_use]
    pub const fn count(self) -> usize {
        self.count.get()
    }

    /// Returns the local path for card `index`.
    #[must_use]
    pub fn path(self, index: usize) -> String {
        format!("/img{}.jpg", index % self.count + 1)
    }
}

impl Default for FallbackImages {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_IMAGE_COUNT)
    }
}

/// Resolves the image URL for card `index`.
///
/// Uses `list[index % len]` when the list is non-empty, the bundled image
/// otherwise. Never panics.
#[must_use]
pub fn resolve_url(list: &ImageList, index: usize, fallback: FallbackImages) -> String {
    list.get_wrapped(index)
        .map_or_else(|| fallback.path(index), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn list(n: usize) -> ImageList {
        (0..n).map(|i| format!("https://blob.test/{i}.jpg")).collect()
    }

    #[test]
    fn test_wraps_over_list() {
        let images = list(3);
        for i in 0..20 {
            assert_eq!(
                resolve_url(&images, i, FallbackImages::default()),
                images.as_slice()[i % 3]
            );
            assert_eq!(
                resolve_url(&images, i, FallbackImages::default()),
                resolve_url(&images, i + 3, FallbackImages::default())
            );
        }
    }

    #[test_case(10, 0, "/img1.jpg" ; "first")]
    #[test_case(10, 9, "/img10.jpg" ; "last")]
    #[test_case(10, 10, "/img1.jpg" ; "wraps")]
    #[test_case(362, 361, "/img362.jpg" ; "large_set_last")]
    #[test_case(362, 362, "/img1.jpg" ; "large_set_wraps")]
    #[test_case(0, 5, "/img1.jpg" ; "zero_count_clamped")]
    fn test_fallback_path(count: usize, index: usize, expected: &str) {
        let fallback = FallbackImages::new(count);
        assert_eq!(resolve_url(&ImageList::default(), index, fallback), expected);
    }

    #[test]
    fn test_fallback_total_for_extreme_index() {
        let path = resolve_url(&ImageList::default(), usize::MAX, FallbackImages::new(7));
        assert!(path.starts_with("/img") && path.ends_with(".jpg"));
        let n: usize = path["/img".len()..path.len() - ".jpg".len()].parse().unwrap();
        assert!((1..=7).contains(&n));
    }
}

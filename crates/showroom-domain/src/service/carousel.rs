//! Image carousel position for the detail view

/// Index into a vehicle's image list that wraps at both ends.
///
/// With one image or none there are no controls and `next`/`prev` do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageCarousel {
    len: usize,
    index: usize,
}

impl ImageCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prev/next buttons and dot indicators are shown only for 2+ images
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.has_controls() {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.has_controls() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to an image; the index is taken modulo the image count
    pub fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
    }

    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a str> {
        images.get(self.index).map(String::as_str)
    }
}

use crate::geo::OverlayBounds;

/// A processed raster as returned by the image backend.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageRef {
    pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// The raw bytes are not helpful when debugging.
impl std::fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageRef")
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A raster selected by the user that still needs to be processed.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A processed raster together with the rectangle it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoreferencedImage {
    pub image: ImageRef,
    pub bounds: OverlayBounds,
}

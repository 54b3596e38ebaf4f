use std::fmt;

use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An image picked by the user, as handed to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name. Only the stub service looks at it.
    pub file_name: String,
    /// Declared media type, e.g. `image/jpeg`.
    pub media_type: String,
    pub data: Bytes,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// Session-local handle for displaying this image.
    pub fn to_image_reference(&self) -> ImageReference {
        ImageReference::data_url(&self.media_type, &self.data)
    }
}

/// Displayable reference to the analysed image.
///
/// Either a `data:` URL built locally or whatever the remote endpoint sent
/// back. It is only meaningful for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn data_url(media_type: &str, data: &[u8]) -> Self {
        let encoded = general_purpose::STANDARD.encode(data);
        Self(format!("data:{};base64,{}", media_type, encoded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data_url(&self) -> bool {
        self.0.starts_with("data:")
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

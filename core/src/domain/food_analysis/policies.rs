use crate::domain::common::entities::app_errors::CoreError;

pub const IMAGE_MEDIA_TYPE_PREFIX: &str = "image/";

pub const INVALID_FILE_TYPE_MESSAGE: &str = "Please select an image file (JPEG, PNG, etc.).";

pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_TYPE_PREFIX)
}

/// Rejects anything whose declared media type is not `image/*`.
pub fn ensure_image_media_type(media_type: &str) -> Result<(), CoreError> {
    if is_image_media_type(media_type) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(INVALID_FILE_TYPE_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_types_are_accepted() {
        for media_type in ["image/jpeg", "image/png", "image/webp", "image/"] {
            assert!(ensure_image_media_type(media_type).is_ok(), "{media_type}");
        }
    }

    #[test]
    fn test_non_image_types_are_rejected() {
        for media_type in ["text/plain", "application/pdf", "", "IMAGE/PNG", "video/image"] {
            assert_eq!(
                ensure_image_media_type(media_type),
                Err(CoreError::InvalidInput(INVALID_FILE_TYPE_MESSAGE.to_string())),
                "{media_type}"
            );
        }
    }
}

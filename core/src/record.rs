use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Encoding assumed for images that do not state one.
pub const DEFAULT_IMAGE_FORMAT: &str = "png";

/// Answer text the dataset extractor writes when a question has no answer.
pub const NO_ANSWER_PLACEHOLDER: &str = "[답변이 제공되지 않음]";

/// Which side of the card an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageRole {
    Question,
    Answer,
}

impl ImageRole {
    /// Label prefix used for rendered images, e.g. `Question image 2`.
    pub fn label_prefix(self) -> &'static str {
        match self {
            ImageRole::Question => "Question image",
            ImageRole::Answer => "Answer image",
        }
    }
}

/// An image embedded in a record as a base64 payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(rename = "type")]
    pub role: ImageRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub base64: String,
    /// Source width in pixels, as reported by the extractor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageAsset {
    pub fn new(role: ImageRole, format: Option<&str>, base64: impl Into<String>) -> Self {
        Self {
            role,
            format: format.map(str::to_string),
            base64: base64.into(),
            width: None,
            height: None,
        }
    }

    /// The image encoding, falling back to [`DEFAULT_IMAGE_FORMAT`] when absent or empty.
    pub fn format(&self) -> &str {
        match self.format.as_deref() {
            Some(format) if !format.trim().is_empty() => format.trim(),
            _ => DEFAULT_IMAGE_FORMAT,
        }
    }

    /// Embeddable `data:` URI for this image.
    pub fn data_uri(&self) -> String {
        format!("data:image/{};base64,{}", self.format(), self.base64)
    }
}

/// A single question/answer card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question_no: u32,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub has_images: bool,
    #[serde(default)]
    pub images: Vec<ImageAsset>,
}

impl QuestionRecord {
    pub fn new(question_no: u32, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_no,
            question: question.into(),
            answer: answer.into(),
            has_images: false,
            images: Vec::new(),
        }
    }

    /// Attach an image, keeping `has_images` consistent.
    pub fn with_image(mut self, image: ImageAsset) -> Self {
        self.images.push(image);
        self.has_images = true;
        self
    }

    /// Whether the record carries a real answer, not a blank or the
    /// extractor's [`NO_ANSWER_PLACEHOLDER`].
    pub fn has_answer(&self) -> bool {
        let answer = self.answer.trim();
        !answer.is_empty() && answer != NO_ANSWER_PLACEHOLDER
    }

    /// Images of the given role, in their original order.
    pub fn images_for(&self, role: ImageRole) -> impl Iterator<Item = &ImageAsset> {
        self.images.iter().filter(move |image| image.role == role)
    }
}

/// Errors raised while turning a `data:` URI back into image bytes.
#[derive(Error, Debug)]
pub enum ImageSourceError {
    #[error("not a base64 data URI")]
    NotDataUri,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A decoded image source: its encoding and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub format: String,
    pub bytes: Vec<u8>,
}

/// Decode a `data:image/<format>;base64,<payload>` URI.
pub fn decode_data_uri(source: &str) -> Result<DecodedImage, ImageSourceError> {
    let rest = source
        .strip_prefix("data:")
        .ok_or(ImageSourceError::NotDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(ImageSourceError::NotDataUri)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(ImageSourceError::NotDataUri)?;
    let format = match mime.strip_prefix("image/") {
        Some(format) if !format.is_empty() => format.to_string(),
        _ => DEFAULT_IMAGE_FORMAT.to_string(),
    };

    // extractors sometimes wrap long payloads
    let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = general_purpose::STANDARD.decode(payload)?;

    Ok(DecodedImage { format, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_png() {
        let missing = ImageAsset::new(ImageRole::Question, None, "AAAA");
        let empty = ImageAsset::new(ImageRole::Question, Some(""), "AAAA");
        let jpeg = ImageAsset::new(ImageRole::Answer, Some("jpeg"), "AAAA");

        assert_eq!(missing.format(), "png");
        assert_eq!(empty.format(), "png");
        assert_eq!(jpeg.format(), "jpeg");
        assert_eq!(missing.data_uri(), "data:image/png;base64,AAAA");
        assert_eq!(jpeg.data_uri(), "data:image/jpeg;base64,AAAA");
    }

    #[test]
    fn test_decode_data_uri() {
        // "hello" in base64
        let decoded = decode_data_uri("data:image/gif;base64,aGVsbG8=").unwrap();
        assert_eq!(decoded.format, "gif");
        assert_eq!(decoded.bytes, b"hello");
    }

    #[test]
    fn test_decode_data_uri_rejects_garbage() {
        assert!(matches!(
            decode_data_uri("https://example.com/a.png"),
            Err(ImageSourceError::NotDataUri)
        ));
        assert!(matches!(
            decode_data_uri("data:image/png,plain"),
            Err(ImageSourceError::NotDataUri)
        ));
        assert!(matches!(
            decode_data_uri("data:image/png;base64,***"),
            Err(ImageSourceError::Base64(_))
        ));
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let json = r#"{"question_no": 3, "question": "Q", "answer": "A"}"#;
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert!(!record.has_images);
        assert!(record.images.is_empty());

        let json = r#"{
            "question_no": 4, "question": "Q", "answer": "A", "has_images": true,
            "images": [{"type": "answer", "base64": "AAAA", "width": 10, "height": 20}]
        }"#;
        let record: QuestionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.images[0].role, ImageRole::Answer);
        assert_eq!(record.images[0].width, Some(10));
        assert_eq!(record.images[0].format(), "png");
    }

    #[test]
    fn test_unknown_image_role_is_rejected() {
        let json = r#"{"type": "diagram", "base64": "AAAA"}"#;
        assert!(serde_json::from_str::<ImageAsset>(json).is_err());
    }

    #[test]
    fn test_has_answer() {
        assert!(QuestionRecord::new(1, "Q", "kubectl get pods").has_answer());
        assert!(!QuestionRecord::new(2, "Q", " \n").has_answer());
        assert!(!QuestionRecord::new(3, "Q", NO_ANSWER_PLACEHOLDER).has_answer());
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upload cap enforced before any network call.
pub const MAX_DOCUMENT_BYTES: usize = 5 * 1024 * 1024;

/// Content types the reviewer team accepts.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/jpg",
    "image/png",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    IdCard,
    Passport,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::IdCard => "id_card",
            DocumentType::Passport => "passport",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::IdCard => "ID Card",
            DocumentType::Passport => "Passport",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id_card" => Some(DocumentType::IdCard),
            "passport" => Some(DocumentType::Passport),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Please upload exactly one file")]
    MissingFile,

    #[error("File must be PDF, JPG, or PNG format")]
    UnsupportedType,

    #[error("File size must be less than 5MB")]
    TooLarge,
}

/// The single file attached to a verification submission.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    /// Content type as declared, falling back to a guess from the file name
    /// when the browser sent none.
    pub fn effective_content_type(&self) -> String {
        if !self.content_type.is_empty() {
            return self.content_type.clone();
        }
        mime_guess::from_path(&self.file_name)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string()
    }

    /// Type and size checks; both must pass before any upload is attempted.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.bytes.is_empty() {
            return Err(DocumentError::MissingFile);
        }
        let content_type = self.effective_content_type();
        if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
            return Err(DocumentError::UnsupportedType);
        }
        if self.bytes.len() > MAX_DOCUMENT_BYTES {
            return Err(DocumentError::TooLarge);
        }
        Ok(())
    }

    /// File extension, taken from the last dot-separated segment of the
    /// name (the whole name when there is no dot).
    pub fn extension(&self) -> &str {
        self.file_name.rsplit('.').next().unwrap_or(&self.file_name)
    }
}

/// Object key for an uploaded document, namespaced by user and stamped so
/// resubmissions never collide: `{user}/{doc_type}_{millis}.{ext}`.
pub fn storage_path(
    user_id: Uuid,
    document_type: DocumentType,
    uploaded_at_millis: i64,
    file: &DocumentFile,
) -> String {
    format!(
        "{}/{}_{}.{}",
        user_id,
        document_type.as_str(),
        uploaded_at_millis,
        file.extension()
    )
}

pub mod document;
pub mod flow;
pub mod status;

pub use document::{DocumentError, DocumentFile, DocumentType, MAX_DOCUMENT_BYTES};
pub use flow::{SubmissionFlow, SubmitError, DOCUMENT_BUCKET};
pub use status::{StatusBadge, VerificationStatusView};

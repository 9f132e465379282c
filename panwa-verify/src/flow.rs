use panwa_core::{ObjectStorage, VerificationRepository};
use panwa_shared::{NewVerification, VerificationRecord};
use uuid::Uuid;

use crate::document::{storage_path, DocumentError, DocumentFile, DocumentType};

/// Bucket holding uploaded identity documents.
pub const DOCUMENT_BUCKET: &str = "verification_documents";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] DocumentError),

    #[error("You must agree to the terms and conditions")]
    ConsentRequired,

    #[error("Document upload failed")]
    Upload(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Recording the verification request failed")]
    Record(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Upload-then-record submission of one identity document.
pub struct SubmissionFlow<'a> {
    storage: &'a dyn ObjectStorage,
    verifications: &'a dyn VerificationRepository,
}

impl<'a> SubmissionFlow<'a> {
    pub fn new(
        storage: &'a dyn ObjectStorage,
        verifications: &'a dyn VerificationRepository,
    ) -> Self {
        Self {
            storage,
            verifications,
        }
    }

    /// Validate, upload the file, then insert the pending review row.
    ///
    /// Validation and the consent gate run before any network call. If the
    /// insert fails after a successful upload the object stays in the
    /// bucket; the caller just sees a failure and can resubmit.
    pub async fn submit(
        &self,
        user_id: Uuid,
        access_token: &str,
        document_type: DocumentType,
        file: DocumentFile,
        consent: bool,
        now_millis: i64,
    ) -> Result<VerificationRecord, SubmitError> {
        file.validate()?;
        if !consent {
            return Err(SubmitError::ConsentRequired);
        }

        let path = storage_path(user_id, document_type, now_millis, &file);
        let content_type = file.effective_content_type();

        self.storage
            .upload_object(DOCUMENT_BUCKET, &path, &content_type, file.bytes, access_token)
            .await
            .map_err(SubmitError::Upload)?;

        let record = NewVerification {
            user_id,
            document_type: document_type.as_str().to_string(),
            document_path: path,
            status: "pending".to_string(),
        };

        let inserted = self
            .verifications
            .insert_verification(&record, access_token)
            .await
            .map_err(|err| {
                tracing::warn!(
                    document_path = %record.document_path,
                    "verification row insert failed after upload; object left in bucket"
                );
                SubmitError::Record(err)
            })?;

        tracing::info!(verification_id = %inserted.id, "verification submitted");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use panwa_core::ProviderResult;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStorage {
        uploads: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl ObjectStorage for RecordingStorage {
        async fn upload_object(
            &self,
            _bucket: &str,
            path: &str,
            _content_type: &str,
            _bytes: Vec<u8>,
            _access_token: &str,
        ) -> ProviderResult<()> {
            if self.fail {
                return Err("storage unavailable".into());
            }
            self.uploads.lock().unwrap().push(path.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingVerifications {
        inserts: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl VerificationRepository for RecordingVerifications {
        async fn insert_verification(
            &self,
            record: &NewVerification,
            _access_token: &str,
        ) -> ProviderResult<VerificationRecord> {
            if self.fail {
                return Err("insert rejected".into());
            }
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Ok(VerificationRecord {
                id: Uuid::new_v4(),
                user_id: record.user_id,
                document_type: record.document_type.clone(),
                document_path: record.document_path.clone(),
                status: record.status.clone(),
                rejection_reason: None,
                created_at: None,
            })
        }

        async fn latest_verification(
            &self,
            _user_id: Uuid,
            _access_token: &str,
        ) -> ProviderResult<Option<VerificationRecord>> {
            Ok(None)
        }
    }

    fn small_pdf() -> DocumentFile {
        DocumentFile {
            file_name: "id.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0u8; 256],
        }
    }

    #[tokio::test]
    async fn test_submit_uploads_then_records() {
        let storage = RecordingStorage::default();
        let verifications = RecordingVerifications::default();
        let flow = SubmissionFlow::new(&storage, &verifications);

        let user = Uuid::new_v4();
        let record = flow
            .submit(user, "token", DocumentType::IdCard, small_pdf(), true, 1_700_000_000_000)
            .await
            .unwrap();

        assert_eq!(record.status, "pending");
        assert_eq!(record.document_path, format!("{user}/id_card_1700000000000.pdf"));
        assert_eq!(storage.uploads.lock().unwrap().len(), 1);
        assert_eq!(verifications.inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_oversize_file_never_reaches_network() {
        let storage = RecordingStorage::default();
        let verifications = RecordingVerifications::default();
        let flow = SubmissionFlow::new(&storage, &verifications);

        let file = DocumentFile {
            bytes: vec![0u8; 6 * 1024 * 1024],
            ..small_pdf()
        };
        let err = flow
            .submit(Uuid::new_v4(), "token", DocumentType::IdCard, file, true, 0)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Rejected(DocumentError::TooLarge)));
        assert!(storage.uploads.lock().unwrap().is_empty());
        assert_eq!(verifications.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_consent_blocks_submission() {
        let storage = RecordingStorage::default();
        let verifications = RecordingVerifications::default();
        let flow = SubmissionFlow::new(&storage, &verifications);

        let err = flow
            .submit(Uuid::new_v4(), "token", DocumentType::Passport, small_pdf(), false, 0)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::ConsentRequired));
        assert!(storage.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_failure_leaves_uploaded_object() {
        let storage = RecordingStorage::default();
        let verifications = RecordingVerifications {
            fail: true,
            ..Default::default()
        };
        let flow = SubmissionFlow::new(&storage, &verifications);

        let err = flow
            .submit(Uuid::new_v4(), "token", DocumentType::IdCard, small_pdf(), true, 0)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Record(_)));
        // The uploaded object is not cleaned up: documented gap, the file
        // stays in the bucket while no row references it.
        assert_eq!(storage.uploads.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_failure_records_nothing() {
        let storage = RecordingStorage {
            fail: true,
            ..Default::default()
        };
        let verifications = RecordingVerifications::default();
        let flow = SubmissionFlow::new(&storage, &verifications);

        let err = flow
            .submit(Uuid::new_v4(), "token", DocumentType::IdCard, small_pdf(), true, 0)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Upload(_)));
        assert_eq!(verifications.inserts.load(Ordering::SeqCst), 0);
    }
}

use panwa_shared::VerificationRecord;
use serde::Serialize;

use crate::document::DocumentType;

/// Badge shown next to the verification status. Anything the reviewer
/// backend reports that isn't approved/rejected renders as pending.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusBadge {
    Approved,
    Rejected,
    Pending,
}

impl StatusBadge {
    pub fn from_status(status: &str) -> Self {
        match status {
            "approved" => StatusBadge::Approved,
            "rejected" => StatusBadge::Rejected,
            _ => StatusBadge::Pending,
        }
    }
}

/// What the verification page renders for an existing request.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationStatusView {
    pub badge: StatusBadge,
    pub document_type: String,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub rejection_reason: Option<String>,
    /// A rejected request exposes a "submit new document" reset. The reset
    /// clears local state only; the prior record is never deleted.
    pub can_resubmit: bool,
}

impl From<&VerificationRecord> for VerificationStatusView {
    fn from(record: &VerificationRecord) -> Self {
        let badge = StatusBadge::from_status(&record.status);
        let document_type = DocumentType::parse(&record.document_type)
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| record.document_type.clone());
        Self {
            badge,
            document_type,
            submitted_at: record.created_at,
            rejection_reason: record.rejection_reason.clone(),
            can_resubmit: badge == StatusBadge::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn record(status: &str, reason: Option<&str>) -> VerificationRecord {
        VerificationRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            document_type: "id_card".to_string(),
            document_path: "u/id_card_0.pdf".to_string(),
            status: status.to_string(),
            rejection_reason: reason.map(str::to_string),
            created_at: None,
        }
    }

    #[test]
    fn test_badge_mapping() {
        assert_eq!(StatusBadge::from_status("approved"), StatusBadge::Approved);
        assert_eq!(StatusBadge::from_status("rejected"), StatusBadge::Rejected);
        assert_eq!(StatusBadge::from_status("pending"), StatusBadge::Pending);
        // Unknown statuses degrade to pending rather than erroring.
        assert_eq!(StatusBadge::from_status("in_review"), StatusBadge::Pending);
    }

    #[test]
    fn test_rejected_view_offers_resubmit() {
        let view = VerificationStatusView::from(&record("rejected", Some("blurry scan")));
        assert!(view.can_resubmit);
        assert_eq!(view.rejection_reason.as_deref(), Some("blurry scan"));
        assert_eq!(view.document_type, "ID Card");
    }

    #[test]
    fn test_pending_view_blocks_resubmit() {
        let view = VerificationStatusView::from(&record("pending", None));
        assert!(!view.can_resubmit);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус модерации продавца
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "0",
            ApprovalStatus::Approved => "1",
            ApprovalStatus::Rejected => "2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }

    pub fn all() -> Vec<ApprovalStatus> {
        vec![ApprovalStatus::Pending, ApprovalStatus::Approved, ApprovalStatus::Rejected]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code.trim())
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ApprovalStatus::from_code("1"), Some(ApprovalStatus::Approved));
        assert_eq!(ApprovalStatus::from_code(" 2"), Some(ApprovalStatus::Rejected));
        assert_eq!(ApprovalStatus::from_code("7"), None);
    }
}

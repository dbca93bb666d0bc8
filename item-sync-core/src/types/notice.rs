use crate::error::RemoteOp;

/// How prominently a notice is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Must be acknowledged by the user (modal alert)
    Blocking,
    /// Informational only (status line or log)
    Passive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    /// Submit with a blank name
    EmptyName,
    /// A remote call failed; `detail` is the error text
    OperationFailed { op: RemoteOp, detail: String },
    /// The list could not be loaded; the remote resource may be down
    ResourceUnreachable,
}

/// Message from the controller to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub kind: NoticeKind,
}

impl Notice {
    #[must_use]
    pub fn blocking(kind: NoticeKind) -> Self {
        Self {
            level: NoticeLevel::Blocking,
            kind,
        }
    }

    #[must_use]
    pub fn passive(kind: NoticeKind) -> Self {
        Self {
            level: NoticeLevel::Passive,
            kind,
        }
    }

    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.level == NoticeLevel::Blocking
    }
}

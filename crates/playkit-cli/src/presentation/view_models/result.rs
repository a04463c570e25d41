use serde::Serialize;

use super::common::{Guidance, StatusBadge};

/// Envelope every playkit command renders: the shape panel, a roll, the
/// history table or a session notice sits in `content`.
///
/// In JSON an absent badge and an empty tip list are left out, so a plain
/// `shape circle` prints only `{"content": ...}`.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Tips print after the content as `💡 Tips:` lines
    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }
}

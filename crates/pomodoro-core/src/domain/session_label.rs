use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionLabel {
    Focusing,
    OnBreak,
}

impl SessionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionLabel::Focusing => "Focusing",
            SessionLabel::OnBreak => "On Break",
        }
    }

    /// The label that follows this one once its time has elapsed.
    pub fn next(&self) -> Self {
        match self {
            SessionLabel::Focusing => SessionLabel::OnBreak,
            SessionLabel::OnBreak => SessionLabel::Focusing,
        }
    }
}

impl std::fmt::Display for SessionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingState {
    #[default]
    Idle,
    Active,
}

impl TypingState {
    pub fn for_content(content: &str) -> Self {
        if content.is_empty() {
            Self::Idle
        } else {
            Self::Active
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    /// The state `content` puts us in, if it differs from the current one.
    pub fn transition(self, content: &str) -> Option<Self> {
        let next = Self::for_content(content);
        (next != self).then_some(next)
    }
}

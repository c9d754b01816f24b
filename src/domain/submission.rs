/// The three mutually exclusive states of the submission simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }

    pub fn is_succeeded(self) -> bool {
        self == Self::Succeeded
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Idle => "SUBMISSION_IDLE",
            Self::Submitting => "SUBMISSION_SUBMITTING",
            Self::Succeeded => "SUBMISSION_SUCCEEDED",
        }
    }
}

/// Deferred transitions scheduled by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionTransition {
    /// Submitting → Succeeded, clearing the draft.
    Deliver,
    /// Succeeded → Idle.
    ExpireSuccess,
}

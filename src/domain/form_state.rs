use super::{
    contact_profile::{ContactLink, ContactProfile},
    draft_message::{DraftMessage, FormField},
    submission::SubmissionStatus,
};

/// What currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FormField),
    SendButton,
    Links,
}

impl FocusTarget {
    const ORDER: [FocusTarget; 5] = [
        FocusTarget::Field(FormField::Name),
        FocusTarget::Field(FormField::Email),
        FocusTarget::Field(FormField::Message),
        FocusTarget::SendButton,
        FocusTarget::Links,
    ];

    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let idx = self.position();
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|target| *target == self)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// One-line hint shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotice {
    pub kind: NoticeKind,
    pub text: String,
}

impl StatusNotice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormState {
    running: bool,
    profile: ContactProfile,
    links: Vec<ContactLink>,
    selected_link: Option<usize>,
    draft: DraftMessage,
    status: SubmissionStatus,
    focus: FocusTarget,
    notice: Option<StatusNotice>,
}

impl ContactFormState {
    pub fn new(profile: ContactProfile) -> Self {
        let links = profile.links();
        let selected_link = if links.is_empty() { None } else { Some(0) };

        Self {
            running: true,
            profile,
            links,
            selected_link,
            draft: DraftMessage::default(),
            status: SubmissionStatus::Idle,
            focus: FocusTarget::Field(FormField::Name),
            notice: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn profile(&self) -> &ContactProfile {
        &self.profile
    }

    pub fn links(&self) -> &[ContactLink] {
        &self.links
    }

    pub fn selected_link_index(&self) -> Option<usize> {
        self.selected_link
    }

    pub fn selected_link(&self) -> Option<&ContactLink> {
        self.selected_link.and_then(|idx| self.links.get(idx))
    }

    pub fn select_next_link(&mut self) {
        if let Some(idx) = self.selected_link {
            self.selected_link = Some((idx + 1).min(self.links.len().saturating_sub(1)));
        }
    }

    pub fn select_previous_link(&mut self) {
        if let Some(idx) = self.selected_link {
            self.selected_link = Some(idx.saturating_sub(1));
        }
    }

    pub fn draft(&self) -> &DraftMessage {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftMessage {
        &mut self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn set_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FocusTarget) {
        self.focus = focus;
    }

    pub fn focused_field(&self) -> Option<FormField> {
        match self.focus {
            FocusTarget::Field(field) => Some(field),
            FocusTarget::SendButton | FocusTarget::Links => None,
        }
    }

    /// The send button is disabled while a submission is in flight.
    pub fn can_submit(&self) -> bool {
        !self.status.is_submitting()
    }

    pub fn notice(&self) -> Option<&StatusNotice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: StatusNotice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(socials: Vec<ContactLink>) -> ContactProfile {
        ContactProfile {
            heading: "Get In Touch".to_owned(),
            intro: "Say hello".to_owned(),
            email: "ada@example.com".to_owned(),
            availability: "Remote".to_owned(),
            socials,
        }
    }

    fn link(label: &str) -> ContactLink {
        ContactLink {
            label: label.to_owned(),
            target: format!("https://{label}.example"),
            display: label.to_owned(),
        }
    }

    #[test]
    fn starts_idle_with_focus_on_name() {
        let state = ContactFormState::new(profile(vec![]));

        assert!(state.is_running());
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.focused_field(), Some(FormField::Name));
        assert!(state.draft().is_empty());
        assert!(state.can_submit());
    }

    #[test]
    fn focus_cycles_through_all_targets_and_wraps() {
        let mut focus = FocusTarget::Field(FormField::Name);
        let mut seen = vec![focus];
        for _ in 0..4 {
            focus = focus.next();
            seen.push(focus);
        }

        assert_eq!(seen.last(), Some(&FocusTarget::Links));
        assert_eq!(focus.next(), FocusTarget::Field(FormField::Name));
        assert_eq!(
            FocusTarget::Field(FormField::Name).previous(),
            FocusTarget::Links
        );
    }

    #[test]
    fn link_selection_is_clamped() {
        let mut state = ContactFormState::new(profile(vec![link("github"), link("linkedin")]));

        assert_eq!(state.selected_link_index(), Some(0));
        state.select_previous_link();
        assert_eq!(state.selected_link_index(), Some(0));

        for _ in 0..5 {
            state.select_next_link();
        }
        assert_eq!(state.selected_link_index(), Some(2));
        assert_eq!(
            state.selected_link().map(|l| l.label.as_str()),
            Some("linkedin")
        );
    }

    #[test]
    fn no_selection_without_links() {
        let mut empty = profile(vec![]);
        empty.email.clear();
        let mut state = ContactFormState::new(empty);

        state.select_next_link();
        assert_eq!(state.selected_link(), None);
    }

    #[test]
    fn submit_is_disabled_only_while_submitting() {
        let mut state = ContactFormState::new(profile(vec![]));

        state.set_status(SubmissionStatus::Submitting);
        assert!(!state.can_submit());

        state.set_status(SubmissionStatus::Succeeded);
        assert!(state.can_submit());
    }
}

/// A link shown under "Connect With Me".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: String,
    /// What the opener receives (`mailto:` or an URL).
    pub target: String,
    /// What the card shows next to the label.
    pub display: String,
}

/// Static contact details shown beside the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactProfile {
    pub heading: String,
    pub intro: String,
    pub email: String,
    pub availability: String,
    pub socials: Vec<ContactLink>,
}

impl ContactProfile {
    /// The e-mail link first, then social links in configured order.
    pub fn links(&self) -> Vec<ContactLink> {
        let mut links = Vec::with_capacity(self.socials.len() + 1);
        if !self.email.is_empty() {
            links.push(ContactLink {
                label: "Email".to_owned(),
                target: format!("mailto:{}", self.email),
                display: self.email.clone(),
            });
        }
        links.extend(self.socials.iter().cloned());
        links
    }
}

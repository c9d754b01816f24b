use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

use crate::domain::contact_profile::{ContactLink, ContactProfile};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub contact: ContactConfig,
    pub submission: SubmissionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Log file override; defaults to the per-user data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    pub heading: String,
    pub intro: String,
    pub email: String,
    pub availability: String,
    pub socials: Vec<SocialLinkConfig>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            heading: "Get In Touch".to_owned(),
            intro: "Feel free to reach out for collaboration, job opportunities, or just to say \
                    hello! I'm always open to discussing new projects and ideas."
                .to_owned(),
            email: "hello@example.com".to_owned(),
            availability: "Available for remote work worldwide".to_owned(),
            socials: vec![
                SocialLinkConfig {
                    label: "GitHub".to_owned(),
                    url: "https://github.com".to_owned(),
                },
                SocialLinkConfig {
                    label: "LinkedIn".to_owned(),
                    url: "https://www.linkedin.com".to_owned(),
                },
            ],
        }
    }
}

impl ContactConfig {
    pub fn to_profile(&self) -> ContactProfile {
        ContactProfile {
            heading: self.heading.clone(),
            intro: self.intro.clone(),
            email: self.email.clone(),
            availability: self.availability.clone(),
            socials: self
                .socials
                .iter()
                .filter(|social| !social.url.trim().is_empty())
                .map(SocialLinkConfig::to_link)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinkConfig {
    pub label: String,
    pub url: String,
}

impl SocialLinkConfig {
    fn to_link(&self) -> ContactLink {
        let display = self
            .url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.")
            .trim_end_matches('/')
            .to_owned();

        ContactLink {
            label: self.label.clone(),
            target: self.url.clone(),
            display,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionConfig {
    pub sending_delay_ms: u64,
    pub success_display_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            sending_delay_ms: 1_500,
            success_display_ms: 3_000,
        }
    }
}

impl SubmissionConfig {
    pub fn sending_delay(&self) -> Duration {
        Duration::from_millis(self.sending_delay_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }
}

use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{
    AppConfig, ContactConfig, LogConfig, SocialLinkConfig, SubmissionConfig,
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub contact: Option<FileContactConfig>,
    pub submission: Option<FileSubmissionConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(contact) = self.contact {
            contact.merge_into(&mut config.contact);
        }

        if let Some(submission) = self.submission {
            submission.merge_into(&mut config.submission);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileContactConfig {
    pub heading: Option<String>,
    pub intro: Option<String>,
    pub email: Option<String>,
    pub availability: Option<String>,
    /// Replaces the default list as a whole.
    pub socials: Option<Vec<SocialLinkConfig>>,
}

impl FileContactConfig {
    fn merge_into(self, config: &mut ContactConfig) {
        if let Some(heading) = self.heading {
            config.heading = heading;
        }

        if let Some(intro) = self.intro {
            config.intro = intro;
        }

        if let Some(email) = self.email {
            config.email = email;
        }

        if let Some(availability) = self.availability {
            config.availability = availability;
        }

        if let Some(socials) = self.socials {
            config.socials = socials;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSubmissionConfig {
    pub sending_delay_ms: Option<u64>,
    pub success_display_ms: Option<u64>,
}

impl FileSubmissionConfig {
    fn merge_into(self, config: &mut SubmissionConfig) {
        if let Some(delay_ms) = self.sending_delay_ms {
            config.sending_delay_ms = delay_ms;
        }

        if let Some(display_ms) = self.success_display_ms {
            config.success_display_ms = display_ms;
        }
    }
}

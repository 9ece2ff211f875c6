use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// the fixed set of content types a bookmarked item can have
#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum ContentTypes {
    Image,
    Video,
    Article,
    Audio,
    Unknown,
}

impl ContentTypes {
    /// strict parse used when validating client input. Unlike the
    /// [`From<&str>`] impl, anything outside the fixed set is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            "article" => Some(Self::Article),
            "audio" => Some(Self::Audio),
            _ => None,
        }
    }
}

impl From<&str> for ContentTypes {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "image" => Self::Image,
            "video" => Self::Video,
            "article" => Self::Article,
            "audio" => Self::Audio,
            _ => {
                log::warn!(
                    "content type from database {value} does not match any branches in ContentTypes#from"
                );
                Self::Unknown
            }
        }
    }
}

impl Display for ContentTypes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Article => "article",
            Self::Audio => "audio",
            Self::Unknown => "unknown",
        };
        write!(f, "{value}")
    }
}

#[cfg(test)]
mod parse_tests {
    use super::ContentTypes;

    #[test]
    fn parse_accepts_fixed_set_case_insensitively() {
        assert_eq!(Some(ContentTypes::Image), ContentTypes::parse("image"));
        assert_eq!(Some(ContentTypes::Video), ContentTypes::parse("Video"));
        assert_eq!(Some(ContentTypes::Article), ContentTypes::parse("ARTICLE"));
        assert_eq!(Some(ContentTypes::Audio), ContentTypes::parse("audio"));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(None, ContentTypes::parse("document"));
        assert_eq!(None, ContentTypes::parse(""));
        // "unknown" is a db-read fallback, never valid input
        assert_eq!(None, ContentTypes::parse("unknown"));
    }
}

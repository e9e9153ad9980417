//! Course catalogue types.
//!
//! The catalogue is an immutable ordered sequence of course records loaded
//! once at startup and read-only for the process lifetime.

use serde::{Deserialize, Serialize};

/// A single course in the static catalogue.
///
/// `desc` is the text that gets embedded for similarity search; the other
/// fields ride along as presentation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    /// Free-text description, the embedding source for this course.
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_minimal_record_deserializes() {
        let json = r#"{"title": "Intro to SQL", "desc": "Relational databases from scratch"}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.title, "Intro to SQL");
        assert_eq!(course.desc, "Relational databases from scratch");
        assert!(course.url.is_none());
        assert!(course.provider.is_none());
    }

    #[test]
    fn test_course_full_record_roundtrip() {
        let course = Course {
            title: "Advanced Python".to_string(),
            desc: "Generators, typing, async".to_string(),
            url: Some("https://example.com/python".to_string()),
            provider: Some("Coursera".to_string()),
        };
        let json = serde_json::to_string(&course).unwrap();
        let parsed: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, course);
    }

    #[test]
    fn test_course_omits_absent_optional_fields() {
        let course = Course {
            title: "React Basics".to_string(),
            desc: "Components and hooks".to_string(),
            url: None,
            provider: None,
        };
        let json = serde_json::to_string(&course).unwrap();
        assert!(!json.contains("url"));
        assert!(!json.contains("provider"));
    }
}

//! Roadmap request/response types.

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::error::ValidationError;

/// Maximum number of skills accepted per request.
pub const MAX_SKILLS: usize = 20;

/// Goal length bounds in characters, after trimming.
pub const MIN_GOAL_CHARS: usize = 3;
pub const MAX_GOAL_CHARS: usize = 200;

/// A roadmap generation request: current skills plus a career goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapRequest {
    pub skills: Vec<String>,
    pub goal: String,
}

impl RoadmapRequest {
    /// Normalize and validate the request.
    ///
    /// Skills are trimmed, empties dropped, and duplicates removed keeping
    /// the first occurrence. The goal is trimmed and length-checked.
    pub fn normalized(self) -> Result<RoadmapRequest, ValidationError> {
        if self.skills.len() > MAX_SKILLS {
            return Err(ValidationError::TooManySkills(self.skills.len()));
        }

        let mut seen = std::collections::HashSet::new();
        let skills: Vec<String> = self
            .skills
            .into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .filter(|skill| seen.insert(skill.clone()))
            .collect();
        if skills.is_empty() {
            return Err(ValidationError::NoSkills);
        }

        let goal = self.goal.trim().to_string();
        let goal_chars = goal.chars().count();
        if !(MIN_GOAL_CHARS..=MAX_GOAL_CHARS).contains(&goal_chars) {
            return Err(ValidationError::GoalLength);
        }

        Ok(RoadmapRequest { skills, goal })
    }
}

/// A generated roadmap plus the recommended courses for the skill gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub roadmap: String,
    #[serde(default)]
    pub recommended_courses: Vec<Course>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(skills: &[&str], goal: &str) -> RoadmapRequest {
        RoadmapRequest {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            goal: goal.to_string(),
        }
    }

    #[test]
    fn test_normalized_trims_and_dedupes_preserving_order() {
        let normalized = request(&["  SQL ", "Python", "SQL", "", "  "], "Data Engineer")
            .normalized()
            .unwrap();
        assert_eq!(normalized.skills, vec!["SQL", "Python"]);
        assert_eq!(normalized.goal, "Data Engineer");
    }

    #[test]
    fn test_normalized_rejects_empty_skills() {
        let err = request(&["", "   "], "Data Engineer").normalized().unwrap_err();
        assert_eq!(err, ValidationError::NoSkills);
    }

    #[test]
    fn test_normalized_rejects_too_many_skills() {
        let skills: Vec<String> = (0..21).map(|i| format!("skill-{i}")).collect();
        let err = RoadmapRequest {
            skills,
            goal: "Data Engineer".to_string(),
        }
        .normalized()
        .unwrap_err();
        assert_eq!(err, ValidationError::TooManySkills(21));
    }

    #[test]
    fn test_normalized_trims_goal_and_checks_length() {
        let normalized = request(&["SQL"], "  DBA  ").normalized().unwrap();
        assert_eq!(normalized.goal, "DBA");

        let err = request(&["SQL"], " ab ").normalized().unwrap_err();
        assert_eq!(err, ValidationError::GoalLength);

        let long_goal = "g".repeat(201);
        let err = request(&["SQL"], &long_goal).normalized().unwrap_err();
        assert_eq!(err, ValidationError::GoalLength);
    }

    #[test]
    fn test_roadmap_serde_defaults_courses() {
        let json = r#"{"roadmap": "do things"}"#;
        let roadmap: Roadmap = serde_json::from_str(json).unwrap();
        assert!(roadmap.recommended_courses.is_empty());
    }
}

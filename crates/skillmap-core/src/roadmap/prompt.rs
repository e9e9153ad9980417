//! Mentor prompt construction.
//!
//! The prompt is plain data: a fixed template filled with the caller's
//! skills and goal, optionally preceded by retrieved memory context.

/// The query key under which an interaction is remembered and looked up.
pub fn memory_key(skills: &[String], goal: &str) -> String {
    format!("{}::{goal}", skills.join(","))
}

/// The gap text used to search the course catalogue.
pub fn gap_text(skills: &[String]) -> String {
    skills.join(", ")
}

/// Build the three-section mentor prompt for the given skills and goal.
pub fn mentor_prompt(skills: &[String], goal: &str) -> String {
    let skills = skills.join(", ");
    format!(
        "You are a career mentor. A user has the following skills: {skills}.\n\
         They want to become a {goal}. Create a personalized CV roadmap \
         with exactly three sections:\n\n\
         1. **Overview** – Write a 2–3 sentence summary of what makes a great CV for the {goal} role.\n\n\
         2. **Skills to Learn** – List 5–8 concrete, real-world skills they should develop, \
         formatted as unchecked markdown checkboxes (- [ ] Skill name). \
         Focus on specific, actionable skills like software tools, languages, certifications, or techniques.\n\n\
         3. **Additional CV Tips** – Provide 3–5 bullet points of actionable resume-enhancement \
         techniques such as quantifying results, tailoring to ATS systems, formatting best practices, \
         or industry-specific advice.\n\n\
         Format your response with clear section headers and follow the structure exactly."
    )
}

/// Prepend retrieved context to the base prompt, when any exists.
pub fn with_context(context: &str, base: &str) -> String {
    if context.is_empty() {
        base.to_string()
    } else {
        format!("{context}\n\n{base}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_memory_key_joins_skills_and_goal() {
        let key = memory_key(&skills(&["SQL", "Python"]), "Data Engineer");
        assert_eq!(key, "SQL,Python::Data Engineer");
    }

    #[test]
    fn test_gap_text_joins_with_spaces() {
        assert_eq!(gap_text(&skills(&["SQL", "Python"])), "SQL, Python");
    }

    #[test]
    fn test_mentor_prompt_mentions_skills_and_goal() {
        let prompt = mentor_prompt(&skills(&["SQL", "Python"]), "Data Engineer");
        assert!(prompt.contains("SQL, Python"));
        assert!(prompt.contains("become a Data Engineer"));
        assert!(prompt.contains("**Overview**"));
        assert!(prompt.contains("**Skills to Learn**"));
        assert!(prompt.contains("**Additional CV Tips**"));
    }

    #[test]
    fn test_with_context_prepends_only_when_nonempty() {
        assert_eq!(with_context("", "base"), "base");
        assert_eq!(with_context("ctx", "base"), "ctx\n\nbase");
    }
}

use crate::models::CreativeIdea;

pub fn compose_title(verb: &str, subject: &str) -> String {
    format!("{} the {}.", verb, subject)
}

pub fn compose_description(focus: &str, mood: &str) -> String {
    format!(
        "Design an experience focused on {}, wrapped in a {} tone.",
        focus,
        mood.to_lowercase()
    )
}

/// Multi-line text block put on the clipboard for the given idea.
pub fn share_text(idea: &CreativeIdea) -> String {
    format!(
        "🌱 {}\nMood: {}\nFocus: {}\nPalette: {}\nTools: {}\n\n{}",
        idea.title,
        idea.mood,
        idea.focus,
        idea.palette.join(", "),
        idea.tools.join(", "),
        idea.description
    )
}

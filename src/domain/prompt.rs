//! Fixed instruction template sent to the completion endpoint.

/// Persona used as the system message of every request.
pub const SYSTEM_PERSONA: &str =
    "You are an expert prompt engineer who specializes in crafting effective prompts for AI models.";

/// Sampling temperature of every request.
pub const TEMPERATURE: f32 = 0.7;

/// Response length cap of every request.
pub const MAX_TOKENS: u32 = 1000;

/// Enhancement directives appended to the user's inputs, in order.
pub const DIRECTIVES: [&str; 5] = [
    "Include clear formatting instructions for the answer",
    "Request the AI to clarify assumptions before responding",
    "Be well-structured and detailed",
    "Include any relevant context from the original prompt",
    "Maintain the original intent of the task",
];

/// Build the user message embedding the three inputs verbatim.
pub fn build_prompt(role: &str, context: &str, task: &str) -> String {
    let mut prompt = format!(
        "Role: {}\nContext: {}\nTask: {}\n\n\
         Please enhance this prompt to make it more effective for AI interactions.\n\
         The enhanced prompt should:\n",
        role, context, task
    );
    for (index, directive) in DIRECTIVES.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", index + 1, directive));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_inputs_verbatim() {
        let prompt = build_prompt(
            "Financial Advisor",
            "I'm planning for retirement in 15 years...",
            "Suggest an investment strategy...",
        );
        assert!(prompt.starts_with("Role: Financial Advisor\n"));
        assert!(prompt.contains("Context: I'm planning for retirement in 15 years...\n"));
        assert!(prompt.contains("Task: Suggest an investment strategy...\n"));
    }

    #[test]
    fn lists_directives_in_order() {
        let prompt = build_prompt("r", "c", "t");
        let mut last = 0;
        for (index, directive) in DIRECTIVES.iter().enumerate() {
            let line = format!("{}. {}", index + 1, directive);
            let position = prompt.find(&line).expect("directive missing");
            assert!(position > last);
            last = position;
        }
    }

    #[test]
    fn empty_context_keeps_label() {
        let prompt = build_prompt("Python Expert", "", "Review this code");
        assert!(prompt.contains("Context: \n"));
    }
}

//! Prompt templates for planning, drafting and refining

/// Ask for a JSON array of section titles
pub fn section_plan_prompt(topic: &str) -> String {
    format!(
        "You are a Wikipedia editor. For a comprehensive article about \"{topic}\", list the most \
         important and relevant sections that should be included. Return ONLY a JSON array of \
         section titles, with no additional text or explanation. Example format: \
         [\"Introduction\", \"History\", \"Development\", \"Applications\", \"Impact\", \
         \"See Also\", \"References\"]"
    )
}

/// Fast-tier prompt: write the section from the packed sources only
pub fn draft_prompt(topic: &str, section: &str, context_block: &str) -> String {
    let mut prompt = format!(
        "Write the \"{section}\" section of a comprehensive Wikipedia article about \"{topic}\". \
         Be as exhaustive, detailed, and thorough as possible, covering all relevant subtopics, \
         examples, and background. Use only the information below. Cite sources as [1], [2], etc."
    );
    prompt.push_str("\n\nSources:\n");
    prompt.push_str(context_block);
    prompt
}

/// Accurate-tier prompt: expand and verify the draft, no sources re-injected
pub fn refine_prompt(topic: &str, section: &str, draft: &str) -> String {
    let mut prompt = format!(
        "Refine and expand the following draft for the \"{section}\" section of a Wikipedia \
         article about \"{topic}\". Make the section as long, detailed, and comprehensive as \
         possible, up to the maximum length allowed. Add more subtopics, examples, and background \
         where possible. Ensure all claims are supported and cite sources as [1], [2], etc."
    );
    prompt.push_str("\n\nDraft Section:\n");
    prompt.push_str(draft);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_prompt_carries_sources() {
        let prompt = draft_prompt("Cats", "History", "[1] cats are mammals");
        assert!(prompt.contains("\"History\" section"));
        assert!(prompt.ends_with("Sources:\n[1] cats are mammals"));
    }

    #[test]
    fn refine_prompt_carries_only_the_draft() {
        let prompt = refine_prompt("Cats", "History", "Cats were domesticated [1].");
        assert!(prompt.ends_with("Draft Section:\nCats were domesticated [1]."));
        assert!(!prompt.contains("Sources:"));
    }

    #[test]
    fn plan_prompt_names_topic() {
        assert!(section_plan_prompt("Rust").contains("about \"Rust\""));
    }
}

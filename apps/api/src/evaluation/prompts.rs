// All LLM prompt construction for the evaluation service.
// The rubric is fixed: four sub-criteria scored 1-10 plus free-text
// summary and improvement fields, with a category-specific emphasis line.

use crate::bank::Category;

/// Builds the system prompt carrying the scoring rubric.
/// The secondary emphasis (technical accuracy vs behavioral/soft skills)
/// is selected by the interview category.
pub fn build_system_prompt(category: Category) -> String {
    let (label, emphasis) = match category {
        Category::Technical => (
            "technical",
            "also assess technical accuracy and problem-solving approach",
        ),
        Category::Hr => (
            "HR",
            "also assess behavioral examples and soft skills demonstration",
        ),
    };

    format!(
        "You are an expert interview coach evaluating candidate responses. \n\
         Your task is to evaluate answers based on:\n\
         1. Communication clarity (how well they express ideas)\n\
         2. Confidence (tone and conviction in their answer)\n\
         3. Grammar and language quality\n\
         4. Relevance to the question asked\n\
         \n\
         For {label} questions, {emphasis}.\n\
         \n\
         Provide scores from 1-10 for each criterion and an overall score from 0-100.\n\
         Also provide constructive feedback and improvement suggestions."
    )
}

/// Builds the user prompt with the question/answer pair and the exact
/// JSON reply schema the normalizer expects.
pub fn build_user_prompt(question: &str, answer: &str) -> String {
    format!(
        "Question: {question}\n\
         \n\
         Candidate's Answer: {answer}\n\
         \n\
         Please evaluate this answer and respond in JSON format with:\n\
         {{\n\
           \"communication\": <score 1-10>,\n\
           \"confidence\": <score 1-10>,\n\
           \"grammar\": <score 1-10>,\n\
           \"relevance\": <score 1-10>,\n\
           \"summary\": \"<brief feedback>\",\n\
           \"improvements\": \"<improvement suggestions>\"\n\
         }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_selects_technical_emphasis() {
        let prompt = build_system_prompt(Category::Technical);
        assert!(prompt.contains("technical accuracy"));
        assert!(!prompt.contains("soft skills"));
    }

    #[test]
    fn test_system_prompt_selects_hr_emphasis() {
        let prompt = build_system_prompt(Category::Hr);
        assert!(prompt.contains("soft skills"));
        assert!(!prompt.contains("problem-solving"));
    }

    #[test]
    fn test_user_prompt_embeds_pair_and_schema() {
        let prompt = build_user_prompt("What is Rust?", "A systems language.");
        assert!(prompt.contains("Question: What is Rust?"));
        assert!(prompt.contains("Candidate's Answer: A systems language."));
        assert!(prompt.contains("\"communication\""));
        assert!(prompt.contains("\"improvements\""));
    }
}

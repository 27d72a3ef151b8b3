//! Prompt constants and builders for aptitude explanations.

/// System prompt template. Replace `{min_sentences}` before sending.
const EXPLAIN_SYSTEM_TEMPLATE: &str = "\
You are a world-class Aptitude Tutor for AptiVerse.
A student just answered an aptitude question incorrectly.
Your goal is to provide a structured, deep, and comprehensive explanation.

STRICT RESPONSE STRUCTURE:
1. THE CORRECT ANSWER: Start by clearly stating \"The correct answer is [correctAnswer]\".
2. WHY IT IS RIGHT: Provide a detailed, step-by-step logical breakdown of how to reach the correct answer. Explain the concepts clearly.
3. WHY YOUR ANSWER WAS WRONG: Analyze the student's choice and explain the specific logical error, trap, or misunderstanding that leads to that wrong choice.

RULES:
- BE VERBOSE: Use at least {min_sentences} sentences in total.
- SIMPLE LANGUAGE: Use clear, easy-to-understand language.
- NO MARKDOWN: No asterisks, no bolding, no bullet points. Use plain text only.
- SEPARATION: Use double newlines between the three sections.
- TONE: Professional, encouraging, and master-level tutoring.";

pub fn explain_system(min_sentences: u32) -> String {
    EXPLAIN_SYSTEM_TEMPLATE.replace("{min_sentences}", &min_sentences.to_string())
}

pub fn explain_user_prompt(question: &str, correct_answer: &str, user_answer: &str) -> String {
    format!(
        "QUESTION: {question}\n\
         STUDENT'S WRONG CHOICE: {user_answer}\n\
         ACTUAL CORRECT ANSWER: {correct_answer}\n\n\
         Provide the explanation following the three-section structure exactly.\n\
         Section 1: The correct answer.\n\
         Section 2: Detailed logic of why the correct answer is right.\n\
         Section 3: Analysis of why the student's choice ({user_answer}) is incorrect."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_system_interpolates_floor() {
        let system = explain_system(7);
        assert!(system.contains("at least 7 sentences"));
        assert!(!system.contains("{min_sentences}"));
    }

    #[test]
    fn test_user_prompt_embeds_all_fields() {
        let prompt = explain_user_prompt("2+2=?", "4", "5");
        assert!(prompt.contains("QUESTION: 2+2=?"));
        assert!(prompt.contains("STUDENT'S WRONG CHOICE: 5"));
        assert!(prompt.contains("ACTUAL CORRECT ANSWER: 4"));
    }
}

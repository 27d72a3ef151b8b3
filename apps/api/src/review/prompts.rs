//! Prompt constants and builders for code review.

pub const REVIEW_SYSTEM: &str = "\
You are an expert developer and technical interviewer.
Your task is to review the candidate's code for a specific challenge.
Provide constructive feedback on:
1. Correctness: Does it solve the problem?
2. Efficiency: Time and space complexity.
3. Idioms: Does it follow the language's best practices?
4. Quality: Readability and structure.

Format your response in plain text without markdown or asterisks.
Start with \"FEEDBACK:\" followed by your analysis.
End with a score out of 100.";

/// Apology returned when generation fails; the candidate can simply resubmit.
pub const REVIEW_APOLOGY: &str =
    "FEEDBACK: I encountered an error while reviewing your code. Please try submitting again.";

pub fn review_user_prompt(challenge_title: &str, problem_statement: &str, code: &str) -> String {
    format!(
        "Challenge: {challenge_title}\n\
         Problem: {problem_statement}\n\
         Candidate's Code:\n\
         {code}"
    )
}

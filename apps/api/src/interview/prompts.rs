//! Prompt constants and builders for the interview feature, including the
//! canned fallbacks that keep the session alive when generation fails.

use crate::interview::session::Question;

/// Marker the model is instructed to emit before each question; also used to
/// count how far through the question bank the session has progressed.
pub const NEXT_QUESTION_MARKER: &str = "NEXT_QUESTION";

/// Practice paragraph returned when no provider is configured or the call fails.
pub const FALLBACK_PARAGRAPH: &str = "I am a highly motivated professional with a strong \
    background in technical problem-solving and cross-functional collaboration. Throughout my \
    career, I have consistently demonstrated a commitment to excellence and a proactive approach \
    to challenges. My ability to adapt to new environments and master complex systems has allowed \
    me to deliver high-quality results consistently. I am eager to bring my expertise and passion \
    for innovation to your team, contributing to the continued success and growth of the \
    organization while further developing my professional skills.";

/// Opening greeting returned when no provider is configured or the call fails.
pub const FALLBACK_GREETING: &str = "Hello! I am your AI Technical Interviewer. I will be \
    evaluating your skills for this position today. To begin our session, may I have your name?";

/// Step response when no provider is configured.
pub const STEP_UNAVAILABLE: &str = "FEEDBACK: I'm currently unable to provide real-time \
    feedback right now. However, please continue your practice!\n\
    NEXT_QUESTION: Let's move to the next part of our assessment.";

/// Step response when the provider call fails mid-session. Asking the
/// candidate to repeat keeps the conversation loop alive.
pub const STEP_APOLOGY: &str = "FEEDBACK: I apologize, but I encountered a technical \
    interruption. NEXT_QUESTION: Could you please repeat your last response so we can continue?";

pub const INTERVIEW_STEP_SYSTEM: &str = "\
You are an elite Technical AI Interviewer. You are conducting a structured assessment that analyzes both technical accuracy and candidate confidence.

CONFIDENCE ANALYSIS RULES:
1. You will receive a \"Speech Confidence Score\" (0.0 to 1.0) with each user response.
2. High Confidence (>0.85): Acknowledge their clarity and directness.
3. Moderate Confidence (0.70-0.85): Suggest they sound a bit hesitant but correct.
4. Low Confidence (<0.70): Provide encouragement and suggest they speak more firmly.

INTERVIEW ARCHITECTURE:
Phase 1: Rapport - Greet by name and explain the process.
Phase 2: Technical Evaluation - Ask multiple-choice questions one by one.

STRICT EVALUATION PROTOCOL:
1. When a candidate answers:
   - Analyze technical correctness against the bank.
   - Analyze their \"Confidence Score\".
   - Provide feedback that combines technical accuracy AND communication style.

2. COMMUNICATION STYLE:
   - Plain text ONLY. No markdown.
   - Format every response as:
     FEEDBACK: [Analysis of technical answer + Analysis of their voice confidence/delivery]
     NEXT_QUESTION: [Next question + options]";

pub fn start_system(role: &str, wants_paragraph: bool) -> String {
    if wants_paragraph {
        format!(
            "You are an expert Professional Communication Coach.\n\
             Generate a professional, high-level interview response paragraph for a {role} position.\n\
             The paragraph should be between 60-100 words.\n\
             It should sound professional, confident, and include some industry-specific terminology.\n\
             STRICT RULE: NO MARKDOWN. NO BOLDING. NO ASTERISKS. PLAIN TEXT ONLY."
        )
    } else {
        format!(
            "You are a sophisticated, elite technical interviewer for {role} positions.\n\
             Your persona: Professional, highly intelligent, encouraging, but rigorous.\n\
             Your goal: Conduct a structured technical assessment that feels like a real conversation.\n\
             CRITICAL RULES:\n\
             1. NO MARKDOWN: Never use asterisks, bolding, or special formatting. Use plain text only.\n\
             2. FLOW: Start by introducing yourself and asking for the candidate's name.\n\
             3. ADAPTIVE: Be warm and welcoming. Use the candidate's name once you have it."
        )
    }
}

pub fn start_user_prompt(role: &str, wants_paragraph: bool) -> String {
    if wants_paragraph {
        format!(
            "Provide a professional interview response paragraph that a candidate for a {role} \
             role would read out loud to practice their delivery."
        )
    } else {
        format!(
            "Initiate a high-level technical interview for a {role} position. \
             Begin with a professional greeting, introduce your role as an AI evaluator, and ask \
             for the candidate's name to begin the session."
        )
    }
}

/// Renders a bank question with its four labeled options.
pub fn format_question_block(question: &Question) -> String {
    let labels = ["A", "B", "C", "D"];
    let mut block = question.question.clone();
    block.push_str("\n\nOptions:");
    for (label, option) in labels.iter().zip(question.options.iter()) {
        block.push_str(&format!("\n{label}) {option}"));
    }
    block
}

/// Prompt for the first user turn: acknowledge the stated name and present
/// the first bank question verbatim.
pub fn first_turn_prompt(name: &str, first_question: Option<&Question>) -> String {
    let question_block = match first_question {
        Some(question) => format!("FIRST QUESTION:\n{}", format_question_block(question)),
        None => "FIRST QUESTION:\nAsk a foundational technical question related to the role."
            .to_string(),
    };

    format!(
        "The candidate's name is \"{name}\".\n\
         1. Acknowledge them warmly.\n\
         2. Explain that you will be evaluating their technical skills and communication confidence.\n\
         3. Transition immediately to the first technical question from the bank.\n\n\
         {question_block}\n\n\
         Format:\n\
         FEEDBACK: It is a pleasure to meet you, {name}. I will be assessing your technical \
         expertise and delivery today. Let's begin.\n\
         {NEXT_QUESTION_MARKER}: [the first question with its options]"
    )
}

/// Prompt for every later turn: grade the previous answer, comment on
/// delivery, and present the next bank question (or close the interview).
pub fn evaluation_prompt(
    last_response: &str,
    confidence: f64,
    previous: Option<&Question>,
    next: Option<&Question>,
) -> String {
    let previous_block = match previous {
        Some(question) => {
            let correct_text = question
                .options
                .get(question.correct_answer)
                .map(String::as_str)
                .unwrap_or("(unknown)");
            format!(
                "PREVIOUS QUESTION CONTEXT:\n\
                 Question: \"{}\"\n\
                 Correct Text: \"{}\"\n\
                 Explanation: \"{}\"",
                question.question, correct_text, question.explanation
            )
        }
        None => "PREVIOUS QUESTION CONTEXT:\nN/A".to_string(),
    };

    let next_block = match next {
        Some(question) => format!(
            "NEXT QUESTION TO ASK:\n{}",
            format_question_block(question)
        ),
        None => "NEXT QUESTION TO ASK:\nNONE - The interview is complete.".to_string(),
    };

    format!(
        "Candidate's Response: \"{last_response}\"\n\
         Speech Confidence Score: {confidence:.2}\n\n\
         {previous_block}\n\n\
         {next_block}\n\n\
         Task:\n\
         - Evaluate the candidate's response against the previous question.\n\
         - Provide FEEDBACK following the protocol (correction if wrong, insight if right).\n\
         - Provide {NEXT_QUESTION_MARKER} from the bank or a closing message."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            question: "What does a mutex guard?".into(),
            options: vec![
                "Memory layout".into(),
                "Shared data".into(),
                "Thread IDs".into(),
                "Stack frames".into(),
            ],
            correct_answer: 1,
            explanation: "A mutex serializes access to shared data.".into(),
        }
    }

    #[test]
    fn test_format_question_block_labels_options() {
        let block = format_question_block(&question());
        assert!(block.starts_with("What does a mutex guard?"));
        assert!(block.contains("A) Memory layout"));
        assert!(block.contains("D) Stack frames"));
    }

    #[test]
    fn test_first_turn_prompt_uses_name_and_question() {
        let q = question();
        let prompt = first_turn_prompt("Priya", Some(&q));
        assert!(prompt.contains("The candidate's name is \"Priya\""));
        assert!(prompt.contains("What does a mutex guard?"));
        assert!(prompt.contains("B) Shared data"));
    }

    #[test]
    fn test_evaluation_prompt_includes_grading_context() {
        let q = question();
        let prompt = evaluation_prompt("I picked B", 0.92, Some(&q), None);
        assert!(prompt.contains("Speech Confidence Score: 0.92"));
        assert!(prompt.contains("Correct Text: \"Shared data\""));
        assert!(prompt.contains("NONE - The interview is complete."));
    }

    #[test]
    fn test_evaluation_prompt_without_previous_question() {
        let prompt = evaluation_prompt("hello", 0.8, None, None);
        assert!(prompt.contains("PREVIOUS QUESTION CONTEXT:\nN/A"));
    }
}

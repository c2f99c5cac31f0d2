// src/prompts.rs
//! Prompt templates, one per capability. Each function is a pure
//! mapping from request fields to a [`CompletionRequest`]. The JSON
//! examples embedded in the prompt text are the response contract the
//! provider is asked to mimic; field names and nesting matter.

use crate::completion::{ChatMessage, CompletionRequest, GenerationParams};
use crate::extract::truncate_chars;
use crate::web::types::{ChatTurn, Job};

// Character ceilings bounding prompt size.
const RESUME_ANALYSIS_LIMIT: usize = 10_000;
const PROFILE_LIMIT: usize = 2_000;
const ROADMAP_RESUME_LIMIT: usize = 1_000;
const INTERVIEW_CONTEXT_LIMIT: usize = 500;
const JOB_SNIPPET_LIMIT: usize = 200;
const EVALUATION_CONTEXT_LIMIT: usize = 200;

const CHAT_SYSTEM: &str = "You are JobMate AI, a helpful career assistant. You help users with job search, interview prep, and career advice.";

pub fn resume_analysis(resume_text: &str) -> CompletionRequest {
    let prompt = format!(
        r#"Analyze the following resume text and extract the key skills, experience summary, and provide 3 quick improvement tips.
Return the response in strict JSON format with the following structure:
{{
    "skills": ["skill1", "skill2", ...],
    "summary": "Brief professional summary...",
    "tips": ["tip1", "tip2", "tip3"],
    "confidence": 0.95
}}

Resume Text:
{}"#,
        truncate_chars(resume_text, RESUME_ANALYSIS_LIMIT)
    );

    CompletionRequest::from_prompts(
        "You are an expert career coach and resume analyzer. Always respond in valid JSON.",
        prompt,
        GenerationParams {
            temperature: 0.2,
            max_tokens: 2048,
            json_mode: true,
        },
    )
}

pub fn job_match(resume_text: &str, job_description: &str) -> CompletionRequest {
    let prompt = format!(
        r#"Compare the following resume with the job description. Calculate a match score (0-100) and identify matched skills and missing skills.
Return the response in strict JSON format with the following structure:
{{
    "score": 85,
    "matchedSkills": ["skill1", "skill2"],
    "missingSkills": ["skill3", "skill4"],
    "recommendations": ["rec1", "rec2"]
}}

Resume:
{}

Job Description:
{}"#,
        resume_text, job_description
    );

    CompletionRequest::from_prompts(
        "You are an expert ATS system. Always respond in valid JSON.",
        prompt,
        GenerationParams {
            temperature: 0.2,
            max_tokens: 2048,
            json_mode: true,
        },
    )
}

/// Prior turns are replayed verbatim, in order, between the system
/// message and the new user message. Roles are passed through as
/// supplied by the caller.
pub fn chat(message: &str, history: &[ChatTurn]) -> CompletionRequest {
    let mut messages = vec![ChatMessage::system(CHAT_SYSTEM)];

    for turn in history {
        messages.push(ChatMessage {
            role: turn.role.clone(),
            content: turn.content.clone(),
        });
    }

    messages.push(ChatMessage::user(message));

    CompletionRequest {
        messages,
        params: GenerationParams {
            temperature: 0.7,
            max_tokens: 1024,
            json_mode: false,
        },
    }
}

pub fn job_recommendation(jobs: &[Job], profile: &str) -> CompletionRequest {
    let mut jobs_text = String::new();
    for job in jobs {
        jobs_text.push_str(&format!(
            "ID: {}\nTitle: {}\nSkills: {}\nDescription: {}...\n\n",
            job.id,
            job.title,
            job.skills.join(", "),
            truncate_chars(&job.description, JOB_SNIPPET_LIMIT)
        ));
    }

    let prompt = format!(
        r#"You are an expert career advisor. I will provide a user profile and a list of available jobs.
Your task is to select the top 3 best matching jobs for this user.

User Profile:
{}

Available Jobs:
{}

Return the response in strict JSON format with the following structure:
{{
    "recommendations": [
        {{
            "jobId": "id1",
            "reason": "Why this is a good match..."
        }},
        ...
    ]
}}"#,
        truncate_chars(profile, PROFILE_LIMIT),
        jobs_text
    );

    CompletionRequest::from_prompts(
        "You are a helpful job matching assistant. Always respond in valid JSON.",
        prompt,
        GenerationParams {
            temperature: 0.2,
            max_tokens: 1024,
            json_mode: true,
        },
    )
}

pub fn career_roadmap(resume_text: &str, skills: &[String], desired_role: &str) -> CompletionRequest {
    let prompt = format!(
        r##"Create a personalized 3-month career roadmap for a user aspiring to be a "{}".

User Profile:
- Skills: {}
- Resume Summary: {}

The roadmap should be practical, actionable, and focused on bridging skill gaps.

Return the response in strict JSON format with the following structure:
{{
    "timeline": [
        {{
            "week": "Week 1-2",
            "focus": "Topic/Skill",
            "actionItems": ["item1", "item2"]
        }},
        ... (cover 12 weeks)
    ],
    "skillGaps": ["gap1", "gap2"],
    "courses": [
        {{
            "title": "Course Name",
            "platform": "Platform (e.g., Coursera, Udemy)",
            "link": "#"
        }}
    ],
    "projectIdeas": [
        {{
            "title": "Project Name",
            "description": "Brief description"
        }}
    ],
    "trends": ["trend1", "trend2"]
}}"##,
        desired_role,
        skills.join(", "),
        truncate_chars(resume_text, ROADMAP_RESUME_LIMIT)
    );

    CompletionRequest::from_prompts(
        "You are an expert career mentor. Always respond in valid JSON.",
        prompt,
        GenerationParams {
            temperature: 0.3,
            max_tokens: 2048,
            json_mode: true,
        },
    )
}

pub fn interview_questions(
    resume_text: &str,
    job_description: &str,
    difficulty: &str,
    question_type: &str,
) -> CompletionRequest {
    let prompt = format!(
        r#"Generate 5 distinct {} {} interview questions for a candidate.

Context:
- Job Description: {}...
- Resume Summary: {}...

Return in strict JSON format with a "questions" array:
{{
    "questions": [
        {{
            "id": 1,
            "question": "Question text...",
            "context": "Why this is relevant..."
        }},
        ...
    ]
}}"#,
        difficulty,
        question_type,
        truncate_chars(job_description, INTERVIEW_CONTEXT_LIMIT),
        truncate_chars(resume_text, INTERVIEW_CONTEXT_LIMIT)
    );

    CompletionRequest::from_prompts(
        "You are an expert technical interviewer. Always respond in valid JSON.",
        prompt,
        GenerationParams {
            temperature: 0.7,
            max_tokens: 1500,
            json_mode: true,
        },
    )
}

pub fn interview_evaluation(
    question: &str,
    answer: &str,
    job_description: &str,
) -> CompletionRequest {
    let prompt = format!(
        r#"Evaluate the candidate's answer to the interview question.

Question: {}
Candidate Answer: {}
Job Context: {}...

Return in strict JSON format:
{{
    "score": 85,
    "feedback": "Constructive feedback...",
    "improvements": ["Suggestion 1", "Suggestion 2"],
    "sample_answer": "An ideal answer would be..."
}}"#,
        question,
        answer,
        truncate_chars(job_description, EVALUATION_CONTEXT_LIMIT)
    );

    CompletionRequest::from_prompts(
        "You are an expert interviewer providing feedback. Always respond in valid JSON.",
        prompt,
        GenerationParams {
            temperature: 0.3,
            max_tokens: 1000,
            json_mode: true,
        },
    )
}

pub fn aptitude_question(topic: &str, difficulty: &str) -> CompletionRequest {
    let prompt = format!(
        r#"Generate a single {} aptitude question on the topic: {}.

Return in strict JSON format:
{{
    "question": "The question text",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct_option": "Option A"
}}"#,
        difficulty, topic
    );

    CompletionRequest::from_prompts(
        "You are an aptitude trainer. Always respond in valid JSON.",
        prompt,
        GenerationParams {
            temperature: 0.7,
            max_tokens: 500,
            json_mode: true,
        },
    )
}

pub fn aptitude_evaluation(question: &str, answer: &str) -> CompletionRequest {
    let prompt = format!(
        r#"Evaluate the answer to the aptitude question.

Question: {}
User Answer: {}

Return in strict JSON format:
{{
    "is_correct": true/false,
    "explanation": "Detailed step-by-step solution...",
    "topic_analysis": "This tests your ability to..."
}}"#,
        question, answer
    );

    CompletionRequest::from_prompts(
        "You are an aptitude trainer. Always respond in valid JSON.",
        prompt,
        GenerationParams {
            temperature: 0.1,
            max_tokens: 500,
            json_mode: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_analysis_truncates_to_ceiling() {
        let long_resume = "Z".repeat(15_000);
        let request = resume_analysis(&long_resume);

        let user_prompt = &request.messages[1].content;
        assert!(user_prompt.contains(&"Z".repeat(10_000)));
        assert!(!user_prompt.contains(&"Z".repeat(10_001)));
    }

    #[test]
    fn test_resume_analysis_params() {
        let request = resume_analysis("Python developer");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert!(request.params.json_mode);
        assert_eq!(request.params.max_tokens, 2048);
    }

    #[test]
    fn test_chat_replays_history_in_order() {
        let history = vec![
            ChatTurn {
                role: "user".to_string(),
                content: "Hi".to_string(),
            },
            ChatTurn {
                role: "assistant".to_string(),
                content: "Hello! How can I help?".to_string(),
            },
            ChatTurn {
                role: "user".to_string(),
                content: "I need a job".to_string(),
            },
        ];

        let request = chat("What about remote roles?", &history);

        assert_eq!(request.messages.len(), 5);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].content, "Hi");
        assert_eq!(request.messages[2].role, "assistant");
        assert_eq!(request.messages[3].content, "I need a job");
        assert_eq!(request.messages[4].content, "What about remote roles?");
        assert!(!request.params.json_mode);
    }

    #[test]
    fn test_job_recommendation_truncates_each_description() {
        let jobs = vec![Job {
            id: "job-1".to_string(),
            title: "Backend Engineer".to_string(),
            description: "Q".repeat(500),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
        }];

        let request = job_recommendation(&jobs, "Experienced backend developer");
        let user_prompt = &request.messages[1].content;

        assert!(user_prompt.contains("ID: job-1"));
        assert!(user_prompt.contains("Skills: Rust, SQL"));
        assert!(user_prompt.contains(&format!("{}...", "Q".repeat(200))));
        assert!(!user_prompt.contains(&"Q".repeat(201)));
    }

    #[test]
    fn test_interview_questions_embed_difficulty_and_type() {
        let request = interview_questions("resume", "job", "hard", "technical");
        let user_prompt = &request.messages[1].content;
        assert!(user_prompt.contains("5 distinct hard technical interview questions"));
        assert_eq!(request.params.max_tokens, 1500);
    }

    #[test]
    fn test_evaluation_temperatures_are_low() {
        assert_eq!(
            interview_evaluation("q", "a", "jd").params.temperature,
            0.3
        );
        assert_eq!(aptitude_evaluation("q", "a").params.temperature, 0.1);
        assert_eq!(aptitude_question("math", "easy").params.temperature, 0.7);
    }
}

use crate::{
    schema::{Schema, playlist_schema},
    types::CurateOptions,
};

static SYSTEM_INSTRUCTION: &str = r#"You are CurateFlow, an intelligent video curation engine.
Your goal is to generate a structured YouTube playlist based on user intent.

Adhere to these rules:
1. STRICTLY respect the time constraints.
2. Curate real, high-quality content that fits the 'Depth' and 'Vibe'.
3. If 'Course Mode' is on, structure the videos in a logical learning order (Lesson 1, Lesson 2...).
4. Provide a 'reasoning' for why this video fits the specific user flow.
5. Do not include generic filler. Every video must add value."#;

const COURSE_MODE_ENABLED: &str = "Enabled (Structure as a syllabus)";
const COURSE_MODE_DISABLED: &str = "Disabled (Flow playlist)";

/// Everything the backend needs for one curation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurateRequest {
    pub system_instruction: String,
    pub user_message: String,
    pub response_schema: Schema,
}

/// Build the system instruction, user message and response schema.
///
/// Pure: identical inputs always produce an identical request. The prompt is
/// embedded as given; rejecting blank prompts is up to the caller.
pub fn compose(prompt: &str, options: &CurateOptions) -> CurateRequest {
    CurateRequest {
        system_instruction: system_instruction().to_string(),
        user_message: user_message(prompt, options),
        response_schema: playlist_schema(),
    }
}

pub fn system_instruction() -> &'static str {
    SYSTEM_INSTRUCTION
}

pub fn user_message(prompt: &str, options: &CurateOptions) -> String {
    let course_mode = if options.is_course_mode() {
        COURSE_MODE_ENABLED
    } else {
        COURSE_MODE_DISABLED
    };

    format!(
        "User Request: \"{prompt}\"\n\
         Constraints:\n\
         - Target Duration: {duration} minutes\n\
         - Depth Level: {depth}\n\
         - Vibe: {vibe}\n\
         - Course Mode: {course_mode}\n\
         \n\
         Generate a JSON response representing the curated playlist.",
        duration = options.duration_minutes(),
        depth = options.depth().label(),
        vibe = options.vibe().label(),
    )
}

//! Resume tailoring against a job description.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::{TAILOR_PROMPT_TEMPLATE, TAILOR_TEMPERATURE};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;

/// What the generator hands back. `html_content` is a raw fragment; it is not
/// trusted for encoding or colors and must go through `finalize` before display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoredContent {
    pub job_title: String,
    pub company: String,
    pub html_content: String,
}

pub fn build_tailor_prompt(resume_text: &str, jd_text: &str) -> String {
    format!(
        "{}\n{}",
        TAILOR_PROMPT_TEMPLATE
            .replace("{resume_text}", resume_text)
            .replace("{jd_text}", jd_text),
        JSON_ONLY_INSTRUCTION
    )
}

/// Tailors `resume_text` to `jd_text` through the LLM.
pub async fn tailor_resume_content(
    resume_text: &str,
    jd_text: &str,
    llm: &LlmClient,
) -> Result<TailoredContent, AppError> {
    let prompt = build_tailor_prompt(resume_text, jd_text);
    let content = llm
        .call_json::<TailoredContent>(&prompt, TAILOR_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Resume tailoring failed: {e}")))?;

    if content.html_content.trim().is_empty() {
        return Err(AppError::Llm(
            "Resume tailoring returned empty HTML".to_string(),
        ));
    }

    Ok(content)
}

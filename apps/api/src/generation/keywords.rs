//! Asks the LLM which JD terms should be emphasized in the resume.
//!
//! Highlighting is a nice-to-have: any failure here degrades to "no keywords"
//! instead of failing the tailoring request.

use tracing::{info, warn};

use crate::generation::prompts::{KEYWORDS_PROMPT_TEMPLATE, KEYWORDS_TEMPERATURE};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;

/// Cap on what we accept back; the prompt asks for 15-20.
const MAX_KEYWORDS: usize = 30;

pub fn build_keywords_prompt(jd_text: &str) -> String {
    format!(
        "{}\n{}",
        KEYWORDS_PROMPT_TEMPLATE.replace("{jd_text}", jd_text),
        JSON_ONLY_INSTRUCTION
    )
}

/// Extracts highlight keywords from a job description. Never fails.
pub async fn extract_keywords(jd_text: &str, llm: &LlmClient) -> Vec<String> {
    let prompt = build_keywords_prompt(jd_text);
    match llm.call_json::<Vec<String>>(&prompt, KEYWORDS_TEMPERATURE).await {
        Ok(raw) => {
            let keywords = clean_keywords(raw);
            info!("Extracted {} keywords: {:?}", keywords.len(), keywords);
            keywords
        }
        Err(e) => {
            warn!("Keyword extraction failed, continuing without highlighting: {e}");
            Vec::new()
        }
    }
}

/// Trims entries, drops blanks and caps the list. Deduplication and ordering
/// are left to the highlighter.
fn clean_keywords(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .take(MAX_KEYWORDS)
        .collect()
}

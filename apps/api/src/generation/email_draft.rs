//! Application email drafts.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::{EMAIL_DRAFT_PROMPT_TEMPLATE, EMAIL_TEMPERATURE};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;

#[derive(Debug, Deserialize)]
struct DraftReply {
    subject: String,
    body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
    pub recipient_email: Option<String>,
}

pub fn build_email_prompt(job_title: &str, company: &str) -> String {
    format!(
        "{}\n{}",
        EMAIL_DRAFT_PROMPT_TEMPLATE
            .replace("{job_title}", job_title)
            .replace("{company}", company),
        JSON_ONLY_INSTRUCTION
    )
}

/// Drafts an application email for the given role. The recipient is passed
/// through untouched so the client can prefill its compose window.
pub async fn generate_email_draft(
    job_title: &str,
    company: &str,
    recipient_email: Option<String>,
    llm: &LlmClient,
) -> Result<EmailDraft, AppError> {
    let prompt = build_email_prompt(job_title, company);
    let reply = llm
        .call_json::<DraftReply>(&prompt, EMAIL_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Email draft generation failed: {e}")))?;

    Ok(EmailDraft {
        subject: reply.subject,
        body: reply.body,
        recipient_email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_prompt_mentions_role_and_company() {
        let prompt = build_email_prompt("Data Engineer", "Globex");
        assert!(prompt.contains("Role: Data Engineer"));
        assert!(prompt.contains("Company: Globex"));
    }

    #[test]
    fn test_email_draft_serializes_null_recipient() {
        let draft = EmailDraft {
            subject: "Application".to_string(),
            body: "Hello".to_string(),
            recipient_email: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json["recipient_email"].is_null());
    }
}

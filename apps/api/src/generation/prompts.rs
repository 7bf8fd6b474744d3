// All LLM prompt templates for the Generation module.
// Placeholders are `{name}` and are replaced with `str::replace` before sending.

/// Keyword extraction. Replace `{jd_text}`.
pub const KEYWORDS_PROMPT_TEMPLATE: &str = r#"You are an ATS keyword extraction expert.

Job Description:
{jd_text}

Extract the 15-20 keywords from this job description that a recruiter's ATS will
scan for and that should stand out in a tailored resume. Prioritize:
1. Technical skills (Python, React, AWS, ...)
2. Tools and frameworks (Docker, Kubernetes, FastAPI, ...)
3. Key qualifications (Machine Learning, Data Science, ...)
4. Certifications or hard requirements

Rules:
- Each keyword is 1-3 words
- Use the canonical capitalization ("Python", not "python")
- Include common variants when both matter ("AI", "Artificial Intelligence")

Return a JSON array of strings:
["keyword1", "keyword2", ...]
"#;

/// Resume tailoring. Replace `{resume_text}` and `{jd_text}`.
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"You are an expert ATS optimization specialist and resume writer.

Original Resume Content:
{resume_text}

Job Description:
{jd_text}

Tasks:
1. Extract the job title and the company name from the job description
2. Identify the skills, technologies and keywords the job description emphasizes
3. Rewrite the resume so it incorporates them naturally
4. Stay truthful: never invent employers, titles, dates or achievements
5. Return the resume as clean, semantic HTML

HTML REQUIREMENTS:
- Use ONLY these tags: <html>, <body>, <h1>, <h2>, <h3>, <p>, <ul>, <li>, <strong>, <em>
- Put ALL formatting in inline style attributes; no flexbox, no grid
- Structure: name (h1), contact line (p), sections (h2), job titles (h3)
- Use <strong> for company names, job titles and important terms

Return a JSON object with this EXACT schema:
{
  "job_title": "extracted job title",
  "company": "extracted company name",
  "html_content": "<html><body>...</body></html>"
}
"#;

/// Application email. Replace `{job_title}` and `{company}`.
pub const EMAIL_DRAFT_PROMPT_TEMPLATE: &str = r#"Write a concise, professional job application email.

Role: {job_title}
Company: {company}

Requirements:
- Under 150 words
- Professional but warm
- Mention the attached resume
- Express genuine interest in the role
- End with a clear call to action

Return a JSON object with this EXACT schema:
{
  "subject": "Email subject line",
  "body": "Email body text"
}
"#;

// Sampling temperatures per task: extraction is near-deterministic, prose is looser.
pub const KEYWORDS_TEMPERATURE: f32 = 0.3;
pub const TAILOR_TEMPERATURE: f32 = 0.7;
pub const EMAIL_TEMPERATURE: f32 = 0.8;

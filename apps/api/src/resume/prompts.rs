// Prompt constants for resume generation.

/// System prompt for resume generation. Enforces JSON-only output.
pub const GENERATION_SYSTEM: &str = "You are an expert resume writer. \
    Turn a person's free-form description of themselves into a structured resume. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Generation prompt template. Replace `{user_description}` before sending.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Generate a resume from the description below.

Return a JSON object with this EXACT schema:
{
  "personalInformation": {
    "fullName": "string",
    "email": "string",
    "phoneNumber": "string",
    "location": "string",
    "linkedIn": "string",
    "gitHub": "string",
    "portfolio": "string"
  },
  "summary": "string",
  "skills": [{"title": "string", "level": "string"}],
  "experience": [
    {"jobTitle": "string", "company": "string", "location": "string", "duration": "string", "responsibility": "string"}
  ],
  "education": [
    {"degree": "string", "university": "string", "location": "string", "graduationYear": "string"}
  ],
  "certifications": [{"title": "string", "issuingOrganization": "string", "year": "string"}],
  "projects": [
    {"title": "string", "description": "string", "technologiesUsed": ["string"], "githubLink": "string"}
  ],
  "achievements": [{"title": "string", "year": "string", "extraInformation": "string"}],
  "languages": [{"name": "string"}],
  "interests": [{"name": "string"}]
}

Rules:
- Use ONLY facts stated in the description. Do not invent employers, dates, degrees or contact details.
- Leave a string empty ("") or an array empty ([]) when the description does not cover it.

Description:
{user_description}"#;

pub fn build_generation_prompt(user_description: &str) -> String {
    GENERATION_PROMPT_TEMPLATE.replace("{user_description}", user_description.trim())
}

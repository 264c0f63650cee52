// All LLM prompt constants for the optimization pipeline.

/// Optimization prompt template. Replace `{resume_text}` and
/// `{job_description}` before sending.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = r#"You are an expert AI resume assistant and career coach.
Your task is to optimize the provided resume to perfectly match the given job description.

Analyze the following:
- Resume Text: "{resume_text}"
- Job Description: "{job_description}"

Return a JSON object with this EXACT schema (no extra fields):
{
  "optimized_resume_text": "A complete, rewritten version of the resume.",
  "explanation_of_changes": "- **Keywords Added:** ...\n- **Impactful Language:** ...\n- **ATS Optimization:** ..."
}

Rules for rewriting:

1. "optimized_resume_text": Incorporate relevant keywords and action verbs from
   the job description naturally. Rephrase bullet points to highlight
   achievements and measurable outcomes that align with the job's requirements.
   Maintain a professional tone. Do NOT invent new experiences.

2. "explanation_of_changes": A brief, bulleted list in a SINGLE string (not a
   nested structure) covering:
   - Keywords Added: important keywords from the job description that were integrated.
   - Action Verbs: how action verbs were improved to be more impactful.
   - ATS Friendliness: why the new format is better for Applicant Tracking Systems (ATS).

Both values MUST be strings.
Provide ONLY the JSON object in your response.
Do NOT include any text outside the JSON object.
Do NOT use markdown code fences."#;

/// Renders the optimization prompt for one resume/JD pair.
/// Pure string substitution — both inputs are embedded verbatim.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    OPTIMIZE_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_both_inputs_verbatim() {
        let prompt = build_prompt("Shipped a parser in Rust.", "Seeking a compiler engineer");
        assert!(prompt.contains("Shipped a parser in Rust."));
        assert!(prompt.contains("Seeking a compiler engineer"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_template_mandates_both_output_keys() {
        assert!(OPTIMIZE_PROMPT_TEMPLATE.contains("\"optimized_resume_text\""));
        assert!(OPTIMIZE_PROMPT_TEMPLATE.contains("\"explanation_of_changes\""));
        assert!(OPTIMIZE_PROMPT_TEMPLATE.contains("ONLY the JSON object"));
    }
}

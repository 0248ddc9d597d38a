//! Prompt builders for resume analysis and cover letter generation.
//!
//! Prompts embed a character-bounded prefix of the extracted resume text
//! plus the parsed fields, so prompt size stays bounded regardless of
//! document length.

use vitae_extractors::ParsedDocument;

/// Characters of resume text embedded in the analysis prompt.
const ANALYSIS_SNIPPET_CHARS: usize = 2500;

/// Characters of resume text embedded in the cover letter prompt.
const COVER_LETTER_SNIPPET_CHARS: usize = 1500;

/// Prefix of `text` holding at most `max` characters.
fn head_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the resume analysis prompt.
///
/// Asks for a strict rubric-scored evaluation returned as a single JSON
/// object, with a deliberately alarmist marker when no skills were
/// detected so the model treats that as a scoring signal.
pub fn analysis_prompt(raw_text: &str, record: &ParsedDocument) -> String {
    let snippet = head_chars(raw_text, ANALYSIS_SNIPPET_CHARS);
    let skills = if record.skills.is_empty() {
        "None detected - MAJOR RED FLAG".to_string()
    } else {
        format!("{:?}", record.skills)
    };

    format!(
        r#"
You are an advanced ATS (Applicant Tracking System) designed to evaluate resumes with the same rigor as Fortune 500 companies' hiring systems. Your evaluation must be HIGHLY DISCRIMINATING and reflect real-world hiring standards.

**DETAILED SCORING RUBRIC (Total: 100 points)**

1. FORMAT & STRUCTURE (20 points): layout quality, section organization, ATS compatibility. Tables, columns, or graphics are major failures.
2. CONTACT INFORMATION (10 points): full name, professional email, phone, location, LinkedIn/portfolio. Unprofessional email loses points.
3. PROFESSIONAL SUMMARY/OBJECTIVE (10 points): compelling 3-4 line summary with achievements and value proposition. Generic or missing scores low.
4. WORK EXPERIENCE (25 points): quantifiable achievements (percentages, dollar amounts, team sizes), strong action verbs with impact statements, clear career progression. Duty-based descriptions without metrics score low.
5. SKILLS SECTION (15 points): 10+ relevant technical skills, properly categorized, rich in industry keywords. Generic skills only ("Microsoft Office", "Communication") score near zero.
6. EDUCATION & CERTIFICATIONS (10 points): relevant degree, certifications, ongoing learning.
7. KEYWORDS & ATS OPTIMIZATION (10 points): count of industry-specific keywords and role-relevant terms.

**MANDATORY DEDUCTIONS (apply ALL that match):**
- Missing Professional Summary: -8
- Missing Skills Section: -12
- Missing Education: -8
- No work experience at all: -20
- Spelling/grammar errors: -2 per error (max -10 each)
- Tables/columns/graphics: -15
- Resume > 2 pages: -8, resume < 0.5 pages: -10
- Unprofessional email: -5
- No quantifiable achievements: -12
- Generic/vague descriptions throughout: -10
- Unexplained employment gaps: -5

**SCORING CALIBRATION - YOU MUST FOLLOW THIS:**
- 0-25: completely inadequate, missing multiple critical sections
- 26-40: poor, no relevant experience or achievements
- 41-55: below average, experience without quantifiable results
- 56-65: average, some metrics and decent structure
- 66-75: good, 3-4 quantified achievements, clear organization
- 76-85: very good, 5+ quantified achievements, strong progression
- 86-95: exceptional, impressive metrics throughout
- 96-100: world-class (EXTREMELY RARE)

**RESUME TO ANALYZE:**
{snippet}

**DETECTED SKILLS:** {skills}

**YOUR ANALYSIS INSTRUCTIONS:**
1. Calculate each section score INDEPENDENTLY; do not round to common numbers.
2. Count actual quantifiable achievements precisely.
3. Apply ALL relevant deductions; do not be lenient.
4. Two resumes should RARELY get the same score.
5. Be brutally honest; most resumes are mediocre (50-65 range).

Return ONLY a valid JSON object (no markdown, no code blocks) with these keys:

{{
  "score": <integer 0-100>,
  "score_breakdown": {{
    "format": <0-20>,
    "contact": <0-10>,
    "summary": <0-10>,
    "experience": <0-25>,
    "skills": <0-15>,
    "education": <0-10>,
    "keywords": <0-10>
  }},
  "deductions_applied": ["each deduction applied with point value"],
  "strengths": ["3-6 specific strengths with concrete examples from resume"],
  "weaknesses": ["3-6 specific weaknesses with concrete issues found"],
  "suggested_roles": ["4-6 job titles matching candidate's actual experience level and skills"],
  "missing_skills": ["5-8 specific skills missing for target roles"],
  "recommended_courses_or_certs": ["4-6 specific courses/certifications with clear reasoning"],
  "concise_advice": ["5-7 actionable improvements ranked by priority and impact"],
  "ats_compatibility": "<Excellent/Good/Fair/Poor> - <specific explanation>",
  "quantifiable_achievements_count": <exact integer count>,
  "keyword_density": "<Low/Medium/High> - <count of industry-specific keywords found>",
  "overall_assessment": "<2-3 sentence honest evaluation of resume quality and competitiveness>"
}}
"#,
        snippet = snippet,
        skills = skills
    )
}

/// Build the cover letter prompt for a target job title and tone.
///
/// Falls back to "Candidate" when no name was parsed; the phone is
/// appended to the contact line only when present.
pub fn cover_letter_prompt(
    raw_text: &str,
    record: &ParsedDocument,
    job_title: &str,
    tone: &str,
) -> String {
    let name = record.name.as_deref().unwrap_or("Candidate");
    let email = record.email.as_deref().unwrap_or("");
    let contact = match record.phone.as_deref() {
        Some(phone) => format!("{} | {}", email, phone),
        None => email.to_string(),
    };
    let skills = record.skills.join(", ");
    let snippet = head_chars(raw_text, COVER_LETTER_SNIPPET_CHARS);

    format!(
        r#"
You are an expert career assistant. Write a highly personalized, {tone} cover letter for the position of "{job_title}".
- Use the candidate's name: {name}
- Contact info: {contact}
- Do NOT use placeholders like [Company's Name], [Date], or [Recipient's Name].
- Use the following resume summary and detected skills to highlight 2-3 specific, relevant achievements or experiences that make the candidate a strong fit for the job.
- Make the letter tailored and engaging, not generic. Avoid repetition.
- End with a strong, professional closing statement and a clear call to action (e.g., request for interview).
- Do NOT mention the resume file name.

Resume summary:
{snippet}

Detected skills: {skills}
Limit to 400 words. Output plain text only.
"#,
        tone = tone,
        job_title = job_title,
        name = name,
        contact = contact,
        snippet = snippet,
        skills = skills
    )
}

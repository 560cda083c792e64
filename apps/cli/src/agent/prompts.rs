//! Prompt constants and renderers for the six career operations.
//!
//! Templates carry `{placeholder}` markers substituted by the render
//! functions below; each operation pairs one system prompt with one user
//! template.

use crate::parser::ParsedDocument;

pub const ANALYSIS_SYSTEM: &str = "You are an expert career consultant and resume reviewer \
    with deep knowledge of hiring practices across industries.";

pub const ADVICE_SYSTEM: &str = "You are a senior career counselor with expertise in various \
    industries. Provide practical, actionable advice tailored to the individual's background.";

pub const OPTIMIZATION_SYSTEM: &str = "You are an expert resume writer who specializes in \
    tailoring resumes for specific job opportunities. Focus on highlighting relevant skills \
    and experiences.";

pub const COVER_LETTER_SYSTEM: &str = "You are an expert at writing compelling cover letters \
    that showcase candidates' qualifications and enthusiasm for specific roles.";

pub const INTERVIEW_SYSTEM: &str = "You are an experienced hiring manager and interview coach. \
    Provide realistic interview questions and strategic answer guidance.";

pub const SKILLS_SYSTEM: &str = "You are a career development expert who understands current \
    market trends and skill demands across industries.";

/// Replace `{analysis_level}`, `{raw_text}`, `{contact_json}`, `{skills}`,
/// `{education}`, `{experience}` before sending.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Please provide a {analysis_level} analysis of this resume:

RESUME CONTENT:
{raw_text}

EXTRACTED INFORMATION:
Contact Info: {contact_json}
Skills: {skills}
Education:
{education}
Experience:
{experience}

Please analyze:
1. Overall structure and formatting
2. Content quality and relevance
3. Skills and qualifications presentation
4. Experience descriptions and impact
5. Areas for improvement
6. Strengths to highlight
7. ATS (Applicant Tracking System) optimization
8. Industry-specific recommendations

Provide actionable feedback and specific suggestions for improvement."#;

const ADVICE_PROMPT_TEMPLATE: &str = r#"Based on this resume and career background, please provide advice for the following query:

QUERY: {query}

RESUME SUMMARY:
Skills: {skills}
Education:
{education}
Experience:
{experience}
{context_section}

Please provide:
1. Specific, actionable advice
2. Potential career paths or opportunities
3. Steps to achieve the goal
4. Resources or next actions to consider
5. Timeline considerations if applicable

Make the advice practical and tailored to their background."#;

const OPTIMIZATION_PROMPT_TEMPLATE: &str = r#"Please help optimize this resume for the following job opportunity:

JOB DESCRIPTION:
{job_description}

CURRENT RESUME:
{raw_text}

EXTRACTED SKILLS: {skills}

Please provide:
1. Key skills/keywords to emphasize from the job description
2. Specific resume sections to modify
3. Suggested rewording for better alignment
4. Additional skills or experiences to highlight
5. Content to add, modify, or remove
6. ATS optimization suggestions

Focus on making the resume more relevant while maintaining truthfulness."#;

const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a compelling cover letter for this job application:

COMPANY: {company}

JOB DESCRIPTION:
{job_description}

CANDIDATE BACKGROUND:
Skills: {skills}
Education:
{education}
Experience:
{experience}
Contact: {contact_json}
{additional_section}

Please create a cover letter that:
1. Addresses the specific role and company
2. Highlights relevant qualifications
3. Shows enthusiasm and cultural fit
4. Includes specific examples when possible
5. Has a professional yet engaging tone
6. Is appropriately formatted and length (3-4 paragraphs)

Make it compelling and personalized."#;

const INTERVIEW_PROMPT_TEMPLATE: &str = r#"Help prepare for a {interview_type} interview for this position:

JOB DESCRIPTION:
{job_description}

CANDIDATE BACKGROUND:
Skills: {skills}
Education:
{education}
Experience:
{experience}

Please provide:
1. 10-15 likely interview questions specific to this role
2. Strategic answer frameworks for each question
3. Key points to emphasize from their background
4. Questions they should ask the interviewer
5. Potential weaknesses to address proactively
6. Examples/stories they should prepare
7. Technical questions if applicable

Focus on both behavioral and technical aspects relevant to the role."#;

const SKILLS_PROMPT_TEMPLATE: &str = r#"Suggest skill development priorities for career advancement:

{target_section}

CURRENT SKILLS: {skills}
CURRENT BACKGROUND:
Education:
{education}
Experience:
{experience}

Please provide:
1. Top 5 skills to develop or strengthen
2. Learning resources and methods for each skill
3. Timeline for skill development
4. How to demonstrate these skills
5. Market demand and career impact
6. Complementary skills to consider
7. Certification or formal training recommendations

Consider current market trends and future industry direction."#;

pub fn render_analysis(resume: &ParsedDocument, detailed: bool) -> String {
    let analysis_level = if detailed { "detailed" } else { "summary" };
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{analysis_level}", analysis_level)
        .replace("{raw_text}", &resume.raw_text)
        .replace("{contact_json}", &contact_json(resume))
        .replace("{skills}", &skills_list(resume))
        .replace("{education}", &bullet_lines(&resume.education))
        .replace("{experience}", &bullet_lines(&resume.experience))
}

pub fn render_advice(resume: &ParsedDocument, query: &str, context: Option<&str>) -> String {
    let context_section = context
        .map(|c| format!("\nADDITIONAL CONTEXT: {c}"))
        .unwrap_or_default();
    ADVICE_PROMPT_TEMPLATE
        .replace("{query}", query)
        .replace("{skills}", &skills_list(resume))
        .replace("{education}", &bullet_lines(&resume.education))
        .replace("{experience}", &bullet_lines(&resume.experience))
        .replace("{context_section}", &context_section)
}

pub fn render_optimization(resume: &ParsedDocument, job_description: &str) -> String {
    OPTIMIZATION_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{raw_text}", &resume.raw_text)
        .replace("{skills}", &skills_list(resume))
}

pub fn render_cover_letter(
    resume: &ParsedDocument,
    job_description: &str,
    company: &str,
    additional_info: Option<&str>,
) -> String {
    let additional_section = additional_info
        .map(|info| format!("\nADDITIONAL INFORMATION: {info}"))
        .unwrap_or_default();
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{company}", company)
        .replace("{job_description}", job_description)
        .replace("{skills}", &skills_list(resume))
        .replace("{education}", &bullet_lines(&resume.education))
        .replace("{experience}", &bullet_lines(&resume.experience))
        .replace("{contact_json}", &contact_json(resume))
        .replace("{additional_section}", &additional_section)
}

pub fn render_interview(
    resume: &ParsedDocument,
    job_description: &str,
    interview_type: &str,
) -> String {
    INTERVIEW_PROMPT_TEMPLATE
        .replace("{interview_type}", interview_type)
        .replace("{job_description}", job_description)
        .replace("{skills}", &skills_list(resume))
        .replace("{education}", &bullet_lines(&resume.education))
        .replace("{experience}", &bullet_lines(&resume.experience))
}

pub fn render_skills(resume: &ParsedDocument, target_role: Option<&str>) -> String {
    let target_section = target_role
        .map(|role| format!("TARGET ROLE: {role}"))
        .unwrap_or_else(|| "GENERAL CAREER GROWTH".to_string());
    SKILLS_PROMPT_TEMPLATE
        .replace("{target_section}", &target_section)
        .replace("{skills}", &skills_list(resume))
        .replace("{education}", &bullet_lines(&resume.education))
        .replace("{experience}", &bullet_lines(&resume.experience))
}

fn skills_list(resume: &ParsedDocument) -> String {
    resume.skills.join(", ")
}

fn bullet_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        return "(none found)".to_string();
    }
    lines
        .iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn contact_json(resume: &ParsedDocument) -> String {
    serde_json::to_string(&resume.contact_info).unwrap_or_else(|_| "{}".to_string())
}

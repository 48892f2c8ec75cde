//! LLM prompt constants for content enhancement.
//!
//! All three prompts request plain prose — no JSON, no fences. Placeholders
//! are substituted via `llm_client::prompts::fill`.

use crate::llm_client::prompts::PLAIN_TEXT_SYSTEM;

// ────────────────────────────────────────────────────────────────────────────
// Experience enhancement (responsibilities → achievement bullets)
// ────────────────────────────────────────────────────────────────────────────

pub const EXPERIENCE_SYSTEM: &str = PLAIN_TEXT_SYSTEM;

pub const EXPERIENCE_PROMPT_TEMPLATE: &str = "\
Given this work experience:\n\
Company: {company}\n\
Position: {position}\n\
Duration: {duration}\n\
Responsibilities: {responsibilities}\n\
\n\
Enhance this work experience by:\n\
1. Writing 4-5 strong, quantifiable bullet points that demonstrate achievements\n\
2. Using powerful action verbs at the start of each bullet\n\
3. Including metrics, percentages, and numbers where appropriate\n\
4. Highlighting leadership and initiative\n\
5. Focusing on results and impact rather than duties\n\
\n\
Format the response as bullet points, one per line, each starting with '*'.";

// ────────────────────────────────────────────────────────────────────────────
// Summary enhancement
// ────────────────────────────────────────────────────────────────────────────

pub const SUMMARY_SYSTEM: &str = PLAIN_TEXT_SYSTEM;

pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
Based on this professional summary:\n\
{summary}\n\
\n\
And these skills:\n\
{skills}\n\
\n\
Write a powerful, keyword-rich professional summary that:\n\
1. Highlights years of experience and key achievements\n\
2. Incorporates the most relevant skills naturally\n\
3. Is written in a confident, professional tone\n\
4. Is 3-4 lines long\n\
\n\
Respond with the summary paragraph only.";

// ────────────────────────────────────────────────────────────────────────────
// Skills categorization
// ────────────────────────────────────────────────────────────────────────────

pub const SKILLS_SYSTEM: &str = PLAIN_TEXT_SYSTEM;

pub const SKILLS_PROMPT_TEMPLATE: &str = "\
Given these skills:\n\
{skills}\n\
\n\
Organize and enhance them by:\n\
1. Grouping them into relevant categories (e.g., Technical Skills, Soft Skills)\n\
2. Using industry-standard terminology\n\
3. Listing them in order of relevance\n\
\n\
Format each category on its own line as:\n\
CATEGORY NAME: skill1 | skill2 | skill3";

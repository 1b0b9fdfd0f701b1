//! Gemini provider: coaching generation client, prompts, and fallback copy

mod client;
mod fallback;
mod prompts;

pub use client::GeminiClient;
pub use fallback::{fallback_review, fallback_tip};
pub use prompts::{
    COVERAGE_SKIP_ALERT_THRESHOLD, CoverageSummary, MAX_COACHING_TIP_WORDS,
    MAX_PERFORMANCE_REVIEW_WORDS, ReviewContext, build_coaching_prompt, build_improvement_tip,
    build_review_prompt,
};

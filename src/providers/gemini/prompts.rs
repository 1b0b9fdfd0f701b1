//! Prompt construction for coaching generation

use serde::Deserialize;

/// Word cap for a coaching tip
pub const MAX_COACHING_TIP_WORDS: usize = 15;

/// Word cap for a spoken performance review
pub const MAX_PERFORMANCE_REVIEW_WORDS: usize = 100;

/// Skip fraction above which the review reassures the dancer about pose
/// tracking before coaching technique
pub const COVERAGE_SKIP_ALERT_THRESHOLD: f64 = 0.35;

const COACH_PERSONALITY: &str = r#"
You are "Coach Rhythm", an enthusiastic AI dance instructor.

PERSONALITY:
- Encouraging and positive
- Uses dance terminology naturally
- Celebrates small wins
- Gives specific, actionable feedback
- Never discouraging or negative

CONSTRAINTS:
- Keep responses concise and energetic
- Focus on ONE improvement at a time
- Use simple, clear language
"#;

/// Pose-tracking coverage reported alongside a session
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    pub attempted_joints: u64,
    pub skipped_joints: u64,
    pub skip_fraction: f64,
    #[serde(default)]
    pub top_skipped_joints: Vec<String>,
}

/// Everything the review prompt needs about a finished session
#[derive(Debug)]
pub struct ReviewContext<'a> {
    pub song_title: &'a str,
    pub song_artist: &'a str,
    pub final_score: f64,
    pub previous_best: Option<f64>,
    pub strongest_part: &'a str,
    pub weakest_part: &'a str,
    pub language: &'a str,
    pub coverage: Option<&'a CoverageSummary>,
}

/// Build the prompt for a short coaching tip.
pub fn build_coaching_prompt(
    score: f64,
    weak_points: &[String],
    strong_points: &[String],
    target_body_part: &str,
    language: &str,
) -> String {
    let weak = if weak_points.is_empty() {
        "none identified".to_string()
    } else {
        weak_points.join(", ")
    };
    let strong = if strong_points.is_empty() {
        "none identified".to_string()
    } else {
        strong_points.join(", ")
    };

    format!(
        "{personality}\n\
         Generate a SHORT coaching tip (MAXIMUM {max_words} words).\n\n\
         Current score: {score}%\n\
         Weak points: {weak}\n\
         Strong points: {strong}\n\n\
         Focus on improving: {target}\n\
         Be encouraging and specific. Give ONE actionable tip.{language_note}\n\n\
         Respond with ONLY the coaching tip, nothing else.",
        personality = COACH_PERSONALITY,
        max_words = MAX_COACHING_TIP_WORDS,
        score = score,
        weak = weak,
        strong = strong,
        target = target_body_part,
        language_note = language_instruction(language),
    )
}

/// Build the prompt for a spoken performance review.
pub fn build_review_prompt(ctx: &ReviewContext<'_>) -> String {
    let comparison = match ctx.previous_best {
        Some(prev) if ctx.final_score > prev => {
            format!("This beats your previous best of {}%!", prev)
        }
        Some(prev) if ctx.final_score == prev => {
            format!("You matched your personal best of {}%!", prev)
        }
        Some(prev) => format!("Your personal best is {}%.", prev),
        None => String::new(),
    };

    let mut coverage_block = String::new();
    let mut coverage_instruction = String::new();
    let mut coverage_guidance =
        "Only mention sensor reliability if the context naturally calls for it.".to_string();
    if let Some(coverage) = ctx.coverage {
        let skip_percent = coverage.skip_fraction * 100.0;
        let frequent_skips = if coverage.top_skipped_joints.is_empty() {
            "none".to_string()
        } else {
            coverage
                .top_skipped_joints
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        };
        coverage_block = format!(
            "Pose Coverage:\n\
             - Attempted joints: {}\n\
             - Skipped joints: {} (~{:.1}%)\n\
             - Frequently skipped joints: {}",
            coverage.attempted_joints, coverage.skipped_joints, skip_percent, frequent_skips
        );
        if coverage.skip_fraction > COVERAGE_SKIP_ALERT_THRESHOLD {
            coverage_instruction = "\nIf skip fraction exceeds 35%, reassure the dancer and mention adjusting camera angle or lighting before focusing on technique.".to_string();
            coverage_guidance = "Detector struggled; acknowledge it and encourage camera/lighting adjustments before coaching technique.".to_string();
        } else {
            coverage_guidance =
                "Mention how reliable the detector was and tie it into your advice.".to_string();
        }
    }

    format!(
        "{personality}\n\
         Generate a spoken performance review (MAXIMUM {max_words} words).\n\n\
         Song: {title} by {artist}\n\
         Final Score: {score}%\n\
         {comparison}\n\
         Strongest body part: {strongest}\n\
         Weakest body part: {weakest}\n\
         {coverage_block}\n\n\
         Include:\n\
         1. Congratulate on the score\n\
         2. Mention comparison to previous best if available\n\
         3. Highlight the strongest body part\n\
         4. Give ONE tip for the weakest body part\n\
         5. Pose coverage guidance: {coverage_guidance}\n\
         6. End with a motivating question or call-to-action{coverage_instruction}{language_note}\n\n\
         Respond with ONLY the review, nothing else.",
        personality = COACH_PERSONALITY,
        max_words = MAX_PERFORMANCE_REVIEW_WORDS,
        title = ctx.song_title,
        artist = ctx.song_artist,
        score = ctx.final_score,
        comparison = comparison,
        strongest = ctx.strongest_part,
        weakest = ctx.weakest_part,
        coverage_block = coverage_block,
        coverage_guidance = coverage_guidance,
        coverage_instruction = coverage_instruction,
        language_note = language_instruction(ctx.language),
    )
}

/// Improvement tip spoken after the review: camera advice when tracking was
/// unreliable, technique advice otherwise.
pub fn build_improvement_tip(coverage: Option<&CoverageSummary>, weakest_part: &str) -> String {
    if let Some(coverage) = coverage {
        if coverage.skip_fraction > COVERAGE_SKIP_ALERT_THRESHOLD {
            let skip_percent = coverage.skip_fraction * 100.0;
            let joints = if coverage.top_skipped_joints.is_empty() {
                "key joints".to_string()
            } else {
                coverage
                    .top_skipped_joints
                    .iter()
                    .take(2)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            return format!(
                "Pose tracking missed about {:.0}% of joints (especially {}). Adjust your camera angle or lighting, then focus on refining your {}.",
                skip_percent, joints, weakest_part
            );
        }
    }

    format!("Focus on your {} movements next time.", weakest_part)
}

fn language_instruction(language: &str) -> String {
    let name = match language {
        "en" => return String::new(),
        "es" => "Spanish",
        "de" => "German",
        "ru" => "Russian",
        _ => "English",
    };
    format!("\n\nIMPORTANT: Respond in {}.", name)
}

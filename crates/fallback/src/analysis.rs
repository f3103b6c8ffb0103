//! Fallback career-fit analysis.

use compass_core::{CareerAnalysis, CareerRecommendation};

/// Substitute analysis with a single generic recommendation. The required
/// skills are taken from the caller's selection (up to three); a generic
/// set is used when nothing was selected so the sequence is never empty.
pub fn fallback_analysis(skills: &[String]) -> CareerAnalysis {
    let required_skills: Vec<String> = if skills.is_empty() {
        vec![
            "Analysis".into(),
            "Communication".into(),
            "Problem solving".into(),
        ]
    } else {
        skills.iter().take(3).cloned().collect()
    };

    CareerAnalysis {
        skill_patterns: vec![
            "Strong analytical abilities".into(),
            "Good communication skills".into(),
        ],
        career_recommendations: vec![CareerRecommendation {
            title: "Business Analyst".into(),
            field: "Technology".into(),
            match_score: 75,
            description: "Analyze business requirements and processes".into(),
            salary_range: "$60,000 - $85,000".into(),
            growth_prospects: "Strong growth expected".into(),
            required_skills,
            time_to_transition: "6-12 months".into(),
        }],
        skill_gaps: vec![],
        learning_path: vec![],
        personality_profile: vec![],
        market_insights: vec![],
    }
}

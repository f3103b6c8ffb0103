//! Fallback workplace scenario and scenario-response analysis.

use compass_core::{
    CareerRecommendation, PersonalityTrait, ScenarioAnalysis, ScenarioOption, WorkplaceScenario,
};

/// Substitute scenario for the given field of interest.
pub fn fallback_scenario(field: &str) -> WorkplaceScenario {
    let option = |id: &str, text: &str, skill: &str, personality: &str| ScenarioOption {
        id: id.into(),
        text: text.into(),
        skills: vec![skill.into()],
        personality: vec![personality.into()],
    };

    WorkplaceScenario {
        scenario: format!("{field} Team Challenge"),
        context: format!("You're working on a project in {field} when an unexpected challenge arises."),
        challenge: "How do you approach this situation?".into(),
        options: vec![
            option("A", "Analyze the problem systematically", "Analysis", "Methodical"),
            option("B", "Consult with team members", "Communication", "Collaborative"),
            option("C", "Research similar cases", "Research", "Thorough"),
            option("D", "Propose an innovative solution", "Creativity", "Innovative"),
        ],
        follow_up_questions: vec![
            "What factors would you consider?".into(),
            "How would you measure success?".into(),
        ],
    }
}

/// Substitute personality analysis for scenario responses.
pub fn fallback_scenario_analysis(field: &str) -> ScenarioAnalysis {
    ScenarioAnalysis {
        personality_profile: vec![PersonalityTrait {
            trait_name: "Problem Solving".into(),
            score: 7,
            description: "Systematic approach to challenges".into(),
            career_implications: vec!["Analytical roles".into(), "Project management".into()],
        }],
        work_style_preferences: vec!["Structured environment".into(), "Clear objectives".into()],
        leadership_style: "Collaborative".into(),
        problem_solving_approach: "Analytical".into(),
        career_recommendations: vec![CareerRecommendation {
            title: format!("{field} Specialist"),
            field: field.into(),
            match_score: 80,
            description: format!("Work as a specialist in {field}"),
            salary_range: "$50,000 - $75,000".into(),
            growth_prospects: "Good".into(),
            required_skills: vec!["Domain expertise".into()],
            time_to_transition: "1-2 years".into(),
        }],
        development_areas: vec!["Leadership skills".into(), "Communication".into()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_has_four_options_with_distinct_ids() {
        let scenario = fallback_scenario("Healthcare");
        assert_eq!(scenario.options.len(), 4);
        let ids: Vec<&str> = scenario.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C", "D"]);
        assert!(scenario.scenario.contains("Healthcare"));
        assert!(!scenario.follow_up_questions.is_empty());
    }

    #[test]
    fn scenario_analysis_embeds_field() {
        let analysis = fallback_scenario_analysis("Finance");
        assert_eq!(analysis.career_recommendations[0].field, "Finance");
        assert!(analysis.career_recommendations[0].title.contains("Finance"));
        assert!(!analysis.personality_profile.is_empty());
    }

    #[test]
    fn deterministic() {
        assert_eq!(fallback_scenario("Design"), fallback_scenario("Design"));
        assert_eq!(
            fallback_scenario_analysis("Design"),
            fallback_scenario_analysis("Design")
        );
    }
}

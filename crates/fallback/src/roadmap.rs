//! Fallback startup roadmap.

use compass_core::analysis::{
    BusinessIdea, BusinessPlan, CoreTeamRole, FundingStage, FundingStrategy, HiringPhase,
    Milestone, RoadmapResources, StartupRoadmap, TeamBuilding,
};

/// Substitute venture roadmap personalized with the niche and the user's
/// strongest skill.
pub fn fallback_roadmap(top_skills: &[String], niche: &str) -> StartupRoadmap {
    let lead_skill = top_skills.first().map(String::as_str).unwrap_or("your core skills");

    StartupRoadmap {
        business_idea: BusinessIdea {
            concept: format!("A specialized service business in {niche} built around {lead_skill}"),
            target_market: format!("Small and mid-size organizations in {niche}"),
            unique_value_proposition: format!(
                "Deep expertise in {lead_skill} applied to an underserved niche"
            ),
            problem_statement: format!(
                "Organizations in {niche} rely on generic solutions that fit them poorly"
            ),
            solution: format!("A focused offering shaped around daily workflows in {niche}"),
        },
        business_plan: BusinessPlan {
            executive_summary: format!("Launch a focused venture serving the {niche} market"),
            market_analysis: "Growing demand with few specialized competitors".into(),
            competitive_advantage: format!("Founder expertise in {lead_skill}"),
            revenue_model: "Monthly subscriptions with a free starter tier".into(),
            go_to_market_strategy: "Community-led launch with targeted content".into(),
        },
        funding_strategy: FundingStrategy {
            total_required: "$150,000".into(),
            funding_stages: vec![
                FundingStage {
                    stage: "Pre-seed".into(),
                    amount: "$50,000".into(),
                    purpose: "Build the MVP and validate with pilot customers".into(),
                    timeline: "Months 1-6".into(),
                    investor_type: "Angels and friends & family".into(),
                },
                FundingStage {
                    stage: "Seed".into(),
                    amount: "$100,000".into(),
                    purpose: "Grow the team and fund early marketing".into(),
                    timeline: "Months 7-18".into(),
                    investor_type: "Seed funds and angel syndicates".into(),
                },
            ],
            sources: vec![
                "Angel investors".into(),
                "Bootstrapping".into(),
                "Startup grants".into(),
            ],
        },
        team_building: TeamBuilding {
            core_team: vec![
                CoreTeamRole {
                    role: "Founder".into(),
                    skills: top_skills.iter().take(3).cloned().collect(),
                    responsibilities: vec![
                        "Own the product vision".into(),
                        "Talk to customers weekly".into(),
                    ],
                },
                CoreTeamRole {
                    role: "Technical co-founder".into(),
                    skills: vec!["Product engineering".into(), "Architecture".into()],
                    responsibilities: vec![
                        "Build and ship the MVP".into(),
                        "Own the technical roadmap".into(),
                    ],
                },
            ],
            hiring_plan: vec![HiringPhase {
                phase: "Post-seed".into(),
                positions: vec!["Designer".into(), "Growth marketer".into()],
                timeline: "Months 7-12".into(),
            }],
        },
        milestones: vec![
            Milestone {
                milestone: "MVP launch".into(),
                timeline: "Month 6".into(),
                key_deliverables: vec![
                    "Core product live".into(),
                    "First 10 pilot customers".into(),
                ],
                success_metrics: vec![
                    "Weekly active usage".into(),
                    "Pilot retention above 60%".into(),
                ],
            },
            Milestone {
                milestone: "First paying customers".into(),
                timeline: "Month 9".into(),
                key_deliverables: vec!["Pricing live".into(), "Onboarding flow".into()],
                success_metrics: vec!["10 paying customers".into(), "Churn below 5%".into()],
            },
        ],
        resources: RoadmapResources {
            tools: vec!["Project tracker".into(), "Analytics suite".into()],
            platforms: vec!["Cloud hosting".into(), "Payment processing".into()],
            mentorship: vec![
                "Local founder network".into(),
                format!("{niche} industry advisors"),
            ],
            communities: vec![
                format!("{niche} professional forums"),
                "Startup communities".into(),
            ],
        },
    }
}

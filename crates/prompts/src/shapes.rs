//! Literal example shapes embedded in structured prompts.
//!
//! These are illustrative samples, not formal schemas: the model is shown
//! exactly the JSON it should mirror, with a couple of fields personalized
//! from the caller's input.

/// Example reply for the adaptive-question call site.
pub fn questions(first_skill: &str) -> String {
    QUESTIONS_TEMPLATE.replace("__SKILL__", first_skill)
}

const QUESTIONS_TEMPLATE: &str = r#"{
  "questions": [
    {
      "id": "q_1",
      "question": "What motivates you most when working with __SKILL__?",
      "type": "multiple-choice",
      "options": ["Solving complex problems", "Collaborating with others", "Creating innovative solutions", "Achieving measurable results"],
      "skillsAssessed": ["__SKILL__"],
      "difficultyLevel": 3
    },
    {
      "id": "q_2",
      "question": "Rate your confidence in handling unexpected challenges in your field",
      "type": "scale",
      "skillsAssessed": ["adaptability", "confidence"],
      "difficultyLevel": 2
    },
    {
      "id": "q_3",
      "question": "You're leading a project that's falling behind schedule. What's your first action?",
      "type": "scenario",
      "scenario": "Your team is working on an important project with a tight deadline. You realize you're 20% behind schedule with only 2 weeks left.",
      "options": ["Analyze what's causing delays", "Increase team working hours", "Request deadline extension", "Redistribute tasks among team"],
      "skillsAssessed": ["leadership", "problem-solving"],
      "difficultyLevel": 4
    }
  ]
}"#;

/// Example reply for the career-fit analysis call site.
pub const CAREER_ANALYSIS: &str = r#"{
  "skillPatterns": ["Strong analytical thinking", "Excellent communication skills", "Creative problem-solving approach"],
  "careerRecommendations": [
    {
      "title": "Data Analyst",
      "field": "Technology",
      "matchScore": 87,
      "description": "Analyze complex data sets to drive business decisions and insights",
      "salaryRange": "$65,000 - $95,000",
      "growthProspects": "High demand with 15% annual growth expected",
      "requiredSkills": ["Python", "SQL", "Statistics", "Data visualization"],
      "timeToTransition": "6-12 months with targeted learning"
    }
  ],
  "skillGaps": [
    {
      "skill": "Advanced Analytics",
      "currentLevel": 4,
      "requiredLevel": 7,
      "priority": "high",
      "developmentTime": "4-6 months"
    }
  ],
  "learningPath": [
    {
      "skill": "Data Analysis",
      "action": "Complete a data analytics certificate",
      "resources": ["Online certificate program", "Practice datasets", "Analysis textbook"],
      "timeline": "Next 4 months",
      "measurableOutcome": "Complete 3 data analysis projects and earn certificate"
    }
  ],
  "personalityProfile": [
    {
      "trait": "Analytical Thinking",
      "score": 8,
      "description": "Strong ability to break down complex problems systematically",
      "careerImplications": ["Research roles", "Data-driven positions", "Strategic planning roles"]
    }
  ],
  "marketInsights": [
    {
      "industry": "Technology",
      "demandLevel": "Very High",
      "averageSalary": "$85,000",
      "growthRate": "18% annually",
      "keyTrends": ["AI and machine learning adoption", "Remote work transformation", "Data-driven decision making"],
      "emergingRoles": ["AI Product Manager", "Data Storyteller", "Digital Experience Designer"]
    }
  ]
}"#;

/// Example reply for the workplace-scenario call site.
pub fn scenario(field: &str) -> String {
    SCENARIO_TEMPLATE.replace("__FIELD__", field)
}

const SCENARIO_TEMPLATE: &str = r#"{
  "scenario": "Cross-functional Team Collaboration Challenge",
  "context": "You're working as a __FIELD__ professional on a critical project that involves multiple departments. The deadline is approaching, but there are conflicting priorities between teams and morale is declining.",
  "challenge": "How do you navigate this situation to ensure project success while maintaining team cohesion and stakeholder satisfaction?",
  "options": [
    {
      "id": "A",
      "text": "Organize a cross-functional meeting to align priorities and create a shared roadmap with clear trade-offs",
      "skills": ["leadership", "communication", "strategic thinking", "conflict resolution"],
      "personality": ["collaborative", "diplomatic", "structured"]
    },
    {
      "id": "B",
      "text": "Focus on delivering core functionality first and communicate realistic expectations to all stakeholders",
      "skills": ["prioritization", "stakeholder management", "project management"],
      "personality": ["pragmatic", "decisive", "results-oriented"]
    },
    {
      "id": "C",
      "text": "Conduct individual meetings with each team lead to understand concerns and build consensus gradually",
      "skills": ["relationship building", "active listening", "negotiation", "empathy"],
      "personality": ["patient", "relationship-focused", "thorough"]
    },
    {
      "id": "D",
      "text": "Propose a phased approach with quick wins to demonstrate progress while addressing technical concerns",
      "skills": ["innovation", "strategic planning", "adaptability"],
      "personality": ["creative", "flexible", "analytical"]
    }
  ],
  "followUpQuestions": [
    "How would you measure the success of your approach?",
    "What would you do if stakeholders still disagreed after your intervention?",
    "How would you prevent similar conflicts in future projects?"
  ]
}"#;

/// Example reply for the scenario-response analysis call site.
pub fn scenario_analysis(field: &str) -> String {
    SCENARIO_ANALYSIS_TEMPLATE.replace("__FIELD__", field)
}

const SCENARIO_ANALYSIS_TEMPLATE: &str = r#"{
  "personalityProfile": [
    {
      "trait": "Decision Making Style",
      "score": 8,
      "description": "Data-driven and analytical",
      "careerImplications": ["Strategy roles", "Research positions"]
    }
  ],
  "workStylePreferences": ["Collaborative", "Detail-oriented"],
  "leadershipStyle": "Collaborative leader who values team input",
  "problemSolvingApproach": "Systematic and research-based",
  "careerRecommendations": [
    {
      "title": "Product Manager",
      "field": "__FIELD__",
      "matchScore": 92,
      "description": "Lead product development",
      "salaryRange": "$80,000 - $120,000",
      "growthProspects": "Excellent",
      "requiredSkills": ["Leadership", "Analytics"],
      "timeToTransition": "1-2 years"
    }
  ],
  "developmentAreas": ["Public speaking", "Negotiation skills"]
}"#;

/// Example reply for the startup-roadmap call site.
pub fn roadmap(niche: &str) -> String {
    ROADMAP_TEMPLATE.replace("__NICHE__", niche)
}

const ROADMAP_TEMPLATE: &str = r#"{
  "businessIdea": {
    "concept": "A specialized service platform for the __NICHE__ market",
    "targetMarket": "Small and mid-size organizations in __NICHE__",
    "uniqueValueProposition": "Purpose-built tooling that generic platforms lack",
    "problemStatement": "Existing solutions are generic and poorly fit the niche",
    "solution": "A focused product shaped around the niche's daily workflows"
  },
  "businessPlan": {
    "executiveSummary": "Launch a focused product for an underserved niche",
    "marketAnalysis": "Growing demand with few specialized competitors",
    "competitiveAdvantage": "Founder expertise and niche-specific features",
    "revenueModel": "Monthly subscriptions with a free starter tier",
    "goToMarketStrategy": "Community-led launch with targeted content"
  },
  "fundingStrategy": {
    "totalRequired": "$150,000",
    "fundingStages": [
      {
        "stage": "Pre-seed",
        "amount": "$50,000",
        "purpose": "Build the MVP",
        "timeline": "Months 1-6",
        "investorType": "Angels and friends & family"
      }
    ],
    "sources": ["Angel investors", "Bootstrapping", "Startup grants"]
  },
  "teamBuilding": {
    "coreTeam": [
      {
        "role": "Technical co-founder",
        "skills": ["Product engineering", "Architecture"],
        "responsibilities": ["Build and ship the MVP", "Own the technical roadmap"]
      }
    ],
    "hiringPlan": [
      {
        "phase": "Post-seed",
        "positions": ["Designer", "Growth marketer"],
        "timeline": "Months 7-12"
      }
    ]
  },
  "milestones": [
    {
      "milestone": "MVP launch",
      "timeline": "Month 6",
      "keyDeliverables": ["Core product live", "First 10 pilot customers"],
      "successMetrics": ["Weekly active usage", "Pilot retention above 60%"]
    }
  ],
  "resources": {
    "tools": ["Project tracker", "Analytics suite"],
    "platforms": ["Cloud hosting", "Payment processing"],
    "mentorship": ["Local founder network", "Industry advisors"],
    "communities": ["Niche professional forums", "Startup communities"]
  }
}"#;

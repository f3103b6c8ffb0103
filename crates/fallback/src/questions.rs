//! Fallback adaptive questions.

use compass_core::{AdaptiveQuestion, AssessmentPhase, QuestionType};

/// Substitute question set: 3 questions for the initial and validation
/// phases, 5 for deep-dive. Ids are stable so identical inputs yield
/// identical output.
pub fn fallback_questions(skills: &[String], phase: AssessmentPhase) -> Vec<AdaptiveQuestion> {
    let first_skill = skills.first().map(String::as_str).unwrap_or("new challenges");
    let first_assessed = skills.first().map(String::as_str).unwrap_or("motivation");
    let second_skill = skills.get(1).map(String::as_str).unwrap_or("teamwork");

    let mut questions = vec![
        AdaptiveQuestion {
            id: "fallback_q1".into(),
            question: format!("When working with {first_skill}, what energizes you most?"),
            question_type: QuestionType::MultipleChoice,
            options: Some(vec![
                "Solving complex problems".into(),
                "Collaborating with team members".into(),
                "Creating innovative solutions".into(),
                "Achieving measurable results".into(),
            ]),
            scenario: None,
            follow_up_triggers: None,
            skills_assessed: vec![first_assessed.into()],
            difficulty_level: 3,
        },
        AdaptiveQuestion {
            id: "fallback_q2".into(),
            question: "How confident are you in adapting to unexpected changes at work?".into(),
            question_type: QuestionType::Scale,
            options: None,
            scenario: None,
            follow_up_triggers: None,
            skills_assessed: vec!["adaptability".into(), "confidence".into()],
            difficulty_level: 2,
        },
        AdaptiveQuestion {
            id: "fallback_q3".into(),
            question: "Your team disagrees on the best approach to a project. What do you do?"
                .into(),
            question_type: QuestionType::MultipleChoice,
            options: Some(vec![
                "Facilitate a team discussion to find consensus".into(),
                "Research best practices and present findings".into(),
                "Suggest trying multiple approaches in parallel".into(),
                "Escalate to management for guidance".into(),
            ]),
            scenario: None,
            follow_up_triggers: None,
            skills_assessed: vec![
                "leadership".into(),
                "communication".into(),
                "problem-solving".into(),
            ],
            difficulty_level: 4,
        },
    ];

    if phase == AssessmentPhase::DeepDive {
        questions.push(AdaptiveQuestion {
            id: "fallback_q4".into(),
            question: format!("In your experience with {second_skill}, what's your biggest strength?"),
            question_type: QuestionType::MultipleChoice,
            options: Some(vec![
                "Building relationships".into(),
                "Organizing workflows".into(),
                "Mentoring others".into(),
                "Driving results".into(),
            ]),
            scenario: None,
            follow_up_triggers: None,
            skills_assessed: vec![second_skill.into()],
            difficulty_level: 3,
        });
        questions.push(AdaptiveQuestion {
            id: "fallback_q5".into(),
            question: "How do you prefer to learn new skills for your career?".into(),
            question_type: QuestionType::MultipleChoice,
            options: Some(vec![
                "Hands-on practice and experimentation".into(),
                "Structured courses and certifications".into(),
                "Learning from mentors and colleagues".into(),
                "Reading and self-directed research".into(),
            ]),
            scenario: None,
            follow_up_triggers: None,
            skills_assessed: vec!["learning-style".into(), "self-development".into()],
            difficulty_level: 2,
        });
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_phase_has_three_questions() {
        let questions = fallback_questions(&["Python".into()], AssessmentPhase::Initial);
        assert_eq!(questions.len(), 3);
        for q in &questions {
            assert!(!q.question.is_empty());
            assert!((1..=5).contains(&q.difficulty_level));
        }
    }

    #[test]
    fn deep_dive_adds_two_questions() {
        let questions = fallback_questions(&[], AssessmentPhase::DeepDive);
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[3].id, "fallback_q4");
    }

    #[test]
    fn first_question_embeds_selected_skill() {
        let questions = fallback_questions(&["Python".into()], AssessmentPhase::Initial);
        assert!(questions[0].question.contains("Python"));
        assert!(questions[0].skills_assessed.contains(&"Python".to_string()));
    }

    #[test]
    fn no_skills_uses_generic_tokens() {
        let questions = fallback_questions(&[], AssessmentPhase::Initial);
        assert!(questions[0].question.contains("new challenges"));
        assert_eq!(questions[0].skills_assessed, vec!["motivation".to_string()]);
    }

    #[test]
    fn identical_inputs_identical_output() {
        let skills = vec!["communication".to_string(), "leadership".to_string()];
        let a = fallback_questions(&skills, AssessmentPhase::Initial);
        let b = fallback_questions(&skills, AssessmentPhase::Initial);
        assert_eq!(a, b);
    }
}

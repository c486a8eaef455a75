//! Question Bank — static companies and their preset interview questions.
//!
//! Pure data plus two lookup functions. Defined once at compile time,
//! never mutated, safe for any number of concurrent readers. Unknown
//! company ids are a valid outcome (empty result / `None`), not an error.

pub mod handlers;

use serde::{Deserialize, Serialize};

/// Number of questions offered per interview session.
/// Each company carries more matching questions than this; a session uses
/// the first five in declared order.
pub const QUESTIONS_PER_SESSION: usize = 5;

/// Interview category. Selects both which questions are offered and which
/// rubric emphasis the evaluation prompt carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Hr,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Hr => "hr",
        }
    }

    /// Parses the stored/wire form ("technical" | "hr").
    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "technical" => Some(Category::Technical),
            "hr" => Some(Category::Hr),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub category: Category,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Company {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub logo: &'static str,
    pub questions: &'static [Question],
}

/// Direct company lookup. `None` signals "unknown company" — callers fall
/// back to a default display glyph rather than erroring.
pub fn company_by_id(company_id: &str) -> Option<&'static Company> {
    COMPANIES.iter().find(|c| c.id == company_id)
}

/// Returns the named company's questions whose category matches, in the
/// bank's declared order. Empty for an unknown company or no matches.
pub fn questions_for(company_id: &str, category: Category) -> Vec<&'static Question> {
    match company_by_id(company_id) {
        Some(company) => company
            .questions
            .iter()
            .filter(|q| q.category == category)
            .collect(),
        None => Vec::new(),
    }
}

/// The question set a single session walks through: the first
/// `QUESTIONS_PER_SESSION` matching questions.
pub fn session_questions(company_id: &str, category: Category) -> Vec<&'static Question> {
    let mut questions = questions_for(company_id, category);
    questions.truncate(QUESTIONS_PER_SESSION);
    questions
}

pub const COMPANIES: &[Company] = &[
    Company {
        id: "google",
        name: "Google",
        color: "#4285F4",
        logo: "🔵",
        questions: &[
            Question {
                id: "g-t-1",
                text: "Explain the concept of polymorphism in object-oriented programming with a real-world example.",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "g-t-2",
                text: "How would you design a scalable URL shortening service like bit.ly?",
                category: Category::Technical,
                difficulty: Some(Difficulty::Hard),
            },
            Question {
                id: "g-t-3",
                text: "What is the difference between SQL and NoSQL databases? When would you use each?",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "g-t-4",
                text: "Explain how the Virtual DOM works in React and why it improves performance.",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "g-t-5",
                text: "Describe the differences between HTTP and HTTPS. How does SSL/TLS work?",
                category: Category::Technical,
                difficulty: Some(Difficulty::Easy),
            },
            Question {
                id: "g-h-1",
                text: "Tell me about a time when you had to work with a difficult team member. How did you handle it?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "g-h-2",
                text: "Why do you want to work at Google specifically?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "g-h-3",
                text: "Describe a situation where you had to meet a tight deadline. How did you manage your time?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "g-h-4",
                text: "What are your greatest strengths and how would they benefit our team?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "g-h-5",
                text: "Where do you see yourself in 5 years?",
                category: Category::Hr,
                difficulty: None,
            },
        ],
    },
    Company {
        id: "amazon",
        name: "Amazon",
        color: "#FF9900",
        logo: "📦",
        questions: &[
            Question {
                id: "a-t-1",
                text: "How would you implement a least recently used (LRU) cache?",
                category: Category::Technical,
                difficulty: Some(Difficulty::Hard),
            },
            Question {
                id: "a-t-2",
                text: "Explain the differences between microservices and monolithic architecture.",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "a-t-3",
                text: "What is Amazon's leadership principle \"Customer Obsession\"? How have you applied it?",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "a-t-4",
                text: "How do you ensure code quality and maintainability in a large codebase?",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "a-t-5",
                text: "Explain the concept of eventual consistency in distributed systems.",
                category: Category::Technical,
                difficulty: Some(Difficulty::Hard),
            },
            Question {
                id: "a-h-1",
                text: "Give me an example of a time when you took a calculated risk. What was the outcome?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "a-h-2",
                text: "Tell me about a time when you had to make a decision with incomplete information.",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "a-h-3",
                text: "Describe a situation where you disagreed with your manager. How did you handle it?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "a-h-4",
                text: "What motivates you to perform at your best?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "a-h-5",
                text: "Tell me about your biggest professional failure and what you learned from it.",
                category: Category::Hr,
                difficulty: None,
            },
        ],
    },
    Company {
        id: "infosys",
        name: "Infosys",
        color: "#007CC3",
        logo: "💼",
        questions: &[
            Question {
                id: "i-t-1",
                text: "What are the four pillars of object-oriented programming?",
                category: Category::Technical,
                difficulty: Some(Difficulty::Easy),
            },
            Question {
                id: "i-t-2",
                text: "Explain the difference between abstract classes and interfaces in Java.",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "i-t-3",
                text: "What is normalization in databases? Explain different normal forms.",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "i-t-4",
                text: "How does exception handling work in your preferred programming language?",
                category: Category::Technical,
                difficulty: Some(Difficulty::Easy),
            },
            Question {
                id: "i-t-5",
                text: "What is the Software Development Life Cycle (SDLC)? Explain the different phases.",
                category: Category::Technical,
                difficulty: Some(Difficulty::Easy),
            },
            Question {
                id: "i-h-1",
                text: "Why do you want to join Infosys?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "i-h-2",
                text: "Tell me about yourself and your background.",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "i-h-3",
                text: "How do you handle stress and pressure at work?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "i-h-4",
                text: "Are you willing to relocate if required?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "i-h-5",
                text: "What are your salary expectations?",
                category: Category::Hr,
                difficulty: None,
            },
        ],
    },
    Company {
        id: "wipro",
        name: "Wipro",
        color: "#7B3294",
        logo: "⚡",
        questions: &[
            Question {
                id: "w-t-1",
                text: "What is the difference between a stack and a queue? Provide use cases for each.",
                category: Category::Technical,
                difficulty: Some(Difficulty::Easy),
            },
            Question {
                id: "w-t-2",
                text: "Explain the concept of multithreading and its advantages.",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "w-t-3",
                text: "What are RESTful APIs? How do they differ from SOAP APIs?",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "w-t-4",
                text: "What is version control? Explain Git workflow with branching strategies.",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "w-t-5",
                text: "How do you approach debugging a complex issue in production?",
                category: Category::Technical,
                difficulty: Some(Difficulty::Medium),
            },
            Question {
                id: "w-h-1",
                text: "What do you know about Wipro and its services?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "w-h-2",
                text: "How do you prioritize tasks when you have multiple deadlines?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "w-h-3",
                text: "Tell me about a time when you had to learn a new technology quickly.",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "w-h-4",
                text: "What is your approach to teamwork and collaboration?",
                category: Category::Hr,
                difficulty: None,
            },
            Question {
                id: "w-h-5",
                text: "How do you keep yourself updated with the latest technology trends?",
                category: Category::Hr,
                difficulty: None,
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_for_filters_by_category() {
        for company in COMPANIES {
            for category in [Category::Technical, Category::Hr] {
                let questions = questions_for(company.id, category);
                assert!(
                    questions.iter().all(|q| q.category == category),
                    "mixed categories for {} / {}",
                    company.id,
                    category.as_str()
                );
            }
        }
    }

    #[test]
    fn test_questions_for_preserves_declared_order() {
        let questions = questions_for("google", Category::Technical);
        let ids: Vec<&str> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["g-t-1", "g-t-2", "g-t-3", "g-t-4", "g-t-5"]);
    }

    #[test]
    fn test_unknown_company_yields_empty_not_error() {
        assert!(questions_for("netflix", Category::Technical).is_empty());
        assert!(company_by_id("netflix").is_none());
    }

    #[test]
    fn test_every_company_has_five_per_category() {
        for company in COMPANIES {
            assert_eq!(questions_for(company.id, Category::Technical).len(), 5);
            assert_eq!(questions_for(company.id, Category::Hr).len(), 5);
        }
    }

    #[test]
    fn test_session_questions_capped() {
        let questions = session_questions("amazon", Category::Hr);
        assert_eq!(questions.len(), QUESTIONS_PER_SESSION);
        assert_eq!(questions[0].id, "a-h-1");
    }

    #[test]
    fn test_category_parse_round_trip() {
        assert_eq!(Category::parse("technical"), Some(Category::Technical));
        assert_eq!(Category::parse("hr"), Some(Category::Hr));
        assert_eq!(Category::parse("managerial"), None);
        assert_eq!(Category::Technical.as_str(), "technical");
    }

    #[test]
    fn test_hr_questions_have_no_difficulty() {
        for company in COMPANIES {
            for q in questions_for(company.id, Category::Hr) {
                assert!(q.difficulty.is_none(), "hr question {} has difficulty", q.id);
            }
        }
    }
}

//! Rule-based companion replies.
//!
//! Free text is lower-cased and checked against keyword groups in a fixed
//! priority order. The first group with a matching substring wins; nothing
//! is scored. Text that matches no group gets the default reply.

use serde::{Deserialize, Serialize};

/// Reply bucket selected by keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StressExam,
    Sleep,
    Anxiety,
    Loneliness,
    Default,
}

/// A canned reply plus follow-up phrases the user can tap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionReply {
    pub category: Category,
    pub text: String,
    pub suggestions: Vec<String>,
}

struct ReplyRule {
    category: Category,
    keywords: &'static [&'static str],
    text: &'static str,
    suggestions: [&'static str; 3],
}

/// Matched top to bottom; order is the tie-breaker.
const RULES: &[ReplyRule] = &[
    ReplyRule {
        category: Category::StressExam,
        keywords: &["stress", "exam"],
        text: "मैं समझ सकता हूँ कि परीक्षा का तनाव कितना कठिन हो सकता है। (I understand how difficult exam stress can be.) Let's try some breathing exercises together. Take a deep breath in for 4 counts, hold for 4, then exhale for 6. Remember, you've prepared as best you can. 🌸",
        suggestions: [
            "Can you guide me through a meditation?",
            "What are some study break activities?",
            "How can I manage my time better?",
        ],
    },
    ReplyRule {
        category: Category::Sleep,
        keywords: &["sleep", "insomnia"],
        text: "Sleep troubles are common, especially during stressful times. नींद का न आना बहुत परेशान करने वाला है। (Not being able to sleep is very troubling.) Let's create a calming bedtime routine. Have you tried the 4-7-8 breathing technique? 🌙",
        suggestions: [
            "Tell me about the 4-7-8 technique",
            "What should I avoid before bedtime?",
            "Can you suggest some relaxing activities?",
        ],
    },
    ReplyRule {
        category: Category::Anxiety,
        keywords: &["anxious", "anxiety"],
        text: "आपकी चिंता स्वाभाविक है। (Your anxiety is natural.) Anxiety about the future is something many students experience. Let's ground ourselves in the present moment. Can you name 5 things you can see around you right now? This helps bring us back to the here and now. 💙",
        suggestions: [
            "Help me with grounding techniques",
            "What causes anxiety?",
            "How can I calm my racing thoughts?",
        ],
    },
    ReplyRule {
        category: Category::Loneliness,
        keywords: &["lonely", "alone"],
        text: "Feeling lonely is deeply human, and you're not alone in feeling this way. आप अकेले नहीं हैं। (You are not alone.) Even when we feel isolated, there are people who care. Would you like to explore ways to connect with others or find comfort in solitude? 🤗",
        suggestions: [
            "How can I make new friends?",
            "What about online communities?",
            "How do I enjoy my own company?",
        ],
    },
];

const DEFAULT_RULE: ReplyRule = ReplyRule {
    category: Category::Default,
    keywords: &[],
    text: "Thank you for sharing that with me. मैं यहाँ आपके साथ हूँ। (I am here with you.) Your feelings are valid, and it's okay to experience them. Would you like to talk more about what's on your mind, or shall we try a mindfulness exercise together? 🌺",
    suggestions: [
        "Let's try a mindfulness exercise",
        "I want to talk more about my feelings",
        "Can you suggest some self-care activities?",
    ],
};

const GREETING: &str = "नमस्ते! I'm your YourMannMitra AI companion. I'm here to listen and support you. How are you feeling today?";

const GREETING_SUGGESTIONS: &[&str] = &[
    "I'm feeling stressed about exams",
    "I'm having trouble sleeping",
    "I feel anxious about the future",
    "I'm feeling lonely",
];

impl ReplyRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }

    fn to_reply(&self) -> CompanionReply {
        CompanionReply {
            category: self.category,
            text: self.text.to_string(),
            suggestions: self.suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Pick the reply for `message`. Total over all inputs; blank input must be
/// filtered out by the caller before it gets here.
pub fn select_reply(message: &str) -> CompanionReply {
    let lowered = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .unwrap_or(&DEFAULT_RULE)
        .to_reply()
}

/// Opening message of every chat, with starter prompts.
pub fn greeting() -> CompanionReply {
    CompanionReply {
        category: Category::Default,
        text: GREETING.to_string(),
        suggestions: GREETING_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

//! Static wellness content: the hub catalogue, daily affirmations, welcome
//! quotes, and the dashboard built from them.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::i18n::{self, Language};
use crate::models::{Profile, FALLBACK_DISPLAY_NAME};

// ═══════════════════════════════════════════
// Wellness hub
// ═══════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    Meditation,
    Yoga,
    Sleep,
    Motivation,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Meditation,
        ContentCategory::Yoga,
        ContentCategory::Sleep,
        ContentCategory::Motivation,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Audio,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Beginner,
    Intermediate,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessItem {
    pub id: &'static str,
    pub category: ContentCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_minutes: u16,
    pub level: Level,
    pub rating: f32,
    pub thumbnail: &'static str,
    pub media: MediaType,
}

impl WellnessItem {
    /// Case-insensitive match on title or description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }
}

macro_rules! item {
    ($id:literal, $cat:ident, $title:literal, $desc:literal, $mins:literal, $level:ident, $rating:literal, $thumb:literal, $media:ident) => {
        WellnessItem {
            id: $id,
            category: ContentCategory::$cat,
            title: $title,
            description: $desc,
            duration_minutes: $mins,
            level: Level::$level,
            rating: $rating,
            thumbnail: $thumb,
            media: MediaType::$media,
        }
    };
}

static CATALOGUE: [WellnessItem; 9] = [
    item!("1", Meditation, "Morning Mindfulness (सुबह का मन:शांति)",
        "Start your day with 10 minutes of peaceful meditation", 10, Beginner, 4.8, "🧘‍♀️", Audio),
    item!("2", Meditation, "Stress Relief Breathing (तनाव मुक्ति)",
        "Quick breathing exercises for instant calm", 5, Beginner, 4.9, "🌬️", Video),
    item!("3", Meditation, "Body Scan Meditation (शरीर स्कैन)",
        "Release tension with guided body awareness", 15, Intermediate, 4.7, "✨", Audio),
    item!("4", Yoga, "Gentle Morning Yoga (सुबह का योग)",
        "Easy yoga poses to energize your day", 20, Beginner, 4.6, "🕉️", Video),
    item!("5", Yoga, "Stress-Relief Asanas (तनाव निवारक आसन)",
        "Yoga poses specifically for stress relief", 15, Beginner, 4.8, "🧘‍♂️", Video),
    item!("6", Sleep, "Sleep Stories (नींद की कहानियां)",
        "Calming bedtime stories for better sleep", 25, Beginner, 4.9, "🌙", Audio),
    item!("7", Sleep, "Deep Sleep Meditation (गहरी नींद ध्यान)",
        "Fall asleep faster with this guided meditation", 30, Beginner, 4.7, "😴", Audio),
    item!("8", Motivation, "Daily Inspiration (दैनिक प्रेरणा)",
        "Motivational shorts for positive mindset", 2, All, 4.8, "💪", Video),
    item!("9", Motivation, "Student Success Stories (छात्र सफलता)",
        "Real stories from students who overcame challenges", 8, All, 4.9, "🎓", Video),
];

pub const FEATURED_QUOTE: &str = "Wellness is not a 'medical fix' but a way of living - a lifestyle \
sensitive and responsive to all the dimensions of body, mind, and spirit.";

/// One tab of the hub.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryContent {
    pub category: ContentCategory,
    pub items: Vec<&'static WellnessItem>,
}

pub fn catalogue() -> &'static [WellnessItem] {
    &CATALOGUE
}

/// Every category with its items matching `term`. A blank term keeps all.
/// Categories stay present (possibly empty) so the tabs never disappear.
pub fn search(term: &str) -> Vec<CategoryContent> {
    let term = term.trim();
    ContentCategory::ALL
        .iter()
        .map(|&category| CategoryContent {
            category,
            items: CATALOGUE
                .iter()
                .filter(|item| item.category == category)
                .filter(|item| term.is_empty() || item.matches(term))
                .collect(),
        })
        .collect()
}

// ═══════════════════════════════════════════
// Affirmations and quotes
// ═══════════════════════════════════════════

pub const AFFIRMATIONS: [&str; 5] = [
    "आपकी मानसिक शांति आपकी सबसे बड़ी शक्ति है। (Your mental peace is your greatest strength.)",
    "हर छोटा कदम आपको बेहतर बनाता है। (Every small step makes you better.)",
    "You are braver than you believe, stronger than you seem, and more loved than you know.",
    "कल्याणम् - Your wellness journey matters, and you matter.",
    "प्रेम और धैर्य से सब कुछ संभव है। (With love and patience, everything is possible.)",
];

pub fn random_affirmation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    AFFIRMATIONS.choose(rng).copied().unwrap_or(AFFIRMATIONS[0])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WelcomeQuote {
    pub text: &'static str,
    pub translation: &'static str,
    pub source: &'static str,
}

pub const WELCOME_QUOTES: [WelcomeQuote; 3] = [
    WelcomeQuote {
        text: "मन का शांतिपूर्ण रहना ही जीवन की सबसे बड़ी संपत्ति है।",
        translation: "A peaceful mind is life's greatest treasure.",
        source: "Bhagavad Gita",
    },
    WelcomeQuote {
        text: "स्वयं को जानना ही सबसे बड़ा ज्ञान है।",
        translation: "Knowing yourself is the greatest wisdom.",
        source: "Ancient Wisdom",
    },
    WelcomeQuote {
        text: "योग: कर्मसु कौशलम्",
        translation: "Yoga is skill in action.",
        source: "Bhagavad Gita 2.50",
    },
];

// ═══════════════════════════════════════════
// Dashboard
// ═══════════════════════════════════════════

/// Dashboard tile linking to a feature screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickAction {
    pub id: &'static str,
    pub title: String,
    pub description: String,
    pub urgent: bool,
}

/// (screen id, i18n key stem, urgent)
const QUICK_ACTIONS: [(&str, &str, bool); 8] = [
    ("chatbot", "features.aiCompanion", false),
    ("mood-tracker", "features.moodTracker", true),
    ("wellness-hub", "features.wellnessHub", false),
    ("counselor", "features.bookCounselor", false),
    ("peer-forum", "features.peerSupport", false),
    ("journal", "features.dailyJournal", false),
    ("progress", "features.myProgress", false),
    ("games", "features.mindfulGames", false),
];

pub fn quick_actions(lang: Language) -> Vec<QuickAction> {
    QUICK_ACTIONS
        .iter()
        .map(|&(id, key, urgent)| QuickAction {
            id,
            title: i18n::resolve(lang, key).to_string(),
            description: i18n::resolve(lang, &format!("{key}Desc")).to_string(),
            urgent,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Helpline {
    pub heading: String,
    pub description: String,
    pub call_label: String,
    /// `tel:` link for the shell opener.
    pub dial_uri: &'static str,
}

pub const KIRAN_DIAL_URI: &str = "tel:18005990019";

pub fn helpline(lang: Language) -> Helpline {
    Helpline {
        heading: i18n::resolve(lang, "dashboard.emergency").to_string(),
        description: i18n::resolve(lang, "dashboard.helpline").to_string(),
        call_label: i18n::resolve(lang, "dashboard.kiranCall").to_string(),
        dial_uri: KIRAN_DIAL_URI,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub greeting: String,
    pub display_name: String,
    pub subtitle: String,
    pub affirmation: &'static str,
    pub quick_actions: Vec<QuickAction>,
    pub helpline: Helpline,
}

pub fn dashboard<R: Rng + ?Sized>(profile: Option<&Profile>, lang: Language, rng: &mut R) -> DashboardView {
    let display_name = profile
        .map(Profile::display_name)
        .unwrap_or(FALLBACK_DISPLAY_NAME)
        .to_string();

    DashboardView {
        greeting: i18n::resolve(lang, "dashboard.goodMorning").to_string(),
        display_name,
        subtitle: i18n::resolve(lang, "dashboard.namaste").to_string(),
        affirmation: random_affirmation(rng),
        quick_actions: quick_actions(lang),
        helpline: helpline(lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    #[test]
    fn catalogue_has_four_categories() {
        let counts: Vec<usize> = search("").iter().map(|c| c.items.len()).collect();
        assert_eq!(counts, vec![3, 2, 2, 2]);
        assert_eq!(catalogue().len(), 9);
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let found: Vec<&str> = search("STRESS")
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id))
            .collect();
        assert_eq!(found, vec!["2", "5"]);

        let found: Vec<&str> = search("bedtime")
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id))
            .collect();
        assert_eq!(found, vec!["6"]);

        let hits = search("नींद");
        assert_eq!(hits.len(), 4, "empty categories stay listed");
        assert_eq!(hits[2].items.len(), 2);
        assert!(hits[0].items.is_empty());
    }

    #[test]
    fn affirmation_is_drawn_from_the_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(AFFIRMATIONS.contains(&random_affirmation(&mut rng)));
        }
    }

    #[test]
    fn quick_actions_are_translated() {
        let en = quick_actions(Language::En);
        let hi = quick_actions(Language::Hi);
        assert_eq!(en.len(), 8);
        assert_eq!(en[0].title, "AI Companion");
        assert_eq!(en[0].description, "Chat with your wellness buddy");
        assert_ne!(en[0].title, hi[0].title);

        let urgent: Vec<&str> = en.iter().filter(|a| a.urgent).map(|a| a.id).collect();
        assert_eq!(urgent, vec!["mood-tracker"]);

        // Every key resolves, so nothing falls back to the raw key.
        for action in en.iter().chain(hi.iter()) {
            assert!(!action.title.starts_with("features."));
            assert!(!action.description.starts_with("features."));
        }
    }

    #[test]
    fn helpline_carries_kiran_number() {
        let help = helpline(Language::En);
        assert!(help.call_label.contains("1800-599-0019"));
        assert_eq!(help.dial_uri, "tel:18005990019");
    }

    #[test]
    fn dashboard_falls_back_to_friend() {
        let mut rng = StdRng::seed_from_u64(1);
        let view = dashboard(None, Language::En, &mut rng);
        assert_eq!(view.display_name, "Friend");
        assert_eq!(view.greeting, "Good morning");

        let profile = Profile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            full_name: Some("Asha Verma".into()),
            created_at: Utc::now(),
            updated_at: None,
        };
        let view = dashboard(Some(&profile), Language::Hi, &mut rng);
        assert_eq!(view.display_name, "Asha Verma");
        assert_eq!(view.greeting, "सुप्रभात");
    }

    #[test]
    fn welcome_quotes() {
        assert_eq!(WELCOME_QUOTES.len(), 3);
        assert!(WELCOME_QUOTES.iter().all(|q| !q.translation.is_empty()));
    }
}

//! Bilingual display strings (English / Hindi).
//!
//! `resolve(lang, key)` looks a key up in the static table for `lang` and
//! hands the key back unchanged when it is missing, so an untranslated
//! string shows up on screen instead of failing.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// The two supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// The other language. Applying it twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

// ═══════════════════════════════════════════
// Tables
// ═══════════════════════════════════════════

const EN: &[(&str, &str)] = &[
    // Auth
    ("auth.login", "Login"),
    ("auth.signup", "Sign Up"),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.fullName", "Full Name"),
    ("auth.createAccount", "Create Account"),
    ("auth.alreadyAccount", "Already have an account?"),
    ("auth.noAccount", "Don't have an account?"),
    ("auth.welcome", "Welcome to YourMannMitra"),
    ("auth.subtitle", "Your Mental Wellness Companion"),
    // Dashboard
    ("dashboard.goodMorning", "Good morning"),
    ("dashboard.namaste", "नमस्ते! How can we support you today?"),
    ("dashboard.streak", "Streak: 7 days 🔥"),
    ("dashboard.quickMood", "Quick Mood Check"),
    ("dashboard.emergency", "Need Immediate Support?"),
    ("dashboard.helpline", "India's National Mental Health Helpline is available 24/7"),
    ("dashboard.kiranCall", "Call KIRAN: 1800-599-0019"),
    // Features
    ("features.aiCompanion", "AI Companion"),
    ("features.aiCompanionDesc", "Chat with your wellness buddy"),
    ("features.moodTracker", "Mood Check-in"),
    ("features.moodTrackerDesc", "How are you feeling today?"),
    ("features.wellnessHub", "Wellness Hub"),
    ("features.wellnessHubDesc", "Guided meditations & videos"),
    ("features.bookCounselor", "Book Counselor"),
    ("features.bookCounselorDesc", "Professional support available"),
    ("features.peerSupport", "Peer Support"),
    ("features.peerSupportDesc", "Anonymous community chat"),
    ("features.dailyJournal", "Daily Journal"),
    ("features.dailyJournalDesc", "Reflect and express yourself"),
    ("features.myProgress", "My Progress"),
    ("features.myProgressDesc", "Track your wellness journey"),
    ("features.mindfulGames", "Mindful Games"),
    ("features.mindfulGamesDesc", "Relaxing interactive activities"),
    // Common
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.back", "Back"),
    ("common.logout", "Logout"),
    ("common.translate", "हिंदी"),
];

const HI: &[(&str, &str)] = &[
    // Auth
    ("auth.login", "लॉगिन"),
    ("auth.signup", "साइन अप"),
    ("auth.email", "ईमेल"),
    ("auth.password", "पासवर्ड"),
    ("auth.fullName", "पूरा नाम"),
    ("auth.createAccount", "खाता बनाएं"),
    ("auth.alreadyAccount", "पहले से खाता है?"),
    ("auth.noAccount", "खाता नहीं है?"),
    ("auth.welcome", "YourMannMitra में आपका स्वागत है"),
    ("auth.subtitle", "आपका मानसिक कल्याण साथी"),
    // Dashboard
    ("dashboard.goodMorning", "सुप्रभात"),
    ("dashboard.namaste", "नमस्ते! आज हम आपकी कैसे सहायता कर सकते हैं?"),
    ("dashboard.streak", "लगातार: 7 दिन 🔥"),
    ("dashboard.quickMood", "त्वरित मूड जांच"),
    ("dashboard.emergency", "तत्काल सहायता चाहिए?"),
    ("dashboard.helpline", "भारत की राष्ट्रीय मानसिक स्वास्थ्य हेल्पलाइन 24/7 उपलब्ध है"),
    ("dashboard.kiranCall", "KIRAN कॉल करें: 1800-599-0019"),
    // Features
    ("features.aiCompanion", "AI साथी"),
    ("features.aiCompanionDesc", "अपने कल्याण मित्र से बात करें"),
    ("features.moodTracker", "मूड चेक-इन"),
    ("features.moodTrackerDesc", "आज आप कैसा महसूस कर रहे हैं?"),
    ("features.wellnessHub", "कल्याण केंद्र"),
    ("features.wellnessHubDesc", "निर्देशित ध्यान और वीडियो"),
    ("features.bookCounselor", "परामर्शदाता बुक करें"),
    ("features.bookCounselorDesc", "पेशेवर सहायता उपलब्ध"),
    ("features.peerSupport", "साथी सहायता"),
    ("features.peerSupportDesc", "गुमनाम समुदायिक चैट"),
    ("features.dailyJournal", "दैनिक डायरी"),
    ("features.dailyJournalDesc", "चिंतन करें और खुद को व्यक्त करें"),
    ("features.myProgress", "मेरी प्रगति"),
    ("features.myProgressDesc", "अपने कल्याण यात्रा को ट्रैक करें"),
    ("features.mindfulGames", "मन की शांति के खेल"),
    ("features.mindfulGamesDesc", "आराम देने वाली इंटरैक्टिव गतिविधियां"),
    // Common
    ("common.save", "सेव करें"),
    ("common.cancel", "रद्द करें"),
    ("common.back", "वापस"),
    ("common.logout", "लॉगआउट"),
    ("common.translate", "English"),
];

static EN_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EN.iter().copied().collect());

static HI_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HI.iter().copied().collect());

/// The full key → string table for `lang`.
pub fn table(lang: Language) -> &'static HashMap<&'static str, &'static str> {
    match lang {
        Language::En => &EN_TABLE,
        Language::Hi => &HI_TABLE,
    }
}

/// Display string for `key` in `lang`, or `key` itself when untranslated.
pub fn resolve<'a>(lang: Language, key: &'a str) -> &'a str {
    table(lang).get(key).copied().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_resolves_in_both_languages() {
        assert_eq!(resolve(Language::En, "auth.login"), "Login");
        assert_eq!(resolve(Language::Hi, "auth.login"), "लॉगिन");
    }

    #[test]
    fn tables_share_the_same_key_set() {
        let mut en: Vec<_> = table(Language::En).keys().collect();
        let mut hi: Vec<_> = table(Language::Hi).keys().collect();
        en.sort();
        hi.sort();
        assert_eq!(en, hi);
        assert_eq!(en.len(), 38);
    }

    #[test]
    fn shared_keys_are_non_empty_and_distinct() {
        for key in table(Language::En).keys() {
            let en = resolve(Language::En, key);
            let hi = resolve(Language::Hi, key);
            assert!(!en.is_empty(), "empty en string for {key}");
            assert!(!hi.is_empty(), "empty hi string for {key}");
            assert_ne!(en, hi, "untranslated key {key}");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        for lang in [Language::En, Language::Hi] {
            assert_eq!(resolve(lang, "dashboard.missing"), "dashboard.missing");
            assert_eq!(resolve(lang, ""), "");
        }
    }

    #[test]
    fn toggle_twice_is_identity() {
        for lang in [Language::En, Language::Hi] {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
            assert_eq!(
                resolve(lang.toggled().toggled(), "common.save"),
                resolve(lang, "common.save")
            );
        }
    }

    #[test]
    fn language_tag_parsing() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hi);
        assert_eq!(
            "EN".parse::<Language>().unwrap_err(),
            UnknownLanguage("EN".into())
        );
        assert_eq!(Language::Hi.to_string(), "hi");
    }

    #[test]
    fn language_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), "\"hi\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }
}

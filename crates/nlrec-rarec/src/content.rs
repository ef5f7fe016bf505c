//! Authored content for the conversational-recommendation page.
//!
//! All values are literals from the paper's running restaurant example. The
//! worked averaging under "Late fusion" is descriptive text; the page never
//! computes it.

use nlrec_core::types::{
    em, t, Accent, FilterRow, FilterStatus, ReviewRow, RichText, Speaker, Tab, TranscriptTurn,
};

pub static TAB_LABELS: &[(Tab, &str)] = &[
    (Tab::State, "1. Intent & State"),
    (Tab::Retrieval, "2. Retrieval (Deep Dive)"),
    (Tab::Generation, "3. Generation"),
];

/// The running example utterance, with its constraint mentions accented.
pub static UTTERANCE: RichText = &[
    t("\"I am looking for "),
    em("Japanese", Accent::Cuisine),
    t(" restaurants that serve excellent "),
    em("sushi", Accent::Dish),
    t(", preferably in a "),
    em("casual setting", Accent::Vibe),
    t(". I'm "),
    em("watching my weight", Accent::Vibe),
    t(".\""),
];

/// The semi-structured state as the paper prints it. Illustrative text with
/// inline comments, reproduced verbatim, not parseable JSON.
pub const STATE_SNIPPET: &str = r#"{
  "hard_constraints": {
    "cuisine_type": ["Japanese"],    // Metadata Filter
    "dish_type": ["sushi"]           // Metadata Filter
  },
  "soft_constraints": {
    "atmosphere": ["casual"],        // Semantic Search
    "others": ["watching my weight"] // Semantic Search
  }
}"#;

pub static FILTER_ROWS: &[FilterRow] = &[
    FilterRow { restaurant: "Washoku Bistro", cuisine: "Japanese", status: FilterStatus::Keep },
    FilterRow { restaurant: "Tokyo Express", cuisine: "Japanese", status: FilterStatus::Keep },
    FilterRow { restaurant: "Pasta Place", cuisine: "Italian", status: FilterStatus::Discard },
    FilterRow { restaurant: "Burger King", cuisine: "Fast Food", status: FilterStatus::Discard },
];

pub static REVIEW_ROWS: &[ReviewRow] = &[
    ReviewRow {
        restaurant: "Washoku Bistro",
        review: "Excellent sushi and very fresh.",
        score: 0.93,
        note: "High Match",
    },
    ReviewRow {
        restaurant: "Washoku Bistro",
        review: "Casual atmosphere, great for dates.",
        score: 0.88,
        note: "High Match",
    },
    ReviewRow {
        restaurant: "Washoku Bistro",
        review: "Had many healthy, low-cal options.",
        score: 0.88,
        note: "High Match (Weight)",
    },
    ReviewRow {
        restaurant: "Tokyo Express",
        review: "Love their rolls, very cheap.",
        score: 0.91,
        note: "High Match",
    },
    ReviewRow {
        restaurant: "Tokyo Express",
        review: "Quick counter service, solid combos.",
        score: 0.87,
        note: "High Match",
    },
    ReviewRow {
        restaurant: "Tokyo Express",
        review: "Good fried food, a bit greasy.",
        score: 0.62,
        note: "Low Match (Unhealthy)",
    },
];

/// One worked late-fusion card. `calc` is display text, not arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct FusionCard {
    pub restaurant: &'static str,
    pub calc: &'static str,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner,
    RunnerUp,
}

pub static FUSION_CARDS: &[FusionCard] = &[
    FusionCard {
        restaurant: "Washoku Bistro",
        calc: "(0.93 + 0.88 + 0.88) / 3 = 0.89",
        verdict: Verdict::Winner,
    },
    FusionCard {
        restaurant: "Tokyo Express",
        calc: "(0.91 + 0.87 + 0.62) / 3 = 0.80",
        verdict: Verdict::RunnerUp,
    },
];

pub static GENERATION_CONTEXT: &[&str] = &[
    "Metadata: Name: Washoku Bistro, Type: Japanese",
    "Review 1: \"Casual atmosphere...\"",
    "Review 2: \"Excellent sushi...\"",
    "Review 3: \"...low-cal veggie options\"",
];

pub static GENERATED_RESPONSE: RichText = &[
    t("\"How about trying "),
    em("Washoku Bistro", Accent::Strong),
    t("? It has a "),
    em("casual", Accent::Vibe),
    t(" vibe and offers "),
    em("low-calorie menu items", Accent::Cuisine),
    t(" (from review 3) while serving excellent "),
    em("Japanese sushi", Accent::Dish),
    t(".\""),
];

pub const CHAT_HEADER: &str = "📍 Restaurant Finder";

pub const LOCATION_REQUEST: &str = "Can you provide the location?";

pub const MENU_DESCRIPTION: &str = "For Washoku Bistro, they offer a lunch menu with bento boxes and entrées, with limited options. They also have sushi rolls, such as spicy salmon rolls and California rolls. As for Tokyo Express, they have a wide variety of options including bento boxes, sushi combos, feature rolls, tempura, and noodles.";

/// The full pre-scripted dialogue: preference understanding, rejection, QA.
pub static TRANSCRIPT: &[TranscriptTurn] = &[
    TranscriptTurn {
        speaker: Speaker::User,
        message: &[
            t("I am looking for "),
            em("Japanese", Accent::Cuisine),
            t(" restaurants that serve excellent "),
            em("sushi", Accent::Dish),
            t(", preferably in a "),
            em("casual setting", Accent::Vibe),
            t("."),
        ],
    },
    TranscriptTurn {
        speaker: Speaker::System,
        message: &[t(LOCATION_REQUEST)],
    },
    TranscriptTurn {
        speaker: Speaker::User,
        message: &[t("Tower Road NW & Kingsway NW")],
    },
    TranscriptTurn {
        speaker: Speaker::System,
        message: &[
            t("How about trying Washoku Bistro for a "),
            em("comfortable and laid-back vibe", Accent::Vibe),
            t(" while enjoying some delicious "),
            em("Japanese", Accent::Cuisine),
            t(" "),
            em("sushi", Accent::Dish),
            t("? But if you're looking for something quick and easy without sacrificing taste, Tokyo Express is another great option near the same location."),
        ],
    },
    TranscriptTurn {
        speaker: Speaker::User,
        message: &[t("What kind of menu do they offer?")],
    },
    // Segment texts concatenate to exactly MENU_DESCRIPTION.
    TranscriptTurn {
        speaker: Speaker::System,
        message: &[
            t("For Washoku Bistro, they offer a lunch menu with bento boxes and entrées, with limited options. They also have "),
            em("sushi rolls", Accent::Dish),
            t(", such as spicy salmon rolls and California rolls. As for Tokyo Express, they have a wide variety of options including bento boxes, "),
            em("sushi combos", Accent::Dish),
            t(", feature rolls, tempura, and noodles."),
        ],
    },
    TranscriptTurn {
        speaker: Speaker::User,
        message: &[t("Ok, then the first one doesn't seem to match my preference.")],
    },
    TranscriptTurn {
        speaker: Speaker::System,
        message: &[t("I'm sorry that you did not like the recommendation. Is there anything else I can assist you with?")],
    },
    TranscriptTurn {
        speaker: Speaker::User,
        message: &[t("Does Tokyo Express have a parking lot?")],
    },
    TranscriptTurn {
        speaker: Speaker::System,
        message: &[t("Tokyo Express has a parking lot.")],
    },
    TranscriptTurn {
        speaker: Speaker::User,
        message: &[t("Great. I will go there then. Thanks!")],
    },
    TranscriptTurn {
        speaker: Speaker::System,
        message: &[t("Great! Enjoy your meal! If you need any more assistance, feel free to ask.")],
    },
];

//! Display records rendered by the demo pages.
//!
//! Everything here is authored content: the structs are containers for
//! literal `&'static str` data declared in the page crates, never derived
//! or mutated at runtime.

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// Inline emphasis applied to one segment of authored text.
///
/// Each variant maps to a highlight class in the page stylesheet. Segments
/// carry the variant instead of embedded markup so that the text stays
/// escapable and testable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    /// Cuisine / hard-constraint mentions (green).
    Cuisine,
    /// Dish / item mentions (blue).
    Dish,
    /// Vibe / soft-constraint mentions (purple).
    Vibe,
    /// Subtopic-coverage mentions (orange).
    Breadth,
    /// Elaboration mentions (blue).
    Depth,
    /// Plain bold emphasis.
    Strong,
}

/// One fragment of authored text with an optional accent.
#[derive(Debug, Clone, Copy)]
pub struct Seg {
    pub text: &'static str,
    pub accent: Option<Accent>,
}

/// Authored rich text: an ordered run of segments.
pub type RichText = &'static [Seg];

/// A plain segment.
pub const fn t(text: &'static str) -> Seg {
    Seg { text, accent: None }
}

/// An accented segment.
pub const fn em(text: &'static str, accent: Accent) -> Seg {
    Seg {
        text,
        accent: Some(accent),
    }
}

/// The closed set of selectable example queries on the reformulation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenarioKey {
    #[default]
    YouthActivities,
    GraduationTrip,
}

impl ScenarioKey {
    pub const ALL: [ScenarioKey; 2] = [ScenarioKey::YouthActivities, ScenarioKey::GraduationTrip];

    /// Stable identifier used in the `scenario` query parameter.
    pub fn slug(self) -> &'static str {
        match self {
            ScenarioKey::YouthActivities => "youth-activities",
            ScenarioKey::GraduationTrip => "graduation-trip",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.slug() == slug)
            .ok_or_else(|| Error::UnknownKey(format!("scenario `{slug}`")))
    }
}

impl<'de> Deserialize<'de> for ScenarioKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        Self::from_slug(&slug).map_err(serde::de::Error::custom)
    }
}

/// The three mutually exclusive panels of the architecture deep-dive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    State,
    Retrieval,
    Generation,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::State, Tab::Retrieval, Tab::Generation];

    /// Stable identifier used in the `tab` query parameter.
    pub fn slug(self) -> &'static str {
        match self {
            Tab::State => "state",
            Tab::Retrieval => "retrieval",
            Tab::Generation => "generation",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.slug() == slug)
            .ok_or_else(|| Error::UnknownKey(format!("tab `{slug}`")))
    }
}

impl<'de> Deserialize<'de> for Tab {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        Self::from_slug(&slug).map_err(serde::de::Error::custom)
    }
}

/// Authored quality marker for a ranked entry.
///
/// Set per entry at authoring time; rendering never inspects the label text
/// to decide highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    /// The kind of hit the method is meant to surface.
    Ideal,
    /// A superficially matching hit the method should not have surfaced.
    Offtrack,
}

/// One row of an illustrative ranked-result list.
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry {
    pub label: &'static str,
    pub note: &'static str,
    pub tone: Tone,
}

/// One selectable scenario: a query and the three reformulations of it,
/// each with its illustrative ranking.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: ScenarioKey,
    /// The user query shown in the selector.
    pub query: &'static str,
    /// Breadth-only reformulation (Query2Expansion).
    pub q2e_text: &'static str,
    /// Depth-only reformulation (Query2Doc).
    pub q2d_text: &'static str,
    /// Combined reformulation (EQR).
    pub eqr_text: &'static str,
    pub q2e_ranks: &'static [RankedEntry],
    pub q2d_ranks: &'static [RankedEntry],
    pub eqr_ranks: &'static [RankedEntry],
}

/// Whether a hard-constraint filter keeps or discards a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStatus {
    Keep,
    Discard,
}

/// One row of the hard-constraint filtering table.
#[derive(Debug, Clone, Copy)]
pub struct FilterRow {
    pub restaurant: &'static str,
    pub cuisine: &'static str,
    pub status: FilterStatus,
}

/// One row of the review-level scoring table.
#[derive(Debug, Clone, Copy)]
pub struct ReviewRow {
    pub restaurant: &'static str,
    pub review: &'static str,
    pub score: f32,
    pub note: &'static str,
}

/// Visual treatment of a review score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLevel {
    High,
    Low,
}

impl MatchLevel {
    /// The one display rule that is actually computed: scores strictly above
    /// 0.85 read as a high match, everything else (0.85 included) as low.
    pub fn from_score(score: f32) -> Self {
        if score > 0.85 {
            MatchLevel::High
        } else {
            MatchLevel::Low
        }
    }
}

/// Who is speaking in a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    System,
}

/// One turn of the pre-scripted conversation log.
#[derive(Debug, Clone, Copy)]
pub struct TranscriptTurn {
    pub speaker: Speaker,
    pub message: RichText,
}

/// Informational row describing one published dataset.
#[derive(Debug, Clone, Copy)]
pub struct DatasetDescriptor {
    pub name: &'static str,
    pub coverage: &'static str,
    pub corpus: &'static str,
    pub queries: u32,
}

/// Page metadata fixed at compile time.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    pub title: &'static str,
    /// Emoji used as the favicon.
    pub icon: &'static str,
}

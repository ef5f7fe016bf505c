//! Authored content for the reformulation page.
//!
//! Every value here is a literal taken from the paper's worked examples.
//! Nothing is computed; selection only changes which record is displayed.

use nlrec_core::types::{DatasetDescriptor, RankedEntry, Scenario, ScenarioKey, Tone};

pub static SCENARIOS: &[Scenario] = &[
    Scenario {
        key: ScenarioKey::YouthActivities,
        query: "Cities for youth-friendly activities",
        q2e_text: "Night life; Budget hotels; Outdoor activities; Hostels; Backpacking; Cheap eats; Bars; Clubs",
        q2d_text: "Amsterdam is a vibrant city known for its lively nightlife and strong youth culture. It offers numerous hostels...",
        eqr_text: "1. Night life: Cities with live music venues, diverse night markets...\n\
                   2. Budget hotels: Cities with budget-friendly lodging options...\n\
                   3. Outdoor activities: Cities with lots of biking trails, beaches...",
        q2e_ranks: &[
            RankedEntry { label: "1. Amsterdam", note: "0.85", tone: Tone::Neutral },
            RankedEntry {
                label: "2. Bucharest",
                note: "0.84 (Cheap but not youth focused)",
                tone: Tone::Offtrack,
            },
            RankedEntry { label: "...", note: "", tone: Tone::Neutral },
            RankedEntry { label: "56. Bangkok", note: "0.62", tone: Tone::Neutral },
        ],
        q2d_ranks: &[
            RankedEntry { label: "1. Amsterdam", note: "0.88", tone: Tone::Neutral },
            RankedEntry { label: "...", note: "", tone: Tone::Neutral },
            RankedEntry {
                label: "73. Vancouver",
                note: "0.55 (Missed outdoor aspect)",
                tone: Tone::Neutral,
            },
            RankedEntry { label: "...", note: "", tone: Tone::Neutral },
        ],
        eqr_ranks: &[
            RankedEntry { label: "1. Amsterdam", note: "0.89", tone: Tone::Ideal },
            RankedEntry { label: "2. Bangkok", note: "0.82", tone: Tone::Ideal },
            RankedEntry { label: "3. Vancouver", note: "0.80", tone: Tone::Ideal },
            RankedEntry { label: "...", note: "", tone: Tone::Ideal },
        ],
    },
    Scenario {
        key: ScenarioKey::GraduationTrip,
        query: "Cities for a high school graduation trip",
        q2e_text: "youth-friendly activities; budget accommodations; group tours; adventure parks; cultural experiences",
        q2d_text: "New York City, USA: As one of the world's most iconic destinations, NYC offers a dynamic setting for graduation trips...",
        eqr_text: "1. Adventure Activities: Cities offering exciting outdoor activities... (e.g. Queenstown)\n\
                   2. Cultural Hotspots: Cities rich in museums and history... (e.g. Rome)\n\
                   3. Beach Destinations: Vibrant beach scenes suitable for young travelers... (e.g. Miami)",
        q2e_ranks: &[
            RankedEntry { label: "1. Aarhus", note: "0.81", tone: Tone::Offtrack },
            RankedEntry { label: "2. San Francisco", note: "0.79", tone: Tone::Neutral },
            RankedEntry { label: "...", note: "", tone: Tone::Neutral },
        ],
        q2d_ranks: &[
            RankedEntry { label: "1. New York City", note: "0.86", tone: Tone::Neutral },
            RankedEntry { label: "2. London", note: "0.84", tone: Tone::Neutral },
            RankedEntry { label: "...", note: "", tone: Tone::Neutral },
        ],
        eqr_ranks: &[
            RankedEntry { label: "1. Queenstown", note: "0.88", tone: Tone::Ideal },
            RankedEntry { label: "2. New York City", note: "0.85", tone: Tone::Ideal },
            RankedEntry { label: "3. Rome", note: "0.82", tone: Tone::Ideal },
        ],
    },
];

/// Look up the record for a key. The key set is closed, so this cannot miss.
pub fn scenario(key: ScenarioKey) -> &'static Scenario {
    match key {
        ScenarioKey::YouthActivities => &SCENARIOS[0],
        ScenarioKey::GraduationTrip => &SCENARIOS[1],
    }
}

/// One step of the pipeline strip.
#[derive(Debug, Clone, Copy)]
pub struct PipelineStep {
    pub title: &'static str,
    pub body: &'static str,
    pub kind: StepKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Input,
    Process,
    Outcome,
}

pub static PIPELINE: &[PipelineStep] = &[
    PipelineStep {
        title: "1. Input Query",
        body: "Cities for youth-friendly activities",
        kind: StepKind::Input,
    },
    PipelineStep {
        title: "2. LLM Reformulation",
        body: "Prompt the LLM to: 1. Identify Subtopics (Breadth) 2. Provide Elaborations (Depth)",
        kind: StepKind::Process,
    },
    PipelineStep {
        title: "3. Dense Retrieval",
        body: "We encode the reformulated query and search against passage embeddings.",
        kind: StepKind::Process,
    },
    PipelineStep {
        title: "4. Aggregation",
        body: "Average the top-k passage scores to rank items (Late Fusion).",
        kind: StepKind::Outcome,
    },
];

pub static DATASETS: &[DatasetDescriptor] = &[
    DatasetDescriptor {
        name: "Yelp Restaurant",
        coverage: "New Orleans (nor), Philadelphia (phi)",
        corpus: "1,152 restaurants (nor: 515, phi: 637)",
        queries: 100,
    },
    DatasetDescriptor {
        name: "TripAdvisor Hotel",
        coverage: "New York City, Chicago, London, Montreal",
        corpus: "586 hotels (nyc: 182, chicago: 74, london: 266, montreal: 64)",
        queries: 100,
    },
    DatasetDescriptor {
        name: "Traveldest",
        coverage: "/",
        corpus: "775 cities",
        queries: 100,
    },
];

/// Per-dataset detail card.
#[derive(Debug, Clone, Copy)]
pub struct DatasetDetail {
    pub name: &'static str,
    pub lede: &'static str,
    pub points: &'static [&'static str],
}

pub static DATASET_DETAILS: &[DatasetDetail] = &[
    DatasetDetail {
        name: "Yelp Restaurant",
        lede: "Restaurant recommendations based on Yelp reviews:",
        points: &[
            "100 natural language queries",
            "Ground truth relevance labels for New Orleans and Philadelphia",
            "1,152 restaurants organized by city",
        ],
    },
    DatasetDetail {
        name: "TripAdvisor Hotel",
        lede: "Hotel recommendations based on TripAdvisor reviews:",
        points: &[
            "100 natural language queries",
            "Ground truth relevance labels for NYC, Chicago, London, and Montreal",
            "586 hotels organized by city",
        ],
    },
    DatasetDetail {
        name: "Traveldest",
        lede: "Travel destination recommendations based on WikiVoyage pages:",
        points: &[
            "100 natural language queries",
            "Ground truth relevance labels for various cities",
            "775 cities with detailed WikiVoyage descriptions",
        ],
    },
];

pub const DATASET_URL: &str = "https://huggingface.co/datasets/cuijustin0617/NLRec";

//! Typed markup components.
//!
//! Each component takes plain data records and returns an HTML fragment.
//! Text fields are escaped here, so content modules never embed markup.

use nlrec_core::types::{
    Accent, DatasetDescriptor, FilterRow, FilterStatus, MatchLevel, RankedEntry, ReviewRow, Seg,
    ScenarioKey, Speaker, Tab, Tone, TranscriptTurn,
};

use crate::escape::escape;

fn accent_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Cuisine => "hl-green",
        Accent::Dish => "hl-blue",
        Accent::Vibe => "hl-purple",
        Accent::Breadth => "breadth",
        Accent::Depth => "depth",
        Accent::Strong => "strong",
    }
}

/// Render a run of rich-text segments as escaped spans.
pub fn rich(segments: &[Seg]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg.accent {
            Some(Accent::Strong) => {
                out.push_str("<b>");
                out.push_str(&escape(seg.text));
                out.push_str("</b>");
            }
            Some(accent) => {
                out.push_str(&format!(
                    r#"<span class="{}">{}</span>"#,
                    accent_class(accent),
                    escape(seg.text)
                ));
            }
            None => out.push_str(&escape(seg.text)),
        }
    }
    out
}

/// A reformulation box. `kind` picks the per-method border color.
pub fn ref_box(kind: &str, text: &str) -> String {
    format!(
        r#"<div class="ref-box {}">{}</div>"#,
        kind,
        escape(text)
    )
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "",
        Tone::Ideal => " rank-ideal",
        Tone::Offtrack => " rank-bad",
    }
}

/// An ordered ranking list. Highlighting comes only from each entry's
/// authored tone.
pub fn rank_list(entries: &[RankedEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            r#"<div class="rank-item{}"><span>{}</span><span class="rank-score">{}</span></div>
"#,
            tone_class(entry.tone),
            escape(entry.label),
            escape(entry.note)
        ));
    }
    out
}

/// The hard-constraint filtering table.
pub fn filter_table(rows: &[FilterRow]) -> String {
    let mut body = String::new();
    for row in rows {
        let (class, label) = match row.status {
            FilterStatus::Keep => ("status-keep", "✅ Keep"),
            FilterStatus::Discard => ("status-discard", "❌ Discard"),
        };
        body.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td class="{}">{}</td></tr>
"#,
            escape(row.restaurant),
            escape(row.cuisine),
            class,
            label
        ));
    }
    format!(
        r#"<table class="demo-table">
<thead><tr><th>Restaurant</th><th>Cuisine</th><th>Status</th></tr></thead>
<tbody>
{body}</tbody>
</table>"#
    )
}

/// The review-level scoring table. The score cell's class is derived from
/// the score through `MatchLevel::from_score`.
pub fn review_table(rows: &[ReviewRow]) -> String {
    let mut body = String::new();
    for row in rows {
        let level = match MatchLevel::from_score(row.score) {
            MatchLevel::High => "score-high",
            MatchLevel::Low => "score-low",
        };
        body.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td class="{}">{:.2}</td><td>{}</td></tr>
"#,
            escape(row.restaurant),
            escape(row.review),
            level,
            row.score,
            escape(row.note)
        ));
    }
    format!(
        r#"<table class="demo-table">
<thead><tr><th>Restaurant</th><th>Review Text</th><th>Score</th><th>Type</th></tr></thead>
<tbody>
{body}</tbody>
</table>"#
    )
}

/// The dataset overview table.
pub fn dataset_table(rows: &[DatasetDescriptor]) -> String {
    let mut body = String::new();
    for row in rows {
        body.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>
"#,
            escape(row.name),
            escape(row.coverage),
            escape(row.corpus),
            row.queries
        ));
    }
    format!(
        r#"<table class="demo-table">
<thead><tr><th>Dataset</th><th>Cities/Categories</th><th>Corpus Size</th><th>Queries</th></tr></thead>
<tbody>
{body}</tbody>
</table>"#
    )
}

fn speaker_class(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::User => "user",
        Speaker::System => "system",
    }
}

/// The scripted conversation log as a chat window.
pub fn chat_window(header: &str, turns: &[TranscriptTurn]) -> String {
    let mut body = String::new();
    for turn in turns {
        body.push_str(&format!(
            r#"<div class="bubble {}">{}</div>
"#,
            speaker_class(turn.speaker),
            rich(turn.message)
        ));
    }
    format!(
        r#"<div class="chat-window">
<div class="chat-header"><span>{}</span></div>
<div class="chat-body">
{body}</div>
</div>"#,
        escape(header)
    )
}

/// Tab links. Switching tabs re-requests the page with only the `tab`
/// parameter, so it cannot disturb any other state.
pub fn tab_nav(labels: &[(Tab, &str)], active: Tab) -> String {
    let mut out = String::from(r#"<div class="tab-nav">"#);
    for (tab, label) in labels {
        let class = if *tab == active { "tab active" } else { "tab" };
        out.push_str(&format!(
            r#"<a class="{}" href="?tab={}">{}</a>"#,
            class,
            tab.slug(),
            escape(label)
        ));
    }
    out.push_str("</div>");
    out
}

/// The scenario dropdown. Choosing an option re-requests the page with the
/// chosen key as the `scenario` parameter.
pub fn scenario_select(options: &[(ScenarioKey, &str)], active: ScenarioKey) -> String {
    let mut out = String::from(
        r#"<select class="scenario-select" onchange="location.search='?scenario='+this.value">"#,
    );
    for (key, query) in options {
        let selected = if *key == active { " selected" } else { "" };
        out.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            key.slug(),
            selected,
            escape(query)
        ));
    }
    out.push_str("</select>");
    out
}

//! Section renderers. Top-to-bottom order matches the page: header,
//! problem statement, interactive comparison, pipeline strip, datasets,
//! footer.

use nlrec_core::types::{em, t, Accent, Scenario, ScenarioKey};
use nlrec_markup::{dataset_table, escape, rank_list, ref_box, rich, scenario_select};

use crate::content::{self, StepKind};

pub fn header() -> String {
    r#"<div class="page-header">
<h1>EQR</h1>
<h3>A Simple but Effective Elaborative Query Reformulation Approach For Natural Language Recommendation</h3>
<p class="authors"><b>Qianfeng Wen*, Yifan Liu*, Justin Cui*</b>, Joshua Zhang, Anton Korikov, George-Kirollos Saad, Scott Sanner</p>
<p class="affiliation">*Equal Contribution | University of Toronto | arXiv:2510.02656 [cs.IR]</p>
</div>"#
        .to_string()
}

pub fn problem() -> String {
    let breadth = rich(&[
        t("1. "),
        em("Breadth:", Accent::Breadth),
        t(" Covering diverse subtopics (e.g., Nightlife, Budget, Outdoors)."),
    ]);
    let depth = rich(&[
        t("2. "),
        em("Depth:", Accent::Depth),
        t(" Elaborating on why those subtopics matter."),
    ]);
    format!(
        r#"<h3>The Challenge: Broad &amp; Indirect Queries</h3>
<div class="columns">
<div class="panel info">
<p><b>The Input</b></p>
<p>Users often ask <b>Broad</b> or <b>Indirect</b> queries:</p>
<ul>
<li><i>"Cities for youth-friendly activities"</i> (Broad)</li>
<li><i>"Cities for a high school graduation trip"</i> (Indirect)</li>
</ul>
<p>Standard retrieval struggles to map these high-level concepts to specific item descriptions.</p>
</div>
<div class="panel success">
<p><b>The Solution (EQR)</b></p>
<p>Effective recommendation requires two dimensions:</p>
<p>{breadth}</p>
<p>{depth}</p>
<p><b>EQR</b> uses an LLM to generate both.</p>
</div>
</div>"#
    )
}

fn method_column(title: &str, caption: &str, box_kind: &str, text: &str, verdict: &str, ranks: &str) -> String {
    format!(
        r#"<div class="method-card">
<h4>{title}</h4>
<p class="caption">{caption}</p>
{ref_box}
<p><b>Result:</b> {verdict}</p>
<hr>
{ranks}
</div>"#,
        title = escape(title),
        caption = escape(caption),
        ref_box = ref_box(box_kind, text),
        verdict = escape(verdict),
        ranks = ranks,
    )
}

/// The scenario-dependent comparison: selector plus the three method panels.
pub fn comparison(active: ScenarioKey) -> String {
    let options: Vec<(ScenarioKey, &str)> = content::SCENARIOS
        .iter()
        .map(|s| (s.key, s.query))
        .collect();
    let data: &Scenario = content::scenario(active);

    let q2e = method_column(
        "Q2E (Breadth Only)",
        "Query2Expansion",
        "q2e",
        data.q2e_text,
        "Expands keywords but lacks context. Can retrieve superficially matching items.",
        &rank_list(data.q2e_ranks),
    );
    let q2d = method_column(
        "Q2D (Depth Only)",
        "Query2Doc",
        "q2d",
        data.q2d_text,
        "Focuses deeply on one interpretation (Tunnel Vision). Misses other relevant items.",
        &rank_list(data.q2d_ranks),
    );
    let eqr = method_column(
        "EQR (Breadth + Depth)",
        "Elaborative Subtopic QR",
        "eqr",
        data.eqr_text,
        "Breaks query into subtopics AND elaborates on them. Retrieves diverse, relevant items.",
        &rank_list(data.eqr_ranks),
    );

    format!(
        r#"<hr>
<h2>🔍 Interactive Comparison</h2>
<p class="caption">Select a query to see how different reformulation methods affect retrieval results.</p>
<label>Choose a User Query: {select}</label>
<div class="columns">
{q2e}
{q2d}
{eqr}
</div>"#,
        select = scenario_select(&options, active),
    )
}

pub fn pipeline() -> String {
    let mut steps = String::new();
    for step in content::PIPELINE {
        let kind = match step.kind {
            StepKind::Input => "pipeline-step input",
            StepKind::Process => "pipeline-step",
            StepKind::Outcome => "pipeline-step outcome",
        };
        steps.push_str(&format!(
            r#"<div class="{kind}"><p><b>{title}</b></p><p>{body}</p></div>
"#,
            title = escape(step.title),
            body = escape(step.body),
        ));
    }
    format!(
        r#"<hr>
<h2>⚙️ The EQR Pipeline</h2>
<p>How EQR converts a raw user query into a ranked list.</p>
<div class="columns">
{steps}</div>"#
    )
}

pub fn datasets() -> String {
    let mut details = String::new();
    for detail in content::DATASET_DETAILS {
        let mut points = String::new();
        for point in detail.points {
            points.push_str(&format!("<li>{}</li>\n", escape(point)));
        }
        details.push_str(&format!(
            r#"<div class="method-card">
<h4>{name}</h4>
<p>{lede}</p>
<ul>
{points}</ul>
</div>
"#,
            name = escape(detail.name),
            lede = escape(detail.lede),
        ));
    }
    format!(
        r#"<hr>
<h2>📂 Natural Language Query-Driven Recommendation Datasets</h2>
<p>We provide three natural language query-driven recommendation datasets designed to evaluate systems under challenging conditions where:</p>
<ol>
<li>User intent is <b>implicitly expressed</b> through broad or indirect queries</li>
<li>Items are described through <b>multiple diverse textual sources</b></li>
</ol>
<p>Each dataset contains 100 natural language queries, ground truth relevance labels, and original corpus of items for reference.</p>
<p>🤗 <a href="{url}" target="_blank">Access the datasets on Hugging Face</a></p>
{table}
<h3>Dataset Details</h3>
<div class="columns">
{details}</div>"#,
        url = content::DATASET_URL,
        table = dataset_table(content::DATASETS),
    )
}

pub fn footer() -> String {
    r#"<div class="footer">Based on arXiv:2510.02656v2 • 2025</div>"#.to_string()
}

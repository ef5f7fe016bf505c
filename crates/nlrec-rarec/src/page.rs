//! Section renderers: header, the tabbed architecture deep-dive, the
//! scripted conversation, footer.

use nlrec_core::types::Tab;
use nlrec_markup::{chat_window, escape, filter_table, review_table, rich, tab_nav};

use crate::content::{self, Verdict};

pub fn header() -> String {
    r#"<div class="page-header">
<h1>RA-Rec</h1>
<h3>Retrieval-Augmented Conversational Recommendation with Prompt-based Semi-Structured State</h3>
<p class="authors"><b>Sara Kemper*, Justin Cui*, Kai Dicarlantonio*, Kathy Lin*, Danjie Tang*</b>, Anton Korikov, Scott Sanner</p>
<p class="affiliation">*Equal Contribution | University of Toronto &amp; University of Waterloo | SIGIR '24</p>
<div class="links">
<a href="https://github.com/D3Mlab/llm-convrec" target="_blank">GitHub Repository</a>
<a href="https://arxiv.org/abs/2406.00033" target="_blank">Read the Paper</a>
</div>
</div>"#
        .to_string()
}

fn state_panel() -> String {
    format!(
        r#"<div class="columns">
<div>
<h4>User Utterance</h4>
<div class="custom-card">{utterance}</div>
</div>
<div>
<h4>Semi-Structured NL State</h4>
<p>The LLM extracts <b>Hard Constraints</b> (mandatory) and <b>Soft Constraints</b> (preferences).</p>
<div class="code-block">{snippet}</div>
</div>
</div>"#,
        utterance = rich(content::UTTERANCE),
        snippet = escape(content::STATE_SNIPPET),
    )
}

fn retrieval_panel() -> String {
    let mut fusion = String::new();
    for card in content::FUSION_CARDS {
        let (class, label) = match card.verdict {
            Verdict::Winner => ("verdict winner", "🏆 Winner"),
            Verdict::RunnerUp => ("verdict runner-up", "🥈 Runner Up"),
        };
        fusion.push_str(&format!(
            r#"<div>
<p><b>{restaurant} Calculation:</b></p>
<p>{calc}</p>
<span class="{class}">{label}</span>
</div>
"#,
            restaurant = escape(card.restaurant),
            calc = escape(card.calc),
        ));
    }
    format!(
        r#"<h3>Late Fusion Retrieval Process</h3>
<p>How RA-Rec matches nuance using reviews.</p>
<h4>Step 1: Hard Constraint Filtering</h4>
<p>First, we filter the database to only include restaurants matching <code>Japanese</code> and <code>Sushi</code>.</p>
{filter}
<div class="arrow-down">↓</div>
<h4>Step 2: Review-Level Scoring</h4>
<p>We generate a query and calculate the <b>Dot Product Similarity</b> between the query and <b>ALL reviews</b> of the remaining restaurants.</p>
{reviews}
<div class="arrow-down">↓</div>
<h4>Step 3: Late Fusion Aggregation</h4>
<p>We average the top-k review scores for each restaurant to get a final <b>Item Score</b>.</p>
<div class="columns">
{fusion}</div>"#,
        filter = filter_table(content::FILTER_ROWS),
        reviews = review_table(content::REVIEW_ROWS),
    )
}

fn generation_panel() -> String {
    let mut context = String::new();
    for line in content::GENERATION_CONTEXT {
        context.push_str(&format!("<li><i>{}</i></li>\n", escape(line)));
    }
    format!(
        r#"<h4>Grounded Generation</h4>
<p>The LLM generates a response using the <b>Metadata</b> and the <b>Top Retrieved Reviews</b>.</p>
<div class="columns">
<div>
<p><b>Source Context (Retrieved):</b></p>
<ul>
{context}</ul>
</div>
<div>
<p><b>Generated Response:</b></p>
<div class="custom-card response">{response}</div>
</div>
</div>"#,
        response = rich(content::GENERATED_RESPONSE),
    )
}

/// The tabbed deep-dive. Only the active panel is rendered; switching tabs
/// re-requests the page and has no other effect.
pub fn architecture(active: Tab) -> String {
    let panel = match active {
        Tab::State => state_panel(),
        Tab::Retrieval => retrieval_panel(),
        Tab::Generation => generation_panel(),
    };
    format!(
        r#"<h2>System Flow</h2>
<p class="caption">Explore the pipeline step-by-step.</p>
{nav}
{panel}"#,
        nav = tab_nav(content::TAB_LABELS, active),
    )
}

pub fn chat_demo() -> String {
    format!(
        r#"<hr>
<h2>Example Conversation</h2>
<p class="caption">A full dialogue demonstrating preference understanding, rejection, and QA.</p>
{}"#,
        chat_window(content::CHAT_HEADER, content::TRANSCRIPT),
    )
}

pub fn footer() -> String {
    r#"<div class="footer">Paper: <a href="https://arxiv.org/abs/2406.00033">arXiv:2406.00033</a> [cs.CL]<br>Demo served from static content • 2025</div>"#
        .to_string()
}

use nlrec_core::types::{
    em, t, Accent, FilterRow, FilterStatus, PageMeta, RankedEntry, ReviewRow, ScenarioKey,
    Speaker, Tab, Tone, TranscriptTurn,
};
use nlrec_markup::{
    chat_window, escape, filter_table, page_shell, rank_list, review_table, rich,
    scenario_select, tab_nav,
};

#[test]
fn escape_handles_markup_metacharacters() {
    assert_eq!(
        escape(r#"<b>&"fish" 'n' chips</b>"#),
        "&lt;b&gt;&amp;&quot;fish&quot; &#39;n&#39; chips&lt;/b&gt;"
    );
}

#[test]
fn rich_text_escapes_and_classes_segments() {
    let segs = &[t("try "), em("sushi", Accent::Dish), em(" & more", Accent::Strong)];
    let html = rich(segs);
    assert_eq!(
        html,
        r#"try <span class="hl-blue">sushi</span><b> &amp; more</b>"#
    );
}

#[test]
fn rank_list_preserves_order_and_tones() {
    let entries = &[
        RankedEntry { label: "1. Amsterdam", note: "0.89", tone: Tone::Ideal },
        RankedEntry { label: "2. Bucharest", note: "0.84", tone: Tone::Offtrack },
        RankedEntry { label: "...", note: "", tone: Tone::Neutral },
    ];
    let html = rank_list(entries);
    let amsterdam = html.find("1. Amsterdam").expect("first entry");
    let bucharest = html.find("2. Bucharest").expect("second entry");
    assert!(amsterdam < bucharest, "entries render in authored order");
    assert!(html.contains(r#"class="rank-item rank-ideal""#));
    assert!(html.contains(r#"class="rank-item rank-bad""#));
    assert!(html.contains(r#"class="rank-item""#));
}

#[test]
fn review_table_class_follows_score_threshold() {
    let rows = &[
        ReviewRow { restaurant: "A", review: "great", score: 0.86, note: "High Match" },
        ReviewRow { restaurant: "B", review: "exactly at the line", score: 0.85, note: "" },
        ReviewRow { restaurant: "C", review: "meh", score: 0.62, note: "Low Match" },
    ];
    let html = review_table(rows);
    assert!(html.contains(r#"<td class="score-high">0.86</td>"#));
    // 0.85 is not strictly above the threshold.
    assert!(html.contains(r#"<td class="score-low">0.85</td>"#));
    assert!(html.contains(r#"<td class="score-low">0.62</td>"#));
}

#[test]
fn filter_table_labels_statuses() {
    let rows = &[
        FilterRow { restaurant: "Washoku Bistro", cuisine: "Japanese", status: FilterStatus::Keep },
        FilterRow { restaurant: "Burger King", cuisine: "Fast Food", status: FilterStatus::Discard },
    ];
    let html = filter_table(rows);
    assert!(html.contains(r#"<td class="status-keep">✅ Keep</td>"#));
    assert!(html.contains(r#"<td class="status-discard">❌ Discard</td>"#));
}

static TURNS: &[TranscriptTurn] = &[
    TranscriptTurn { speaker: Speaker::User, message: &[t("hi")] },
    TranscriptTurn { speaker: Speaker::System, message: &[t("hello")] },
];

#[test]
fn chat_window_alternates_role_classes_in_order() {
    let html = chat_window("Restaurant Finder", TURNS);
    let user = html.find(r#"bubble user"#).expect("user bubble");
    let system = html.find(r#"bubble system"#).expect("system bubble");
    assert!(user < system);
    assert!(html.contains("Restaurant Finder"));
}

#[test]
fn tab_nav_marks_only_the_active_tab() {
    let labels = [(Tab::State, "1. Intent & State"), (Tab::Retrieval, "2. Retrieval")];
    let html = tab_nav(&labels, Tab::Retrieval);
    assert!(html.contains(r#"<a class="tab" href="?tab=state">"#));
    assert!(html.contains(r#"<a class="tab active" href="?tab=retrieval">"#));
}

#[test]
fn scenario_select_marks_only_the_active_option() {
    let options = [
        (ScenarioKey::YouthActivities, "Cities for youth-friendly activities"),
        (ScenarioKey::GraduationTrip, "Cities for a high school graduation trip"),
    ];
    let html = scenario_select(&options, ScenarioKey::GraduationTrip);
    assert!(html.contains(r#"<option value="youth-activities">"#));
    assert!(html.contains(r#"<option value="graduation-trip" selected>"#));
}

#[test]
fn page_shell_injects_title_style_and_body_once() {
    let meta = PageMeta { title: "EQR", icon: "🔍" };
    let html = page_shell(&meta, ".page { color: #333; }", "<p>content</p>");
    assert_eq!(html.matches("<style>").count(), 1);
    assert!(html.contains("<title>EQR</title>"));
    assert!(html.contains(".page { color: #333; }"));
    assert!(html.contains("<p>content</p>"));
}

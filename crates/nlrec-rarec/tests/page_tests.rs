use nlrec_core::traits::DemoPage;
use nlrec_core::types::{Speaker, Tab};
use nlrec_rarec::{content, RaRecPage, RaRecView};
use nlrec_markup::escape;

fn rendered(tab: Tab) -> String {
    RaRecPage.render(&RaRecView { tab })
}

fn chat_section(html: &str) -> &str {
    let start = html.find(r#"<div class="chat-window">"#).expect("chat window");
    &html[start..]
}

#[test]
fn transcript_turns_alternate_and_render_in_order() {
    assert_eq!(content::TRANSCRIPT.len(), 12);
    for (i, turn) in content::TRANSCRIPT.iter().enumerate() {
        let expected = if i % 2 == 0 { Speaker::User } else { Speaker::System };
        assert_eq!(turn.speaker, expected, "turn {i} role");
    }

    let html = rendered(Tab::State);
    let chat = chat_section(&html);
    let mut from = 0;
    for turn in content::TRANSCRIPT {
        let class = match turn.speaker {
            Speaker::User => r#"<div class="bubble user">"#,
            Speaker::System => r#"<div class="bubble system">"#,
        };
        let bubble = chat[from..].find(class).expect("bubble present in order");
        let text = escape(turn.message[0].text);
        let body = chat[from + bubble..].find(text.as_str()).expect("turn text");
        from += bubble + body;
    }
    assert_eq!(chat.matches("bubble user").count(), 6);
    assert_eq!(chat.matches("bubble system").count(), 6);
}

#[test]
fn first_system_turn_is_the_location_request() {
    let first_system = content::TRANSCRIPT
        .iter()
        .find(|t| t.speaker == Speaker::System)
        .expect("a system turn");
    assert_eq!(first_system.message[0].text, content::LOCATION_REQUEST);
}

#[test]
fn menu_description_is_verbatim_and_follows_the_location_request() {
    let location_at = content::TRANSCRIPT
        .iter()
        .position(|t| t.speaker == Speaker::System && t.message[0].text == content::LOCATION_REQUEST)
        .expect("location-request turn");

    let (menu_at, menu_turn) = content::TRANSCRIPT
        .iter()
        .enumerate()
        .find(|(_, t)| {
            t.speaker == Speaker::System
                && t.message.iter().map(|s| s.text).collect::<String>() == content::MENU_DESCRIPTION
        })
        .expect("menu-description turn, verbatim");

    assert!(menu_at > location_at);
    // It answers the menu question directly before it.
    assert_eq!(
        content::TRANSCRIPT[menu_at - 1].message[0].text,
        "What kind of menu do they offer?"
    );
    assert_eq!(menu_turn.speaker, Speaker::System);
}

#[test]
fn transcript_is_invariant_under_re_render_and_tab_switch() {
    let base = rendered(Tab::State);
    let base_chat = chat_section(&base).to_string();
    for tab in Tab::ALL {
        let html = rendered(tab);
        assert_eq!(chat_section(&html), base_chat, "tab {:?}", tab);
        // Re-render with the same view is byte-identical.
        assert_eq!(html, rendered(tab));
    }
}

#[test]
fn each_tab_shows_exactly_its_panel() {
    let state = rendered(Tab::State);
    assert!(state.contains("Semi-Structured NL State"));
    assert!(state.contains("&quot;hard_constraints&quot;"));
    assert!(!state.contains("Late Fusion Retrieval Process"));
    assert!(!state.contains("Grounded Generation"));

    let retrieval = rendered(Tab::Retrieval);
    assert!(retrieval.contains("Late Fusion Retrieval Process"));
    assert!(!retrieval.contains("Semi-Structured NL State"));
    assert!(!retrieval.contains("Grounded Generation"));

    let generation = rendered(Tab::Generation);
    assert!(generation.contains("Grounded Generation"));
    assert!(generation.contains("Washoku Bistro"));
    assert!(!generation.contains("Late Fusion Retrieval Process"));
}

#[test]
fn tab_nav_marks_the_active_tab_only() {
    let html = rendered(Tab::Retrieval);
    assert!(html.contains(r#"<a class="tab active" href="?tab=retrieval">"#));
    assert!(html.contains(r#"<a class="tab" href="?tab=state">"#));
    assert!(html.contains(r#"<a class="tab" href="?tab=generation">"#));
}

#[test]
fn review_scores_render_with_threshold_classes() {
    let html = rendered(Tab::Retrieval);
    for high in ["0.93", "0.88", "0.91", "0.87"] {
        assert!(
            html.contains(&format!(r#"<td class="score-high">{high}</td>"#)),
            "{high} is a high match"
        );
    }
    assert!(html.contains(r#"<td class="score-low">0.62</td>"#));
}

#[test]
fn fusion_calcs_are_literal_and_consistent_with_the_table() {
    let html = rendered(Tab::Retrieval);
    assert!(html.contains("(0.93 + 0.88 + 0.88) / 3 = 0.89"));
    assert!(html.contains("(0.91 + 0.87 + 0.62) / 3 = 0.80"));

    // Every score cited by a worked calc appears as a review-table cell.
    for card in content::FUSION_CARDS {
        let (operands, _) = card.calc.split_once(" / ").expect("calc shape");
        for score in operands.trim_matches(['(', ')']).split(" + ") {
            assert!(
                html.contains(&format!(r#">{score}</td>"#)),
                "score {score} cited by {} is in the table",
                card.restaurant
            );
        }
    }
    assert!(html.contains("🏆 Winner"));
    assert!(html.contains("🥈 Runner Up"));
}

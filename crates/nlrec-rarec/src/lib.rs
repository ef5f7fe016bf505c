#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! nlrec-rarec
//!
//! The "Retrieval-Augmented Conversational Recommendation" demo page: a
//! three-tab architecture deep-dive plus a pre-scripted conversation log.

pub mod content;
pub mod page;
pub mod style;

use nlrec_core::traits::DemoPage;
use nlrec_core::types::{PageMeta, Tab};
use nlrec_markup::page_shell;
use serde::Deserialize;

/// Request-scoped view state: which deep-dive panel is open.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct RaRecView {
    #[serde(default)]
    pub tab: Tab,
}

pub struct RaRecPage;

impl DemoPage for RaRecPage {
    type View = RaRecView;

    fn meta(&self) -> PageMeta {
        PageMeta {
            title: "RA-Rec: Conversational Recommendation",
            icon: "💬",
        }
    }

    fn render(&self, view: &RaRecView) -> String {
        let body = [
            page::header(),
            page::architecture(view.tab),
            page::chat_demo(),
            page::footer(),
        ]
        .join("\n");
        page_shell(&self.meta(), style::STYLE, &body)
    }
}

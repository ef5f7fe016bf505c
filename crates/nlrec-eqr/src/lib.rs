#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! nlrec-eqr
//!
//! The "Elaborative Query Reformulation" demo page: a fixed narrative with
//! one selectable scenario driving the method-comparison panels.

pub mod content;
pub mod page;
pub mod style;

use nlrec_core::traits::DemoPage;
use nlrec_core::types::{PageMeta, ScenarioKey};
use nlrec_markup::page_shell;
use serde::Deserialize;

/// Request-scoped view state: which scenario the comparison shows.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct EqrView {
    #[serde(default)]
    pub scenario: ScenarioKey,
}

pub struct EqrPage;

impl DemoPage for EqrPage {
    type View = EqrView;

    fn meta(&self) -> PageMeta {
        PageMeta {
            title: "EQR: Elaborative Query Reformulation",
            icon: "🔍",
        }
    }

    fn render(&self, view: &EqrView) -> String {
        let body = [
            page::header(),
            page::problem(),
            page::comparison(view.scenario),
            page::pipeline(),
            page::datasets(),
            page::footer(),
        ]
        .join("\n");
        page_shell(&self.meta(), style::STYLE, &body)
    }
}

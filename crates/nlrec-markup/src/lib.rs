#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod components;
pub mod escape;
pub mod shell;

pub use components::{
    chat_window, dataset_table, filter_table, rank_list, ref_box, review_table, rich,
    scenario_select, tab_nav,
};
pub use escape::escape;
pub use shell::page_shell;

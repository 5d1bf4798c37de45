//! Board rendering and terminal output
//!
//! HTML tables with merged cells, plain-text boards, and pretty-printing of
//! command results.

pub mod display;
pub mod formatters;
mod table;

pub use display::{
    print_association_result, print_benchmark_result, print_board, print_generate_result,
    render_text,
};
pub use table::render_html;

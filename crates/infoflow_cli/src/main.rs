//! CLI probe entry point.
//!
//! # Responsibility
//! - Build the sample workflow graph and print its DOT description, so the
//!   core crate can be exercised without any web runtime.
//! - Keep output deterministic for quick local sanity checks.

use infoflow_core::samples::{sample_items, sample_tools};
use infoflow_core::{build, to_dot};

fn main() {
    // Optional single argument filters the graph to one tool.
    let filter = std::env::args().nth(1);

    let tools = sample_tools();
    let items = sample_items();
    let graph = build(&items, &tools, filter.as_deref());

    eprintln!(
        "infoflow_core version={} nodes={} edges={}",
        infoflow_core::core_version(),
        graph.nodes().len(),
        graph.edges().len()
    );
    print!("{}", to_dot(&graph));
}

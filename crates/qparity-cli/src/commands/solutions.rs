//! Solutions command implementation.

use console::style;

use qparity_eval::solutions;

/// List the built-in solutions.
pub fn execute() {
    println!("{} Built-in solutions:\n", style("qparity").cyan().bold());
    for solution in solutions::builtin() {
        println!(
            "  {} {:<18} {}",
            style("●").green(),
            style(solution.name()).bold(),
            solution.summary()
        );
    }
    println!();
    println!(
        "Evaluate one with {}",
        style("qparity evaluate --fun NAME --problem problemN").yellow()
    );
}

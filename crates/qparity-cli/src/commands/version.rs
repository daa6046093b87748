//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - parity-subspace datasets and blind solution scoring",
        style("qparity").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qparity-ir           Gate descriptors, transforms, state helpers");
    println!("  qparity-hal          Transform adapter contract");
    println!("  qparity-adapter-sim  Local statevector simulator");
    println!("  qparity-data         Dataset synthesis and problem files");
    println!("  qparity-eval         Evaluation harness and result records");
    println!("  qparity-cli          Command-line interface");
    println!();
    println!("License:    {}", style(env!("CARGO_PKG_LICENSE")).dim());
}

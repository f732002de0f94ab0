//! picker-color CLI tool
//!
//! Command-line interface for converting colors between hex, RGB(A) and
//! HSL(A) notations with the picker-color library.

#[cfg(feature = "cli")]
use picker_color::cli;

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    cli::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("CLI feature not enabled. Please rebuild with --features cli");
}

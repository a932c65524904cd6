//! Main binary entry point for the `codetidy` source normalizer.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()` function
//! so it behaves exactly like the `codetidy` binary from `codetidy-cli`.

use anyhow::Result;

fn main() -> Result<()> {
    let code = codetidy::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}

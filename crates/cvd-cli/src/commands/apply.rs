//! Apply command
//!
//! Decodes an image, runs one named filter, and writes the result.

use crate::ApplyArgs;
use anyhow::{Context, Result};
use cvd_ops::FilterRegistry;
use tracing::{info, trace};

pub fn run(args: ApplyArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), filter = %args.filter, "apply::run");

    // Resolve before decoding so a bad name fails fast.
    let kernel = FilterRegistry::standard()
        .lookup(&args.filter)
        .with_context(|| format!("Cannot apply to {}", args.input.display()))?;

    let image = super::load_image(&args.input)?;
    let (width, height) = image.dimensions();
    info!(filter = %kernel, width, height, "Applying filter");

    if verbose > 0 {
        println!("Applying {} to {} ({}x{})", kernel, args.input.display(), width, height);
    }

    let output = kernel.apply(&image);
    super::save_image(&args.output, &output)?;

    if verbose > 0 {
        println!("Wrote {}", args.output.display());
    }

    Ok(())
}

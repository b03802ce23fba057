//! List command

use anyhow::Result;
use cvd_ops::FilterRegistry;

pub fn run(verbose: u8) -> Result<()> {
    for (name, kernel) in FilterRegistry::standard().iter() {
        if verbose > 0 {
            println!("{:<12} {}", name, kernel.describe());
        } else {
            println!("{name}");
        }
    }
    Ok(())
}

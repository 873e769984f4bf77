//! Format listing command.

use crate::FormatsArgs;
use anyhow::Result;
use pxpack_core::{AlphaRepresentation, PixelFormat};

/// Lists every known format with its storage width and components.
pub fn run(args: FormatsArgs) -> Result<()> {
    println!("{:<12} {:>4}  {:>10}  {}", "FORMAT", "BITS", "COMPONENTS", "ALPHA");
    for format in PixelFormat::ALL {
        if args.half && !format.is_half() {
            continue;
        }
        let info = format.type_info();
        let alpha = match info.alpha {
            AlphaRepresentation::None => "none",
            AlphaRepresentation::Unassociated => "straight",
        };
        println!(
            "{:<12} {:>4}  {:>10}  {}",
            format.name(),
            info.bits_per_pixel,
            info.component_count,
            alpha
        );
    }
    Ok(())
}

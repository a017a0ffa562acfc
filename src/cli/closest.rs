//! Closest command implementation.
//!
//! Looks up the block whose texture best matches a colour on a given face.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::lookup::{find_closest, BlockState, Direction};
use crate::manifest::DEFAULT_OUTPUT;
use crate::output::{display_path, Printer};
use crate::serialize::read_materials;
use crate::types::Colour;

/// Find the block closest to a colour
#[derive(Args, Debug)]
pub struct ClosestArgs {
    /// Target colour (#RGB or #RRGGBB)
    pub colour: Colour,

    /// Face direction: +x, -x, +y, -y, +z, -z or up, down, north, south, east, west
    #[arg(long, short, default_value = "+y", allow_hyphen_values = true)]
    pub normal: Direction,

    /// Dataset written by `generate`
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub materials: PathBuf,
}

pub fn run(args: ClosestArgs, printer: &Printer) -> Result<()> {
    let records = read_materials(&args.materials)?;

    let state = match find_closest(&records, args.colour, args.normal) {
        Some(m) => {
            printer.status(
                "Matched",
                &format!(
                    "{} {}",
                    args.colour,
                    printer.dim(&format!("-> {} (distance {})", m.colour, m.distance))
                ),
            );
            m.state
        }
        None => {
            printer.warning(
                "Unmatched",
                &format!("no block in {} fits that face", display_path(&args.materials)),
            );
            BlockState::air()
        }
    };

    println!("{}", state);
    Ok(())
}

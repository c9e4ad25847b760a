//! Minimal example: build a low-order curve and print it in the text encoding.

use std::{error::Error, io};

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    let curve = pseudohilbert::build(2)?;
    println!("order 2 curve: {} points", curve.len());

    pseudohilbert::encode::write_points(&curve, pseudohilbert::Encoding::Text, io::stdout())?;
    // snips-end: example

    Ok(())
}

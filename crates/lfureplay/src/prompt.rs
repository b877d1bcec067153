//! Interactive capacity prompt

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Ask for the cache size and read it from `input`
pub fn prompt_capacity<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    write!(output, "Enter cache size: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no cache size given");
    }

    let answer = line.trim();
    answer
        .parse()
        .with_context(|| format!("invalid cache size '{}'", answer))
}

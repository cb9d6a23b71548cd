//! Line-oriented driver around the engine.
//!
//! The input holds design lines, a blank line, then flower lines. Reading
//! stops at the second blank line or at end of input. Any malformed line
//! aborts the run.

use std::io::{BufRead, Write};

use bouquetforge_core::{BouquetForgeError, DesignSpec, Flower, ParseError, Result};
use bouquetforge_engine::Assembler;
use tracing::info;

/// Registers every design, then feeds every flower, writing one line per
/// assembled bouquet to `output` as soon as it is produced.
pub fn run_stream<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    assembler: &mut Assembler,
) -> Result<()> {
    let mut lines = input.lines().enumerate();

    let mut designs = 0u64;
    for (index, line) in lines.by_ref() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            break;
        }
        let spec: DesignSpec = parse_line(index, text)?;
        assembler.register(spec)?;
        designs += 1;
    }
    info!(event = "assembly_start", designs);

    for (index, line) in lines {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            break;
        }
        let flower: Flower = parse_line(index, text)?;
        if let Some(bouquet) = assembler.accept(flower)? {
            writeln!(output, "{}", bouquet)?;
        }
    }
    output.flush()?;

    assembler.log_summary();
    Ok(())
}

fn parse_line<T>(index: usize, text: &str) -> Result<T>
where
    T: std::str::FromStr<Err = ParseError>,
{
    text.parse().map_err(|source| BouquetForgeError::Parse {
        line: index + 1,
        text: text.to_string(),
        source,
    })
}

//! Interactive loop and outcome rendering, generic over input and output.

use std::io::{self, BufRead, Write};

use wc_app::{AppResult, ChainConfig, ChainOutcome, parse_line, solve};

/// Read one word list per line from `input` until `exit`, `quit` or EOF.
///
/// Invalid input is reported on `output` and the loop goes on.
pub fn run_repl<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &ChainConfig,
    json: bool,
) -> AppResult<()> {
    writeln!(
        output,
        "Enter words separated by spaces or commas; 'exit' to quit."
    )?;
    let mut lines = input.lines();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "exit" | "quit") {
            return Ok(());
        }

        match solve(&parse_line(trimmed), config) {
            Ok(outcome) => write_outcome(output, &outcome, json)?,
            Err(err) => writeln!(output, "✗ {}", err)?,
        }
    }
}

/// Render one outcome as text or pretty JSON.
pub fn write_outcome<W: Write>(output: &mut W, outcome: &ChainOutcome, json: bool) -> AppResult<()> {
    if json {
        let text = serde_json::to_string_pretty(outcome).map_err(io::Error::from)?;
        writeln!(output, "{}", text)?;
        return Ok(());
    }

    match &outcome.chain {
        Some(chain) => {
            writeln!(output, "✓ Closed chain of {} words:", chain.len())?;
            writeln!(output, "  {}", chain.join(" → "))?;
        }
        None => {
            writeln!(
                output,
                "✗ No closed chain through all {} words",
                outcome.words.len()
            )?;
            if let Some(reason) = &outcome.reason {
                writeln!(output, "  {}", reason)?;
            }
        }
    }
    Ok(())
}

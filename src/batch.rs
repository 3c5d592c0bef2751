// Line-oriented humanization shared by the CLI and its tests
// Each line stands alone: a failing line is counted and skipped, the batch continues

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::{debug, warn};

use crate::casing::LetterCasing;
use crate::error::HumanizeError;
use crate::humanizer::Humanizer;

/// Per-run options taken from the command line
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Casing applied after humanization
    pub casing: Option<LetterCasing>,
    /// Route through the buffer path instead of the string path
    pub in_place: bool,
    /// Emit one JSON object per line
    pub json: bool,
}

/// Counters reported at the end of a run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Lines humanized and written
    pub lines_processed: u64,
    /// Lines rejected by the engine
    pub lines_failed: u64,
    /// Characters read across processed lines
    pub chars_in: u64,
    /// Characters written across processed lines, excluding framing
    pub chars_out: u64,
}

/// JSON output record
#[derive(Serialize, Debug)]
pub struct HumanizedLine<'a> {
    pub input: &'a str,
    pub output: &'a str,
}

/// Humanize one line according to `options`
pub fn humanize_line(humanizer: &Humanizer, line: &str, options: &BatchOptions) -> Result<String, HumanizeError> {
    if !options.in_place {
        return Ok(match options.casing {
            Some(casing) => humanizer.humanize_with_casing(line, casing),
            None => humanizer.humanize(line),
        });
    }

    let mut buffer: Vec<char> = line.chars().collect();
    let mut humanized = humanizer.humanize_buffer(&mut buffer).into_owned();
    if let Some(casing) = options.casing {
        humanizer.humanize_buffer_with_casing(&mut humanized, casing)?;
    }
    Ok(humanized.into_iter().collect())
}

/// Render a result line, plain or JSON
pub fn format_line(input: &str, output: &str, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&HumanizedLine { input, output })?)
    } else {
        Ok(output.to_string())
    }
}

/// Humanize every line of `reader` into `writer`
pub async fn process_lines<R, W>(
    humanizer: &Humanizer,
    reader: R,
    writer: W,
    options: &BatchOptions,
) -> Result<BatchStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut writer = BufWriter::new(writer);
    let mut stats = BatchStats::default();

    while let Some(line) = lines.next_line().await? {
        write_line(humanizer, &line, options, &mut writer, &mut stats).await?;
    }

    writer.flush().await?;
    debug!(?stats, "Finished line batch");
    Ok(stats)
}

/// Humanize explicit inputs (command-line arguments) into `writer`
pub async fn process_inputs<I, S, W>(
    humanizer: &Humanizer,
    inputs: I,
    writer: W,
    options: &BatchOptions,
) -> Result<BatchStats>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: AsyncWrite + Unpin,
{
    let mut writer = BufWriter::new(writer);
    let mut stats = BatchStats::default();

    for input in inputs {
        write_line(humanizer, input.as_ref(), options, &mut writer, &mut stats).await?;
    }

    writer.flush().await?;
    debug!(?stats, "Finished argument batch");
    Ok(stats)
}

async fn write_line<W>(
    humanizer: &Humanizer,
    line: &str,
    options: &BatchOptions,
    writer: &mut BufWriter<W>,
    stats: &mut BatchStats,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    match humanize_line(humanizer, line, options) {
        Ok(output) => {
            let formatted = format_line(line, &output, options.json)?;
            writer.write_all(formatted.as_bytes()).await?;
            writer.write_all(b"\n").await?;

            stats.lines_processed += 1;
            stats.chars_in += line.chars().count() as u64;
            stats.chars_out += output.chars().count() as u64;
        }
        Err(error) => {
            // WHY: one unsupported line must not abort the rest of the batch
            warn!(%line, %error, "Skipping line");
            stats.lines_failed += 1;
        }
    }
    Ok(())
}

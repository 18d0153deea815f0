use std::io::{BufRead, Write};

use crate::catalog::{Catalog, NovelRow};
use crate::error::ShioriError;

const PROMPT: &str = "Enter the number corresponding to the novel you want to read: ";
const RETRY: &str = "Incorrect value, please choose a value fitting corresponding to a novel.";

/// Ask for a row number until a valid one is entered.
///
/// Anything that is not an index into the catalog prints a retry message
/// and prompts again. Running out of input before a valid answer is an
/// error.
pub fn select_novel<'a, R, W>(
    catalog: &'a Catalog,
    mut input: R,
    mut output: W,
) -> Result<&'a NovelRow, ShioriError>
where
    R: BufRead,
    W: Write,
{
    if catalog.is_empty() {
        return Err(ShioriError::Selection("catalog is empty".into()));
    }

    let mut answer = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        answer.clear();
        if input.read_line(&mut answer)? == 0 {
            return Err(ShioriError::Selection("input ended before a novel was chosen".into()));
        }

        match answer.trim().parse::<usize>().ok().and_then(|i| catalog.get(i)) {
            Some(row) => {
                writeln!(output, "Selected: {} with rating {}", row.title, row.score)?;
                tracing::debug!(title = %row.title, "Novel selected");
                return Ok(row);
            }
            None => writeln!(output, "{RETRY}")?,
        }
    }
}

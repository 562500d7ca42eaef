use std::{
    io::{BufRead, Write},
    time::Duration,
};

use color_eyre::eyre::{eyre, Result};
use tracing::debug;

use crate::{
    components::lights::LightMode,
    constants::prompt::{
        LIGHTS_PROMPT, LIGHTS_RETRY, LINES_PROMPT, LINES_RETRY, MAX_EXTRA_LINES, PREVIEW_TREE, TEASER_DOTS, TEASER_TEXT,
        WELCOME_TEXT,
    },
};

/// Whether `input` is a positive even integer no larger than [`MAX_EXTRA_LINES`].
pub fn valid_input(input: &str) -> bool {
    matches!(input.trim().parse::<i64>(), Ok(n) if n > 0 && n % 2 == 0 && n <= MAX_EXTRA_LINES)
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(eyre!("Input closed before a valid answer was given"));
    }
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    read_answer(input)
}

pub fn show_welcome<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "{PREVIEW_TREE}")?;
    write!(output, "{WELCOME_TEXT}")?;
    Ok(())
}

/// Asks until a positive even number of extra body rows is given.
pub fn read_extra_lines<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    let mut answer = ask(input, output, LINES_PROMPT)?;
    while !valid_input(&answer) {
        debug!(%answer, "Rejected tree height");
        writeln!(output, "{LINES_RETRY}")?;
        answer = ask(input, output, LINES_PROMPT)?;
    }
    Ok(answer.trim().parse()?)
}

/// Asks until exactly `r` or `p` is given.
pub fn read_light_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<LightMode> {
    writeln!(output)?;
    let mut answer = ask(input, output, LIGHTS_PROMPT)?;
    loop {
        match answer.trim().parse::<LightMode>() {
            Ok(mode) => return Ok(mode),
            Err(_) => {
                debug!(%answer, "Rejected light mode");
                answer = ask(input, output, LIGHTS_RETRY)?;
            },
        }
    }
}

/// Prints the teaser line, one dot per `tick`.
pub async fn teaser<W: Write>(output: &mut W, tick: Duration) -> Result<()> {
    write!(output, "\n{TEASER_TEXT}")?;
    output.flush()?;
    for _ in 0..TEASER_DOTS {
        write!(output, ".")?;
        output.flush()?;
        tokio::time::sleep(tick).await;
    }
    writeln!(output)?;
    Ok(())
}

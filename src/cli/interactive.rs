use super::ui;
use crate::core::error::ConversionError;
use crate::core::rate::{RateSource, resolve_rate};
use crate::core::session::Converter;
use crate::core::unit::UnitMultiplier;
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// A single line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Amount(String),
    Unit(UnitMultiplier),
    Quit,
}

/// `unit <UNIT>` selects a unit, `quit`/`exit` ends the session and anything
/// else, including an empty line, replaces the amount.
pub fn parse_event(line: &str) -> Result<SessionEvent, ConversionError> {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((command, unit)) if command.eq_ignore_ascii_case("unit") => {
            Ok(SessionEvent::Unit(unit.parse()?))
        }
        _ if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") => {
            Ok(SessionEvent::Quit)
        }
        _ => Ok(SessionEvent::Amount(trimmed.to_string())),
    }
}

fn render<W: Write>(writer: &mut W, converter: &Converter) -> Result<()> {
    if let Some(formatted) = converter.display() {
        writeln!(writer, "{}", ui::result_line(&formatted))?;
    }
    Ok(())
}

/// Drives a conversion session from `reader` until end of input or `quit`.
///
/// The rate fetch runs alongside the input on the same task; the display is
/// recomputed after every event, the fetch completing included. A fetch still
/// pending when the input ends is dropped.
pub async fn run_session<R, W>(
    reader: R,
    writer: &mut W,
    mut converter: Converter,
    source: &dyn RateSource,
) -> Result<Converter>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let fetch = resolve_rate(source);
    tokio::pin!(fetch);
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            biased;

            (state, _) = &mut fetch, if converter.rate().is_pending() => {
                converter.resolve_rate(state);
                render(writer, &converter)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    break;
                };
                match parse_event(&line) {
                    Ok(SessionEvent::Quit) => break,
                    Ok(SessionEvent::Amount(raw_amount)) => converter.set_amount(raw_amount),
                    Ok(SessionEvent::Unit(unit)) => converter.set_unit(unit),
                    Err(e) => {
                        let message = ui::style_text(&e.to_string(), ui::StyleType::Error);
                        writeln!(writer, "{message}")?;
                        continue;
                    }
                }
                render(writer, &converter)?;
            }
        }
    }

    writer.flush()?;
    Ok(converter)
}

/// Runs the session on the terminal.
pub async fn run(source: &dyn RateSource, unit: UnitMultiplier) -> Result<()> {
    println!(
        "{}",
        ui::style_text("Conversor de Won para Real", ui::StyleType::Title)
    );
    println!(
        "{}",
        ui::style_text(
            &format!(
                "Digite o valor em Won. Unidade atual: {unit}. \
                 Use 'unit <unidades|mil|milhões|bilhões>' para trocar, 'quit' para sair."
            ),
            ui::StyleType::Subtle
        )
    );

    let reader = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(reader, &mut stdout, Converter::new(unit), source).await?;
    Ok(())
}

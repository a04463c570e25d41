use crate::context::ExecutionContext;
use crate::handlers::dice_roll::resolve_spec;
use crate::presentation::presenters;
use crate::presentation::{Renderer, StatusBadge};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use is_terminal::IsTerminal;
use playkit_engine::{DiceSession, create_rng, write_csv_file};
use playkit_types::DiceSpec;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
Commands:
  roll [N] [S]   Roll N dice with S sides (also: roll NdS); omitted values keep the last setting
  save on|off    Turn history saving on or off
  history        Show the roll history, newest first
  stats          Totals across the whole history
  clear          Empty the history
  export PATH    Write the history to a CSV file
  help           Show this list
  quit           End the session (EOF works too)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    Roll {
        count: Option<u32>,
        sides: Option<u32>,
    },
    Save(bool),
    History,
    Stats,
    Clear,
    Export(PathBuf),
    Help,
    Quit,
    Empty,
}

fn parse_number(token: &str) -> Result<u32> {
    token
        .parse::<u32>()
        .with_context(|| format!("Invalid number: {}", token))
}

pub fn parse_line(line: &str) -> Result<SessionInput> {
    let mut parts = line.split_whitespace();
    let Some(op) = parts.next() else {
        return Ok(SessionInput::Empty);
    };
    let args: Vec<&str> = parts.collect();

    let input = match op.to_lowercase().as_str() {
        "roll" | "r" => match args.as_slice() {
            [] => SessionInput::Roll {
                count: None,
                sides: None,
            },
            [notation] if notation.to_lowercase().contains('d') => {
                let lower = notation.to_lowercase();
                let (count, sides) = lower
                    .split_once('d')
                    .with_context(|| format!("Invalid dice notation: {}", notation))?;
                let count = if count.is_empty() {
                    None
                } else {
                    Some(parse_number(count)?)
                };
                SessionInput::Roll {
                    count,
                    sides: Some(parse_number(sides)?),
                }
            }
            [count] => SessionInput::Roll {
                count: Some(parse_number(count)?),
                sides: None,
            },
            [count, sides] => SessionInput::Roll {
                count: Some(parse_number(count)?),
                sides: Some(parse_number(sides)?),
            },
            _ => bail!("Usage: roll [N] [S]"),
        },
        "save" => match args.as_slice() {
            ["on"] => SessionInput::Save(true),
            ["off"] => SessionInput::Save(false),
            _ => bail!("Usage: save on|off"),
        },
        "history" | "h" => SessionInput::History,
        "stats" => SessionInput::Stats,
        "clear" => SessionInput::Clear,
        "export" => match args.as_slice() {
            [path] => SessionInput::Export(PathBuf::from(path)),
            _ => bail!("Usage: export PATH"),
        },
        "help" | "?" => SessionInput::Help,
        "quit" | "exit" | "q" => SessionInput::Quit,
        _ => bail!("Unknown command: {}", op),
    };

    Ok(input)
}

pub fn handle(
    ctx: &ExecutionContext,
    count: Option<u32>,
    sides: Option<u32>,
    seed: Option<u64>,
    no_save: bool,
) -> Result<()> {
    let spec = resolve_spec(ctx, count, sides)?;
    let save_enabled = ctx.config().dice.save_history && !no_save;
    let mut session = DiceSession::new(spec, save_enabled);
    let mut rng = create_rng(seed);

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    run_session(ctx, &mut session, &mut rng, stdin.lock(), interactive)
}

/// Reads one command per line until `quit` or end of input
pub fn run_session<B, R>(
    ctx: &ExecutionContext,
    session: &mut DiceSession,
    rng: &mut R,
    input: B,
    interactive: bool,
) -> Result<()>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    let renderer = ctx.renderer();

    if interactive {
        println!(
            "playkit dice session ({}d{}, saving {}). Type 'help' for commands.",
            session.spec.count,
            session.spec.sides,
            if session.save_enabled { "on" } else { "off" }
        );
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read session input")?;
        log::trace!("session input: {:?}", line);

        let outcome = parse_line(&line).and_then(|cmd| match cmd {
            SessionInput::Quit => Ok(false),
            cmd => apply(ctx, session, rng, cmd).map(|_| true),
        });

        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                log::debug!("session command failed: {:#}", err);
                renderer.render(
                    presenters::present_notice("Type 'help' to list commands.")
                        .with_badge(StatusBadge::error(format!("{:#}", err))),
                )?;
            }
        }
    }

    log::debug!(
        "session ended with {} saved rolls",
        session.history().len()
    );
    Ok(())
}

fn apply<R: Rng + ?Sized>(
    ctx: &ExecutionContext,
    session: &mut DiceSession,
    rng: &mut R,
    input: SessionInput,
) -> Result<()> {
    let renderer = ctx.renderer();

    match input {
        SessionInput::Roll { count, sides } => {
            if count.is_some() || sides.is_some() {
                session.spec = DiceSpec::new(
                    count.unwrap_or(session.spec.count),
                    sides.unwrap_or(session.spec.sides),
                )?;
            }
            let entry = session.roll(rng, Utc::now());
            renderer.render(presenters::present_roll(
                entry,
                session.save_enabled,
                session.history().len(),
            ))
        }
        SessionInput::Save(enabled) => {
            session.save_enabled = enabled;
            let state = if enabled { "on" } else { "off" };
            renderer.render(presenters::present_notice(format!(
                "History saving is {}",
                state
            )))
        }
        SessionInput::History => {
            renderer.render(presenters::present_history(
                session.history(),
                session.save_enabled,
            ))
        }
        SessionInput::Stats => {
            let stats = session.history().stats();
            renderer.render(presenters::present_notice(format!(
                "Rolls: {}  Dice: {}  Grand total: {}  Mean per die: {:.2}",
                stats.rolls, stats.dice_thrown, stats.grand_total, stats.mean_per_die
            )))
        }
        SessionInput::Clear => {
            session.clear();
            renderer.render(presenters::present_notice("History cleared"))
        }
        SessionInput::Export(path) => {
            let entries = session.history().entries();
            write_csv_file(&path, entries)
                .with_context(|| format!("Failed to export CSV to {}", path.display()))?;
            log::info!("exported {} rows to {}", entries.len(), path.display());
            renderer.render(presenters::present_export(&path, entries.len()))
        }
        SessionInput::Help => renderer.render(presenters::present_notice(HELP)),
        SessionInput::Quit | SessionInput::Empty => Ok(()),
    }
}

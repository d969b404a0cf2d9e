// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

use handplay_core::{HandCategory, Session, SortOrder};

use crate::input;

/// Runs the game loop on stdin and stdout.
pub fn run(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(session, stdin.lock(), stdout.lock())
}

/// Runs the game loop until the player quits or the input is closed.
pub fn run_with<R: BufRead, W: Write>(session: &mut Session, mut r: R, mut w: W) -> Result<()> {
    loop {
        print_status(&mut w, session)?;

        if session.is_round_over() {
            writeln!(w, "\nRound {} complete!", session.round())?;
            writeln!(w, "Round score: {}", session.round_score())?;

            if read_line(&mut r, &mut w, "Press Enter to start next round...")?.is_none() {
                break;
            }

            session.start_new_round();
            continue;
        }

        print_menu(&mut w, session)?;

        let Some(choice) = read_line(&mut r, &mut w, "> ")? else {
            break;
        };

        let open = match choice.trim() {
            "1" if session.plays_remaining() > 0 => play_hand(session, &mut r, &mut w)?,
            "2" if session.discards_remaining() > 0 => discard_cards(session, &mut r, &mut w)?,
            "3" => {
                print_multipliers(&mut w, session)?;
                true
            }
            "4" => {
                let order = match session.toggle_sort() {
                    SortOrder::Rank => "rank",
                    SortOrder::Suit => "suit",
                };
                writeln!(w, "\nSorting cards by {order}")?;
                true
            }
            "5" => false,
            _ => {
                writeln!(w, "Invalid choice!")?;
                true
            }
        };

        if !open {
            break;
        }
    }

    writeln!(w, "\n{}", "Game Over!".bold())?;
    writeln!(w, "Final score: {}", session.final_score())?;
    writeln!(w, "Rounds completed: {}", session.rounds_completed())?;
    w.flush()?;

    Ok(())
}

/// Prompts for cards until a valid hand is played, returns false if the input
/// is closed.
fn play_hand<R: BufRead, W: Write>(session: &mut Session, r: &mut R, w: &mut W) -> Result<bool> {
    let prompt = format!(
        "Select 1-5 cards to play (enter numbers separated by spaces, 0-{}): ",
        session.hand().len().saturating_sub(1)
    );

    loop {
        let Some(line) = read_line(r, w, &prompt)? else {
            return Ok(false);
        };

        let indices = match input::parse_indices(&line) {
            Ok(indices) => indices,
            Err(e) => {
                writeln!(w, "{e}")?;
                continue;
            }
        };

        match session.play(&indices) {
            Ok(outcome) => {
                let score = outcome.score;
                let cards = outcome
                    .cards
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>();

                writeln!(w, "\nPlayed {}!", score.value.category())?;
                writeln!(w, "Cards: {}", cards.join(" "))?;
                writeln!(w, "Base points: {}", score.value.base_points())?;
                writeln!(w, "Multiplier: {:.1}x", score.multiplier)?;
                writeln!(w, "Total points: {}", score.points)?;
                writeln!(w, "\nPlays remaining: {}", session.plays_remaining())?;
                return Ok(true);
            }
            Err(e) => writeln!(w, "{e}")?,
        }
    }
}

/// Prompts for the cards to discard, errors go back to the menu.
fn discard_cards<R: BufRead, W: Write>(
    session: &mut Session,
    r: &mut R,
    w: &mut W,
) -> Result<bool> {
    let prompt = format!(
        "Select up to {} cards to discard (space-separated numbers): ",
        session.config().max_discards
    );

    let Some(line) = read_line(r, w, &prompt)? else {
        return Ok(false);
    };

    match input::parse_indices(&line).map(|indices| session.discard(&indices)) {
        Ok(Ok(count)) => {
            writeln!(w, "Discarded {count} cards.")?;
            writeln!(w, "\nPlays remaining: {}", session.plays_remaining())?;
            writeln!(
                w,
                "Discard actions remaining: {}",
                session.discards_remaining()
            )?;
        }
        Ok(Err(e)) => writeln!(w, "{e}")?,
        Err(e) => writeln!(w, "{e}")?,
    }

    Ok(true)
}

fn print_status<W: Write>(w: &mut W, session: &Session) -> Result<()> {
    writeln!(w, "\n{}", "=".repeat(50))?;
    writeln!(w, "{}", format!("Round {}", session.round()).bold())?;
    writeln!(w, "Total Score: {}", session.total_score())?;
    writeln!(w, "Round Score: {}", session.round_score())?;
    writeln!(
        w,
        "Plays remaining this round: {}",
        session.plays_remaining()
    )?;
    writeln!(
        w,
        "Discard actions remaining: {}",
        session.discards_remaining()
    )?;

    writeln!(w, "\nYour hand ({} cards):", session.hand().len())?;
    for (idx, card) in session.hand().iter().enumerate() {
        let text = card.to_string();
        let text = if card.suit().is_red() {
            text.as_str().red()
        } else {
            text.as_str().stylize()
        };

        writeln!(w, "{idx}: {text}")?;
    }

    Ok(())
}

fn print_menu<W: Write>(w: &mut W, session: &Session) -> Result<()> {
    writeln!(w, "\nChoose action:")?;

    if session.plays_remaining() > 0 {
        writeln!(
            w,
            "1. Play hand (1-5 cards) [{} plays left]",
            session.plays_remaining()
        )?;
    }

    if session.discards_remaining() > 0 {
        writeln!(
            w,
            "2. Discard cards (up to {} cards) [{} discards left]",
            session.config().max_discards,
            session.discards_remaining()
        )?;
    }

    writeln!(w, "3. View hand multipliers")?;

    let sort = match session.sort_order() {
        SortOrder::Rank => "Rank → Suit",
        SortOrder::Suit => "Suit → Rank",
    };
    writeln!(w, "4. Toggle sort ({sort})")?;
    writeln!(w, "5. Quit game")?;

    Ok(())
}

fn print_multipliers<W: Write>(w: &mut W, session: &Session) -> Result<()> {
    let tracker = session.tracker();

    writeln!(w, "\nHand Multipliers:")?;
    for category in HandCategory::categories() {
        writeln!(
            w,
            "{category}: {:.1}x (played {} times)",
            tracker.multiplier_for(category),
            tracker.plays(category)
        )?;
    }

    Ok(())
}

/// Prints a prompt and reads a line, returns None if the input is closed.
fn read_line<R: BufRead, W: Write>(r: &mut R, w: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(w, "{prompt}")?;
    w.flush()?;

    let mut line = String::new();
    if r.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line))
}

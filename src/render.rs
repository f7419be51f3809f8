use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};

use crate::puzzle::{Board, SIDE};
use crate::search::{NotFound, SearchResult, Verdict};

pub fn write_verdict<W: Write>(out: &mut W, verdict: &Verdict, color: bool) -> io::Result<()> {
    match verdict {
        Verdict::Unsolvable => {
            writeln!(out, "This instance is UNSOLVABLE (inversion parity mismatch).")
        }
        Verdict::Searched(result) if result.found => write_solution(out, result, color),
        Verdict::Searched(result) => write_failure(out, result),
    }
}

fn write_solution<W: Write>(out: &mut W, result: &SearchResult, color: bool) -> io::Result<()> {
    let moves = if result.moves.is_empty() {
        "(none)".to_string()
    } else {
        result.move_string()
    };

    writeln!(out, "Solution found!")?;
    writeln!(out, "Depth (moves): {}", result.depth())?;
    writeln!(out, "Moves: {}", moves)?;
    write_stats(out, result)?;
    writeln!(out)?;

    for (step, board) in result.path.iter().enumerate() {
        writeln!(out, "Step {}:", step)?;
        write_board(out, board, color)?;
        if step + 1 < result.path.len() {
            writeln!(out, "----")?;
        }
    }
    Ok(())
}

fn write_failure<W: Write>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    writeln!(out, "No solution found.")?;
    match result.not_found {
        Some(NotFound::DepthCeiling { ceiling }) => writeln!(
            out,
            "Depth ceiling {} reached before the goal; raise --max-depth.",
            ceiling
        )?,
        Some(NotFound::Exhausted) => writeln!(
            out,
            "Search space exhausted although the parity check passed (internal error)."
        )?,
        Some(NotFound::BrokenPath) => writeln!(
            out,
            "Goal reached but its path could not be rebuilt (internal error)."
        )?,
        None => {}
    }
    write_stats(out, result)
}

fn write_stats<W: Write>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    writeln!(out, "Nodes expanded: {}", result.nodes_expanded)?;
    writeln!(
        out,
        "Time (ms): {:.3}",
        result.elapsed.as_secs_f64() * 1000.0
    )
}

/// Writes `board` as a 3x3 grid with the blank shown as a space.
pub fn write_board<W: Write>(out: &mut W, board: &Board, color: bool) -> io::Result<()> {
    if !color {
        return write!(out, "{}", board);
    }

    for row in board.tiles().chunks(SIDE) {
        for (col, &tile) in row.iter().enumerate() {
            if col > 0 {
                queue!(out, Print(' '))?;
            }
            if tile == 0 {
                queue!(out, Print(' '))?;
            } else {
                queue!(
                    out,
                    SetForegroundColor(Color::Cyan),
                    SetAttribute(Attribute::Bold),
                    Print(tile),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
            }
        }
        queue!(out, Print('\n'))?;
    }
    Ok(())
}

//! Animating the simulation in the terminal.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use golsim_lib::{Board, Simulation, Speed};
use std::{
    io::{self, Write},
    thread,
};

/// Clears the terminal and moves the cursor to the top left corner.
fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Clears the terminal before the run starts.
pub(crate) fn clear_screen() -> io::Result<()> {
    clear(&mut io::stdout().lock())
}

/// Shows every generation before it is advanced, one frame each,
/// then clears the terminal for the last one.
///
/// The terminal should already be clear.
pub(crate) fn animate(simulation: &mut Simulation, speed: Option<Speed>) -> io::Result<()> {
    let delay = speed.map(Speed::frame_duration).unwrap_or_default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    simulation.run_with(|board: &Board, _| {
        write!(out, "{}", board)?;
        out.flush()?;
        thread::sleep(delay);
        clear(&mut out)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_sequence() -> io::Result<()> {
        let mut out = Vec::new();
        clear(&mut out)?;
        assert_eq!(out, b"\x1b[2J\x1b[1;1H");
        Ok(())
    }
}

//! Running the simulation and reporting the result.

use crate::{args::Args, file};
use golsim_lib::{Board, Simulation};
use log::info;
use std::{
    error::Error,
    time::{Duration, Instant},
};

#[cfg(feature = "tui")]
use crate::tui::{animate, clear_screen};

/// Without a terminal backend, nothing is cleared.
#[cfg(not(feature = "tui"))]
fn clear_screen() -> std::io::Result<()> {
    Ok(())
}

/// Shows every generation without clearing the terminal.
#[cfg(not(feature = "tui"))]
fn animate(simulation: &mut Simulation, speed: Option<golsim_lib::Speed>) -> std::io::Result<()> {
    let delay = speed
        .map(golsim_lib::Speed::frame_duration)
        .unwrap_or_default();
    simulation.run_with(|board: &Board, _| {
        print!("{}", board);
        std::thread::sleep(delay);
        Ok::<_, std::io::Error>(())
    })?;
    Ok(())
}

/// The timing report of a run of `generations` generations.
fn timing(generations: u64, board: &Board, elapsed: Duration) -> String {
    let (rows, cols) = board.dimensions();
    format!(
        "Total time for {} iterations of {}x{} is {:.6}",
        generations,
        rows,
        cols,
        elapsed.as_secs_f64()
    )
}

/// Loads the simulation, runs it, prints the last generation and the time.
pub(crate) fn simulate(args: Args) -> Result<(), Box<dyn Error>> {
    let mut ser = file::load(&args.input)?;
    ser.config = ser
        .config
        .set_boundary(args.boundary)
        .set_show(args.show)
        .set_speed(args.speed);
    let config = ser.config.clone();
    let mut simulation: Simulation = ser.simulation()?;
    info!(
        "running {} generations from generation {}",
        simulation.iterations(),
        simulation.generation()
    );

    let computed = simulation.remaining();

    clear_screen()?;
    let start = Instant::now();
    if config.show {
        animate(&mut simulation, config.speed())?;
    } else {
        simulation.run();
    }
    let board: &Board = simulation.board();
    print!("{}", board);
    let elapsed = start.elapsed();

    println!("{}", timing(computed, board, elapsed));

    if let Some(output) = args.output {
        file::save(&output, &simulation.ser(&config))?;
        info!("saved to {}", output.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use golsim_lib::Config;

    #[test]
    fn timing_counts_resumed_generations() -> Result<(), Box<dyn Error>> {
        let config = Config::new(4, 6, 10).set_alive_cells(vec![(1, 1)]);
        let mut simulation = config.simulation()?;
        for _ in 0..3 {
            simulation.step();
        }
        let resumed = simulation.ser(&config).simulation()?;
        assert_eq!(resumed.remaining(), 7);
        assert_eq!(
            timing(resumed.remaining(), resumed.board(), Duration::from_millis(1500)),
            "Total time for 7 iterations of 4x6 is 1.500000"
        );
        Ok(())
    }
}

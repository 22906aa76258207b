//! Voltgrid - grid circuit solver
//!
//! Solves one of the built-in demo boards and prints the branch
//! decomposition, the total resistance, the global current, and the verdict.
//!
//! # Usage
//!
//! ```bash
//! voltgrid parallel
//! voltgrid lamp --tension 115
//! ```

use clap::{Parser, ValueEnum};
use voltgrid::{solve, Board, Dipole, Goal, GridPos, Quantity, Result, Supply};

/// Grid circuit solver demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built-in demo board to solve
    #[arg(value_enum)]
    demo: Demo,

    /// Override the supply tension in volts
    #[arg(short, long)]
    tension: Option<f64>,

    /// Override the goal tolerance fraction
    #[arg(long)]
    tolerance: Option<f64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Demo {
    /// A single 230-ohm lamp across a 230 V supply
    Lamp,
    /// Two 100-ohm resistors in parallel feeding a 50-ohm target
    Parallel,
    /// A wire run shorting the lamp
    Short,
    /// A lamp with no return path to the output terminal
    Open,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut board = build_demo(args.demo);
    if let Some(tension) = args.tension {
        board.supply.tension = tension;
    }
    if let Some(tolerance) = args.tolerance {
        board.goal.tolerance = tolerance;
    }

    let solution = solve(&mut board)?;

    for branch in &solution.branches {
        println!(
            "branch {} ~ {}: {:.3} ohm ({} elements)",
            branch.start, branch.end, branch.resistance, branch.elements
        );
    }
    println!("total resistance: {:.3} ohm", solution.total_resistance);
    println!("current: {:.3} A", solution.current);
    println!("verdict: {}", solution.verdict);

    Ok(())
}

fn build_demo(demo: Demo) -> Board {
    match demo {
        Demo::Lamp => {
            let mut board = Board::new(
                GridPos::new(0, 0),
                GridPos::new(3, 0),
                Supply {
                    tension: 230.0,
                    max_intensity: 16.0,
                },
                Goal {
                    quantity: Quantity::Tension,
                    expected: 230.0,
                    tolerance: 0.05,
                },
            );
            board.add_wire(GridPos::new(0, 0), GridPos::new(1, 0));
            board.add_dipole(
                Dipole::lamp("L1", GridPos::new(1, 0), GridPos::new(2, 0), 230.0).target(),
            );
            board.add_wire(GridPos::new(2, 0), GridPos::new(3, 0));
            board
        }
        Demo::Parallel => {
            let mut board = Board::new(
                GridPos::new(0, 0),
                GridPos::new(4, 0),
                Supply {
                    tension: 100.0,
                    max_intensity: 16.0,
                },
                Goal {
                    quantity: Quantity::Tension,
                    expected: 50.0,
                    tolerance: 0.05,
                },
            );
            board.add_wire(GridPos::new(0, 0), GridPos::new(1, 0));
            board.add_dipole(Dipole::resistor(
                "R1",
                GridPos::new(1, 0),
                GridPos::new(2, 0),
                100.0,
            ));
            board.add_wire(GridPos::new(1, 0), GridPos::new(1, 1));
            board.add_dipole(Dipole::resistor(
                "R2",
                GridPos::new(1, 1),
                GridPos::new(2, 1),
                100.0,
            ));
            board.add_wire(GridPos::new(2, 1), GridPos::new(2, 0));
            board.add_dipole(
                Dipole::resistor("R3", GridPos::new(2, 0), GridPos::new(3, 0), 50.0).target(),
            );
            board.add_wire(GridPos::new(3, 0), GridPos::new(4, 0));
            board
        }
        Demo::Short => {
            let mut board = build_demo(Demo::Lamp);
            board.add_wire(GridPos::new(1, 0), GridPos::new(1, 1));
            board.add_wire(GridPos::new(1, 1), GridPos::new(2, 1));
            board.add_wire(GridPos::new(2, 1), GridPos::new(2, 0));
            board
        }
        Demo::Open => {
            let mut board = build_demo(Demo::Lamp);
            // Sever the return run to the output terminal
            board.wires.pop();
            board
        }
    }
}

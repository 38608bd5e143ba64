use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use die_agony::{solve, ExplorationOrder, Grid, SearchLimits, Solution};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Forward,
    Reversed,
    Both,
}

#[derive(Parser)]
#[command(name = "die-agony")]
#[command(about = "Roll the die across the board and sum the cells it never touches")]
struct Args {
    /// Board file, one row per line; "-" reads stdin. Defaults to the puzzle.
    #[arg(long)]
    grid: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Order::Both)]
    order: Order,

    #[arg(long, default_value_t = SearchLimits::default().max_moves)]
    max_moves: usize,

    #[arg(long, default_value_t = SearchLimits::default().max_fringe)]
    max_fringe: usize,

    /// Print the route and the board of visited cells.
    #[arg(long)]
    show_path: bool,
}

impl Order {
    fn orders(&self) -> Vec<ExplorationOrder> {
        match self {
            Order::Forward => vec![ExplorationOrder::Forward],
            Order::Reversed => vec![ExplorationOrder::Reversed],
            Order::Both => ExplorationOrder::all().to_vec(),
        }
    }
}

fn read_grid(path: &Option<PathBuf>) -> Result<Grid> {
    let text = match path {
        None => return Ok(Grid::puzzle()),
        Some(p) if p.as_os_str() == "-" => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        Some(p) => std::fs::read_to_string(p)?,
    };
    Ok(Grid::from_string(&text)?)
}

fn show_face_values(solution: &Solution) -> String {
    solution
        .face_values
        .iter()
        .map(|v| match v {
            Some(v) => v.to_string(),
            None => "?".to_string(),
        })
        .join(", ")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let grid = read_grid(&args.grid)?;
    let limits = SearchLimits {
        max_moves: args.max_moves,
        max_fringe: args.max_fringe,
    };

    let mut solutions: Vec<Solution> = Vec::new();

    for order in args.order.orders() {
        let solution = solve(&grid, order, &limits)?;
        tracing::info!(?order, moves = solution.moves, "found route");

        if args.show_path {
            println!(
                "Route ({:?}): {}",
                order,
                solution
                    .path
                    .iter()
                    .map(|loc| format!("({}, {})", loc.row, loc.col))
                    .join(" ")
            );
            print!("{}", solution.render(&grid));
        }
        println!("Face values ({:?}): ({})", order, show_face_values(&solution));
        println!("Answer ({:?}): {}", order, solution.answer);

        solutions.push(solution);
    }

    if let [first, second] = solutions.as_slice() {
        if first.agrees_with(second) {
            tracing::info!("both exploration orders agree");
        } else {
            tracing::warn!(
                first = first.answer,
                second = second.answer,
                "exploration orders disagree"
            );
        }
    }

    Ok(())
}

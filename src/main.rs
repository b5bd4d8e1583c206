use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use wamsort::{init_logging, Config, Direction, Job, LONG_VERSION};

#[derive(Parser)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Config file (.toml or .json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug detail
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Log JSON lines instead of text
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show job metadata and every cut's bounding box and nesting
    Info {
        file: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Cut nested parts first, sweeping the bed in alternating rows
    Reorder {
        file: PathBuf,
        /// Print the new order without writing a file
        #[arg(long)]
        dry_run: bool,
    },
    /// Move cuts one slot earlier or later in the current order
    Move {
        file: PathBuf,
        #[command(flatten)]
        direction: MoveDirection,
        /// Positions of the cuts to move
        #[arg(required = true)]
        positions: Vec<usize>,
        /// Print the new order without writing a file
        #[arg(long)]
        dry_run: bool,
    },
    /// List the programs in a folder
    List { dir: PathBuf },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct MoveDirection {
    /// Move towards the start of the program
    #[arg(long)]
    up: bool,
    /// Move towards the end of the program
    #[arg(long)]
    down: bool,
}

impl MoveDirection {
    fn direction(&self) -> Direction {
        if self.up {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_json)?;

    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Info { file, json } => {
            let job = Job::open(&file, &config)?;
            print_info(&job, json)?;
        }
        Command::Reorder { file, dry_run } => {
            let mut job = Job::open(&file, &config)?;
            let order = job.reorder()?;
            print_order(&order);
            if !dry_run {
                let output = job.save(&config)?;
                println!("Wrote {}", output.display());
            }
        }
        Command::Move {
            file,
            direction,
            positions,
            dry_run,
        } => {
            let mut job = Job::open(&file, &config)?;
            let moved = job.move_cuts(direction.direction(), &positions);
            println!("Selected cuts now at {:?}", moved);
            if !dry_run {
                let output = job.save(&config)?;
                println!("Wrote {}", output.display());
            }
        }
        Command::List { dir } => {
            for path in wamsort_parser::list_programs(&dir, &config.output.extension)? {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

fn print_info(job: &Job, json: bool) -> anyhow::Result<()> {
    let summary = job.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for line in &summary.metadata {
        println!("{line}");
    }
    println!();
    println!(
        "{:>4}  {:>7}  {:>24}  {:>6}  {:>5}",
        "#", "points", "bounding box", "parent", "depth"
    );
    for cut in &summary.cuts {
        let bbox = format!(
            "{:.1},{:.1} - {:.1},{:.1}",
            cut.bbox.min_x, cut.bbox.min_y, cut.bbox.max_x, cut.bbox.max_y
        );
        let parent = cut.parent.map(|p| p.to_string()).unwrap_or_default();
        println!(
            "{:>4}  {:>7}  {:>24}  {:>6}  {:>5}",
            cut.position, cut.points, bbox, parent, cut.depth
        );
    }
    println!();
    println!("{} cuts in {} rows", summary.cuts.len(), summary.rows.len());
    Ok(())
}

fn print_order(order: &[usize]) {
    for (position, previous) in order.iter().enumerate() {
        println!("{position:>4} <- {previous}");
    }
}

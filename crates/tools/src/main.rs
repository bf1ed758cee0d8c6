use anyhow::Result;
use carver_core::{Cell, Grid, Session};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the carve RNG
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Maze width in cells
    #[arg(long, default_value_t = 20)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Print only the summary, not the maze itself
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut session = Session::new(args.width, args.height, args.seed)
        .map_err(|e| anyhow::anyhow!("invalid maze dimensions: {:?}", e))?;
    session.run_to_completion();

    if !args.quiet {
        print!("{}", render_ascii(session.grid()));
    }

    println!("{}x{} maze, seed {}", args.width, args.height, args.seed);
    println!("Removed walls: {}", session.grid().removed_wall_count());
    println!("Fingerprint: 0x{:016x}", session.snapshot_hash());

    Ok(())
}

/// Classic `+--+` rendering: one line of vertical walls and one line of
/// horizontal walls per cell row, with the outer border always closed.
fn render_ascii(grid: &Grid) -> String {
    let mut out = String::new();

    out.push('+');
    for _ in 0..grid.width() {
        out.push_str("--+");
    }
    out.push('\n');

    for y in 0..grid.height() {
        out.push('|');
        for x in 0..grid.width() {
            let cell = Cell { x: x as i32, y: y as i32 };
            out.push_str("  ");
            let blocked = x + 1 == grid.width() || grid.right_wall(cell);
            out.push(if blocked { '|' } else { ' ' });
        }
        out.push('\n');

        out.push('+');
        for x in 0..grid.width() {
            let cell = Cell { x: x as i32, y: y as i32 };
            let blocked = y + 1 == grid.height() || grid.down_wall(cell);
            out.push_str(if blocked { "--+" } else { "  +" });
        }
        out.push('\n');
    }

    out
}

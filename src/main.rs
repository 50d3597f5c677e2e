use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{bail, Context};
use bevy_transform::components::Transform;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tilechess::core::{load_or_default, save_settings, settings_path, GameSettings};
use tilechess::game::{Board, DoubleStepPolicy, Piece, PieceColor, Square};
use tilechess::rendering::{
    render_board, square_name, update_move_hints, AnimationEvent, BoardLayout, JumpAnimator,
    JumpState,
};

/// Frames simulated per second by the `jump` command
const FRAME_RATE: f32 = 60.0;
/// Upper bound on simulated frames before giving up on a jump
const MAX_FRAMES: u32 = 100_000;

// Set logging level through the RUST_LOG env variable, e.g.
// RUST_LOG=tilechess=debug tilechess moves --at 3,1

#[derive(Parser)]
#[command(name = "tilechess", about = "Preview pawn moves and jump arcs on an 8x8 board")]
struct Args {
    /// Settings file to use instead of the platform default
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Disable log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show move and attack destinations for a pawn.
    Moves {
        /// Colour of the pawn.
        #[arg(long, value_enum, default_value_t = ColorArg::White)]
        color: ColorArg,
        /// Square of the pawn as `x,y`.
        #[arg(long, value_parser = parse_coord)]
        at: (u8, u8),
        /// The pawn has already moved (no double step).
        #[arg(long)]
        moved: bool,
        /// Enemy pawn square as `x,y`; repeatable.
        #[arg(long = "enemy", value_parser = parse_coord)]
        enemies: Vec<(u8, u8)>,
        /// Friendly pawn square as `x,y`; repeatable.
        #[arg(long = "friend", value_parser = parse_coord)]
        friends: Vec<(u8, u8)>,
        /// Override the double-step policy from the settings file.
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },
    /// Print the jump arc between two tiles, frame by frame.
    Jump {
        /// Start square as `x,y`.
        #[arg(long, value_parser = parse_coord)]
        from: (u8, u8),
        /// Target square as `x,y`.
        #[arg(long, value_parser = parse_coord)]
        to: (u8, u8),
        /// Arc height override.
        #[arg(long)]
        height: Option<f32>,
        /// Frame count override for the arc.
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Show the settings file location and effective settings.
    Settings {
        /// Write the default settings to the settings file.
        #[arg(long)]
        write_default: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorArg {
    White,
    Black,
}

impl From<ColorArg> for PieceColor {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::White => PieceColor::White,
            ColorArg::Black => PieceColor::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Squares passed over must be empty.
    ClearPath,
    /// Only the destination must be empty.
    Ignore,
}

impl From<PolicyArg> for DoubleStepPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::ClearPath => DoubleStepPolicy::RequireClearPath,
            PolicyArg::Ignore => DoubleStepPolicy::IgnoreIntermediate,
        }
    }
}

fn parse_coord(s: &str) -> Result<(u8, u8), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<u8>().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse::<u8>().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok((x, y))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if !args.quiet {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tilechess=info")),
            )
            .init();
    }

    let path = args.settings.clone().unwrap_or_else(settings_path);
    let settings = load_or_default(&path);

    match args.command {
        Command::Moves {
            color,
            at,
            moved,
            enemies,
            friends,
            policy,
        } => {
            let policy = policy.map(Into::into).unwrap_or(settings.rules.double_step);
            run_moves(&settings, color.into(), at, moved, &enemies, &friends, policy)
        }
        Command::Jump {
            from,
            to,
            height,
            steps,
        } => run_jump(&settings, from, to, height, steps),
        Command::Settings { write_default } => run_settings(&settings, path, write_default),
    }
}

fn run_moves(
    settings: &GameSettings,
    color: PieceColor,
    at: (u8, u8),
    moved: bool,
    enemies: &[(u8, u8)],
    friends: &[(u8, u8)],
    policy: DoubleStepPolicy,
) -> anyhow::Result<()> {
    let mut board = Board::new();

    let mut pawn = Piece::pawn(color);
    if moved {
        pawn.mark_moved();
    }
    board
        .place(pawn, at.0 as i32, at.1 as i32)
        .context("placing the selected pawn")?;

    let others = enemies
        .iter()
        .map(|&pos| (pos, color.opponent()))
        .chain(friends.iter().map(|&pos| (pos, color)));
    for ((x, y), other) in others {
        board
            .place(Piece::pawn(other), x as i32, y as i32)
            .with_context(|| format!("placing {other} pawn at ({x}, {y})"))?;
    }

    let set = board.valid_moves_at_with(at.0 as i32, at.1 as i32, policy)?;
    info!(
        "[MOVES] {} pawn at ({}, {}) with {:?}: {} moves, {} attacks",
        color,
        at.0,
        at.1,
        policy,
        set.moves.len(),
        set.attacks.len()
    );

    update_move_hints(&mut board, settings.show_hints, Some(&set));
    print!("{}", render_board(&board));
    println!("moves:   {}", format_squares(&set.moves));
    println!("attacks: {}", format_squares(&set.attacks));
    Ok(())
}

fn format_squares(squares: &BTreeSet<Square>) -> String {
    if squares.is_empty() {
        return "-".to_string();
    }
    squares
        .iter()
        .map(|&s| format!("{} {}", square_name(s), s))
        .collect::<Vec<_>>()
        .join(", ")
}

fn run_jump(
    settings: &GameSettings,
    from: (u8, u8),
    to: (u8, u8),
    height: Option<f32>,
    steps: Option<u32>,
) -> anyhow::Result<()> {
    let layout = BoardLayout::new(&settings.board);
    let from = Square::new(from.0 as i32, from.1 as i32).context("start square")?;
    let to = Square::new(to.0 as i32, to.1 as i32).context("target square")?;

    let mut jump = settings.animation;
    if let Some(height) = height {
        jump.jump_height = height;
    }
    if let Some(steps) = steps {
        if steps == 0 {
            bail!("--steps must be at least 1");
        }
        jump.jump_steps = steps;
    }

    let mut transform = Transform::from_translation(layout.tile_center(from));
    let mut animator = JumpAnimator::new(jump, transform.rotation);
    animator.jump_to(&transform, layout.tile_center(to));

    for frame in 0..MAX_FRAMES {
        let jumping = matches!(animator.state(), JumpState::Jumping { .. });
        let event = animator.tick(&mut transform, 1.0 / FRAME_RATE);
        if jumping {
            let p = transform.translation;
            println!("frame {frame:>5}: {:>8.3} {:>8.3} {:>8.3}", p.x, p.y, p.z);
        }
        match event {
            Some(AnimationEvent::Finished) => {
                println!("frame {frame:>5}: finished");
                return Ok(());
            }
            Some(event) => println!("frame {frame:>5}: {event:?}"),
            None => {}
        }
    }
    bail!("jump did not finish within {MAX_FRAMES} frames")
}

fn run_settings(settings: &GameSettings, path: PathBuf, write_default: bool) -> anyhow::Result<()> {
    if write_default {
        save_settings(&path, &GameSettings::default())
            .with_context(|| format!("writing {}", path.display()))?;
        println!("wrote defaults to {}", path.display());
        return Ok(());
    }
    println!("settings file: {}", path.display());
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

//! Terminal front end for DynaMaze
//!
//! Renders the board with box-drawing characters and drives a game
//! through a small command loop.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use dynamaze::{
    options, AudioBackend, BoardController, Direction, GameEvent, GameSettings, Music, Player,
    Sound, SoundEngine,
};

/// Play DynaMaze in the terminal.
#[derive(Parser, Debug)]
#[command(name = "dynamaze", version, about)]
struct Args {
    /// Board width (odd, at least 3)
    #[arg(long, default_value_t = 7)]
    width: usize,

    /// Board height (odd, at least 3)
    #[arg(long, default_value_t = 7)]
    height: usize,

    /// Number of players (1-4)
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Targets a player must reach to win
    #[arg(long, default_value_t = 3)]
    score_limit: u32,

    /// Options file (music/sound levels)
    #[arg(long, default_value = "dynamaze-options.json")]
    options: PathBuf,
}

/// Audio backend that narrates cues instead of playing them.
struct TerminalAudio;

impl AudioBackend for TerminalAudio {
    fn play_looping(&self, music: Music) {
        println!("♪ now playing {}", music.asset_path());
    }

    fn pause(&self, _music: Music) {}

    fn play_once(&self, sound: Sound) {
        println!("♪ cue {}", sound.asset_path());
    }

    fn set_music_gain(&self, _gain: f32) {}

    fn set_sound_gain(&self, _gain: f32) {}
}

const PALETTE: [(&str, [f32; 4]); 4] = [
    ("red", [0.8, 0.1, 0.1, 1.0]),
    ("blue", [0.1, 0.1, 0.8, 1.0]),
    ("green", [0.1, 0.6, 0.1, 1.0]),
    ("yellow", [0.8, 0.8, 0.1, 1.0]),
];

fn main() -> Result<()> {
    let args = Args::parse();

    options::HANDLE
        .load(&args.options)
        .with_context(|| format!("loading options from {}", args.options.display()))?;

    let count = args.players.clamp(1, PALETTE.len());
    let players: Vec<Player> = PALETTE
        .iter()
        .take(count)
        .map(|(name, color)| Player::new(*name, *color))
        .collect();
    let settings = GameSettings {
        width: args.width,
        height: args.height,
        score_limit: args.score_limit,
    };
    let mut game = BoardController::new(players, settings).context("starting the game")?;

    let sound = SoundEngine::new(TerminalAudio);
    sound.play_music(Music::InGame);

    println!("DynaMaze — first to {} targets wins. Type `help` for commands.", args.score_limit);
    let mut editor = DefaultEditor::new().context("initializing the terminal")?;
    loop {
        print_board(&game);
        let prompt = format!("{} ({})> ", game.current_player().name, game.phase());
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("reading a command"),
        };
        let _ = editor.add_history_entry(&line);

        match run_command(&mut game, &sound, line.trim()) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Won) => {
                print_board(&game);
                break;
            }
            Err(err) => println!("error: {}", err),
        }
    }

    options::HANDLE
        .save(&args.options)
        .with_context(|| format!("saving options to {}", args.options.display()))?;
    Ok(())
}

enum Outcome {
    Continue,
    Quit,
    Won,
}

fn run_command(
    game: &mut BoardController,
    sound: &SoundEngine<TerminalAudio>,
    line: &str,
) -> Result<Outcome> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("");
    match command {
        "" | "board" => Ok(Outcome::Continue),
        "help" => {
            print_help();
            Ok(Outcome::Continue)
        }
        "rotate" => {
            game.rotate_loose_tile()?;
            Ok(Outcome::Continue)
        }
        "park" => {
            let edge = parse_edge(words.next().context("usage: park <n|s|e|w> <lane>")?)?;
            let idx: usize = words
                .next()
                .context("usage: park <n|s|e|w> <lane>")?
                .parse()
                .context("lane must be a number")?;
            game.park_loose_tile(edge, idx)?;
            Ok(Outcome::Continue)
        }
        "insert" => {
            game.insert_loose_tile()?;
            Ok(Outcome::Continue)
        }
        "move" => {
            let row: usize = words
                .next()
                .context("usage: move <row> <col>")?
                .parse()
                .context("row must be a number")?;
            let col: usize = words
                .next()
                .context("usage: move <row> <col>")?
                .parse()
                .context("col must be a number")?;
            let events = game.move_token((row, col))?;
            Ok(report_events(game, sound, &events))
        }
        "quit" | "exit" => Ok(Outcome::Quit),
        other => {
            println!("unknown command `{}`; type `help`", other);
            Ok(Outcome::Continue)
        }
    }
}

fn report_events(
    game: &BoardController,
    sound: &SoundEngine<TerminalAudio>,
    events: &[GameEvent],
) -> Outcome {
    for event in events {
        match event {
            GameEvent::TurnStarted(id) => {
                if let Some(player) = game.players().get(id) {
                    println!("-- {}'s turn --", player.name);
                }
                sound.play_sound(Sound::YourTurn);
            }
            GameEvent::TargetReached { player, score } => {
                if let Some(player) = game.players().get(player) {
                    println!("{} reached a target (score {})", player.name, score);
                }
            }
            GameEvent::GameWon(id) => {
                if let Some(player) = game.players().get(id) {
                    println!("*** {} wins! ***", player.name);
                }
                return Outcome::Won;
            }
        }
    }
    Outcome::Continue
}

fn parse_edge(word: &str) -> Result<Direction> {
    match word {
        "n" | "north" => Ok(Direction::North),
        "s" | "south" => Ok(Direction::South),
        "e" | "east" => Ok(Direction::East),
        "w" | "west" => Ok(Direction::West),
        other => anyhow::bail!("unknown edge `{}` (use n, s, e, or w)", other),
    }
}

fn print_help() {
    println!("commands:");
    println!("  rotate             rotate the loose tile clockwise");
    println!("  park <edge> <lane> park the loose tile (edge: n/s/e/w)");
    println!("  insert             push the parked tile into the board");
    println!("  move <row> <col>   move your token (staying put is legal)");
    println!("  board              redraw the board");
    println!("  quit               leave the game");
}

/// Box-drawing character for a tile's open paths.
fn tile_char(tile: &dynamaze::Tile) -> char {
    let mut mask = 0u8;
    for dir in tile.paths() {
        mask |= match dir {
            Direction::North => 1,
            Direction::South => 2,
            Direction::East => 4,
            Direction::West => 8,
        };
    }
    match mask {
        0b0011 => '│',
        0b1100 => '─',
        0b0101 => '└',
        0b1001 => '┘',
        0b0110 => '┌',
        0b1010 => '┐',
        0b1110 => '┬',
        0b1101 => '┴',
        0b0111 => '├',
        0b1011 => '┤',
        _ => '?',
    }
}

fn print_board(game: &BoardController) {
    let board = game.board();
    let current = game.current_player();

    print!("   ");
    for i in 0..board.width() {
        print!("{}", i % 10);
    }
    println!();
    for j in 0..board.height() {
        print!("{:2} ", j);
        for i in 0..board.width() {
            let pos = (j, i);
            let token = board
                .player_tokens
                .values()
                .position(|t| t.position == pos);
            let ch = if let Some(index) = token {
                char::from_digit(index as u32 + 1, 10).unwrap_or('?')
            } else if board.tile(pos).whose_target == Some(current.id) {
                'X'
            } else {
                tile_char(board.tile(pos))
            };
            print!("{}", ch);
        }
        println!();
    }

    println!(
        "loose tile: {}  parked: {}",
        tile_char(&board.loose_tile),
        match board.loose_tile_position {
            Some((edge, idx)) => format!("{} lane {}", edge, idx),
            None => "no".to_string(),
        }
    );
    if let Some(target) = board.find_target(current.id) {
        println!("{}'s target: ({}, {})", current.name, target.0, target.1);
    } else {
        println!("{}'s target is on the loose tile", current.name);
    }
    for (index, player) in game.players().values().enumerate() {
        println!("  {} = {} (score {})", index + 1, player.name, player.score);
    }
}

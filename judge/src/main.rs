use clap::Parser;
use judge::{choose_mode, play_game, Config, GameResult, Player, PlayerKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reversi::{Outcome, Piece};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Who plays Black. When neither side is given, a menu is shown
    #[arg(long, value_enum)]
    black: Option<PlayerKind>,

    /// Who plays White. When neither side is given, a menu is shown
    #[arg(long, value_enum)]
    white: Option<PlayerKind>,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// Randomly swap the colors of the two players before each game
    #[arg(long, default_value_t = false)]
    shuffle_colors: bool,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    illegal_moves: [usize; 2],
    ties: usize,
}

// Player slot 0 is the player configured as Black, slot 1 the one configured as White.
fn play_matchup(config: &mut Config) -> anyhow::Result<MatchScore> {
    let kinds = [config.black, config.white];
    let mut match_score = MatchScore::default();
    let mut stdout = std::io::stdout();

    for game_idx in 0..config.num_games {
        let swapped = config.shuffle_colors && config.rng.gen::<bool>();
        let [black_slot, white_slot] = if swapped { [1, 0] } else { [0, 1] };
        let slot_of = |piece: Piece| match piece {
            Piece::Black => black_slot,
            Piece::White => white_slot,
        };
        let mut players = [
            Player::from_kind(kinds[black_slot], Piece::Black),
            Player::from_kind(kinds[white_slot], Piece::White),
        ];
        debug!(game_idx, black = %players[0].name, white = %players[1].name, "New game");

        match play_game(&mut players, &mut stdout)? {
            GameResult::Finished {
                outcome,
                black_score,
                white_score,
            } => {
                info!(game_idx, black_score, white_score, ?outcome, "Game over");
                match outcome {
                    Outcome::Winner(piece) => match_score.wins[slot_of(piece)] += 1,
                    Outcome::Draw => match_score.ties += 1,
                }
            }
            GameResult::IllegalMoveByPlayer { piece, err } => {
                info!(
                    player = %players[piece as usize].name,
                    game_idx, "Illegal move by player"
                );
                let mut err_dyn = &err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    info!("{}", err_dyn);
                    err_dyn = src_err;
                }
                info!("{}", err_dyn);
                match_score.wins[slot_of(!piece)] += 1;
                match_score.illegal_moves[slot_of(piece)] += 1;
            }
        }
    }

    if config.num_games > 1 {
        let paren = |slot: usize| {
            if match_score.illegal_moves[1 - slot] > 0 {
                format!(
                    " ({} through illegal moves by the other player)",
                    match_score.illegal_moves[1 - slot]
                )
            } else {
                String::new()
            }
        };
        eprintln!(
            "End result:\n- {} wins by {:?} (configured as Black){}\n- {} wins by {:?} (configured as White){}\n- {} ties",
            match_score.wins[0],
            kinds[0],
            paren(0),
            match_score.wins[1],
            kinds[1],
            paren(1),
            match_score.ties
        );
    }

    Ok(match_score)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let rng = StdRng::seed_from_u64(seed);

    let (black, white) = match (args.black, args.white) {
        (None, None) => {
            choose_mode(&mut std::io::stdin().lock(), &mut std::io::stdout())?.player_kinds()
        }
        (black, white) => (
            black.unwrap_or(PlayerKind::Cpu),
            white.unwrap_or(PlayerKind::Cpu),
        ),
    };

    let mut config = Config {
        black,
        white,
        num_games: args.num_games,
        shuffle_colors: args.shuffle_colors,
        rng,
    };
    play_matchup(&mut config)?;

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // The board is rendered on stdout, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

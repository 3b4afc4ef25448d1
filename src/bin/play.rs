use fourline::messages::{Snapshot, TokenPlaced};
use fourline::{Game, GameObserver, GameResult, PlayerNum, Position, COLUMNS, ROWS};
use std::io::{self, Write};
use tracing::{info, warn};

#[derive(Default)]
struct ConsoleRenderer {
    last_snapshot: Option<Snapshot>,
}

impl GameObserver for ConsoleRenderer {
    fn token_placed(&mut self, placed: &TokenPlaced) {
        info!(
            "Token {} landed at column {}, row {}",
            placed.token.id().get(),
            placed.position.column(),
            placed.position.row()
        );
    }

    fn state_changed(&mut self, snapshot: &Snapshot) {
        println!("{}", render_grid(snapshot, &[]));
        info!("Game state: {}", serde_json::to_string(snapshot).unwrap());
        self.last_snapshot = Some(snapshot.clone());
    }

    fn game_over(&mut self, result: &GameResult) {
        if let GameResult::Win { line, .. } = result {
            if let Some(snapshot) = &self.last_snapshot {
                println!("{}", render_grid(snapshot, line));
            }
        }
        println!("{}", result);
    }
}

// Rows print top-down so the bottom row of the board lands at the bottom
// of the terminal.
fn render_grid(snapshot: &Snapshot, highlight: &[Position]) -> String {
    let mut cells = [[None; ROWS]; COLUMNS];
    for space in snapshot.board.spaces() {
        if let Some(id) = space.occupant() {
            cells[space.column()][space.row()] = Some(snapshot.tokens[id].owner());
        }
    }

    let mut grid = String::new();
    for row in (0..ROWS).rev() {
        for column in 0..COLUMNS {
            let glyph = match cells[column][row] {
                Some(PlayerNum::P1) => 'x',
                Some(PlayerNum::P2) => 'o',
                None => '.',
            };
            let highlighted = highlight
                .iter()
                .any(|position| position.column() == column && position.row() == row);
            if highlighted {
                grid.push(glyph.to_ascii_uppercase());
            } else {
                grid.push(glyph);
            }
            grid.push(' ');
        }
        grid.push('\n');
    }
    for column in 0..COLUMNS {
        grid.push_str(&column.to_string());
        grid.push(' ');
    }
    grid
}

#[tracing::instrument]
fn main() {
    let file_appender = tracing_appender::rolling::daily("./logs", "play.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let mut game = Game::new();
    let mut renderer = ConsoleRenderer::default();
    println!("{}", render_grid(&game.snapshot(), &[]));
    println!("Drop tokens with a column number, or a/d to move and s to drop. q quits.");

    let stdin = io::stdin();
    while game.is_accepting_input() {
        print!(
            "{} [column {}]> ",
            game.player(game.active_player()).name(),
            game.selected_column()
        );
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                warn!("Failed to read input: {}", err);
                break;
            }
        }

        let command = line.trim();
        let request = match command {
            "q" | "quit" => break,
            "a" | "left" => {
                game.select_left();
                continue;
            }
            "d" | "right" => {
                game.select_right();
                continue;
            }
            "" | "s" | "drop" => game.drop_selected(),
            _ => match command.parse::<usize>() {
                Ok(column) => game.request_drop(column),
                Err(_) => {
                    println!("Unrecognized command: {}", command);
                    continue;
                }
            },
        };

        match request {
            Ok(_) => {
                if let Err(err) = game.complete_drop(&mut renderer) {
                    warn!("Failed to complete drop: {}", err);
                }
            }
            Err(rejected) => println!("{}", rejected),
        }
    }

    info!("Session ended");
}

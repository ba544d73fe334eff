use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::board::Board;
use super::player::Player;
use super::win::{self, Line};
use crate::config::GameConfig;
use crate::error::MoveError;

/// Where the most recent piece came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastPlay {
    pub column: usize,
    pub row: usize,
}

/// Full game: board, turn order, outcome and snapshot history.
///
/// Moves mutate in place. Search code that explores several continuations
/// should clone the state per branch (or use [`GameState::with_play`]).
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    turn: usize,
    last_play: Option<LastPlay>,
    winner: Option<usize>,
    winning_line: Option<Line>,
    moves: Vec<usize>,
    history: Vec<Board>,
    save_history: bool,
    rng: StdRng,
}

impl GameState {
    /// Create an empty game from `config`. Player A moves first.
    pub fn new(config: &GameConfig) -> Self {
        let board = Board::new(config.rows, config.cols);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        GameState {
            history: vec![board.clone()],
            board,
            players: [Player::a(), Player::b()],
            turn: 0,
            last_play: None,
            winner: None,
            winning_line: None,
            moves: Vec::new(),
            save_history: config.save_history,
            rng,
        }
    }

    /// Standard 6x7 game with history retention.
    pub fn initial() -> Self {
        Self::new(&GameConfig::default())
    }

    /// Rebuild a game by playing `moves` in order on a fresh state.
    pub fn replay(config: &GameConfig, moves: &[usize]) -> Result<Self, MoveError> {
        let mut state = Self::new(config);
        for &column in moves {
            state.play(Some(column))?;
        }
        Ok(state)
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player to move, or the winner once the game is won.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|idx| &self.players[idx])
    }

    /// Orientation of the line that decided the game.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    pub fn last_play(&self) -> Option<LastPlay> {
        self.last_play
    }

    /// Columns played so far, in order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn saves_history(&self) -> bool {
        self.save_history
    }

    /// Recorded snapshots, oldest first. Holds only the current board when
    /// history retention is off.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Copy of snapshot `index` (0 is the empty board).
    pub fn snapshot(&self, index: usize) -> Option<Board> {
        self.history.get(index).cloned()
    }

    /// Copy of the most recent snapshot.
    pub fn latest_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Check if someone has won
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Board filled with nobody connecting four.
    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.board.is_full()
    }

    /// No further move can be made, by win or draw.
    pub fn is_over(&self) -> bool {
        self.is_terminal() || self.board.is_full()
    }

    /// Columns the current player may drop into, ascending. Empty once the
    /// game has a winner, whatever free cells remain.
    pub fn legal_plays(&self) -> Vec<usize> {
        let legal = if self.is_terminal() {
            Vec::new()
        } else {
            self.board.open_columns()
        };
        tracing::debug!(?legal, "legal plays");
        legal
    }

    /// Play `column`, or a uniformly random legal column when `None`.
    /// Returns the column played.
    pub fn play(&mut self, column: Option<usize>) -> Result<usize, MoveError> {
        let legal = self.legal_plays();
        let column = choose_column(&legal, column, &mut self.rng)?;
        self.apply(column);
        Ok(column)
    }

    /// Like [`GameState::play`], drawing random moves from `rng` instead of
    /// the game's own generator.
    pub fn play_with_rng<R: Rng + ?Sized>(
        &mut self,
        column: Option<usize>,
        rng: &mut R,
    ) -> Result<usize, MoveError> {
        let legal = self.legal_plays();
        let column = choose_column(&legal, column, rng)?;
        self.apply(column);
        Ok(column)
    }

    /// Apply a move and return new state (immutable)
    pub fn with_play(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.play(Some(column))?;
        Ok(next)
    }

    /// Drop the current player's piece into a validated column, record it,
    /// then either declare a winner or pass the turn.
    fn apply(&mut self, column: usize) {
        let player = &self.players[self.turn];
        let id = player.id();
        let row = self.board.place(column, id);
        tracing::debug!(column, row, player = player.name(), "selected move");

        self.last_play = Some(LastPlay { column, row });
        self.moves.push(column);
        if self.save_history {
            self.history.push(self.board.clone());
        } else {
            self.history = vec![self.board.clone()];
        }

        if let Some(line) = win::find_line(&self.board, row, column, id) {
            tracing::info!(
                winner = self.players[self.turn].name(),
                ?line,
                moves = self.moves.len(),
                "four in a row"
            );
            self.winner = Some(self.turn);
            self.winning_line = Some(line);
            return;
        }

        self.turn = (self.turn + 1) % self.players.len();
    }
}

fn choose_column<R: Rng + ?Sized>(
    legal: &[usize],
    column: Option<usize>,
    rng: &mut R,
) -> Result<usize, MoveError> {
    match column {
        Some(column) if legal.contains(&column) => Ok(column),
        Some(column) => Err(MoveError::IllegalMove {
            column,
            legal: legal.to_vec(),
        }),
        None if legal.is_empty() => Err(MoveError::NoLegalMoves),
        None => Ok(legal[rng.random_range(0..legal.len())]),
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

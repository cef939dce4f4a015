//! The engine façade: one shared board/roster/turn triple plus the
//! injected randomness, driven by ticks and clicks.
//!
//! Execution is single-threaded and event-driven. Each inbound event
//! (render tick or pointer click) runs to completion synchronously, so
//! no partial state is ever visible and no locking is needed beyond
//! "one event at a time".

use crate::board::{Board, Coord, SpotId};
use crate::dice::RandomSource;
use crate::error::{BoardError, MoveError};
use crate::input::Point;
use crate::invariants::assert_invariants;
use crate::layout::{self, SpotSpec};
use crate::moves::{self, StoneMove};
use crate::player::{PlayerColor, Players};
use crate::turn::{self, Phase, Turn};
use strum::IntoEnumIterator;
use tracing::instrument;

/// What the presentation layer should highlight right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Highlight {
    /// Highlight the acting player's dice at its anchor.
    Dice {
        /// The player expected to roll.
        player: PlayerColor,
        /// Anchor of that player's dice sprite.
        anchor: Coord,
    },
    /// Highlight every legal destination spot.
    Destinations(Vec<StoneMove>),
    /// Nothing to highlight (turn bookkeeping states).
    None,
}

/// A running game: board topology, the four players and the current
/// turn, with randomness injected behind [`RandomSource`].
#[derive(derive_getters::Getters)]
pub struct Game {
    board: Board,
    players: Players,
    turn: Turn,
    #[getter(skip)]
    rng: Box<dyn RandomSource>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("turn", &self.turn)
            .field("players", &self.players)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a game on the standard board.
    ///
    /// Every player's dice gets an opening throw (all four dice are
    /// rendered from the start) and a random player opens the game.
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self::from_layout(&layout::standard_layout(), rng)
            .expect("the standard layout is valid")
    }

    /// Creates a game on a custom layout table.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the table is malformed.
    #[instrument(skip(layout, rng), fields(spots = layout.len()))]
    pub fn from_layout(
        layout: &[SpotSpec],
        mut rng: Box<dyn RandomSource>,
    ) -> Result<Self, BoardError> {
        let board = Board::from_layout(layout)?;
        let mut players = Players::seated(&board);
        for color in PlayerColor::iter() {
            players.get_mut(color).dice_mut().throw(rng.as_mut());
        }
        let opener = PlayerColor::iter()
            .nth(rng.index(4))
            .expect("index is in 0..4");
        tracing::info!(%opener, "game created");
        Ok(Self {
            board,
            players,
            turn: Turn::opening(opener),
            rng,
        })
    }

    /// Mutable roster access, for adapters and test setup.
    pub fn players_mut(&mut self) -> &mut Players {
        &mut self.players
    }

    /// The first player who brought all four stones home, if any.
    pub fn winner(&self) -> Option<PlayerColor> {
        self.players.winner(&self.board)
    }

    /// Advances idle turn states; called on every render tick.
    ///
    /// Never consumes player intent: dice and move phases are held
    /// until a click arrives.
    #[instrument(skip(self))]
    pub fn tick(&mut self) {
        self.turn = turn::advance_idle(self.turn, &self.board, &self.players);
    }

    /// Rolls the acting player's dice and resolves the dice phase.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::RollNotExpected`] outside the dice phases.
    #[instrument(skip(self))]
    pub fn roll(&mut self) -> Result<u8, MoveError> {
        let Phase::Dice { .. } = self.turn.phase() else {
            return Err(MoveError::RollNotExpected(*self.turn.phase()));
        };
        let player = *self.turn.player();
        let value = self
            .players
            .get_mut(player)
            .dice_mut()
            .throw(self.rng.as_mut());
        tracing::debug!(%player, value, "dice rolled");
        self.turn = turn::after_roll(self.turn, &self.board, &self.players);
        Ok(value)
    }

    /// Moves the given stone to its legal destination and resolves the
    /// move phase (captures, bonus roll or handoff).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::MoveNotExpected`] outside the move phase,
    /// [`MoveError::BadStoneIndex`] for an index outside 0..4, and
    /// [`MoveError::NoDestination`] if the stone cannot move this turn.
    #[instrument(skip(self))]
    pub fn choose(&mut self, stone: usize) -> Result<SpotId, MoveError> {
        if *self.turn.phase() != Phase::Move {
            return Err(MoveError::MoveNotExpected(*self.turn.phase()));
        }
        let player = *self.turn.player();
        if stone >= self.players.get(player).stones().len() {
            return Err(MoveError::BadStoneIndex(stone));
        }
        let dice = self.players.get(player).dice().value();
        let destination = moves::next_destination(&self.board, &self.players, player, stone, dice)
            .ok_or(MoveError::NoDestination(stone))?;

        moves::apply_move(&self.board, &mut self.players, player, stone, destination);
        self.turn = turn::after_move(self.turn, &self.board, &self.players);
        assert_invariants(self);
        Ok(destination)
    }

    /// The highlight hint for the current state.
    pub fn highlight(&self) -> Highlight {
        let player = *self.turn.player();
        match self.turn.phase() {
            Phase::Dice { .. } => Highlight::Dice {
                player,
                anchor: layout::dice_anchor(player),
            },
            Phase::Move => Highlight::Destinations(self.legal_moves()),
            Phase::Start | Phase::End => Highlight::None,
        }
    }

    /// Legal moves for the acting player at the current dice value.
    pub fn legal_moves(&self) -> Vec<StoneMove> {
        let player = *self.turn.player();
        let dice = self.players.get(player).dice().value();
        moves::legal_moves(&self.board, &self.players, player, dice)
    }

    /// Resolves a pointer click against the highlighted targets.
    ///
    /// Clicks outside every target, or in states that accept no input,
    /// are silent no-ops. Returns true iff the click was consumed.
    #[instrument(skip(self))]
    pub fn click(&mut self, point: Point) -> bool {
        match self.highlight() {
            Highlight::Dice { anchor, .. } => {
                if point.hits(anchor) {
                    self.roll().expect("dice phase accepts a roll");
                    return true;
                }
                false
            }
            Highlight::Destinations(moves) => {
                for mv in moves {
                    if point.hits(self.board.spot(mv.destination).coord()) {
                        self.choose(mv.stone).expect("highlighted move is legal");
                        return true;
                    }
                }
                false
            }
            Highlight::None => false,
        }
    }
}

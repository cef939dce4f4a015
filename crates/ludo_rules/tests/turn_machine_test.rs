//! Turn-machine scenarios driven end to end through the engine façade.

use ludo_rules::{Game, MoveError, Phase, PlayerColor, ScriptedRolls, SpotId, any_move_possible};

/// A game with the scripted rolls following the four opening throws,
/// red to open.
fn game(rolls: &[u8]) -> Game {
    let mut script = vec![1, 1, 1, 1];
    script.extend_from_slice(rolls);
    Game::new(Box::new(ScriptedRolls::new(&script)))
}

fn park_red_home(game: &mut Game) {
    let red = game.players_mut().get_mut(PlayerColor::Red).stones_mut();
    for (stone, id) in red.iter_mut().zip([68, 69, 70, 71]) {
        stone.position = SpotId(id);
    }
}

#[test]
fn parked_player_gets_three_attempts_then_exits() {
    let mut g = game(&[3, 5, 6]);

    g.tick();
    assert_eq!(*g.turn().phase(), Phase::Dice { attempt: 1 });

    g.roll().unwrap();
    assert_eq!(*g.turn().phase(), Phase::Dice { attempt: 2 });

    g.roll().unwrap();
    assert_eq!(*g.turn().phase(), Phase::Dice { attempt: 3 });

    g.roll().unwrap();
    assert_eq!(*g.turn().phase(), Phase::Move);

    // The 6 lets one stone leave the house for the start spot.
    let moves = g.legal_moves();
    let destination = g.choose(moves[0].stone).unwrap();
    assert_eq!(destination, SpotId(4));
    assert_eq!(
        g.players().get(PlayerColor::Red).stones()[0].position,
        SpotId(4)
    );
}

#[test]
fn three_non_sixes_pass_the_turn_without_a_move() {
    let mut g = game(&[2, 4, 5]);
    let before: Vec<SpotId> = g
        .players()
        .get(PlayerColor::Red)
        .stones()
        .iter()
        .map(|s| s.position)
        .collect();

    g.tick();
    for expected in [2u8, 3] {
        g.roll().unwrap();
        assert_eq!(*g.turn().phase(), Phase::Dice { attempt: expected });
    }
    g.roll().unwrap();
    assert_eq!(*g.turn().phase(), Phase::End);

    let after: Vec<SpotId> = g
        .players()
        .get(PlayerColor::Red)
        .stones()
        .iter()
        .map(|s| s.position)
        .collect();
    assert_eq!(before, after, "no stone may move");

    g.tick();
    assert_eq!(*g.turn().player(), PlayerColor::Blue);
    assert_eq!(*g.turn().phase(), Phase::Start);
}

#[test]
fn finished_player_is_skipped_without_rolling() {
    let mut g = game(&[]);
    park_red_home(&mut g);
    assert_eq!(g.winner(), Some(PlayerColor::Red));

    g.tick();
    assert_eq!(*g.turn().phase(), Phase::End);
    g.tick();
    assert_eq!(*g.turn().player(), PlayerColor::Blue);
}

#[test]
fn a_six_on_the_track_grants_a_bonus_roll() {
    // Roll a 6 out of the house, move, then the bonus 3, move again,
    // then the turn ends.
    let mut g = game(&[6, 3]);

    g.tick();
    g.roll().unwrap();
    assert_eq!(*g.turn().phase(), Phase::Move);
    g.choose(0).unwrap();
    assert_eq!(*g.turn().phase(), Phase::Dice { attempt: 1 });

    g.roll().unwrap();
    assert_eq!(*g.turn().phase(), Phase::Move);
    g.choose(0).unwrap();
    assert_eq!(*g.turn().phase(), Phase::End);

    // 6 out of the house, then 3 forward from the start spot.
    assert_eq!(
        g.players().get(PlayerColor::Red).stones()[0].position,
        SpotId(7)
    );
}

#[test]
fn home_lane_stone_still_counts_as_parked_for_the_ladder() {
    // One red stone on home-lane spot 68, the rest in their houses: the
    // 3 could legally advance the lane stone to 71, but a parked player
    // climbs the attempt ladder before any move is offered.
    let mut g = game(&[3, 6]);
    g.players_mut().get_mut(PlayerColor::Red).stones_mut()[0].position = SpotId(68);

    g.tick();
    assert!(any_move_possible(
        g.board(),
        g.players(),
        PlayerColor::Red,
        3
    ));
    g.roll().unwrap();
    assert_eq!(*g.turn().phase(), Phase::Dice { attempt: 2 });

    g.roll().unwrap();
    assert_eq!(*g.turn().phase(), Phase::Move);
}

#[test]
fn non_six_with_a_stone_on_the_track_gets_no_ladder() {
    let mut g = game(&[4]);
    g.players_mut().get_mut(PlayerColor::Red).stones_mut()[0].position = SpotId(10);

    g.tick();
    g.roll().unwrap();
    assert_eq!(*g.turn().phase(), Phase::Move);
}

#[test]
fn selecting_an_immovable_stone_is_rejected() {
    let mut g = game(&[4]);
    g.players_mut().get_mut(PlayerColor::Red).stones_mut()[0].position = SpotId(10);

    g.tick();
    g.roll().unwrap();

    // Stone 1 is still parked in its house; a 4 cannot move it.
    assert_eq!(g.choose(1), Err(MoveError::NoDestination(1)));
    assert_eq!(g.choose(9), Err(MoveError::BadStoneIndex(9)));

    // The chosen legal stone still works afterwards; the walk hops
    // blue's home lane and lands on blue's start spot.
    assert_eq!(g.choose(0), Ok(SpotId(18)));
}

#[test]
fn opening_seat_follows_the_random_source() {
    let script = ScriptedRolls::new(&[1, 1, 1, 1]).with_first_seat(2);
    let g = Game::new(Box::new(script));
    assert_eq!(*g.turn().player(), PlayerColor::Yellow);
}

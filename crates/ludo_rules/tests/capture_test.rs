//! Capture-on-landing scenarios.

use ludo_rules::{
    Board, Game, PlayerColor, Players, ScriptedRolls, SpotId, SpotKind, apply_move,
    standard_layout,
};

#[test]
fn landing_on_an_opponent_sends_it_to_a_free_house() {
    let board = Board::from_layout(&standard_layout()).expect("standard layout");
    let mut players = Players::seated(&board);

    // Blue approaching a red stone on shared track spot 27.
    players.get_mut(PlayerColor::Blue).stones_mut()[0].position = SpotId(23);
    players.get_mut(PlayerColor::Red).stones_mut()[2].position = SpotId(27);

    let free_red_houses: Vec<SpotId> = board
        .house_spots(PlayerColor::Red)
        .filter(|h| {
            players
                .get(PlayerColor::Red)
                .stones()
                .iter()
                .all(|s| s.position != h.id())
        })
        .map(|h| h.id())
        .collect();
    assert_eq!(free_red_houses, vec![SpotId(2)]);

    apply_move(&board, &mut players, PlayerColor::Blue, 0, SpotId(27));

    let blue = players.get(PlayerColor::Blue).stones()[0].position;
    let red = players.get(PlayerColor::Red).stones()[2].position;
    assert_eq!(blue, SpotId(27));
    assert_eq!(red, SpotId(2), "captured stone returns to the free house");
    assert_eq!(board.spot(red).kind(), SpotKind::House(PlayerColor::Red));
}

#[test]
fn capture_through_the_full_engine() {
    // Red opens, rolls a 6 out of the house, then a bonus 4 onto a
    // spot occupied by blue.
    let mut game = Game::new(Box::new(ScriptedRolls::new(&[1, 1, 1, 1, 6, 4])));
    game.players_mut()
        .get_mut(PlayerColor::Blue)
        .stones_mut()[3]
        .position = SpotId(8);

    game.tick();
    game.roll().unwrap();
    game.choose(0).unwrap(); // house -> start spot 4
    game.roll().unwrap();
    let destination = game.choose(0).unwrap(); // 4 + 4 -> 8
    assert_eq!(destination, SpotId(8));

    let blue = game.players().get(PlayerColor::Blue).stones()[3].position;
    assert_eq!(
        blue,
        SpotId(22),
        "blue's stone 3 returns to the house it vacated"
    );
}

#[test]
fn capturing_two_opponents_on_one_spot() {
    let board = Board::from_layout(&standard_layout()).expect("standard layout");
    let mut players = Players::seated(&board);

    // A yellow and a green stone staged on the same track spot (the
    // engine itself never produces this, but capture must clear every
    // occupant regardless).
    players.get_mut(PlayerColor::Yellow).stones_mut()[1].position = SpotId(60);
    players.get_mut(PlayerColor::Green).stones_mut()[2].position = SpotId(60);
    players.get_mut(PlayerColor::Red).stones_mut()[0].position = SpotId(59);

    apply_move(&board, &mut players, PlayerColor::Red, 0, SpotId(60));

    let yellow = players.get(PlayerColor::Yellow).stones()[1].position;
    let green = players.get(PlayerColor::Green).stones()[2].position;
    assert_eq!(yellow, SpotId(38), "first free yellow house");
    assert_eq!(green, SpotId(57), "first free green house");
    assert_eq!(
        players.get(PlayerColor::Red).stones()[0].position,
        SpotId(60)
    );
}

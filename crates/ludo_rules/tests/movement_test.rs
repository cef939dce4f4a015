//! Movement-resolution scenarios on the standard board.

use ludo_rules::{
    Board, PlayerColor, Players, SpotId, SpotKind, any_move_possible, legal_moves,
    next_destination, standard_layout,
};

fn setup() -> (Board, Players) {
    let board = Board::from_layout(&standard_layout()).expect("standard layout");
    let players = Players::seated(&board);
    (board, players)
}

fn place(players: &mut Players, color: PlayerColor, stone: usize, id: usize) {
    players.get_mut(color).stones_mut()[stone].position = SpotId(id);
}

#[test]
fn parked_stones_move_only_on_a_six() {
    let (board, players) = setup();
    for color in [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Yellow,
        PlayerColor::Green,
    ] {
        for stone in 0..4 {
            for dice in 1..=5 {
                assert_eq!(next_destination(&board, &players, color, stone, dice), None);
            }
            let start = next_destination(&board, &players, color, stone, 6)
                .expect("a 6 leaves the house");
            assert_eq!(board.spot(start).kind(), SpotKind::Start(color));
        }
    }
}

#[test]
fn start_walk_matches_four_successors() {
    let (board, mut players) = setup();
    place(&mut players, PlayerColor::Red, 0, 4);

    let mut expected = SpotId(4);
    for _ in 0..4 {
        expected = board.successor(expected);
    }
    assert_eq!(
        next_destination(&board, &players, PlayerColor::Red, 0, 4),
        Some(expected)
    );
    assert_eq!(expected, SpotId(8));
}

#[test]
fn every_color_hops_foreign_home_lanes() {
    let (board, mut players) = setup();
    // Red two short of blue's spliced-in home lane: the four blue home
    // cells between track 13 and blue's start cost no steps.
    place(&mut players, PlayerColor::Red, 0, 12);
    assert_eq!(
        next_destination(&board, &players, PlayerColor::Red, 0, 3),
        Some(SpotId(23))
    );

    // Green in front of blue's lane behaves the same way.
    place(&mut players, PlayerColor::Green, 0, 13);
    assert_eq!(
        next_destination(&board, &players, PlayerColor::Green, 0, 2),
        Some(SpotId(23))
    );

    // Blue, however, walks into its own lane cell by cell.
    place(&mut players, PlayerColor::Blue, 0, 13);
    assert_eq!(
        next_destination(&board, &players, PlayerColor::Blue, 0, 2),
        Some(SpotId(15))
    );
}

#[test]
fn home_lane_never_leaks_back_onto_the_track() {
    let (board, mut players) = setup();
    for (lane_spot, fitting) in [(68, 3), (69, 2), (70, 1)] {
        place(&mut players, PlayerColor::Red, 0, lane_spot);
        assert_eq!(
            next_destination(&board, &players, PlayerColor::Red, 0, fitting),
            Some(SpotId(71))
        );
        for dice in (fitting + 1)..=6 {
            assert_eq!(
                next_destination(&board, &players, PlayerColor::Red, 0, dice),
                None,
                "{dice} from {lane_spot} must overshoot"
            );
        }
    }
}

#[test]
fn blocked_player_has_no_moves_at_all() {
    let (board, mut players) = setup();
    // Every red stone either overshoots the lane end or is parked on
    // it; red cannot move on any roll.
    place(&mut players, PlayerColor::Red, 0, 67);
    place(&mut players, PlayerColor::Red, 1, 69);
    place(&mut players, PlayerColor::Red, 2, 70);
    place(&mut players, PlayerColor::Red, 3, 71);

    // Only a 1 fits: it advances the rearmost stone onto the free lane
    // cell 68. Everything else overshoots or lands on a sibling.
    assert!(any_move_possible(&board, &players, PlayerColor::Red, 1));
    for dice in 2..=6 {
        assert!(!any_move_possible(&board, &players, PlayerColor::Red, dice));
    }
}

#[test]
fn hint_query_lists_every_movable_stone() {
    let (board, mut players) = setup();
    place(&mut players, PlayerColor::Yellow, 0, 41);
    place(&mut players, PlayerColor::Yellow, 1, 45);

    let hints = legal_moves(&board, &players, PlayerColor::Yellow, 3);
    let destinations: Vec<SpotId> = hints.iter().map(|m| m.destination).collect();
    assert_eq!(destinations, vec![SpotId(44), SpotId(48)]);
}

//! Board generation, insertion, and reachability tests

use std::collections::HashSet;

use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dynamaze::{Board, Direction, GameError, Player, PlayerId, Shape, Tile};

fn players(count: usize) -> IndexMap<PlayerId, Player> {
    (0..count)
        .map(|i| {
            let player = Player::with_id(
                PlayerId::from(i as u64 + 1),
                format!("player-{}", i),
                [0.2 * i as f32, 0.0, 0.5, 1.0],
            );
            (player.id, player)
        })
        .collect()
}

fn board(width: usize, height: usize, player_count: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(42);
    Board::new_with_rng(width, height, &players(player_count), &mut rng)
        .expect("board construction")
}

#[test]
fn test_corners_open_into_the_board() {
    let board = board(7, 7, 0);
    let top_left = board.tile((0, 0));
    assert!(top_left.connects(Direction::South));
    assert!(top_left.connects(Direction::East));

    let top_right = board.tile((0, 6));
    assert!(top_right.connects(Direction::South));
    assert!(top_right.connects(Direction::West));

    let bottom_left = board.tile((6, 0));
    assert!(bottom_left.connects(Direction::North));
    assert!(bottom_left.connects(Direction::East));

    let bottom_right = board.tile((6, 6));
    assert!(bottom_right.connects(Direction::North));
    assert!(bottom_right.connects(Direction::West));
}

#[test]
fn test_tokens_seed_the_corners_in_join_order() {
    let board = board(7, 7, 4);
    let positions: Vec<(usize, usize)> = (1..=4)
        .map(|i| board.player_tokens[&PlayerId::from(i)].position)
        .collect();
    assert_eq!(positions, vec![(0, 0), (6, 6), (0, 6), (6, 0)]);
}

#[test]
fn test_even_and_tiny_sizes_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let none = players(0);
    for (w, h) in [(4, 7), (7, 4), (1, 7), (7, 1), (2, 2)] {
        let err = Board::new_with_rng(w, h, &none, &mut rng).unwrap_err();
        assert_eq!(err, GameError::InvalidBoardSize { width: w, height: h });
    }
}

#[test]
fn test_five_players_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = Board::new_with_rng(7, 7, &players(5), &mut rng).unwrap_err();
    assert_eq!(err, GameError::TooManyPlayers { count: 5, max: 4 });
}

#[test]
fn test_guide_lanes_count_interior_odd_columns() {
    let board = board(7, 5, 0);
    // 7 wide: lanes at columns 1, 3, 5
    assert_eq!(board.guide_lanes(Direction::North), 3);
    assert_eq!(board.guide_lanes(Direction::South), 3);
    // 5 tall: lanes at rows 1, 3
    assert_eq!(board.guide_lanes(Direction::East), 2);
    assert_eq!(board.guide_lanes(Direction::West), 2);
}

#[test]
fn test_park_rejects_out_of_range_guides() {
    let mut board = board(7, 7, 0);
    let err = board.park_loose_tile(Direction::North, 3).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidGuidePosition {
            edge: Direction::North,
            index: 3,
            lanes: 3,
        }
    );
    assert!(board.park_loose_tile(Direction::North, 2).is_ok());
}

#[test]
fn test_insert_shifts_the_lane_and_ejects_the_far_tile() {
    let mut board = board(7, 7, 0);
    let lane: Vec<Tile> = (0..7).map(|j| board.tile((j, 1)).clone()).collect();
    let loose = board.loose_tile.clone();

    // parked at the north edge of column 1, so the lane shifts south
    board.park_loose_tile(Direction::North, 0).unwrap();
    board.insert_loose_tile();

    assert_eq!(board.tile((0, 1)), &loose);
    for j in 1..7 {
        assert_eq!(board.tile((j, 1)), &lane[j - 1]);
    }
    assert_eq!(board.loose_tile, lane[6]);
}

#[test]
fn test_insert_without_parking_is_a_no_op() {
    let mut board = board(7, 7, 2);
    let before = board.clone();
    board.insert_loose_tile();
    assert_eq!(board, before);
}

#[test]
fn test_tokens_ride_the_lane_and_wrap() {
    let mut board = board(7, 7, 2);
    let first = PlayerId::from(1);
    let second = PlayerId::from(2);
    if let Some(token) = board.player_tokens.get_mut(&first) {
        token.position = (2, 1);
    }
    if let Some(token) = board.player_tokens.get_mut(&second) {
        token.position = (6, 1);
    }

    board.park_loose_tile(Direction::North, 0).unwrap();
    board.insert_loose_tile();

    // mid-lane token slides one cell south; the edge token wraps around
    // onto the inserted tile
    assert_eq!(board.player_tokens[&first].position, (3, 1));
    assert_eq!(board.player_tokens[&second].position, (0, 1));
}

#[test]
fn test_tokens_off_the_lane_stay_put() {
    let mut board = board(7, 7, 2);
    board.park_loose_tile(Direction::West, 1).unwrap();
    let before: Vec<(usize, usize)> = board
        .player_tokens
        .values()
        .map(|token| token.position)
        .collect();
    board.insert_loose_tile();
    let after: Vec<(usize, usize)> = board
        .player_tokens
        .values()
        .map(|token| token.position)
        .collect();
    // tokens sit on rows 0 and 6, the shifted lane is row 3
    assert_eq!(before, after);
}

#[test]
fn test_reachability_follows_mutual_connections() {
    let mut board = board(3, 3, 0);
    // east-west corridors on every row
    for j in 0..3 {
        for i in 0..3 {
            *board.tile_mut((j, i)) = Tile::new(Shape::I, Direction::East);
        }
    }

    let from_middle = board.reachable_coords((1, 1));
    let row: HashSet<(usize, usize)> = [(1, 0), (1, 1), (1, 2)].into_iter().collect();
    assert_eq!(from_middle, row);

    // a corridor is only entered if both sides open towards each other
    *board.tile_mut((1, 2)) = Tile::new(Shape::I, Direction::North);
    let from_middle = board.reachable_coords((1, 1));
    let row: HashSet<(usize, usize)> = [(1, 0), (1, 1)].into_iter().collect();
    assert_eq!(from_middle, row);
}

#[test]
fn test_reachable_always_contains_the_start() {
    let board = board(7, 7, 0);
    for j in 0..7 {
        for i in 0..7 {
            assert!(board.reachable_coords((j, i)).contains(&(j, i)));
        }
    }
}

#[test]
fn test_place_target_avoids_tokens_and_other_targets() {
    let mut rng = StdRng::seed_from_u64(7);
    let all = players(4);
    let mut board = Board::new_with_rng(7, 7, &all, &mut rng).unwrap();

    for id in all.keys() {
        board.place_target(*id, &mut rng);
    }

    let token_cells: HashSet<(usize, usize)> = board
        .player_tokens
        .values()
        .map(|token| token.position)
        .collect();
    let mut target_cells = HashSet::new();
    for id in all.keys() {
        let pos = board.find_target(*id).expect("target placed");
        assert!(!token_cells.contains(&pos));
        assert!(target_cells.insert(pos), "targets must not stack");
    }
}

#[test]
fn test_target_rides_an_ejected_tile_onto_the_loose_tile() {
    let mut board = board(7, 7, 0);
    let id = PlayerId::from(9);
    board.tile_mut((6, 1)).whose_target = Some(id);

    board.park_loose_tile(Direction::North, 0).unwrap();
    board.insert_loose_tile();

    assert_eq!(board.find_target(id), None);
    assert_eq!(board.loose_tile.whose_target, Some(id));
}

#[test]
fn test_board_snapshot_round_trips_as_json() {
    let board = board(5, 5, 2);
    let json = serde_json::to_string(&board).expect("serialize");
    let restored: Board = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(board, restored);
}

use super::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Drop a piece, asserting the column was legal.
fn place(board: &mut Board, col: usize, player: Player) -> (usize, usize) {
    board
        .drop_piece(col, player)
        .unwrap_or_else(|e| panic!("drop into column {col} failed: {e}"))
}

/// Mirror the board left-right and swap the two players' pieces.
fn mirror_and_swap(board: &Board) -> Board {
    let text: String = board
        .to_string()
        .lines()
        .map(|line| {
            line.split_whitespace()
                .rev()
                .map(|t| match t {
                    "R" => "Y",
                    "Y" => "R",
                    other => other,
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n");
    text.parse().expect("mirrored board should parse")
}

#[test]
fn test_initial_board() {
    let board = Board::new();
    assert!(!board.is_full());
    assert_eq!(board.empty_cells(), BOARD_SIZE);
    for col in 0..COLS {
        assert_eq!(board.height(col), 0);
        for row in 0..ROWS {
            assert_eq!(board.cell(row, col), Cell::Empty);
        }
    }
}

#[test]
fn test_legal_moves_ascending() {
    let board = Board::new();
    assert_eq!(board.legal_moves(), (0..COLS).collect::<Vec<_>>());

    // Legal moves are exactly the columns whose top cell is empty.
    let mut board = Board::new();
    for _ in 0..ROWS {
        place(&mut board, 2, Player::Red);
        place(&mut board, 5, Player::Yellow);
    }
    let legal = board.legal_moves();
    assert_eq!(legal, vec![0, 1, 3, 4, 6]);
    for col in 0..COLS {
        assert_eq!(
            legal.contains(&col),
            board.cell(ROWS - 1, col) == Cell::Empty
        );
    }
}

#[test]
fn test_drop_piece_lands_at_bottom() {
    let mut board = Board::new();
    let placed = place(&mut board, 3, Player::Red);
    assert_eq!(placed, (0, 3));
    assert_eq!(board.cell(0, 3), Cell::Red);
    assert_eq!(board.height(3), 1);

    let placed = place(&mut board, 3, Player::Yellow);
    assert_eq!(placed, (1, 3));
    assert_eq!(board.cell(1, 3), Cell::Yellow);
    assert_eq!(board.height(3), 2);
}

#[test]
fn test_stacking_fills_column() {
    let mut board = Board::new();
    for i in 0..ROWS {
        place(&mut board, 0, Player::Red);
        assert_eq!(board.height(0), i + 1);
    }
    assert!(!board.is_legal(0));
    assert!(!board.legal_moves().contains(&0));
}

#[test]
fn test_drop_into_full_column_fails() {
    let mut board = Board::new();
    for _ in 0..ROWS {
        place(&mut board, 0, Player::Red);
    }

    let before = board.clone();
    let err = board.drop_piece(0, Player::Yellow).unwrap_err();
    assert_eq!(err, ColumnFullError { column: 0 });
    assert_eq!(board, before);

    // A nonexistent column has no empty cell either.
    assert!(board.drop_piece(COLS, Player::Yellow).is_err());
}

#[test]
fn test_horizontal_win() {
    let mut board = Board::new();
    place(&mut board, 0, Player::Red);
    place(&mut board, 1, Player::Red);
    place(&mut board, 2, Player::Red);
    place(&mut board, 6, Player::Yellow);

    let placed = place(&mut board, 3, Player::Red);
    assert_eq!(board.outcome_after(placed), Some(Outcome::Win(Player::Red)));
}

#[test]
fn test_vertical_win_completes_on_fourth_piece() {
    // Yellow stacks in column 3; Red answers in column 0.
    let mut board = Board::new();
    for _ in 0..3 {
        let placed = place(&mut board, 3, Player::Yellow);
        assert_eq!(board.outcome_after(placed), None);
        place(&mut board, 0, Player::Red);
    }

    let placed = place(&mut board, 3, Player::Yellow);
    assert_eq!(
        board.outcome_after(placed),
        Some(Outcome::Win(Player::Yellow))
    );

    // A fifth piece on top of the completed run still sees the win below it.
    let placed = place(&mut board, 3, Player::Yellow);
    assert_eq!(
        board.outcome_after(placed),
        Some(Outcome::Win(Player::Yellow))
    );
}

#[test]
fn test_diagonal_win_ascending() {
    // Red on the / diagonal (0,0) (1,1) (2,2) (3,3), Yellow filling below.
    let mut board = Board::new();
    place(&mut board, 0, Player::Red);
    place(&mut board, 1, Player::Yellow);
    place(&mut board, 1, Player::Red);
    place(&mut board, 2, Player::Yellow);
    place(&mut board, 2, Player::Yellow);
    place(&mut board, 2, Player::Red);
    place(&mut board, 3, Player::Yellow);
    place(&mut board, 3, Player::Yellow);
    place(&mut board, 3, Player::Yellow);

    let placed = place(&mut board, 3, Player::Red);
    assert_eq!(board.outcome_after(placed), Some(Outcome::Win(Player::Red)));
}

#[test]
fn test_diagonal_win_descending() {
    // Red on the \ diagonal (3,0) (2,1) (1,2) (0,3), Yellow filling below.
    let mut board = Board::new();
    place(&mut board, 3, Player::Red);
    place(&mut board, 2, Player::Yellow);
    place(&mut board, 2, Player::Red);
    place(&mut board, 1, Player::Yellow);
    place(&mut board, 1, Player::Yellow);
    place(&mut board, 1, Player::Red);
    place(&mut board, 0, Player::Yellow);
    place(&mut board, 0, Player::Yellow);
    place(&mut board, 0, Player::Yellow);

    let placed = place(&mut board, 0, Player::Red);
    assert_eq!(board.outcome_after(placed), Some(Outcome::Win(Player::Red)));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // Column pattern RRYYRR (bottom-up), inverted in every other column,
    // leaves no run of four on any axis.
    let text = "\
R Y R Y R Y R
R Y R Y R Y R
Y R Y R Y R Y
Y R Y R Y R Y
R Y R Y R Y R
R Y R Y R Y R";
    let board: Board = text.parse().unwrap();
    assert!(board.is_full());
    assert!(board.legal_moves().is_empty());

    // Checking from any cell: no win anywhere, board full, so a draw.
    for col in 0..COLS {
        assert_eq!(board.outcome_after((ROWS - 1, col)), Some(Outcome::Draw));
    }
}

#[test]
fn test_outcome_scores() {
    assert_eq!(Outcome::Win(Player::Yellow).score(), 1.0);
    assert_eq!(Outcome::Win(Player::Red).score(), -1.0);
    assert_eq!(Outcome::Draw.score(), 0.0);
}

#[test]
fn test_parse_display_roundtrip() {
    let mut board = Board::new();
    place(&mut board, 3, Player::Red);
    place(&mut board, 3, Player::Yellow);
    place(&mut board, 0, Player::Red);
    place(&mut board, 6, Player::Yellow);

    let reparsed: Board = board.to_string().parse().unwrap();
    assert_eq!(board, reparsed);
}

#[test]
fn test_parse_accepts_contiguous_tokens() {
    let text = "OOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nROOOOOY";
    let board: Board = text.parse().unwrap();
    assert_eq!(board.cell(0, 0), Cell::Red);
    assert_eq!(board.cell(0, 6), Cell::Yellow);
    assert_eq!(board.height(0), 1);
    assert_eq!(board.height(6), 1);
}

#[test]
fn test_parse_rejects_wrong_row_count() {
    let text = "OOOOOOO\nOOOOOOO";
    assert_eq!(
        text.parse::<Board>().unwrap_err(),
        ParseBoardError::WrongRowCount(2)
    );
}

#[test]
fn test_parse_rejects_wrong_row_length() {
    let text = "OOOOOOO\nOOOOOOO\nOOOOOOO\nOOOO\nOOOOOOO\nOOOOOOO";
    assert_eq!(
        text.parse::<Board>().unwrap_err(),
        ParseBoardError::WrongRowLength { row: 3, len: 4 }
    );
}

#[test]
fn test_parse_rejects_invalid_token() {
    let text = "OOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOXOOO\nOOOOOOO";
    assert_eq!(
        text.parse::<Board>().unwrap_err(),
        ParseBoardError::InvalidToken {
            token: 'X',
            row: 4,
            column: 3
        }
    );
}

#[test]
fn test_parse_rejects_floating_piece() {
    // A red piece in row 4 of column 2 with nothing below it.
    let text = "OOOOOOO\nOOROOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO";
    assert_eq!(
        text.parse::<Board>().unwrap_err(),
        ParseBoardError::FloatingPiece { column: 2 }
    );
}

#[test]
fn test_player_parsing() {
    assert_eq!("R".parse::<Player>().unwrap(), Player::Red);
    assert_eq!("Y".parse::<Player>().unwrap(), Player::Yellow);
    assert!("O".parse::<Player>().is_err());
    assert!("red".parse::<Player>().is_err());
}

#[test]
fn test_outcome_invariant_under_mirror_and_token_swap() {
    // Play random games; after every placement the mirrored board with
    // swapped tokens must agree, with the winning side swapped.
    for seed in 0..10u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut player = Player::Red;

        loop {
            let legal = board.legal_moves();
            if legal.is_empty() {
                break;
            }
            let col = legal[rng.gen_range(0..legal.len())];
            let (row, col) = place(&mut board, col, player);

            let mirrored = mirror_and_swap(&board);
            let expected = board.outcome_after((row, col)).map(|o| match o {
                Outcome::Win(p) => Outcome::Win(p.opponent()),
                Outcome::Draw => Outcome::Draw,
            });
            assert_eq!(
                mirrored.outcome_after((row, COLS - 1 - col)),
                expected,
                "mirror disagreement (seed={seed})"
            );

            if board.outcome_after((row, col)).is_some() {
                break;
            }
            player = player.opponent();
        }
    }
}

#[test]
fn test_random_games_respect_invariants() {
    for seed in 0..20u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut player = Player::Red;
        let mut moves = 0;

        loop {
            let legal = board.legal_moves();
            for &col in &legal {
                assert!(board.is_legal(col));
            }
            if legal.is_empty() {
                assert!(board.is_full(), "no legal moves only on a full board");
                break;
            }

            let col = legal[rng.gen_range(0..legal.len())];
            let placed = place(&mut board, col, player);
            moves += 1;
            assert!(moves <= BOARD_SIZE, "game exceeded board capacity");

            if board.outcome_after(placed).is_some() {
                break;
            }
            player = player.opponent();
        }
    }
}

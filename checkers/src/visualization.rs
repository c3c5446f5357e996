use crate::{GameState, Piece, Player, SquareSet, BOARD_SIZE};

fn piece_char(piece: Option<Piece>) -> char {
    match piece {
        Some(Piece {
            player: Player::One,
            king,
        }) => {
            if king {
                'X'
            } else {
                'x'
            }
        }
        Some(Piece {
            player: Player::Two,
            king,
        }) => {
            if king {
                'O'
            } else {
                'o'
            }
        }
        None => '·',
    }
}

/// Draws the board with row 7 at the top.
///
/// Men of player 1 are `x` and men of player 2 are `o`, kings are upper
/// case. Empty squares are dots, and coordinates that are not part of the
/// board are left blank.
pub fn visualize_board(squares: &SquareSet) -> String {
    let mut result = String::from("   ");
    for x in 0..BOARD_SIZE {
        result += &format!(" {}", x);
    }
    result += "\n  ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╮\n";

    for y in (0..BOARD_SIZE).rev() {
        result += &format!("{} │", y);
        for x in 0..BOARD_SIZE {
            let c = match squares.find_by_coordinate(x, y) {
                Some(square) => piece_char(square.piece),
                None => ' ',
            };
            result.push(' ');
            result.push(c);
        }
        result += " │\n";
    }

    result += "  ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╯";
    result
}

impl std::fmt::Display for SquareSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", visualize_board(self.squares()))?;
        match self.winner() {
            Some(winner) => write!(f, "{} has won", winner),
            None => write!(f, "{} to move", self.current_player()),
        }
    }
}

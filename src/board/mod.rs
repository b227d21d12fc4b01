/*
A single 3x3 block, written as 9 characters in row-major order from the
top-left cell:

0 1 2
3 4 5
6 7 8

'-' is empty, 'X' and 'O' are the two sides. The key stacks the O field on
top of the X field:

bits 0..9   X occupancy (bit i <=> cell i)
bits 9..18  O occupancy (bit i + 9 <=> cell i)
*/

pub type BoardKey = u32;

pub const BLOCK_CELLS: usize = 9;
pub const N_BOARDS: usize = 19683; // 3^9

const BLOCK_OCC: BoardKey = 0b111111111;
const KEY_OCC: BoardKey = 0x3FFFF;

const EMPTY: char = '-';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    X = 0,
    O = 1,
}

impl Side {
    pub fn symbol(&self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    // offset of this side's 9-bit field inside a key
    fn shift(&self) -> u32 {
        *self as u32 * BLOCK_CELLS as u32
    }
}

// every block string in the fixed '-', 'X', 'O' order
pub fn gen_boards() -> Vec<String> {
    gen_boards_from(String::with_capacity(BLOCK_CELLS))
}

fn gen_boards_from(prefix: String) -> Vec<String> {
    if prefix.len() == BLOCK_CELLS {
        return vec![prefix];
    }

    [EMPTY, Side::X.symbol(), Side::O.symbol()]
        .iter()
        .flat_map(|&c| {
            let mut next = prefix.clone();
            next.push(c);
            gen_boards_from(next)
        })
        .collect()
}

pub fn encode(board: &str) -> BoardKey {
    assert_eq!(board.chars().count(), BLOCK_CELLS, "bad block: {:?}", board);
    let mut key: BoardKey = 0;
    for (i, c) in board.chars().enumerate() {
        match c {
            'X' => key |= 1 << (i as u32 + Side::X.shift()),
            'O' => key |= 1 << (i as u32 + Side::O.shift()),
            EMPTY => {}
            _ => panic!("bad cell symbol {:?} in block {:?}", c, board),
        }
    }
    key
}

pub fn decode(key: BoardKey) -> String {
    assert_eq!(key & !KEY_OCC, 0, "key out of range: {:#x}", key);
    let x_occ = side_occ(key, Side::X);
    let o_occ = side_occ(key, Side::O);
    assert_eq!(x_occ & o_occ, 0, "overlapping occupancy: {:#x}", key);

    (0..BLOCK_CELLS)
        .map(|i| {
            if x_occ & (1 << i) != 0 {
                Side::X.symbol()
            } else if o_occ & (1 << i) != 0 {
                Side::O.symbol()
            } else {
                EMPTY
            }
        })
        .collect()
}

// 9-bit occupancy of one side
pub fn side_occ(key: BoardKey, side: Side) -> u16 {
    ((key >> side.shift()) & BLOCK_OCC) as u16
}

pub fn encoded_boards() -> Vec<BoardKey> {
    gen_boards().iter().map(|b| encode(b)).collect()
}

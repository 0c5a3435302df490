pub const GRID_SIZE: usize = 4;
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Identifier of the empty slot.
pub const BLANK: usize = 0;

pub const SOLVED: [usize; TILE_COUNT] = solved();

const fn solved() -> [usize; TILE_COUNT] {
    let mut tiles = [BLANK; TILE_COUNT];
    let mut i = 0;
    while i < TILE_COUNT - 1 {
        tiles[i] = i + 1;
        i += 1;
    }
    tiles
}

pub fn position(index: usize) -> (usize, usize) {
    (index / GRID_SIZE, index % GRID_SIZE)
}

pub fn index_of(row: usize, col: usize) -> usize {
    row * GRID_SIZE + col
}

/// Orthogonal neighbors of `index` inside the board, in up, down, left, right order.
pub fn adjacent_indices(index: usize) -> impl Iterator<Item = usize> {
    let (row, col) = position(index);
    [
        (row > 0).then(|| index - GRID_SIZE),
        (row < GRID_SIZE - 1).then(|| index + GRID_SIZE),
        (col > 0).then(|| index - 1),
        (col < GRID_SIZE - 1).then(|| index + 1),
    ]
    .into_iter()
    .flatten()
}

/// Row and column of the image crop drawn for `tile`.
///
/// A tile always shows the part of the picture that belongs to its solved
/// slot. The blank maps to the last slot, which is the piece hidden while
/// the puzzle is being played.
pub fn crop_origin(tile: usize) -> (usize, usize) {
    if tile == BLANK {
        position(TILE_COUNT - 1)
    } else {
        position(tile - 1)
    }
}

fn count_inversions(tiles: &[usize]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(i, &tile)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != BLANK && next < tile)
                .count()
        })
        .sum()
}

/// Inversion parity test for a permutation of `0..TILE_COUNT`.
pub fn is_solvable(tiles: &[usize]) -> bool {
    let inversions = count_inversions(tiles);
    let blank_row = tiles
        .iter()
        .position(|&tile| tile == BLANK)
        .map(|index| position(index).0)
        .unwrap_or(0);

    if GRID_SIZE % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + blank_row) % 2 == 1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_solved_layout() {
        assert_eq!(
            SOLVED,
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, BLANK]
        );
    }

    #[test]
    fn test_position() {
        assert_eq!(position(0), (0, 0));
        assert_eq!(position(3), (0, 3));
        assert_eq!(position(4), (1, 0));
        assert_eq!(position(15), (3, 3));
        assert_eq!(index_of(2, 1), 9);
        for index in 0..TILE_COUNT {
            let (row, col) = position(index);
            assert_eq!(index_of(row, col), index);
        }
    }

    #[test]
    fn test_adjacent_indices() {
        assert_eq!(adjacent_indices(0).collect::<Vec<_>>(), vec![4, 1]);
        assert_eq!(adjacent_indices(3).collect::<Vec<_>>(), vec![7, 2]);
        assert_eq!(adjacent_indices(15).collect::<Vec<_>>(), vec![11, 14]);
        assert_eq!(adjacent_indices(12).collect::<Vec<_>>(), vec![8, 13]);
        assert_eq!(adjacent_indices(5).collect::<Vec<_>>(), vec![1, 9, 4, 6]);
        assert_eq!(adjacent_indices(10).count(), 4);
        assert_eq!(adjacent_indices(1).collect::<Vec<_>>(), vec![5, 0, 2]);
        assert_eq!(adjacent_indices(7).collect::<Vec<_>>(), vec![3, 11, 6]);
    }

    #[test]
    fn test_crop_origin() {
        assert_eq!(crop_origin(1), (0, 0));
        assert_eq!(crop_origin(5), (1, 0));
        assert_eq!(crop_origin(15), (3, 2));
        assert_eq!(crop_origin(BLANK), (3, 3));
    }

    #[test]
    fn test_is_solvable() {
        assert!(is_solvable(&SOLVED));

        let mut swapped = SOLVED;
        swapped.swap(13, 14);
        assert!(!is_solvable(&swapped));

        let mut slid = SOLVED;
        slid.swap(14, 15);
        assert!(is_solvable(&slid));

        let mut lifted = SOLVED;
        lifted.swap(11, 15);
        assert!(is_solvable(&lifted));
    }
}

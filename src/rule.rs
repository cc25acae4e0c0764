/// Offsets of the eight Moore neighbors.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Toroidal coordinate: `coord + offset` taken modulo `len`.
///
/// `offset` must lie in `-1..=1`.
pub fn wrap(coord: usize, offset: isize, len: usize) -> usize {
    debug_assert!(coord < len && (-1..=1).contains(&offset));
    match offset {
        -1 if coord == 0 => len - 1,
        -1 => coord - 1,
        1 if coord + 1 == len => 0,
        1 => coord + 1,
        _ => coord,
    }
}

/// Number of alive neighbors of `(x, y)` in a column-major generation.
pub fn count_neighbors(cells: &[bool], width: usize, height: usize, x: usize, y: usize) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            let (nx, ny) = (wrap(x, dx, width), wrap(y, dy, height));
            cells[nx * height + ny]
        })
        .count()
}

/// B3/S23.
pub fn next_state(alive: bool, neighbors: usize) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_edges() {
        assert_eq!(wrap(9, 1, 10), 0);
        assert_eq!(wrap(0, -1, 10), 9);
        assert_eq!(wrap(4, 1, 10), 5);
        assert_eq!(wrap(4, 0, 10), 4);
        assert_eq!(wrap(0, 1, 1), 0);
        assert_eq!(wrap(0, -1, 1), 0);
    }

    #[test]
    fn corner_sees_opposite_corners() {
        let (w, h) = (10, 8);
        let mut cells = vec![false; w * h];
        for &(x, y) in &[(9, 7), (9, 0), (0, 7), (1, 1)] {
            cells[x * h + y] = true;
        }
        assert_eq!(count_neighbors(&cells, w, h, 0, 0), 4);
        assert_eq!(count_neighbors(&cells, w, h, 5, 4), 0);
    }

    #[test]
    fn transition_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3);
            assert_eq!(next_state(false, n), n == 3);
        }
    }
}

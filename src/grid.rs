use crate::{Error, Result};

const DEPTH: usize = 3;

/// Toroidal field holding the last three generations.
///
/// Cells are stored column-major: `(x, y)` lives at `x * height + y`.
/// The slot after `head` is the oldest generation and doubles as the
/// scratch buffer a step writes into.
pub struct Grid {
    gens: [Vec<bool>; DEPTH],
    head: usize,
    width: usize,
    height: usize,
    generation: u64,
}

impl Grid {
    /// Create a dead field; fails if either side is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Config(format!("{width}x{height} grid has no cells")));
        }
        let size = width
            .checked_mul(height)
            .ok_or_else(|| Error::Config(format!("{width}x{height} grid is too large")))?;
        Ok(Self {
            gens: std::array::from_fn(|_| vec![false; size]),
            head: 0,
            width,
            height,
            generation: 0,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) is outside {}x{}",
            self.width,
            self.height
        );
        x * self.height + y
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.current()[self.index(x, y)]
    }

    /// Direct mutation of the current generation, bypassing the rule.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.gens[self.head][idx] = alive;
    }

    pub fn current(&self) -> &[bool] {
        &self.gens[self.head]
    }

    pub fn prior(&self) -> &[bool] {
        &self.gens[(self.head + DEPTH - 1) % DEPTH]
    }

    pub fn two_back(&self) -> &[bool] {
        &self.gens[(self.head + 1) % DEPTH]
    }

    pub fn population(&self) -> usize {
        self.current().iter().filter(|&&c| c).count()
    }

    /// Replace every retained generation with `cells` and restart counting.
    pub fn fill(&mut self, cells: &[bool]) {
        assert_eq!(cells.len(), self.width * self.height);
        for buf in self.gens.iter_mut() {
            buf.copy_from_slice(cells);
        }
        self.generation = 0;
    }

    /// Compute the next generation with `f` and publish it.
    ///
    /// `f` receives the frozen current generation and the scratch buffer.
    /// The ring only rotates when `f` succeeds, so a failed step leaves
    /// the current generation in place.
    pub fn advance<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&[bool], &mut [bool]) -> Result<()>,
    {
        let scratch = (self.head + 1) % DEPTH;
        let (src, next) = read_write(&mut self.gens, self.head, scratch);
        f(src, next)?;
        self.head = scratch;
        self.generation += 1;
        Ok(())
    }
}

/// Borrows slot `read` shared and slot `write` exclusively.
fn read_write(gens: &mut [Vec<bool>], read: usize, write: usize) -> (&[bool], &mut [bool]) {
    assert_ne!(read, write);
    if read < write {
        let (lo, hi) = gens.split_at_mut(write);
        (lo[read].as_slice(), hi[0].as_mut_slice())
    } else {
        let (lo, hi) = gens.split_at_mut(read);
        (hi[0].as_slice(), lo[write].as_mut_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_sides() {
        assert!(matches!(Grid::new(0, 5), Err(Error::Config(_))));
        assert!(matches!(Grid::new(5, 0), Err(Error::Config(_))));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new(7, 3).unwrap();
        grid.set(6, 2, true);
        grid.set(0, 1, true);
        assert!(grid.get(6, 2) && grid.get(0, 1));
        assert!(!grid.get(1, 0));
        assert_eq!(grid.population(), 2);
        assert!(grid.current()[6 * 3 + 2]);
    }

    #[test]
    #[should_panic]
    fn get_does_not_wrap() {
        Grid::new(4, 4).unwrap().get(4, 0);
    }

    #[test]
    fn ring_rotates_on_success() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, true);
        let first = grid.current().to_vec();
        grid.advance(|_, next| {
            next.fill(true);
            Ok(())
        })
        .unwrap();
        assert_eq!(grid.generation(), 1);
        assert_eq!(grid.prior(), &first[..]);
        assert!(grid.current().iter().all(|&c| c));

        grid.advance(|src, next| {
            next.copy_from_slice(src);
            next[3] = false;
            Ok(())
        })
        .unwrap();
        assert_eq!(grid.two_back(), &first[..]);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn failed_advance_publishes_nothing() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, true);
        let before = grid.current().to_vec();
        let err = grid.advance(|_, next| {
            next.fill(true);
            Err(Error::WorkerFailure { partition: 0 })
        });
        assert!(matches!(err, Err(Error::WorkerFailure { partition: 0 })));
        assert_eq!(grid.current(), &before[..]);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.two_back().len(), 9);
    }

    #[test]
    fn panicking_advance_keeps_every_buffer() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 2, true);
        let before = grid.current().to_vec();
        let unwound = catch_unwind(AssertUnwindSafe(|| {
            grid.advance(|_, next| {
                next.fill(true);
                panic!("pool went away");
            })
        }));
        assert!(unwound.is_err());
        assert_eq!(grid.current(), &before[..]);
        assert_eq!(grid.two_back().len(), 9);
        assert_eq!(grid.generation(), 0);

        grid.advance(|src, next| {
            next.copy_from_slice(src);
            Ok(())
        })
        .unwrap();
        assert_eq!(grid.current(), &before[..]);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn huge_sides_rejected() {
        assert!(matches!(Grid::new(usize::MAX, 2), Err(Error::Config(_))));
    }

    #[test]
    fn fill_resets_all_generations() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.advance(|_, next| {
            next.fill(true);
            Ok(())
        })
        .unwrap();
        let cells = [true, false, true, false, true, false];
        grid.fill(&cells);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.current(), &cells[..]);
        assert_eq!(grid.prior(), &cells[..]);
        assert_eq!(grid.two_back(), &cells[..]);
    }
}

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type TileCount = u16;

/// Two-dimensional 1-based coordinates `(x, y)`, with `1 <= x <= width` and
/// `1 <= y <= height`.
pub type Coord2 = (Coord, Coord);

/// Conversion from the player-facing 1-based coordinate system to zero-based
/// storage indices.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    // storage is (row, column), so y selects the row
    fn to_nd_index(self) -> Self::Output {
        [self.1 as usize - 1, self.0 as usize - 1]
    }
}

pub const fn mult(a: Coord, b: Coord) -> TileCount {
    let a = a as TileCount;
    let b = b as TileCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it stays within
/// the 1-based bounds `[1, width] x [1, height]`.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (width, height) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x < 1 || next_x > width {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y < 1 || next_y > height {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterator over the up-to-8 in-bounds neighbors of a coordinate.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

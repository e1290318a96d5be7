/// Single coordinate axis used for the board side and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, row then column.
pub type Coord2 = (Coord, Coord);

/// Number of cells on a square board of the given side.
pub fn square(side: Coord) -> CellCount {
    // 255² still fits
    CellCount::from(side) * CellCount::from(side)
}

/// ndarray index of a board position.
pub(crate) fn nd((x, y): Coord2) -> [usize; 2] {
    [x.into(), y.into()]
}

/// In-bounds neighbors of `center` on a square board, row-major over the
/// relative offsets. The count pass and the flood-fill both walk this order.
pub fn neighbors((x, y): Coord2, side: Coord) -> impl Iterator<Item = Coord2> {
    (-1i8..=1)
        .flat_map(|dx| (-1i8..=1).map(move |dy| (dx, dy)))
        .filter(|&offset| offset != (0, 0))
        .filter_map(move |(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < side && ny < side).then_some((nx, ny))
        })
}

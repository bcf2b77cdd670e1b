use patience_core::Hit;
use ratatui::layout::Rect;

pub const CARD_WIDTH: u16 = 6;
pub const TABLEAU_X0: u16 = 1;
pub const TABLEAU_Y0: u16 = 2;
pub const TABLEAU_HEIGHT: u16 = 20;
pub const SIDE_X0: u16 = 45;
pub const CELL_WIDTH: u16 = 7;
pub const CELL_HEIGHT: u16 = 3;
pub const CELL_STRIDE: u16 = 8;
pub const FOUNDATION_Y: u16 = 2;
pub const STOCK_Y: u16 = 6;
pub const LOG_Y: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegionTarget {
    Column(usize),
    Foundation(usize),
    Stock,
    Exposed,
}

#[derive(Debug, Clone, Copy)]
struct Region {
    x0: u16,
    x1: u16,
    y0: u16,
    y1: u16,
    target: RegionTarget,
}

impl Region {
    const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

const fn column_region(index: usize) -> Region {
    let x0 = TABLEAU_X0 + index as u16 * CARD_WIDTH;
    Region {
        x0,
        x1: x0 + CARD_WIDTH - 1,
        y0: TABLEAU_Y0,
        y1: TABLEAU_Y0 + TABLEAU_HEIGHT - 1,
        target: RegionTarget::Column(index),
    }
}

const fn cell_region(index: usize, y0: u16, target: RegionTarget) -> Region {
    let x0 = SIDE_X0 + index as u16 * CELL_STRIDE;
    Region {
        x0,
        x1: x0 + CELL_WIDTH - 1,
        y0,
        y1: y0 + CELL_HEIGHT - 1,
        target,
    }
}

/// The whole click map as one declarative table. Rearranging the screen
/// means editing this table, nothing else.
const REGIONS: [Region; 13] = [
    column_region(0),
    column_region(1),
    column_region(2),
    column_region(3),
    column_region(4),
    column_region(5),
    column_region(6),
    cell_region(0, FOUNDATION_Y, RegionTarget::Foundation(0)),
    cell_region(1, FOUNDATION_Y, RegionTarget::Foundation(1)),
    cell_region(2, FOUNDATION_Y, RegionTarget::Foundation(2)),
    cell_region(3, FOUNDATION_Y, RegionTarget::Foundation(3)),
    cell_region(0, STOCK_Y, RegionTarget::Stock),
    cell_region(1, STOCK_Y, RegionTarget::Exposed),
];

/// Translate a screen coordinate into the core's (pile, depth) vocabulary.
/// One column row per card, so depth falls straight out of the y offset;
/// the core clamps depths past the top of the stack.
pub fn hit_test(x: u16, y: u16) -> Option<Hit> {
    let region = REGIONS.iter().find(|region| region.contains(x, y))?;
    Some(match region.target {
        RegionTarget::Column(index) => Hit::Column {
            index,
            depth: (y - region.y0) as usize,
        },
        RegionTarget::Foundation(index) => Hit::Foundation(index),
        RegionTarget::Stock => Hit::Stock,
        RegionTarget::Exposed => Hit::Exposed,
    })
}

pub fn column_rect(index: usize) -> Rect {
    let region = column_region(index);
    Rect::new(
        region.x0,
        region.y0,
        CARD_WIDTH,
        TABLEAU_HEIGHT,
    )
}

pub fn foundation_rect(index: usize) -> Rect {
    let x0 = SIDE_X0 + index as u16 * CELL_STRIDE;
    Rect::new(x0, FOUNDATION_Y, CELL_WIDTH, CELL_HEIGHT)
}

pub fn stock_rect() -> Rect {
    Rect::new(SIDE_X0, STOCK_Y, CELL_WIDTH, CELL_HEIGHT)
}

pub fn exposed_rect() -> Rect {
    Rect::new(SIDE_X0 + CELL_STRIDE, STOCK_Y, CELL_WIDTH, CELL_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_bands_map_to_their_index_and_depth() {
        assert_eq!(
            hit_test(TABLEAU_X0, TABLEAU_Y0),
            Some(Hit::Column { index: 0, depth: 0 })
        );
        assert_eq!(
            hit_test(TABLEAU_X0 + CARD_WIDTH, TABLEAU_Y0 + 3),
            Some(Hit::Column { index: 1, depth: 3 })
        );
        assert_eq!(
            hit_test(TABLEAU_X0 + 6 * CARD_WIDTH + CARD_WIDTH - 1, TABLEAU_Y0 + 7),
            Some(Hit::Column { index: 6, depth: 7 })
        );
    }

    #[test]
    fn foundation_cells_map_in_index_order() {
        for index in 0..4 {
            let x = SIDE_X0 + index as u16 * CELL_STRIDE + 1;
            assert_eq!(hit_test(x, FOUNDATION_Y + 1), Some(Hit::Foundation(index)));
        }
    }

    #[test]
    fn stock_and_exposed_cells_are_distinct() {
        assert_eq!(hit_test(SIDE_X0 + 1, STOCK_Y + 1), Some(Hit::Stock));
        assert_eq!(
            hit_test(SIDE_X0 + CELL_STRIDE + 1, STOCK_Y + 1),
            Some(Hit::Exposed)
        );
    }

    #[test]
    fn dead_space_hits_nothing() {
        assert_eq!(hit_test(0, 0), None);
        assert_eq!(hit_test(SIDE_X0 - 1, FOUNDATION_Y), None);
        assert_eq!(hit_test(SIDE_X0 + 4 * CELL_STRIDE, FOUNDATION_Y), None);
        assert_eq!(hit_test(TABLEAU_X0, TABLEAU_Y0 + TABLEAU_HEIGHT), None);
    }
}

use super::settings::GameSettings;
use super::types::Point;

/// Inclusive range of cell origins a snake segment or food item may occupy.
///
/// The left and top edges keep one cell of margin. The upper limits are
/// `width - cell` and `height - 2 * cell`, snapped down to the grid, so the
/// bottom row above the score bar stays free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayableBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    pub cell: i32,
    center: Point,
}

impl PlayableBounds {
    pub fn from_settings(settings: &GameSettings) -> Self {
        let cell = settings.cell_size.max(1);
        let snap = |value: i32| value.div_euclid(cell) * cell;

        // Saturating so oversized cells yield an empty area instead of overflowing.
        Self {
            min_x: cell,
            max_x: snap(settings.width.saturating_sub(cell)),
            min_y: cell,
            max_y: snap(settings.height.saturating_sub(cell.saturating_mul(2))),
            cell,
            center: Point::new(snap(settings.width / 2), snap(settings.height / 2)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    pub fn columns(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        ((self.max_x - self.min_x) / self.cell + 1) as usize
    }

    pub fn rows(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        ((self.max_y - self.min_y) / self.cell + 1) as usize
    }

    pub fn cell_count(&self) -> usize {
        self.columns().saturating_mul(self.rows())
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    pub fn cell_at(&self, column: usize, row: usize) -> Point {
        Point::new(
            self.min_x + column as i32 * self.cell,
            self.min_y + row as i32 * self.cell,
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let columns = self.columns();
        (0..self.rows()).flat_map(move |row| (0..columns).map(move |column| self.cell_at(column, row)))
    }

    /// Board centre snapped to the cell grid; where a fresh snake's head goes.
    pub fn center(&self) -> Point {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_bounds() {
        let bounds = GameSettings::default().bounds();
        assert_eq!(bounds.min_x, 20);
        assert_eq!(bounds.max_x, 580);
        assert_eq!(bounds.min_y, 20);
        assert_eq!(bounds.max_y, 560);
        assert_eq!(bounds.columns(), 29);
        assert_eq!(bounds.rows(), 28);
        assert_eq!(bounds.center(), Point::new(300, 300));
    }

    #[test]
    fn test_contains_respects_insets() {
        let bounds = GameSettings::default().bounds();
        assert!(bounds.contains(Point::new(20, 20)));
        assert!(bounds.contains(Point::new(580, 560)));
        assert!(!bounds.contains(Point::new(0, 100)));
        assert!(!bounds.contains(Point::new(600, 100)));
        assert!(!bounds.contains(Point::new(100, 580)));
        assert!(!bounds.contains(Point::new(100, 0)));
    }

    #[test]
    fn test_cells_enumerates_whole_area() {
        let settings = GameSettings {
            width: 80,
            height: 100,
            ..GameSettings::default()
        };
        let bounds = settings.bounds();
        let cells: Vec<Point> = bounds.cells().collect();
        assert_eq!(cells.len(), bounds.cell_count());
        assert_eq!(cells.len(), 3 * 3);
        assert!(cells.iter().all(|p| bounds.contains(*p)));
        assert!(cells.iter().all(|p| p.x % 20 == 0 && p.y % 20 == 0));
    }

    #[test]
    fn test_center_snaps_to_grid() {
        let settings = GameSettings {
            width: 610,
            height: 590,
            ..GameSettings::default()
        };
        assert_eq!(settings.bounds().center(), Point::new(300, 280));
    }

    #[test]
    fn test_oversized_cell_gives_empty_area() {
        let settings = GameSettings {
            width: 2_000_000_000,
            height: 2_000_000_000,
            cell_size: 1_500_000_000,
            ..GameSettings::default()
        };
        let bounds = settings.bounds();
        assert!(bounds.is_empty());
        assert_eq!(bounds.cell_count(), 0);
    }
}

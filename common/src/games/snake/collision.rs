//! Per-tick collision checks against the post-move head. All comparisons are
//! exact cell equality.

use super::bounds::PlayableBounds;
use super::snake::Snake;
use super::types::{DeathReason, FoodItem, Point};

pub fn food_hit(head: Point, food: &FoodItem) -> bool {
    head == food.position
}

pub fn wall_hit(head: Point, bounds: &PlayableBounds) -> bool {
    !bounds.contains(head)
}

pub fn self_hit(snake: &Snake) -> bool {
    snake.hits_itself()
}

pub fn poison_hit(head: Point, poison: &[FoodItem]) -> bool {
    poison.iter().any(|item| item.position == head)
}

/// First fatal collision in resolution order: wall, self, poison.
pub fn first_fatal(snake: &Snake, bounds: &PlayableBounds, poison: &[FoodItem]) -> Option<DeathReason> {
    let head = snake.head();
    if wall_hit(head, bounds) {
        return Some(DeathReason::WallCollision);
    }
    if self_hit(snake) {
        return Some(DeathReason::SelfCollision);
    }
    if poison_hit(head, poison) {
        return Some(DeathReason::PoisonCollision);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::{Direction, FoodKind, GameSettings};

    #[test]
    fn test_food_hit_is_exact() {
        let food = FoodItem::new(Point::new(120, 100), FoodKind::Regular);
        assert!(food_hit(Point::new(120, 100), &food));
        assert!(!food_hit(Point::new(121, 100), &food));
        assert!(!food_hit(Point::new(120, 99), &food));
    }

    #[test]
    fn test_wall_hit_outside_insets() {
        let bounds = GameSettings::default().bounds();
        assert!(!wall_hit(Point::new(20, 20), &bounds));
        assert!(wall_hit(Point::new(0, 20), &bounds));
        assert!(!wall_hit(Point::new(580, 560), &bounds));
        assert!(wall_hit(Point::new(600, 20), &bounds));
        assert!(wall_hit(Point::new(20, 580), &bounds));
    }

    #[test]
    fn test_poison_hit_is_exact() {
        let poison = vec![
            FoodItem::new(Point::new(40, 40), FoodKind::Poison),
            FoodItem::new(Point::new(60, 40), FoodKind::Poison),
        ];
        assert!(poison_hit(Point::new(60, 40), &poison));
        assert!(!poison_hit(Point::new(61, 40), &poison));
        assert!(!poison_hit(Point::new(60, 40), &[]));
    }

    #[test]
    fn test_wall_reported_before_poison() {
        let bounds = GameSettings::default().bounds();
        let snake = Snake::from_body(
            vec![Point::new(0, 100), Point::new(20, 100)],
            Direction::Left,
            20,
        )
        .unwrap();
        let poison = vec![FoodItem::new(Point::new(0, 100), FoodKind::Poison)];
        assert_eq!(
            first_fatal(&snake, &bounds, &poison),
            Some(DeathReason::WallCollision)
        );
    }

    #[test]
    fn test_self_reported_before_poison() {
        let bounds = GameSettings::default().bounds();
        let snake = Snake::from_body(
            vec![
                Point::new(100, 100),
                Point::new(120, 100),
                Point::new(100, 100),
            ],
            Direction::Left,
            20,
        )
        .unwrap();
        let poison = vec![FoodItem::new(Point::new(100, 100), FoodKind::Poison)];
        assert_eq!(
            first_fatal(&snake, &bounds, &poison),
            Some(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn test_no_collision() {
        let bounds = GameSettings::default().bounds();
        let snake = Snake::new(Point::new(300, 300), Direction::Right, 20);
        assert_eq!(first_fatal(&snake, &bounds, &[]), None);
    }
}

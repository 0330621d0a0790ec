use common::games::snake::FoodKind;
use egui::Color32;

use crate::config::SnakeColor;

pub const BOARD_BACKGROUND: Color32 = Color32::from_rgb(24, 24, 24);
pub const PLAYFIELD_BACKGROUND: Color32 = Color32::from_rgb(126, 168, 104);
/// Drawn around every snake segment so dark bodies stay visible.
pub const SEGMENT_OUTLINE: Color32 = Color32::from_rgb(236, 236, 224);

pub fn snake_body_color(color: SnakeColor) -> Color32 {
    match color {
        SnakeColor::Black => Color32::from_rgb(10, 10, 10),
        SnakeColor::Blue => Color32::from_rgb(40, 90, 220),
        SnakeColor::Red => Color32::from_rgb(200, 30, 30),
        SnakeColor::Pink => Color32::from_rgb(240, 110, 180),
    }
}

/// Lighter shade so the head stands out from the body.
pub fn snake_head_color(color: SnakeColor) -> Color32 {
    let body = snake_body_color(color);
    let lighten = |c: u8| c.saturating_add(60);
    Color32::from_rgb(lighten(body.r()), lighten(body.g()), lighten(body.b()))
}

pub fn food_color(kind: FoodKind) -> Color32 {
    match kind {
        FoodKind::Regular => Color32::WHITE,
        FoodKind::Rare => Color32::from_rgb(230, 40, 40),
        FoodKind::Golden => Color32::GOLD,
        FoodKind::Poison => Color32::from_rgb(140, 40, 200),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(color: Color32) -> f32 {
        0.2126 * color.r() as f32 + 0.7152 * color.g() as f32 + 0.0722 * color.b() as f32
    }

    #[test]
    fn test_default_black_snake_contrasts_with_playfield() {
        let playfield = luminance(PLAYFIELD_BACKGROUND);
        assert!(playfield - luminance(snake_body_color(SnakeColor::Black)) > 100.0);
        assert!(luminance(SEGMENT_OUTLINE) - playfield > 60.0);
    }

    #[test]
    fn test_head_is_lighter_than_body() {
        for color in SnakeColor::ALL {
            let body = snake_body_color(color);
            let head = snake_head_color(color);
            assert!(head.r() >= body.r() && head.g() >= body.g() && head.b() >= body.b());
            assert_ne!(head, body);
        }
    }

    #[test]
    fn test_poison_differs_from_every_consumable() {
        let poison = food_color(FoodKind::Poison);
        for kind in [FoodKind::Regular, FoodKind::Rare, FoodKind::Golden] {
            assert_ne!(food_color(kind), poison);
        }
    }
}

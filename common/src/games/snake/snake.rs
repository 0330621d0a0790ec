use std::collections::VecDeque;

use crate::GameError;
use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
    cell: i32,
    /// Where the last segment sat before the most recent move. Taken by `grow`.
    vacated_tail: Option<Point>,
}

impl Snake {
    pub fn new(head: Point, direction: Direction, cell: i32) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(head);
        body.push_back(head.offset(direction.opposite(), cell));

        Self {
            body,
            direction,
            pending_direction: None,
            cell,
            vacated_tail: None,
        }
    }

    pub fn from_body(body: Vec<Point>, direction: Direction, cell: i32) -> Result<Self, GameError> {
        if body.len() < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "Snake needs at least 2 segments, got {}",
                body.len()
            )));
        }

        Ok(Self {
            body: body.into(),
            direction,
            pending_direction: None,
            cell,
            vacated_tail: None,
        })
    }

    /// Moves every segment into its predecessor's cell and the head one cell
    /// towards `direction`.
    pub fn move_step(&mut self, direction: Direction) {
        let Some(&head) = self.body.front() else {
            return;
        };

        self.vacated_tail = self.body.pop_back();
        self.body.push_front(head.offset(direction, self.cell));
        self.direction = direction;
    }

    /// Appends a segment on the cell the tail just left, so the body keeps
    /// trailing exactly along its path. Only valid right after `move_step`.
    pub fn grow(&mut self) -> bool {
        match self.vacated_tail.take() {
            Some(tail) => {
                self.body.push_back(tail);
                true
            }
            None => false,
        }
    }

    /// Queues a turn for the next tick. The latest accepted call wins.
    /// Turning straight back into the neck is refused unless `allow_reversal`.
    pub fn set_pending_direction(&mut self, direction: Direction, allow_reversal: bool) -> bool {
        if !allow_reversal && direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn take_pending_direction(&mut self) -> Direction {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }
}

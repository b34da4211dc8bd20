use std::collections::HashSet;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies inside `[0, width) x [0, height)`.
    pub fn in_bounds(&self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Pos { x, y }
    }
}

// Action
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Movement {
    Right,
    Up,
    Left,
    Down,
}

impl Movement {
    /// Fixed enumeration order. Distance ties between candidates keep this order.
    pub const ALL: [Movement; 4] = [Movement::Right, Movement::Up, Movement::Left, Movement::Down];

    pub fn into_vector(self) -> (i32, i32)
    {
        match self {
            Movement::Right => ( 1, 0),
            Movement::Up    => ( 0,-1),
            Movement::Left  => (-1, 0),
            Movement::Down  => ( 0, 1),
        }
    }

    pub fn opposite(self) -> Movement
    {
        match self {
            Movement::Right => Movement::Left,
            Movement::Up    => Movement::Down,
            Movement::Left  => Movement::Right,
            Movement::Down  => Movement::Up,
        }
    }

    pub fn apply(self, pos: Pos) -> Pos {
        let (dx, dy) = self.into_vector();
        Pos { x: pos.x + dx, y: pos.y + dy }
    }
}

/// What the agent sees when it considers one action from one cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Perception {
    pub position: Pos,
    pub is_wall: bool,
}

/// Immutable maze knowledge shared by every agent bound to it.
#[derive(Debug, Clone)]
pub struct Env {
    width: usize,
    height: usize,
    walls: HashSet<Pos>,
    start: Pos,
    finish: Pos,
}


impl Env {
    pub fn new(width: usize, height: usize, walls: HashSet<Pos>, start: Pos, finish: Pos) -> Self
    {
        Self {
            width,
            height,
            walls,
            start,
            finish,
        }
    }

    pub fn width(&self) -> usize { self.width }

    pub fn height(&self) -> usize { self.height }

    pub fn walls(&self) -> &HashSet<Pos> { &self.walls }

    pub fn start_pos(&self) -> Pos { self.start }

    pub fn finish_pos(&self) -> Pos { self.finish }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.walls.contains(&pos)
    }

    /// Applies `movement` from `pos` without any clamping. Cells outside the grid are never
    /// walls unless listed, so an unfenced maze lets the agent walk off the edge.
    pub fn perceive(&self, pos: Pos, movement: Movement) -> Perception
    {
        let position = movement.apply(pos);
        Perception {
            position,
            is_wall: self.is_wall(position),
        }
    }
}

/// Straight-line distance between two cells.
pub fn distance(from: Pos, to: Pos) -> f64 {
    let dx = f64::from(from.x - to.x);
    let dy = f64::from(from.y - to.y);
    (dx * dx + dy * dy).sqrt()
}

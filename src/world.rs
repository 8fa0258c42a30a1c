use super::vec2::Vec2;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub id: i32,
    pub pos: Vec2,
}

impl DataPoint {
    pub fn new(id: i32, pos: Vec2) -> Self {
        DataPoint { id, pos }
    }
}

/// An enemy as the referee reports it, before any prediction.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub id: i32,
    pub pos: Vec2,
    pub life: i32,
}

impl Enemy {
    pub fn new(id: i32, pos: Vec2, life: i32) -> Self {
        Enemy { id, pos, life }
    }
}

/// Everything the referee tells us about one turn. Input order of data
/// points and enemies is kept since tie-breaks depend on it.
#[derive(Default, Debug, Clone)]
pub struct World {
    pub me: Vec2,
    pub data_points: Vec<DataPoint>,
    pub enemies: Vec<Enemy>,
    pub iter: i32,
}

impl World {
    pub fn data_point_positions(&self) -> Vec<Vec2> {
        self.data_points.iter().map(|dp| dp.pos).collect()
    }
}

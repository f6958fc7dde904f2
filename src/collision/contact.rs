use glam::Vec2;

/// Contact between two overlapping circles, produced by the narrow phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleContact {
    /// Index of the first body (A) in the world's body list.
    pub index_a: usize,
    /// Index of the second body (B).
    pub index_b: usize,
    /// Unit vector pointing from B towards A.
    pub normal: Vec2,
    /// Center distance at detection time.
    pub distance: f32,
    /// `r_a + r_b - distance`, always positive.
    pub depth: f32,
    /// The centers coincided and `normal` is the fallback direction.
    pub degenerate: bool,
}

impl CircleContact {
    /// Displacement applied to each body, half the penetration depth.
    pub fn half_depth(&self) -> f32 {
        self.depth / 2.0
    }
}

/// Which arena wall a body touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Bottom,
    Top,
    Right,
    Left,
}

/// Per-body record of wall corrections made during one wall pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WallHits {
    pub bottom: bool,
    pub top: bool,
    pub right: bool,
    pub left: bool,
}

impl WallHits {
    pub fn mark(&mut self, wall: Wall) {
        match wall {
            Wall::Bottom => self.bottom = true,
            Wall::Top => self.top = true,
            Wall::Right => self.right = true,
            Wall::Left => self.left = true,
        }
    }

    pub fn count(&self) -> usize {
        [self.bottom, self.top, self.right, self.left]
            .into_iter()
            .filter(|hit| *hit)
            .count()
    }

    pub fn any(&self) -> bool {
        self.count() > 0
    }
}

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, other: f64) -> Vec2 {
        Vec2 {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

/// Prints the integral `x y` pair the game protocol expects.
impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x.floor() as i64, self.y.floor() as i64)
    }
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0., y: 0. };

    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    pub fn len(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(self, other: Vec2) -> f64 {
        (other - self).len()
    }

    /// Sum of the offsets from `self` to every point in `others`.
    ///
    /// With a single point this is the plain direction vector. With several
    /// points the offsets add up instead of averaging, so a group of points
    /// pulls harder than a lone one. No points gives the zero vector.
    pub fn towards<'a, I>(self, others: I) -> Vec2
    where
        I: IntoIterator<Item = &'a Vec2>,
    {
        others
            .into_iter()
            .fold(Vec2::ZERO, |acc, &other| acc + (other - self))
    }

    /// Scales the vector down to at most `max_len` and floors it onto the
    /// integer grid. Shorter vectors are only floored; a zero vector stays
    /// zero.
    pub fn truncate_to(self, max_len: f64) -> Vec2 {
        let len = self.len();
        if len == 0. {
            return Vec2::ZERO;
        }

        let ratio = (max_len / len).min(1.);
        (self * ratio).floor()
    }

    pub fn relative_to(self, origin: Vec2) -> Vec2 {
        self + origin
    }

    pub fn floor(self) -> Vec2 {
        Vec2 {
            x: self.x.floor(),
            y: self.y.floor(),
        }
    }

    pub fn clamp(self, lt: Vec2, rb: Vec2) -> Vec2 {
        self.max(lt).min(rb)
    }

    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }
}

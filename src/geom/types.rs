//! Core geometry types for the integer circuit grid

use std::fmt;
use std::str::FromStr;

/// A point on the circuit grid, used both for placement anchors and for
/// absolute pin positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a relative offset.
    pub fn translate(&self, dx: i32, dy: i32) -> Location {
        Location::new(self.x + dx, self.y + dy)
    }

    /// Offset of `self` relative to `anchor`.
    pub fn offset_from(&self, anchor: Location) -> (i32, i32) {
        (self.x - anchor.x, self.y - anchor.y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Location {
    type Err = String;

    /// Accepts `x,y` or `(x,y)`, with surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let mut parts = inner.splitn(2, ',');
        let x = parts.next().map(str::trim).unwrap_or("");
        let y = parts.next().map(str::trim).unwrap_or("");
        if x.is_empty() || y.is_empty() {
            return Err(format!("invalid location '{}': expected x,y or (x,y)", s));
        }
        let x = x
            .parse::<i32>()
            .map_err(|_| format!("invalid location '{}': x is not an integer", s))?;
        let y = y
            .parse::<i32>()
            .map_err(|_| format!("invalid location '{}': y is not an integer", s))?;
        Ok(Location::new(x, y))
    }
}

/// Cardinal facing of a component. Port templates and shape bounds are
/// declared for an east-facing component and rotated from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    pub const TOKENS: [&'static str; 4] = ["east", "west", "north", "south"];

    /// Look up a direction by its canonical token.
    pub fn from_token(token: &str) -> Option<Direction> {
        match token {
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            _ => None,
        }
    }

    /// Rotate an east-relative offset into this facing.
    pub fn rotate(&self, dx: i32, dy: i32) -> (i32, i32) {
        match self {
            Direction::East => (dx, dy),
            Direction::West => (-dx, -dy),
            Direction::North => (dy, -dx),
            Direction::South => (-dy, dx),
        }
    }
}

/// An axis-aligned integer rectangle. For shape templates the coordinates
/// are relative to the anchor; after placement they are absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Translate by the anchor location.
    pub fn translate(&self, anchor: Location) -> Bounds {
        Bounds::new(self.x + anchor.x, self.y + anchor.y, self.width, self.height)
    }

    /// Check containment, edges inclusive.
    pub fn contains(&self, loc: Location) -> bool {
        loc.x >= self.x && loc.x <= self.right() && loc.y >= self.y && loc.y <= self.bottom()
    }

    /// Rotate an east-relative shape rectangle into the given facing.
    pub fn rotate(&self, facing: Direction) -> Bounds {
        let (x0, y0) = facing.rotate(self.x, self.y);
        let (x1, y1) = facing.rotate(self.right(), self.bottom());
        let left = x0.min(x1);
        let top = y0.min(y1);
        Bounds::new(left, top, (x1 - x0).abs(), (y1 - y0).abs())
    }
}

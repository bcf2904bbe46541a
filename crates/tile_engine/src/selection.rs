use crate::{Position, Size};

/// Inclusive cell bounds, `top <= bottom` and `left <= right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Normalizes two free corners.
    pub fn from_corners(a: Position, b: Position) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x, max.y)
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.left, self.top)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn contains(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        self.left <= pos.x && pos.x <= self.right && self.top <= pos.y && pos.y <= self.bottom
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Cells of the bounds in raster order.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let Bounds { left, top, right, bottom } = *self;
        (top..=bottom).flat_map(move |y| (left..=right).map(move |x| Position::new(x, y)))
    }
}

/// One rubber band rectangle. Anchor and lead are the free drag corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRect {
    pub anchor: Position,
    pub lead: Position,

    /// Only becomes true once the drag has entered the grid.
    pub visible: bool,
}

impl SelectionRect {
    pub fn new(pos: impl Into<Position>) -> Self {
        let pos = pos.into();
        Self {
            anchor: pos,
            lead: pos,
            visible: false,
        }
    }

    /// Visible rectangle spanning the two corners.
    pub fn from_corners(anchor: impl Into<Position>, lead: impl Into<Position>) -> Self {
        Self {
            anchor: anchor.into(),
            lead: lead.into(),
            visible: true,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.anchor, self.lead)
    }
}

/// Ordered set of selection rectangles. Later rectangles were added later.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    rects: Vec<SelectionRect>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(rect: SelectionRect) -> Self {
        Self { rects: vec![rect] }
    }

    pub fn rects(&self) -> &[SelectionRect] {
        &self.rects
    }

    pub fn push(&mut self, rect: SelectionRect) {
        self.rects.push(rect);
    }

    pub fn last_mut(&mut self) -> Option<&mut SelectionRect> {
        self.rects.last_mut()
    }

    pub fn pop(&mut self) -> Option<SelectionRect> {
        self.rects.pop()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Visible rectangles in insertion order.
    pub fn visible(&self) -> impl Iterator<Item = &SelectionRect> {
        self.rects.iter().filter(|r| r.visible)
    }

    pub fn has_visible(&self) -> bool {
        self.visible().next().is_some()
    }

    /// Bounding box over all visible rectangles, `None` if nothing is visible.
    pub fn bounds(&self) -> Option<Bounds> {
        self.visible().map(SelectionRect::bounds).reduce(|a, b| a.union(&b))
    }

    /// True if `pos` lies within any visible rectangle (inclusive).
    pub fn contains(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        self.visible().any(|r| r.bounds().contains(pos))
    }
}

//! Anchored level resize
//!
//! The anchor decides which side of the old content stays put. Growing pads
//! the opposite side(s) with empty tiles, shrinking crops them.

use serde::{Deserialize, Serialize};

use crate::{limits, EngineError, LayerKind, Level, Result, Size, EMPTY_TILE};

/// One of the 9 resize anchors: 4 corners, 4 edges and the center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    NorthWest,
    North,
    NorthEast,
    West,
    #[default]
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

/// Where an anchor sits on a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::NorthWest,
        Anchor::North,
        Anchor::NorthEast,
        Anchor::West,
        Anchor::Center,
        Anchor::East,
        Anchor::SouthWest,
        Anchor::South,
        Anchor::SouthEast,
    ];

    fn horizontal(self) -> Align {
        match self {
            Anchor::NorthWest | Anchor::West | Anchor::SouthWest => Align::Start,
            Anchor::North | Anchor::Center | Anchor::South => Align::Middle,
            Anchor::NorthEast | Anchor::East | Anchor::SouthEast => Align::End,
        }
    }

    fn vertical(self) -> Align {
        match self {
            Anchor::NorthWest | Anchor::North | Anchor::NorthEast => Align::Start,
            Anchor::West | Anchor::Center | Anchor::East => Align::Middle,
            Anchor::SouthWest | Anchor::South | Anchor::SouthEast => Align::End,
        }
    }
}

impl std::str::FromStr for Anchor {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let anchor = match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "nw" | "northwest" | "topleft" => Anchor::NorthWest,
            "n" | "north" | "top" => Anchor::North,
            "ne" | "northeast" | "topright" => Anchor::NorthEast,
            "w" | "west" | "left" => Anchor::West,
            "c" | "center" | "centre" => Anchor::Center,
            "e" | "east" | "right" => Anchor::East,
            "sw" | "southwest" | "bottomleft" => Anchor::SouthWest,
            "s" | "south" | "bottom" => Anchor::South,
            "se" | "southeast" | "bottomright" => Anchor::SouthEast,
            _ => return Err(EngineError::Generic(format!("Unknown anchor '{s}'"))),
        };
        Ok(anchor)
    }
}

/// Copy plan for one resize: `content` cells starting at `crop` in the old
/// level land at `place` in the new level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizePlan {
    pub new_size: Size,
    pub content: Size,
    pub crop: crate::Position,
    pub place: crate::Position,
}

impl ResizePlan {
    pub fn new(old_size: Size, new_size: Size, anchor: Anchor) -> Self {
        let (content_w, crop_x, place_x) = plan_axis(old_size.width, new_size.width, anchor.horizontal());
        let (content_h, crop_y, place_y) = plan_axis(old_size.height, new_size.height, anchor.vertical());
        Self {
            new_size,
            content: Size::new(content_w, content_h),
            crop: crate::Position::new(crop_x, crop_y),
            place: crate::Position::new(place_x, place_y),
        }
    }
}

/// Returns `(content, crop_offset, place_offset)` for one axis.
fn plan_axis(old: i32, new: i32, align: Align) -> (i32, i32, i32) {
    let delta = new - old;
    let mut content = old;
    let mut crop = 0;
    if delta < 0 {
        let cut = -delta;
        content -= cut;
        crop = match align {
            Align::Start => 0,
            Align::Middle => cut / 2,
            Align::End => cut,
        };
    }
    let place = match align {
        Align::Start => 0,
        Align::Middle => (new - content) / 2,
        Align::End => new - content,
    };
    (content, crop, place.max(0))
}

/// Computes a resized copy of `level`. Overlapping content is preserved,
/// new cells are empty.
///
/// # Errors
///
/// Fails if `new_size` is outside the editor limits.
pub fn resize_level(level: &Level, new_size: Size, anchor: Anchor) -> Result<Level> {
    if !limits::is_within_limits(new_size.width, new_size.height) {
        return Err(EngineError::InvalidDimensions {
            width: new_size.width,
            height: new_size.height,
        });
    }
    if new_size == level.size() {
        return Ok(level.clone());
    }

    let plan = ResizePlan::new(level.size(), new_size, anchor);
    let old_width = level.width() as usize;
    let new_width = new_size.width as usize;
    let row_len = plan.content.width.max(0) as usize;

    let layers = std::array::from_fn(|i| {
        let kind = LayerKind::ALL[i];
        let src = level.layer(kind);
        let mut dst = vec![EMPTY_TILE; new_size.area()];
        for row in 0..plan.content.height.max(0) as usize {
            let src_start = (plan.crop.y as usize + row) * old_width + plan.crop.x as usize;
            let dst_start = (plan.place.y as usize + row) * new_width + plan.place.x as usize;
            dst[dst_start..dst_start + row_len].copy_from_slice(&src[src_start..src_start + row_len]);
        }
        dst
    });

    log::info!("resized level {} -> {} (anchor {:?})", level.size(), new_size, anchor);
    Level::from_layers(new_size, layers)
}

//! Last-move arrow geometry.

use crate::config::ArrowStyle;
use crate::domain::{BoardGeometry, Cell, Point};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Three line segments: the shaft and the two head strokes meeting at the tip.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Arrow {
    pub shaft: Segment,
    pub left_head: Segment,
    pub right_head: Segment,
}

impl Arrow {
    pub fn segments(&self) -> [Segment; 3] {
        [self.shaft, self.left_head, self.right_head]
    }
}

/// Arrow from the center of `from` to the center of `to`.
///
/// The shaft stops short of the target center by `head_length_fraction` of the
/// center-to-center length; the head strokes start at that point, offset
/// perpendicular to the shaft by `head_width_fraction` of the same length, and
/// end at the target center. Returns `None` for off-board cells and for a
/// zero-length arrow.
pub fn last_move_arrow(
    geometry: &BoardGeometry,
    from: Cell,
    to: Cell,
    style: &ArrowStyle,
) -> Option<Arrow> {
    if !from.is_on_board() || !to.is_on_board() {
        return None;
    }

    let a = geometry.cell_center(from);
    let b = geometry.cell_center(to);
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f32::EPSILON {
        return None;
    }

    // unit vector along the shaft and its normal
    let (ux, uy) = (dx / length, dy / length);
    let (nx, ny) = (-uy, ux);

    let head_length = style.head_length_fraction * length;
    let head_width = style.head_width_fraction * length;

    let base = Point::new(b.x - ux * head_length, b.y - uy * head_length);
    let left = Point::new(base.x + nx * head_width, base.y + ny * head_width);
    let right = Point::new(base.x - nx * head_width, base.y - ny * head_width);

    Some(Arrow {
        shaft: Segment { start: a, end: base },
        left_head: Segment { start: left, end: b },
        right_head: Segment { start: b, end: right },
    })
}

use ratatui::layout::Rect;

/// The side of a container a pad is locked to.
///
/// The anchor determines the pad's derived geometry: the pad spans the
/// container fully along the anchored edge's axis and takes a fixed
/// thickness along the perpendicular axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Compute the rectangle a pad occupies when anchored to `edge` of `bounds`
/// with the given `thickness`.
///
/// Empty bounds yield an empty rectangle at the bounds' origin; a thickness
/// larger than the available extent is clamped so the result never leaves
/// `bounds`.
pub fn anchored_rect(bounds: Rect, edge: AnchorEdge, thickness: u16) -> Rect {
    if bounds.width == 0 || bounds.height == 0 {
        return Rect {
            x: bounds.x,
            y: bounds.y,
            width: 0,
            height: 0,
        };
    }
    match edge {
        AnchorEdge::Left => Rect {
            x: bounds.x,
            y: bounds.y,
            width: thickness.min(bounds.width),
            height: bounds.height,
        },
        AnchorEdge::Right => {
            let width = thickness.min(bounds.width);
            Rect {
                x: bounds
                    .x
                    .saturating_add(bounds.width)
                    .saturating_sub(width),
                y: bounds.y,
                width,
                height: bounds.height,
            }
        }
        AnchorEdge::Top => Rect {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: thickness.min(bounds.height),
        },
        AnchorEdge::Bottom => {
            let height = thickness.min(bounds.height);
            Rect {
                x: bounds.x,
                y: bounds
                    .y
                    .saturating_add(bounds.height)
                    .saturating_sub(height),
                width: bounds.width,
                height,
            }
        }
    }
}

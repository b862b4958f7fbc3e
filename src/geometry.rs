use crate::entities::Bounds;

/// Half-open AABB overlap. Boxes that only share an edge do not intersect.
pub fn intersects(a: &Bounds, b: &Bounds) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

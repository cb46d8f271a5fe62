/// A coordinate outside `[-limit, limit]` was passed to [`super::Bound::add`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("point ({x}, {y}) is outside the admissible domain |x|,|y| <= {limit}")]
pub struct OutOfRangeError {
    pub x: f32,
    pub y: f32,
    pub limit: f32,
}

/// Rotation helpers built on `kurbo::Affine`.
pub mod affine;
/// Channel split/merge/resize helpers.
pub mod channels;
/// Cyclic row/column shifts.
pub mod shift;

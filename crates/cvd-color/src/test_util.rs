//! Matrix checks backed by glam.

use cvd_math::Mat3;

/// Converts a row-major [`Mat3`] to a column-major glam matrix.
pub(crate) fn to_glam(m: &Mat3) -> glam::Mat3 {
    glam::Mat3::from_cols_array_2d(&m.m).transpose()
}

#[test]
fn test_to_glam_layout() {
    let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let g = to_glam(&m);
    // Column 0 holds the first element of each row.
    assert_eq!(g.x_axis, glam::Vec3::new(1.0, 4.0, 7.0));
    assert_eq!(g.row(1), glam::Vec3::new(4.0, 5.0, 6.0));
}

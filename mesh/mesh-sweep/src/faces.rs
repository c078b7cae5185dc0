//! Shared quad-grid triangulation.

/// Triangulate a `rings x ring_len` vertex grid, two triangles per cell.
///
/// Vertices are assumed laid out ring-major: vertex `(i, j)` sits at index
/// `i * ring_len + j`. The ring dimension always wraps (`i = rings - 1`
/// connects back to ring 0); when `close_profile` is set an extra seam of
/// cells connects `j = ring_len - 1` back to `j = 0` as well, closing the
/// profile loop.
///
/// For each cell the two triangles are `(i1, i2, i4)` and `(i4, i2, i3)`:
///
/// ```text
///   i1 -- i4
///   |   / |
///   |  /  |
///   | /   |
///   i2 -- i3
/// ```
///
/// with `i1 = i * ring_len + j`, `i2 = i1 + 1`, and `i4`/`i3` the same pair
/// one ring ahead.
#[must_use]
pub fn grid_faces(rings: usize, ring_len: usize, close_profile: bool) -> Vec<[u32; 3]> {
    let mut faces = Vec::with_capacity(rings * ring_len * 2);
    if rings == 0 || ring_len < 2 {
        return faces;
    }

    let cell = |i: usize, j: usize, j_next: usize| -> [[u32; 3]; 2] {
        let i1 = (i * ring_len + j) as u32;
        let i2 = (i * ring_len + j_next) as u32;
        let (i4, i3) = if i != rings - 1 {
            (i1 + ring_len as u32, i2 + ring_len as u32)
        } else {
            (j as u32, j_next as u32)
        };
        [[i1, i2, i4], [i4, i2, i3]]
    };

    for i in 0..rings {
        for j in 0..ring_len - 1 {
            faces.extend_from_slice(&cell(i, j, j + 1));
        }
        if close_profile {
            faces.extend_from_slice(&cell(i, ring_len - 1, 0));
        }
    }

    faces
}

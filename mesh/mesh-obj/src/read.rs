//! OBJ-subset reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::Point3;
use tracing::debug;

use crate::error::{ObjError, ObjResult};

/// Geometry read from an OBJ-subset file: positions and triangle faces.
///
/// Face indices are 0-based after parsing (the file format is 1-based).
/// Normals and texture coordinates in the source are ignored; skinning
/// meshes regenerate what they need from the current vertex positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMesh {
    /// Vertex positions in file order.
    pub positions: Vec<Point3<f64>>,
    /// Triangle faces as 0-based indices into `positions`.
    pub faces: Vec<[u32; 3]>,
}

impl ObjMesh {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Parse OBJ-subset data from a reader.
///
/// Recognizes `v x y z` and `f i j k` lines; tolerates arbitrary whitespace
/// and skips every other line type. Face indices are validated against the
/// final vertex count (1-based in the file) and converted to 0-based.
///
/// # Errors
///
/// [`ObjError::InvalidContent`] for malformed `v`/`f` lines,
/// [`ObjError::IndexOutOfRange`] for face indices outside the file's vertex
/// range, and the underlying I/O or number-parse errors.
pub fn parse_obj<R: BufRead>(reader: R) -> ObjResult<ObjMesh> {
    let mut mesh = ObjMesh::default();
    // (line number, raw 1-based indices) for validation after all `v` lines.
    let mut raw_faces: Vec<(usize, [i64; 3])> = Vec::new();
    let mut skipped = 0usize;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = number + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let coords = parse_three_floats(&mut tokens, line_number)?;
                mesh.positions
                    .push(Point3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let indices = parse_three_indices(&mut tokens, line_number)?;
                raw_faces.push((line_number, indices));
            }
            Some(_) => skipped += 1,
            None => {}
        }
    }

    for (line, indices) in raw_faces {
        let mut face = [0u32; 3];
        for (slot, &index) in face.iter_mut().zip(&indices) {
            if index < 1 || index as usize > mesh.positions.len() {
                return Err(ObjError::IndexOutOfRange {
                    index,
                    vertex_count: mesh.positions.len(),
                    line,
                });
            }
            *slot = (index - 1) as u32;
        }
        mesh.faces.push(face);
    }

    if skipped > 0 {
        debug!(skipped, "ignored unrecognized OBJ line types");
    }

    Ok(mesh)
}

/// Load an OBJ-subset file from disk.
///
/// A missing file is reported as [`ObjError::FileNotFound`]; the load never
/// degrades to an empty mesh.
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<ObjMesh> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ObjError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    parse_obj(BufReader::new(file))
}

fn parse_three_floats<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    line: usize,
) -> ObjResult<[f64; 3]> {
    let mut out = [0.0; 3];
    for slot in &mut out {
        let token = tokens
            .next()
            .ok_or_else(|| ObjError::invalid_content(line, "expected 3 coordinates"))?;
        *slot = token.parse()?;
    }
    Ok(out)
}

fn parse_three_indices<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    line: usize,
) -> ObjResult<[i64; 3]> {
    let mut out = [0i64; 3];
    for slot in &mut out {
        let token = tokens
            .next()
            .ok_or_else(|| ObjError::invalid_content(line, "expected 3 vertex indices"))?;
        // Accept both `f 1 2 3` and the exporter's `f 1/1/1 2/1/2 3/1/3`.
        let vertex_part = token.split('/').next().unwrap_or(token);
        *slot = vertex_part.parse()?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parse() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = parse_obj(source.as_bytes()).expect("mesh");
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_tolerates_whitespace_and_unknown_lines() {
        let source = "\
# comment line
v   0.0    0.0  0.0
vn 0 0 1
v\t1.0 0.0 0.0
usemtl whatever
v 0.0 1.0 0.0

f   1   2 3
";
        let mesh = parse_obj(source.as_bytes()).expect("mesh");
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_slash_face_syntax() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2/1/2 3/1/3\n";
        let mesh = parse_obj(source.as_bytes()).expect("mesh");
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_malformed_vertex_line() {
        let source = "v 0 0\n";
        assert!(matches!(
            parse_obj(source.as_bytes()),
            Err(ObjError::InvalidContent { line: 1, .. })
        ));
    }

    #[test]
    fn test_face_index_out_of_range() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n";
        assert!(matches!(
            parse_obj(source.as_bytes()),
            Err(ObjError::IndexOutOfRange {
                index: 4,
                vertex_count: 3,
                line: 4,
            })
        ));
    }

    #[test]
    fn test_zero_face_index_rejected() {
        let source = "v 0 0 0\nf 0 0 0\n";
        assert!(matches!(
            parse_obj(source.as_bytes()),
            Err(ObjError::IndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_missing_file_reported() {
        let result = load_obj("/nonexistent/definitely-not-here.obj");
        assert!(matches!(result, Err(ObjError::FileNotFound { .. })));
    }

    #[test]
    fn test_forward_face_reference_allowed() {
        // Faces may precede the vertices they reference; validation runs
        // against the final vertex count.
        let source = "f 1 2 3\nv 0 0 0\nv 1 0 0\nv 0 1 0\n";
        let mesh = parse_obj(source.as_bytes()).expect("mesh");
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    }
}

//! OBJ export with the fixed face-line shape.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use surface_types::Surface;

use crate::error::ObjResult;

/// Write a surface as OBJ text.
///
/// Emits every vertex as `v`, every normal as `vn`, one dummy `vt  0 0 0`
/// line, then each face as `f a/1/a b/1/b c/1/c`: 1-based indices, the
/// texture index always 1, the normal index equal to the vertex index. This
/// exact face shape is the interoperability contract with standard OBJ
/// consumers.
pub fn write_obj<W: Write>(surface: &Surface, writer: &mut W) -> ObjResult<()> {
    for v in &surface.vertices {
        writeln!(writer, "v  {} {} {}", v.x, v.y, v.z)?;
    }

    for n in &surface.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    writeln!(writer, "vt  0 0 0")?;

    for face in &surface.faces {
        let [a, b, c] = [face[0] + 1, face[1] + 1, face[2] + 1];
        writeln!(writer, "f  {a}/1/{a} {b}/1/{b} {c}/1/{c}")?;
    }

    Ok(())
}

/// Write a surface to an OBJ file on disk.
pub fn save_obj<P: AsRef<Path>>(surface: &Surface, path: P) -> ObjResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(surface, &mut writer)?;
    writer.flush()?;
    Ok(())
}

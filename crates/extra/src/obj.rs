//! Minimal OBJ reader and writer for triangulated meshes.
//!
//! Supports only what the decimation pipeline consumes: `v` position
//! records and triangular `f` records (in any of the `v`, `v/vt`, `v//vn`
//! and `v/vt/vn` forms, of which only the position index is kept). Normals,
//! texture coordinates, materials, groups and smoothing groups are skipped
//! on read and never written.

use mesh::math::point;
use mesh::{Facet, TriangleMesh, VertexId};

extern crate thiserror;

use self::thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseObjError {
    #[error("Line {line}: expected a number, got {src:?}.")]
    Number { src: String, line: usize },
    #[error("Line {line}: vertex index {index} does not refer to a position read so far.")]
    Index { index: i64, line: usize },
    #[error("Line {line}: face is not a triangle.")]
    NotTriangulated { line: usize },
}

fn parse_float(field: Option<&str>, line: usize) -> Result<f32, ParseObjError> {
    let src = field.unwrap_or("");
    src.parse().map_err(|_| ParseObjError::Number {
        src: src.to_string(),
        line,
    })
}

fn parse_index(
    field: Option<&str>,
    line: usize,
    loaded: usize,
) -> Result<VertexId, ParseObjError> {
    let src = field.unwrap_or("");
    // Faces may carry texture and normal references; only the leading
    // position index matters here.
    let src = src.split('/').next().unwrap_or("");

    let index: i64 = src.parse().map_err(|_| ParseObjError::Number {
        src: src.to_string(),
        line,
    })?;
    if index < 1 || index as usize > loaded {
        return Err(ParseObjError::Index { index, line });
    }

    Ok(VertexId(index as u32 - 1))
}

/// Parses a triangulated OBJ document.
///
/// Positions must appear before the faces that use them, which is how
/// every OBJ exporter lays files out.
pub fn parse_obj(src: &str) -> Result<TriangleMesh, ParseObjError> {
    let mut positions = Vec::new();
    let mut facets = Vec::new();

    for (i, raw) in src.lines().enumerate() {
        let line = i + 1;
        let mut fields = raw.split_whitespace();

        match fields.next() {
            Some("v") => {
                let x = parse_float(fields.next(), line)?;
                let y = parse_float(fields.next(), line)?;
                let z = parse_float(fields.next(), line)?;
                positions.push(point(x, y, z));
            }
            Some("f") => {
                let a = parse_index(fields.next(), line, positions.len())?;
                let b = parse_index(fields.next(), line, positions.len())?;
                let c = parse_index(fields.next(), line, positions.len())?;
                if fields.next().is_some() {
                    return Err(ParseObjError::NotTriangulated { line });
                }
                facets.push(Facet::new(a, b, c));
            }
            // Anything else (vn, vt, o, g, s, mtllib, usemtl, comments) is
            // irrelevant to the decimation pipeline.
            _ => {}
        }
    }

    Ok(TriangleMesh { positions, facets })
}

/// Writes a mesh as an OBJ document.
pub fn write_obj(mesh: &TriangleMesh) -> String {
    let mut out = String::new();

    for p in &mesh.positions {
        out.push_str(&format!("v {} {} {}\n", p.x, p.y, p.z));
    }
    for f in &mesh.facets {
        out.push_str(&format!(
            "f {} {} {}\n",
            f.indices[0].offset() + 1,
            f.indices[1].offset() + 1,
            f.indices[2].offset() + 1
        ));
    }

    out
}

#[test]
fn parse_triangle() {
    let mesh = parse_obj(
        "# a lone triangle\n\
         o triangle\n\
         v 0.0 0.0 0.0\n\
         v 1.0 0.0 0.0\n\
         v 0.0 1.0 0.5\n\
         vn 0.0 0.0 1.0\n\
         f 1/1/1 2/2/1 3/3/1\n",
    )
    .unwrap();

    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.facet_count(), 1);
    assert_eq!(
        mesh.facets[0].indices,
        [VertexId(0), VertexId(1), VertexId(2)]
    );
    assert_eq!(mesh.positions[2], point(0.0, 1.0, 0.5));
}

#[test]
fn parse_index_forms() {
    for face in &["f 1 2 3", "f 1/4 2/5 3/6", "f 1//7 2//8 3//9"] {
        let src = format!("v 0 0 0\nv 1 0 0\nv 0 1 0\n{}\n", face);
        let mesh = parse_obj(&src).unwrap();
        assert_eq!(mesh.facet_count(), 1);
    }
}

#[test]
fn parse_errors() {
    assert_eq!(
        parse_obj("v 0.0 nope 0.0\n").err(),
        Some(ParseObjError::Number {
            src: "nope".to_string(),
            line: 1
        })
    );
    assert_eq!(
        parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n").err(),
        Some(ParseObjError::Index { index: 4, line: 4 })
    );
    assert_eq!(
        parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 3 4\n").err(),
        Some(ParseObjError::NotTriangulated { line: 5 })
    );
}

#[test]
fn roundtrip() {
    let mesh = crate::shapes::tetrahedron();
    let parsed = parse_obj(&write_obj(&mesh)).unwrap();

    assert_eq!(parsed.positions, mesh.positions);
    assert_eq!(parsed.facets, mesh.facets);
}

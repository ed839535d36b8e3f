//! Edge-indexed mesh format.
//!
//! A whitespace-delimited text format in which triangles are described by
//! their three bounding edges rather than by their corners.
//!
//! # Layout
//!
//! ```text
//! NV NE NF                 # vertex, edge and triangle counts
//! foreach vertex
//!     x y z                # REAL
//! foreach edge
//!     v0 v1                # 1-based vertex indices
//! foreach triangle
//!     e0 e1 e2             # 1-based edge indices
//! ```
//!
//! There is no terminator: parsing stops once the declared counts have been
//! read. Tokens may be split across lines arbitrarily.
//!
//! # Winding
//!
//! Edges are unordered pairs and the three edges of a triangle are listed
//! in winding order but without orientation. The loader aligns them so
//! each edge's second endpoint is the next edge's first endpoint, then
//! emits the first endpoint of each edge.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::{FromStr, SplitAsciiWhitespace};

use hashbrown::HashMap;
use mesh_types::{IndexedMesh, MeshTopology, Vertex};
use tracing::{debug, info, warn};

use crate::error::{IoError, IoResult, Section};

/// Load a mesh from an edge-indexed file.
///
/// The mesh's properties record the file stem as name and the path as
/// source.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is not a
/// valid edge-indexed mesh.
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_edge_mesh;
///
/// let mesh = load_edge_mesh("glyphs.txt").unwrap();
/// println!("Loaded {} faces", mesh.faces.len());
/// ```
pub fn load_edge_mesh<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let mut mesh = read_edge_mesh(BufReader::new(file))?;
    mesh.properties.name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string);
    mesh.properties.source = Some(path.to_path_buf());
    Ok(mesh)
}

/// Read an edge-indexed mesh from any reader.
///
/// # Errors
///
/// Returns an error on I/O failure or malformed content.
pub fn read_edge_mesh<R: Read>(mut reader: R) -> IoResult<IndexedMesh> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_edge_mesh(&text)
}

/// Parse an edge-indexed mesh from text.
///
/// # Errors
///
/// - [`IoError::InvalidHeader`] if a count is not a non-negative integer
/// - [`IoError::UnexpectedEof`] if the input ends before all declared
///   records
/// - [`IoError::InvalidNumber`] for an unparseable field
/// - [`IoError::VertexOutOfRange`] / [`IoError::EdgeOutOfRange`] for bad
///   references
/// - [`IoError::OpenTriangle`] if a triangle's edges do not close
///
/// # Example
///
/// ```
/// use mesh_io::parse_edge_mesh;
///
/// let text = "3 3 1\n0 0 0\n1 0 0\n0 1 0\n1 2\n2 3\n3 1\n1 2 3\n";
/// let mesh = parse_edge_mesh(text).unwrap();
/// assert_eq!(mesh.faces[0].vertices, [0, 1, 2]);
/// ```
pub fn parse_edge_mesh(text: &str) -> IoResult<IndexedMesh> {
    let mut tokens = Tokens::new(text);

    let vertex_count = tokens.header_count("vertex")?;
    let edge_count = tokens.header_count("edge")?;
    let face_count = tokens.header_count("triangle")?;

    let mut mesh = IndexedMesh::with_capacity(vertex_count, edge_count, face_count);

    tokens.begin(Section::Vertices, vertex_count);
    for _ in 0..vertex_count {
        let x: f64 = tokens.field()?;
        let y: f64 = tokens.field()?;
        let z: f64 = tokens.field()?;
        mesh.add_vertex(Vertex::from_coords(x, y, z));
        tokens.next_record();
    }

    tokens.begin(Section::Edges, edge_count);
    for edge in 1..=edge_count {
        let v0 = vertex_ref(tokens.field()?, edge, vertex_count)?;
        let v1 = vertex_ref(tokens.field()?, edge, vertex_count)?;
        mesh.add_edge(v0, v1);
        tokens.next_record();
    }

    tokens.begin(Section::Triangles, face_count);
    for triangle in 1..=face_count {
        let refs: [usize; 3] = [tokens.field()?, tokens.field()?, tokens.field()?];
        let mut sides = [[0u32; 2]; 3];
        for (side, &edge) in sides.iter_mut().zip(&refs) {
            if edge == 0 || edge > edge_count {
                return Err(IoError::EdgeOutOfRange {
                    triangle,
                    edge,
                    edge_count,
                });
            }
            *side = mesh.edges[edge - 1].vertices;
        }
        let [a, b, c] = orient_edges(sides).ok_or(IoError::OpenTriangle {
            triangle,
            edges: refs,
        })?;
        mesh.add_triangle(a, b, c);
        tokens.next_record();
    }

    if tokens.has_trailing() {
        warn!("Ignoring trailing content after declared triangle records");
    }

    mesh.finish();

    info!(
        vertices = mesh.vertex_count(),
        edges = mesh.edge_count(),
        triangles = mesh.face_count(),
        "Parsed edge-indexed mesh"
    );

    Ok(mesh)
}

/// Rotate three unordered edges into a consistent cycle and return the
/// triangle's corners in winding order.
///
/// Aligns edge 0's second endpoint with edge 1, then edge 1's first
/// endpoint with edge 0's second and edge 2's first with edge 1's second.
/// Returns `None` if the edges do not close into a triangle.
///
/// # Example
///
/// ```
/// use mesh_io::orient_edges;
///
/// // edges (3,2), (1,2), (1,3) walk 3 -> 2 -> 1 -> 3
/// assert_eq!(orient_edges([[3, 2], [1, 2], [1, 3]]), Some([3, 2, 1]));
/// ```
#[must_use]
pub fn orient_edges(sides: [[u32; 2]; 3]) -> Option<[u32; 3]> {
    let [[mut a, mut b], [mut c, mut d], [mut e, mut f]] = sides;

    if b != c && b != d {
        std::mem::swap(&mut a, &mut b);
    }
    if c != b {
        std::mem::swap(&mut c, &mut d);
    }
    if e != d {
        std::mem::swap(&mut e, &mut f);
    }

    (b == c && d == e && f == a).then_some([a, c, e])
}

/// Save a mesh in the edge-indexed format.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::save_edge_mesh;
/// use mesh_types::unit_cube;
///
/// save_edge_mesh(&unit_cube(), "cube.txt").unwrap();
/// ```
pub fn save_edge_mesh<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_edge_mesh(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh in the edge-indexed format.
///
/// Explicit edges are written first and kept in order; every triangle side
/// not already present is appended as a new edge.
///
/// # Errors
///
/// Returns an error if writing fails.
#[allow(clippy::cast_possible_truncation)]
pub fn write_edge_mesh<W: Write>(mesh: &IndexedMesh, mut writer: W) -> IoResult<()> {
    let mut edges: Vec<[u32; 2]> = mesh.edges.iter().map(|e| e.vertices).collect();
    let mut lookup: HashMap<(u32, u32), u32> = HashMap::with_capacity(edges.len());
    for (index, edge) in mesh.edges.iter().enumerate() {
        lookup.entry(edge.key()).or_insert(index as u32);
    }

    let mut triangles = Vec::with_capacity(mesh.faces.len());
    for face in &mesh.faces {
        let mut refs = [0u32; 3];
        for (slot, [v0, v1]) in refs.iter_mut().zip(face.sides()) {
            let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
            *slot = *lookup.entry(key).or_insert_with(|| {
                edges.push([v0, v1]);
                (edges.len() - 1) as u32
            });
        }
        triangles.push(refs);
    }

    writeln!(
        writer,
        "{} {} {}",
        mesh.vertices.len(),
        edges.len(),
        triangles.len()
    )?;
    for vertex in &mesh.vertices {
        let p = vertex.position;
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }
    for [v0, v1] in &edges {
        writeln!(writer, "{} {}", v0 + 1, v1 + 1)?;
    }
    for [e0, e1, e2] in &triangles {
        writeln!(writer, "{} {} {}", e0 + 1, e1 + 1, e2 + 1)?;
    }

    debug!(
        vertices = mesh.vertices.len(),
        edges = edges.len(),
        triangles = triangles.len(),
        "Wrote edge-indexed mesh"
    );

    Ok(())
}

/// Validate a 1-based vertex reference and convert it to a 0-based index.
#[allow(clippy::cast_possible_truncation)]
fn vertex_ref(vertex: usize, edge: usize, vertex_count: usize) -> IoResult<u32> {
    if vertex == 0 || vertex > vertex_count {
        return Err(IoError::VertexOutOfRange {
            edge,
            vertex,
            vertex_count,
        });
    }
    Ok((vertex - 1) as u32)
}

/// Whitespace tokenizer tracking which section and record it is in.
struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    section: Section,
    expected: usize,
    record: usize,
    header_read: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_ascii_whitespace(),
            section: Section::Header,
            expected: 3,
            record: 0,
            header_read: 0,
        }
    }

    fn header_count(&mut self, field: &'static str) -> IoResult<usize> {
        let token = self.inner.next().ok_or(IoError::UnexpectedEof {
            section: Section::Header,
            expected: 3,
            got: self.header_read,
        })?;
        let count = token.parse().map_err(|_| IoError::InvalidHeader {
            field,
            token: token.to_string(),
        })?;
        self.header_read += 1;
        Ok(count)
    }

    fn begin(&mut self, section: Section, expected: usize) {
        self.section = section;
        self.expected = expected;
        self.record = 0;
    }

    fn next_record(&mut self) {
        self.record += 1;
    }

    fn field<T: FromStr>(&mut self) -> IoResult<T> {
        let token = self.inner.next().ok_or(IoError::UnexpectedEof {
            section: self.section,
            expected: self.expected,
            got: self.record,
        })?;
        token.parse().map_err(|_| IoError::InvalidNumber {
            section: self.section,
            record: self.record + 1,
            token: token.to_string(),
        })
    }

    fn has_trailing(&mut self) -> bool {
        self.inner.next().is_some()
    }
}

//! Connected component labeling.
//!
//! Two vertices belong to the same component if a chain of triangle sides
//! or explicit edges joins them.

use mesh_types::IndexedMesh;
use tracing::info;

/// Disjoint-set forest over vertex indices.
#[derive(Debug, Clone)]
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            // path halving
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}

/// Tag every vertex, edge and face with its connected component.
///
/// Tags are dense and 0-based, numbered in order of each component's
/// lowest vertex index, so they follow the order the shapes were modeled
/// in. An isolated vertex is a component of its own. Edges and faces take
/// the tag of their first vertex; an element referencing a vertex that
/// does not exist is tagged `u32::MAX`.
///
/// Returns the number of components.
///
/// # Example
///
/// ```
/// use mesh_split::label_components;
/// use mesh_types::{cuboid, IndexedMesh, Point3};
///
/// let mut mesh = cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
/// mesh.merge(&cuboid(Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 1.0, 1.0)));
///
/// assert_eq!(label_components(&mut mesh), 2);
/// assert_eq!(mesh.faces.last().map(|f| f.group), Some(1));
/// ```
#[allow(clippy::cast_possible_truncation)]
// Truncation: component count never exceeds the u32 vertex index space
pub fn label_components(mesh: &mut IndexedMesh) -> usize {
    let n = mesh.vertices.len();
    let mut sets = DisjointSet::new(n);

    let in_range = |v: u32| (v as usize) < n;
    for edge in &mesh.edges {
        let [a, b] = edge.vertices;
        if in_range(a) && in_range(b) {
            sets.union(a as usize, b as usize);
        }
    }
    for face in &mesh.faces {
        for [a, b] in face.sides() {
            if in_range(a) && in_range(b) {
                sets.union(a as usize, b as usize);
            }
        }
    }

    let mut tag_of_root = vec![u32::MAX; n];
    let mut count = 0u32;
    for (index, vertex) in mesh.vertices.iter_mut().enumerate() {
        let root = sets.find(index);
        if tag_of_root[root] == u32::MAX {
            tag_of_root[root] = count;
            count += 1;
        }
        vertex.group = tag_of_root[root];
    }

    let vertices = &mesh.vertices;
    let tag = |v: u32| vertices.get(v as usize).map_or(u32::MAX, |vx| vx.group);
    for edge in &mut mesh.edges {
        edge.group = tag(edge.vertices[0]);
    }
    for face in &mut mesh.faces {
        face.group = tag(face.vertices[0]);
    }

    info!(
        vertices = n,
        components = count,
        "Labelled connected components"
    );

    count as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{cuboid, MeshTopology, Point3, Vertex};

    fn block(x: f64) -> IndexedMesh {
        cuboid(Point3::new(x, 0.0, 0.0), Point3::new(x + 1.0, 1.0, 0.5))
    }

    #[test]
    fn disjoint_set_merges_by_size() {
        let mut sets = DisjointSet::new(5);
        sets.union(0, 1);
        sets.union(2, 3);
        sets.union(1, 3);
        assert_eq!(sets.find(0), sets.find(2));
        assert_ne!(sets.find(0), sets.find(4));
        let root = sets.find(3);
        assert_eq!(sets.size[root], 4);
    }

    #[test]
    fn empty_mesh_has_no_components() {
        let mut mesh = IndexedMesh::new();
        assert_eq!(label_components(&mut mesh), 0);
    }

    #[test]
    fn three_blocks_numbered_in_vertex_order() {
        let mut mesh = block(0.0);
        mesh.merge(&block(2.0));
        mesh.merge(&block(4.0));

        assert_eq!(label_components(&mut mesh), 3);
        assert_eq!(mesh.group_count(), 3);
        for (i, vertex) in mesh.vertices.iter().enumerate() {
            assert_eq!(vertex.group as usize, i / 8);
        }
        for (i, face) in mesh.faces.iter().enumerate() {
            assert_eq!(face.group as usize, i / 12);
        }
        for (i, edge) in mesh.edges.iter().enumerate() {
            assert_eq!(edge.group as usize, i / 12);
        }
    }

    #[test]
    fn explicit_edge_joins_components() {
        let mut mesh = block(0.0);
        mesh.merge(&block(2.0));
        // bridge vertex 1 of the first block to vertex 0 of the second
        mesh.add_edge(1, 8);

        assert_eq!(label_components(&mut mesh), 1);
        assert!(mesh.vertices.iter().all(|v| v.group == 0));
    }

    #[test]
    fn isolated_vertices_are_their_own_components() {
        let mut mesh = IndexedMesh::new();
        mesh.add_vertex(Vertex::from_coords(5.0, 0.0, 0.0));
        mesh.merge(&block(0.0));
        mesh.add_vertex(Vertex::from_coords(9.0, 0.0, 0.0));

        assert_eq!(label_components(&mut mesh), 3);
        assert_eq!(mesh.vertices[0].group, 0);
        assert_eq!(mesh.vertices[1].group, 1);
        assert_eq!(mesh.vertices[9].group, 2);
        assert!(mesh.faces.iter().all(|f| f.group == 1));
    }

    #[test]
    fn later_link_keeps_first_appearance_order() {
        // vertex 2 connects to vertex 0 only through a face listed last
        let mut mesh = IndexedMesh::new();
        for x in [0.0, 1.0, 2.0, 3.0, 4.0] {
            mesh.add_vertex(Vertex::from_coords(x, 0.0, 0.0));
        }
        mesh.add_edge(1, 3);
        mesh.add_triangle(0, 2, 4);

        assert_eq!(label_components(&mut mesh), 2);
        let groups: Vec<u32> = mesh.vertices.iter().map(|v| v.group).collect();
        assert_eq!(groups, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn dangling_reference_is_tagged_out_of_range() {
        let mut mesh = block(0.0);
        mesh.add_edge(40, 41);
        label_components(&mut mesh);
        assert_eq!(mesh.edges.last().map(|e| e.group), Some(u32::MAX));
    }
}

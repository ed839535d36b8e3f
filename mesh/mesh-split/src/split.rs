//! Partition a labelled mesh into one sub-mesh per group.

use mesh_types::{Aabb, IndexedMesh, MeshBounds, MeshTopology};
use tracing::debug;

use crate::error::{SplitError, SplitResult};

/// One group of a split mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGroup {
    /// The group's elements, renumbered contiguously.
    pub mesh: IndexedMesh,
    /// Bounds of the group's vertex positions.
    pub bounds: Aabb,
}

impl MeshGroup {
    /// Create a group, computing its bounds from the mesh.
    #[must_use]
    pub fn new(mesh: IndexedMesh) -> Self {
        let bounds = mesh.bounds();
        Self { mesh, bounds }
    }
}

/// Split a mesh into one [`MeshGroup`] per group tag.
///
/// The group count is one more than the largest vertex tag. Groups are
/// returned in tag order and elements keep their relative order inside
/// each group. A tag no vertex carries yields an empty group.
///
/// # Errors
///
/// - [`SplitError::GroupOutOfRange`] if a vertex tag is not below the
///   vertex count, or an edge or face tag is not below the group count
/// - [`SplitError::CrossGroupReference`] if an edge or face references a
///   vertex of another group
///
/// # Example
///
/// ```
/// use mesh_split::{label_components, split_by_group};
/// use mesh_types::{cuboid, Point3};
///
/// let mut mesh = cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
/// mesh.merge(&cuboid(Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 1.0, 1.0)));
/// label_components(&mut mesh);
///
/// let groups = split_by_group(&mesh).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert!((groups[1].bounds.min.x - 2.0).abs() < 1e-12);
/// ```
pub fn split_by_group(mesh: &IndexedMesh) -> SplitResult<Vec<MeshGroup>> {
    // tags from a labelling are dense, so none can reach the vertex count
    let vertex_count = mesh.vertex_count();
    if let Some((index, vertex)) = mesh
        .vertices
        .iter()
        .enumerate()
        .find(|(_, v)| v.group as usize >= vertex_count)
    {
        return Err(SplitError::GroupOutOfRange {
            element: "vertex",
            index,
            group: vertex.group,
            group_count: vertex_count,
        });
    }
    let group_count = mesh.group_count();

    let mut vertices = vec![Vec::new(); group_count];
    let mut edges = vec![Vec::new(); group_count];
    let mut faces = vec![Vec::new(); group_count];

    for (index, vertex) in mesh.vertices.iter().enumerate() {
        vertices[vertex.group as usize].push(index);
    }
    for (index, edge) in mesh.edges.iter().enumerate() {
        bucket(&mut edges, "edge", index, edge.group)?;
    }
    for (index, face) in mesh.faces.iter().enumerate() {
        bucket(&mut faces, "face", index, face.group)?;
    }

    let mut groups = Vec::with_capacity(group_count);
    for (tag, ((v, e), f)) in vertices.iter().zip(&edges).zip(&faces).enumerate() {
        let subset = mesh.copy_subset(v, e, f).map_err(|err| {
            let group = match err.element {
                "edge" => mesh.edges[err.index].group,
                _ => mesh.faces[err.index].group,
            };
            SplitError::CrossGroupReference {
                element: err.element,
                index: err.index,
                group,
                vertex: err.vertex,
            }
        })?;

        let group = MeshGroup::new(subset);
        debug!(
            group = tag,
            vertices = group.mesh.vertex_count(),
            faces = group.mesh.face_count(),
            "Split group"
        );
        groups.push(group);
    }

    Ok(groups)
}

fn bucket(
    buckets: &mut [Vec<usize>],
    element: &'static str,
    index: usize,
    group: u32,
) -> SplitResult<()> {
    let group_count = buckets.len();
    let slot = buckets
        .get_mut(group as usize)
        .ok_or(SplitError::GroupOutOfRange {
            element,
            index,
            group,
            group_count,
        })?;
    slot.push(index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label_components;
    use approx::assert_relative_eq;
    use mesh_types::{cuboid, Point3, Vertex};

    fn row_of_blocks(count: u32) -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        for i in 0..count {
            let x = f64::from(i) * 2.0;
            mesh.merge(&cuboid(
                Point3::new(x, 0.0, 0.0),
                Point3::new(x + 1.0, 0.5 + f64::from(i), 0.25),
            ));
        }
        label_components(&mut mesh);
        mesh
    }

    #[test]
    fn split_empty_mesh() {
        let groups = split_by_group(&IndexedMesh::new()).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn split_renumbers_and_bounds_each_group() {
        let mesh = row_of_blocks(3);
        let groups = split_by_group(&mesh).unwrap();
        assert_eq!(groups.len(), 3);

        for (i, group) in groups.iter().enumerate() {
            assert_eq!(group.mesh.vertex_count(), 8);
            assert_eq!(group.mesh.edge_count(), 12);
            assert_eq!(group.mesh.face_count(), 12);
            assert!(group.mesh.faces().flatten().all(|v| v < 8));
            assert!(group.mesh.vertices.iter().all(|v| v.group as usize == i));

            let x = 2.0 * i as f64;
            assert_relative_eq!(group.bounds.min.x, x, epsilon = 1e-12);
            assert_relative_eq!(group.bounds.max.x, x + 1.0, epsilon = 1e-12);
            assert_relative_eq!(group.bounds.max.y, 0.5 + i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn split_copies_properties() {
        let mut mesh = row_of_blocks(2);
        mesh.properties.name = Some("font".to_string());
        let groups = split_by_group(&mesh).unwrap();
        assert!(groups
            .iter()
            .all(|g| g.mesh.properties.name.as_deref() == Some("font")));
    }

    #[test]
    fn unused_tag_gives_empty_group() {
        let mut mesh = IndexedMesh::new();
        mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0).with_group(2));
        mesh.add_vertex(Vertex::from_coords(2.0, 0.0, 0.0));

        let groups = split_by_group(&mesh).unwrap();
        assert_eq!(groups.len(), 3);
        assert!(groups[1].mesh.vertices.is_empty());
        assert!(groups[1].bounds.is_empty());
    }

    #[test]
    fn vertex_tag_out_of_range_is_rejected_before_allocating() {
        let mut mesh = row_of_blocks(1);
        mesh.vertices[3].group = u32::MAX;
        assert_eq!(
            split_by_group(&mesh),
            Err(SplitError::GroupOutOfRange {
                element: "vertex",
                index: 3,
                group: u32::MAX,
                group_count: 8,
            })
        );

        // a tag equal to the vertex count is one past any dense labelling
        mesh.vertices[3].group = 8;
        assert!(matches!(
            split_by_group(&mesh),
            Err(SplitError::GroupOutOfRange { element: "vertex", index: 3, group: 8, .. })
        ));
    }

    #[test]
    fn face_tag_out_of_range() {
        let mut mesh = row_of_blocks(2);
        mesh.faces[5].group = 7;
        assert_eq!(
            split_by_group(&mesh),
            Err(SplitError::GroupOutOfRange {
                element: "face",
                index: 5,
                group: 7,
                group_count: 2,
            })
        );
    }

    #[test]
    fn edge_tag_out_of_range() {
        let mut mesh = row_of_blocks(1);
        mesh.add_edge(0, 1);
        mesh.edges[12].group = u32::MAX;
        assert!(matches!(
            split_by_group(&mesh),
            Err(SplitError::GroupOutOfRange { element: "edge", index: 12, .. })
        ));
    }

    #[test]
    fn cross_group_reference() {
        let mut mesh = row_of_blocks(2);
        // face 0 is group 0 but now reaches into the second block
        mesh.faces[0].vertices[2] = 9;
        assert_eq!(
            split_by_group(&mesh),
            Err(SplitError::CrossGroupReference {
                element: "face",
                index: 0,
                group: 0,
                vertex: 9,
            })
        );
    }
}

//! JSON scene persistence.
//!
//! A scene is stored as one document holding objects, materials and instance
//! groups, with each mesh in its own file under `shapes/`. Every instance
//! group additionally gets a listing of the frames that use it under
//! `instances/`, which instanced renderers can consume directly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SceneError;
use crate::mesh::Mesh;
use crate::scene::{Frame, Instance, InstanceId, Material, Object, Scene};

const SHAPES_DIR: &str = "shapes";
const INSTANCES_DIR: &str = "instances";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct SceneDocument {
    objects: Vec<Object>,
    materials: Vec<Material>,
    instances: Vec<Instance>,
    shapes: Vec<String>,
}

/// Frames of every object placed through one instance group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstanceListing {
    /// Instance group name.
    pub name: String,
    /// Frames of the objects referencing the group, in scene order.
    pub frames: Vec<Frame>,
}

/// Load a scene document and the mesh files it references.
pub fn load_scene(path: &Path) -> Result<Scene, SceneError> {
    let document: SceneDocument = read_json(path)?;
    let root = parent_dir(path);

    let shapes = document
        .shapes
        .iter()
        .map(|relative| read_json::<Mesh>(&root.join(relative)))
        .collect::<Result<Vec<_>, _>>()?;

    let scene = Scene {
        objects: document.objects,
        shapes,
        materials: document.materials,
        instances: document.instances,
    };
    validate_references(&scene)?;
    for mesh in &scene.shapes {
        mesh.validate_topology()?;
    }

    info!(
        path = %path.display(),
        objects = scene.objects.len(),
        shapes = scene.shapes.len(),
        "Loaded scene"
    );
    Ok(scene)
}

/// Save a scene, creating the output directories it needs.
pub fn save_scene(path: &Path, scene: &Scene) -> Result<(), SceneError> {
    prepare_output_dirs(path, scene)?;
    let root = parent_dir(path);

    let mut shape_files = Vec::with_capacity(scene.shapes.len());
    for (index, mesh) in scene.shapes.iter().enumerate() {
        let relative = format!("{SHAPES_DIR}/shape{index}.json");
        write_json(&root.join(&relative), mesh)?;
        shape_files.push(relative);
    }

    for (index, instance) in scene.instances.iter().enumerate() {
        let id = InstanceId(index);
        let listing = InstanceListing {
            name: instance.name.clone(),
            frames: scene
                .objects
                .iter()
                .filter(|o| o.instance == Some(id))
                .map(|o| o.frame)
                .collect(),
        };
        let file = root.join(INSTANCES_DIR).join(format!("{}.json", instance.name));
        write_json(&file, &listing)?;
        debug!(instance = %instance.name, copies = listing.frames.len(), "Wrote instance listing");
    }

    let document = SceneDocument {
        objects: scene.objects.clone(),
        materials: scene.materials.clone(),
        instances: scene.instances.clone(),
        shapes: shape_files,
    };
    write_json(path, &document)?;

    info!(
        path = %path.display(),
        objects = scene.objects.len(),
        shapes = scene.shapes.len(),
        instances = scene.instances.len(),
        "Saved scene"
    );
    Ok(())
}

/// Create the directory holding `output`, plus `shapes/` and `instances/`
/// beside it when the scene has meshes or instance groups to write.
pub fn prepare_output_dirs(output: &Path, scene: &Scene) -> Result<(), SceneError> {
    let root = parent_dir(output);
    make_dir(&root)?;
    if !scene.shapes.is_empty() {
        make_dir(&root.join(SHAPES_DIR))?;
    }
    if !scene.instances.is_empty() {
        make_dir(&root.join(INSTANCES_DIR))?;
    }
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

fn make_dir(dir: &Path) -> Result<(), SceneError> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| SceneError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, SceneError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SceneError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SceneError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SceneError> {
    let serialized = serde_json::to_string_pretty(value).map_err(SceneError::Serialize)?;
    std::fs::write(path, serialized).map_err(|source| SceneError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_references(scene: &Scene) -> Result<(), SceneError> {
    for object in &scene.objects {
        let dangling = |kind: &'static str, index: usize| SceneError::DanglingReference {
            object: object.name.clone(),
            kind,
            index,
        };
        if let Some(shape) = object.shape
            && shape.0 >= scene.shapes.len()
        {
            return Err(dangling("shape", shape.0));
        }
        if let Some(material) = object.material
            && material.0 >= scene.materials.len()
        {
            return Err(dangling("material", material.0));
        }
        if let Some(instance) = object.instance
            && instance.0 >= scene.instances.len()
        {
            return Err(dangling("instance", instance.0));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ShapeId;
    use glam::{Vec3, Vec3A};

    fn populated_scene() -> Scene {
        let mut scene = Scene::new();
        let shape = scene.add_shape(Mesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Z],
            triangles: vec![[0, 2, 1]],
            ..Default::default()
        });
        let instance = scene.add_instance("blade");
        for i in 0..3 {
            let mut object = Object::new(format!("blade{i}"));
            object.shape = Some(shape);
            object.instance = Some(instance);
            object.frame = Frame::from_translation(Vec3::new(i as f32, 0.0, 0.0));
            scene.add_object(object);
        }
        scene
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("scene.json");
        let scene = populated_scene();

        save_scene(&path, &scene).unwrap();
        let loaded = load_scene(&path).unwrap();
        assert_eq!(scene, loaded);
    }

    #[test]
    fn test_instance_listing_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        save_scene(&path, &populated_scene()).unwrap();

        let listing: InstanceListing =
            read_json(&dir.path().join("instances").join("blade.json")).unwrap();
        assert_eq!(listing.frames.len(), 3);
        assert_eq!(listing.frames[2].translation, Vec3A::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_output_dirs_only_for_populated_collections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scene.json");

        let mut scene = Scene::new();
        scene.add_shape(Mesh::default());
        prepare_output_dirs(&path, &scene).unwrap();

        let root = dir.path().join("nested");
        assert!(root.join("shapes").is_dir());
        assert!(!root.join("instances").exists());
    }

    #[test]
    fn test_missing_scene_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_scene(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SceneError::Read { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_scene(&path), Err(SceneError::Parse { .. })));
    }

    #[test]
    fn test_out_of_range_face_index_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let mut scene = Scene::new();
        let shape = scene.add_shape(Mesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Z],
            triangles: vec![[0, 1, 7]],
            ..Default::default()
        });
        let mut object = Object::new("broken");
        object.shape = Some(shape);
        scene.add_object(object);
        save_scene(&path, &scene).unwrap();

        let err = load_scene(&path).unwrap_err();
        assert!(matches!(err, SceneError::InvalidTopology { index: 7, vertices: 3, .. }));
    }

    #[test]
    fn test_dangling_shape_reference_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let mut scene = Scene::new();
        let mut object = Object::new("ghost");
        object.shape = Some(ShapeId(7));
        scene.add_object(object);
        save_scene(&path, &scene).unwrap();

        let err = load_scene(&path).unwrap_err();
        assert!(matches!(err, SceneError::DanglingReference { kind: "shape", index: 7, .. }));
    }
}

//! Scene objects and the arena that owns meshes, materials and instances.

use glam::{Affine3A, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::mesh::Mesh;

/// Local-to-world placement of an object: origin plus three basis axes.
pub type Frame = Affine3A;

/// Index of an object within its [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub usize);

/// Index of a mesh within its [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub usize);

/// Index of a material within its [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaterialId(pub usize);

/// Index of an instance group within its [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub usize);

/// Surface appearance reference. Shading itself is left to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name.
    pub name: String,
    /// Base colour in linear RGB.
    pub color: Vec3,
}

/// Marker grouping objects that share geometry for instanced rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Instance group name.
    pub name: String,
}

/// A named, placed reference to a mesh and a material.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Object name, unique within the scene for lookup purposes.
    pub name: String,
    /// Placement frame.
    pub frame: Frame,
    /// Referenced mesh, possibly shared with other objects.
    pub shape: Option<ShapeId>,
    /// Referenced material.
    pub material: Option<MaterialId>,
    /// Instance group this object belongs to.
    pub instance: Option<InstanceId>,
}

impl Object {
    /// Create an unplaced object with no shape or material.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frame: Frame::IDENTITY,
            shape: None,
            material: None,
            instance: None,
        }
    }
}

/// Owner of every object, mesh, material and instance group.
///
/// Ids handed out by a scene stay valid for its lifetime; entities are
/// never removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub(crate) objects: Vec<Object>,
    pub(crate) shapes: Vec<Mesh>,
    pub(crate) materials: Vec<Material>,
    pub(crate) instances: Vec<Instance>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new object.
    pub fn add_object(&mut self, object: Object) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    /// Register a new mesh.
    pub fn add_shape(&mut self, mesh: Mesh) -> ShapeId {
        self.shapes.push(mesh);
        ShapeId(self.shapes.len() - 1)
    }

    /// Register a new material.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Register a new instance group.
    pub fn add_instance(&mut self, name: impl Into<String>) -> InstanceId {
        self.instances.push(Instance { name: name.into() });
        InstanceId(self.instances.len() - 1)
    }

    /// Look up an object by exact name. The first match wins.
    pub fn find_object(&self, name: &str) -> Result<ObjectId, SceneError> {
        self.objects
            .iter()
            .position(|o| o.name == name)
            .map(ObjectId)
            .ok_or_else(|| SceneError::UnknownObject(name.to_string()))
    }

    /// Every object whose name contains `pattern`, in scene order.
    pub fn find_objects_matching(&self, pattern: &str) -> Vec<ObjectId> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.name.contains(pattern))
            .map(|(i, _)| ObjectId(i))
            .collect()
    }

    /// The mesh referenced by an object.
    pub fn object_shape(&self, id: ObjectId) -> Result<ShapeId, SceneError> {
        let object = self.object(id);
        object
            .shape
            .ok_or_else(|| SceneError::MissingShape(object.name.clone()))
    }

    /// Borrow an object.
    pub fn object(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    /// Mutably borrow an object.
    pub fn object_mut(&mut self, id: ObjectId) -> &mut Object {
        &mut self.objects[id.0]
    }

    /// Borrow a mesh.
    pub fn shape(&self, id: ShapeId) -> &Mesh {
        &self.shapes[id.0]
    }

    /// Mutably borrow a mesh.
    pub fn shape_mut(&mut self, id: ShapeId) -> &mut Mesh {
        &mut self.shapes[id.0]
    }

    /// Borrow a material.
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    /// Borrow an instance group.
    pub fn instance(&self, id: InstanceId) -> &Instance {
        &self.instances[id.0]
    }

    /// All objects in scene order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// All meshes.
    pub fn shapes(&self) -> &[Mesh] {
        &self.shapes
    }

    /// All materials.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// All instance groups.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }
}

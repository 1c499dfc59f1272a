use glam::Vec3;
use verdant_gen::{
    DisplacementParams, GrassParams, HairParams, RandomStream, TerrainParams, make_displacement,
    make_grass, make_hair, make_terrain,
};
use verdant_noise::ridge;
use verdant_scene::{Mesh, Object, ObjectId, Scene};

fn flat_quad() -> Mesh {
    Mesh {
        positions: vec![
            Vec3::new(-0.5, 0.0, -0.5),
            Vec3::new(0.5, 0.0, -0.5),
            Vec3::new(0.5, 0.0, 0.5),
            Vec3::new(-0.5, 0.0, 0.5),
        ],
        normals: vec![Vec3::Y; 4],
        quads: vec![[0, 3, 2, 1]],
        ..Default::default()
    }
}

fn add_mesh_object(scene: &mut Scene, name: &str, mesh: Mesh) -> ObjectId {
    let shape = scene.add_shape(mesh);
    scene.add_object(Object {
        shape: Some(shape),
        ..Object::new(name)
    })
}

#[test]
fn test_terrain_on_flat_quad_matches_closed_form() {
    let mut scene = Scene::new();
    let ground = add_mesh_object(&mut scene, "ground", flat_quad());
    let corners = flat_quad().positions;
    let params = TerrainParams {
        size: 1.0,
        center: Vec3::ZERO,
        height: 0.1,
        scale: 1.0,
        octaves: 0,
        ..Default::default()
    };

    make_terrain(&mut scene, ground, &params).unwrap();

    let mesh = scene.shape(scene.object(ground).shape.unwrap());
    for (v, displaced) in corners.iter().zip(&mesh.positions) {
        let expected = 0.1 * ridge(*v, 0) * (1.0 - v.length());
        let offset = *displaced - *v;
        assert!(offset.x.abs() < 1e-7 && offset.z.abs() < 1e-7);
        assert!(
            (offset.y - expected).abs() < 1e-6,
            "corner {v}: expected {expected}, got {}",
            offset.y
        );
    }
    assert_eq!(mesh.colors.len(), 4);
}

fn build_scene() -> (Scene, [ObjectId; 5]) {
    let mut scene = Scene::new();
    let terrain = add_mesh_object(&mut scene, "terrain", flat_quad());
    let rock = add_mesh_object(&mut scene, "rock", flat_quad());
    let fur = add_mesh_object(&mut scene, "fur", flat_quad());
    let hair = scene.add_object(Object::new("hair"));
    let blade = add_mesh_object(
        &mut scene,
        "grass_blade",
        Mesh {
            positions: vec![Vec3::ZERO, Vec3::X * 0.01, Vec3::Y * 0.1],
            triangles: vec![[0, 1, 2]],
            ..Default::default()
        },
    );
    (scene, [terrain, fur, hair, blade, rock])
}

fn run_all(seed: u64) -> Scene {
    let (mut scene, [terrain, fur, hair, blade, rock]) = build_scene();
    let root = RandomStream::new(seed);

    make_terrain(&mut scene, terrain, &TerrainParams::default()).unwrap();
    make_displacement(&mut scene, rock, &DisplacementParams::default()).unwrap();
    let hair_params = HairParams {
        count: 64,
        steps: 4,
        ..Default::default()
    };
    make_hair(&mut scene, fur, hair, &hair_params, &mut root.fork(0)).unwrap();
    let grass_params = GrassParams {
        count: 32,
        ..Default::default()
    };
    make_grass(&mut scene, terrain, &[blade], &grass_params, &mut root.fork(1)).unwrap();
    scene
}

#[test]
fn test_full_pipeline_is_deterministic() {
    let a = run_all(19_873_991);
    let b = run_all(19_873_991);
    assert_eq!(a.shapes(), b.shapes());
    assert_eq!(a.objects(), b.objects());

    let c = run_all(1);
    assert_ne!(a.shapes(), c.shapes());
}

#[test]
fn test_full_pipeline_keeps_meshes_consistent() {
    let scene = run_all(5);
    for mesh in scene.shapes() {
        assert!(mesh.attributes_consistent());
    }

    let hair = scene.find_object("hair").unwrap();
    let strands = scene.shape(scene.object_shape(hair).unwrap());
    assert_eq!(strands.len(), 64 * 5);
    assert_eq!(strands.lines.len(), 64 * 4);

    assert_eq!(scene.find_objects_matching("grass_blade.").len(), 32);
}

#[test]
fn test_unknown_object_reported() {
    let (scene, _) = build_scene();
    let err = scene.find_object("missing").unwrap_err();
    assert_eq!(err.to_string(), "unknown object missing");
}

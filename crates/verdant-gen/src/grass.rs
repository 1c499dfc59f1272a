//! Instanced prototype scattering over a surface.

use std::f32::consts::TAU;

use glam::{Affine3A, Vec3};
use tracing::{debug, info};
use verdant_scene::{Frame, Object, ObjectId, Scene};

use crate::error::GenError;
use crate::rng::RandomStream;
use crate::sampler::sample_surface;

/// Scatter generator parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GrassParams {
    /// Number of instances to place.
    pub count: usize,
    /// Uniform scale range.
    pub scale_range: (f32, f32),
    /// Tilt angle range in radians, about the local Z axis.
    pub tilt_range: (f32, f32),
    /// Yaw angle range in radians, about the local Y axis.
    pub yaw_range: (f32, f32),
    /// Append the sampled points to the placement mesh.
    pub extend_base: bool,
}

impl Default for GrassParams {
    fn default() -> Self {
        Self {
            count: 10_000,
            scale_range: (0.9, 1.0),
            tilt_range: (0.1, 0.2),
            yaw_range: (0.0, TAU),
            extend_base: true,
        }
    }
}

impl GrassParams {
    fn validate(&self) -> Result<(), GenError> {
        for (name, (lo, hi)) in [
            ("scale_range", self.scale_range),
            ("tilt_range", self.tilt_range),
            ("yaw_range", self.yaw_range),
        ] {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(GenError::InvalidParameter {
                    name,
                    reason: format!("expected a finite range lo <= hi, got ({lo}, {hi})"),
                });
            }
        }
        Ok(())
    }
}

/// Placement frame of one scattered instance.
///
/// Translates to `position`, scales uniformly, then yaws about the frame's Y
/// axis and tilts about its Z axis.
pub fn scatter_frame(position: Vec3, scale: f32, yaw: f32, tilt: f32) -> Frame {
    let frame = Affine3A::from_translation(position);
    let up = Vec3::from(frame.matrix3.y_axis);
    let forward = Vec3::from(frame.matrix3.z_axis);
    frame
        * Affine3A::from_scale(Vec3::splat(scale))
        * Affine3A::from_axis_angle(up, yaw)
        * Affine3A::from_axis_angle(forward, tilt)
}

/// Scatter instances of `prototypes` over the surface of `base`.
///
/// Every prototype is first given its own instance group. Each new object
/// shares the mesh, material and instance group of a uniformly chosen
/// prototype; no prototype mesh is touched. Returns the new objects in
/// creation order.
pub fn make_grass(
    scene: &mut Scene,
    base: ObjectId,
    prototypes: &[ObjectId],
    params: &GrassParams,
    rng: &mut RandomStream,
) -> Result<Vec<ObjectId>, GenError> {
    if prototypes.is_empty() {
        return Err(GenError::NoPrototypes);
    }
    params.validate()?;
    let base_shape = scene.object_shape(base)?;
    for &prototype in prototypes {
        scene.object_shape(prototype)?;
    }

    let samples = sample_surface(scene.shape(base_shape), params.count, rng)?;

    for &prototype in prototypes {
        let name = scene.object(prototype).name.clone();
        let instance = scene.add_instance(name);
        scene.object_mut(prototype).instance = Some(instance);
    }
    if params.extend_base {
        let range = samples.append_to(scene.shape_mut(base_shape));
        debug!(start = range.start, end = range.end, "Extended placement mesh");
    }

    let mut created = Vec::with_capacity(samples.len());
    for (i, &position) in samples.positions.iter().enumerate() {
        let prototype = scene.object(prototypes[rng.next_index(prototypes.len())]);
        let scale = rng.next_range(params.scale_range.0, params.scale_range.1);
        let tilt = rng.next_range(params.tilt_range.0, params.tilt_range.1);
        let yaw = rng.next_range(params.yaw_range.0, params.yaw_range.1);

        let object = Object {
            name: format!("{}.{i}", prototype.name),
            frame: scatter_frame(position, scale, yaw, tilt),
            shape: prototype.shape,
            material: prototype.material,
            instance: prototype.instance,
        };
        created.push(scene.add_object(object));
    }

    info!(
        base = %scene.object(base).name,
        prototypes = prototypes.len(),
        instances = created.len(),
        "Generated grass"
    );
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_scene::{Material, Mesh};

    fn ground() -> Mesh {
        Mesh {
            positions: vec![
                Vec3::new(-1.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(-1.0, 0.0, 1.0),
            ],
            normals: vec![Vec3::Y; 4],
            quads: vec![[0, 3, 2, 1]],
            ..Default::default()
        }
    }

    fn blade(height: f32) -> Mesh {
        Mesh {
            positions: vec![Vec3::new(-0.01, 0.0, 0.0), Vec3::new(0.01, 0.0, 0.0), Vec3::Y * height],
            triangles: vec![[0, 1, 2]],
            ..Default::default()
        }
    }

    fn scene_with_prototypes(k: usize) -> (Scene, ObjectId, Vec<ObjectId>) {
        let mut scene = Scene::new();
        let shape = scene.add_shape(ground());
        let base = scene.add_object(Object {
            shape: Some(shape),
            ..Object::new("ground")
        });
        let prototypes = (0..k)
            .map(|i| {
                let shape = scene.add_shape(blade(0.1 + i as f32 * 0.05));
                let material = scene.add_material(Material {
                    name: format!("blade{i}"),
                    color: Vec3::new(0.1, 0.5, 0.1),
                });
                scene.add_object(Object {
                    shape: Some(shape),
                    material: Some(material),
                    ..Object::new(format!("grass{i}"))
                })
            })
            .collect();
        (scene, base, prototypes)
    }

    fn params(count: usize) -> GrassParams {
        GrassParams {
            count,
            ..Default::default()
        }
    }

    #[test]
    fn test_creates_one_object_per_sample() {
        let (mut scene, base, prototypes) = scene_with_prototypes(3);
        let before = scene.objects().len();
        let created = make_grass(&mut scene, base, &prototypes, &params(50), &mut RandomStream::new(198_767))
            .unwrap();
        assert_eq!(created.len(), 50);
        assert_eq!(scene.objects().len(), before + 50);
    }

    #[test]
    fn test_instances_share_prototype_data() {
        let (mut scene, base, prototypes) = scene_with_prototypes(3);
        let created = make_grass(&mut scene, base, &prototypes, &params(40), &mut RandomStream::new(1))
            .unwrap();
        for id in created {
            let object = scene.object(id);
            let source = prototypes
                .iter()
                .map(|&p| scene.object(p))
                .find(|p| p.shape == object.shape)
                .expect("instance must reference a prototype mesh");
            assert_eq!(object.material, source.material);
            assert_eq!(object.instance, source.instance);
            assert!(object.instance.is_some());
        }
        assert_eq!(scene.instances().len(), 3);
    }

    #[test]
    fn test_prototype_meshes_untouched() {
        let (mut scene, base, prototypes) = scene_with_prototypes(2);
        let snapshot: Vec<Mesh> = prototypes
            .iter()
            .map(|&p| scene.shape(scene.object(p).shape.unwrap()).clone())
            .collect();
        make_grass(&mut scene, base, &prototypes, &params(25), &mut RandomStream::new(9)).unwrap();
        for (&p, mesh) in prototypes.iter().zip(&snapshot) {
            assert_eq!(scene.shape(scene.object(p).shape.unwrap()), mesh);
        }
    }

    #[test]
    fn test_placement_mesh_extended_when_requested() {
        let (mut scene, base, prototypes) = scene_with_prototypes(1);
        make_grass(&mut scene, base, &prototypes, &params(10), &mut RandomStream::new(4)).unwrap();
        let ground = scene.shape(scene.object(base).shape.unwrap());
        assert_eq!(ground.len(), 14);
        assert!(ground.attributes_consistent());

        let (mut scene, base, prototypes) = scene_with_prototypes(1);
        let p = GrassParams {
            extend_base: false,
            ..params(10)
        };
        make_grass(&mut scene, base, &prototypes, &p, &mut RandomStream::new(4)).unwrap();
        assert_eq!(scene.shape(scene.object(base).shape.unwrap()).len(), 4);
    }

    #[test]
    fn test_frames_sit_on_surface_with_bounded_scale() {
        let (mut scene, base, prototypes) = scene_with_prototypes(2);
        let created = make_grass(&mut scene, base, &prototypes, &params(100), &mut RandomStream::new(12))
            .unwrap();
        for id in created {
            let frame = scene.object(id).frame;
            let origin = Vec3::from(frame.translation);
            assert!(origin.y.abs() < 1e-6);
            assert!(origin.x.abs() <= 1.0 + 1e-5 && origin.z.abs() <= 1.0 + 1e-5);
            let scale = Vec3::from(frame.matrix3.x_axis).length();
            assert!((0.9 - 1e-5..=1.0 + 1e-5).contains(&scale), "scale {scale} out of range");
        }
    }

    #[test]
    fn test_scatter_frame_composition() {
        let frame = scatter_frame(Vec3::new(1.0, 2.0, 3.0), 0.5, 0.0, 0.0);
        assert!(frame.transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-6));
        assert!(frame.transform_vector3(Vec3::X).abs_diff_eq(Vec3::X * 0.5, 1e-6));

        // Tilt is applied first in local space, then yaw.
        let frame = scatter_frame(Vec3::ZERO, 1.0, std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
        let tip = frame.transform_vector3(Vec3::Y);
        assert!(tip.abs_diff_eq(Vec3::Z, 1e-5), "got {tip}");
    }

    #[test]
    fn test_same_seed_same_scatter() {
        let run = || {
            let (mut scene, base, prototypes) = scene_with_prototypes(3);
            make_grass(&mut scene, base, &prototypes, &params(30), &mut RandomStream::new(77)).unwrap();
            scene
        };
        assert_eq!(run().objects(), run().objects());
    }

    #[test]
    fn test_empty_prototypes_rejected() {
        let (mut scene, base, _) = scene_with_prototypes(0);
        let result = make_grass(&mut scene, base, &[], &params(5), &mut RandomStream::new(1));
        assert!(matches!(result, Err(GenError::NoPrototypes)));
        assert!(scene.instances().is_empty());
    }

    #[test]
    fn test_degenerate_ground_registers_no_instances() {
        let (mut scene, base, prototypes) = scene_with_prototypes(2);
        let ground = scene.object_shape(base).unwrap();
        for p in &mut scene.shape_mut(ground).positions {
            *p = Vec3::ZERO;
        }
        let result = make_grass(&mut scene, base, &prototypes, &params(10), &mut RandomStream::new(3));
        assert!(matches!(result, Err(GenError::DegenerateSurface)));
        assert!(scene.instances().is_empty());
        for &prototype in &prototypes {
            assert_eq!(scene.object(prototype).instance, None);
        }
    }
}

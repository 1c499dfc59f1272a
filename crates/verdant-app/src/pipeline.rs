//! Load a scene, run the selected generators, save the result.

use tracing::{info, warn};
use verdant_config::{CliArgs, Config};
use verdant_gen::{
    GenError, RandomStream, make_displacement, make_grass, make_hair, make_terrain,
};
use verdant_scene::{Scene, load_scene, save_scene};

use crate::error::AppError;

/// What a run added to the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Generators that ran, in order.
    pub generators: Vec<&'static str>,
    /// Objects created by the scatter generator.
    pub scattered: usize,
}

/// Run every generator selected in `args` against `scene`.
///
/// Stops at the first failure; the scene may then be partially modified and
/// must not be saved.
pub fn generate(scene: &mut Scene, args: &CliArgs, config: &Config) -> Result<RunSummary, AppError> {
    let mut summary = RunSummary::default();

    if let Some(name) = &args.terrain {
        let object = scene.find_object(name)?;
        make_terrain(scene, object, &config.terrain.params())?;
        summary.generators.push("terrain");
    }

    if let Some(name) = &args.displacement {
        let object = scene.find_object(name)?;
        make_displacement(scene, object, &config.displacement.params())?;
        summary.generators.push("displacement");
    }

    if let Some(name) = &args.hair {
        let base_name = args.hairbase.as_deref().ok_or(AppError::MissingFlag("hairbase"))?;
        let base = scene.find_object(base_name)?;
        let hair = scene.find_object(name)?;
        let mut rng = RandomStream::new(config.hair.seed);
        make_hair(scene, base, hair, &config.hair.params(), &mut rng)?;
        summary.generators.push("hair");
    }

    if let Some(pattern) = &args.grass {
        let base_name = args.grassbase.as_deref().ok_or(AppError::MissingFlag("grassbase"))?;
        let base = scene.find_object(base_name)?;
        let prototypes: Vec<_> = scene
            .find_objects_matching(pattern)
            .into_iter()
            .filter(|&id| id != base)
            .collect();
        if prototypes.is_empty() {
            warn!(pattern = %pattern, "No object name contains the grass pattern");
            return Err(GenError::NoPrototypes.into());
        }
        let mut rng = RandomStream::new(config.grass.seed);
        let created = make_grass(scene, base, &prototypes, &config.grass.params(), &mut rng)?;
        summary.scattered = created.len();
        summary.generators.push("grass");
    }

    Ok(summary)
}

/// Full run: load `args.scene`, generate, save to `args.output`.
///
/// Nothing is written unless every step succeeds.
pub fn run(args: &CliArgs, config: &Config) -> Result<RunSummary, AppError> {
    let mut scene = load_scene(&args.scene)?;
    let summary = generate(&mut scene, args, config)?;
    save_scene(&args.output, &scene)?;

    info!(
        input = %args.scene.display(),
        output = %args.output.display(),
        generators = ?summary.generators,
        "Run complete"
    );
    Ok(summary)
}

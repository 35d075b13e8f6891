pub mod configuration;
pub mod error;
pub mod simulation;
pub mod visualization;

use std::io::{Read, Write};

use log::info;
pub use error::{Error, Result};

pub use simulation::states::{Body, System};
pub use simulation::vector::Vector;
pub use simulation::real::{Precision, Real, SaturatingDecimal};
pub use simulation::forces::{AccelSet, Acceleration, Gravity, Projection};
pub use simulation::integrator::{step, Integrator};
pub use simulation::collisions::merge_collisions;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ConfigFormat, ScenarioConfig};

pub use visualization::canvas::{Canvas, ColorDomain, Pen, PixelFormat};
pub use visualization::gradient::{Gradient, Keyframe};
pub use visualization::bitmap::{encode, write_bmp};
pub use visualization::render::{composite, BackgroundFill, View};
pub use visualization::stars::StarField;

/// Simulate and composite a whole scenario in the numeric type `S`
pub fn render_scenario<S: Real>(cfg: &ScenarioConfig) -> Result<Canvas> {
    let scenario = Scenario::<S>::build_scenario(cfg)?;
    let frames = scenario.frames()?;

    info!("instantiating {}x{} canvas", scenario.view.width, scenario.view.height);
    let mut canvas = scenario.canvas()?;

    let mut stars = match (cfg.stars, cfg.seed) {
        (0, _) => None,
        (n, Some(seed)) => Some(StarField::seeded(n, seed)),
        (n, None) => Some(StarField::from_entropy(n)),
    };

    info!("rendering {} frames", scenario.frames);
    composite(
        &mut canvas,
        &scenario.view,
        &scenario.gradient,
        scenario.frames,
        frames,
        stars.as_mut().map(|s| s as &mut dyn BackgroundFill),
    );
    Ok(canvas)
}

/// Read a scenario from `input` and write the finished bitmap to `output`
///
/// Nothing is written unless the configuration is valid.
pub fn run<R: Read, W: Write>(input: R, format: ConfigFormat, output: &mut W) -> Result<()> {
    info!("loading input system");
    let cfg = ScenarioConfig::from_reader(input, format)?;

    let canvas = match cfg.precision {
        Precision::Float => render_scenario::<f64>(&cfg)?,
        Precision::Decimal => render_scenario::<SaturatingDecimal>(&cfg)?,
    };

    info!("writing image");
    write_bmp(&canvas, output)?;
    Ok(())
}

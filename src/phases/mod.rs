pub mod capture;
pub mod cleanup;
pub mod geometry;
pub mod layout;
pub mod mesh;
pub mod outputs;
pub mod plan;
pub mod precipitation;
pub mod project;
pub mod simulation;

use crate::automation::checkpoint::Checkpoint;
use crate::automation::context::RunContext;
use crate::error::Result;
use crate::settings::parse_friction_slope;
use cleanup::CleanupReport;

/// Steps of the model build as it is driven through the HEC-RAS GUI, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Project,
    Geometry,
    Mesh,
    PlanGeometry,
    Precipitation,
    SimulationSettings,
    Simulation,
    Outputs,
    Cleanup,
}

impl Phase {
    pub const ALL: [Phase; 9] = [
        Phase::Project,
        Phase::Geometry,
        Phase::Mesh,
        Phase::PlanGeometry,
        Phase::Precipitation,
        Phase::SimulationSettings,
        Phase::Simulation,
        Phase::Outputs,
        Phase::Cleanup,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Phase::Project => "New HEC-RAS project",
            Phase::Geometry => "Terrain, layers and 2D flow area",
            Phase::Mesh => "Mesh generation",
            Phase::PlanGeometry => "Geometry data",
            Phase::Precipitation => "Unsteady flow data",
            Phase::SimulationSettings => "Unsteady flow plan",
            Phase::Simulation => "Simulation",
            Phase::Outputs => "Result maps and animations",
            Phase::Cleanup => "Archiving",
        }
    }

    fn begin(self, ctx: &RunContext) {
        let number = Phase::ALL.iter().position(|p| *p == self).unwrap_or(0) + 1;
        ctx.report(format!("[{}/{}] {}", number, Phase::ALL.len(), self.title()));
    }
}

/// Last component of a Windows or POSIX path, as typed into file dialogs.
pub fn file_name_of(path: &str) -> &str {
    let path = path.trim();
    path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path)
}

/// The whole build. Blocks at each checkpoint until the operator answers.
pub fn run_all(ctx: &mut RunContext) -> Result<CleanupReport> {
    // Rainfall problems should surface before HEC-RAS is touched.
    let rainfall = precipitation::load_rainfall(&ctx.config, &ctx.folder)?;
    ctx.log.info(format!(
        "Rainfall: {} ordinates at {}, {:.1} mm in total",
        rainfall.hyetograph.len(),
        rainfall.interval,
        rainfall.hyetograph.total_mm()
    ));

    Phase::Project.begin(ctx);
    project::run(ctx)?;

    Phase::Geometry.begin(ctx);
    geometry::run(ctx)?;
    ctx.checkpoint(Checkpoint::BoundaryConditions, "")?;

    Phase::Mesh.begin(ctx);
    mesh::run(ctx)?;
    ctx.checkpoint(Checkpoint::FixMeshes, "")?;

    Phase::PlanGeometry.begin(ctx);
    plan::run(ctx)?;
    let default_slope = ctx.config.friction_slope.trim().to_string();
    let friction_slope = ctx
        .checkpoint(Checkpoint::FrictionSlope, &default_slope)?
        .filter(|entry| parse_friction_slope(entry).is_some())
        .unwrap_or(default_slope);
    ctx.log.info(format!("Friction slope: {}", friction_slope));

    Phase::Precipitation.begin(ctx);
    precipitation::run(ctx, &rainfall, &friction_slope)?;

    Phase::SimulationSettings.begin(ctx);
    simulation::configure(ctx, &rainfall.hyetograph)?;
    ctx.checkpoint(Checkpoint::ComputationalSettings, "")?;

    Phase::Simulation.begin(ctx);
    simulation::run(ctx)?;

    Phase::Outputs.begin(ctx);
    outputs::run(ctx)?;

    Phase::Cleanup.begin(ctx);
    let report = cleanup::run(ctx)?;
    ctx.report(format!("Model complete. Outputs saved to {}", ctx.folder.root.display()));
    ctx.notify(Checkpoint::ModelComplete);
    Ok(report)
}

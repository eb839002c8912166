use super::layout::analysis;
use super::layout::main_window as main;
use crate::automation::context::RunContext;
use crate::automation::poller::{poll_until_complete, PollSpec};
use crate::automation::script::Script;
use crate::core::coords::Point;
use crate::error::{AutomationError, Result};
use crate::hydrology::intervals::IntervalField;
use crate::hydrology::rainfall::Hyetograph;
use crate::settings::RunConfiguration;

fn field(point: Point, text: &str) -> Script {
    Script::new().click(point).type_text(text.trim())
}

fn interval(config: &RunConfiguration, which: IntervalField) -> Result<usize> {
    let value = match which {
        IntervalField::Precipitation => &config.rainfall_interval,
        IntervalField::Computation => &config.computation_interval,
        IntervalField::HydrographOutput => &config.hydrograph_output_interval,
        IntervalField::MappingOutput => &config.mapping_output_interval,
        IntervalField::DetailedOutput => &config.detailed_output_interval,
    };
    which.index_of(value).ok_or_else(|| {
        AutomationError::Input(format!("{} '{}' is not a HEC-RAS option", which.label(), value))
    })
}

/// Plan window: programs to run, simulation window, short ID and output intervals.
pub fn settings_script(config: &RunConfiguration, rainfall: &Hyetograph) -> Result<Script> {
    let mut script = Script::new()
        .note("Configuring the unsteady flow analysis")
        .wait_secs(2.0)
        .click_wait(main::UNSTEADY_ANALYSIS, 1.0);
    for program in analysis::PROGRAMS {
        script = script.click(program);
    }

    let combos = [
        (analysis::COMPUTATION_INTERVAL, IntervalField::Computation),
        (analysis::HYDROGRAPH_INTERVAL, IntervalField::HydrographOutput),
        (analysis::MAPPING_INTERVAL, IntervalField::MappingOutput),
        (analysis::DETAILED_INTERVAL, IntervalField::DetailedOutput),
    ];

    script = script
        .wait_secs(2.0)
        .then(field(analysis::START_DATE, rainfall.start_date()))
        .wait_secs(1.0)
        .then(field(analysis::END_DATE, rainfall.end_date()))
        .wait_secs(1.0)
        .then(field(analysis::START_TIME, &config.starting_time))
        .wait_secs(1.0)
        .then(field(analysis::END_TIME, &config.ending_time))
        .wait_secs(2.0)
        .then(field(analysis::SHORT_ID, &config.short_id()));

    for (point, which) in combos {
        script = script.wait_secs(2.0).combo_at(point, interval(config, which)?);
    }

    Ok(script
        .note("Saving the plan")
        .wait_secs(2.0)
        .click_wait(analysis::FILE_MENU, 1.0)
        .click_wait(analysis::SAVE_PLAN_AS, 1.0)
        .click(analysis::PLAN_TITLE)
        .type_text(config.plan_data_name())
        .wait_secs(1.0)
        .click_wait(analysis::PLAN_TITLE_OK, 1.0)
        .click(analysis::SHORT_ID_OK))
}

pub fn configure(ctx: &mut RunContext, rainfall: &Hyetograph) -> Result<()> {
    let script = settings_script(&ctx.config, rainfall)?;
    ctx.play(script)
}

/// Save the plan, compute, and wait for the solver to finish.
pub fn run(ctx: &mut RunContext) -> Result<()> {
    ctx.play(
        Script::new()
            .note("Running the unsteady flow simulation")
            .wait_secs(2.0)
            .click_wait(analysis::FILE_MENU, 1.0)
            .click_wait(analysis::SAVE_PLAN_AS, 5.0)
            .click(analysis::COMPUTE),
    )?;
    poll_until_complete(ctx, &PollSpec::simulation())?;
    ctx.play(
        Script::new()
            .note("Simulation finished")
            .click_wait(analysis::CLOSE_COMPUTE, 2.0)
            .click_wait(analysis::WINDOW_FOCUS, 1.0)
            .close_window()
            .wait_secs(2.0)
            .click_wait(main::TITLE_BAR, 1.0)
            .click(main::SAVE_AFTER_RUN),
    )
}

use super::layout::main_window as main;
use super::layout::results;
use crate::automation::collector::{archive_input, copy_dir_all, empty_dir, input_archive_plan};
use crate::automation::context::RunContext;
use crate::automation::script::Script;
use crate::error::Result;
use std::path::PathBuf;

/// What ended up in the run folder. Failures are logged, never retried.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CleanupReport {
    pub inputs_copied: usize,
    pub project_files_copied: u64,
    pub failures: Vec<String>,
}

pub fn close_script() -> Script {
    Script::new()
        .note("Saving and closing HEC-RAS")
        .click_wait(results::FILE_MENU, 1.0)
        .click_wait(results::SAVE, 2.0)
        .close_window()
        .wait_secs(1.0)
        .click_wait(main::SAVE_ON_EXIT, 2.0)
        .close_window()
}

/// Copy the inputs and the HEC-RAS project into the run folder, then clear the
/// project out of Documents.
pub fn collect_files(ctx: &mut RunContext) -> Result<CleanupReport> {
    let mut report = CleanupReport::default();

    ctx.report("Archiving input files");
    for entry in input_archive_plan(&ctx.config) {
        match archive_input(&entry, &ctx.folder.inputs) {
            Ok(count) => {
                report.inputs_copied += count;
                ctx.log.info(format!("Copied {}", entry.file_name));
            }
            Err(e) => {
                ctx.log.warn(format!("Failed to copy {}: {}", entry.source.display(), e));
                report.failures.push(e.to_string());
            }
        }
    }

    let project = PathBuf::from(ctx.config.documents_folder.trim()).join(ctx.config.project_name());
    let target = ctx.folder.path(&ctx.config.project_name());
    ctx.report("Copying the HEC-RAS project");
    match copy_dir_all(&project, &target) {
        Ok(count) => {
            report.project_files_copied = count;
            ctx.log.info(format!("Copied {} project files to {}", count, target.display()));
        }
        Err(e) => {
            ctx.log.warn(format!("Failed to copy the project folder: {}", e));
            report.failures.push(e.to_string());
            // Never empty a project that has not been copied out.
            return Ok(report);
        }
    }

    ctx.wait_secs(5.0)?;
    match empty_dir(&project) {
        Ok(failed) => {
            for (path, reason) in failed {
                ctx.log.warn(format!("Failed to delete {}. Reason: {}", path.display(), reason));
                report.failures.push(format!("{}: {}", path.display(), reason));
            }
        }
        Err(e) => {
            ctx.log.warn(format!("Failed to clear the project folder: {}", e));
            report.failures.push(e.to_string());
        }
    }
    Ok(report)
}

pub fn run(ctx: &mut RunContext) -> Result<CleanupReport> {
    ctx.play(close_script())?;
    collect_files(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::context::testing::Harness;
    use crate::core::desktop::fake::RecordingDesktop;
    use crate::settings::RunConfiguration;
    use std::fs;
    use std::path::Path;

    fn setup(root: &Path) -> RunConfiguration {
        let gis = root.join("gis");
        fs::create_dir_all(&gis).unwrap();
        for name in ["lo31.prj", "dem.tif", "perimeter.shp", "perimeter.dbf", "roads.shp", "landuse.shp", "soils.shp"] {
            fs::write(gis.join(name), name).unwrap();
        }
        let docs = root.join("docs");
        let project = docs.join("Mooi HEC-RAS Project");
        fs::create_dir_all(project.join("Terrain")).unwrap();
        fs::write(project.join("Mooi.prj"), "project").unwrap();
        fs::write(project.join("Terrain").join("dem.hdf"), "terrain").unwrap();

        let path = |name: &str| gis.join(name).display().to_string();
        RunConfiguration {
            area_name: "Mooi".to_string(),
            documents_folder: docs.display().to_string(),
            projection_file: path("lo31.prj"),
            terrain_file: path("dem.tif"),
            flow_area_file: path("perimeter.shp"),
            breaklines_file: path("roads.shp"),
            land_use_file: path("landuse.shp"),
            soil_file: path("soils.shp"),
            ..RunConfiguration::default()
        }
    }

    #[test]
    fn test_inputs_and_project_end_up_in_run_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let config = setup(tmp.path());
        let run_dir = tmp.path().join("run");
        fs::create_dir_all(run_dir.join("User Input Files")).unwrap();

        let mut h = Harness::new(config, &run_dir, RecordingDesktop::default());
        let report = run(&mut h.ctx).unwrap();

        assert_eq!(report.inputs_copied, 7, "six inputs and one sidecar");
        assert_eq!(report.project_files_copied, 2);
        assert!(report.failures.is_empty(), "{:?}", report.failures);

        let inputs = run_dir.join("User Input Files");
        assert!(inputs.join("Mooi 2D Flow Area.shp").is_file());
        assert!(inputs.join("Mooi 2D Flow Area.dbf").is_file());
        assert!(run_dir.join("Mooi HEC-RAS Project").join("Terrain").join("dem.hdf").is_file());

        let documents_copy = tmp.path().join("docs").join("Mooi HEC-RAS Project");
        assert!(documents_copy.is_dir());
        assert_eq!(fs::read_dir(&documents_copy).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_input_is_logged_and_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = setup(tmp.path());
        config.soil_file = tmp.path().join("gone.shp").display().to_string();
        let run_dir = tmp.path().join("run");
        fs::create_dir_all(run_dir.join("User Input Files")).unwrap();

        let mut h = Harness::new(config, &run_dir, RecordingDesktop::default());
        let report = collect_files(&mut h.ctx).unwrap();
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.inputs_copied, 6);
    }

    #[test]
    fn test_project_is_kept_when_copy_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = setup(tmp.path());
        config.area_name = "Other".to_string();
        let run_dir = tmp.path().join("run");
        fs::create_dir_all(run_dir.join("User Input Files")).unwrap();

        let mut h = Harness::new(config, &run_dir, RecordingDesktop::default());
        let report = collect_files(&mut h.ctx).unwrap();
        assert_eq!(report.project_files_copied, 0);
        assert!(tmp.path().join("docs").join("Mooi HEC-RAS Project").join("Mooi.prj").is_file());
    }
}

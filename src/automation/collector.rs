use crate::error::{AutomationError, Result};
use crate::settings::RunConfiguration;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Files that travel with a shapefile under the same stem.
pub const SHAPEFILE_SIDECARS: &[&str] = &["shx", "dbf", "prj", "cpg", "sbn", "sbx"];

pub const INPUTS_FOLDER: &str = "User Input Files";

/// The dated output folder of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunFolder {
    pub root: PathBuf,
    pub started: NaiveDateTime,
    pub inputs: PathBuf,
    /// False when the folder was already there.
    pub created: bool,
}

impl RunFolder {
    pub fn folder_name(timestamp: &NaiveDateTime, area_name: &str) -> String {
        format!("{} {}", timestamp.format("%Y-%m-%d %H%M"), area_name.trim())
    }

    /// Create `{output}/{timestamp} {area}` and its inputs subfolder.
    pub fn create(output_folder: &Path, timestamp: &NaiveDateTime, area_name: &str) -> Result<Self> {
        let root = output_folder.join(Self::folder_name(timestamp, area_name));
        let created = !root.exists();
        if created {
            fs::create_dir_all(&root).map_err(|e| AutomationError::io(&root, e))?;
            tracing::info!("Folder created: {}", root.display());
        } else {
            tracing::info!("Folder already exists: {}", root.display());
        }
        let inputs = root.join(INPUTS_FOLDER);
        fs::create_dir_all(&inputs).map_err(|e| AutomationError::io(&inputs, e))?;
        Ok(Self {
            root,
            started: *timestamp,
            inputs,
            created,
        })
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Run start as written into the project description.
    pub fn started_label(&self) -> String {
        self.started.format("%Y-%m-%d %H%M").to_string()
    }
}

fn file_stamp(path: &Path) -> Option<SystemTime> {
    let meta = fs::metadata(path).ok()?;
    meta.created().or_else(|_| meta.modified()).ok()
}

/// The newest regular file in `dir`, by creation time where the platform records it.
pub fn latest_file(dir: &Path) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| AutomationError::io(dir, e))?;
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(stamp) = file_stamp(&path) else {
            continue;
        };
        if newest.as_ref().map_or(true, |(best, _)| stamp > *best) {
            newest = Some((stamp, path));
        }
    }
    Ok(newest.map(|(_, path)| path))
}

/// Move a file, falling back to copy-and-delete across volumes.
///
/// If the source cannot be removed after copying, the copy is removed again, so the file
/// ends up in exactly one of the two places.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to).map_err(|e| AutomationError::io(from, e))?;
    if let Err(e) = fs::remove_file(from) {
        let _ = fs::remove_file(to);
        return Err(AutomationError::io(from, e));
    }
    Ok(())
}

/// Take the newest file out of `source_dir` and store it as `dest_dir/new_name`.
pub fn relocate_latest(source_dir: &Path, dest_dir: &Path, new_name: &str) -> Result<PathBuf> {
    let latest = latest_file(source_dir)?.ok_or_else(|| {
        AutomationError::io(
            source_dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no capture found"),
        )
    })?;
    fs::create_dir_all(dest_dir).map_err(|e| AutomationError::io(dest_dir, e))?;
    let target = dest_dir.join(new_name);
    move_file(&latest, &target)?;
    tracing::info!("Moved {} to {}", latest.display(), target.display());
    Ok(target)
}

/// One input file and the name it is archived under.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveEntry {
    pub source: PathBuf,
    pub file_name: String,
}

/// Inputs copied into `User Input Files`, renamed after the area.
pub fn input_archive_plan(config: &RunConfiguration) -> Vec<ArchiveEntry> {
    let area = config.area();
    let mut plan = vec![
        (&config.projection_file, "Projection File.prj"),
        (&config.terrain_file, "Terrain File.tif"),
        (&config.flow_area_file, "2D Flow Area.shp"),
        (&config.breaklines_file, "Breaklines.shp"),
        (&config.land_use_file, "Land Use Layer.shp"),
        (&config.soil_file, "Soil Layer.shp"),
    ];
    if config.use_rainfall_file {
        plan.push((&config.rainfall_file, "Rainfall Data.dat"));
    }
    plan.into_iter()
        .map(|(source, suffix)| ArchiveEntry {
            source: PathBuf::from(source.trim()),
            file_name: format!("{} {}", area, suffix),
        })
        .collect()
}

/// Copy one input. Shapefiles bring their sidecars along under the new stem.
/// Returns the number of files written.
pub fn archive_input(entry: &ArchiveEntry, dest_dir: &Path) -> Result<usize> {
    let target = dest_dir.join(&entry.file_name);
    fs::copy(&entry.source, &target).map_err(|e| AutomationError::io(&entry.source, e))?;
    let mut copied = 1;

    let is_shapefile = entry
        .source
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("shp"));
    if is_shapefile {
        for ext in SHAPEFILE_SIDECARS {
            let sidecar = entry.source.with_extension(ext);
            if sidecar.is_file() {
                let sidecar_target = target.with_extension(ext);
                fs::copy(&sidecar, &sidecar_target).map_err(|e| AutomationError::io(&sidecar, e))?;
                copied += 1;
            }
        }
    }
    Ok(copied)
}

pub fn copy_dir_all(from: &Path, to: &Path) -> Result<u64> {
    fs::create_dir_all(to).map_err(|e| AutomationError::io(to, e))?;
    let mut copied = 0;
    for entry in fs::read_dir(from).map_err(|e| AutomationError::io(from, e))? {
        let entry = entry.map_err(|e| AutomationError::io(from, e))?;
        let path = entry.path();
        let target = to.join(entry.file_name());
        if path.is_dir() {
            copied += copy_dir_all(&path, &target)?;
        } else {
            fs::copy(&path, &target).map_err(|e| AutomationError::io(&path, e))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Delete everything inside `dir`, keeping `dir` itself. Failures are collected, not fatal.
pub fn empty_dir(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let mut failures = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| AutomationError::io(dir, e))? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                failures.push((dir.to_path_buf(), e.to_string()));
                continue;
            }
        };
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        match removed {
            Ok(()) => tracing::info!("Deleted {}", path.display()),
            Err(e) => failures.push((path, e.to_string())),
        }
    }
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::thread;
    use std::time::Duration;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 28)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_folder_name_is_deterministic() {
        assert_eq!(RunFolder::folder_name(&stamp(), "Durban"), "2024-06-28 0905 Durban");
        assert_eq!(RunFolder::folder_name(&stamp(), " Durban "), "2024-06-28 0905 Durban");
    }

    #[test]
    fn test_create_twice_reuses_folder() {
        let dir = tempfile::tempdir().unwrap();
        let first = RunFolder::create(dir.path(), &stamp(), "Durban").unwrap();
        assert!(first.created);
        assert!(first.inputs.is_dir());
        assert_eq!(first.started_label(), "2024-06-28 0905");
        assert_eq!(first.root, dir.path().join("2024-06-28 0905 Durban"));

        let second = RunFolder::create(dir.path(), &stamp(), "Durban").unwrap();
        assert!(!second.created);
        assert_eq!(second.root, first.root);
    }

    #[test]
    fn test_relocate_takes_newest_and_leaves_no_copy() {
        let shots = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(shots.path().join("old.png"), b"old").unwrap();
        thread::sleep(Duration::from_millis(50));
        fs::write(shots.path().join("new.png"), b"new").unwrap();

        let moved = relocate_latest(shots.path(), out.path(), "Durban Max Depth.png").unwrap();
        assert_eq!(moved, out.path().join("Durban Max Depth.png"));
        assert_eq!(fs::read(&moved).unwrap(), b"new");
        assert!(!shots.path().join("new.png").exists());
        assert!(!shots.path().join("Durban Max Depth.png").exists());
        assert!(shots.path().join("old.png").exists());
    }

    #[test]
    fn test_relocate_from_empty_folder_fails() {
        let shots = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        assert!(relocate_latest(shots.path(), out.path(), "x.png").is_err());
    }

    #[test]
    fn test_latest_file_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        thread::sleep(Duration::from_millis(50));
        fs::create_dir(dir.path().join("sub")).unwrap();
        assert_eq!(latest_file(dir.path()).unwrap(), Some(dir.path().join("a.png")));
    }

    #[test]
    fn test_archive_plan_names() {
        let config = RunConfiguration {
            area_name: "Durban".to_string(),
            projection_file: "C:/in/za.prj".to_string(),
            use_rainfall_file: true,
            rainfall_file: "C:/in/rain.dat".to_string(),
            ..Default::default()
        };
        let plan = input_archive_plan(&config);
        assert_eq!(plan.len(), 7);
        assert_eq!(plan[0].file_name, "Durban Projection File.prj");
        assert_eq!(plan[0].source, PathBuf::from("C:/in/za.prj"));
        assert_eq!(plan[6].file_name, "Durban Rainfall Data.dat");

        let synthetic = RunConfiguration {
            use_rainfall_file: false,
            ..config
        };
        assert_eq!(input_archive_plan(&synthetic).len(), 6);
    }

    #[test]
    fn test_shapefile_sidecars_follow() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        for ext in ["shp", "shx", "dbf", "prj"] {
            fs::write(src.path().join(format!("area.{}", ext)), ext).unwrap();
        }
        let entry = ArchiveEntry {
            source: src.path().join("area.shp"),
            file_name: "Durban 2D Flow Area.shp".to_string(),
        };
        assert_eq!(archive_input(&entry, dest.path()).unwrap(), 4);
        assert!(dest.path().join("Durban 2D Flow Area.dbf").is_file());
        assert!(dest.path().join("Durban 2D Flow Area.prj").is_file());
        assert!(!dest.path().join("Durban 2D Flow Area.cpg").exists());
    }

    #[test]
    fn test_copy_and_empty_project_folder() {
        let docs = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let project = docs.path().join("Durban HEC-RAS Project");
        fs::create_dir_all(project.join("Terrain")).unwrap();
        fs::write(project.join("Durban.prj"), b"p").unwrap();
        fs::write(project.join("Terrain").join("t.hdf"), b"t").unwrap();

        let target = out.path().join("Durban HEC-RAS Project");
        assert_eq!(copy_dir_all(&project, &target).unwrap(), 2);
        assert!(target.join("Terrain").join("t.hdf").is_file());

        assert!(empty_dir(&project).unwrap().is_empty());
        assert!(project.is_dir());
        assert_eq!(fs::read_dir(&project).unwrap().count(), 0);
    }
}

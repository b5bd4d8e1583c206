use std::fs;
use std::path::Path;

use wamsort::{Config, Direction, GcodeError, Job};

const BRACKET_PLATE: &str = include_str!("../crates/wamsort-parser/tests/data/bracket_plate.gcode");

fn write_input(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn starts(job: &Job) -> Vec<(f64, f64)> {
    job.cuts()
        .iter()
        .map(|c| (c.start().x, c.start().y))
        .collect()
}

#[test]
fn test_reorder_writes_prefixed_copy() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "bracket_plate.gcode", BRACKET_PLATE);
    let config = Config::default();

    let mut job = Job::open(&input, &config).unwrap();
    assert_eq!(job.reorder().unwrap(), vec![1, 2, 0, 4, 3]);

    let output = job.save(&config).unwrap();
    assert_eq!(output, dir.path().join("t_bracket_plate.gcode"));
    assert_eq!(fs::read_to_string(&input).unwrap(), BRACKET_PLATE);

    let written = Job::open(&output, &config).unwrap();
    assert_eq!(
        starts(&written),
        vec![
            (20.0, 40.0),
            (150.0, 40.0),
            (0.0, 0.0),
            (220.0, 60.0),
            (220.0, 0.0)
        ]
    );
    assert_eq!(written.program().header(), job.program().header());
    assert_eq!(written.program().footer(), job.program().footer());
}

#[test]
fn test_reorder_is_stable() {
    let config = Config::default();
    let mut job = Job::from_text(BRACKET_PLATE, &config).unwrap();
    job.reorder().unwrap();
    let once = job.to_gcode();

    assert_eq!(job.reorder().unwrap(), vec![0, 1, 2, 3, 4]);
    assert_eq!(job.to_gcode(), once);
}

#[test]
fn test_unrecognized_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let text = BRACKET_PLATE.replace("M1413 P0\n", "");
    let input = write_input(dir.path(), "truncated.gcode", &text);

    let err = Job::open(&input, &Config::default()).unwrap_err();
    let gcode = err.downcast_ref::<GcodeError>().unwrap();
    assert!(matches!(gcode, GcodeError::MissingFooter { .. }));
    assert!(gcode.is_unrecognized());

    assert!(!dir.path().join("t_truncated.gcode").exists());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Job::open(dir.path().join("absent.gcode"), &Config::default()).is_err());
}

#[test]
fn test_move_then_save() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "bracket_plate.gcode", BRACKET_PLATE);
    let config = Config::default();

    let mut job = Job::open(&input, &config).unwrap();
    assert_eq!(job.move_cuts(Direction::Down, &[0, 4]), vec![1, 4]);
    assert_eq!(
        starts(&job),
        vec![
            (20.0, 40.0),
            (0.0, 0.0),
            (150.0, 40.0),
            (220.0, 0.0),
            (220.0, 60.0)
        ]
    );

    let output = job.save(&config).unwrap();
    let written = Job::open(&output, &config).unwrap();
    assert_eq!(starts(&written), starts(&job));
}

#[test]
fn test_prefix_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("wamsort.toml");
    fs::write(&config_path, "[output]\nprefix = \"sorted_\"\n").unwrap();
    let config = Config::load_or_default(Some(&config_path)).unwrap();
    assert_eq!(config.dialect, Config::default().dialect);

    let input = write_input(dir.path(), "bracket_plate.gcode", BRACKET_PLATE);
    let mut job = Job::open(&input, &config).unwrap();
    job.reorder().unwrap();

    let output = job.save(&config).unwrap();
    assert_eq!(output.file_name().unwrap(), "sorted_bracket_plate.gcode");
}

#[test]
fn test_summary_reports_nesting() {
    let job = Job::from_text(BRACKET_PLATE, &Config::default()).unwrap();
    let summary = job.summary();

    assert_eq!(summary.cuts.len(), 5);
    assert_eq!(summary.cuts[0].encloses, 2);
    assert_eq!(summary.cuts[1].parent, Some(0));
    assert_eq!(summary.cuts[2].depth, 1);
    assert_eq!(summary.cuts[3].parent, None);
    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.rows[0].blocks, vec![0, 4]);
    assert_eq!(summary.rows[1].blocks, vec![3]);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["rows"][1]["direction"], "right_to_left");
    assert_eq!(json["cuts"][0]["bbox"]["max_x"], 200.0);
}

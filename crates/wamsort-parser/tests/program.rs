use wamsort_core::BoundingBox;
use wamsort_parser::{output_path, parse, read_program, write_program, Program};

const BRACKET_PLATE: &str = include_str!("data/bracket_plate.gcode");

fn starts(program: &Program) -> Vec<(f64, f64)> {
    program
        .cuts()
        .iter()
        .map(|c| (c.start().x, c.start().y))
        .collect()
}

#[test]
fn test_bracket_plate_sections() {
    let program = parse(BRACKET_PLATE).unwrap();

    assert_eq!(program.len(), 5);
    assert!(program.header().starts_with("; WAZER Desktop Waterjet\n"));
    assert!(program.header().ends_with("M1412 P1\n"));
    assert_eq!(program.footer(), "M1413 P0\nG0 X0 Y0\nM2\n");

    assert_eq!(
        starts(&program),
        vec![
            (0.0, 0.0),
            (20.0, 40.0),
            (150.0, 40.0),
            (220.0, 0.0),
            (220.0, 60.0)
        ]
    );
    assert_eq!(
        *program.cuts()[0].bbox(),
        BoundingBox::new(0.0, 0.0, 200.0, 100.0)
    );
    assert_eq!(program.cuts()[1].points().len(), 5);
    for cut in program.cuts() {
        assert!(cut.raw_text().starts_with("G0 X"));
        assert!(cut.raw_text().ends_with("G4 S1.\nM5\nG4 S1.\n"));
    }
}

#[test]
fn test_bracket_plate_metadata() {
    let program = parse(BRACKET_PLATE).unwrap();
    let metadata = program.metadata();

    assert_eq!(metadata[0], "; Material: 6061 Aluminum");
    assert_eq!(metadata[3], "; Estimated time: 00:07:42");
    assert_eq!(metadata.last(), Some(&"M1412 P1"));
}

#[test]
fn test_bracket_plate_round_trip() {
    let program = parse(BRACKET_PLATE).unwrap();
    assert_eq!(program.to_gcode(), BRACKET_PLATE);

    let again = parse(&program.to_gcode()).unwrap();
    assert_eq!(again.cuts(), program.cuts());
}

#[test]
fn test_reordered_program_reparses() {
    let mut program = parse(BRACKET_PLATE).unwrap();
    program.apply_order(&[1, 2, 0, 4, 3]).unwrap();

    let text = program.to_gcode();
    assert_eq!(text.len(), BRACKET_PLATE.len());

    let reparsed = parse(&text).unwrap();
    assert_eq!(reparsed.header(), program.header());
    assert_eq!(reparsed.footer(), program.footer());
    assert_eq!(
        starts(&reparsed),
        vec![
            (20.0, 40.0),
            (150.0, 40.0),
            (0.0, 0.0),
            (220.0, 60.0),
            (220.0, 0.0)
        ]
    );
}

#[test]
fn test_bad_order_leaves_program_unchanged() {
    let mut program = parse(BRACKET_PLATE).unwrap();
    assert!(program.apply_order(&[0, 0, 1, 2, 3]).is_err());
    assert!(program.apply_order(&[0, 1]).is_err());
    assert_eq!(program.to_gcode(), BRACKET_PLATE);
}

#[test]
fn test_write_beside_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bracket_plate.gcode");
    std::fs::write(&input, BRACKET_PLATE).unwrap();

    let mut program = parse(&read_program(&input).unwrap()).unwrap();
    program.apply_order(&[4, 3, 2, 1, 0]).unwrap();

    let output = write_program(&input, "t_", &program.to_gcode()).unwrap();
    assert_eq!(output, output_path(&input, "t_"));
    assert_eq!(output.file_name().unwrap(), "t_bracket_plate.gcode");

    assert_eq!(std::fs::read_to_string(&input).unwrap(), BRACKET_PLATE);
    let written = parse(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(starts(&written)[0], (220.0, 60.0));
}

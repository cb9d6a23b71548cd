//! End-to-end tests for the stream driver.

use bouquetforge::prelude::*;
use bouquetforge::ParseError;

fn run(input: &str, seed: u64) -> Result<String, BouquetForgeError> {
    let mut output = Vec::new();
    let mut assembler = Assembler::with_seed(seed);
    run_stream(input.as_bytes(), &mut output, &mut assembler)?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn test_bouquets_emitted_in_arrival_order() {
    let input = "AS1a1\nBL2b2\n\nbL\naS\nbL\naS\n";
    assert_eq!(run(input, 0).unwrap(), "AS1a\nBL2b\nAS1a\n");
}

#[test]
fn test_exact_design_without_filler() {
    let input = "DS3a2b5\n\naS\nbS\naS\nbS\naS\n";
    assert_eq!(run(input, 0).unwrap(), "DS3a2b\n");
}

#[test]
fn test_filler_prefers_uncontested_species() {
    // c is required by no design, so B takes it before touching a.
    let input = "AS3a3\nBS1b2\n\naS\ncS\nbS\n";
    assert_eq!(run(input, 0).unwrap(), "BS1b1c\n");
}

#[test]
fn test_reading_stops_at_second_blank_line() {
    let input = "AS1a1\n\naS\n\naS\n";
    assert_eq!(run(input, 0).unwrap(), "AS1a\n");
}

#[test]
fn test_missing_flower_section() {
    assert_eq!(run("AS1a1\n", 0).unwrap(), "");
    assert_eq!(run("", 0).unwrap(), "");
}

#[test]
fn test_windows_line_endings() {
    let input = "AS1a1\r\n\r\naS\r\n";
    assert_eq!(run(input, 0).unwrap(), "AS1a\n");
}

#[test]
fn test_malformed_design_aborts() {
    let err = run("AS1a1\nXX\n\naS\n", 0).unwrap_err();
    match err {
        BouquetForgeError::Parse { line, text, source } => {
            assert_eq!(line, 2);
            assert_eq!(text, "XX");
            assert_eq!(source, ParseError::SizeClass('X'));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_flower_aborts_after_partial_output() {
    let input = "AS1a1\n\naS\nAS\naS\n";
    let mut output = Vec::new();
    let mut assembler = Assembler::with_seed(0);

    let err = run_stream(input.as_bytes(), &mut output, &mut assembler).unwrap_err();

    assert!(matches!(err, BouquetForgeError::Parse { line: 4, .. }));
    assert_eq!(String::from_utf8(output).unwrap(), "AS1a\n");
    assert_eq!(assembler.stats().flowers_received, 1);
}

#[test]
fn test_full_assert_mode_runs_clean() {
    let config = AssemblyConfig::new()
        .with_environment_mode(EnvironmentMode::FullAssert)
        .with_random_seed(17);
    let mut assembler = Assembler::new(&config);
    let mut input = String::from("AS1a2b4\nBS3\nCL1c2\n\n");
    for token in "abcabcddcbaabcdabdcaabbccdd".chars() {
        input.push(token);
        input.push('S');
        input.push('\n');
        input.push(token);
        input.push('L');
        input.push('\n');
    }
    let mut output = Vec::new();

    run_stream(input.as_bytes(), &mut output, &mut assembler).unwrap();

    let lines = String::from_utf8(output).unwrap();
    for line in lines.lines() {
        let design: char = line.chars().next().unwrap();
        let expected = match design {
            'A' => 4,
            'B' => 3,
            'C' => 2,
            _ => panic!("unknown design in {line}"),
        };
        let flowers: usize = line[2..]
            .split(|c: char| c.is_ascii_lowercase())
            .filter(|n| !n.is_empty())
            .map(|n| n.parse::<usize>().unwrap())
            .sum();
        assert_eq!(flowers, expected, "bouquet {line}");
    }
    assert!(assembler.stats().bouquets_assembled > 0);
}

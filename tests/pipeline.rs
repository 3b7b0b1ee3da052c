//! End-to-end runs of the selection pipeline on files.

use std::path::PathBuf;

use corns::data::sample::{SampleOptions, generate};
use corns::{RunConfig, ValidationError, run};

fn write_input(name: &str, text: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("corns_pipeline_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn validation_error(err: &anyhow::Error) -> &ValidationError {
    err.downcast_ref::<ValidationError>()
        .expect("expected a validation error")
}

#[test]
fn test_primary_only_report() {
    let primary = write_input("plants.csv", ",A,B,C\nS1,1,0,0\nS2,1,1,0\nS3,0,1,1\n");
    let report = run(&RunConfig {
        primary: primary.clone(),
        secondary: None,
    })
    .unwrap();

    let label = primary.display().to_string();
    let expected = format!(
        "Order,Site_name,{label}_species_count,{label}_percent_diversity\n\
         1,A,2,66.67\n\
         2,B,3,100.00\n\
         3,C,3,100.00\n"
    );
    assert_eq!(report.to_csv_string().unwrap(), expected);
}

#[test]
fn test_cross_evaluated_report() {
    let primary = write_input("cross_plants.csv", ",A,B,C\nS1,1,0,0\nS2,1,1,0\nS3,0,1,1\n");
    // C={B1,B3}, B={B2}, A={B2}
    let secondary = write_input("cross_birds.csv", ",C,B,A\nB1,1,0,0\nB2,0,1,1\nB3,1,0,0\n");

    let report = run(&RunConfig {
        primary,
        secondary: Some(secondary),
    })
    .unwrap();

    let sites: Vec<&str> = report.rows.iter().map(|r| r.site.as_str()).collect();
    assert_eq!(sites, vec!["A", "B", "C"]);
    let secondary: Vec<(usize, String)> = report
        .rows
        .iter()
        .map(|r| {
            let (count, pct) = r.secondary.unwrap();
            (count, format!("{pct:.2}"))
        })
        .collect();
    assert_eq!(
        secondary,
        vec![
            (1, "33.33".to_string()),
            (1, "33.33".to_string()),
            (3, "100.00".to_string()),
        ]
    );
}

#[test]
fn test_ragged_row_fails_whole_run() {
    let primary = write_input("ragged.csv", ",A,B,C\nS1,1,0,0\nS2,1,1\n");
    let err = run(&RunConfig {
        primary: primary.clone(),
        secondary: None,
    })
    .unwrap_err();

    assert_eq!(
        validation_error(&err),
        &ValidationError::RaggedRow {
            file: primary.display().to_string(),
            line: 3,
            expected: 4,
            found: 3,
        }
    );
}

#[test]
fn test_bad_secondary_fails_whole_run() {
    let primary = write_input("ok_primary.csv", ",A,B\nS1,1,0\nS2,0,1\n");
    let secondary = write_input("bad_secondary.csv", ",A,B\nB1,1,x\n");
    let err = run(&RunConfig {
        primary,
        secondary: Some(secondary),
    })
    .unwrap_err();
    assert!(matches!(
        validation_error(&err),
        ValidationError::IllegalPresence { line: 2, column: 3, .. }
    ));
}

#[test]
fn test_mismatched_site_sets() {
    let primary = write_input("mm_primary.csv", ",A,B,C\nS1,1,1,1\n");
    let secondary = write_input("mm_secondary.csv", ",A,B,D\nB1,1,1,1\n");
    let err = run(&RunConfig {
        primary,
        secondary: Some(secondary),
    })
    .unwrap_err();

    match validation_error(&err) {
        ValidationError::SiteSetMismatch {
            only_primary,
            only_secondary,
            ..
        } => {
            assert_eq!(only_primary, &vec!["C".to_string()]);
            assert_eq!(only_secondary, &vec!["D".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_input_is_reported() {
    let err = run(&RunConfig {
        primary: PathBuf::from("/nonexistent/corns/input.csv"),
        secondary: None,
    })
    .unwrap_err();
    assert!(err.downcast_ref::<ValidationError>().is_none());
    assert!(format!("{err:#}").contains("/nonexistent/corns/input.csv"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let text = generate(&SampleOptions {
        sites: 25,
        species: 120,
        density: 0.1,
        seed: 2016,
    });
    let primary = write_input("rerun.csv", &text);
    let config = RunConfig {
        primary,
        secondary: None,
    };

    let first = run(&config).unwrap().to_csv_string().unwrap();
    let second = run(&config).unwrap().to_csv_string().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 26);
    assert!(first.lines().last().unwrap().ends_with(",120,100.00"));
}

#[test]
fn test_save_writes_report() {
    let primary = write_input("save_plants.csv", ",A,B\nS1,1,0\nS2,1,1\n");
    let report = run(&RunConfig {
        primary,
        secondary: None,
    })
    .unwrap();

    let out = write_input("save_result.csv", "");
    report.save(&out).unwrap();
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, report.to_csv_string().unwrap());
    assert!(written.ends_with("2,B,2,100.00\n"));
}

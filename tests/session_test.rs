use std::fs;

use strata::{Error, SampleOutcome, Session, EMPTY_RESULT_WARNING};
use tempfile::tempdir;

const SCENARIO: &str = "id,category\n1,A\n2,A\n3,A\n4,B\n";

fn loaded(csv: &str) -> Session {
    let mut session = Session::default();
    session.upload_reader("upload.csv", csv.as_bytes()).unwrap();
    session
}

#[test]
fn test_full_flow() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("scenario.csv");
    fs::write(&input, SCENARIO).unwrap();

    let mut session = Session::default();
    assert_eq!(session.upload_path(&input).unwrap(), (4, 2));
    assert_eq!(session.upload_name(), Some("scenario.csv"));
    assert_eq!(session.columns(), vec!["id", "category"]);
    assert_eq!(session.preview().unwrap().row_count(), 4);

    session.select_column("category").unwrap();
    session.set_percent(50).unwrap();

    let report = match session.run().unwrap() {
        SampleOutcome::Sampled(report) => report,
        SampleOutcome::Empty => panic!("expected rows"),
    };
    assert_eq!(report.column, "category");
    assert_eq!(report.percent, 50);
    assert_eq!(report.table.row_count(), 3);
    let summary: Vec<(&str, usize)> = report.counts.iter().collect();
    assert_eq!(summary, vec![("A", 2), ("B", 1)]);

    let download = session.download().unwrap();
    assert_eq!(download.file_name, "sampled_data.csv");
    assert_eq!(download.mime_type, "text/csv");
    assert!(download.data.starts_with("id,category\n"));

    let saved = session.save_download(dir.path()).unwrap();
    assert_eq!(saved, dir.path().join("sampled_data.csv"));
    assert_eq!(fs::read_to_string(saved).unwrap(), download.data);
}

#[test]
fn test_repeated_runs_are_identical() {
    let mut session = loaded(SCENARIO);
    session.select_column("category").unwrap();
    session.set_percent(50).unwrap();
    let first = session.run().unwrap();
    let second = session.run().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_upload() {
    let mut session = loaded("id,category\n");
    assert_eq!(session.columns(), vec!["id", "category"]);
    assert!(matches!(session.run(), Err(Error::EmptyInput)));
    assert!(session.download().is_err());
}

#[test]
fn test_empty_result_is_a_warning() {
    let mut session = loaded("id,category\n1,A\n2,A\n3,A\n");
    session.select_column("category").unwrap();
    assert_eq!(session.run().unwrap(), SampleOutcome::Empty);
    assert!(session.last_result().is_none());
    assert!(EMPTY_RESULT_WARNING.starts_with("No data available"));
}

#[test]
fn test_errors_leave_session_usable() {
    let mut session = loaded(SCENARIO);

    assert!(matches!(
        session.select_column("missing"),
        Err(Error::InvalidColumn(_))
    ));
    assert!(matches!(
        session.set_percent(0),
        Err(Error::InvalidFraction(_))
    ));
    assert!(session.upload_reader("bad.csv", "a,b\n1,2,3\n".as_bytes()).is_err());

    // the earlier upload and selection are still in place
    assert_eq!(session.upload_name(), Some("upload.csv"));
    session.select_column("category").unwrap();
    session.set_percent(100).unwrap();
    match session.run().unwrap() {
        SampleOutcome::Sampled(report) => assert_eq!(report.table.row_count(), 4),
        SampleOutcome::Empty => panic!("expected rows"),
    }
}

#[test]
fn test_singleton_survives_one_percent() {
    let mut session = loaded("id,category\n1,solo\n");
    session.select_column("category").unwrap();
    assert_eq!(session.percent(), 1);
    match session.run().unwrap() {
        SampleOutcome::Sampled(report) => {
            assert_eq!(report.table.row(0).unwrap(), vec!["1", "solo"]);
            assert_eq!(report.counts.get("solo"), Some(1));
        }
        SampleOutcome::Empty => panic!("singleton must be kept"),
    }
}

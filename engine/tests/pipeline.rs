use std::io::Write;

use eyre::Result;
use rstest::rstest;
use tempfile::NamedTempFile;

use tripmeter_engine::{EngineStatus, JobBuilder, Options, Total};
use tripmeter_formats::{Formula, Geographic, Grid, EARTH_RADIUS};

fn input(text: &str) -> Result<NamedTempFile> {
    let mut fh = NamedTempFile::new()?;
    write!(fh, "{text}")?;
    fh.flush()?;
    Ok(fh)
}

fn run(text: &str, opts: Options) -> Result<Vec<Total>> {
    let fh = input(text)?;
    let mut job = JobBuilder::default().input(fh.path()).opts(opts).build()?;

    let mut all = vec![];
    job.run(|t| {
        all.push(t);
        Ok(())
    })?;
    Ok(all)
}

#[rstest]
#[case(Formula::Haversine)]
#[case(Formula::Cosines)]
fn test_one_degree(#[case] formula: Formula) -> Result<()> {
    let opts = Options {
        formula,
        ..Default::default()
    };
    let all = run(
        "1\t{\"latitude\":0,\"longitude\":0}\n1\t{\"latitude\":0,\"longitude\":1}\n",
        opts,
    )?;

    assert_eq!(1, all.len());
    assert_eq!(1, all[0].id);
    assert_eq!(2, all[0].points);
    assert!((all[0].distance - 111.195).abs() < 1e-3);
    Ok(())
}

#[test]
fn test_empty_input() -> Result<()> {
    assert!(run("", Options::default())?.is_empty());
    Ok(())
}

#[test]
fn test_groups_in_order() -> Result<()> {
    let text = [1, 1, 2, 2, 2, 3]
        .iter()
        .map(|id| format!("{id}\t{{\"latitude\":0,\"longitude\":{id}}}\n"))
        .collect::<String>();

    let all = run(&text, Options::default())?;
    assert_eq!(
        vec![(1, 2), (2, 3), (3, 1)],
        all.iter().map(|t| (t.id, t.points)).collect::<Vec<_>>()
    );
    assert!(all.iter().all(|t| t.distance == 0.));
    Ok(())
}

#[test]
fn test_mixed_formats() -> Result<()> {
    let a = Geographic::new(48.573174, 2.319671);
    let b = Geographic::new(48.566757, 2.303015);
    let v = b.to_nvector();
    let g = Grid::from_lat_lon(a.latitude, a.longitude);

    let text = format!(
        "7\t{}\n7\t{}\n7\t{}\n",
        serde_json::to_string(&a)?,
        serde_json::to_string(&v)?,
        serde_json::to_string(&g)?,
    );
    let all = run(&text, Options::default())?;

    let leg = tripmeter_formats::haversine(a, b, EARTH_RADIUS);
    assert_eq!(1, all.len());
    assert!((all[0].distance - 2. * leg).abs() < 1e-6);
    Ok(())
}

#[test]
fn test_radius() -> Result<()> {
    let opts = Options {
        radius: 1.,
        ..Default::default()
    };
    let all = run(
        "1\t{\"latitude\":0,\"longitude\":0}\n1\t{\"latitude\":0,\"longitude\":180}\n",
        opts,
    )?;
    assert!((all[0].distance - std::f64::consts::PI).abs() < 1e-9);
    Ok(())
}

#[rstest]
#[case::no_format("1\t{\"latitude\":0,\"longitude\":0,\"altitude\":0}\n", 1)]
#[case::no_tab("1\t{\"latitude\":0,\"longitude\":0}\n2 {\"latitude\":0,\"longitude\":0}\n", 2)]
#[case::blank("1\t{\"latitude\":0,\"longitude\":0}\n\n", 2)]
#[case::bad_id("x\t{\"latitude\":0,\"longitude\":0}\n", 1)]
fn test_bad_record_is_fatal(#[case] text: &str, #[case] line: usize) -> Result<()> {
    let err = run(text, Options::default()).unwrap_err();
    let status = err
        .downcast_ref::<EngineStatus>()
        .ok_or_else(|| eyre::eyre!("not an EngineStatus: {err}"))?;

    assert_eq!(Some(line), status.line());
    Ok(())
}

#[test]
fn test_missing_file() {
    let mut job = JobBuilder::default()
        .input("/nonexistent/trips.txt")
        .build()
        .unwrap();

    assert!(job.run(|_| Ok(())).is_err());
}

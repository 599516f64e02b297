use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use image::{Rgb, RgbImage};
use sleepchart_rs::sleep_chart::palette::{BASELINE_GRAY, GRID_GRAY, N2_COLOR};

fn run_sleepchart(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sleepchart"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sleepchart binary")
}

/// 200x50 chart, baseline row 40 from x=10, gridlines 120px apart, N2 on x=11..31.
fn write_chart(path: &Path) {
    let mut image = RgbImage::from_pixel(200, 50, Rgb([255, 255, 255]));
    for x in 10..200 {
        image.put_pixel(x, 40, BASELINE_GRAY);
    }
    for x in [10, 130] {
        for y in 0..30 {
            image.put_pixel(x, y, GRID_GRAY);
        }
    }
    for x in 11..31 {
        image.put_pixel(x, 40, N2_COLOR);
    }
    image.save(path).expect("failed to write chart");
}

#[test]
fn test_cli_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("night.png");
    write_chart(&path);

    let output = run_sleepchart(&[path.as_os_str()]);
    assert_eq!(output.status.code(), Some(0));

    let expected = format!(
        "Processing: {}\n\
         ------------------------------\n\
         1 min: N2\n\
         21 min: Wake\n\
         ------------------------------\n\
         Total Duration: 21 min\n",
        path.display()
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[test]
fn test_cli_missing_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");

    let output = run_sleepchart(&[path.as_os_str()]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        format!("Error: Image file not found: {}\n", path.display())
    );
    assert!(!stdout.contains("Processing:"));
}

#[test]
fn test_cli_limit_truncates_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("night.png");
    write_chart(&path);

    let output = run_sleepchart(&[OsStr::new("--limit"), OsStr::new("1"), path.as_os_str()]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 min: N2\n"));
    assert!(!stdout.contains("21 min: Wake"));
    assert!(stdout.ends_with("Total Duration: 21 min\n"));
}

//! End-to-end tests for the bgmask binary.

use assert_cmd::Command;
use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn bgmask() -> Command {
    Command::cargo_bin("bgmask").unwrap()
}

fn write_logo(dir: &TempDir) -> PathBuf {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
    let path = dir.path().join("logo.png");
    img.save(&path).unwrap();
    path
}

#[test]
fn test_processes_image() {
    let dir = TempDir::new().unwrap();
    let input = write_logo(&dir);
    let output = dir.path().join("logo-transparent.png");

    bgmask()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully processed"))
        .stdout(predicate::str::contains(input.display().to_string()))
        .stdout(predicate::str::contains(output.display().to_string()))
        .stdout(predicate::str::contains("2x1 pixels"))
        .stdout(predicate::str::contains("1 pixel"));

    let result = image::open(&output).unwrap().to_rgba8();
    assert_eq!(result.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    assert_eq!(result.get_pixel(1, 0), &Rgba([255, 255, 255, 255]));
}

#[test]
fn test_missing_input_fails_with_usage() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("nope.png");
    let output = dir.path().join("out.png");

    bgmask()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(input.display().to_string()))
        .stdout(predicate::str::contains("Usage:"));

    assert!(!output.exists());
}

#[test]
fn test_default_paths_are_relative_to_cwd() {
    let dir = TempDir::new().unwrap();

    bgmask()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("public/assets/sail-logo.png"));

    let assets = dir.path().join("public").join("assets");
    std::fs::create_dir_all(&assets).unwrap();
    RgbImage::from_pixel(3, 3, Rgb([200, 10, 10]))
        .save(assets.join("sail-logo.png"))
        .unwrap();

    bgmask().current_dir(dir.path()).assert().success();

    let result = image::open(assets.join("sail-logo-transparent.png")).unwrap();
    assert_eq!((result.width(), result.height()), (3, 3));
    assert_eq!(result.to_rgba8().get_pixel(1, 1), &Rgba([200, 10, 10, 255]));
}

#[test]
fn test_corrupt_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("corrupt.png");
    std::fs::write(&input, b"\x89PNG but not really").unwrap();
    let output = dir.path().join("out.png");

    bgmask()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error processing image"));

    assert!(!output.exists());
}

#[test]
fn test_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = write_logo(&dir);
    let output = dir.path().join("out.png");
    std::fs::write(&output, b"old contents").unwrap();

    bgmask().arg(&input).arg(&output).assert().success();

    let result = image::open(&output).unwrap();
    assert_eq!((result.width(), result.height()), (2, 1));
}

#[test]
fn test_prints_threshold_tip() {
    let dir = TempDir::new().unwrap();
    let input = write_logo(&dir);
    let output = dir.path().join("out.png");

    bgmask()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current threshold: 30"));
}

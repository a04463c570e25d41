mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn test_default_triangle_is_right_triangle() {
    let fixture = TestFixture::new();
    let json = fixture.run_json(&["shape", "triangle"]);

    let content = &json["content"];
    assert_eq!(content["valid"], true);
    assert_eq!(content["shape"]["kind"], "triangle");
    assert_eq!(content["metrics"]["area"], 6.0);
    assert_eq!(content["metrics"]["perimeter"], 12.0);
    assert_eq!(content["plot"]["primitive"]["type"], "polyline");
    assert_eq!(
        content["plot"]["primitive"]["points"]
            .as_array()
            .map(|p| p.len()),
        Some(4)
    );
}

#[test]
fn test_invalid_triangle_warns_but_succeeds() {
    let fixture = TestFixture::new();
    let svg = fixture.root().join("bad.svg");

    let output = fixture
        .json_command()
        .args(["shape", "triangle", "--a", "1", "--b", "1", "--c", "3", "--svg"])
        .arg(&svg)
        .output()
        .expect("Failed to run playkit");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[warn]"), "stderr: {}", stderr);
    assert!(stderr.contains("cannot form a triangle"), "stderr: {}", stderr);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["content"]["valid"], false);
    assert!(json["content"]["metrics"].is_null());
    assert!(json["content"]["plot"].is_null());
    assert_eq!(json["badge"]["level"], "warning");
    assert!(!svg.exists(), "no drawing for an invalid triangle");
}

#[test]
fn test_invalid_triangle_plain_output() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["shape", "triangle", "--a", "1", "--b", "1", "--c", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not a valid shape."))
        .stdout(predicate::str::contains("Area").not())
        .stdout(predicate::str::contains("Invalid input").not())
        .stdout(predicate::str::contains("The longest side (3)"));
}

#[test]
fn test_rectangle_plain_output() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .args(["shape", "rectangle"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout, @r"
    Rectangle: width=6.00, height=4.00

    Results
      Area       24.000
      Perimeter  20.000

    Summary: area = 24.000, perimeter = 20.000

    Plot
      Vertices   (0.00, 0.00) (6.00, 0.00) (6.00, 4.00) (0.00, 4.00)
      Viewport   x -1.20..7.20, y -1.20..5.20

    💡 Tips:
      • Draw the shape as an SVG image: playkit shape rectangle --width 6 --height 4 --svg rectangle.svg
    ");
}

#[test]
fn test_circle_metrics() {
    let fixture = TestFixture::new();
    let json = fixture.run_json(&["shape", "circle", "--radius", "3"]);

    let area = json["content"]["metrics"]["area"].as_f64().unwrap();
    let perimeter = json["content"]["metrics"]["perimeter"].as_f64().unwrap();
    assert!((area - 28.274_333).abs() < 1e-5);
    assert!((perimeter - 18.849_556).abs() < 1e-5);
    assert_eq!(json["content"]["plot"]["primitive"]["type"], "circle");
}

#[test]
fn test_svg_written_for_valid_shape() {
    let fixture = TestFixture::new();
    let svg = fixture.root().join("out").join("circle.svg");

    fixture
        .command()
        .args(["shape", "circle", "--radius", "2", "--svg"])
        .arg(&svg)
        .assert()
        .success()
        .stdout(predicate::str::contains("Drawing saved to"));

    let body = std::fs::read_to_string(&svg).unwrap();
    assert!(body.starts_with("<svg"));
    assert!(body.contains("Circle: radius=2.00"));
}

#[test]
fn test_out_of_range_input_fails() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["shape", "rectangle", "--width", "31"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("width must be between"));
}

#[test]
fn test_precision_from_config() {
    let fixture = TestFixture::new();
    fixture.write_config("[display]\nprecision = 1\n");

    fixture
        .command()
        .args(["shape", "circle", "--radius", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Area       3.1"))
        .stdout(predicate::str::contains("3.14").not());
}

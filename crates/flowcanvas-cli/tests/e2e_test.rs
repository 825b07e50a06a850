use std::fs;

use tempfile::tempdir;

use flowcanvas_cli::Args;

fn args_for(input: &str, output: &str) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_renders_payload_to_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("diagram.json");
    fs::write(
        &input_path,
        r#"{
            "nodes": [
                {"id": "a", "type": "start", "x": 400, "y": 100, "label": "Start"},
                {"id": "b", "type": "end", "x": 400, "y": 300, "label": "End"}
            ],
            "edges": [{"from": "a", "to": "b"}]
        }"#,
    )
    .unwrap();

    let output_path = temp_dir.path().join("diagram.svg");
    let args = args_for(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
    );

    flowcanvas_cli::run(&args).expect("rendering should succeed");

    let svg = fs::read_to_string(&output_path).expect("output file should exist");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Start"));
    assert!(svg.contains("flowchart-edge"));
}

#[test]
fn e2e_missing_input_is_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.svg");

    let args = args_for("/no/such/input.json", &output_path.to_string_lossy());
    assert!(flowcanvas_cli::run(&args).is_err());
    assert!(!output_path.exists());
}

#[test]
fn e2e_malformed_payload_is_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("broken.json");
    fs::write(&input_path, "{ nodes: [").unwrap();

    let output_path = temp_dir.path().join("out.svg");
    let args = args_for(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
    );

    assert!(flowcanvas_cli::run(&args).is_err());
}

#[test]
fn e2e_config_sets_background() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input_path = temp_dir.path().join("diagram.json");
    fs::write(&input_path, r#"{"nodes": [], "edges": []}"#).unwrap();

    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "background_color = \"white\"\n").unwrap();

    let output_path = temp_dir.path().join("out.svg");
    let mut args = args_for(
        &input_path.to_string_lossy(),
        &output_path.to_string_lossy(),
    );
    args.config = Some(config_path.to_string_lossy().to_string());

    flowcanvas_cli::run(&args).expect("rendering should succeed");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("background: white"));
}

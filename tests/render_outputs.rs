use std::fs;
use std::path::PathBuf;

use zheat::cli::Cli;
use zheat::render::colorbar::Orientation;

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("zheat-{}-{}", std::process::id(), name))
}

fn write_sample_csv(path: &PathBuf) {
    fs::write(
        path,
        "Time (s),Mouse1,Mouse2\n0,1.0,5.0\n1,2.0,9.0\n2,3.0,6.0\n3,4.0,8.0\n",
    )
    .unwrap();
}

fn base_cli(input: PathBuf, output: Option<PathBuf>) -> Cli {
    Cli {
        input,
        output,
        title: None,
        vmin: None,
        vmax: None,
        cmap: "YlOrRd".to_string(),
        width: 4.0,
        height: 2.0,
        dpi: 50,
        time_column: "Time (s)".to_string(),
        subject_prefix: "Mouse".to_string(),
        xtick_interval: 1,
        colorbar: false,
        colorbar_orientation: Orientation::Vertical,
    }
}

#[test]
fn renders_exactly_one_file_by_default() {
    let input = temp_file("single.csv");
    let output = temp_file("single.png");
    write_sample_csv(&input);

    zheat::run(&base_cli(input.clone(), Some(output.clone()))).unwrap();

    assert!(output.exists());
    assert!(fs::metadata(&output).unwrap().len() > 0);
    let colorbar = temp_file("single_colorbar.png");
    assert!(!colorbar.exists());

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn colorbar_flag_writes_a_second_file() {
    let input = temp_file("pair.csv");
    let output = temp_file("pair.png");
    write_sample_csv(&input);

    let mut cli = base_cli(input.clone(), Some(output.clone()));
    cli.colorbar = true;
    zheat::run(&cli).unwrap();

    let colorbar = temp_file("pair_colorbar.png");
    assert!(output.exists());
    assert!(colorbar.exists());
    assert!(fs::metadata(&colorbar).unwrap().len() > 0);

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
    let _ = fs::remove_file(colorbar);
}

#[test]
fn png_canvas_matches_figure_size_times_dpi() {
    let input = temp_file("canvas.csv");
    let output = temp_file("canvas.png");
    write_sample_csv(&input);

    zheat::run(&base_cli(input.clone(), Some(output.clone()))).unwrap();

    // 4in x 2in at 50 dpi
    assert_eq!(image::image_dimensions(&output).unwrap(), (200, 100));

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn svg_output_is_selected_by_extension() {
    let input = temp_file("vector.csv");
    let output = temp_file("vector.svg");
    write_sample_csv(&input);

    zheat::run(&base_cli(input.clone(), Some(output.clone()))).unwrap();

    let body = fs::read_to_string(&output).unwrap();
    assert!(body.contains("<svg"));

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn default_output_lands_next_to_input() {
    let input = temp_file("autoname.csv");
    write_sample_csv(&input);

    zheat::run(&base_cli(input.clone(), None)).unwrap();

    let expected = temp_file("autoname_heatmap.png");
    assert!(expected.exists());

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(expected);
}

#[test]
fn missing_time_column_fails_and_writes_nothing() {
    let input = temp_file("notime.csv");
    let output = temp_file("notime.png");
    fs::write(&input, "Seconds,Mouse1\n0,1.0\n1,2.0\n").unwrap();

    let err = zheat::run(&base_cli(input.clone(), Some(output.clone()))).unwrap_err();
    assert!(err.to_string().contains("Time (s)"));
    assert!(!output.exists());

    let _ = fs::remove_file(input);
}

#[test]
fn zero_subject_columns_fails_and_writes_nothing() {
    let input = temp_file("nosubjects.csv");
    let output = temp_file("nosubjects.png");
    fs::write(&input, "Time (s),Rat1\n0,1.0\n1,2.0\n").unwrap();

    let err = zheat::run(&base_cli(input.clone(), Some(output.clone()))).unwrap_err();
    assert!(err.to_string().contains("Mouse"));
    assert!(!output.exists());

    let _ = fs::remove_file(input);
}

#[test]
fn unknown_colormap_is_rejected() {
    let input = temp_file("badcmap.csv");
    let output = temp_file("badcmap.png");
    write_sample_csv(&input);

    let mut cli = base_cli(input.clone(), Some(output.clone()));
    cli.cmap = "sunburst".to_string();
    let err = zheat::run(&cli).unwrap_err();
    assert!(err.to_string().contains("sunburst"));
    assert!(!output.exists());

    let _ = fs::remove_file(input);
}

#[test]
fn explicit_bounds_flow_through_to_the_render() {
    let input = temp_file("bounds.csv");
    let output = temp_file("bounds.png");
    write_sample_csv(&input);

    let mut cli = base_cli(input.clone(), Some(output.clone()));
    cli.vmin = Some(-1.7);
    cli.vmax = Some(2.0);
    zheat::run(&cli).unwrap();

    assert!(output.exists());

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

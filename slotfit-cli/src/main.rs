use clap::Parser;
use serde::{Deserialize, Serialize};
use slotfit::io::load_rgba_image;
use slotfit::{
    compute_default_transform, detect, fit_axis, DetectConfig, FitAxis, TemplateGeometry,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Slotfit CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for detection profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DetectConfigJson {
    marker: [u8; 3],
    tolerance: u8,
    min_area: usize,
}

impl Default for DetectConfigJson {
    fn default() -> Self {
        let cfg = DetectConfig::default();
        Self {
            marker: cfg.marker,
            tolerance: cfg.tolerance,
            min_area: cfg.min_area,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    template_path: String,
    output_path: Option<String>,
    photo_aspect_ratios: Vec<f32>,
    detect: DetectConfigJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_path: String::new(),
            output_path: None,
            photo_aspect_ratios: Vec::new(),
            detect: DetectConfigJson::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct HoleRecord {
    id: usize,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    aspect_ratio: f32,
}

#[derive(Debug, Serialize)]
struct FitRecord {
    hole_id: usize,
    photo_aspect_ratio: f32,
    scale: f32,
    center_x: f32,
    center_y: f32,
    fit_axis: &'static str,
}

#[derive(Debug, Serialize)]
struct Output {
    template_width: u32,
    template_height: u32,
    holes: Vec<HoleRecord>,
    fits: Vec<FitRecord>,
}

fn build_output(geometry: &TemplateGeometry, aspects: &[f32]) -> Result<Output, String> {
    let holes = geometry
        .holes
        .iter()
        .map(|hole| HoleRecord {
            id: hole.id,
            x: hole.x,
            y: hole.y,
            width: hole.width,
            height: hole.height,
            aspect_ratio: hole.aspect_ratio(),
        })
        .collect();

    let mut fits = Vec::new();
    for hole in &geometry.holes {
        for &aspect in aspects {
            let transform = compute_default_transform(hole, aspect)
                .map_err(|err| format!("hole {}: {err}", hole.id))?;
            let axis = fit_axis(hole.aspect_ratio(), aspect)
                .map_err(|err| format!("hole {}: {err}", hole.id))?;
            fits.push(FitRecord {
                hole_id: hole.id,
                photo_aspect_ratio: aspect,
                scale: transform.scale,
                center_x: transform.center_x,
                center_y: transform.center_y,
                fit_axis: match axis {
                    FitAxis::ByWidth => "by_width",
                    FitAxis::ByHeight => "by_height",
                },
            });
        }
    }

    Ok(Output {
        template_width: geometry.width,
        template_height: geometry.height,
        holes,
        fits,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("slotfit=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.template_path.is_empty() {
        return Err("template_path must be set in the config".into());
    }

    let pixels = load_rgba_image(&config.template_path)?;
    let detect_cfg = DetectConfig {
        marker: config.detect.marker,
        tolerance: config.detect.tolerance,
        min_area: config.detect.min_area,
    };
    let geometry = detect(pixels.view(), &detect_cfg)?;

    let output = build_output(&geometry, &config.photo_aspect_ratios)?;
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

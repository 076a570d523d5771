use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use crystalgen::export::{render_svg, write_gltf, write_stl, RenderOptions};
use crystalgen::pipeline::{
    clamp_gltf_scale, clamp_stl_scale, geometry_from_cdl, validate,
};

#[derive(Parser)]
#[command(name = "crystalgen")]
#[command(about = "Crystal Description Language parser and habit geometry engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CDL expression and print the parse summary as JSON
    Validate {
        /// CDL file path, or '-' for stdin
        input: String,
    },
    /// Render a CDL expression to SVG
    Render {
        /// CDL file path, or '-' for stdin
        input: String,

        /// Output file path
        #[arg(short, long, default_value = "crystal.svg")]
        output: PathBuf,

        /// Camera elevation in degrees
        #[arg(long, default_value_t = 30.0)]
        elev: f64,

        /// Camera azimuth in degrees
        #[arg(long, default_value_t = -45.0)]
        azim: f64,

        /// Canvas width in pixels
        #[arg(long, default_value_t = 300)]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value_t = 300)]
        height: u32,
    },
    /// Export a CDL expression as ASCII STL
    ExportStl {
        /// CDL file path, or '-' for stdin
        input: String,

        /// Output file path
        #[arg(short, long, default_value = "crystal.stl")]
        output: PathBuf,

        /// Model scale, clamped to [1, 100]
        #[arg(short, long)]
        scale: Option<f64>,
    },
    /// Export a CDL expression as glTF 2.0 JSON
    ExportGltf {
        /// CDL file path, or '-' for stdin
        input: String,

        /// Output file path
        #[arg(short, long, default_value = "crystal.gltf")]
        output: PathBuf,

        /// Model scale, clamped to [0.1, 10]
        #[arg(short, long)]
        scale: Option<f64>,
    },
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match run(cli.command) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> std::result::Result<(), String> {
    match command {
        Commands::Validate { input } => {
            let cdl = read_input(&input)?;
            let response = validate(&cdl);
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| format!("serializing response: {}", e))?;
            println!("{}", json);
            if response.valid {
                Ok(())
            } else {
                Err(response.error.unwrap_or_else(|| "invalid CDL".to_string()))
            }
        }
        Commands::Render {
            input,
            output,
            elev,
            azim,
            width,
            height,
        } => {
            let geometry = build(&input)?;
            let options = RenderOptions {
                elev,
                azim,
                width,
                height,
            };
            let svg = render_svg(&geometry, &options);
            fs::write(&output, svg).map_err(|e| format!("writing {}: {}", output.display(), e))?;
            info!("wrote {}", output.display());
            Ok(())
        }
        Commands::ExportStl {
            input,
            output,
            scale,
        } => {
            let geometry = build(&input)?;
            let stl = write_stl(&geometry, clamp_stl_scale(scale));
            fs::write(&output, stl).map_err(|e| format!("writing {}: {}", output.display(), e))?;
            info!("wrote {}", output.display());
            Ok(())
        }
        Commands::ExportGltf {
            input,
            output,
            scale,
        } => {
            let geometry = build(&input)?;
            let document = write_gltf(&geometry, clamp_gltf_scale(scale));
            let json = serde_json::to_string_pretty(&document)
                .map_err(|e| format!("serializing glTF: {}", e))?;
            fs::write(&output, json).map_err(|e| format!("writing {}: {}", output.display(), e))?;
            info!("wrote {}", output.display());
            Ok(())
        }
    }
}

fn build(input: &str) -> std::result::Result<crystalgen::geometries::CrystalGeometry, String> {
    let cdl = read_input(input)?;
    let geometry = geometry_from_cdl(&cdl).map_err(|e| e.to_string())?;
    info!(
        "built mesh: {} vertices, {} faces, {} edges",
        geometry.vertex_count(),
        geometry.face_count(),
        geometry.edge_count()
    );
    Ok(geometry)
}

fn read_input(path: &str) -> std::result::Result<String, String> {
    if path == "-" {
        let mut cdl = String::new();
        std::io::stdin()
            .read_to_string(&mut cdl)
            .map_err(|e| format!("reading stdin: {}", e))?;
        Ok(cdl)
    } else {
        fs::read_to_string(path).map_err(|e| format!("reading {}: {}", path, e))
    }
}

extern crate sphere_tracer as root;

use root::parsing::config::Config;
use root::parsing::{cameras_for, construct_scene_from_file, get_settings, parse_config_and_cameras};
use root::renderer::{NaiveRenderer, Renderer};
use root::scene::{default_scene, populate, ProceduralSettings};

use std::path::Path;

use structopt::StructOpt;
use tracing::{error, info, warn, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    /// add the default procedural sphere grid on top of the loaded scene
    #[structopt(long)]
    pub procedural: bool,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn main() {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, Level::INFO))
        .init();

    if let Err(e) = run(opts) {
        error!("fatal error, aborting. error is {:#}", e);
        std::process::exit(1);
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let (mut config, cameras) = if Path::new(&opts.config_file).exists() {
        parse_config_and_cameras(get_settings(&opts.config_file)?)?
    } else {
        warn!(
            "config file {} not found, using built in defaults",
            opts.config_file
        );
        let config = Config::default();
        let cameras = cameras_for(&config);
        (config, cameras)
    };

    // override scene file based on provided command line argument
    if opts.scene_file.is_some() {
        config.scene_file = opts.scene_file;
    }
    let mut scene = match &config.scene_file {
        Some(scene_file) => construct_scene_from_file(scene_file)?,
        None => {
            info!("no scene file given, rendering the ground plane scene");
            default_scene()
        }
    };
    if opts.procedural {
        populate(&mut scene, &ProceduralSettings::default());
    }

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }
    let renderer = NaiveRenderer::new();
    renderer.render(&scene, &cameras, &config)
}

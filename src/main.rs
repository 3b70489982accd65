use getopts::Options;
use log::*;
use std::time::Instant;

use phongtrace::example_scenes;
use phongtrace::image::Image;
use phongtrace::renderer::{RenderConfig, RenderMode, Renderer};

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} [options]", program);
    print!("{}", opts.usage(&brief));
}

fn opt_parse<T: std::str::FromStr>(matches: &getopts::Matches, name: &str, default: T) -> T {
    match matches.opt_str(name) {
        Some(s) => match s.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("invalid value for --{}: {}", name, s);
                std::process::exit(1);
            }
        },
        None => default,
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("o", "output", "output PNG path", "FILE");
    opts.optopt("w", "width", "image width in pixels", "PX");
    opts.optopt("", "height", "image height in pixels", "PX");
    opts.optopt(
        "s",
        "scene",
        &format!("scene name {:?}", example_scenes::SCENE_NAMES),
        "NAME",
    );
    opts.optopt("t", "threads", "worker thread count", "N");
    opts.optflag("", "flat", "render flat object colors, no lighting");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            print_usage(&program, &opts);
            std::process::exit(1);
        }
    };
    if matches.opt_present("h") {
        print_usage(&program, &opts);
        return;
    }

    let output = matches
        .opt_str("o")
        .unwrap_or_else(|| "output.png".to_string());
    let width: u32 = opt_parse(&matches, "width", 800);
    let height: u32 = opt_parse(&matches, "height", 600);
    let nthread: usize = opt_parse(&matches, "threads", num_cpus::get());
    let scene_name = matches.opt_str("s").unwrap_or_else(|| "trio".to_string());

    let aspect = width as f32 / height as f32;
    let (scene, camera) = match example_scenes::by_name(&scene_name, aspect) {
        Some(sc) => sc,
        None => {
            eprintln!(
                "unknown scene {:?}, expected one of {:?}",
                scene_name,
                example_scenes::SCENE_NAMES
            );
            std::process::exit(1);
        }
    };

    let config = RenderConfig {
        nthread,
        mode: if matches.opt_present("flat") {
            RenderMode::Flat
        } else {
            RenderMode::Shaded
        },
    };

    info!(
        "rendering scene {:?} at {}x{} on {} threads",
        scene_name, width, height, config.nthread
    );
    let mut image = Image::new(width, height);
    let start = Instant::now();
    Renderer.render(&scene, &camera, &mut image, config);
    info!("render finished in {:.3?}", start.elapsed());

    if let Err(e) = image.write_png(&output) {
        eprintln!("failed to write {}: {}", output, e);
        std::process::exit(1);
    }
    info!("wrote {}", output);
}

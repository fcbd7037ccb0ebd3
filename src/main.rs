use clap::Parser;
use log::{error, info};

use whitted::frame::Frame;
use whitted::framebuffer::FrameBuffer;
use whitted::renderer::Renderer;
use whitted::scene::Scene;
use whitted::scene_loader::{SceneLoader, TracerSettings};
use whitted::tracer::RayTracer;

mod args;
mod logger;

use args::Args;

fn main() {
    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    logger::init_logger(args.log_level.into());

    if args.width == 0 || args.height == 0 {
        error!("Image size {}x{} has no pixels", args.width, args.height);
        std::process::exit(1);
    }

    let frame = Frame {
        width: args.width,
        height: args.height,
    };

    let (scene, settings) = match &args.scene {
        Some(path) => match SceneLoader::load_from_path(path, frame.aspect_ratio()) {
            Ok(loaded) => {
                info!("Loaded scene {}", path.display());
                (loaded.scene, loaded.settings)
            }
            Err(e) => {
                error!("Could not read scene description: {e}");
                std::process::exit(1);
            }
        },
        None => {
            info!("No scene given, rendering the built-in scene");
            (
                Scene::default_scene(frame.aspect_ratio()),
                TracerSettings::default(),
            )
        }
    };

    let mut tracer = settings.apply(RayTracer {
        mode: args.mode.into(),
        ..Default::default()
    });

    if let Some(depth) = args.max_depth {
        tracer.max_depth = depth;
    }

    let renderer = Renderer {
        tracer,
        threads: args.threads,
        frame,
    };

    let mut fb = FrameBuffer::new(args.width, args.height);

    if let Err(e) = renderer.render(&scene, &mut fb) {
        error!("Rendering failed: {e}");
        std::process::exit(1);
    }

    match fb.save(&args.output) {
        Ok(()) => info!("Saved render to {}", args.output.display()),
        Err(e) => {
            error!("Could not save render: {e}");
            std::process::exit(1);
        }
    }
}

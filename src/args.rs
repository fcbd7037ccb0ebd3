use clap::{Parser, ValueEnum};
use log::LevelFilter;

use std::path::PathBuf;
use whitted::RenderMode;

#[derive(Debug, Parser)]
#[command(name = "whitted")]
#[command(about = "Recursive ray tracer with shadows, mirrors and glass")]
pub struct Args {
    /// Path to a json5 scene file, the built-in scene is rendered when omitted
    #[arg()]
    pub scene: Option<PathBuf>,
    /// Width of the output image
    #[arg(long, default_value_t = 800)]
    pub width: usize,
    /// Height of the output image
    #[arg(long, default_value_t = 640)]
    pub height: usize,
    /// Threads to use for rendering (0 for automatic setting)
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,
    /// Reflection and refraction bounces to follow [default: 6, or the scene's setting]
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Render setting, used for debugging
    #[arg(long, value_enum, default_value_t = RenderModeArg::Shaded)]
    pub mode: RenderModeArg,
    /// Path to save render to
    #[arg(short, long, default_value_os_t = PathBuf::from("result.png"))]
    pub output: PathBuf,
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum RenderModeArg {
    Shaded,
    Normal,
    Depth,
}

impl From<RenderModeArg> for RenderMode {
    fn from(r: RenderModeArg) -> Self {
        match r {
            RenderModeArg::Shaded => Self::Shaded,
            RenderModeArg::Normal => Self::Normal,
            RenderModeArg::Depth => Self::Depth,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["whitted"]).unwrap();

        assert_eq!(args.scene, None);
        assert_eq!((args.width, args.height), (800, 640));
        assert_eq!(args.threads, 0);
        assert_eq!(args.max_depth, None);
        assert_eq!(RenderMode::from(args.mode), RenderMode::Shaded);
        assert_eq!(args.output, PathBuf::from("result.png"));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Info);
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "whitted",
            "scenes/glass.json5",
            "--width",
            "320",
            "--max-depth",
            "2",
            "--mode",
            "depth",
            "-t",
            "1",
            "--log-level",
            "trace",
        ])
        .unwrap();

        assert_eq!(args.scene, Some(PathBuf::from("scenes/glass.json5")));
        assert_eq!(args.width, 320);
        assert_eq!(args.max_depth, Some(2));
        assert_eq!(args.threads, 1);
        assert_eq!(RenderMode::from(args.mode), RenderMode::Depth);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Trace);
    }
}

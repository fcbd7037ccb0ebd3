use crate::frame::Frame;
use crate::framebuffer::{FrameBuffer, Pixel};
use crate::scene::Scene;
use crate::tracer::RayTracer;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::{info, trace};
use rayon::prelude::*;
use thiserror::Error;

/// Scans every pixel of a frame through a [`RayTracer`].
///
/// Rows are independent, so the parallel path hands whole scanlines to rayon
/// and needs no synchronization besides the final join.
pub struct Renderer {
    pub tracer: RayTracer,
    /// Threads to render with, 0 lets rayon decide and 1 renders on the calling thread.
    pub threads: usize,
    pub frame: Frame,
}

impl Renderer {
    pub fn render(&self, scene: &Scene, fb: &mut FrameBuffer) -> Result<RenderStats, RenderError> {
        if fb.width() != self.frame.width || fb.height() != self.frame.height {
            return Err(RenderError::SizeMismatch {
                frame: (self.frame.width, self.frame.height),
                buffer: (fb.width(), fb.height()),
            });
        }

        let start = Instant::now();
        let counters = Counters::default();

        info!(
            "rendering {}x{} with {} objects, max depth {}",
            self.frame.width,
            self.frame.height,
            scene.objects.len(),
            self.tracer.max_depth
        );

        if self.frame.width > 0 {
            if self.threads == 1 {
                for (y, slice) in fb.buffer_mut().chunks_mut(self.frame.width).enumerate() {
                    self.scanline(scene, y, slice, &counters);
                }
            } else {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(self.threads)
                    .build()?;

                pool.install(|| {
                    fb.buffer_mut()
                        .par_chunks_mut(self.frame.width)
                        .enumerate()
                        .for_each(|(y, slice)| self.scanline(scene, y, slice, &counters))
                });
            }
        }

        let stats = RenderStats {
            duration: start.elapsed(),
            pixels: self.frame.width * self.frame.height,
            hits: counters.hits.load(Ordering::Relaxed),
            total_depth: counters.total_depth.load(Ordering::Relaxed),
            max_depth: counters.max_depth.load(Ordering::Relaxed),
        };

        info!("Render took {:.02} seconds", stats.duration.as_secs_f64());
        info!(
            "Hit pixels: {}/{}, max bounces: {}, avg bounces per pixel: {:.03}",
            stats.hits,
            stats.pixels,
            stats.max_depth,
            stats.avg_depth()
        );

        Ok(stats)
    }

    fn scanline(&self, scene: &Scene, y: usize, slice: &mut [Pixel], counters: &Counters) {
        let mut hits = 0;
        let mut total_depth = 0;
        let mut max_depth = 0;

        for (x, pixel) in slice.iter_mut().enumerate() {
            let (sx, sy) = self.frame.screen_coord(x, y);

            let result = self.tracer.color_for_pixel(scene, sx, sy);

            if result.hit {
                hits += 1;
            }
            total_depth += result.depth;
            max_depth = max_depth.max(result.depth);

            *pixel = Pixel::from(result.color);
        }

        counters.hits.fetch_add(hits, Ordering::Relaxed);
        counters.total_depth.fetch_add(total_depth, Ordering::Relaxed);
        counters.max_depth.fetch_max(max_depth, Ordering::Relaxed);

        trace!("row {y} done");
    }
}

#[derive(Default)]
struct Counters {
    hits: AtomicUsize,
    total_depth: AtomicUsize,
    max_depth: AtomicUsize,
}

#[derive(Debug, Clone)]
pub struct RenderStats {
    pub duration: Duration,
    pub pixels: usize,
    pub hits: usize,
    pub total_depth: usize,
    pub max_depth: usize,
}

impl RenderStats {
    pub fn avg_depth(&self) -> f64 {
        if self.pixels == 0 {
            return 0.0;
        }

        self.total_depth as f64 / self.pixels as f64
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("frame is {frame:?} but the framebuffer is {buffer:?}")]
    SizeMismatch {
        frame: (usize, usize),
        buffer: (usize, usize),
    },
    #[error("failed to build rendering threadpool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

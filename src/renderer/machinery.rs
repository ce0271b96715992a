use std::{
    ops::Deref as _,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    thread::{self, JoinHandle},
};

use image::{GenericImage, GenericImageView, RgbaImage};

use crate::{
    camera::Camera,
    renderer::{RenderSettings, worker},
    scene::Scene,
    screen_block::ScreenBlock,
    tracer::Tracer,
};

/// Snapshot of how far a render has come, in tiles.
#[derive(Copy, Clone, Debug)]
pub struct Progress {
    pub finished: usize,
    pub total: usize,
}

pub fn render<
    F1: Fn(ScreenBlock) + Send + Sync + 'static,
    F2: Fn(ScreenBlock, Progress) + Send + Sync + 'static,
>(
    scene: Scene,
    camera: Camera,
    settings: RenderSettings,
    started_tile_callback: F1,
    finished_tile_callback: F2,
) -> anyhow::Result<RenderProgress> {
    let resolution = camera.resolution();
    let image = RgbaImage::new(resolution.x, resolution.y);
    let state = Arc::new(RenderState {
        tracer: Tracer::new(scene, camera),

        image: Mutex::new(image),

        tile_ordering: ScreenBlock::from_size(resolution).tile_ordering(settings.tile_size),
        next_tile_index: AtomicUsize::new(0),
        finished_tiles: AtomicUsize::new(0),
    });
    let started_tile_callback = Arc::new(started_tile_callback);
    let finished_tile_callback = Arc::new(finished_tile_callback);

    // Pin a worker per core when the core list is available, otherwise fall
    // back to unpinned workers, one per logical CPU.
    let cores: Vec<_> = match core_affinity::get_core_ids() {
        Some(cores) => cores.into_iter().map(Some).collect(),
        None => vec![None; num_cpus::get()],
    };

    let threads = cores
        .into_iter()
        .enumerate()
        .map(|(worker_id, core)| {
            let state = Arc::clone(&state);
            let started_tile_callback = Arc::clone(&started_tile_callback);
            let finished_tile_callback = Arc::clone(&finished_tile_callback);

            thread::Builder::new()
                .name(format!("worker{worker_id}"))
                .spawn(move || {
                    if let Some(core) = core {
                        core_affinity::set_for_current(core);
                    }

                    let mut buffer =
                        RgbaImage::new(settings.tile_size.into(), settings.tile_size.into());

                    while let Some(tile) = state.get_next_tile() {
                        (started_tile_callback)(*tile);

                        worker::render_tile(&state.tracer, tile, &mut buffer);
                        state
                            .image
                            .lock()
                            .expect("Poisoned lock!")
                            .copy_from(
                                buffer.view(0, 0, tile.width(), tile.height()).deref(),
                                tile.min.x,
                                tile.min.y,
                            )
                            .unwrap_or_else(|_| {
                                unreachable!("The buffer should always fit into the output")
                            });

                        let finished = state.finished_tiles.fetch_add(1, Ordering::AcqRel) + 1;
                        (finished_tile_callback)(
                            *tile,
                            Progress {
                                finished,
                                total: state.tile_ordering.len(),
                            },
                        );
                    }
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RenderProgress {
        render_state: state,
        threads,
    })
}

pub struct RenderProgress {
    render_state: Arc<RenderState>,
    threads: Vec<JoinHandle<()>>,
}

impl RenderProgress {
    pub fn progress(&self) -> Progress {
        let total = self.render_state.tile_ordering.len();
        let finished = self
            .render_state
            .finished_tiles
            .load(Ordering::Acquire)
            .min(total);
        Progress { finished, total }
    }

    pub fn progress_percent(&self) -> f32 {
        let Progress { finished, total } = self.progress();
        100.0 * (finished as f32) / (total as f32)
    }

    pub fn is_finished(&self) -> bool {
        self.threads.iter().all(|handle| handle.is_finished())
    }

    /// Signal the workers to abort.
    /// Any running workers will still finish their tiles, but no new ones will be started.
    pub fn abort(&self) {
        self.render_state
            .next_tile_index
            .store(self.render_state.tile_ordering.len(), Ordering::Release);
    }

    /// Wait for the workers to finish.
    pub fn wait(&mut self) {
        self.threads
            .drain(..)
            .for_each(|handle| handle.join().unwrap());
    }

    pub fn image(&self) -> &Mutex<RgbaImage> {
        &self.render_state.image
    }
}

struct RenderState {
    tracer: Tracer,

    image: Mutex<RgbaImage>,

    tile_ordering: Vec<ScreenBlock>,
    next_tile_index: AtomicUsize,
    finished_tiles: AtomicUsize,
}

impl RenderState {
    fn get_next_tile(&self) -> Option<&ScreenBlock> {
        let id = self.next_tile_index.fetch_add(1, Ordering::AcqRel);
        self.tile_ordering.get(id)
    }
}

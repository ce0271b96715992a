mod machinery;
mod worker;

pub use crate::renderer::machinery::{Progress, RenderProgress, render};

#[derive(Copy, Clone, Debug)]
pub struct RenderSettings {
    pub tile_size: std::num::NonZeroU32,
}

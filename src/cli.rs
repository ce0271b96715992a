use miniray::{
    Camera, Projection, RenderSettings, Scene,
    geometry::{ScreenSize, WorldPoint, WorldVector},
    render,
};

use indicatif::ProgressBar;

fn main() -> anyhow::Result<()> {
    let camera = Camera::builder()
        .eye(WorldPoint::new(0.0, 0.0, 200.0))
        .target(WorldPoint::origin())
        .up(WorldVector::new(0.0, 1.0, 0.0))
        .resolution(ScreenSize::new(500, 500))
        .projection(Projection::Perspective)
        .build()?;

    let settings = RenderSettings {
        tile_size: 64.try_into().unwrap(),
    };
    let scene = Scene::default();

    let bar = ProgressBar::no_length();
    let mut render_progress = render(scene, camera, settings, |_| {}, {
        let bar = bar.clone();
        move |_, progress| {
            bar.update(|ps| {
                ps.set_len(progress.total as u64);
                ps.set_pos(progress.finished as u64)
            })
        }
    })?;
    bar.set_length(render_progress.progress().total as u64);

    render_progress.wait();
    bar.finish();

    render_progress
        .image()
        .lock()
        .expect("Poisoned lock!")
        .save("miniray.png")?;

    Ok(())
}

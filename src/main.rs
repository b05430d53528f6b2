use clap::Parser;
use winit::event_loop::EventLoop;

use obj_viewer::app::App;
use obj_viewer::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!(
        "Viewer controls: Space toggles the camera, WASD moves, Shift doubles speed, Escape quits"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}

use anyhow::{anyhow, Result};
use bodies::{
    logging::init_logging,
    render::{init_graphics, render_bodies, DisplayConfig},
    world_gen::init_bodies,
    Aggregation, FrameClock, Simulation, SimulationConfig, UpdateMode,
};
use clap::Parser;
use log::{info, LevelFilter};
use nalgebra::Vector2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

#[derive(Parser, Debug)]
#[command(about = "Real-time gravitational N-body simulator")]
struct Args {
    /// Window width.
    #[arg(long, default_value_t = 800)]
    width: u32,
    /// Window height.
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Maximum number of bodies in the simulation.
    #[arg(long, default_value_t = 10)]
    max_bodies: usize,
    /// Bounce factor applied at the window edges.
    #[arg(long, default_value_t = 0.5)]
    restitution: f64,
    /// Mass of every body.
    #[arg(long, default_value_t = 10.)]
    mass: f64,
    /// Gravitational constant.
    #[arg(short, long, default_value_t = 9.8)]
    g: f64,
    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Parity-split force sums and in-order updates.
    #[arg(long)]
    compat: bool,
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl From<&Args> for SimulationConfig {
    fn from(args: &Args) -> Self {
        let config = SimulationConfig {
            width: args.width,
            height: args.height,
            max_bodies: args.max_bodies,
            restitution: args.restitution,
            mass: args.mass,
            g: args.g,
            fps: args.fps,
            aggregation: Aggregation::Componentwise,
            update_mode: UpdateMode::Snapshot,
            ..SimulationConfig::default()
        };
        if args.compat {
            config.compatible()
        } else {
            config
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level)?;

    let config = SimulationConfig::from(&args);
    let mut simulation = Simulation::new(config.clone())?;
    init_bodies(&mut simulation)?;

    let mut graphics = init_graphics(DisplayConfig {
        width: config.width,
        height: config.height,
        title: "Bodies".to_string(),
    })?;
    let mut event_pump = graphics.sdl_context.event_pump().map_err(|e| anyhow!(e))?;
    let mut clock = FrameClock::new(config.fps);

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::MouseButtonDown { x, y, .. } => {
                    if simulation
                        .spawn_at(Vector2::new(x as f64, y as f64))?
                        .is_added()
                    {
                        info!("Spawned body {} at ({}, {})", simulation.len(), x, y);
                    }
                }
                _ => {}
            }
        }

        simulation.step(config.g);
        render_bodies(&mut graphics, &simulation)?;
        clock.tick();
    }

    info!("Quit after {} bodies", simulation.len());
    Ok(())
}

extern crate sdl2;

use anyhow::anyhow;
use sdl2::{gfx::primitives::DrawRenderer, pixels::Color};

use crate::{palette::Rgb, simulation::Simulation};

pub struct Graphics {
    pub sdl_context: sdl2::Sdl,
    pub canvas: sdl2::render::Canvas<sdl2::video::Window>,
}

pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

pub fn init_graphics(display_config: DisplayConfig) -> anyhow::Result<Graphics> {
    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;

    let window = video_subsystem
        .window(
            &display_config.title,
            display_config.width,
            display_config.height,
        )
        .position_centered()
        .build()?;

    Ok(Graphics {
        sdl_context,
        canvas: window.into_canvas().build()?,
    })
}

fn sdl_color(color: Rgb) -> Color {
    Color::RGB(color.r, color.g, color.b)
}

/// Draws each body's trail as single pixels, then the body itself as a
/// filled disc.
pub fn render_bodies(graphics: &mut Graphics, simulation: &Simulation) -> anyhow::Result<()> {
    graphics.canvas.set_draw_color(Color::RGB(0, 0, 0));
    graphics.canvas.clear();

    let canvas = &graphics.canvas;
    let mut result = Ok(());
    simulation.for_each_body(|body, trail| {
        if result.is_err() {
            return;
        }
        let color = sdl_color(body.color);
        for point in trail.iter() {
            if let Err(e) = canvas.pixel(point.x as i16, point.y as i16, color) {
                result = Err(anyhow!(e));
                return;
            }
        }
        if let Err(e) = canvas.filled_circle(
            body.position.x as i16,
            body.position.y as i16,
            body.radius as i16,
            color,
        ) {
            result = Err(anyhow!(e));
        }
    });
    result?;

    graphics.canvas.present();
    Ok(())
}

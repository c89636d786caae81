// src/main.rs
// The stage: owns the window, feeds frame time to the renderer and turns
// mouse, keyboard and OSC input into taps.

use nannou::prelude::*;

use linerot::{
    config::Config,
    constants::BACK_COLOR,
    controllers::{OscCommand, OscController, OscSender},
    draw::{hex_color, NannouSurface, Viewport},
    render::Renderer,
};

struct Model {
    renderer: Renderer,

    // Comms components, absent when OSC is disabled or the port is taken
    osc_controller: Option<OscController>,
    osc_sender: Option<OscSender>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("No usable config.toml ({}), using defaults", e);
        Config::default()
    });

    let (osc_controller, osc_sender) = if config.osc.enabled {
        connect_osc(config.osc.rx_port)
    } else {
        (None, None)
    };

    app.new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to build window");

    Model {
        renderer: Renderer::new(),
        osc_controller,
        osc_sender,
    }
}

fn connect_osc(port: u16) -> (Option<OscController>, Option<OscSender>) {
    let controller = match OscController::new(port) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("OSC input disabled, failed to bind port {}: {}", port, e);
            return (None, None);
        }
    };
    let sender = OscSender::new(port)
        .map_err(|e| log::warn!("OSC loopback disabled: {}", e))
        .ok();
    (Some(controller), sender)
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.renderer.handle_tap();
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Space {
        // loop back through OSC when it is up
        match &model.osc_sender {
            Some(sender) => sender.send_tap(),
            _ => {
                model.renderer.handle_tap();
            }
        }
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    if let Some(osc_controller) = model.osc_controller.as_mut() {
        osc_controller.process_messages();
        for command in osc_controller.take_commands() {
            match command {
                OscCommand::Tap => {
                    model.renderer.handle_tap();
                }
            }
        }
    }

    model.renderer.update(update.since_last);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(hex_color(BACK_COLOR));

    let rect = app.window_rect();
    let viewport = Viewport::new(rect.w(), rect.h());
    let mut surface = NannouSurface::new(&draw, viewport);
    model.renderer.render(&mut surface, viewport);

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", e);
    }
}

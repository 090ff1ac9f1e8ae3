//! Main GUI application loop.

use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, info};
use winit::{
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{
    DragSelection, ExplorerSettings, InteractionHandler, InteractiveController, ViewportCommand,
};
use crate::core::actions::progressive_scan::ports::TickScheduler;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::input::gui::errors::GuiError;
use crate::input::gui::keys::command_for_key;
use crate::presenters::pixels::surface::PixelsSurface;

/// Ticks arrive as redraws of the one explorer window.
struct WindowTicks {
    window: &'static Window,
}

impl TickScheduler for WindowTicks {
    fn request_tick(&self) {
        self.window.request_redraw();
    }
}

fn raster_for(size: PhysicalSize<u32>, scale_factor: f64) -> RasterSize {
    let logical = size.to_logical::<f64>(scale_factor);

    RasterSize::from_logical(logical.width, logical.height)
}

struct ExplorerApp {
    window: &'static Window,
    surface: PixelsSurface,
    controller: InteractiveController<WindowTicks>,
    interaction: InteractionHandler,
    /// Last pointer position in raster pixels.
    cursor: Option<Point>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl ExplorerApp {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        settings: ExplorerSettings,
    ) -> Result<Self, GuiError> {
        let scale_factor = window.scale_factor();
        let raster = raster_for(window.inner_size(), scale_factor);
        let surface = PixelsSurface::new(window, raster)?;
        let controller = InteractiveController::new(settings, raster, WindowTicks { window })
            .with_pixel_density(scale_factor);

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            window,
            surface,
            controller,
            interaction: InteractionHandler::new(settings.lock_drag_aspect),
            cursor: None,
            egui_ctx,
            egui_state,
        })
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<()>,
    ) -> Result<(), GuiError> {
        // egui sees every event first; it keeps pointer and key input over its panel.
        let response = self.egui_state.on_window_event(self.window, event);

        if response.repaint {
            self.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                self.controller.shutdown();
                elwt.exit();
            }
            WindowEvent::RedrawRequested => self.redraw()?,
            WindowEvent::Resized(size) => self.resized(*size)?,
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                self.resized(self.window.inner_size())?;
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.interaction.cancel();
                self.window.request_redraw();
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.left_button(*state, response.consumed),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } if !response.consumed => {
                if let Some(command) = command_for_key(logical_key) {
                    self.controller.apply(command);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn about_to_wait(&mut self, elwt: &EventLoopWindowTarget<()>) -> Result<(), GuiError> {
        self.controller
            .poll_resize(Instant::now(), &mut self.surface, self.window.scale_factor());

        if let Some(err) = self.surface.take_error() {
            return Err(err.into());
        }

        match self.controller.resize_deadline() {
            Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => elwt.set_control_flow(ControlFlow::Wait),
        }

        Ok(())
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        self.controller.tick(&mut self.surface);

        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.window.request_redraw();
        }

        self.surface.render(egui_output, &self.egui_ctx)?;

        Ok(())
    }

    fn resized(&mut self, size: PhysicalSize<u32>) -> Result<(), GuiError> {
        self.surface.resize_surface(size.width, size.height)?;
        self.controller
            .notify_resize(raster_for(size, self.window.scale_factor()), Instant::now());
        self.window.request_redraw();

        Ok(())
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let logical = position.to_logical::<f64>(self.window.scale_factor());
        let point = Point::new(logical.x, logical.y);

        self.cursor = Some(point);

        if self.interaction.is_dragging() {
            self.interaction.pointer_move(point, self.controller.raster());
            self.window.request_redraw();
        }
    }

    fn left_button(&mut self, state: ElementState, consumed_by_ui: bool) {
        match state {
            ElementState::Pressed if !consumed_by_ui => {
                if let Some(cursor) = self.cursor {
                    self.interaction.pointer_down(cursor);
                }
            }
            ElementState::Released => {
                if let Some(command) = self.interaction.pointer_up() {
                    self.controller.apply(command);
                }
                self.window.request_redraw();
            }
            ElementState::Pressed => {}
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let controller = &self.controller;
        let selection = self.interaction.selection();
        let mut reset_clicked = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Debug Panel")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 200.0])
                .show(ctx, |ui| {
                    ui.heading("Fractal Explorer");
                    ui.separator();

                    let viewport = controller.viewport();
                    ui.label("Viewport:");
                    ui.label(format!("Origin: ({:.3}, {:.3})", viewport.x(), viewport.y()));
                    ui.label(format!(
                        "Size: {:.3} x {:.3}",
                        viewport.width(),
                        viewport.height()
                    ));

                    if ui.button("Reset view").clicked() {
                        reset_clicked = true;
                    }

                    ui.separator();
                    ui.label(format!("Max iterations: {}", controller.max_iterations()));
                    ui.label(format!("Colour map: {}", controller.colour_map_name()));
                    let raster = controller.raster();
                    ui.label(format!(
                        "Raster: {}x{} @ {:.2}x",
                        raster.width,
                        raster.height,
                        controller.pixel_density()
                    ));
                    ui.label(format!(
                        "Scan: {:?} ({:.0}%)",
                        controller.scan_state(),
                        controller.progress().fraction() * 100.0
                    ));
                    if let Some(duration) = controller.last_pass_duration() {
                        ui.label(format!("Last pass: {} ms", duration.as_millis()));
                    }
                });

            if let Some(selection) = selection {
                draw_selection(ctx, selection);
            }
        });

        if reset_clicked {
            self.controller.apply(ViewportCommand::Reset);
        }

        output
    }
}

fn draw_selection(ctx: &Context, selection: DragSelection) {
    let (top_left, bottom_right) = selection.corners();
    let rect = egui::Rect::from_min_max(
        egui::pos2(top_left.x as f32, top_left.y as f32),
        egui::pos2(bottom_right.x as f32, bottom_right.y as f32),
    );

    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("drag_selection"),
    ))
    .rect_stroke(rect, 0.0, egui::Stroke::new(1.0, egui::Color32::WHITE));
}

/// Opens the explorer window and runs until it is closed.
pub fn run_gui(settings: ExplorerSettings) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Explorer")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = ExplorerApp::new(window, &event_loop, settings)?;
    let mut failure = None;

    info!(
        width = app.controller.raster().width,
        height = app.controller.raster().height,
        scale_factor = window.scale_factor(),
        "explorer window opened"
    );

    event_loop.run(|event, elwt| {
        let result = match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => app.handle_window_event(event, elwt),
            Event::AboutToWait => app.about_to_wait(elwt),
            _ => Ok(()),
        };

        if let Err(err) = result {
            error!(%err, "explorer stopped");
            failure = Some(err);
            elwt.exit();
        }
    })?;

    failure.map_or(Ok(()), Err)
}

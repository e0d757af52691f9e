use glam::Vec2;
use ik_bloom::input::TouchPhase;
use ik_bloom::render::{GpuContext, SceneRenderer};
use ik_bloom::{Config, ConfigError, Frame, FrameLoop, PointerState, Scene, Simulation};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const INITIAL_SIZE: (u32, u32) = (1280, 720);

struct App {
    window: Option<Arc<Window>>,
    context: Option<GpuContext>,
    renderer: Option<SceneRenderer>,
    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    frames: FrameLoop<PointerState>,
    last_frame: Option<Frame>,
}

impl App {
    fn new() -> Result<Self, ConfigError> {
        let size = Vec2::new(INITIAL_SIZE.0 as f32, INITIAL_SIZE.1 as f32);
        let simulation = Simulation::new(Config::default(), size)?;
        let input = PointerState::new(simulation.sun());

        Ok(Self {
            window: None,
            context: None,
            renderer: None,
            egui_state: None,
            egui_renderer: None,
            frames: FrameLoop::new(simulation, input),
            last_frame: None,
        })
    }

    fn update(&mut self) {
        if let Some(frame) = self.frames.advance() {
            self.last_frame = Some(frame);
        }
    }

    fn render(&mut self) {
        let (Some(window), Some(context), Some(egui_state)) =
            (self.window.as_ref(), self.context.as_ref(), self.egui_state.as_mut())
        else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                context.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = egui_state.take_egui_input(window);
        let egui_ctx = egui_state.egui_ctx().clone();

        let simulation = self.frames.simulation();
        let gap_range = simulation.gap().range();
        let mut gap = simulation.gap().get();
        let running = self.frames.is_running();
        let mut start_clicked = false;
        let frame = self.last_frame.clone().unwrap_or_else(|| simulation.snapshot());

        let full_output = egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Bloom")
                .default_pos([20.0, 20.0])
                .resizable(false)
                .show(ctx, |ui| {
                    if !running && ui.button("Start").clicked() {
                        start_clicked = true;
                    }

                    ui.horizontal(|ui| {
                        ui.label("Gap:");
                        ui.add(egui::Slider::new(&mut gap, gap_range.clone()).suffix(" px"));
                    });

                    ui.separator();
                    ui.small(format!("Stretch: {:.2}", frame.stretch_factor));
                    ui.small(format!("Segment: {:.1} px", frame.solve.segment_length));
                    ui.small("Move the mouse or touch to guide the sun");
                });
        });

        egui_state.handle_platform_output(window, full_output.platform_output);
        let clipped_primitives = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        self.frames.simulation_mut().set_gap(gap);
        if start_clicked {
            self.frames.start();
        }

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(context, &view, &Scene::build(&frame));
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [context.size.width, context.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        self.render_egui(
            &view,
            &full_output.textures_delta,
            clipped_primitives,
            screen_descriptor,
        );

        output.present();
    }

    fn render_egui(
        &mut self,
        view: &wgpu::TextureView,
        textures_delta: &egui::TexturesDelta,
        clipped_primitives: Vec<egui::ClippedPrimitive>,
        screen_descriptor: egui_wgpu::ScreenDescriptor,
    ) {
        let (Some(context), Some(egui_renderer)) = (self.context.as_ref(), self.egui_renderer.as_mut())
        else {
            return;
        };

        for (id, delta) in &textures_delta.set {
            egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
        }

        let mut encoder = context.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Egui Encoder"),
        });

        egui_renderer.update_buffers(
            &context.device,
            &context.queue,
            &mut encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        }

        context.queue.submit(std::iter::once(encoder.finish()));

        for id in &textures_delta.free {
            egui_renderer.free_texture(id);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("IK Bloom")
            .with_inner_size(winit::dpi::PhysicalSize::new(INITIAL_SIZE.0, INITIAL_SIZE.1));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let context = match pollster::block_on(GpuContext::new(window.clone())) {
            Ok(context) => context,
            Err(e) => {
                log::error!("failed to initialise GPU: {e}");
                event_loop.exit();
                return;
            }
        };

        self.frames.simulation_mut().resize(Vec2::new(
            context.size.width as f32,
            context.size.height as f32,
        ));

        let renderer = SceneRenderer::new(&context);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx,
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(&context.device, context.config.format, None, 1, false);

        self.window = Some(window);
        self.context = Some(context);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.context {
                    context.resize(size);
                }
                self.frames
                    .simulation_mut()
                    .resize(Vec2::new(size.width as f32, size.height as f32));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        match code {
                            KeyCode::Escape => event_loop.exit(),
                            KeyCode::Space | KeyCode::Enter => self.frames.start(),
                            _ => {}
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.frames
                    .input_mut()
                    .on_mouse_move(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::Touch(touch) => {
                let phase = match touch.phase {
                    winit::event::TouchPhase::Started => TouchPhase::Started,
                    winit::event::TouchPhase::Moved => TouchPhase::Moved,
                    winit::event::TouchPhase::Ended => TouchPhase::Ended,
                    winit::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
                };
                let location = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                self.frames.input_mut().on_touch(touch.id, phase, location);
            }

            WindowEvent::RedrawRequested => {
                self.update();
                self.render();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}

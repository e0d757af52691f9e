//! WASM entry point: the bloom scene on a page canvas
//!
//! The page has no egui panel, so the controls are keyboard and pointer only:
//!
//! - click, tap, Space or Enter starts the animation
//! - ArrowUp / ArrowDown widen or narrow the end gap by 10 px, kept inside
//!   the configured gap range (50 to 200 px by default)
//! - the mouse or the first touch steers the sun

use crate::config::Config;
use crate::input::{PointerState, TouchPhase};
use crate::render::{GpuContext, SceneRenderer};
use crate::scene::Scene;
use crate::sim::{Frame, FrameLoop, Simulation};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::web::EventLoopExtWebSys;
use winit::platform::web::WindowAttributesExtWebSys;
use winit::window::{Window, WindowId};

const GAP_STEP: f32 = 10.0;

struct AppState {
    context: Option<GpuContext>,
    renderer: Option<SceneRenderer>,
}

struct App {
    window: Option<Arc<Window>>,
    state: Rc<RefCell<AppState>>,
    frames: FrameLoop<PointerState>,
    last_frame: Option<Frame>,
    init_pending: bool,
}

impl App {
    fn new(simulation: Simulation) -> Self {
        let input = PointerState::new(simulation.sun());
        Self {
            window: None,
            state: Rc::new(RefCell::new(AppState {
                context: None,
                renderer: None,
            })),
            frames: FrameLoop::new(simulation, input),
            last_frame: None,
            init_pending: false,
        }
    }

    fn update(&mut self) {
        if let Some(frame) = self.frames.advance() {
            self.last_frame = Some(frame);
        }
    }

    fn render(&mut self) {
        let mut state = self.state.borrow_mut();
        let AppState { context, renderer } = &mut *state;
        let (Some(context), Some(renderer)) = (context.as_ref(), renderer.as_mut()) else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(o) => o,
            Err(_) => return,
        };

        let frame = self
            .last_frame
            .clone()
            .unwrap_or_else(|| self.frames.simulation().snapshot());

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        renderer.render(context, &view, &Scene::build(&frame));
        output.present();
    }

    fn nudge_gap(&mut self, delta: f32) {
        let simulation = self.frames.simulation_mut();
        simulation.nudge_gap(delta);
        log::info!("end gap {:.0}px", simulation.gap().get());
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_pending {
            return;
        }
        self.init_pending = true;

        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("canvas"))
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("could not find canvas element with id 'canvas'");
            return;
        };

        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let window_attrs = Window::default_attributes()
            .with_canvas(Some(canvas))
            .with_inner_size(PhysicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                return;
            }
        };
        self.window = Some(window.clone());
        self.frames
            .simulation_mut()
            .resize(Vec2::new(width as f32, height as f32));

        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let context = match GpuContext::new(window.clone()).await {
                Ok(context) => context,
                Err(e) => {
                    log::error!("failed to initialise GPU: {e}");
                    return;
                }
            };
            let renderer = SceneRenderer::new(&context);

            let mut state = state.borrow_mut();
            state.context = Some(context);
            state.renderer = Some(renderer);

            window.request_redraw();
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                let mut state = self.state.borrow_mut();
                if let Some(context) = &mut state.context {
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
                            KeyCode::ArrowUp => self.nudge_gap(GAP_STEP),
                            KeyCode::ArrowDown => self.nudge_gap(-GAP_STEP),
                            KeyCode::Space | KeyCode::Enter => self.frames.start(),
                            _ => {}
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, .. } => {
                if state == ElementState::Pressed {
                    self.frames.start();
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
                if phase == TouchPhase::Started {
                    self.frames.start();
                }
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

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let simulation = Simulation::new(Config::default(), Vec2::new(1280.0, 720.0))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let event_loop = EventLoop::new().map_err(|e| JsValue::from_str(&e.to_string()))?;

    event_loop.spawn_app(App::new(simulation));
    Ok(())
}

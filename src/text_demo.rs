//! Standalone 3D text demo
//!
//! Typesets a fixed string once and spins it under the same pipeline the
//! game uses. Exists to exercise the text path without the simulation.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Mat4, Vec3};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::renderer::{Font, OrbitCamera, RenderState, TextStyle, Vertex, typeset};

const DEMO_TEXT: &str = "Hello, Pong!";
const CAMERA_DISTANCE: f32 = 8.0;
/// Spin rate in radians per millisecond
const SPIN_RATE: f32 = 0.0008;

struct Demo {
    /// Typeset mesh, centered on the origin
    mesh: Vec<Vertex>,
    camera: OrbitCamera,
    render_state: RenderState,
}

impl Demo {
    fn frame(&mut self, time: f64) {
        let spin = Mat4::from_rotation_y(time as f32 * SPIN_RATE);
        let vertices: Vec<Vertex> = self
            .mesh
            .iter()
            .map(|v| {
                Vertex::new(
                    spin.transform_point3(Vec3::from_array(v.position)),
                    spin.transform_vector3(Vec3::from_array(v.normal)),
                    v.color,
                )
            })
            .collect();

        self.camera.update();
        match self.render_state.render(&vertices, &self.camera) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let (w, h) = self.render_state.size;
                self.render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

pub async fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Text demo starting...");

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .expect("no canvas")
        .dyn_into()
        .expect("not a canvas");

    let dpr = window.device_pixel_ratio();
    let width = (canvas.client_width() as f64 * dpr) as u32;
    let height = (canvas.client_height() as f64 * dpr) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let font = Font::builtin();
    let style = TextStyle::default();
    let text_width = crate::renderer::text::measure(DEMO_TEXT, &font, &style);

    // Center the string on the origin so it spins in place
    let offset = Vec3::new(-text_width / 2.0, -style.size / 2.0, -style.depth / 2.0);
    let mesh: Vec<Vertex> = typeset(DEMO_TEXT, &font, &style, [1.0, 0.85, 0.2, 1.0])
        .into_iter()
        .map(|v| Vertex::new(Vec3::from_array(v.position) + offset, Vec3::from_array(v.normal), v.color))
        .collect();

    let render_state = RenderState::for_canvas(canvas).await;

    let demo = Rc::new(RefCell::new(Demo {
        mesh,
        camera: OrbitCamera::facing(CAMERA_DISTANCE),
        render_state,
    }));

    request_animation_frame(demo);

    log::info!("Text demo running!");
}

fn request_animation_frame(demo: Rc<RefCell<Demo>>) {
    let window = web_sys::window().unwrap();
    let closure = Closure::once(move |time: f64| {
        demo.borrow_mut().frame(time);
        request_animation_frame(demo);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

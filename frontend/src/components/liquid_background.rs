use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    window, HtmlCanvasElement, MouseEvent, WebGlProgram, WebGlRenderingContext as GL, WebGlShader,
    WebGlUniformLocation,
};
use yew::prelude::*;
use crate::utils::listener::EventListener;

const EASING: f32 = 0.05;

const VERTEX_SHADER: &str = r#"
    attribute vec2 a_pos;
    varying vec2 vUv;
    void main() {
        vUv = a_pos * 0.5 + 0.5;
        gl_Position = vec4(a_pos, 0.0, 1.0);
    }
"#;

const FRAGMENT_SHADER: &str = r#"
    precision mediump float;
    uniform float uTime;
    uniform vec2 uMouse;
    uniform vec3 uColor1;
    uniform vec3 uColor2;
    varying vec2 vUv;
    void main() {
        vec2 uv = vUv;
        float t = uTime * 0.15;
        vec2 m = uMouse * 0.1;
        float color = smoothstep(0.0, 1.0,
            (sin(uv.x * 8.0 + t + m.x * 12.0) + sin(uv.y * 6.0 - t + m.y * 12.0)) * 0.5 + 0.5);
        gl_FragColor = vec4(mix(uColor1, uColor2, color), 1.0);
    }
"#;

pub type Vec3 = [f32; 3];

/// Colours the shader blends between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Vec3,
    pub secondary: Vec3,
}

impl Palette {
    pub const BLACK: Palette = Palette {
        primary: [0.0, 0.0, 0.0],
        secondary: [0.0, 0.0, 0.0],
    };

    pub fn for_theme(dark: bool) -> Self {
        if dark {
            Palette {
                primary: [0.005, 0.005, 0.01],
                secondary: [0.02, 0.02, 0.05],
            }
        } else {
            Palette {
                primary: [0.92, 0.92, 0.94],
                secondary: [0.96, 0.96, 0.98],
            }
        }
    }

    pub fn ease_toward(self, target: Palette) -> Self {
        Palette {
            primary: lerp3(self.primary, target.primary, EASING),
            secondary: lerp3(self.secondary, target.secondary, EASING),
        }
    }
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

pub fn lerp3(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    [
        lerp(from[0], to[0], t),
        lerp(from[1], to[1], t),
        lerp(from[2], to[2], t),
    ]
}

struct Uniforms {
    time: Option<WebGlUniformLocation>,
    mouse: Option<WebGlUniformLocation>,
    color1: Option<WebGlUniformLocation>,
    color2: Option<WebGlUniformLocation>,
}

fn compile_shader(gl: &GL, src: &str, shader_type: u32) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or("could not create shader")?;
    gl.shader_source(&shader, src);
    gl.compile_shader(&shader);
    if !gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Err(JsValue::from(gl.get_shader_info_log(&shader).unwrap_or_default()));
    }
    Ok(shader)
}

fn link_program(gl: &GL) -> Result<WebGlProgram, JsValue> {
    let vert = compile_shader(gl, VERTEX_SHADER, GL::VERTEX_SHADER)?;
    let frag = compile_shader(gl, FRAGMENT_SHADER, GL::FRAGMENT_SHADER)?;
    let program = gl.create_program().ok_or("could not create program")?;
    gl.attach_shader(&program, &vert);
    gl.attach_shader(&program, &frag);
    gl.link_program(&program);
    if !gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Err(JsValue::from(gl.get_program_info_log(&program).unwrap_or_default()));
    }
    Ok(program)
}

/// Sets up the quad and returns the context plus uniform locations.
fn init_gl(canvas: &HtmlCanvasElement) -> Result<(GL, Uniforms), JsValue> {
    let gl: GL = canvas
        .get_context("webgl")?
        .ok_or("WebGL not supported")?
        .dyn_into()?;
    let program = link_program(&gl)?;
    gl.use_program(Some(&program));

    let quad: [f32; 12] = [
        -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, //
        -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
    ];
    let buffer = gl.create_buffer().ok_or("could not create buffer")?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let vertices = js_sys::Float32Array::from(&quad[..]);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

    let position = gl.get_attrib_location(&program, "a_pos");
    if position < 0 {
        return Err(JsValue::from_str("a_pos attribute missing"));
    }
    gl.vertex_attrib_pointer_with_i32(position as u32, 2, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(position as u32);

    let uniforms = Uniforms {
        time: gl.get_uniform_location(&program, "uTime"),
        mouse: gl.get_uniform_location(&program, "uMouse"),
        color1: gl.get_uniform_location(&program, "uColor1"),
        color2: gl.get_uniform_location(&program, "uColor2"),
    };
    Ok((gl, uniforms))
}

fn fit_to_client(canvas: &HtmlCanvasElement, gl: &GL) {
    let width = canvas.client_width().max(1) as u32;
    let height = canvas.client_height().max(1) as u32;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
        gl.viewport(0, 0, width as i32, height as i32);
    }
}

#[derive(Properties, PartialEq)]
pub struct LiquidBackgroundProps {
    pub dark: bool,
}

/// Full-bleed animated shader background that eases toward the active theme.
#[function_component]
pub fn LiquidBackground(props: &LiquidBackgroundProps) -> Html {
    let canvas_ref = use_node_ref();
    let target = use_mut_ref(|| Palette::for_theme(props.dark));

    {
        let target = target.clone();
        use_effect_with_deps(
            move |dark: &bool| {
                *target.borrow_mut() = Palette::for_theme(*dark);
                || ()
            },
            props.dark,
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let running = Rc::new(Cell::new(true));
                let frame_handle = Rc::new(Cell::new(None::<i32>));
                let mut mouse_listener = None;

                let started = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    match init_gl(&canvas) {
                        Ok(setup) => Some((canvas, setup)),
                        Err(e) => {
                            log::warn!("Liquid background disabled: {:?}", e);
                            None
                        }
                    }
                });

                if let (Some((canvas, (gl, uniforms))), Some(win)) = (started, window()) {
                    let pointer = Rc::new(Cell::new([0.0f32, 0.0f32]));
                    mouse_listener = EventListener::on_window("mousemove", {
                        let pointer = pointer.clone();
                        move |event: web_sys::Event| {
                            if let (Some(mouse), Some(win)) =
                                (event.dyn_ref::<MouseEvent>(), window())
                            {
                                let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
                                let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
                                let x = (mouse.client_x() as f64 / w) * 2.0 - 1.0;
                                let y = -((mouse.client_y() as f64 / h) * 2.0 - 1.0);
                                pointer.set([x as f32, y as f32]);
                            }
                        }
                    });

                    let start = win.performance().map(|p| p.now()).unwrap_or(0.0);
                    let palette = Rc::new(Cell::new(Palette::BLACK));
                    let eased_mouse = Rc::new(Cell::new([0.0f32, 0.0f32]));
                    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
                    let schedule = frame.clone();

                    let running_in_frame = running.clone();
                    let handle_in_frame = frame_handle.clone();
                    *schedule.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        if !running_in_frame.get() {
                            return;
                        }
                        let Some(win) = window() else { return };
                        let now = win.performance().map(|p| p.now()).unwrap_or(start);
                        let elapsed = ((now - start) / 1000.0) as f32;

                        let next = palette.get().ease_toward(*target.borrow());
                        palette.set(next);
                        let goal = pointer.get();
                        let current = eased_mouse.get();
                        let moved = [
                            lerp(current[0], goal[0], EASING),
                            lerp(current[1], goal[1], EASING),
                        ];
                        eased_mouse.set(moved);

                        fit_to_client(&canvas, &gl);
                        gl.uniform1f(uniforms.time.as_ref(), elapsed);
                        gl.uniform2f(uniforms.mouse.as_ref(), moved[0], moved[1]);
                        gl.uniform3f(uniforms.color1.as_ref(), next.primary[0], next.primary[1], next.primary[2]);
                        gl.uniform3f(uniforms.color2.as_ref(), next.secondary[0], next.secondary[1], next.secondary[2]);
                        gl.draw_arrays(GL::TRIANGLES, 0, 6);

                        if let Some(callback) = frame.borrow().as_ref() {
                            match win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                                Ok(id) => handle_in_frame.set(Some(id)),
                                Err(e) => log::warn!("Animation frame rejected: {:?}", e),
                            }
                        }
                    }) as Box<dyn FnMut()>));

                    if let Some(callback) = schedule.borrow().as_ref() {
                        if let Ok(id) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                            frame_handle.set(Some(id));
                        }
                    }

                    // The frame closure holds the only reference to itself; the
                    // teardown below breaks that cycle.
                    let teardown_running = running.clone();
                    let teardown_handle = frame_handle.clone();
                    return Box::new(move || {
                        teardown_running.set(false);
                        if let (Some(id), Some(win)) = (teardown_handle.get(), window()) {
                            let _ = win.cancel_animation_frame(id);
                        }
                        schedule.borrow_mut().take();
                        drop(mouse_listener);
                    }) as Box<dyn FnOnce()>;
                }

                Box::new(move || {
                    running.set(false);
                    drop(mouse_listener);
                }) as Box<dyn FnOnce()>
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="liquid-background" style="width: 100%; height: 100%; display: block;" />
    }
}

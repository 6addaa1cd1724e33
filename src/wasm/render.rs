use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};

use crate::error::{ProgramError, ShaderStage};
use crate::surface::{
    uniform, FrameUniforms, RenderSurface, SurfaceSize, QUAD_VERTEX_COUNT, QUAD_VERTICES,
};

/// WebGL2 canvas running the pattern program over a full-viewport quad.
pub struct WebGlSurface {
    canvas: HtmlCanvasElement,
    gl: GL,
    program: Option<WebGlProgram>,
    buffer: Option<WebGlBuffer>,
    uniforms: UniformSlots,
}

#[derive(Default)]
struct UniformSlots {
    time: Option<WebGlUniformLocation>,
    tween: Option<WebGlUniformLocation>,
    pointer_count: Option<WebGlUniformLocation>,
    resolution: Option<WebGlUniformLocation>,
}

impl WebGlSurface {
    /// Acquire the context and build the pattern program. A program that fails
    /// to compile or link is logged and the surface keeps going without it.
    pub fn new(
        canvas: HtmlCanvasElement,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, JsValue> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        let program = match build_program(&gl, vertex_source, fragment_source) {
            Ok(program) => Some(program),
            Err(errors) => {
                // rendering continues; frames stay blank
                for err in &errors {
                    log::error!("{err}");
                }
                None
            }
        };

        let buffer = gl.create_buffer();
        gl.bind_buffer(GL::ARRAY_BUFFER, buffer.as_ref());
        let vertices = js_sys::Float32Array::from(QUAD_VERTICES.as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

        let mut uniforms = UniformSlots::default();
        if let Some(program) = program.as_ref() {
            let position = gl.get_attrib_location(program, "position");
            if position >= 0 {
                gl.enable_vertex_attrib_array(position as u32);
                gl.vertex_attrib_pointer_with_i32(position as u32, 2, GL::FLOAT, false, 0, 0);
            }
            uniforms = UniformSlots {
                time: gl.get_uniform_location(program, uniform::TIME),
                tween: gl.get_uniform_location(program, uniform::TWEEN),
                pointer_count: gl.get_uniform_location(program, uniform::POINTER_COUNT),
                resolution: gl.get_uniform_location(program, uniform::RESOLUTION),
            };
        }

        log::info!("webgl2 surface ready");
        Ok(Self {
            canvas,
            gl,
            program,
            buffer,
            uniforms,
        })
    }
}

/// Both stages are always compiled so every diagnostic is reported.
fn build_program(
    gl: &GL,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<WebGlProgram, Vec<ProgramError>> {
    let vs = compile_shader(gl, ShaderStage::Vertex, vertex_source);
    let fs = compile_shader(gl, ShaderStage::Fragment, fragment_source);
    let (vs, fs) = match (vs, fs) {
        (Ok(vs), Ok(fs)) => (vs, fs),
        (vs, fs) => return Err(vs.err().into_iter().chain(fs.err()).collect()),
    };

    let program = gl
        .create_program()
        .ok_or_else(|| vec![ProgramError::CreateProgram])?;
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !linked {
        return Err(vec![ProgramError::Link {
            log: gl.get_program_info_log(&program).unwrap_or_default(),
        }]);
    }
    Ok(program)
}

fn compile_shader(gl: &GL, stage: ShaderStage, source: &str) -> Result<WebGlShader, ProgramError> {
    let kind = match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(kind)
        .ok_or(ProgramError::CreateShader(stage))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        Err(ProgramError::Compile {
            stage,
            log: gl.get_shader_info_log(&shader).unwrap_or_default(),
        })
    }
}

impl RenderSurface for WebGlSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }

    fn set_uniforms(&mut self, frame: &FrameUniforms) {
        let gl = &self.gl;
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        gl.use_program(self.program.as_ref());
        gl.bind_buffer(GL::ARRAY_BUFFER, self.buffer.as_ref());

        gl.uniform1f(self.uniforms.time.as_ref(), frame.time);
        gl.uniform1f(self.uniforms.tween.as_ref(), frame.tween);
        gl.uniform1i(self.uniforms.pointer_count.as_ref(), frame.pointer_count);
        gl.uniform2f(
            self.uniforms.resolution.as_ref(),
            frame.resolution[0],
            frame.resolution[1],
        );
    }

    fn draw_full_viewport_quad(&mut self) {
        if self.program.is_some() {
            self.gl.draw_arrays(GL::TRIANGLES, 0, QUAD_VERTEX_COUNT);
        }
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        self.gl.viewport(0, 0, size.width as i32, size.height as i32);
    }
}

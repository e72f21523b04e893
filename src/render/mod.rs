//! GPU-Rendering mit wgpu.

mod callback;
mod curve_renderer;
mod point_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::WgpuRenderCallback;
pub(crate) use curve_renderer::CurveRenderer;
pub(crate) use point_renderer::PointRenderer;
use types::{RenderContext, Uniforms};

use anyhow::Context;
use eframe::{egui_wgpu, wgpu};
use std::borrow::Cow;
use std::path::Path;

/// Eingebetteter Standard-Shader.
pub const EMBEDDED_SHADER: &str = include_str!("shaders.wgsl");

/// Lädt den WGSL-Quelltext von `path` oder liefert den eingebetteten Shader.
pub fn load_shader_source(path: Option<&Path>) -> anyhow::Result<Cow<'static, str>> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Shader nicht lesbar: {}", path.display()))?;
            Ok(Cow::Owned(source))
        }
        None => Ok(Cow::Borrowed(EMBEDDED_SHADER)),
    }
}

/// Haupt-Renderer für Kontrollpunkte und Kurve.
///
/// Verwaltet seinen eigenen Zustand (GPU-Buffer, Pipelines) und bietet
/// `new()` + `render_scene()` + `reload_shaders()`.
pub struct Renderer {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pipeline_layout: wgpu::PipelineLayout,
    target_format: wgpu::TextureFormat,
    curve_renderer: CurveRenderer,
    point_renderer: PointRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer mit dem eingebetteten Shader.
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("BSpline Shader"),
            source: wgpu::ShaderSource::Wgsl(EMBEDDED_SHADER.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let target_format = render_state.target_format;
        let curve_renderer = CurveRenderer::new(device, &shader, &pipeline_layout, target_format);
        let point_renderer = PointRenderer::new(device, &shader, &pipeline_layout, target_format);

        Self {
            uniform_buffer,
            bind_group,
            pipeline_layout,
            target_format,
            curve_renderer,
            point_renderer,
        }
    }

    /// Baut beide Pipelines aus neuem WGSL-Quelltext.
    ///
    /// Validierungsfehler werden über einen Error-Scope abgefangen; in dem
    /// Fall bleiben die bisherigen Pipelines aktiv.
    pub fn reload_shaders(&mut self, device: &wgpu::Device, source: &str) -> anyhow::Result<()> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("BSpline Shader (reload)"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });
        let curve_pipeline = CurveRenderer::create_pipeline(
            device,
            &shader,
            &self.pipeline_layout,
            self.target_format,
        );
        let point_pipeline = PointRenderer::create_pipeline(
            device,
            &shader,
            &self.pipeline_layout,
            self.target_format,
        );

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            anyhow::bail!("Shader-Reload fehlgeschlagen: {}", error);
        }

        self.curve_renderer.set_pipeline(curve_pipeline);
        self.point_renderer.set_pipeline(point_pipeline);
        log::info!("Shader neu geladen");
        Ok(())
    }

    /// Rendert die komplette Szene: erst die Kurve, darüber die Kontrollpunkte.
    pub fn render_scene(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        let [width, height] = scene.viewport_size;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }
        if !scene.has_geometry() {
            return;
        }

        let ctx = RenderContext { device, queue };
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[Uniforms::new(scene.viewport_size)]),
        );

        if scene.show_curve {
            self.curve_renderer
                .render(&ctx, render_pass, &self.bind_group, &scene.curve);
        }
        if scene.show_control_points {
            self.point_renderer
                .render(&ctx, render_pass, &self.bind_group, scene);
        }
    }
}

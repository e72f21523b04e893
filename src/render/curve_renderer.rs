//! Kurven-Renderer: zeichnet die Abtastpunkte als Line-Strip.

use super::types::{CurveVertex, RenderContext, MSAA_SAMPLE_COUNT};
use crate::core::CurvePoint;
use eframe::wgpu;

/// Wandelt die Abtastpunkte in GPU-Vertices um.
pub(crate) fn collect_vertices(curve: &[CurvePoint], out: &mut Vec<CurveVertex>) {
    out.clear();
    out.extend(
        curve
            .iter()
            .map(|p| CurveVertex::new(p.position.to_array(), p.color)),
    );
}

/// Renderer für die abgetastete Kurve
pub struct CurveRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    vertex_scratch: Vec<CurveVertex>,
}

impl CurveRenderer {
    /// Erstellt einen neuen Kurven-Renderer
    pub fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        pipeline_layout: &wgpu::PipelineLayout,
        target_format: wgpu::TextureFormat,
    ) -> Self {
        Self {
            pipeline: Self::create_pipeline(device, shader, pipeline_layout, target_format),
            vertex_buffer: None,
            vertex_capacity: 0,
            vertex_scratch: Vec::new(),
        }
    }

    /// Baut die Render-Pipeline aus einem (ggf. neu geladenen) Shader.
    pub fn create_pipeline(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        pipeline_layout: &wgpu::PipelineLayout,
        target_format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Curve Pipeline"),
            layout: Some(pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_curve"),
                buffers: &[CurveVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_curve"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: MSAA_SAMPLE_COUNT,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    /// Ersetzt die Pipeline (Shader-Reload).
    pub fn set_pipeline(&mut self, pipeline: wgpu::RenderPipeline) {
        self.pipeline = pipeline;
    }

    /// Rendert die Kurve; weniger als 2 Punkte ergeben keine Linie.
    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        bind_group: &wgpu::BindGroup,
        curve: &[CurvePoint],
    ) {
        if curve.len() < 2 {
            return;
        }

        let mut vertices = std::mem::take(&mut self.vertex_scratch);
        collect_vertices(curve, &mut vertices);

        if self.vertex_buffer.is_none() || vertices.len() > self.vertex_capacity {
            let vertex_size = std::mem::size_of::<CurveVertex>() as u64;
            let capacity = vertices.len().next_power_of_two();
            self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Curve Vertex Buffer"),
                size: capacity as u64 * vertex_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = capacity;
        }

        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else {
            log::error!("CurveRenderer: Vertex-Buffer fehlt vor dem Draw-Call");
            self.vertex_scratch = vertices;
            return;
        };
        ctx.queue
            .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&vertices));

        log::debug!("Rendere Kurve mit {} Punkten", vertices.len());

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..vertices.len() as u32, 0..1);
        self.vertex_scratch = vertices;
    }
}

//! Kontrollpunkt-Renderer mit GPU-Instancing.

use super::types::{
    PointInstance, QuadVertex, RenderContext, MSAA_SAMPLE_COUNT, SELECTED_SIZE_FACTOR,
};
use crate::shared::RenderScene;
use eframe::wgpu;
use wgpu::util::DeviceExt;

/// Sammelt die Instanzdaten aller Kontrollpunkte in `out`.
///
/// Der selektierte Punkt bekommt die Hervorhebungsfarbe und wird vergrößert.
pub(crate) fn collect_instances(scene: &RenderScene, out: &mut Vec<PointInstance>) {
    out.clear();
    out.extend(scene.control_points.iter().enumerate().map(|(index, point)| {
        if scene.selected_index == Some(index) {
            PointInstance::new(
                point.position.to_array(),
                scene.selected_point_color,
                scene.point_size_px * SELECTED_SIZE_FACTOR,
            )
        } else {
            PointInstance::new(point.position.to_array(), point.color, scene.point_size_px)
        }
    }));
}

/// Renderer für Kontrollpunkte (bildschirmfeste Quadrate)
pub struct PointRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    instance_buffer: Option<wgpu::Buffer>,
    instance_capacity: usize,
    /// Wiederverwendbarer Scratch-Buffer für Instanzdaten (vermeidet per-Frame-Allokation)
    instance_scratch: Vec<PointInstance>,
}

impl PointRenderer {
    /// Erstellt einen neuen Punkt-Renderer
    pub fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        pipeline_layout: &wgpu::PipelineLayout,
        target_format: wgpu::TextureFormat,
    ) -> Self {
        let pipeline = Self::create_pipeline(device, shader, pipeline_layout, target_format);

        // Quad aus 2 Dreiecken
        let corners = [
            QuadVertex { corner: [-1.0, -1.0] },
            QuadVertex { corner: [1.0, -1.0] },
            QuadVertex { corner: [1.0, 1.0] },
            QuadVertex { corner: [-1.0, -1.0] },
            QuadVertex { corner: [1.0, 1.0] },
            QuadVertex { corner: [-1.0, 1.0] },
        ];

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Quad Buffer"),
            contents: bytemuck::cast_slice(&corners),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            instance_buffer: None,
            instance_capacity: 0,
            instance_scratch: Vec::new(),
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
            label: Some("Point Pipeline"),
            layout: Some(pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_point"),
                buffers: &[QuadVertex::desc(), PointInstance::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_point"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
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

    /// Rendert alle Kontrollpunkte der Szene per GPU-Instancing.
    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        bind_group: &wgpu::BindGroup,
        scene: &RenderScene,
    ) {
        let mut instances = std::mem::take(&mut self.instance_scratch);
        collect_instances(scene, &mut instances);

        if instances.is_empty() {
            self.instance_scratch = instances;
            return;
        }

        // Instance-Buffer erstellen/aktualisieren (Reuse)
        if self.instance_buffer.is_none() || instances.len() > self.instance_capacity {
            let instance_size = std::mem::size_of::<PointInstance>() as u64;
            let capacity = instances.len().next_power_of_two();
            self.instance_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Point Instance Buffer"),
                size: capacity as u64 * instance_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.instance_capacity = capacity;
        }

        let Some(instance_buffer) = self.instance_buffer.as_ref() else {
            log::error!("PointRenderer: Instance-Buffer fehlt vor dem Draw-Call");
            self.instance_scratch = instances;
            return;
        };
        ctx.queue
            .write_buffer(instance_buffer, 0, bytemuck::cast_slice(&instances));

        log::debug!("Rendere {} Kontrollpunkte", instances.len());

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, instance_buffer.slice(..));
        render_pass.draw(0..6, 0..instances.len() as u32);
        self.instance_scratch = instances;
    }
}

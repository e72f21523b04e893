//! Rendering-Typen und GPU-Layouts.

use bytemuck::{Pod, Zeroable};

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen, die jeder Sub-Renderer bei jedem Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
}

/// Ecke des Einheits-Quads für Punkt-Instanzen
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    /// Ecke in [-1, 1]
    pub corner: [f32; 2],
}

impl QuadVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Instanz-Daten für einen Kontrollpunkt
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    /// Mittelpunkt im Kurvenraum
    pub center: [f32; 2],
    /// RGBA-Farbe
    pub color: [f32; 4],
    /// Kantenlänge in Pixeln
    pub size_px: f32,
    _padding: [f32; 1],
}

impl PointInstance {
    /// Erstellt eine neue Punkt-Instanz.
    pub fn new(center: [f32; 2], color: [f32; 4], size_px: f32) -> Self {
        Self {
            center,
            color,
            size_px,
            _padding: [0.0; 1],
        }
    }

    /// Beschreibt das Instanz-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Instance,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as eframe::wgpu::BufferAddress,
                    shader_location: 3,
                    format: eframe::wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Vertex der Kurven-Polylinie.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CurveVertex {
    /// Position im Kurvenraum
    pub position: [f32; 2],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl CurveVertex {
    /// Erstellt einen neuen CurveVertex.
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CurveVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Uniform-Buffer mit der Viewport-Größe für die Pixel-Umrechnung
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: [f32; 2],
    _padding: [f32; 2],
}

impl Uniforms {
    /// Erstellt die Uniforms für eine Viewport-Größe.
    pub fn new(viewport_size: [f32; 2]) -> Self {
        Self {
            viewport_size,
            _padding: [0.0; 2],
        }
    }
}

/// MSAA-Sample-Anzahl, muss zu `NativeOptions::multisampling` passen.
pub(crate) const MSAA_SAMPLE_COUNT: u32 = 4;

/// Größenfaktor für den selektierten Kontrollpunkt.
pub(crate) const SELECTED_SIZE_FACTOR: f32 = 1.5;

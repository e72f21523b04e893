//! Paint-Callback, über den egui den Kurven-Renderer in seinen Render-Pass einbindet.

use super::Renderer;
use crate::shared::RenderScene;
use eframe::{egui_wgpu, wgpu};
use std::sync::{Arc, Mutex};

/// Ein Frame Zeichenauftrag: Szene plus Zugriff auf den geteilten Renderer.
pub struct WgpuRenderCallback {
    renderer: Arc<Mutex<Renderer>>,
    scene: RenderScene,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl WgpuRenderCallback {
    /// Erstellt den Auftrag für `scene`.
    ///
    /// Device und Queue sind Handles (intern Arc), der Clone ist billig.
    pub fn new(
        renderer: Arc<Mutex<Renderer>>,
        scene: RenderScene,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
    ) -> Self {
        Self {
            renderer,
            scene,
            device: device.clone(),
            queue: queue.clone(),
        }
    }
}

impl egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        _device: &wgpu::Device,
        _queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        _callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        _callback_resources: &'b egui_wgpu::CallbackResources,
    ) {
        // Leere Szene: kein Lock, kein Upload
        if !self.scene.has_geometry() {
            return;
        }

        match self.renderer.lock() {
            Ok(mut renderer) => {
                renderer.render_scene(&self.device, &self.queue, render_pass, &self.scene)
            }
            Err(_) => log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)"),
        }
    }
}

//! HUD text overlay drawn with egui on top of the scene pass

use egui::{Align2, Color32, FontId, LayerId, Pos2, Rect};
use winit::event::WindowEvent;
use winit::window::Window;

use super::frame::{DrawCommand, Frame, TextAlign};
use crate::Rgb;

/// Tessellated overlay output for one frame
pub struct HudOutput {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
}

/// egui context, winit glue and wgpu renderer for the HUD
pub struct HudOverlay {
    ctx: egui::Context,
    winit_state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl HudOverlay {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, window: &Window) -> Self {
        let ctx = egui::Context::default();
        let winit_state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());
        Self {
            ctx,
            winit_state,
            renderer,
        }
    }

    /// Keep egui's view of the window (size, scale) current
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.winit_state.on_window_event(window, event);
    }

    /// Lay out the frame's text commands
    pub fn prepare(&mut self, window: &Window, frame: &Frame) -> HudOutput {
        let raw_input = self.winit_state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| {
            paint_hud(ctx, frame);
        });
        self.winit_state
            .handle_platform_output(window, full_output.platform_output);

        let primitives = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        HudOutput {
            primitives,
            textures_delta: full_output.textures_delta,
        }
    }

    /// Upload textures and buffers; returns command buffers to submit first
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        hud: &HudOutput,
        screen: &egui_wgpu::ScreenDescriptor,
    ) -> Vec<wgpu::CommandBuffer> {
        for (id, delta) in &hud.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &hud.primitives, screen)
    }

    pub fn paint(
        &self,
        pass: &mut wgpu::RenderPass<'static>,
        hud: &HudOutput,
        screen: &egui_wgpu::ScreenDescriptor,
    ) {
        self.renderer.render(pass, &hud.primitives, screen);
    }

    /// Free textures egui no longer needs
    pub fn cleanup(&mut self, hud: &HudOutput) {
        for id in &hud.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

fn color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

fn anchor(align: TextAlign) -> Align2 {
    match align {
        TextAlign::TopLeft => Align2::LEFT_TOP,
        TextAlign::TopCenter => Align2::CENTER_TOP,
    }
}

/// Paint every text command onto the foreground layer
///
/// Returns the screen rect of each label, in draw order.
pub fn paint_hud(ctx: &egui::Context, frame: &Frame) -> Vec<Rect> {
    let painter = ctx.layer_painter(LayerId::new(egui::Order::Foreground, egui::Id::new("hud")));
    frame
        .commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Text {
                text,
                position,
                align,
                size,
                color,
            } => Some(painter.text(
                Pos2::new(position.x, position.y),
                anchor(*align),
                text,
                FontId::proportional(size.pixels()),
                color32(*color),
            )),
            _ => None,
        })
        .collect()
}

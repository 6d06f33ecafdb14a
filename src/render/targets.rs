use super::helpers;
use crate::constants::DEPTH_FORMAT;

/// Depth attachment sized to the swapchain; rebuilt on resize.
pub(crate) struct RenderTargets {
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (depth_tex, depth_view) =
            helpers::create_depth_texture(device, "depth_tex", width, height, DEPTH_FORMAT);
        Self {
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_tex.destroy();
        (self.depth_tex, self.depth_view) =
            helpers::create_depth_texture(device, "depth_tex", width, height, DEPTH_FORMAT);
    }
}

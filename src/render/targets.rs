use super::helpers;

/// Multisampled colour target resolved into the swapchain each frame.
///
/// Sized to the surface; recreated whenever the surface is reconfigured.
pub(crate) struct MsaaTarget {
    pub(crate) view: wgpu::TextureView,
    format: wgpu::TextureFormat,
    sample_count: u32,
}

impl MsaaTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        Self {
            view: helpers::create_color_view(device, "msaa_color", width, height, format, sample_count),
            format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.view = helpers::create_color_view(
            device,
            "msaa_color",
            width,
            height,
            self.format,
            self.sample_count,
        );
    }
}

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format; colors are supplied in linear space.
    pub prefer_srgb: bool,

    /// FIFO is supported everywhere and is plenty for a page that only
    /// redraws when it scrolls.
    pub present_mode: wgpu::PresentMode,

    /// The viewer does almost no GPU work, so the low-power adapter is fine.
    pub power_preference: wgpu::PowerPreference,

    /// Desired maximum frame latency hint for the surface.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            power_preference: wgpu::PowerPreference::LowPower,
            desired_maximum_frame_latency: 2,
        }
    }
}

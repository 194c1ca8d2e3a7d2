use super::helpers;
use super::targets::HDR_FORMAT;
use dream_core::Rgb;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SkyUniforms {
    top: [f32; 4],
    mid: [f32; 4],
    bottom: [f32; 4],
    hue_deg: f32,
    _pad: [f32; 3],
}

/// Fullscreen three-stop gradient with a slow hue rotation.
pub(crate) struct SkyResources {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniforms: SkyUniforms,
}

impl SkyResources {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sky_shader"),
            source: wgpu::ShaderSource::Wgsl(dream_core::SKY_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sky_bgl"),
            entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::FRAGMENT)],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sky_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_fullscreen_pipeline(
            device,
            "sky_pipeline",
            &pl,
            &shader,
            "fs_sky",
            HDR_FORMAT,
            None,
        );
        let uniform_buffer = helpers::uniform_buffer::<SkyUniforms>(device, "sky_uniforms");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sky_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            uniforms: SkyUniforms {
                top: [0.0, 0.0, 0.0, 1.0],
                mid: [0.0, 0.0, 0.0, 1.0],
                bottom: [0.0, 0.0, 0.0, 1.0],
                hue_deg: 0.0,
                _pad: [0.0; 3],
            },
        }
    }

    pub(crate) fn set_gradient(&mut self, [top, mid, bottom]: [Rgb; 3]) {
        let rgba = |c: Rgb| {
            let [r, g, b] = c.to_linear();
            [r, g, b, 1.0]
        };
        self.uniforms.top = rgba(top);
        self.uniforms.mid = rgba(mid);
        self.uniforms.bottom = rgba(bottom);
    }

    pub(crate) fn set_hue(&mut self, hue_deg: f32) {
        self.uniforms.hue_deg = hue_deg;
    }

    pub(crate) fn draw(&self, queue: &wgpu::Queue, rpass: &mut wgpu::RenderPass<'_>) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}

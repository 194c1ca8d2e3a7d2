use super::helpers;
use super::targets::{RenderTargets, HDR_FORMAT};
use crate::constants::{
    BLOOM_INTENSITY, BLOOM_THRESHOLD, TILT_SHIFT_BAND, TILT_SHIFT_FOCUS_Y, TILT_SHIFT_STRENGTH,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    blur_dir: [f32; 2],
    threshold: f32,
    intensity: f32,
    tilt_focus_y: f32,
    tilt_band: f32,
    tilt_strength: f32,
    _pad: f32,
}

impl PostUniforms {
    fn new(blur_dir: [f32; 2]) -> Self {
        Self {
            blur_dir,
            threshold: BLOOM_THRESHOLD,
            intensity: BLOOM_INTENSITY,
            tilt_focus_y: TILT_SHIFT_FOCUS_Y,
            tilt_band: TILT_SHIFT_BAND,
            tilt_strength: TILT_SHIFT_STRENGTH,
            _pad: 0.0,
        }
    }
}

/// Bright pass, separable blur and the bloom + tilt-shift composite.
///
/// One uniform buffer per pass: queued writes all land before the encoder runs.
pub(crate) struct PostResources {
    bgl0: wgpu::BindGroupLayout, // tex + sampler + uniform
    bgl1: wgpu::BindGroupLayout, // tex + sampler
    sampler: wgpu::Sampler,
    uniforms_still: wgpu::Buffer,
    uniforms_h: wgpu::Buffer,
    uniforms_v: wgpu::Buffer,
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
    groups: PostBindGroups,
}

struct PostBindGroups {
    hdr: wgpu::BindGroup,
    from_bloom_a: wgpu::BindGroup,
    from_bloom_b: wgpu::BindGroup,
    bloom_a_only: wgpu::BindGroup,
}

impl PostResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        swap_format: wgpu::TextureFormat,
        targets: &RenderTargets,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(dream_core::POST_WGSL.into()),
        });
        let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl0"),
            entries: &[
                helpers::texture_entry(0),
                helpers::sampler_entry(1),
                helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl1"),
            entries: &[helpers::texture_entry(0), helpers::sampler_entry(1)],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let uniforms_still = helpers::uniform_buffer::<PostUniforms>(device, "post_uniforms");
        let uniforms_h = helpers::uniform_buffer::<PostUniforms>(device, "post_uniforms_h");
        let uniforms_v = helpers::uniform_buffer::<PostUniforms>(device, "post_uniforms_v");
        // constant for the session
        queue.write_buffer(&uniforms_still, 0, bytemuck::bytes_of(&PostUniforms::new([0.0, 0.0])));
        queue.write_buffer(&uniforms_h, 0, bytemuck::bytes_of(&PostUniforms::new([1.0, 0.0])));
        queue.write_buffer(&uniforms_v, 0, bytemuck::bytes_of(&PostUniforms::new([0.0, 1.0])));

        let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_0"),
            bind_group_layouts: &[&bgl0],
            push_constant_ranges: &[],
        });
        let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_comp"),
            bind_group_layouts: &[&bgl0, &bgl1],
            push_constant_ranges: &[],
        });
        let bright_pipeline = helpers::make_fullscreen_pipeline(
            device,
            "bright_pipeline",
            &pl_single,
            &shader,
            "fs_bright",
            HDR_FORMAT,
            None,
        );
        let blur_pipeline = helpers::make_fullscreen_pipeline(
            device,
            "blur_pipeline",
            &pl_single,
            &shader,
            "fs_blur",
            HDR_FORMAT,
            None,
        );
        let composite_pipeline = helpers::make_fullscreen_pipeline(
            device,
            "composite_pipeline",
            &pl_composite,
            &shader,
            "fs_composite",
            swap_format,
            Some(wgpu::BlendState::REPLACE),
        );

        let groups = PostBindGroups::new(
            device,
            &bgl0,
            &bgl1,
            &sampler,
            [&uniforms_still, &uniforms_h, &uniforms_v],
            targets,
        );
        Self {
            bgl0,
            bgl1,
            sampler,
            uniforms_still,
            uniforms_h,
            uniforms_v,
            bright_pipeline,
            blur_pipeline,
            composite_pipeline,
            groups,
        }
    }

    /// Rebind after the targets were recreated.
    pub(crate) fn rebind(&mut self, device: &wgpu::Device, targets: &RenderTargets) {
        self.groups = PostBindGroups::new(
            device,
            &self.bgl0,
            &self.bgl1,
            &self.sampler,
            [&self.uniforms_still, &self.uniforms_h, &self.uniforms_v],
            targets,
        );
    }

    pub(crate) fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        swap_view: &wgpu::TextureView,
    ) {
        blit(
            encoder,
            "bright_pass",
            &targets.bloom_a_view,
            &self.bright_pipeline,
            &self.groups.hdr,
            None,
        );
        blit(
            encoder,
            "blur_h",
            &targets.bloom_b_view,
            &self.blur_pipeline,
            &self.groups.from_bloom_a,
            None,
        );
        blit(
            encoder,
            "blur_v",
            &targets.bloom_a_view,
            &self.blur_pipeline,
            &self.groups.from_bloom_b,
            None,
        );
        blit(
            encoder,
            "composite",
            swap_view,
            &self.composite_pipeline,
            &self.groups.hdr,
            Some(&self.groups.bloom_a_only),
        );
    }
}

impl PostBindGroups {
    fn new(
        device: &wgpu::Device,
        bgl0: &wgpu::BindGroupLayout,
        bgl1: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        [still, h, v]: [&wgpu::Buffer; 3],
        targets: &RenderTargets,
    ) -> Self {
        let source = |label: &str, view: &wgpu::TextureView, uniforms: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: bgl0,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: uniforms.as_entire_binding(),
                    },
                ],
            })
        };
        let bloom_a_only = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_bloom_a_only"),
            layout: bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        Self {
            hdr: source("bg_hdr", &targets.hdr_view, still),
            from_bloom_a: source("bg_from_bloom_a", &targets.bloom_a_view, h),
            from_bloom_b: source("bg_from_bloom_b", &targets.bloom_b_view, v),
            bloom_a_only,
        }
    }
}

fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}

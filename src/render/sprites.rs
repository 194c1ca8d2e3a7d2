use super::helpers;
use super::targets::HDR_FORMAT;
use dream_core::scene::{CloudDrift, CloudPuff, Star};
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct StarInstance {
    position: [f32; 3],
    size: f32,
    seed: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CloudInstance {
    pub(crate) center: [f32; 3],
    pub(crate) size: f32,
    pub(crate) color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpriteUniforms {
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) star_model: [[f32; 4]; 4],
    pub(crate) viewport: [f32; 2],
    pub(crate) time: f32,
    pub(crate) point_scale: f32,
    pub(crate) puff_softness: f32,
    pub(crate) _pad: [f32; 3],
}

impl SpriteUniforms {
    pub(crate) fn new(view: Mat4, proj: Mat4, star_model: Mat4) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            star_model: star_model.to_cols_array_2d(),
            viewport: [1.0, 1.0],
            time: 0.0,
            point_scale: crate::constants::STAR_POINT_SCALE,
            puff_softness: crate::constants::CLOUD_PUFF_SOFTNESS,
            _pad: [0.0; 3],
        }
    }
}

/// Puff billboards for every cloud, far to near so alpha blending stacks.
pub(crate) fn cloud_instances(
    clouds: &[CloudDrift],
    puffs: &[Vec<CloudPuff>],
    time_sec: f32,
    tint: [f32; 3],
) -> Vec<CloudInstance> {
    let mut out: Vec<CloudInstance> = clouds
        .iter()
        .zip(puffs)
        .filter(|(cloud, _)| cloud.opacity() > 0.0)
        .flat_map(|(cloud, puffs)| {
            let center = cloud.position(time_sec);
            let alpha = cloud.opacity();
            puffs.iter().map(move |p| CloudInstance {
                center: (center + p.offset).to_array(),
                size: p.size,
                color: [tint[0], tint[1], tint[2], alpha],
            })
        })
        .collect();
    out.sort_by(|a, b| a.center[2].total_cmp(&b.center[2]));
    out
}

pub(crate) struct SpriteResources {
    star_pipeline: wgpu::RenderPipeline,
    cloud_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    star_buffer: wgpu::Buffer,
    star_count: u32,
    cloud_buffer: wgpu::Buffer,
    cloud_capacity: usize,
    cloud_count: u32,
}

const STAR_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32];
const CLOUD_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x4];

fn sprite_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    (vs, fs): (&str, &str),
    instance_layout: wgpu::VertexBufferLayout<'_>,
    blend: wgpu::BlendState,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs),
            buffers: &[instance_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::Zero,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

impl SpriteResources {
    pub(crate) fn new(device: &wgpu::Device, stars: &[Star], cloud_capacity: usize) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprites_shader"),
            source: wgpu::ShaderSource::Wgsl(dream_core::SPRITES_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sprites_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprites_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let star_pipeline = sprite_pipeline(
            device,
            "star_pipeline",
            &pl,
            &shader,
            ("vs_star", "fs_star"),
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<StarInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &STAR_ATTRS,
            },
            ADDITIVE,
        );
        let cloud_pipeline = sprite_pipeline(
            device,
            "cloud_pipeline",
            &pl,
            &shader,
            ("vs_cloud", "fs_cloud"),
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<CloudInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &CLOUD_ATTRS,
            },
            wgpu::BlendState::ALPHA_BLENDING,
        );

        let uniform_buffer = helpers::uniform_buffer::<SpriteUniforms>(device, "sprite_uniforms");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sprites_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let star_data: Vec<StarInstance> = stars
            .iter()
            .map(|s| StarInstance {
                position: s.position.to_array(),
                size: s.size,
                seed: s.twinkle_seed,
            })
            .collect();
        let star_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("star_instances"),
            contents: bytemuck::cast_slice(&star_data),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let cloud_capacity = cloud_capacity.max(1);
        let cloud_buffer = create_cloud_buffer(device, cloud_capacity);

        Self {
            star_pipeline,
            cloud_pipeline,
            uniform_buffer,
            bind_group,
            star_buffer,
            star_count: star_data.len() as u32,
            cloud_buffer,
            cloud_capacity,
            cloud_count: 0,
        }
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &SpriteUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn set_clouds(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[CloudInstance],
    ) {
        if instances.len() > self.cloud_capacity {
            self.cloud_capacity = instances.len().next_power_of_two();
            self.cloud_buffer = create_cloud_buffer(device, self.cloud_capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.cloud_buffer, 0, bytemuck::cast_slice(instances));
        }
        self.cloud_count = instances.len() as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);

        rpass.set_pipeline(&self.star_pipeline);
        rpass.set_vertex_buffer(0, self.star_buffer.slice(..));
        rpass.draw(0..6, 0..self.star_count);

        if self.cloud_count > 0 {
            rpass.set_pipeline(&self.cloud_pipeline);
            rpass.set_vertex_buffer(0, self.cloud_buffer.slice(..));
            rpass.draw(0..6, 0..self.cloud_count);
        }
    }
}

fn create_cloud_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("cloud_instances"),
        size: (capacity * std::mem::size_of::<CloudInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

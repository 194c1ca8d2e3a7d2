use dream_core::scene::{CloudDrift, CloudPuff, Star, StarfieldRotation};
use dream_core::{Camera, Theme};
use web_sys as web;

mod helpers;
mod post;
mod sky;
mod sprites;
mod targets;

use post::PostResources;
use sky::SkyResources;
use sprites::{SpriteResources, SpriteUniforms};
use targets::RenderTargets;

/// Per-frame inputs that are not owned by the GPU state.
pub struct SceneFrame<'f> {
    pub time_sec: f32,
    pub hue_deg: f32,
    pub rotation: StarfieldRotation,
    pub clouds: &'f [CloudDrift],
    pub puffs: &'f [Vec<CloudPuff>],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    post: PostResources,
    sky: SkyResources,
    sprites: SpriteResources,
    camera: Camera,
    cloud_tint: [f32; 3],
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        stars: &[Star],
        cloud_capacity: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let post = PostResources::new(&device, &queue, format, &targets);
        let sky = SkyResources::new(&device);
        let sprites = SpriteResources::new(&device, stars, cloud_capacity);
        let mut camera = Camera::sky(1.0);
        camera.set_viewport(width, height);

        log::info!("[gpu] ready {}x{} {:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            post,
            sky,
            sprites,
            camera,
            cloud_tint: [1.0, 1.0, 1.0],
            width,
            height,
        })
    }

    /// Push a theme's gradient and cloud tint. Invalid colours leave the
    /// previous values in place.
    pub fn set_theme(&mut self, theme: &Theme) {
        match theme.gradient() {
            Ok(stops) => self.sky.set_gradient(stops),
            Err(e) => log::error!("[gpu] theme {}: {}", theme.name, e),
        }
        match theme.tint() {
            Ok(tint) => self.cloud_tint = tint.to_linear(),
            Err(e) => log::error!("[gpu] theme {}: {}", theme.name, e),
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera.set_viewport(width, height);

            self.targets = RenderTargets::new(&self.device, width, height);
            self.post.rebind(&self.device, &self.targets);
        }
    }

    /// After a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &SceneFrame<'_>) -> Result<(), wgpu::SurfaceError> {
        self.sky.set_hue(scene.hue_deg);
        let clouds =
            sprites::cloud_instances(scene.clouds, scene.puffs, scene.time_sec, self.cloud_tint);
        self.sprites.set_clouds(&self.device, &self.queue, &clouds);
        let mut uniforms = SpriteUniforms::new(
            self.camera.view_matrix(),
            self.camera.projection_matrix(),
            scene.rotation.matrix(),
        );
        uniforms.viewport = [self.width as f32, self.height as f32];
        uniforms.time = scene.time_sec;
        self.sprites.write_uniforms(&self.queue, &uniforms);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
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
            self.sky.draw(&self.queue, &mut rpass);
            self.sprites.draw(&mut rpass);
        }
        self.post.encode(&mut encoder, &self.targets, &view);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

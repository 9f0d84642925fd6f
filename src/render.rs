use crate::constants::{
    AMBIENT_LIGHT, BACKGROUND_HEX, BOUNCE_LIGHT, BOUNCE_LIGHT_RANGE, FILL_LIGHT, KEY_LIGHT,
    RIM_LIGHT, TONE_EXPOSURE,
};
use crate::core::{Camera, MeshData, ModelTransform};
use glam::{Mat3, Mat4, Vec3};
use web_sys as web;

mod helpers;
mod mesh;
mod post;
mod targets;
use helpers::srgb_hex_to_linear;
use mesh::{DirLightPacked, MeshBuffers, MeshResources, MeshUniforms, PointLightPacked};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    mesh: MeshResources,
    model: Option<MeshBuffers>,
    post: post::PostResources,
    bg_hdr: wgpu::BindGroup,
    width: u32,
    height: u32,
    background: [f32; 3],
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
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
        let mesh = mesh::create_mesh_resources(&device);
        let post = post::create_post_resources(&device, format);
        let bg_hdr = post::hdr_bind_group(&device, &post, &targets.hdr_view);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            mesh,
            model: None,
            post,
            bg_hdr,
            width,
            height,
            background: srgb_hex_to_linear(BACKGROUND_HEX),
        })
    }

    /// Upload the decoded model, replacing any previous one.
    pub fn upload_mesh(&mut self, mesh: &MeshData) {
        self.model = Some(mesh::upload(&self.device, mesh));
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
            self.targets.recreate(&self.device, width, height);
            self.bg_hdr = post::hdr_bind_group(&self.device, &self.post, &self.targets.hdr_view);
        }
    }

    /// Draw one frame. Without a placed model only the background is shown.
    pub fn render(
        &mut self,
        camera: &Camera,
        model: Option<&ModelTransform>,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        if let Some(transform) = model {
            let u = scene_uniforms(camera, transform.matrix());
            self.queue
                .write_buffer(&self.mesh.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        // Pass 1: lit model -> HDR. Transparent clear marks uncovered pixels.
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let (Some(buffers), Some(_)) = (&self.model, model) {
                rpass.set_pipeline(&self.mesh.pipeline);
                rpass.set_bind_group(0, &self.mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));
                rpass.set_index_buffer(buffers.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..buffers.index_count, 0, 0..1);
            }
        }

        // Pass 2: tone map + background -> swapchain
        post::write_post_uniforms(
            &self.queue,
            &self.post.uniform_buffer,
            self.background,
            TONE_EXPOSURE,
            [self.width as f32, self.height as f32],
        );
        let [r, g, b] = self.background;
        post::blit(
            &mut encoder,
            "tonemap",
            &view,
            wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
            &self.post.tonemap_pipeline,
            &self.bg_hdr,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn linear_color(hex: u32, intensity: f32) -> [f32; 4] {
    let [r, g, b] = srgb_hex_to_linear(hex);
    [r * intensity, g * intensity, b * intensity, 1.0]
}

fn directional((hex, intensity, position): (u32, f32, [f32; 3])) -> DirLightPacked {
    // Directional lights aim at the origin, so the light direction is the position.
    let dir = Vec3::from(position).normalize_or_zero();
    DirLightPacked {
        direction: dir.extend(0.0).to_array(),
        color: linear_color(hex, intensity),
    }
}

fn scene_uniforms(camera: &Camera, model: Mat4) -> MeshUniforms {
    let normal_mat = Mat4::from_mat3(Mat3::from_mat4(model).inverse().transpose());
    let (bounce_hex, bounce_intensity, bounce_pos) = BOUNCE_LIGHT;
    MeshUniforms {
        view_proj: camera.view_proj().to_cols_array_2d(),
        model: model.to_cols_array_2d(),
        normal_mat: normal_mat.to_cols_array_2d(),
        eye: camera.eye.extend(1.0).to_array(),
        ambient: linear_color(AMBIENT_LIGHT.0, AMBIENT_LIGHT.1),
        dir_lights: [
            directional(KEY_LIGHT),
            directional(FILL_LIGHT),
            directional(RIM_LIGHT),
        ],
        point: PointLightPacked {
            position: Vec3::from(bounce_pos).extend(BOUNCE_LIGHT_RANGE).to_array(),
            color: linear_color(bounce_hex, bounce_intensity),
        },
    }
}

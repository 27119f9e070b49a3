use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::canvas::Canvas;
use crate::coords::{Size, Viewport};

use super::{Gpu, SurfaceErrorAction};

// ── quad ──────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── canvas texture ────────────────────────────────────────────────────────

struct CanvasTexture {
    size: Size,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

// ── presenter ─────────────────────────────────────────────────────────────

/// Uploads the canvas each frame and draws it into the letterboxed viewport.
///
/// The area outside the viewport is cleared to black. Sampling is nearest so
/// every canvas pixel becomes a crisp `scale × scale` block.
pub struct CanvasPresenter {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
    texture: Option<CanvasTexture>,
}

impl CanvasPresenter {
    pub fn new(gpu: &Gpu<'_>) -> Self {
        let device = gpu.device();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("pixel present shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/present.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("pixel present bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pixel present pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pixel present pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.surface_format(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("pixel present sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let quad_vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pixel present quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let quad_ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pixel present quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            pipeline,
            bind_group_layout,
            sampler,
            quad_vbo,
            quad_ibo,
            texture: None,
        }
    }

    /// Uploads `canvas`, draws it into `viewport` and presents the frame.
    ///
    /// Surface acquisition failures are mapped through
    /// [`Gpu::handle_surface_error`]; the caller decides whether to continue.
    pub fn present(
        &mut self,
        gpu: &mut Gpu<'_>,
        canvas: &Canvas,
        viewport: &Viewport,
    ) -> Result<(), SurfaceErrorAction> {
        let mut frame = match gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => return Err(gpu.handle_surface_error(err)),
        };

        self.upload(gpu, canvas);

        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("pixel present pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            let surface = gpu.size();
            let rect = viewport_rect(viewport, Size::new(surface.width, surface.height));
            if let (Some((x, y, w, h)), Some(tex)) = (rect, self.texture.as_ref()) {
                rpass.set_viewport(x, y, w, h, 0.0, 1.0);
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &tex.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));
                rpass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
            }
        }

        gpu.submit(frame);
        Ok(())
    }

    fn upload(&mut self, gpu: &Gpu<'_>, canvas: &Canvas) {
        let size = canvas.size();
        if size.is_empty() {
            self.texture = None;
            return;
        }

        if self.texture.as_ref().is_none_or(|t| t.size != size) {
            self.texture = Some(self.create_texture(gpu.device(), size));
        }
        let Some(tex) = self.texture.as_ref() else { return };

        gpu.queue().write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &tex.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            canvas.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * size.width),
                rows_per_image: Some(size.height),
            },
            wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
        );
    }

    fn create_texture(&self, device: &wgpu::Device, size: Size) -> CanvasTexture {
        log::debug!("canvas texture {}x{}", size.width, size.height);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("pixel canvas texture"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("pixel present bind group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        CanvasTexture {
            size,
            texture,
            bind_group,
        }
    }
}

/// Render-pass viewport `(x, y, w, h)` for the letterbox, clamped to the surface.
///
/// Returns `None` when nothing of the canvas would be visible.
fn viewport_rect(viewport: &Viewport, surface: Size) -> Option<(f32, f32, f32, f32)> {
    if !viewport.is_visible() || surface.is_empty() {
        return None;
    }

    let origin = viewport.origin();
    let extent = viewport.extent();

    let x = (origin.x.max(0) as u32).min(surface.width);
    let y = (origin.y.max(0) as u32).min(surface.height);
    let w = extent.width.min(surface.width - x);
    let h = extent.height.min(surface.height - y);

    if w == 0 || h == 0 {
        None
    } else {
        Some((x as f32, y as f32, w as f32, h as f32))
    }
}

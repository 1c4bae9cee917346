use bytemuck::Zeroable;

use super::init::*;
use super::mesh::SphereMesh;
use super::pass::render_sphere_pass;
use super::uniforms::{Globals, InstanceRaw};
use crate::error::RenderError;
use crate::scene::{DrawInstance, SceneSpec, SceneState};

/// Intermediate struct for GPU resources during initialization
struct GpuResources {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
}

/// Intermediate struct for draw resources during initialization
struct DrawResources {
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    depth_view: wgpu::TextureView,
}

/// Initial instance capacity; grows on demand
const INITIAL_INSTANCE_CAPACITY: usize = 8;

/// Renders one decorative scene into its own canvas
pub struct SceneRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    depth_view: wgpu::TextureView,
}

impl SceneRenderer {
    /// Create a renderer bound to `canvas`
    pub async fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, RenderError> {
        let (instance, surface, width, height) = Self::create_surface(canvas)?;
        let gpu = Self::setup_gpu(&instance, &surface, width, height).await?;
        let resources = Self::setup_draw_resources(&gpu, width, height);

        tracing::debug!(
            width,
            height,
            format = ?gpu.surface_config.format,
            "ornament renderer ready"
        );

        Ok(Self::assemble(surface, gpu, resources))
    }

    /// Create the wgpu instance and surface from canvas
    #[cfg(target_arch = "wasm32")]
    fn create_surface(
        canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>, u32, u32), RenderError> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| RenderError::Surface(e.to_string()))?;

        Ok((instance, surface, width, height))
    }

    /// Create the wgpu instance and surface from canvas (non-WASM stub)
    #[cfg(not(target_arch = "wasm32"))]
    fn create_surface(
        _canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>, u32, u32), RenderError> {
        Err(RenderError::UnsupportedTarget)
    }

    /// Setup GPU device, queue, and surface configuration
    async fn setup_gpu(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'static>,
        width: u32,
        height: u32,
    ) -> Result<GpuResources, RenderError> {
        let (device, queue, adapter) = create_device(instance, surface).await?;
        let surface_config = configure_surface(surface, &adapter, &device, width, height)?;

        Ok(GpuResources {
            device,
            queue,
            surface_config,
        })
    }

    /// Setup the pipeline, mesh and per-frame buffers
    fn setup_draw_resources(gpu: &GpuResources, width: u32, height: u32) -> DrawResources {
        let (globals_buffer, globals_layout, globals_bind_group) =
            create_globals_resources(&gpu.device, &Globals::zeroed());
        let pipeline =
            create_sphere_pipeline(&gpu.device, &globals_layout, gpu.surface_config.format);

        let mesh = SphereMesh::standard();
        let (vertex_buffer, index_buffer) = create_mesh_buffers(&gpu.device, &mesh);

        DrawResources {
            globals_buffer,
            globals_bind_group,
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            instance_buffer: create_instance_buffer(&gpu.device, INITIAL_INSTANCE_CAPACITY),
            depth_view: create_depth_view(&gpu.device, width, height),
        }
    }

    /// Assemble the final renderer from surface, GPU and draw resources
    fn assemble(surface: wgpu::Surface<'static>, gpu: GpuResources, resources: DrawResources) -> Self {
        Self {
            device: gpu.device,
            queue: gpu.queue,
            surface,
            surface_config: gpu.surface_config,
            globals_buffer: resources.globals_buffer,
            globals_bind_group: resources.globals_bind_group,
            pipeline: resources.pipeline,
            vertex_buffer: resources.vertex_buffer,
            index_buffer: resources.index_buffer,
            index_count: resources.index_count,
            instance_buffer: resources.instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
            depth_view: resources.depth_view,
        }
    }

    /// Current surface size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// Resize the renderer
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if (width, height) == self.size() {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        self.depth_view = create_depth_view(&self.device, width, height);
    }

    /// Render one frame of `scene`
    pub fn render(&mut self, scene: &SceneState) -> Result<(), RenderError> {
        self.draw(scene.spec(), &scene.instances())
    }

    /// Render `scene` with every sphere at its rest position
    pub fn render_at_rest(&mut self, scene: &SceneState) -> Result<(), RenderError> {
        self.draw(scene.spec(), &scene.resting_instances())
    }

    fn draw(&mut self, spec: &SceneSpec, instances: &[DrawInstance]) -> Result<(), RenderError> {
        let (width, height) = self.size();
        let aspect = width as f32 / height as f32;

        let globals = Globals::new(spec, aspect);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::cast_slice(&[globals]));

        let instances: Vec<InstanceRaw> = instances.iter().map(InstanceRaw::from).collect();
        self.ensure_instance_capacity(instances.len());
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let output = self.get_surface_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Ornament Encoder"),
            });

        render_sphere_pass(
            &mut encoder,
            &self.pipeline,
            &self.globals_bind_group,
            &self.vertex_buffer,
            &self.index_buffer,
            self.index_count,
            &self.instance_buffer,
            instances.len() as u32,
            &view,
            &self.depth_view,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Grow the instance buffer to hold at least `count` instances
    fn ensure_instance_capacity(&mut self, count: usize) {
        if count <= self.instance_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        tracing::debug!(from = self.instance_capacity, to = capacity, "growing instance buffer");
        self.instance_buffer = create_instance_buffer(&self.device, capacity);
        self.instance_capacity = capacity;
    }

    /// Get surface texture with error handling
    fn get_surface_texture(&mut self) -> Result<wgpu::SurfaceTexture, RenderError> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                Err(RenderError::FrameSkipped)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(RenderError::OutOfMemory),
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("surface timeout, skipping frame");
                Err(RenderError::FrameSkipped)
            }
        }
    }
}

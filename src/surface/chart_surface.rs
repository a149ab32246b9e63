use {
    crate::{
        config::DF,
        domain::TimeRange,
        registry::SeriesRegistry,
        surface::{ChartBackend, SurfaceSize, VisualSeries},
    },
    anyhow::Result,
    std::{error::Error, fmt},
    strum_macros::Display,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SurfacePhase {
    Unmounted,
    Mounted,
    Destroyed,
}

#[derive(Debug)]
pub enum SurfaceError {
    AlreadyMounted,
    Destroyed,
    InvalidSize { width: f32, height: f32 },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SurfaceError::AlreadyMounted => write!(f, "Chart surface is already mounted"),
            SurfaceError::Destroyed => {
                write!(f, "Chart surface was destroyed; build a new one instead")
            }
            SurfaceError::InvalidSize { width, height } => {
                write!(f, "Cannot mount chart surface at {}x{}", width, height)
            }
        }
    }
}

impl Error for SurfaceError {}

struct MountedSurface<B> {
    backend: B,
    size: SurfaceSize,
    extent: Option<TimeRange>,
    generation: u64,
}

enum SurfaceState<B> {
    Unmounted,
    Mounted(MountedSurface<B>),
    Destroyed,
}

/// Owns the rendering target for one generation: Unmounted -> Mounted -> Destroyed.
///
/// Resizes are debounced: `request_resize` only records the latest size and
/// `on_idle_tick` (called once per frame, before layout) applies it and re-fits.
/// Several requests within one tick therefore produce a single re-fit.
pub struct ChartSurface<B: ChartBackend> {
    state: SurfaceState<B>,
    pending_resize: Option<SurfaceSize>,
}

impl<B: ChartBackend> Default for ChartSurface<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ChartBackend> ChartSurface<B> {
    pub fn new() -> Self {
        Self {
            state: SurfaceState::Unmounted,
            pending_resize: None,
        }
    }

    pub fn phase(&self) -> SurfacePhase {
        match self.state {
            SurfaceState::Unmounted => SurfacePhase::Unmounted,
            SurfaceState::Mounted(_) => SurfacePhase::Mounted,
            SurfaceState::Destroyed => SurfacePhase::Destroyed,
        }
    }

    /// Allocates the backend, materializes every registered series and fits the time range.
    pub fn mount(&mut self, registry: &SeriesRegistry, size: SurfaceSize) -> Result<()> {
        match self.state {
            SurfaceState::Unmounted => {}
            SurfaceState::Mounted(_) => return Err(SurfaceError::AlreadyMounted.into()),
            SurfaceState::Destroyed => return Err(SurfaceError::Destroyed.into()),
        }
        if !size.is_drawable() {
            return Err(SurfaceError::InvalidSize {
                width: size.width,
                height: size.height,
            }
            .into());
        }

        let mut backend = B::allocate(size)?;
        for (handle, data) in registry.iter() {
            backend.add_series(VisualSeries::from_handle(handle, data));
        }

        let extent = registry.time_extent();
        if let Some(range) = extent {
            backend.fit_time_range(range);
        }

        if DF.log_surface {
            log::info!(
                "Surface mounted: gen {}, {} series, {}x{}, extent {}",
                registry.generation(),
                registry.len(),
                size.width,
                size.height,
                extent.map_or("none".to_string(), |r| format!("{}..{}", r.start, r.end))
            );
        }

        self.state = SurfaceState::Mounted(MountedSurface {
            backend,
            size,
            extent,
            generation: registry.generation(),
        });
        Ok(())
    }

    /// Full teardown then a fresh mount. There is no update-in-place path.
    pub fn rebuild(&mut self, registry: &SeriesRegistry, size: SurfaceSize) -> Result<()> {
        self.destroy();
        *self = Self::new();
        self.mount(registry, size)
    }

    /// Records the new container size; applied on the next `on_idle_tick`. Last request wins.
    pub fn request_resize(&mut self, size: SurfaceSize) {
        let SurfaceState::Mounted(mounted) = &self.state else {
            return;
        };
        if !size.is_drawable() {
            return;
        }
        if self.pending_resize.is_none() && mounted.size == size {
            return;
        }
        self.pending_resize = Some(size);
    }

    pub fn has_pending_resize(&self) -> bool {
        self.pending_resize.is_some()
    }

    /// Applies the deferred resize, if any, and re-fits the time range.
    /// Returns whether a re-fit ran. A no-op once the surface is gone.
    pub fn on_idle_tick(&mut self) -> bool {
        let Some(size) = self.pending_resize.take() else {
            return false;
        };
        let SurfaceState::Mounted(mounted) = &mut self.state else {
            return false;
        };

        mounted.backend.apply_size(size);
        mounted.size = size;
        if let Some(range) = mounted.extent {
            mounted.backend.fit_time_range(range);
        }

        if DF.log_surface {
            log::debug!(
                "Surface gen {} resized to {}x{}",
                mounted.generation,
                size.width,
                size.height
            );
        }
        true
    }

    /// Releases the backend. Destroying twice is fine.
    pub fn destroy(&mut self) {
        self.pending_resize = None;
        let previous = std::mem::replace(&mut self.state, SurfaceState::Destroyed);
        if let SurfaceState::Mounted(mut mounted) = previous {
            mounted.backend.release();
            if DF.log_surface {
                log::info!("Surface gen {} destroyed", mounted.generation);
            }
        }
    }

    pub fn size(&self) -> Option<SurfaceSize> {
        match &self.state {
            SurfaceState::Mounted(mounted) => Some(mounted.size),
            _ => None,
        }
    }

    pub fn generation(&self) -> Option<u64> {
        match &self.state {
            SurfaceState::Mounted(mounted) => Some(mounted.generation),
            _ => None,
        }
    }

    pub fn backend(&self) -> Option<&B> {
        match &self.state {
            SurfaceState::Mounted(mounted) => Some(&mounted.backend),
            _ => None,
        }
    }

    pub fn backend_mut(&mut self) -> Option<&mut B> {
        match &mut self.state {
            SurfaceState::Mounted(mounted) => Some(&mut mounted.backend),
            _ => None,
        }
    }
}

impl<B: ChartBackend> Drop for ChartSurface<B> {
    fn drop(&mut self) {
        if let SurfaceState::Mounted(mounted) = &mut self.state {
            mounted.backend.release();
        }
    }
}

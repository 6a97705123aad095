use std::{collections::BTreeMap, fmt, sync::Arc};

/// Startup failure at the window/GPU boundary.
///
/// Rendered as `key(arg=value, ...)`; underlying library errors are kept as
/// causes and exposed through `source()`.
#[derive(Debug, Clone)]
pub struct VisError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<Arc<dyn std::error::Error>>,
}

impl VisError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + 'static) -> Self {
        self.causes.push(Arc::new(cause));
        self
    }
}

impl fmt::Display for VisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for VisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.first().map(|c| c.as_ref())
    }
}

impl From<winit::error::EventLoopError> for VisError {
    fn from(err: winit::error::EventLoopError) -> Self {
        VisError::new("winit::error::EventLoopError").push_std(err)
    }
}

impl From<winit::error::OsError> for VisError {
    fn from(err: winit::error::OsError) -> Self {
        VisError::new("winit::error::OsError").push_std(err)
    }
}

impl From<wgpu::CreateSurfaceError> for VisError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        VisError::new("wgpu::CreateSurfaceError").push_std(err)
    }
}

impl From<wgpu::RequestAdapterError> for VisError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        VisError::new("wgpu::RequestAdapterError").push_std(err)
    }
}

impl From<wgpu::RequestDeviceError> for VisError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        VisError::new("wgpu::RequestDeviceError").push_std(err)
    }
}

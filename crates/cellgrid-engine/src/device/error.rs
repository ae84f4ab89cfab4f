/// Reasons a canvas could not be turned into a device/surface pair.
///
/// All variants are fatal to the view that requested the acquisition only.
#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    /// No drawable canvas is registered under the requested id.
    #[error("no canvas registered under id `{0}`")]
    SurfaceNotFound(String),

    /// The runtime exposes no GPU capability usable with this canvas.
    #[error("GPU rendering is not supported here: {0}")]
    UnsupportedPlatform(String),

    /// An adapter exists but refused to hand out a logical device.
    #[error("failed to obtain a logical device: {0}")]
    DeviceUnavailable(#[from] wgpu::RequestDeviceError),
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_not_found_names_the_canvas() {
        let err = AcquireError::SurfaceNotFound("left-grid".into());
        assert_eq!(err.to_string(), "no canvas registered under id `left-grid`");
    }

    #[test]
    fn unsupported_platform_carries_reason() {
        let err = AcquireError::UnsupportedPlatform("no adapter".into());
        assert!(err.to_string().contains("no adapter"));
    }
}

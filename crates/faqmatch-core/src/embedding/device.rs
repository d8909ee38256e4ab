//! Compute device selection.

use candle_core::Device;
use tracing::debug;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::warn;

/// Picks the device for the embedding forward pass.
///
/// GPU backends are opt-in cargo features; a backend that fails to
/// initialize is logged and passed over. CPU is always available and is
/// plenty for single-question MiniLM inference, so selection cannot fail.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            debug!("Embedding on Metal");
            return device;
        }
        Err(e) => warn!(error = %e, "Metal unavailable, falling through"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            debug!("Embedding on CUDA");
            return device;
        }
        Err(e) => warn!(error = %e, "CUDA unavailable, falling through"),
    }

    debug!("Embedding on CPU");
    Device::Cpu
}

//! Compute backend selection
//!
//! `Parallel` spreads one dispatch over the rayon pool, `Serial` walks the
//! same work units in order, `Inert` is the degraded mode used when the host
//! cannot run dispatches at all: nothing advances and nothing is painted.
//! Parallel and serial dispatch produce identical buffers.

use log::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComputeBackend {
    Parallel,
    Serial,
    Inert,
}

impl ComputeBackend {
    /// Best backend this build supports.
    pub fn detect() -> Self {
        if cfg!(feature = "parallel") {
            ComputeBackend::Parallel
        } else {
            ComputeBackend::Serial
        }
    }

    /// Backend to fall back to after the host reports missing compute support.
    pub fn degrade(reason: &str) -> Self {
        warn!("compute dispatch unavailable ({}), simulation is inert", reason);
        ComputeBackend::Inert
    }

    #[inline]
    pub fn is_inert(self) -> bool {
        self == ComputeBackend::Inert
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "parallel" => Some(ComputeBackend::Parallel),
            "serial" => Some(ComputeBackend::Serial),
            "inert" => Some(ComputeBackend::Inert),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ComputeBackend::Parallel => "parallel",
            ComputeBackend::Serial => "serial",
            ComputeBackend::Inert => "inert",
        }
    }
}

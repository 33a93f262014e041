//! Facade that dispatches platform calls to the real or fake implementation.

use chrono::{DateTime, Utc};

use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Dispatches platform calls to either the real system clock or a
/// test-controlled fake.
#[derive(Clone, Debug)]
pub(crate) enum PlatformFacade {
    Real(RealPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform)
    }

    #[cfg(test)]
    pub(crate) fn fake(platform: FakePlatform) -> Self {
        Self::Fake(platform)
    }
}

impl Platform for PlatformFacade {
    fn now_utc(&self) -> DateTime<Utc> {
        match self {
            Self::Real(platform) => platform.now_utc(),
            #[cfg(test)]
            Self::Fake(platform) => platform.now_utc(),
        }
    }
}

//! Device capability classification. Computed once at mount; every numeric
//! budget elsewhere derives from the resulting tier and never changes for
//! the lifetime of the instance.

/// Capability tier, fixed per instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityTier {
    /// Mobile user agents and low-core machines.
    Constrained,
    Full,
}

/// User-agent fragments that mark a device as mobile.
const MOBILE_UA_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Classify a device from its user-agent string and logical core count.
pub fn classify(user_agent: &str, logical_cores: u32) -> QualityTier {
    let ua = user_agent.to_ascii_lowercase();
    let mobile = MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker));
    if mobile || logical_cores <= 4 {
        QualityTier::Constrained
    } else {
        QualityTier::Full
    }
}

/// Numeric budgets derived from a tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityLimits {
    pub tier: QualityTier,
    /// Upper bound applied to `window.devicePixelRatio`.
    pub max_pixel_ratio: f32,
    /// Cap on orbiting spheres in the blend tree.
    pub sphere_cap: u32,
    /// Sphere-tracing step budget.
    pub march_steps: u32,
    /// Reduced numeric precision requested for the shader stage.
    pub reduced_precision: bool,
    /// 4x multisampling when set.
    pub antialias: bool,
    /// Ask the adapter for the high-performance GPU.
    pub high_performance: bool,
}

impl QualityTier {
    pub fn limits(self) -> QualityLimits {
        match self {
            QualityTier::Constrained => QualityLimits {
                tier: self,
                max_pixel_ratio: 1.5,
                sphere_cap: 5,
                march_steps: 24,
                reduced_precision: true,
                antialias: false,
                high_performance: false,
            },
            QualityTier::Full => QualityLimits {
                tier: self,
                max_pixel_ratio: 2.0,
                sphere_cap: 8,
                march_steps: 48,
                reduced_precision: false,
                antialias: true,
                high_performance: true,
            },
        }
    }
}

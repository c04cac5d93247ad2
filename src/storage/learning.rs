//! Learning resources

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Learning resource identifier
pub type ResourceId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Course,
    Tutorial,
    Guide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceStatus {
    Completed,
    InProgress,
    Locked,
}

/// Course, tutorial or guide with completion progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub status: ResourceStatus,
    /// Percent complete, 0..=100
    pub progress: u8,
    pub icon: String,
}

/// Insert payload for a learning resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLearningResource {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub status: ResourceStatus,
    #[serde(default)]
    pub progress: u8,
    pub icon: String,
}

impl LearningResource {
    pub fn new(id: ResourceId, resource: NewLearningResource) -> Self {
        Self {
            id,
            title: resource.title,
            description: resource.description,
            kind: resource.kind,
            status: resource.status,
            progress: resource.progress,
            icon: resource.icon,
        }
    }

    /// Set progress; 100 completes the resource, anything above 0 starts it
    pub fn apply_progress(&mut self, progress: u8) {
        if progress == 100 {
            self.status = ResourceStatus::Completed;
        } else if progress > 0 {
            self.status = ResourceStatus::InProgress;
        }
        self.progress = progress;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LearningError {
    #[error("invalid progress value {0}, expected 0..=100")]
    InvalidProgress(i64),
}

/// Validate a raw progress value
pub fn check_progress(value: i64) -> Result<u8, LearningError> {
    match u8::try_from(value) {
        Ok(p) if p <= 100 => Ok(p),
        _ => Err(LearningError::InvalidProgress(value)),
    }
}

/// Resources every fresh store starts with
pub fn default_resources() -> Vec<NewLearningResource> {
    let resource = |title: &str, description: &str, kind, status, progress, icon: &str| {
        NewLearningResource {
            title: title.to_string(),
            description: description.to_string(),
            kind,
            status,
            progress,
            icon: icon.to_string(),
        }
    };

    vec![
        resource(
            "HFT Fundamentals",
            "Learn the basics of high-frequency trading and key strategies.",
            ResourceKind::Course,
            ResourceStatus::Completed,
            100,
            "graduation-cap",
        ),
        resource(
            "Arbitrage Strategies",
            "Discover how to identify and execute arbitrage opportunities.",
            ResourceKind::Course,
            ResourceStatus::Completed,
            100,
            "exchange-alt",
        ),
        resource(
            "Building with SEI",
            "Learn how to leverage SEI blockchain for HFT strategies.",
            ResourceKind::Course,
            ResourceStatus::InProgress,
            65,
            "robot",
        ),
        resource(
            "Advanced Technical Analysis",
            "Master technical indicators for better trading decisions.",
            ResourceKind::Tutorial,
            ResourceStatus::Locked,
            0,
            "chart-area",
        ),
        resource(
            "AI in Algorithmic Trading",
            "Explore AI and ML applications in trading strategies.",
            ResourceKind::Guide,
            ResourceStatus::Locked,
            0,
            "brain",
        ),
    ]
}

//! Health classification
//!
//! Every row type maps its status label onto the same tri-state [`Health`]
//! through [`classify`]; consumers only ever color by `Health`.

use crate::aggregate::replicas::NO_REPLICAS;
use std::fmt;

/// Ordered from best to worst, so `max` picks the stricter of two
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Health {
    Nominal,
    Pending,
    Attention,
}

impl Health {
    pub fn as_str(&self) -> &'static str {
        match self {
            Health::Nominal => "nominal",
            Health::Pending => "pending",
            Health::Attention => "attention",
        }
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which vocabulary a status label comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthScheme {
    /// Reason of an application's Provisioned condition
    Provisioning,
    /// Cluster provisioning / runtime state
    ClusterState,
    /// `manifestState` of a ManifestWork
    ManifestWork,
    /// `available/desired` replica fraction
    Replicas,
    /// Replica fraction of a reported workload; `-` for kinds without replicas
    Workload,
    /// `status` of a Ready condition
    Ready,
}

pub const APPLICATION_PROVISIONED: &str = "ApplicationProvisioned";

/// Map a status label to a health state; absent labels are never nominal
pub fn classify(scheme: HealthScheme, label: Option<&str>) -> Health {
    let Some(label) = label else {
        return match scheme {
            HealthScheme::Replicas | HealthScheme::Workload | HealthScheme::Ready => {
                Health::Pending
            }
            _ => Health::Attention,
        };
    };

    match scheme {
        HealthScheme::Provisioning => match label {
            APPLICATION_PROVISIONED => Health::Nominal,
            _ => Health::Attention,
        },
        HealthScheme::ClusterState => match label {
            "Ready" | "completed" => Health::Nominal,
            "Provisioning" => Health::Pending,
            _ => Health::Attention,
        },
        HealthScheme::ManifestWork => match label {
            "Available" => Health::Nominal,
            "Progressing" | "Applied" => Health::Pending,
            _ => Health::Attention,
        },
        HealthScheme::Replicas => classify_fraction(label),
        HealthScheme::Workload => match label {
            NO_REPLICAS => Health::Nominal,
            _ => classify_fraction(label),
        },
        HealthScheme::Ready => match label {
            "True" => Health::Nominal,
            "False" => Health::Attention,
            _ => Health::Pending,
        },
    }
}

fn classify_fraction(label: &str) -> Health {
    let Some((available, desired)) = label.split_once('/') else {
        return Health::Pending;
    };
    match (available.parse::<f64>(), desired.parse::<f64>()) {
        (Ok(available), Ok(desired)) if available >= desired => Health::Nominal,
        (Ok(_), Ok(_)) => Health::Pending,
        _ => Health::Attention,
    }
}

//! Investment profile
//!
//! The user's declared risk tolerance and free-form goals. At most one
//! profile is active; setting a new one replaces it entirely. The profile
//! is owned by the storage layer and handed to the advisor as context,
//! never read from a global.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FinsightError, FinsightResult};

/// Willingness to accept investment volatility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    /// Parse from user input; anything outside low/medium/high is
    /// `InvalidRiskTolerance`
    pub fn parse(s: &str) -> FinsightResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(FinsightError::InvalidRiskTolerance(other.to_string())),
        }
    }

    pub const fn all() -> [RiskTolerance; 3] {
        [Self::Low, Self::Medium, Self::High]
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskTolerance {
    type Err = FinsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The active investment profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProfile {
    pub risk_tolerance: RiskTolerance,

    /// Free-form goals ("retirement", "short_term", ...)
    #[serde(default)]
    pub goals: String,
}

impl InvestmentProfile {
    pub fn new(risk_tolerance: RiskTolerance, goals: impl Into<String>) -> Self {
        Self {
            risk_tolerance,
            goals: goals.into(),
        }
    }

    /// Canned guidance for known goal keywords, shown by `profile show`
    pub fn goal_guidance(&self) -> Option<&'static str> {
        match self.goals.trim().to_ascii_lowercase().as_str() {
            "retirement" => {
                Some("For retirement, consider tax-advantaged accounts like 401(k)s or IRAs.")
            }
            "short_term" | "short-term" => {
                Some("For short-term goals, focus on liquid and low-risk investments.")
            }
            _ => None,
        }
    }
}

impl fmt::Display for InvestmentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.goals.is_empty() {
            write!(f, "risk: {}", self.risk_tolerance)
        } else {
            write!(f, "risk: {}, goals: {}", self.risk_tolerance, self.goals)
        }
    }
}

//! Investment profile service
//!
//! Manages the single stored investment profile.

use crate::audit::EntityType;
use crate::error::FinsightResult;
use crate::models::{InvestmentProfile, RiskTolerance};
use crate::storage::Storage;

/// Service for investment profile management
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set or replace the investment profile
    pub fn set_profile(
        &self,
        risk_tolerance: RiskTolerance,
        goals: &str,
    ) -> FinsightResult<InvestmentProfile> {
        let profile = InvestmentProfile {
            risk_tolerance,
            goals: goals.trim().to_string(),
        };

        let previous = self.storage.profile.set(profile.clone())?;
        self.storage.profile.save()?;

        match previous {
            None => {
                self.storage
                    .log_create(EntityType::Profile, "profile", None, &profile)?;
            }
            Some(old) => {
                self.storage.log_update(
                    EntityType::Profile,
                    "profile",
                    None,
                    &old,
                    &profile,
                    Some(format!(
                        "risk: {} -> {}",
                        old.risk_tolerance, profile.risk_tolerance
                    )),
                )?;
            }
        }

        Ok(profile)
    }

    /// The current profile, if one has been set
    pub fn current(&self) -> FinsightResult<Option<InvestmentProfile>> {
        self.storage.profile.get()
    }
}

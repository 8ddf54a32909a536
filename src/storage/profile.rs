//! Investment profile repository for JSON storage
//!
//! At most one profile exists; setting a new one replaces it whole.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FinsightError, FinsightResult};
use crate::models::InvestmentProfile;

use super::file_io::{read_json, write_json_atomic};

/// Serializable profile data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ProfileData {
    profile: Option<InvestmentProfile>,
}

/// Repository for the (at most one) investment profile
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<Option<InvestmentProfile>>,
}

impl ProfileRepository {
    /// Create a new profile repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    /// Load the profile from disk
    pub fn load(&self) -> FinsightResult<()> {
        let loaded: ProfileData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = loaded.profile;

        Ok(())
    }

    /// Save the profile to disk
    pub fn save(&self) -> FinsightResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(
            &self.path,
            &ProfileData {
                profile: data.clone(),
            },
        )
    }

    /// Replace the profile, returning the previous one
    pub fn set(&self, profile: InvestmentProfile) -> FinsightResult<Option<InvestmentProfile>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.replace(profile))
    }

    /// The current profile, if one has been set
    pub fn get(&self) -> FinsightResult<Option<InvestmentProfile>> {
        let data = self
            .data
            .read()
            .map_err(|e| FinsightError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskTolerance;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ProfileRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        let repo = ProfileRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_profile(risk: RiskTolerance) -> InvestmentProfile {
        InvestmentProfile {
            risk_tolerance: risk,
            goals: "retirement".to_string(),
        }
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.get().unwrap().is_none());
    }

    #[test]
    fn test_set_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let previous = repo.set(sample_profile(RiskTolerance::Medium)).unwrap();
        assert!(previous.is_none());

        let current = repo.get().unwrap().unwrap();
        assert_eq!(current.risk_tolerance, RiskTolerance::Medium);
    }

    #[test]
    fn test_replace_returns_previous() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.set(sample_profile(RiskTolerance::Low)).unwrap();
        let previous = repo.set(sample_profile(RiskTolerance::High)).unwrap();

        assert_eq!(previous.unwrap().risk_tolerance, RiskTolerance::Low);
        assert_eq!(
            repo.get().unwrap().unwrap().risk_tolerance,
            RiskTolerance::High
        );
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.set(sample_profile(RiskTolerance::High)).unwrap();
        repo.save().unwrap();

        let repo2 = ProfileRepository::new(temp_dir.path().join("profile.json"));
        repo2.load().unwrap();

        let loaded = repo2.get().unwrap().unwrap();
        assert_eq!(loaded.risk_tolerance, RiskTolerance::High);
        assert_eq!(loaded.goals, "retirement");
    }

    #[test]
    fn test_save_without_profile() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.save().unwrap();

        let repo2 = ProfileRepository::new(temp_dir.path().join("profile.json"));
        repo2.load().unwrap();
        assert!(repo2.get().unwrap().is_none());
    }
}

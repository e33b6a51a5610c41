//! Read-only registry of component profiles.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::builtin_profiles;
use crate::error::{ProfileError, ProfileResult};
use crate::types::{
    ComponentProfile, ComponentType, FailureModeEstimate, MaintenanceDue,
};

/// Immutable lookup of [`ComponentProfile`]s by component type.
///
/// Built once and passed to the engines by reference; there is no
/// process-wide catalog.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<ComponentType, ComponentProfile>,
}

impl ProfileRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry loaded with the shipped OEM catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for profile in builtin_profiles() {
            // The shipped catalog is covered by tests; skip rather than panic.
            if let Err(e) = registry.insert(profile) {
                debug!(error = %e, "Skipping invalid builtin profile");
            }
        }
        registry
    }

    /// Build a registry from caller-supplied profiles.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = ComponentProfile>,
    ) -> ProfileResult<Self> {
        let mut registry = Self::new();
        for profile in profiles {
            registry.insert(profile)?;
        }
        Ok(registry)
    }

    /// Register a profile, replacing any existing profile for the same type.
    pub fn insert(&mut self, profile: ComponentProfile) -> ProfileResult<()> {
        profile.validate()?;
        debug!(
            component_type = %profile.component_type,
            points = profile.wear_curve.len(),
            "Registered component profile"
        );
        self.profiles.insert(profile.component_type, profile);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Registered component types, in catalog order.
    pub fn component_types(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.profiles.keys().copied()
    }

    /// Look up the profile for a component type.
    pub fn get_profile(&self, component_type: ComponentType) -> ProfileResult<&ComponentProfile> {
        self.profiles
            .get(&component_type)
            .ok_or_else(|| ProfileError::UnknownComponentType(component_type.to_string()))
    }

    /// Look up a profile by its wire tag.
    pub fn get_profile_by_tag(&self, tag: &str) -> ProfileResult<&ComponentProfile> {
        let component_type: ComponentType = tag.parse()?;
        self.get_profile(component_type)
    }

    /// Expected health percentage at the given age.
    pub fn wear_percentage(&self, component_type: ComponentType, age_years: f64) -> ProfileResult<f64> {
        Ok(self.get_profile(component_type)?.wear_percentage(age_years))
    }

    /// Next maintenance task due at the given age in months.
    pub fn next_maintenance_task(
        &self,
        component_type: ComponentType,
        age_months: f64,
    ) -> ProfileResult<Option<MaintenanceDue<'_>>> {
        Ok(self
            .get_profile(component_type)?
            .next_maintenance_task(age_months))
    }

    /// Most likely failure mode under the given readings.
    pub fn most_likely_failure_mode(
        &self,
        component_type: ComponentType,
        moisture_ppm: Option<f64>,
        temperature_c: Option<f64>,
    ) -> ProfileResult<Option<FailureModeEstimate<'_>>> {
        Ok(self
            .get_profile(component_type)?
            .most_likely_failure_mode(moisture_ppm, temperature_c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WearPoint;

    #[test]
    fn builtin_has_every_type() {
        let registry = ProfileRegistry::builtin();
        assert_eq!(registry.len(), ComponentType::ALL.len());
        for ty in ComponentType::ALL {
            assert!(registry.get_profile(ty).is_ok());
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let registry = ProfileRegistry::builtin();
        let err = registry.get_profile_by_tag("flux_capacitor").unwrap_err();
        assert_eq!(err, ProfileError::UnknownComponentType("flux_capacitor".into()));
    }

    #[test]
    fn missing_profile_is_unknown() {
        let registry = ProfileRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.get_profile(ComponentType::Core),
            Err(ProfileError::UnknownComponentType(_))
        ));
        assert!(registry.wear_percentage(ComponentType::Core, 3.0).is_err());
    }

    #[test]
    fn fixture_substitution() {
        let mut profile = builtin_profiles().remove(0);
        profile.wear_curve = vec![WearPoint::new(0.0, 100.0), WearPoint::new(10.0, 0.0)];
        let registry = ProfileRegistry::from_profiles([profile]).unwrap();
        assert_eq!(registry.len(), 1);
        let health = registry.wear_percentage(ComponentType::Winding, 5.0).unwrap();
        assert!((health - 50.0).abs() < 1e-9);
    }

    #[test]
    fn from_profiles_rejects_invalid() {
        let mut profile = builtin_profiles().remove(0);
        profile.wear_curve.clear();
        assert!(ProfileRegistry::from_profiles([profile]).is_err());
    }

    #[test]
    fn delegating_lookups() {
        let registry = ProfileRegistry::builtin();
        let due = registry
            .next_maintenance_task(ComponentType::CoolingSystem, 1.0)
            .unwrap()
            .unwrap();
        assert_eq!(due.task.task, "Fan and pump inspection");
        let mode = registry
            .most_likely_failure_mode(ComponentType::InsulationOil, Some(29.0), None)
            .unwrap()
            .unwrap();
        assert_eq!(mode.mode.mode, "Moisture contamination");
    }
}

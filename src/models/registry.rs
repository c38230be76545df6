//! Read-only material and contaminant registries
//!
//! A [`Registry`] is assembled once and never mutated afterwards: there is no
//! insertion method. Models share it behind an `Arc`, so concurrent readers
//! need no locking.
//!
//! # Example
//!
//! ```rust
//! use adsorb_rs::models::Registry;
//!
//! let registry = Registry::builtin();
//! assert_eq!(registry.material_ids().len(), 5);
//! assert_eq!(registry.contaminant_ids().len(), 4);
//! assert!(registry.material("zeolite").is_some());
//! assert!(registry.material("graphene").is_none());
//! ```

use std::collections::HashMap;

use crate::error::{AdsorbError, Result};
use crate::models::contaminant::{builtin_contaminants, ContaminantProfile};
use crate::models::material::{builtin_materials, MaterialProfile};

/// Immutable lookup tables keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct Registry {
    materials: HashMap<String, MaterialProfile>,
    contaminants: HashMap<String, ContaminantProfile>,
}

impl Registry {
    /// Registry holding the built-in catalogue (5 materials, 4 contaminants)
    pub fn builtin() -> Self {
        let materials: HashMap<_, _> = builtin_materials()
            .into_iter()
            .map(|profile| (profile.id.clone(), profile))
            .collect();
        let contaminants: HashMap<_, _> = builtin_contaminants()
            .into_iter()
            .map(|profile| (profile.id.clone(), profile))
            .collect();

        debug_assert_eq!(materials.len(), 5, "duplicate built-in material id");
        debug_assert_eq!(contaminants.len(), 4, "duplicate built-in contaminant id");

        Self { materials, contaminants }
    }

    /// Build a custom registry
    ///
    /// # Errors
    ///
    /// - [`AdsorbError::DuplicateId`] when two profiles of the same kind share an id
    /// - [`AdsorbError::InvalidProfile`] when a profile fails validation
    pub fn from_profiles(
        materials: Vec<MaterialProfile>,
        contaminants: Vec<ContaminantProfile>,
    ) -> Result<Self> {
        let mut registry = Self::default();

        for profile in materials {
            profile.validate()?;
            if registry.materials.contains_key(&profile.id) {
                return Err(AdsorbError::DuplicateId(profile.id));
            }
            registry.materials.insert(profile.id.clone(), profile);
        }

        for profile in contaminants {
            profile.validate()?;
            if registry.contaminants.contains_key(&profile.id) {
                return Err(AdsorbError::DuplicateId(profile.id));
            }
            registry.contaminants.insert(profile.id.clone(), profile);
        }

        Ok(registry)
    }

    /// Look up a material
    pub fn material(&self, id: &str) -> Option<&MaterialProfile> {
        self.materials.get(id)
    }

    /// Look up a contaminant
    pub fn contaminant(&self, id: &str) -> Option<&ContaminantProfile> {
        self.contaminants.get(id)
    }

    /// Look up a material, failing on unknown ids
    pub fn require_material(&self, id: &str) -> Result<&MaterialProfile> {
        self.material(id)
            .ok_or_else(|| AdsorbError::UnknownMaterial(id.to_string()))
    }

    /// Look up a contaminant, failing on unknown ids
    pub fn require_contaminant(&self, id: &str) -> Result<&ContaminantProfile> {
        self.contaminant(id)
            .ok_or_else(|| AdsorbError::UnknownContaminant(id.to_string()))
    }

    /// Sorted material identifiers
    pub fn material_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.materials.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Sorted contaminant identifiers
    pub fn contaminant_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.contaminants.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Resource domain models
//!
//! This module provides the Resource entity: a bounded inventory item that
//! projects check out through the allocation ledger. The `quantity` field is
//! the total inventory; how much is currently allocated is derived from the
//! ledger, never stored here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// A shared resource with a bounded inventory.
///
/// The `availability` flag is an administrative toggle, independent of how
/// much of the resource is currently allocated: an unavailable resource may
/// have zero allocations, and a fully-allocated resource may still be
/// administratively available.
///
/// # Examples
///
/// ```
/// use curie_domain::{Resource, ResourceKind, Availability};
///
/// let resource = Resource::new("Electron microscope", ResourceKind::Equipment, 2, "unit").unwrap();
/// assert_eq!(resource.quantity, 2);
/// assert_eq!(resource.availability, Availability::Available);
///
/// // Zero quantity is rejected
/// assert!(Resource::new("Nothing", ResourceKind::Other, 0, "unit").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique identifier for the resource
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// What kind of resource this is
    pub kind: ResourceKind,

    /// Total inventory quantity (always > 0)
    pub quantity: u32,

    /// Unit of measure ("unit", "hours", "licenses", ...)
    pub unit: String,

    /// Department that owns this resource (if scoped to one)
    pub department_id: Option<Uuid>,

    /// Administrative availability toggle
    pub availability: Availability,

    /// When the resource was created
    pub created_at: DateTime<Utc>,

    /// When the resource was last updated
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    /// Creates a new available resource.
    ///
    /// # Arguments
    ///
    /// * `name` - Resource name
    /// * `kind` - Resource kind
    /// * `quantity` - Total inventory (must be > 0)
    /// * `unit` - Unit of measure
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `quantity` is zero.
    pub fn new(
        name: impl Into<String>,
        kind: ResourceKind,
        quantity: u32,
        unit: impl Into<String>,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::Validation(
                "resource quantity must be greater than zero".to_string(),
            ));
        }
        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7(),
            name: name.into(),
            kind,
            quantity,
            unit: unit.into(),
            department_id: None,
            availability: Availability::Available,
            created_at: now,
            updated_at: now,
        })
    }

    /// Set the department that owns this resource.
    pub fn with_department(mut self, department_id: Uuid) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Set the availability flag.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Check whether the resource is administratively available.
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

/// Kinds of resource the portal tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Lab equipment and instruments
    Equipment,

    /// People allocated by time
    Personnel,

    /// Rooms, labs, and other facilities
    Facility,

    /// Software licenses
    Software,

    /// Anything else
    Other,
}

impl ResourceKind {
    /// Get the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equipment => "equipment",
            Self::Personnel => "personnel",
            Self::Facility => "facility",
            Self::Software => "software",
            Self::Other => "other",
        }
    }

    /// Parse kind from string representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie_domain::ResourceKind;
    ///
    /// assert_eq!(ResourceKind::parse("equipment"), Some(ResourceKind::Equipment));
    /// assert_eq!(ResourceKind::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "equipment" => Some(Self::Equipment),
            "personnel" => Some(Self::Personnel),
            "facility" => Some(Self::Facility),
            "software" => Some(Self::Software),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Administrative availability toggle for a resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// The resource can be allocated
    Available,

    /// Allocation is administratively disabled
    Unavailable,
}

impl Availability {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }

    /// Parse from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "available" => Some(Self::Available),
            "unavailable" => Some(Self::Unavailable),
            _ => None,
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_creation() {
        let resource = Resource::new("Electron microscope", ResourceKind::Equipment, 2, "unit")
            .unwrap();

        assert_eq!(resource.name, "Electron microscope");
        assert_eq!(resource.kind, ResourceKind::Equipment);
        assert_eq!(resource.quantity, 2);
        assert!(resource.is_available());
        assert!(resource.department_id.is_none());
    }

    #[test]
    fn test_resource_zero_quantity_rejected() {
        let err = Resource::new("Nothing", ResourceKind::Other, 0, "unit").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_resource_builders() {
        let dept_id = Uuid::now_v7();
        let resource = Resource::new("Cleanroom", ResourceKind::Facility, 1, "room")
            .unwrap()
            .with_department(dept_id)
            .with_availability(Availability::Unavailable);

        assert_eq!(resource.department_id, Some(dept_id));
        assert!(!resource.is_available());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ResourceKind::parse("equipment"), Some(ResourceKind::Equipment));
        assert_eq!(ResourceKind::parse("PERSONNEL"), Some(ResourceKind::Personnel));
        assert_eq!(ResourceKind::parse("invalid"), None);
    }

    #[test]
    fn test_availability_parse() {
        assert_eq!(Availability::parse("available"), Some(Availability::Available));
        assert_eq!(Availability::parse("unavailable"), Some(Availability::Unavailable));
        assert_eq!(Availability::parse("maybe"), None);
    }
}

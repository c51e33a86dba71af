//! District entity

use crate::domain::state::StateId;

/// Store-assigned district identifier
pub type DistrictId = i64;

/// The mutable columns of a district
///
/// Counters are stored as given; nothing ties `cases` to the other three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictFields {
    pub name: String,
    pub state_id: StateId,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

/// A persisted district
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    id: DistrictId,
    fields: DistrictFields,
}

impl District {
    pub fn new(id: DistrictId, fields: DistrictFields) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> DistrictId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn state_id(&self) -> StateId {
        self.fields.state_id
    }

    pub fn cases(&self) -> i64 {
        self.fields.cases
    }

    pub fn cured(&self) -> i64 {
        self.fields.cured
    }

    pub fn active(&self) -> i64 {
        self.fields.active
    }

    pub fn deaths(&self) -> i64 {
        self.fields.deaths
    }

    pub fn fields(&self) -> &DistrictFields {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_accessors() {
        let district = District::new(
            7,
            DistrictFields {
                name: "Nellore".to_string(),
                state_id: 2,
                cases: 100,
                cured: 60,
                active: 30,
                deaths: 10,
            },
        );

        assert_eq!(district.id(), 7);
        assert_eq!(district.name(), "Nellore");
        assert_eq!(district.state_id(), 2);
        assert_eq!(district.cases(), 100);
        assert_eq!(district.cured(), 60);
        assert_eq!(district.active(), 30);
        assert_eq!(district.deaths(), 10);
    }
}

//! Location hierarchy models: regions, prefectures, subprefectures, cities

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new<S: Into<String>>(id: S) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

id_type!(
    /// Identifier of a top-level region, taken from its page path
    RegionId
);
id_type!(
    /// Identifier of a prefecture within a region
    PrefectureId
);
id_type!(
    /// Identifier of a subprefecture. Not unique across groups: the site
    /// reuses these ids under different subprefecture headings.
    SubprefectureId
);
id_type!(
    /// Identifier of a city, the leaf of the location hierarchy
    CityId
);

/// Top-level geographic division of the site's location hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
}

/// Administrative division nested under a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefecture {
    pub id: PrefectureId,
    pub name: String,
}

/// Leaf location with its own forecast pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub subprefecture_id: SubprefectureId,
    pub city_name: String,
}

/// Cities grouped by subprefecture display name, then keyed by city id.
///
/// Subprefecture ids repeat across groups on the site, so the display name
/// is the only reliable outer key within one prefecture page. A rename on
/// the site changes the keys of this map; downstream consumers depend on
/// the name-keyed grouping, so it is kept as-is.
pub type SubprefectureCities = BTreeMap<String, BTreeMap<String, City>>;

/// The four-level id path addressing one city's forecast pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationIds {
    pub region_id: RegionId,
    pub prefecture_id: PrefectureId,
    pub subprefecture_id: SubprefectureId,
    pub city_id: CityId,
}

impl LocationIds {
    #[must_use]
    pub fn new(
        region_id: RegionId,
        prefecture_id: PrefectureId,
        subprefecture_id: SubprefectureId,
        city_id: CityId,
    ) -> Self {
        Self {
            region_id,
            prefecture_id,
            subprefecture_id,
            city_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_and_access() {
        let id = RegionId::new("3");
        assert_eq!(id.as_str(), "3");
        assert_eq!(id.to_string(), "3");
        assert_eq!(RegionId::from("3"), id);
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = CityId::new("13101");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"13101\"");
    }

    #[test]
    fn location_ids_keep_fields_apart() {
        let ids = LocationIds::new(
            RegionId::new("3"),
            PrefectureId::new("16"),
            SubprefectureId::new("4410"),
            CityId::new("13101"),
        );
        assert_eq!(ids.region_id.as_str(), "3");
        assert_eq!(ids.city_id.as_str(), "13101");
    }
}

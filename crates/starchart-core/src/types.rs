use serde::Serialize;

/// Coarse size category of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StarSize {
    Small,
    Medium,
    Large,
}

/// A star served by the catalog endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Star {
    pub name: &'static str,
    /// Distance from Sol in light-years.
    pub distance: u32,
    pub size: StarSize,
}

/// The fixed star catalog. Order is part of the wire contract.
pub const CATALOG: &[Star] = &[
    Star {
        name: "Sirius",
        distance: 8,
        size: StarSize::Large,
    },
    Star {
        name: "Proxima Centauri",
        distance: 4,
        size: StarSize::Small,
    },
    Star {
        name: "Alpha Centauri",
        distance: 4,
        size: StarSize::Medium,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_fixed() {
        let names: Vec<_> = CATALOG.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Sirius", "Proxima Centauri", "Alpha Centauri"]);
    }

    #[test]
    fn catalog_names_are_non_empty() {
        assert!(CATALOG.iter().all(|s| !s.name.is_empty()));
    }

    #[test]
    fn star_size_serializes_as_variant_name() {
        let json = serde_json::to_string(&StarSize::Medium).unwrap();
        assert_eq!(json, r#""Medium""#);
    }

    #[test]
    fn star_serialization() {
        let json = serde_json::to_string(&CATALOG[0]).unwrap();
        assert_eq!(json, r#"{"name":"Sirius","distance":8,"size":"Large"}"#);
    }

    #[test]
    fn catalog_serialization() {
        let json = serde_json::to_string(CATALOG).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Sirius","distance":8,"size":"Large"},{"name":"Proxima Centauri","distance":4,"size":"Small"},{"name":"Alpha Centauri","distance":4,"size":"Medium"}]"#
        );
    }
}

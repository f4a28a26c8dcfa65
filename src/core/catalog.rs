// BayLog - core/catalog.rs
//
// Fixed pick-lists offered at intake. Each list ends with the "Other"
// sentinel; the first entry is the intake default.

use crate::util::constants::OTHER;

/// Vehicle brands.
pub const BRANDS: &[&str] = &[
    "Toyota",
    "Volkswagen",
    "Mercedes-Benz",
    "BMW",
    "Audi",
    "Ford",
    "Nissan",
    "Hyundai",
    "Kia",
    "Renault",
    "Isuzu",
    "Mazda",
    "Suzuki",
    "Land Rover",
    "Jeep",
    "Mini",
    "Volvo",
    "Peugeot",
    "Citro\u{eb}n",
    "Porsche",
    OTHER,
];

/// Vehicle colours.
pub const COLORS: &[&str] = &[
    "White", "Black", "Silver", "Grey", "Blue", "Red", "Green", "Yellow", "Brown", "Beige",
    "Maroon", "Gold", OTHER,
];

/// Services offered.
pub const WASH_TYPES: &[&str] = &[
    "Classic wash (in & out)",
    "Valet wash",
    "Lights polish",
    "Body polish (Hand glaze)",
    "Engine & Chassis",
    "Carpet cleaning",
    "Leather care",
    "Cleaning seats only",
    "Roof cleaning only",
    "Aircon treatment",
    OTHER,
];

/// The three categorised record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Brand,
    Color,
    WashType,
}

impl Category {
    /// Catalogue entries for this category, in display order.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Category::Brand => BRANDS,
            Category::Color => COLORS,
            Category::WashType => WASH_TYPES,
        }
    }

    /// Intake default (first catalogue entry).
    pub fn default_value(self) -> &'static str {
        self.options()[0]
    }

    /// Field label for forms.
    pub fn label(self) -> &'static str {
        match self {
            Category::Brand => "Brand",
            Category::Color => "Color",
            Category::WashType => "Wash",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalogue_ends_with_other() {
        for category in [Category::Brand, Category::Color, Category::WashType] {
            assert_eq!(category.options().last(), Some(&OTHER), "{category:?}");
        }
    }

    #[test]
    fn test_defaults_are_first_entries() {
        assert_eq!(Category::Brand.default_value(), "Toyota");
        assert_eq!(Category::Color.default_value(), "White");
        assert_eq!(Category::WashType.default_value(), "Classic wash (in & out)");
    }
}

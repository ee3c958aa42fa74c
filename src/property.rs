/// Identifies one of the five record fields for sorting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Property {
    /// `lastName`
    LastName,
    /// `firstName`
    FirstName,
    /// `email`
    Email,
    /// `favoriteColor`
    FavoriteColor,
    /// `dateOfBirth`
    DateOfBirth,
}

impl Property {
    /// External name of the property, as it appears in serialized records and
    /// in the `field` query parameter.
    pub fn as_name(&self) -> &'static str {
        match self {
            Property::LastName => "lastName",
            Property::FirstName => "firstName",
            Property::Email => "email",
            Property::FavoriteColor => "favoriteColor",
            Property::DateOfBirth => "dateOfBirth",
        }
    }

    /// Look up a property by its external name. Unknown names yield None;
    /// callers fall back to the last name default.
    pub fn from_name(name: &str) -> Option<Property> {
        match name {
            "lastName" => Some(Property::LastName),
            "firstName" => Some(Property::FirstName),
            "email" => Some(Property::Email),
            "favoriteColor" => Some(Property::FavoriteColor),
            "dateOfBirth" => Some(Property::DateOfBirth),
            _ => None,
        }
    }
}

impl Default for Property {
    fn default() -> Property {
        Property::LastName
    }
}

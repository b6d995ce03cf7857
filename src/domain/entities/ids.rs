//! UUID-backed identifiers for non-channel entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Builds an id from a raw 128-bit value.
            #[must_use]
            pub const fn from_u128(value: u128) -> Self {
                Self(Uuid::from_u128(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self::from_u128(value)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a user.
    UserId
);
uuid_id!(
    /// Unique identifier for a user group.
    UserGroupId
);
uuid_id!(
    /// Unique identifier for a message.
    MessageId
);
uuid_id!(
    /// Unique identifier for a stamp.
    StampId
);
uuid_id!(
    /// Unique identifier for an uploaded file.
    FileId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: StampId = "7d9a5b6e-0c55-4a0f-9d0a-4d3a3d5c9e01".parse().unwrap();
        assert_eq!(id.to_string(), "7d9a5b6e-0c55-4a0f-9d0a-4d3a3d5c9e01");
        assert!("not-a-uuid".parse::<UserId>().is_err());
    }
}

use std::fmt;

// All identifiers issued by the master are opaque strings.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "with-serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn value(&self) -> &str {
                let Self(value) = self;
                value
            }

            #[must_use]
            pub fn into_value(self) -> String {
                let Self(value) = self;
                value
            }
        }

        impl From<String> for $name {
            fn from(from: String) -> Self {
                Self::new(from)
            }
        }

        impl From<&str> for $name {
            fn from(from: &str) -> Self {
                Self::new(from)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }
    };
}

define_id!(
    /// Identifies a framework registered with the master
    FrameworkId
);

define_id!(
    /// Identifies a single resource offer
    OfferId
);

define_id!(
    /// Identifies an agent node
    SlaveId
);

define_id!(
    /// Identifies an executor running on an agent
    ExecutorId
);

define_id!(
    /// Identifies a task launched by the framework
    TaskId
);

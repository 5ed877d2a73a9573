use super::{FrameworkId, OfferId, SlaveId};

/// Resources of a single agent offered to the framework
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offer {
    pub id: OfferId,
    pub framework_id: FrameworkId,
    pub slave_id: SlaveId,
    pub hostname: String,
    pub resources: Vec<Resource>,
}

impl Offer {
    /// Sum of all scalar resources with the given name, e.g. `cpus` or `mem`
    #[must_use]
    pub fn scalar_sum(&self, name: &str) -> f64 {
        self.resources
            .iter()
            .filter(|resource| resource.name == name)
            .filter_map(|resource| match resource.value {
                ResourceValue::Scalar(value) => Some(value),
                _ => None,
            })
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    pub name: String,

    /// `None` for the default role `*`
    pub role: Option<String>,

    pub value: ResourceValue,
}

impl Resource {
    pub fn scalar(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            role: None,
            value: ResourceValue::Scalar(value),
        }
    }

    pub fn ranges(name: impl Into<String>, ranges: impl IntoIterator<Item = ValueRange>) -> Self {
        Self {
            name: name.into(),
            role: None,
            value: ResourceValue::Ranges(ranges.into_iter().collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceValue {
    Scalar(f64),
    Ranges(Vec<ValueRange>),
    Set(Vec<String>),
}

/// Inclusive range, e.g. of port numbers
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    pub begin: u64,
    pub end: u64,
}

use std::{fmt, net::Ipv4Addr};

/// Describes the currently leading master
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MasterInfo {
    pub id: String,

    /// IPv4 address in network byte order, as reported by the master
    pub ip: u32,

    pub port: u16,

    /// libprocess endpoint, e.g. `master@10.0.0.1:5050`
    pub pid: Option<String>,

    pub hostname: Option<String>,

    pub version: Option<String>,
}

impl MasterInfo {
    pub fn new(id: impl Into<String>, ip: Ipv4Addr, port: u16) -> Self {
        Self {
            id: id.into(),
            ip: u32::from(ip).to_be(),
            port,
            pid: None,
            hostname: None,
            version: None,
        }
    }

    #[must_use]
    pub fn ip_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from_be(self.ip))
    }
}

impl fmt::Display for MasterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { hostname, port, .. } = self;
        if let Some(hostname) = hostname {
            write!(f, "{hostname}:{port}")
        } else {
            write!(f, "{}:{port}", self.ip_addr())
        }
    }
}

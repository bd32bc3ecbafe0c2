//! Resource paths, query keys and defaults of the IMS Operations REST API

/// Prefix prepended to every resource path
pub const URL: &str = "/";

// Resources
pub const TRANSACTION: &str = "transaction";
pub const PROGRAM: &str = "program";
pub const REGION: &str = "region";
pub const REGION_START: &str = "region/start";
pub const REGION_STOP: &str = "region/stop";

// Query keys
pub const NAMES: &str = "names";
pub const START: &str = "start";
pub const STOP: &str = "stop";
pub const ROUTE: &str = "route";
pub const ATTRIBUTES: &str = "attributes";
pub const STATUS: &str = "status";
pub const CLASS: &str = "class";
pub const QCNT_COMPARISON: &str = "qcntcomp";
pub const QCNT_VALUE: &str = "qcntval";
pub const DC: &str = "dc";
pub const MEMBER: &str = "mbr";
pub const LOCAL: &str = "local";
pub const JOB_NAME: &str = "job_name";
pub const REGION_NUMBER: &str = "reg_num";
pub const ABDUMP: &str = "abdump";
pub const CANCEL: &str = "cancel";
pub const TRANSACTION_NAME: &str = "transaction";
pub const REGION_STATUS: &str = "region";

/// Wildcard used when a query names no resources
pub const DEFAULT_NAME: &str = "*";

/// Attribute set requested when a query names none
pub const DEFAULT_ATTRIBUTE: &str = "ALL";

/// Valid range for a transaction class filter
pub const CLASS_RANGE: std::ops::RangeInclusive<u16> = 1..=999;

// IMS Connect routing headers
pub const HEADER_HOSTNAME: &str = "hostname";
pub const HEADER_PORT: &str = "port";
pub const HEADER_PLEX: &str = "plex";

//! Canonical index field names

pub const ORDER_ID: &str = "orderid";
pub const ORDER_CONFIRMATION_ID: &str = "orderconfirmationid";
/// Also the sort field name that selects the typed date comparison.
pub const ORDER_PLACED_DATE: &str = "orderplaceddate";
pub const ARTIFACT_STORE_ID: &str = "artifactstoreid";
pub const EMAIL: &str = "email";

pub const USER_ID: &str = "userid";
pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const CONTENT: &str = "content";
pub const EXTERNAL_ID: &str = "externalid";

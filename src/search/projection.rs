//! Result projection
//!
//! Reshapes a matched document into a flat, ordered output record. Mandatory
//! fields are inserted first, in a fixed order; caller-requested fields merge
//! in afterwards, skipped when a key already exists under any casing, so a
//! request can never overwrite or duplicate a mandatory entry.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::fields;
use super::params::EntityKind;
use crate::config::LinkConfig;
use crate::index::{Document, FieldValue};
use crate::Result;

/// An ordered field-name → value record. `serde_json`'s `preserve_order`
/// feature makes the map insertion-ordered.
pub type ResultRecord = serde_json::Map<String, Value>;

/// External identifiers containing this marker are profile-store internals;
/// records fall back to the user id instead.
const COMMERCE_USERS_MARKER: &str = "CommerceUsers";

pub struct ResultProjector {
    links: LinkConfig,
}

impl ResultProjector {
    pub fn new(links: LinkConfig) -> Self {
        Self { links }
    }

    pub fn project(
        &self,
        kind: EntityKind,
        document: &Document,
        requested_fields: &[String],
    ) -> Result<ResultRecord> {
        let mut record = match kind {
            EntityKind::Order => self.order_record(document)?,
            EntityKind::Customer => self.customer_record(document)?,
        };
        append_requested(&mut record, document, requested_fields)?;
        Ok(record)
    }

    fn order_record(&self, document: &Document) -> Result<ResultRecord> {
        let order_id = document.get_text(fields::ORDER_ID)?;
        let confirmation_id = document.get_text(fields::ORDER_CONFIRMATION_ID)?;
        let placed = document.get_date(fields::ORDER_PLACED_DATE)?;

        let mut record = ResultRecord::new();
        record.insert(fields::ORDER_ID.to_string(), Value::String(order_id.to_string()));
        record.insert(
            fields::ORDER_CONFIRMATION_ID.to_string(),
            Value::String(confirmation_id.to_string()),
        );
        record.insert(
            "ordertargeturl".to_string(),
            Value::String(format!("{}?target={}", self.links.order_target_url, order_id)),
        );
        record.insert(
            fields::ORDER_PLACED_DATE.to_string(),
            Value::String(to_iso_date(placed)),
        );
        Ok(record)
    }

    fn customer_record(&self, document: &Document) -> Result<ResultRecord> {
        let user_id = document.get_text(fields::USER_ID)?;
        let first_name = document.get_text(fields::FIRST_NAME)?;
        let last_name = document.get_text(fields::LAST_NAME)?;
        let email = document.get_text(fields::EMAIL)?;
        let external_id = document.get_text(fields::EXTERNAL_ID)?;

        let item_id = if external_id.contains(COMMERCE_USERS_MARKER) {
            user_id
        } else {
            external_id
        };

        let mut record = ResultRecord::new();
        record.insert("Id".to_string(), Value::String(user_id.to_string()));
        record.insert("first_name".to_string(), Value::String(first_name.to_string()));
        record.insert("last_name".to_string(), Value::String(last_name.to_string()));
        record.insert("email_address".to_string(), Value::String(email.to_string()));
        record.insert("ItemId".to_string(), Value::String(item_id.to_string()));
        record.insert("Template".to_string(), Value::String("Customer".to_string()));
        // TODO: derive LastOrderDate from the customer's orders once an
        // orders-by-customer lookup exists on the index contract; until then
        // this is an acknowledged stand-in.
        record.insert(
            "LastOrderDate".to_string(),
            Value::String(to_iso_date(Utc::now())),
        );
        record.insert(
            "customertargeturl".to_string(),
            Value::String(format!(
                "{}?target={}",
                self.links.customer_target_url, user_id
            )),
        );
        Ok(record)
    }
}

/// Merge requested fields into the record, in caller order. Keys are matched
/// case-insensitively for the existence check but inserted with the caller's
/// original casing. A field absent from the document fails the projection.
fn append_requested(
    record: &mut ResultRecord,
    document: &Document,
    requested_fields: &[String],
) -> Result<()> {
    for name in requested_fields {
        if contains_key_ci(record, name) {
            continue;
        }
        let value = document.get_field(name)?;
        let projected = match value {
            FieldValue::Date(date) => Value::String(to_iso_date(*date)),
            other => other.to_json(),
        };
        record.insert(name.clone(), projected);
    }
    Ok(())
}

fn contains_key_ci(record: &ResultRecord, name: &str) -> bool {
    record.keys().any(|key| key.eq_ignore_ascii_case(name))
}

/// ISO 8601 UTC, seconds precision: `2024-01-31T23:59:59Z`.
pub fn to_iso_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

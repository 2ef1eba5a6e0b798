//! Document builders for seeding the in-memory index

use chrono::{DateTime, TimeZone, Utc};
use merx::index::Document;

pub struct OrderBuilder {
    order_id: String,
    confirmation_id: String,
    email: String,
    store_id: String,
    placed: DateTime<Utc>,
    extra_text: Vec<(String, String)>,
    extra_dates: Vec<(String, DateTime<Utc>)>,
}

impl OrderBuilder {
    pub fn new(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            confirmation_id: format!("CONF-{order_id}"),
            email: format!("{order_id}@example.com"),
            store_id: "Store1".to_string(),
            placed: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            extra_text: Vec::new(),
            extra_dates: Vec::new(),
        }
    }

    pub fn confirmation_id(mut self, value: &str) -> Self {
        self.confirmation_id = value.to_string();
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.email = value.to_string();
        self
    }

    pub fn store(mut self, value: &str) -> Self {
        self.store_id = value.to_string();
        self
    }

    pub fn placed(mut self, value: DateTime<Utc>) -> Self {
        self.placed = value;
        self
    }

    /// Placement date offset in days from the builder default, for cheap
    /// distinct sort keys.
    pub fn placed_days_after_epoch(mut self, days: i64) -> Self {
        self.placed = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
            + chrono::Duration::days(days);
        self
    }

    pub fn text_field(mut self, name: &str, value: &str) -> Self {
        self.extra_text.push((name.to_string(), value.to_string()));
        self
    }

    pub fn date_field(mut self, name: &str, value: DateTime<Utc>) -> Self {
        self.extra_dates.push((name.to_string(), value));
        self
    }

    pub fn build(self) -> Document {
        let mut doc = Document::new()
            .with_text("orderid", self.order_id)
            .with_text("orderconfirmationid", self.confirmation_id)
            .with_text("email", self.email)
            .with_text("artifactstoreid", self.store_id)
            .with_date("orderplaceddate", self.placed);
        for (name, value) in self.extra_text {
            doc = doc.with_text(&name, value);
        }
        for (name, value) in self.extra_dates {
            doc = doc.with_date(&name, value);
        }
        doc
    }
}

pub struct CustomerBuilder {
    user_id: String,
    first_name: String,
    last_name: String,
    email: String,
    content: String,
    external_id: String,
    extra_text: Vec<(String, String)>,
}

impl CustomerBuilder {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            first_name: "Test".to_string(),
            last_name: "Customer".to_string(),
            email: format!("{user_id}@example.com"),
            content: String::new(),
            external_id: format!("profiles/{user_id}"),
            extra_text: Vec::new(),
        }
    }

    pub fn first_name(mut self, value: &str) -> Self {
        self.first_name = value.to_string();
        self
    }

    pub fn last_name(mut self, value: &str) -> Self {
        self.last_name = value.to_string();
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.email = value.to_string();
        self
    }

    pub fn content(mut self, value: &str) -> Self {
        self.content = value.to_string();
        self
    }

    pub fn external_id(mut self, value: &str) -> Self {
        self.external_id = value.to_string();
        self
    }

    pub fn text_field(mut self, name: &str, value: &str) -> Self {
        self.extra_text.push((name.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> Document {
        let mut doc = Document::new()
            .with_text("userid", self.user_id)
            .with_text("first_name", self.first_name)
            .with_text("last_name", self.last_name)
            .with_text("email", self.email)
            .with_text("content", self.content)
            .with_text("externalid", self.external_id);
        for (name, value) in self.extra_text {
            doc = doc.with_text(&name, value);
        }
        doc
    }
}

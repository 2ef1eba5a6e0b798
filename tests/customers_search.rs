//! Customer search scenarios: wildcard shapes, case sensitivity, sorting

mod support;

use axum::http::StatusCode;
use support::*;

fn seed_people(app: &TestApp) {
    app.seed_customers([
        CustomerBuilder::new("u-1")
            .first_name("John")
            .last_name("Baker")
            .email("john.baker@example.com")
            .build(),
        CustomerBuilder::new("u-2")
            .first_name("Ann")
            .last_name("Jones")
            .email("ann@example.com")
            .build(),
        CustomerBuilder::new("u-3")
            .first_name("Maria")
            .last_name("Vintner")
            .email("jo.vintner@example.com")
            .build(),
        CustomerBuilder::new("u-4")
            .first_name("Pete")
            .last_name("Smith")
            .email("pete@example.com")
            .build(),
    ]);
}

#[tokio::test]
async fn trailing_wildcard_matches_prefixes_sorted_ascending() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed_people(&app);

    let (status, payload) = app
        .search(&[
            ("itemType", "customer"),
            ("searchTerm", "jo*"),
            ("Sorting", "alast_name"),
        ])
        .await?;

    assert_status(status, StatusCode::OK, "customer search");
    // u-1 (first name John), u-2 (last name Jones), u-3 (email jo.vintner@...),
    // ascending by last_name: Baker, Jones, Vintner.
    assert_eq!(item_values(&payload, "Id")?, vec!["u-1", "u-2", "u-3"]);
    assert_eq!(total_item_count(&payload)?, 3);
    Ok(())
}

#[tokio::test]
async fn prefix_match_is_case_insensitive() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed_people(&app);

    let (_, payload) = app
        .search(&[("itemType", "customer"), ("searchTerm", "JO*")])
        .await?;
    assert_eq!(total_item_count(&payload)?, 3);
    Ok(())
}

#[tokio::test]
async fn leading_wildcard_matches_suffixes() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed_people(&app);

    let (_, payload) = app
        .search(&[
            ("itemType", "customer"),
            ("searchTerm", "*s"),
            ("Sorting", "alast_name"),
        ])
        .await?;

    // Last names ending in "s": Jones. No email/first name ends in "s".
    assert_eq!(item_values(&payload, "Id")?, vec!["u-2"]);
    Ok(())
}

#[tokio::test]
async fn unusable_wildcard_shapes_return_everything() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed_people(&app);

    for term in ["a*b", "*"] {
        let (_, payload) = app
            .search(&[("itemType", "customer"), ("searchTerm", term)])
            .await?;
        assert_eq!(total_item_count(&payload)?, 4, "term {term:?}");
    }
    Ok(())
}

#[tokio::test]
async fn exact_term_matches_names_case_insensitively() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed_people(&app);

    let (_, payload) = app
        .search(&[("itemType", "customer"), ("searchTerm", "jones")])
        .await?;
    assert_eq!(item_values(&payload, "Id")?, vec!["u-2"]);
    Ok(())
}

#[tokio::test]
async fn content_equality_is_case_sensitive() -> anyhow::Result<()> {
    let app = TestApp::new();
    app.seed_customers([
        CustomerBuilder::new("u-9").content("VIP Gold").build(),
        CustomerBuilder::new("u-10").content("standard").build(),
    ]);

    let (_, payload) = app
        .search(&[("itemType", "customer"), ("searchTerm", "VIP Gold")])
        .await?;
    assert_eq!(item_values(&payload, "Id")?, vec!["u-9"]);

    let (_, payload) = app
        .search(&[("itemType", "customer"), ("searchTerm", "vip gold")])
        .await?;
    assert_eq!(items(&payload)?.len(), 0);
    Ok(())
}

#[tokio::test]
async fn content_containment_applies_to_wildcard_terms_verbatim() -> anyhow::Result<()> {
    let app = TestApp::new();
    app.seed_customers([
        // Content literally containing the starred term.
        CustomerBuilder::new("u-20").content("promo zz* codes").build(),
        CustomerBuilder::new("u-21").content("promo zz codes").build(),
    ]);

    let (_, payload) = app
        .search(&[("itemType", "customer"), ("searchTerm", "zz*")])
        .await?;
    assert_eq!(item_values(&payload, "Id")?, vec!["u-20"]);
    Ok(())
}

#[tokio::test]
async fn customer_search_is_not_store_scoped() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed_people(&app);

    let (_, payload) = app
        .search(&[
            ("itemType", "customer"),
            ("Headers", "Environment:SomeOtherStore"),
        ])
        .await?;
    assert_eq!(total_item_count(&payload)?, 4);
    Ok(())
}

#[tokio::test]
async fn blank_term_returns_all_customers() -> anyhow::Result<()> {
    let app = TestApp::new();
    seed_people(&app);

    let (_, payload) = app
        .search(&[("itemType", "customer"), ("searchTerm", "   ")])
        .await?;
    assert_eq!(total_item_count(&payload)?, 4);
    Ok(())
}

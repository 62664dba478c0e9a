use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::BTreeSet;

mod support;

use support::{call, start_server, text, TIMEOUT};

#[tokio::test]
async fn mcp_exposes_the_nine_booking_tools() -> Result<()> {
    let home = tempfile::tempdir().context("temp dir")?;
    let service = start_server(home.path(), &[]).await?;

    let tools = tokio::time::timeout(TIMEOUT, service.list_tools(Default::default()))
        .await
        .context("timeout listing tools")??;
    let names: BTreeSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    let expected: BTreeSet<&str> = [
        "seatsurfing_login",
        "seatsurfing_list_locations",
        "seatsurfing_list_spaces",
        "seatsurfing_check_availability",
        "seatsurfing_create_booking",
        "seatsurfing_list_my_bookings",
        "seatsurfing_cancel_booking",
        "seatsurfing_refresh_spaces",
        "seatsurfing_view_availability",
    ]
    .into_iter()
    .collect();
    assert_eq!(names, expected);

    let create = tools
        .tools
        .iter()
        .find(|t| t.name == "seatsurfing_create_booking")
        .context("create_booking listed")?;
    let schema = serde_json::to_value(create.input_schema.as_ref())?;
    for field in ["space_id", "start_time", "end_time", "subject"] {
        assert!(
            schema["properties"].get(field).is_some(),
            "create_booking schema missing {field}: {schema}"
        );
    }

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn unconfigured_server_asks_for_login() -> Result<()> {
    let home = tempfile::tempdir().context("temp dir")?;
    let service = start_server(home.path(), &[]).await?;

    let result = call(&service, "seatsurfing_list_locations", json!({})).await?;
    assert_eq!(result.is_error, Some(true));
    assert!(text(&result).contains("please login"), "{}", text(&result));

    let result = call(&service, "seatsurfing_login", json!({"email": "a@example.com"})).await?;
    assert_eq!(result.is_error, Some(true));
    assert!(text(&result).contains("url is required"), "{}", text(&result));

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Once;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("DIGITAL_TICKETS_BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string())
}

pub fn tickets_url() -> String {
    format!("http://{}/api/tickets", address())
}

pub async fn create_ticket(client: &Client) -> anyhow::Result<Value> {
    let response = client.post(tickets_url()).send().await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.json::<Value>().await?;
    let ticket = body
        .get("data")
        .cloned()
        .ok_or(anyhow::anyhow!("response without data"))?;

    Ok(ticket)
}

pub async fn fetch_stats(client: &Client) -> anyhow::Result<(u64, u64, u64)> {
    let response = client
        .get(format!("{}/stats", tickets_url()))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.json::<Value>().await?;
    let count = |name: &str| body["data"][name].as_u64().unwrap();

    Ok((count("total"), count("active"), count("used")))
}

pub fn ticket_id(ticket: &Value) -> &str {
    ticket.get("id").unwrap().as_str().unwrap()
}

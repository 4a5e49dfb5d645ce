use anyhow::{Context, Result};
use tracing::info;

/// Fetch the article feed and return its item links in document order.
/// Network errors and malformed XML are fatal: with no links there is
/// nothing for the rest of the run to do.
pub async fn fetch_article_links(feed_url: &str) -> Result<Vec<String>> {
    info!("fetching article feed: {}", feed_url);
    let xml = reqwest::get(feed_url)
        .await
        .context("failed to reach feed host")?
        .error_for_status()
        .context("feed host returned an error status")?
        .text()
        .await
        .context("failed to read feed body")?;

    let links = parse_item_links(&xml)?;
    info!("found {} links", links.len());
    Ok(links)
}

/// Parse an item/link feed and return all `<item><link>` text values.
pub fn parse_item_links(xml: &str) -> Result<Vec<String>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut links = Vec::new();
    let mut in_item = false;
    let mut in_link = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(e)) => match e.name().as_ref() {
                b"item" => in_item = true,
                b"link" if in_item => in_link = true,
                _ => {}
            },
            Ok(quick_xml::events::Event::Text(e)) if in_link => {
                let link = e.unescape()?.trim().to_string();
                if !link.is_empty() {
                    links.push(link);
                }
            }
            Ok(quick_xml::events::Event::End(e)) => match e.name().as_ref() {
                b"link" => in_link = false,
                b"item" => in_item = false,
                _ => {}
            },
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!(e).context("malformed feed XML")),
            _ => {}
        }
        buf.clear();
    }
    Ok(links)
}

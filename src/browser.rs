use crate::pipeline::PageSource;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;

/// CSS locator for one listing entry row
const ENTRY_ROW: &str = "tr.athing";
/// CSS locator for the pagination affordance
const MORE_LINK: &str = "a.morelink";

/// Navigation attempts before the run fails
const MAX_NAV_ATTEMPTS: u32 = 3;
/// Fixed delay between navigation attempts
const RETRY_DELAY: Duration = Duration::from_secs(5);
/// Longest wait for listing entries to appear after navigating
const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);
/// Interval between URL polls while a click-triggered navigation settles
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// WebDriver-backed page renderer. One instance owns one session for the
/// duration of a run.
pub struct Browser {
    client: Client,
}

impl Browser {
    /// Connect to a WebDriver server, trying common local endpoints when
    /// the configured one is unreachable
    pub async fn connect(webdriver_url: &str) -> Result<Self, Box<dyn Error>> {
        match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Ok(Self { client });
            }
            Err(e) => {
                ::log::warn!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            }
        }

        let fallback_urls = [
            "http://localhost:9515", // ChromeDriver default
            "http://localhost:4444", // Selenium/geckodriver default
            "http://127.0.0.1:4444", // Try with IP instead of localhost
        ];

        for url in fallback_urls {
            if url == webdriver_url {
                continue; // Skip if it's the same as the one we already tried
            }
            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = ClientBuilder::native().connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(Self { client });
            }
        }

        Err(format!(
            "could not reach a WebDriver server (tried {} and fallbacks); \
             start one or set WEBDRIVER_URL",
            webdriver_url
        )
        .into())
    }

    /// Close the WebDriver session. Failures are logged, not propagated.
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }

    async fn wait_for_entries(&mut self) -> Result<(), CmdError> {
        self.client
            .wait()
            .at_most(SETTLE_TIMEOUT)
            .for_element(Locator::Css(ENTRY_ROW))
            .await?;
        Ok(())
    }
}

impl PageSource for Browser {
    async fn open(&mut self, url: &str) -> Result<(), Box<dyn Error>> {
        // Listing pages occasionally come back without entries while the
        // site is rate limiting. Bounded retries with a fixed delay.
        for attempt in 1..=MAX_NAV_ATTEMPTS {
            self.client.goto(url).await?;
            match self.wait_for_entries().await {
                Ok(()) => return Ok(()),
                Err(CmdError::WaitTimeout) => {
                    if attempt == MAX_NAV_ATTEMPTS {
                        break;
                    }
                    ::log::warn!(
                        "No entries after loading {} (attempt {}/{}); retrying in {:?}",
                        url,
                        attempt,
                        MAX_NAV_ATTEMPTS,
                        RETRY_DELAY
                    );
                    sleep(RETRY_DELAY).await;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(format!(
            "listing at {} did not load after {} attempts",
            url, MAX_NAV_ATTEMPTS
        )
        .into())
    }

    async fn page_html(&mut self) -> Result<String, Box<dyn Error>> {
        Ok(self.client.source().await?)
    }

    async fn advance(&mut self) -> Result<bool, Box<dyn Error>> {
        let more = match self.client.find(Locator::Css(MORE_LINK)).await {
            Ok(el) => el,
            Err(e) if e.is_no_such_element() => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        let before = self.client.current_url().await?;
        more.click().await?;

        // Clicking navigates in place; hold the driver back until the
        // session points at the next page so it never re-reads the one it
        // already extracted.
        let mut waited = Duration::ZERO;
        while self.client.current_url().await? == before {
            if waited >= SETTLE_TIMEOUT {
                return Err("next page did not load after following the more link".into());
            }
            sleep(POLL_INTERVAL).await;
            waited += POLL_INTERVAL;
        }
        self.wait_for_entries().await?;

        Ok(true)
    }
}

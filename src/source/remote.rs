/// Remote source: downloads a whole year of prayer times over HTTP

use std::time::Duration;

use reqwest::blocking::Client;

use crate::source::{ScheduleSource, SourceError, YearDataset};

/// Default location of the yearly datasets; `{year}` is substituted
pub const DEFAULT_SOURCE_URL: &str =
    "https://ibad-al-rahman.github.io/prayer-times/v1/year/days/{year}.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches yearly datasets from a URL template
#[derive(Debug, Clone)]
pub struct HttpSource {
    url_template: String,
    client: Client,
}

impl HttpSource {
    /// Create a source for `url_template`, which should contain `{year}`
    pub fn new(url_template: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            url_template: url_template.into(),
            client,
        })
    }

    /// The concrete URL for `year`
    pub fn url_for(&self, year: i32) -> String {
        self.url_template.replace("{year}", &year.to_string())
    }
}

impl ScheduleSource for HttpSource {
    fn year(&self, year: i32) -> Result<YearDataset, SourceError> {
        let url = self.url_for(year);
        tracing::info!("Fetching prayer times for {} from {}", year, url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                year,
                status: status.as_u16(),
            });
        }

        let dataset: YearDataset = response.json()?;
        tracing::info!("Fetched {} days for {}", dataset.len(), year);
        Ok(dataset)
    }
}

use std::time::Duration;

use async_trait::async_trait;
use data_encoding::HEXUPPER;
use eyre::{eyre, WrapErr};
use reqwest::StatusCode;
use sha1::{Digest, Sha1};

/// One `SUFFIX:COUNT` record of a range response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    pub suffix: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachVerdict {
    /// Local policy already rejected the candidate, the corpus was not queried.
    NotChecked,
    Clean,
    Breached { count: u64 },
}

/// The remote corpus dependency, narrowed to the single range query so tests
/// can substitute an in-memory stub.
#[async_trait]
pub trait RangeLookup: Send + Sync {
    async fn range(&self, prefix: &str) -> eyre::Result<Vec<RangeEntry>>;
}

pub struct HibpRange {
    client: reqwest::Client,
    base_url: String,
}

impl HibpRange {
    pub fn new(base_url: &str, timeout: Duration) -> eyre::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RangeLookup for HibpRange {
    async fn range(&self, prefix: &str) -> eyre::Result<Vec<RangeEntry>> {
        let url = format!("{}/range/{}", self.base_url, prefix);

        let resp = self.client
            .get(&url)
            .header("Add-Padding", "true") // pads the response against size side-channels
            .send().await?;

        match resp.status() {
            StatusCode::OK => parse_range(&resp.text().await?),
            status => Err(eyre!("range endpoint responded with status code {}", status)),
        }
    }
}

fn parse_range(body: &str) -> eyre::Result<Vec<RangeEntry>> {
    body.lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (suffix, count) = line
                .split_once(':')
                .ok_or_else(|| eyre!("malformed range record: {:?}", line))?;

            Ok(RangeEntry {
                suffix: suffix.to_string(),
                count: count
                    .parse()
                    .wrap_err_with(|| format!("malformed range count: {:?}", line))?,
            })
        })
        .collect()
}

pub struct BreachChecker {
    lookup: Box<dyn RangeLookup>,
}

impl BreachChecker {
    pub fn new(lookup: Box<dyn RangeLookup>) -> Self {
        Self { lookup }
    }

    pub fn over_http(base_url: &str, timeout: Duration) -> eyre::Result<Self> {
        Ok(Self::new(Box::new(HibpRange::new(base_url, timeout)?)))
    }

    /// Queries the corpus with the first 5 hex chars of the SHA-1 digest and
    /// confirms membership locally. Neither the candidate nor the rest of the
    /// digest ever leaves the process.
    pub async fn check(&self, password: &str) -> eyre::Result<BreachVerdict> {
        let hash = HEXUPPER.encode(Sha1::digest(password.as_bytes()).as_slice());
        let (prefix, suffix) = hash.split_at(common::consts::HASH_PREFIX_LEN);

        let entries = self.lookup.range(prefix).await?;

        // exact, case-sensitive: the corpus serves uppercase hex like ours
        for entry in entries {
            if entry.suffix == suffix {
                return Ok(BreachVerdict::Breached { count: entry.count });
            }
        }

        Ok(BreachVerdict::Clean)
    }
}

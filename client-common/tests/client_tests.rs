use std::sync::Arc;

use async_trait::async_trait;
use client_common::CheckClient;
use common::api::PasswordAssessment;
use common::policy::PasswordPolicy;
use eyre::eyre;

use server::config::Config;
use server::hibp::{BreachChecker, RangeEntry, RangeLookup};
use server::state::State;

// passes every local rule and is not deny-listed
const GOOD: &str = "Str0ng&Secure!";

struct FixedRange(Vec<RangeEntry>);

#[async_trait]
impl RangeLookup for FixedRange {
    async fn range(&self, _prefix: &str) -> eyre::Result<Vec<RangeEntry>> {
        Ok(self.0.clone())
    }
}

struct FailingRange;

#[async_trait]
impl RangeLookup for FailingRange {
    async fn range(&self, _prefix: &str) -> eyre::Result<Vec<RangeEntry>> {
        Err(eyre!("connection reset by peer"))
    }
}

/// Serves the real route on an ephemeral port and returns the endpoint URL.
fn spawn_service(lookup: Box<dyn RangeLookup>) -> String {
    let state = Arc::new(State {
        config: Config::default(),
        policy: PasswordPolicy::default(),
        breach: BreachChecker::new(lookup),
    });

    let (addr, serving) =
        warp::serve(server::http_server::route(state)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(serving);

    format!("http://{}/api/check-password", addr)
}

#[tokio::test]
async fn decodes_assessments_from_a_live_service() {
    let url = spawn_service(Box::new(FixedRange(Vec::new())));
    let client = CheckClient::new(&url);

    assert_eq!(client.check(GOOD).await, PasswordAssessment::secure());

    let weak = client.check("short").await;
    assert!(weak.is_weak);
    assert!(!weak.is_breached);
    assert!(!weak.issues.is_empty());
}

#[tokio::test]
async fn relays_the_degraded_assessment_of_the_service() {
    let url = spawn_service(Box::new(FailingRange));
    let client = CheckClient::new(&url);

    let assessment = client.check(GOOD).await;
    assert!(assessment.is_degraded());
}

#[tokio::test]
async fn unreachable_service_synthesizes_the_degraded_assessment() {
    // bind then drop to get a port nothing listens on
    let url = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/api/check-password", addr)
    };

    let client = CheckClient::new(&url);
    let assessment = client.check(GOOD).await;

    assert_eq!(assessment, PasswordAssessment::degraded());
}

#[tokio::test]
async fn http_errors_from_the_service_also_degrade() {
    let url = spawn_service(Box::new(FixedRange(Vec::new())));
    // wrong path, the service answers with a plain 404
    let client = CheckClient::new(&url.replace("/check-password", "/nope"));

    assert_eq!(client.check(GOOD).await, PasswordAssessment::degraded());
}

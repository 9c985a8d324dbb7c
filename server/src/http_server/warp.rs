use std::{net::SocketAddr, str::FromStr, sync::Arc};

use common::api::{self, ErrorBody, PasswordAssessment};
use eyre::eyre;
use tracing::{error, info, info_span, Instrument};
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::{Filter, Rejection, Reply};

use crate::state::State;

pub async fn run(state: State) -> eyre::Result<()> {
    let addr = SocketAddr::from_str(&state.config.listen_addr)?;
    let (addr, serving) = warp::serve(route(Arc::new(state))).try_bind_ephemeral(addr)?;

    info!(%addr, "listening");
    serving.await;

    Ok(())
}

pub fn route(state: Arc<State>) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::post()
        .and(warp::path!("api" / "check-password"))
        .and(warp::body::content_length_limit(1024 * 16)) // 16k
        .and(warp::body::bytes())
        .and(warp::addr::remote())
        .and_then(move |body, addr| check(state.clone(), body, addr))
        .with(
            warp::cors()
                .allow_any_origin()
                .allow_methods(vec!["POST", "OPTIONS"])
                .allow_headers(vec!["content-type", "authorization"]),
        )
}

async fn check(
    state: Arc<State>,
    body: Bytes,
    addr: Option<SocketAddr>,
) -> Result<impl Reply, Rejection> {
    let result = check_impl(&state, &body, &addr).await;

    if let Err(e) = &result {
        log_error(e);
    }

    Ok(reply_for(result))
}

async fn check_impl(
    state: &State,
    body: &Bytes,
    addr: &Option<SocketAddr>,
) -> api::Result<PasswordAssessment> {
    let password = decode(body)?;

    state
        .check_password(&password)
        .instrument(info_span!("check_password", peer = ?addr))
        .await
}

/* a body that is not JSON at all is an internal fault (500), a JSON body
   without a string `password` is the caller's mistake (400) */
fn decode(body: &Bytes) -> api::Result<String> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| eyre!(e).wrap_err("invalid request body"))?;

    match value.get("password") {
        Some(serde_json::Value::String(password)) => Ok(password.clone()),
        _ => Err(api::Error::PasswordRequired),
    }
}

fn reply_for(result: api::Result<PasswordAssessment>) -> impl Reply {
    match result {
        Ok(assessment) => {
            warp::reply::with_status(warp::reply::json(&assessment), StatusCode::OK)
        }
        Err(api::Error::PasswordRequired) => warp::reply::with_status(
            warp::reply::json(&ErrorBody::password_required()),
            StatusCode::BAD_REQUEST,
        ),
        Err(api::Error::ServerSideError(report)) => warp::reply::with_status(
            warp::reply::json(&ErrorBody::internal(format!("{:#}", report))),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    }
}

fn log_error(e: &api::Error) {
    match e {
        api::Error::ServerSideError(_) => error!("{:?}", e),
        _ => info!("{}", e),
    }
}

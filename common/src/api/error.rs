use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /* expected request errors that map to a 4xx status and must be handled by the client */

    #[error("Password is required")]
    PasswordRequired,

    /* execution errors which interrupted request processing but fall outside normal
       operation. Only a generic message reaches the response body; the full chain
       stays in the server logs. Similar to http 500 code. */
    #[error("ServerSideError({0:#?})")]
    ServerSideError(#[from] eyre::Report),
}

pub type Result<T> = std::result::Result<T, Error>;

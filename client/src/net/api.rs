//! HTTP auth gateway for the same-origin API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds get
//! stubs that report the network as unavailable, which keeps the crate
//! compiling headless for tests.
//!
//! ERROR HANDLING
//! ==============
//! `Err` means the request never produced a usable response (transport
//! failure or unparsable body); an application-level rejection comes
//! back as `Ok` with `success: false`, including on a 400 status, since
//! the body is decoded regardless of the status code.

#![allow(clippy::unused_async)]

use crate::controller::AuthGateway;
#[cfg(feature = "csr")]
use crate::net::types::LoginRequest;
use crate::net::types::LoginResponse;

/// Gateway speaking to `/api/login` and `/api/logout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGateway;

impl AuthGateway for HttpGateway {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, String> {
        #[cfg(feature = "csr")]
        {
            let payload = LoginRequest {
                username: username.to_owned(),
                password: password.to_owned(),
            };
            let resp = gloo_net::http::Request::post("/api/login")
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username, password);
            Err("not available outside the browser".to_owned())
        }
    }

    async fn logout(&self) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            gloo_net::http::Request::post("/api/logout")
                .send()
                .await
                .map_err(|e| e.to_string())?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err("not available outside the browser".to_owned())
        }
    }
}

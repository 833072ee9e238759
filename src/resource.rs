//! Resource base: a DTO bound to its URI and to the session it came from.
//!
//! The DTO types in [`crate::models`] are plain data; a `Resource<T>` adds
//! fetch and persistence on top of them. It derefs to `T`, so the typed
//! getters and fluent setters of the DTO are used directly on the resource:
//!
//! ```ignore
//! let mut rule = Resource::at("qos_policies/p1/qos_bw_limit_rules", QosRuleBwLimit::default(), auth)?;
//! rule.policy_id(policy_id).max_kbps(1000).max_burst_kb(50);
//! rule.create().await?;
//! ```
use std::ops::{Deref, DerefMut};

use hyper::header::HeaderValue;
use hyper::Method;
use log::{debug, error, trace};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    auth::Auth,
    http::{serialize_request, HttpRequest, HttpResponse, ACCEPT, CONTENT_TYPE, LOCATION},
    media_type::MediaType,
    Error, Result,
};

/// A document type exchanged with the API under a vendor media type.
pub trait Dto: Serialize + DeserializeOwned + Send + Sync {
    const MEDIA_TYPE: MediaType;

    /// The URI the server reported for this document, if any.
    fn self_uri(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct Resource<T: Dto> {
    uri: String,
    dto: T,
    auth: Auth,
}

impl<T: Dto> Resource<T> {
    pub fn new<S: AsRef<str>>(uri: S, dto: T, auth: Auth) -> Self {
        Self {
            uri: uri.as_ref().into(),
            dto,
            auth,
        }
    }

    /// Like `new`, with `path` taken relative to the API root of `auth`.
    pub fn at<S: AsRef<str>>(path: S, dto: T, auth: Auth) -> Result<Self> {
        let uri = auth.resolve(path.as_ref())?;
        Ok(Self::new(uri, dto, auth))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn dto(&self) -> &T {
        &self.dto
    }

    pub fn dto_mut(&mut self) -> &mut T {
        &mut self.dto
    }

    pub fn into_dto(self) -> T {
        self.dto
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn media_type(&self) -> MediaType {
        T::MEDIA_TYPE
    }

    /// Reload the document from `uri`.
    pub async fn get(&mut self) -> Result<()> {
        let request =
            HttpRequest::new(Method::GET, &self.uri, None).with_header(ACCEPT, media_type::<T>());
        let res = self.send(request).await?;
        match res.content() {
            Some(body) => {
                self.dto = decode(body)?;
                Ok(())
            }
            None => {
                error!("Empty body fetching {}", self.uri);
                Err(Error::Decode(format!("empty body from {}", self.uri)))
            }
        }
    }

    /// POST the document to `uri`, which names the parent collection. On
    /// success the resource points at the created document: the `Location`
    /// header if the server sent one, else the `uri` of the returned body.
    pub async fn create(&mut self) -> Result<()> {
        let request = HttpRequest::new(Method::POST, &self.uri, Some(self.encode()?))
            .with_header(CONTENT_TYPE, media_type::<T>())
            .with_header(ACCEPT, media_type::<T>());
        let res = self.send(request).await?;

        // point at the created document even when the body is unreadable
        let location = res.header(LOCATION).map(str::to_string);
        if let Some(location) = &location {
            self.uri = location.clone();
        }
        if let Some(body) = res.content() {
            self.dto = decode(body)?;
        }
        if location.is_none() {
            if let Some(uri) = self.dto.self_uri() {
                self.uri = uri.to_string();
            }
        }
        Ok(())
    }

    /// PUT the document to `uri`.
    pub async fn update(&mut self) -> Result<()> {
        let request = HttpRequest::new(Method::PUT, &self.uri, Some(self.encode()?))
            .with_header(CONTENT_TYPE, media_type::<T>());
        let res = self.send(request).await?;
        if let Some(body) = res.content() {
            self.dto = decode(body)?;
        }
        Ok(())
    }

    pub async fn delete(&self) -> Result<()> {
        let request = HttpRequest::new(Method::DELETE, &self.uri, None);
        self.send(request).await?;
        Ok(())
    }

    fn encode(&self) -> Result<String> {
        serde_json::to_string(&self.dto).map_err(|e| {
            error!("Fail to encode {}: {e}", T::MEDIA_TYPE);
            Error::Encode(e.to_string())
        })
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let request = self.auth.authorize(request);
        debug!("{} {} ({})", request.method, request.uri, T::MEDIA_TYPE);
        trace!("{}", serialize_request(&request));

        let res = self.auth.transport().execute(request).await?;
        if !res.is_success() {
            let body = res.body.clone().unwrap_or_default();
            error!("{} answered {}: {body}", self.uri, res.status);
            return Err(Error::Status {
                status: res.status,
                body,
            });
        }
        Ok(res)
    }
}

fn media_type<T: Dto>() -> HeaderValue {
    HeaderValue::from_static(T::MEDIA_TYPE.as_str())
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        error!("Fail to decode payload: {e}");
        Error::Decode(e.to_string())
    })
}

impl<T: Dto> Deref for Resource<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.dto
    }
}

impl<T: Dto> DerefMut for Resource<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.dto
    }
}
